//! Synchronous capabilities.
//!
//! Each operation comes as a pair: a raising form returning `Result` and a
//! non-raising form reporting through an [`ErrorCode`]. Both are required.

use crate::buffer::{ConstBufferSequence, MutableBufferSequence};
use crate::error::{ErrorCode, Result};

/// Raising form of a synchronous read.
pub trait ReadSome {
    /// Read some bytes into `buffers`, blocking until at least one byte is
    /// transferred or an error occurs.
    fn read_some<B>(&mut self, buffers: &mut B) -> Result<usize>
    where
        B: MutableBufferSequence + ?Sized;
}

/// Non-raising form of a synchronous read.
pub trait ReadSomeEc {
    /// Like [`ReadSome::read_some`], but the failure goes to `ec` and the
    /// byte count is returned either way.
    fn read_some_ec<B>(&mut self, buffers: &mut B, ec: &mut ErrorCode) -> usize
    where
        B: MutableBufferSequence + ?Sized;
}

/// Raising form of a synchronous write.
pub trait WriteSome {
    /// Write some bytes from `buffers`, blocking until at least one byte is
    /// transferred or an error occurs.
    fn write_some<B>(&mut self, buffers: &B) -> Result<usize>
    where
        B: ConstBufferSequence + ?Sized;
}

/// Non-raising form of a synchronous write.
pub trait WriteSomeEc {
    fn write_some_ec<B>(&mut self, buffers: &B, ec: &mut ErrorCode) -> usize
    where
        B: ConstBufferSequence + ?Sized;
}

/// Synchronous read capability.
pub trait SyncReadStream: ReadSome + ReadSomeEc {}

impl<T: ReadSome + ReadSomeEc + ?Sized> SyncReadStream for T {}

/// Synchronous write capability.
pub trait SyncWriteStream: WriteSome + WriteSomeEc {}

impl<T: WriteSome + WriteSomeEc + ?Sized> SyncWriteStream for T {}

/// Synchronous read and write.
pub trait SyncStream: SyncReadStream + SyncWriteStream {}

impl<T: SyncReadStream + SyncWriteStream + ?Sized> SyncStream for T {}

// =============================================================================
// Forwarding
// =============================================================================

impl<S: ReadSome + ?Sized> ReadSome for &mut S {
    #[inline]
    fn read_some<B>(&mut self, buffers: &mut B) -> Result<usize>
    where
        B: MutableBufferSequence + ?Sized,
    {
        (**self).read_some(buffers)
    }
}

impl<S: ReadSomeEc + ?Sized> ReadSomeEc for &mut S {
    #[inline]
    fn read_some_ec<B>(&mut self, buffers: &mut B, ec: &mut ErrorCode) -> usize
    where
        B: MutableBufferSequence + ?Sized,
    {
        (**self).read_some_ec(buffers, ec)
    }
}

impl<S: WriteSome + ?Sized> WriteSome for &mut S {
    #[inline]
    fn write_some<B>(&mut self, buffers: &B) -> Result<usize>
    where
        B: ConstBufferSequence + ?Sized,
    {
        (**self).write_some(buffers)
    }
}

impl<S: WriteSomeEc + ?Sized> WriteSomeEc for &mut S {
    #[inline]
    fn write_some_ec<B>(&mut self, buffers: &B, ec: &mut ErrorCode) -> usize
    where
        B: ConstBufferSequence + ?Sized,
    {
        (**self).write_some_ec(buffers, ec)
    }
}

#[cfg(feature = "alloc")]
mod boxed {
    use super::*;
    use alloc::boxed::Box;

    impl<S: ReadSome + ?Sized> ReadSome for Box<S> {
        #[inline]
        fn read_some<B>(&mut self, buffers: &mut B) -> Result<usize>
        where
            B: MutableBufferSequence + ?Sized,
        {
            (**self).read_some(buffers)
        }
    }

    impl<S: ReadSomeEc + ?Sized> ReadSomeEc for Box<S> {
        #[inline]
        fn read_some_ec<B>(&mut self, buffers: &mut B, ec: &mut ErrorCode) -> usize
        where
            B: MutableBufferSequence + ?Sized,
        {
            (**self).read_some_ec(buffers, ec)
        }
    }

    impl<S: WriteSome + ?Sized> WriteSome for Box<S> {
        #[inline]
        fn write_some<B>(&mut self, buffers: &B) -> Result<usize>
        where
            B: ConstBufferSequence + ?Sized,
        {
            (**self).write_some(buffers)
        }
    }

    impl<S: WriteSomeEc + ?Sized> WriteSomeEc for Box<S> {
        #[inline]
        fn write_some_ec<B>(&mut self, buffers: &B, ec: &mut ErrorCode) -> usize
        where
            B: ConstBufferSequence + ?Sized,
        {
            (**self).write_some_ec(buffers, ec)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::buffer::buffer_copy;
    use crate::error::Error;

    /// Reads from a fixed byte string, then reports end of stream.
    struct Source {
        data: &'static [u8],
    }

    impl ReadSome for Source {
        fn read_some<B>(&mut self, buffers: &mut B) -> Result<usize>
        where
            B: MutableBufferSequence + ?Sized,
        {
            if self.data.is_empty() {
                return Err(Error::Eof);
            }
            let n = buffer_copy(buffers, self.data);
            self.data = &self.data[n..];
            Ok(n)
        }
    }

    impl ReadSomeEc for Source {
        fn read_some_ec<B>(&mut self, buffers: &mut B, ec: &mut ErrorCode) -> usize
        where
            B: MutableBufferSequence + ?Sized,
        {
            ec.assign(self.read_some(buffers))
        }
    }

    fn drain<S: SyncReadStream>(mut stream: S) -> (usize, ErrorCode) {
        let mut buf = [0u8; 4];
        let mut total = 0;
        let mut ec = ErrorCode::new();
        loop {
            let n = stream.read_some_ec(&mut buf, &mut ec);
            if ec.is_err() {
                return (total, ec);
            }
            total += n;
        }
    }

    #[test]
    fn test_both_forms_agree() {
        let mut source = Source { data: b"abcdef" };
        let mut buf = [0u8; 4];
        assert_eq!(source.read_some(&mut buf), Ok(4));
        assert_eq!(&buf, b"abcd");

        let mut ec = ErrorCode::new();
        assert_eq!(source.read_some_ec(&mut buf, &mut ec), 2);
        assert!(!ec.is_err());
        assert_eq!(source.read_some_ec(&mut buf, &mut ec), 0);
        assert_eq!(ec.error(), Some(&Error::Eof));
    }

    #[test]
    fn test_forwarding_through_mut_ref() {
        let mut source = Source { data: b"0123456789" };
        let (total, mut ec) = drain(&mut source);
        assert_eq!(total, 10);
        assert_eq!(ec.take(), Some(Error::Eof));
    }

    #[cfg(feature = "alloc")]
    #[test]
    fn test_forwarding_through_box() {
        let (total, _) = drain(alloc::boxed::Box::new(Source { data: b"xyz" }));
        assert_eq!(total, 3);
    }
}
