//! Asynchronous capabilities.
//!
//! An asynchronous operation returns nothing. It takes ownership of its
//! buffers and a completion handler, and later hands both the outcome and the
//! buffers back through the handler, on the stream's executor.

use crate::buffer::{ConstBufferSequence, MutableBufferSequence};
use crate::error::Result;
use crate::executor::HasExecutor;

/// Completion handler for an asynchronous read.
///
/// Any `FnOnce(Result<usize>, B) + Send + 'static` closure is a handler.
pub trait ReadHandler<B>: Send + 'static {
    fn complete(self, result: Result<usize>, buffers: B);
}

impl<B, F> ReadHandler<B> for F
where
    F: FnOnce(Result<usize>, B) + Send + 'static,
{
    #[inline]
    fn complete(self, result: Result<usize>, buffers: B) {
        self(result, buffers)
    }
}

/// Completion handler for an asynchronous write.
pub trait WriteHandler<B>: Send + 'static {
    fn complete(self, result: Result<usize>, buffers: B);
}

impl<B, F> WriteHandler<B> for F
where
    F: FnOnce(Result<usize>, B) + Send + 'static,
{
    #[inline]
    fn complete(self, result: Result<usize>, buffers: B) {
        self(result, buffers)
    }
}

/// Initiating function of an asynchronous read.
pub trait AsyncReadSome {
    /// Start reading some bytes into `buffers`. `handler` receives the byte
    /// count (or error) and the buffers once the read finishes.
    fn async_read_some<B, H>(&mut self, buffers: B, handler: H)
    where
        B: MutableBufferSequence + Send + 'static,
        H: ReadHandler<B>;
}

/// Initiating function of an asynchronous write.
pub trait AsyncWriteSome {
    /// Start writing some bytes from `buffers`.
    fn async_write_some<B, H>(&mut self, buffers: B, handler: H)
    where
        B: ConstBufferSequence + Send + 'static,
        H: WriteHandler<B>;
}

/// Asynchronous read capability.
pub trait AsyncReadStream: HasExecutor + AsyncReadSome {}

impl<T: HasExecutor + AsyncReadSome + ?Sized> AsyncReadStream for T {}

/// Asynchronous write capability.
pub trait AsyncWriteStream: HasExecutor + AsyncWriteSome {}

impl<T: HasExecutor + AsyncWriteSome + ?Sized> AsyncWriteStream for T {}

/// Asynchronous read and write.
pub trait AsyncStream: AsyncReadStream + AsyncWriteStream {}

impl<T: AsyncReadStream + AsyncWriteStream + ?Sized> AsyncStream for T {}

// =============================================================================
// Forwarding
// =============================================================================

impl<S: AsyncReadSome + ?Sized> AsyncReadSome for &mut S {
    #[inline]
    fn async_read_some<B, H>(&mut self, buffers: B, handler: H)
    where
        B: MutableBufferSequence + Send + 'static,
        H: ReadHandler<B>,
    {
        (**self).async_read_some(buffers, handler)
    }
}

impl<S: AsyncWriteSome + ?Sized> AsyncWriteSome for &mut S {
    #[inline]
    fn async_write_some<B, H>(&mut self, buffers: B, handler: H)
    where
        B: ConstBufferSequence + Send + 'static,
        H: WriteHandler<B>,
    {
        (**self).async_write_some(buffers, handler)
    }
}

#[cfg(feature = "alloc")]
impl<S: AsyncReadSome + ?Sized> AsyncReadSome for alloc::boxed::Box<S> {
    #[inline]
    fn async_read_some<B, H>(&mut self, buffers: B, handler: H)
    where
        B: MutableBufferSequence + Send + 'static,
        H: ReadHandler<B>,
    {
        (**self).async_read_some(buffers, handler)
    }
}

#[cfg(feature = "alloc")]
impl<S: AsyncWriteSome + ?Sized> AsyncWriteSome for alloc::boxed::Box<S> {
    #[inline]
    fn async_write_some<B, H>(&mut self, buffers: B, handler: H)
    where
        B: ConstBufferSequence + Send + 'static,
        H: WriteHandler<B>,
    {
        (**self).async_write_some(buffers, handler)
    }
}

#[cfg(all(test, feature = "std"))]
mod tests {
    use super::*;
    use crate::buffer::buffer_copy;
    use crate::executor::{Executor, InlineExecutor};
    use std::sync::{Arc, Mutex};

    /// Echoes whatever was last written back to the next reader.
    #[derive(Default)]
    struct Loopback {
        pending: Arc<Mutex<Vec<u8>>>,
    }

    impl HasExecutor for Loopback {
        type Executor = InlineExecutor;

        fn executor(&self) -> InlineExecutor {
            InlineExecutor
        }
    }

    impl AsyncReadSome for Loopback {
        fn async_read_some<B, H>(&mut self, mut buffers: B, handler: H)
        where
            B: MutableBufferSequence + Send + 'static,
            H: ReadHandler<B>,
        {
            let pending = Arc::clone(&self.pending);
            self.executor().execute(move || {
                let mut data = pending.lock().unwrap();
                let n = buffer_copy(&mut buffers, data.as_slice());
                data.drain(..n);
                handler.complete(Ok(n), buffers);
            });
        }
    }

    impl AsyncWriteSome for Loopback {
        fn async_write_some<B, H>(&mut self, buffers: B, handler: H)
        where
            B: ConstBufferSequence + Send + 'static,
            H: WriteHandler<B>,
        {
            let pending = Arc::clone(&self.pending);
            self.executor().execute(move || {
                let mut data = pending.lock().unwrap();
                for chunk in buffers.buffers() {
                    data.extend_from_slice(chunk);
                }
                let n = buffers.buffer_size();
                drop(data);
                handler.complete(Ok(n), buffers);
            });
        }
    }

    fn round_trip<S: AsyncStream>(stream: &mut S) -> Vec<u8> {
        let out = Arc::new(Mutex::new(Vec::new()));
        stream.async_write_some(b"ping".to_vec(), |res: Result<usize>, _buf: Vec<u8>| {
            assert_eq!(res, Ok(4));
        });
        let sink = Arc::clone(&out);
        stream.async_read_some(vec![0u8; 8], move |res: Result<usize>, buf: Vec<u8>| {
            let n = res.unwrap();
            sink.lock().unwrap().extend_from_slice(&buf[..n]);
        });
        let result = out.lock().unwrap().clone();
        result
    }

    #[test]
    fn test_handlers_receive_outcome_and_buffers() {
        let mut stream = Loopback::default();
        assert_eq!(round_trip(&mut stream), b"ping");
    }

    #[test]
    fn test_forwarding_through_box() {
        let mut stream = Box::new(Loopback::default());
        assert_eq!(round_trip(&mut stream), b"ping");
    }
}
