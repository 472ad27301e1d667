//! Buffer sequences.
//!
//! A buffer sequence is an ordered list of byte slices treated as one
//! logical buffer. Reads fill a [`MutableBufferSequence`]; writes drain a
//! [`ConstBufferSequence`]. A single slice is a sequence of length one.

#[cfg(feature = "alloc")]
use alloc::{boxed::Box, vec::Vec};

/// A sequence of read-only byte buffers.
pub trait ConstBufferSequence {
    /// Iterate over the buffers in order.
    fn buffers(&self) -> impl Iterator<Item = &[u8]>;

    /// Total number of bytes across all buffers.
    #[inline]
    fn buffer_size(&self) -> usize {
        self.buffers().map(<[u8]>::len).sum()
    }
}

/// A sequence of writable byte buffers.
pub trait MutableBufferSequence: ConstBufferSequence {
    /// Iterate mutably over the buffers in order.
    fn buffers_mut(&mut self) -> impl Iterator<Item = &mut [u8]>;
}

// =============================================================================
// Single contiguous buffers
// =============================================================================

impl ConstBufferSequence for [u8] {
    #[inline]
    fn buffers(&self) -> impl Iterator<Item = &[u8]> {
        core::iter::once(self)
    }
}

impl MutableBufferSequence for [u8] {
    #[inline]
    fn buffers_mut(&mut self) -> impl Iterator<Item = &mut [u8]> {
        core::iter::once(self)
    }
}

impl<const N: usize> ConstBufferSequence for [u8; N] {
    #[inline]
    fn buffers(&self) -> impl Iterator<Item = &[u8]> {
        core::iter::once(self.as_slice())
    }
}

impl<const N: usize> MutableBufferSequence for [u8; N] {
    #[inline]
    fn buffers_mut(&mut self) -> impl Iterator<Item = &mut [u8]> {
        core::iter::once(self.as_mut_slice())
    }
}

#[cfg(feature = "alloc")]
impl ConstBufferSequence for Vec<u8> {
    #[inline]
    fn buffers(&self) -> impl Iterator<Item = &[u8]> {
        core::iter::once(self.as_slice())
    }
}

#[cfg(feature = "alloc")]
impl MutableBufferSequence for Vec<u8> {
    #[inline]
    fn buffers_mut(&mut self) -> impl Iterator<Item = &mut [u8]> {
        core::iter::once(self.as_mut_slice())
    }
}

// =============================================================================
// Scatter/gather lists
// =============================================================================

impl<'b> ConstBufferSequence for [&'b [u8]] {
    #[inline]
    fn buffers(&self) -> impl Iterator<Item = &[u8]> {
        self.iter().map(|b| &**b)
    }
}

impl<'b, const N: usize> ConstBufferSequence for [&'b [u8]; N] {
    #[inline]
    fn buffers(&self) -> impl Iterator<Item = &[u8]> {
        self.iter().map(|b| &**b)
    }
}

impl<'b> ConstBufferSequence for [&'b mut [u8]] {
    #[inline]
    fn buffers(&self) -> impl Iterator<Item = &[u8]> {
        self.iter().map(|b| &**b)
    }
}

impl<'b> MutableBufferSequence for [&'b mut [u8]] {
    #[inline]
    fn buffers_mut(&mut self) -> impl Iterator<Item = &mut [u8]> {
        self.iter_mut().map(|b| &mut **b)
    }
}

impl<'b, const N: usize> ConstBufferSequence for [&'b mut [u8]; N] {
    #[inline]
    fn buffers(&self) -> impl Iterator<Item = &[u8]> {
        self.iter().map(|b| &**b)
    }
}

impl<'b, const N: usize> MutableBufferSequence for [&'b mut [u8]; N] {
    #[inline]
    fn buffers_mut(&mut self) -> impl Iterator<Item = &mut [u8]> {
        self.iter_mut().map(|b| &mut **b)
    }
}

#[cfg(feature = "alloc")]
impl<'b> ConstBufferSequence for Vec<&'b [u8]> {
    #[inline]
    fn buffers(&self) -> impl Iterator<Item = &[u8]> {
        self.iter().map(|b| &**b)
    }
}

#[cfg(feature = "alloc")]
impl<'b> ConstBufferSequence for Vec<&'b mut [u8]> {
    #[inline]
    fn buffers(&self) -> impl Iterator<Item = &[u8]> {
        self.iter().map(|b| &**b)
    }
}

#[cfg(feature = "alloc")]
impl<'b> MutableBufferSequence for Vec<&'b mut [u8]> {
    #[inline]
    fn buffers_mut(&mut self) -> impl Iterator<Item = &mut [u8]> {
        self.iter_mut().map(|b| &mut **b)
    }
}

// =============================================================================
// Forwarding
// =============================================================================

impl<B: ConstBufferSequence + ?Sized> ConstBufferSequence for &B {
    #[inline]
    fn buffers(&self) -> impl Iterator<Item = &[u8]> {
        (**self).buffers()
    }
}

impl<B: ConstBufferSequence + ?Sized> ConstBufferSequence for &mut B {
    #[inline]
    fn buffers(&self) -> impl Iterator<Item = &[u8]> {
        (**self).buffers()
    }
}

impl<B: MutableBufferSequence + ?Sized> MutableBufferSequence for &mut B {
    #[inline]
    fn buffers_mut(&mut self) -> impl Iterator<Item = &mut [u8]> {
        (**self).buffers_mut()
    }
}

#[cfg(feature = "alloc")]
impl<B: ConstBufferSequence + ?Sized> ConstBufferSequence for Box<B> {
    #[inline]
    fn buffers(&self) -> impl Iterator<Item = &[u8]> {
        (**self).buffers()
    }
}

#[cfg(feature = "alloc")]
impl<B: MutableBufferSequence + ?Sized> MutableBufferSequence for Box<B> {
    #[inline]
    fn buffers_mut(&mut self) -> impl Iterator<Item = &mut [u8]> {
        (**self).buffers_mut()
    }
}

/// Copy bytes from `src` into `dst`, buffer boundaries notwithstanding.
///
/// Returns the number of bytes copied: the smaller of the two sequence sizes.
pub fn buffer_copy<D, S>(dst: &mut D, src: &S) -> usize
where
    D: MutableBufferSequence + ?Sized,
    S: ConstBufferSequence + ?Sized,
{
    let mut copied = 0;
    let mut sources = src.buffers().filter(|b| !b.is_empty());
    let mut pending: &[u8] = &[];

    for mut out in dst.buffers_mut() {
        while !out.is_empty() {
            if pending.is_empty() {
                match sources.next() {
                    Some(next) => pending = next,
                    None => return copied,
                }
            }
            let n = out.len().min(pending.len());
            let (head, rest) = core::mem::take(&mut out).split_at_mut(n);
            head.copy_from_slice(&pending[..n]);
            out = rest;
            pending = &pending[n..];
            copied += n;
        }
    }
    copied
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_buffer_size() {
        let a = [1u8, 2, 3];
        let b = [4u8, 5];
        let seq: [&[u8]; 2] = [&a, &b];
        assert_eq!(seq.buffer_size(), 5);
        assert_eq!(a.buffer_size(), 3);
        assert_eq!([0u8; 0].buffer_size(), 0);
    }

    #[test]
    fn test_copy_gathers_across_boundaries() {
        let head = *b"hel";
        let tail = *b"lo!";
        let src: [&[u8]; 2] = [&head, &tail];

        let mut first = [0u8; 2];
        let mut second = [0u8; 4];
        let mut dst: [&mut [u8]; 2] = [&mut first, &mut second];

        assert_eq!(buffer_copy(&mut dst, &src), 6);
        assert_eq!(&first, b"he");
        assert_eq!(&second, b"llo!");
    }

    #[test]
    fn test_copy_stops_at_shorter_side() {
        let src = *b"abcdef";
        let mut dst = [0u8; 4];
        assert_eq!(buffer_copy(&mut dst, &src), 4);
        assert_eq!(&dst, b"abcd");

        let mut big = [0u8; 8];
        assert_eq!(buffer_copy(&mut big, b"xy"), 2);
        assert_eq!(&big[..2], b"xy");
    }

    #[cfg(feature = "alloc")]
    #[test]
    fn test_vec_sequences() {
        let mut v = alloc::vec![0u8; 3];
        assert_eq!(buffer_copy(&mut v, &alloc::vec![&b"ab"[..], &b"c"[..]]), 3);
        assert_eq!(v, b"abc");
    }
}
