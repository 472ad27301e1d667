//! # Layers
//!
//! Streams stack: a TLS stream wraps a rate limiter wraps a TCP socket. Each
//! wrapper exposes the object directly beneath it as its *next layer*, and
//! following next layers until none remain reaches the *lowest layer*, the
//! object doing the actual I/O.
//!
//! ```text
//! Tls<Limited<TcpStream>>
//!      |  next_layer()
//!      v
//! Limited<TcpStream>
//!      |  next_layer()
//!      v
//! TcpStream            HasNextLayer = Absent  -> lowest layer
//! ```
//!
//! ## Resolution
//!
//! Every layer reports `HasNextLayer` as a type-level [`Bool`]. The resolver
//! selects `ResolveLowest<Present>` (descend) or `ResolveLowest<Absent>`
//! (stop) by that type, so the whole walk is chosen at compile time and
//! compiles down to a field projection.
//!
//! A shared reference only ever descends through [`NextLayer::next_layer`],
//! a mutable one only through [`NextLayer::next_layer_mut`]:
//!
//! ```
//! use stream_caps::{get_lowest_layer, Layer};
//!
//! #[derive(Default, Layer)]
//! struct Socket { fd: i32 }
//!
//! #[derive(Default, Layer)]
//! struct Framed<S> { #[next_layer] inner: S }
//!
//! let mut s = Framed::<Framed<Socket>>::default();
//! let shared: &Socket = get_lowest_layer(&s);
//! assert!(core::ptr::eq(shared, &s.inner.inner));
//! let exclusive: &mut Socket = get_lowest_layer(&mut s);
//! exclusive.fd = 3;
//! assert_eq!(s.inner.inner.fd, 3);
//! ```
//!
//! Mutability is never regained on the way down:
//!
//! ```compile_fail
//! use stream_caps::{get_lowest_layer, Layer};
//!
//! #[derive(Default, Layer)]
//! struct Socket;
//!
//! #[derive(Default, Layer)]
//! struct Framed<S> { #[next_layer] inner: S }
//!
//! let s = Framed::<Socket>::default();
//! let _: &mut Socket = get_lowest_layer(&s);
//! ```
//!
//! `&mut S` and `Box<S>` are layers too: each is one hop to the `S` it
//! points at, so a wrapper over a borrowed or boxed stream still resolves to
//! the stream's own lowest layer.
//!
//! A type cannot claim a next layer it does not expose. Declaring
//! `HasNextLayer = Present` without a [`NextLayer`] impl is rejected:
//!
//! ```compile_fail
//! use stream_caps::{Layer, Present};
//!
//! struct Claims;
//!
//! impl Layer for Claims {
//!     type HasNextLayer = Present;
//! }
//! ```
//!
//! ## Precondition
//!
//! The chain must be finite. Nothing here detects a type whose chain leads
//! back to itself; such a type overflows the trait solver's recursion limit
//! at build time.

use crate::primitives::bool::{Absent, Bool, Present};

/// A stream layer.
///
/// Implemented by every type that takes part in layer resolution. Use
/// `#[derive(Layer)]` for your own types and [`terminal_layer!`] for foreign
/// ones.
pub trait Layer {
    /// `Present` if this type wraps a next layer, `Absent` otherwise.
    ///
    /// `Present` is only accepted together with a [`NextLayer`] impl.
    type HasNextLayer: sealed::Link<Self>;
}

mod sealed {
    use super::NextLayer;
    use crate::primitives::bool::{Absent, Bool, Present};

    /// `Flag` is a truthful answer to "does `T` have a next layer".
    pub trait Link<T: ?Sized>: Bool {}

    impl<T: ?Sized> Link<T> for Absent {}

    impl<T: NextLayer + ?Sized> Link<T> for Present {}
}

/// A layer that wraps another layer.
///
/// Both accessors are required: the shared one serves `&self` resolution,
/// the mutable one `&mut self` resolution.
pub trait NextLayer: Layer<HasNextLayer = Present> {
    /// The wrapped layer.
    type Next: Layer + ?Sized;

    fn next_layer(&self) -> &Self::Next;

    fn next_layer_mut(&mut self) -> &mut Self::Next;
}

/// Does `T` wrap a next layer?
///
/// True exactly when `T` implements [`NextLayer`].
#[inline]
pub const fn has_next_layer<T: Layer + ?Sized>() -> bool {
    <T::HasNextLayer as Bool>::VALUE
}

// =============================================================================
// Resolution
// =============================================================================

/// One resolution step, selected by `Flag = <Self as Layer>::HasNextLayer`.
#[doc(hidden)]
pub trait ResolveLowest<Flag: Bool> {
    type Lowest: ?Sized;

    fn resolve(&self) -> &Self::Lowest;

    fn resolve_mut(&mut self) -> &mut Self::Lowest;
}

// Base case: no next layer, the object is its own lowest layer.
impl<T: ?Sized> ResolveLowest<Absent> for T {
    type Lowest = T;

    #[inline(always)]
    fn resolve(&self) -> &T {
        self
    }

    #[inline(always)]
    fn resolve_mut(&mut self) -> &mut T {
        self
    }
}

// Recursive case: resolve the next layer.
impl<T> ResolveLowest<Present> for T
where
    T: NextLayer + ?Sized,
    T::Next: LowestLayer,
{
    type Lowest = <T::Next as LowestLayer>::Lowest;

    #[inline(always)]
    fn resolve(&self) -> &Self::Lowest {
        #[cfg(feature = "tracing")]
        trace_descent::<T>();
        self.next_layer().lowest_layer()
    }

    #[inline(always)]
    fn resolve_mut(&mut self) -> &mut Self::Lowest {
        #[cfg(feature = "tracing")]
        trace_descent::<T>();
        self.next_layer_mut().lowest_layer_mut()
    }
}

#[cfg(feature = "tracing")]
#[inline]
fn trace_descent<T: NextLayer + ?Sized>() {
    tracing::trace!(
        layer = core::any::type_name::<T>(),
        next = core::any::type_name::<T::Next>(),
        "descending to next layer"
    );
}

/// Access to the lowest layer of a stack.
///
/// Blanket-implemented for every [`Layer`] whose chain resolves.
pub trait LowestLayer: Layer {
    /// The terminal type of the chain.
    type Lowest: ?Sized;

    fn lowest_layer(&self) -> &Self::Lowest;

    fn lowest_layer_mut(&mut self) -> &mut Self::Lowest;
}

impl<T> LowestLayer for T
where
    T: Layer + ResolveLowest<<T as Layer>::HasNextLayer> + ?Sized,
{
    type Lowest = <T as ResolveLowest<T::HasNextLayer>>::Lowest;

    #[inline(always)]
    fn lowest_layer(&self) -> &Self::Lowest {
        <T as ResolveLowest<T::HasNextLayer>>::resolve(self)
    }

    #[inline(always)]
    fn lowest_layer_mut(&mut self) -> &mut Self::Lowest {
        <T as ResolveLowest<T::HasNextLayer>>::resolve_mut(self)
    }
}

/// The lowest layer type of `T`.
pub type LowestLayerType<T> = <T as LowestLayer>::Lowest;

// =============================================================================
// get_lowest_layer
// =============================================================================

/// A reference to a layer: `&T` or `&mut T`.
///
/// Resolving keeps the reference kind, so `&T` yields `&Lowest` and
/// `&mut T` yields `&mut Lowest`.
pub trait LayerRef {
    type Output;

    fn into_lowest(self) -> Self::Output;
}

impl<'a, T: LowestLayer + ?Sized> LayerRef for &'a T {
    type Output = &'a T::Lowest;

    #[inline(always)]
    fn into_lowest(self) -> Self::Output {
        self.lowest_layer()
    }
}

impl<'a, T: LowestLayer + ?Sized> LayerRef for &'a mut T {
    type Output = &'a mut T::Lowest;

    #[inline(always)]
    fn into_lowest(self) -> Self::Output {
        self.lowest_layer_mut()
    }
}

/// Return the lowest layer of a stack of layers.
///
/// The result borrows from `layer` and points into the same object graph;
/// nothing is copied.
#[inline(always)]
pub fn get_lowest_layer<R: LayerRef>(layer: R) -> R::Output {
    layer.into_lowest()
}

// =============================================================================
// Terminal layers
// =============================================================================

/// Implement [`Layer`] with no next layer for the listed types.
///
/// ```
/// struct RawSocket;
/// stream_caps::terminal_layer!(RawSocket);
///
/// assert!(!stream_caps::has_next_layer::<RawSocket>());
/// ```
#[macro_export]
macro_rules! terminal_layer {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl $crate::Layer for $ty {
                type HasNextLayer = $crate::Absent;
            }
        )+
    };
}

terminal_layer!([u8]);

#[cfg(feature = "alloc")]
terminal_layer!(alloc::vec::Vec<u8>);

#[cfg(feature = "std")]
terminal_layer!(
    std::net::TcpStream,
    std::fs::File,
    std::io::Stdin,
    std::io::Stdout,
    std::io::Stderr,
);

#[cfg(all(feature = "std", unix))]
terminal_layer!(std::os::unix::net::UnixStream);

#[cfg(feature = "std")]
impl<T> Layer for std::io::Cursor<T> {
    type HasNextLayer = Absent;
}

// =============================================================================
// Pointer hops
// =============================================================================

impl<S: Layer + ?Sized> Layer for &mut S {
    type HasNextLayer = Present;
}

impl<S: Layer + ?Sized> NextLayer for &mut S {
    type Next = S;

    #[inline(always)]
    fn next_layer(&self) -> &S {
        &**self
    }

    #[inline(always)]
    fn next_layer_mut(&mut self) -> &mut S {
        &mut **self
    }
}

#[cfg(feature = "alloc")]
impl<S: Layer + ?Sized> Layer for alloc::boxed::Box<S> {
    type HasNextLayer = Present;
}

#[cfg(feature = "alloc")]
impl<S: Layer + ?Sized> NextLayer for alloc::boxed::Box<S> {
    type Next = S;

    #[inline(always)]
    fn next_layer(&self) -> &S {
        &**self
    }

    #[inline(always)]
    fn next_layer_mut(&mut self) -> &mut S {
        &mut **self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Without {
        _dummy: i32,
    }

    impl Layer for Without {
        type HasNextLayer = Absent;
    }

    struct With<T> {
        t: T,
    }

    impl<T: Layer> Layer for With<T> {
        type HasNextLayer = Present;
    }

    impl<T: Layer> NextLayer for With<T> {
        type Next = T;

        fn next_layer(&self) -> &T {
            &self.t
        }

        fn next_layer_mut(&mut self) -> &mut T {
            &mut self.t
        }
    }

    fn without() -> Without {
        Without { _dummy: 0 }
    }

    #[test]
    fn test_has_next_layer() {
        assert!(!has_next_layer::<Without>());
        assert!(has_next_layer::<With<Without>>());
        assert!(has_next_layer::<With<With<Without>>>());
        assert!(!has_next_layer::<[u8]>());
    }

    #[test]
    fn test_trait_methods() {
        let mut w = With { t: With { t: without() } };
        let expected: *const Without = &w.t.t;
        assert!(core::ptr::eq(w.lowest_layer(), expected));
        assert!(core::ptr::eq(w.lowest_layer_mut(), expected));
    }

    #[test]
    fn test_lowest_layer_type() {
        fn lowest_of<T: LowestLayer>(t: &T) -> &LowestLayerType<T> {
            t.lowest_layer()
        }
        let w = With { t: without() };
        let lowest: &Without = lowest_of(&w);
        assert!(core::ptr::eq(lowest, &w.t));
    }

    #[test]
    fn test_derived_over_manual() {
        #[derive(crate::Layer)]
        struct Framed<S> {
            #[next_layer]
            inner: S,
        }

        let mut f = Framed { inner: With { t: without() } };
        let expected: *const Without = &f.inner.t;
        let lowest: &mut Without = get_lowest_layer(&mut f);
        assert!(core::ptr::eq(lowest, expected));
    }

    #[test]
    fn test_unsized_terminal() {
        let mut bytes = [1u8, 2, 3];
        let slice: &mut [u8] = &mut bytes;
        let lowest: &mut [u8] = get_lowest_layer(slice);
        lowest[0] = 9;
        assert_eq!(bytes[0], 9);
    }

    #[test]
    fn test_pointer_hops_reach_pointee() {
        assert!(has_next_layer::<&mut Without>());
        let mut inner = With { t: without() };
        let expected: *const Without = &inner.t;
        let mut borrowed = With { t: &mut inner };
        let lowest: &mut Without = get_lowest_layer(&mut borrowed);
        assert!(core::ptr::eq(lowest, expected));
    }

    #[cfg(feature = "alloc")]
    #[test]
    fn test_box_hop() {
        let boxed = With { t: alloc::boxed::Box::new(without()) };
        let lowest: &Without = get_lowest_layer(&boxed);
        assert!(core::ptr::eq(lowest, &*boxed.t));
    }
}
