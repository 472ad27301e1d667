//! Autoref-based capability detection machinery.
//!
//! This module implements the "Inherent Const Fallback" pattern for
//! compile-time capability detection on concrete types.
//!
//! ## How it works
//!
//! For each capability trait C we want to detect:
//! 1. Define a fallback trait with `const IS_C: bool = false`
//! 2. Implement fallback for `Detect<X>` for all X
//! 3. Implement an inherent const `IS_C = true` for `Detect<X>` where `X: C`
//!
//! When resolving `Detect::<Concrete>::IS_C`, the compiler:
//! - If `Concrete: C`, finds the inherent const (true)
//! - Otherwise, finds the trait const (false)
//!
//! ## Limitation
//!
//! This only works for **concrete types** known at the call site.
//! It does NOT work in generic contexts like `fn foo<T>()`: there the answer
//! is always `false`. Use a trait bound instead.

use core::marker::PhantomData;

use crate::layer::NextLayer;
use crate::stream::{
    AsyncReadStream, AsyncStream, AsyncWriteStream, SyncReadStream, SyncStream, SyncWriteStream,
};

/// Detection wrapper type.
pub struct Detect<T: ?Sized>(PhantomData<T>);

/// Generate fallback trait + inherent const for a capability trait.
macro_rules! impl_detect {
    ($($Trait:ident => $CONST:ident),+ $(,)?) => {
        $(
            ::paste::paste! {
                #[doc(hidden)]
                pub trait [<$Trait Fallback>] {
                    const $CONST: bool = false;
                }
                impl<T: ?Sized> [<$Trait Fallback>] for Detect<T> {}
                impl<T: $Trait + ?Sized> Detect<T> {
                    pub const $CONST: bool = true;
                }
            }
        )+
    };
}

impl_detect! {
    SyncReadStream => IS_SYNC_READ_STREAM,
    SyncWriteStream => IS_SYNC_WRITE_STREAM,
    AsyncReadStream => IS_ASYNC_READ_STREAM,
    AsyncWriteStream => IS_ASYNC_WRITE_STREAM,
    SyncStream => IS_SYNC_STREAM,
    AsyncStream => IS_ASYNC_STREAM,
    NextLayer => HAS_NEXT_LAYER,
}
