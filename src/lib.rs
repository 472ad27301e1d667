#![cfg_attr(not(feature = "std"), no_std)]

// Feature flags handled:
// - std: default, enables std library
// - alloc: enables alloc types in no_std
// - detect: enables Detect<T> constants and the is_*! macros
// - tracing: trace events on layer descent

//! # stream-caps
//!
//! Compile-time capability detection and lowest-layer resolution for
//! layered stream types.
//!
//! ## Architecture
//!
//! Streams come in layers (a TLS stream over a socket, a logger over the TLS
//! stream) and in flavours (blocking or completion-based, readable,
//! writable). `stream-caps` answers two questions about such a type, entirely
//! at build time:
//!
//! 1. **Which capabilities does it have?** Each capability is a trait
//!    blanket-implemented from its required parts, so having the parts is
//!    having the capability.
//! 2. **What is at the bottom?** Each layer reports whether it wraps another
//!    as a type-level [`Bool`]; the resolver walks the chain by type.
//!
//! ```text
//! +-------------------------------------------------------------------+
//! |  Layer 0: Primitives                                              |
//! |  - Bool (Present/Absent), buffer sequences, Error/ErrorCode,      |
//! |    Executor                                                       |
//! +-------------------------------------------------------------------+
//!                                |
//!                                v
//! +-------------------------------------------------------------------+
//! |  Layer 1: Capabilities                                            |
//! |  - ReadSome/ReadSomeEc -> SyncReadStream   (+ write, + async)     |
//! |  - Layer / NextLayer -> LowestLayer, get_lowest_layer             |
//! +-------------------------------------------------------------------+
//!                                |
//!                                v
//! +-------------------------------------------------------------------+
//! |  Layer 2: Queries                                                 |
//! |  - Detect<T> constants, is_*! macros, stream_check!, derive(Layer)|
//! +-------------------------------------------------------------------+
//! ```
//!
//! ## Quick Start
//!
//! ```
//! use stream_caps::prelude::*;
//! use stream_caps::{get_lowest_layer, is_sync_stream, is_async_stream};
//!
//! #[derive(Default, Layer)]
//! struct Socket { sent: Vec<u8> }
//!
//! impl WriteSome for Socket {
//!     fn write_some<B: ConstBufferSequence + ?Sized>(&mut self, buffers: &B) -> Result<usize> {
//!         buffers.buffers().for_each(|b| self.sent.extend_from_slice(b));
//!         Ok(buffers.buffer_size())
//!     }
//! }
//!
//! impl WriteSomeEc for Socket {
//!     fn write_some_ec<B: ConstBufferSequence + ?Sized>(&mut self, buffers: &B, ec: &mut ErrorCode) -> usize {
//!         ec.assign(self.write_some(buffers))
//!     }
//! }
//!
//! #[derive(Default, Layer)]
//! struct Logged<S> { #[next_layer] inner: S }
//!
//! assert!(stream_check!(Socket: SyncWriteStream & !SyncReadStream));
//! assert!(!is_sync_stream!(Socket));
//! assert!(!is_async_stream!(Socket));
//!
//! let mut stack = Logged::<Logged<Socket>>::default();
//! get_lowest_layer(&mut stack).write_some(b"hello").unwrap();
//! assert_eq!(stack.inner.inner.sent, b"hello");
//! ```

// Allow `::stream_caps` to work inside the crate itself
extern crate self as stream_caps;

#[cfg(feature = "alloc")]
extern crate alloc;

// =============================================================================
// Layer 0: Primitives
// =============================================================================
pub mod buffer;
pub mod error;
pub mod executor;
pub mod primitives;

// =============================================================================
// Layer 1: Capabilities and Layers
// =============================================================================
pub mod layer;
pub mod stream;

// =============================================================================
// Layer 2: Detection
// =============================================================================
#[cfg(feature = "detect")]
pub mod detect;

// =============================================================================
// Re-exports at Crate Root
// =============================================================================

pub use buffer::{buffer_copy, ConstBufferSequence, MutableBufferSequence};
pub use error::{Error, ErrorCode, Result};
pub use executor::{Executor, ExecutorType, HasExecutor, InlineExecutor};
pub use layer::{
    get_lowest_layer, has_next_layer, Layer, LayerRef, LowestLayer, LowestLayerType, NextLayer,
};
pub use primitives::bool::{Absent, Bool, Present};
pub use stream::{
    AsyncReadSome, AsyncReadStream, AsyncStream, AsyncWriteSome, AsyncWriteStream, ReadHandler,
    ReadSome, ReadSomeEc, SyncReadStream, SyncStream, SyncWriteStream, WriteHandler, WriteSome,
    WriteSomeEc,
};

// Re-export proc-macros
pub use macros::{stream_check, Layer};

/// Common items for implementing and querying streams.
pub mod prelude {
    pub use crate::buffer::{ConstBufferSequence, MutableBufferSequence};
    pub use crate::error::{Error, ErrorCode, Result};
    pub use crate::executor::{Executor, HasExecutor};
    pub use crate::layer::{Layer, LowestLayer, NextLayer};
    pub use crate::stream::{
        AsyncReadSome, AsyncReadStream, AsyncStream, AsyncWriteSome, AsyncWriteStream, ReadHandler,
        ReadSome, ReadSomeEc, SyncReadStream, SyncStream, SyncWriteStream, WriteHandler,
        WriteSome, WriteSomeEc,
    };
    pub use macros::{stream_check, Layer};
}
