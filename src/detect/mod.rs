//! # Capability Queries
//!
//! Boolean answers to "does this concrete type have capability C?".
//!
//! ```
//! use stream_caps::{is_sync_stream, has_next_layer};
//!
//! const TCP_IS_LAYERED: bool = has_next_layer!(std::net::TcpStream);
//! assert!(!TCP_IS_LAYERED);
//! assert!(!is_sync_stream!(String));
//! ```
//!
//! For generic code, bound on the capability trait instead
//! (`fn f<S: SyncStream>()`): detection on a type parameter always answers
//! `false`.
//!
//! | Macro | Constant | Trait |
//! |-------|----------|-------|
//! | `is_sync_read_stream!` | `IS_SYNC_READ_STREAM` | `SyncReadStream` |
//! | `is_sync_write_stream!` | `IS_SYNC_WRITE_STREAM` | `SyncWriteStream` |
//! | `is_async_read_stream!` | `IS_ASYNC_READ_STREAM` | `AsyncReadStream` |
//! | `is_async_write_stream!` | `IS_ASYNC_WRITE_STREAM` | `AsyncWriteStream` |
//! | `is_sync_stream!` | `IS_SYNC_STREAM` | `SyncStream` |
//! | `is_async_stream!` | `IS_ASYNC_STREAM` | `AsyncStream` |
//! | `has_next_layer!` | `HAS_NEXT_LAYER` | `NextLayer` |

mod autoref;

pub use autoref::*;

/// `true` if the type is [`SyncReadStream`](crate::SyncReadStream).
#[macro_export]
macro_rules! is_sync_read_stream {
    ($ty:ty) => {{
        #[allow(unused_imports)]
        use $crate::detect::SyncReadStreamFallback as _;
        $crate::detect::Detect::<$ty>::IS_SYNC_READ_STREAM
    }};
}

/// `true` if the type is [`SyncWriteStream`](crate::SyncWriteStream).
#[macro_export]
macro_rules! is_sync_write_stream {
    ($ty:ty) => {{
        #[allow(unused_imports)]
        use $crate::detect::SyncWriteStreamFallback as _;
        $crate::detect::Detect::<$ty>::IS_SYNC_WRITE_STREAM
    }};
}

/// `true` if the type is [`AsyncReadStream`](crate::AsyncReadStream).
#[macro_export]
macro_rules! is_async_read_stream {
    ($ty:ty) => {{
        #[allow(unused_imports)]
        use $crate::detect::AsyncReadStreamFallback as _;
        $crate::detect::Detect::<$ty>::IS_ASYNC_READ_STREAM
    }};
}

/// `true` if the type is [`AsyncWriteStream`](crate::AsyncWriteStream).
#[macro_export]
macro_rules! is_async_write_stream {
    ($ty:ty) => {{
        #[allow(unused_imports)]
        use $crate::detect::AsyncWriteStreamFallback as _;
        $crate::detect::Detect::<$ty>::IS_ASYNC_WRITE_STREAM
    }};
}

/// `true` if the type is [`SyncStream`](crate::SyncStream).
#[macro_export]
macro_rules! is_sync_stream {
    ($ty:ty) => {{
        #[allow(unused_imports)]
        use $crate::detect::SyncStreamFallback as _;
        $crate::detect::Detect::<$ty>::IS_SYNC_STREAM
    }};
}

/// `true` if the type is [`AsyncStream`](crate::AsyncStream).
#[macro_export]
macro_rules! is_async_stream {
    ($ty:ty) => {{
        #[allow(unused_imports)]
        use $crate::detect::AsyncStreamFallback as _;
        $crate::detect::Detect::<$ty>::IS_ASYNC_STREAM
    }};
}

/// `true` if the type wraps a next layer ([`NextLayer`](crate::NextLayer)).
///
/// Unlike [`has_next_layer`](crate::has_next_layer) this works on types that
/// do not implement [`Layer`](crate::Layer) at all.
#[macro_export]
macro_rules! has_next_layer {
    ($ty:ty) => {{
        #[allow(unused_imports)]
        use $crate::detect::NextLayerFallback as _;
        $crate::detect::Detect::<$ty>::HAS_NEXT_LAYER
    }};
}
