//! # Stream Capabilities
//!
//! Four base capabilities, each made of two required parts:
//!
//! ```text
//! SyncReadStream   = ReadSome    + ReadSomeEc
//! SyncWriteStream  = WriteSome   + WriteSomeEc
//! AsyncReadStream  = HasExecutor + AsyncReadSome
//! AsyncWriteStream = HasExecutor + AsyncWriteSome
//!
//! SyncStream       = SyncReadStream  + SyncWriteStream
//! AsyncStream      = AsyncReadStream + AsyncWriteStream
//! ```
//!
//! Every capability is blanket-implemented from its parts, so a type never
//! declares a capability directly: it implements the parts and the
//! capability follows. A type with only one part of a pair has no
//! capability.
//!
//! Parts are forwarded through `&mut S` and `Box<S>`, so a wrapper that
//! derefs to a capable stream is detected the same as the stream itself.

mod async_stream;
mod sync_stream;

pub use async_stream::{
    AsyncReadSome, AsyncReadStream, AsyncStream, AsyncWriteSome, AsyncWriteStream, ReadHandler,
    WriteHandler,
};
pub use sync_stream::{
    ReadSome, ReadSomeEc, SyncReadStream, SyncStream, SyncWriteStream, WriteSome, WriteSomeEc,
};
