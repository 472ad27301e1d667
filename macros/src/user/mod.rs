//! User-facing macro implementations
//!
//! | Macro | Usage | Purpose |
//! |-------|-------|---------|
//! | `#[derive(Layer)]` | on struct | Implement `Layer` / `NextLayer` |
//! | `stream_check!` | function macro | Boolean capability query |

pub mod layer;
pub mod stream_check;

pub use layer::expand_derive_layer;
pub use stream_check::{expand_stream_check, StreamCheckInput};
