//! Procedural macros for the stream-caps capability system
//!
//! | Macro | Target | Purpose |
//! |-------|--------|---------|
//! | `#[derive(Layer)]` | struct | Implement `Layer` / `NextLayer` |
//! | `stream_check!` | - | Boolean capability query on concrete types |
//!
//! ## Example
//!
//! ```ignore
//! #[derive(Layer)]
//! struct Tls<S> {
//!     #[next_layer]
//!     inner: S,
//!     session: Session,
//! }
//!
//! assert!(stream_check!(Tls<TcpStream>: NextLayer & !AsyncStream));
//! ```

use proc_macro::TokenStream;
use syn::parse_macro_input;

// =============================================================================
// Module Declarations (Two-tier: common / user)
// =============================================================================

mod common;
mod user;

/// Derive `Layer` for a struct.
///
/// Mark the wrapped field with `#[next_layer]` to also derive `NextLayer`;
/// a struct without a marked field is a terminal layer.
///
/// # Usage
/// ```ignore
/// #[derive(Layer)]
/// struct Socket { fd: i32 }              // HasNextLayer = Absent
///
/// #[derive(Layer)]
/// struct Limited<S> {                    // HasNextLayer = Present
///     #[next_layer]
///     inner: S,
///     budget: usize,
/// }
/// ```
///
/// At most one field may carry `#[next_layer]`.
#[proc_macro_derive(Layer, attributes(next_layer))]
pub fn derive_layer(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as syn::DeriveInput);
    user::expand_derive_layer(input)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}

/// Check if types have stream capabilities with boolean expression support.
///
/// Returns `true` or `false` at runtime based on compile-time trait detection.
///
/// # Syntax: `stream_check!(Type: Expr, ...)`
///
/// Supports multiple checks in one call. All checks must pass for result to be true.
///
/// ```ignore
/// use stream_caps::stream_check;
///
/// // Single check
/// assert!(stream_check!(MySocket: SyncStream));
///
/// // Boolean expressions
/// assert!(stream_check!(MySocket: SyncReadStream & !AsyncReadStream));
/// assert!(stream_check!(MySocket: (SyncStream | AsyncStream) & Layer));
///
/// // Multiple checks (all must pass)
/// assert!(stream_check!(MySocket: SyncStream, Tls<MySocket>: NextLayer));
///
/// // Any other trait works too, as long as it is in scope
/// assert!(stream_check!(MySocket: Send & Sync));
/// ```
///
/// The capability traits of `stream_caps` are recognised by bare name and
/// need no import.
#[proc_macro]
pub fn stream_check(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as user::StreamCheckInput);
    user::expand_stream_check(input).into()
}
