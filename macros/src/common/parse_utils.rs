//! Common parsing utilities
//!
//! Shared parsing helpers for consistent syntax across macros.

use syn::{
    parse::{Parse, ParseStream},
    Attribute, Token, Type,
};

use super::BoolExpr;

// =============================================================================
// Type Constraint Parsing: `Type: Expr`
// =============================================================================

/// A single type check: `Type: BoolExpr`
///
/// Used in `stream_check!(MyStream: SyncReadStream & !AsyncReadStream)`.
pub struct TypeCheck {
    pub ty: Type,
    pub expr: BoolExpr,
}

impl Parse for TypeCheck {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        let ty: Type = input.parse()?;
        input.parse::<Token![:]>()?;
        let expr: BoolExpr = input.parse()?;
        Ok(TypeCheck { ty, expr })
    }
}

// =============================================================================
// Comma-separated List Parsing
// =============================================================================

/// Parse one or more items separated by commas, allowing a trailing comma.
pub fn parse_non_empty_list<T: Parse>(input: ParseStream) -> syn::Result<Vec<T>> {
    let mut items = vec![input.parse()?];
    while input.peek(Token![,]) {
        input.parse::<Token![,]>()?;
        if input.is_empty() {
            break;
        }
        items.push(input.parse()?);
    }
    Ok(items)
}

// =============================================================================
// Marker Attributes
// =============================================================================

/// Find a bare marker attribute (`#[name]`), rejecting any arguments.
pub fn find_marker<'a>(attrs: &'a [Attribute], name: &str) -> syn::Result<Option<&'a Attribute>> {
    let mut found = None;
    for attr in attrs {
        if attr.path().is_ident(name) {
            attr.meta.require_path_only()?;
            found = Some(attr);
        }
    }
    Ok(found)
}
