// Boolean expression parsing and probe generation for capability checks

use proc_macro2::TokenStream;
use quote::quote;
use syn::{
    parse::{Parse, ParseStream},
    Token, Type,
};

// =============================================================================
// Boolean Expression AST
// =============================================================================

#[derive(Clone, Debug)]
pub enum BoolExpr {
    Cap(Type),
    And(Box<BoolExpr>, Box<BoolExpr>),
    Or(Box<BoolExpr>, Box<BoolExpr>),
    Not(Box<BoolExpr>),
}

impl Parse for BoolExpr {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        parse_or(input)
    }
}

// Recursive descent parser: Or -> And -> Unary -> Primary

fn parse_or(input: ParseStream) -> syn::Result<BoolExpr> {
    let mut lhs = parse_and(input)?;

    while input.peek(Token![|]) {
        input.parse::<Token![|]>()?;
        let rhs = parse_and(input)?;
        lhs = BoolExpr::Or(Box::new(lhs), Box::new(rhs));
    }
    Ok(lhs)
}

fn parse_and(input: ParseStream) -> syn::Result<BoolExpr> {
    let mut lhs = parse_unary(input)?;

    while input.peek(Token![&]) {
        input.parse::<Token![&]>()?;
        let rhs = parse_unary(input)?;
        lhs = BoolExpr::And(Box::new(lhs), Box::new(rhs));
    }
    Ok(lhs)
}

fn parse_unary(input: ParseStream) -> syn::Result<BoolExpr> {
    if input.peek(Token![!]) {
        input.parse::<Token![!]>()?;
        let operand = parse_unary(input)?;
        Ok(BoolExpr::Not(Box::new(operand)))
    } else {
        parse_primary(input)
    }
}

fn parse_primary(input: ParseStream) -> syn::Result<BoolExpr> {
    if input.peek(syn::token::Paren) {
        let content;
        syn::parenthesized!(content in input);
        content.parse()
    } else {
        // Parse a type (capability trait)
        let ty: Type = input.parse()?;
        Ok(BoolExpr::Cap(ty))
    }
}

// =============================================================================
// Capability Names
// =============================================================================

/// Traits of this crate that `stream_check!` resolves without an import.
const BUILTIN_CAPABILITIES: &[&str] = &[
    "SyncReadStream",
    "SyncWriteStream",
    "AsyncReadStream",
    "AsyncWriteStream",
    "SyncStream",
    "AsyncStream",
    "NextLayer",
    "Layer",
    "ReadSome",
    "ReadSomeEc",
    "WriteSome",
    "WriteSomeEc",
    "AsyncReadSome",
    "AsyncWriteSome",
    "HasExecutor",
];

/// Map a bare built-in capability name to its absolute path.
/// Anything else (paths, user traits) is used as written.
fn resolve_capability(trait_ty: &Type) -> TokenStream {
    if let Type::Path(path) = trait_ty
        && path.qself.is_none()
        && let Some(ident) = path.path.get_ident()
        && BUILTIN_CAPABILITIES.contains(&ident.to_string().as_str())
    {
        return quote! { ::stream_caps::#ident };
    }
    quote! { #trait_ty }
}

// =============================================================================
// Probe Generation
// =============================================================================

/// Generate the check body for a whole expression.
///
/// Each atom becomes an inline probe; NOT is applied to the probe result.
pub fn generate_probe_body(expr: &BoolExpr, ty: &Type) -> TokenStream {
    match expr {
        BoolExpr::Cap(trait_ty) => generate_single_probe(trait_ty, ty),
        BoolExpr::And(lhs, rhs) => {
            let l = generate_probe_body(lhs, ty);
            let r = generate_probe_body(rhs, ty);
            quote! { (#l && #r) }
        }
        BoolExpr::Or(lhs, rhs) => {
            let l = generate_probe_body(lhs, ty);
            let r = generate_probe_body(rhs, ty);
            quote! { (#l || #r) }
        }
        BoolExpr::Not(operand) => {
            let o = generate_probe_body(operand, ty);
            quote! { (!#o) }
        }
    }
}

/// Generate a single probe check for one trait
fn generate_single_probe(trait_ty: &Type, ty: &Type) -> TokenStream {
    let bound = resolve_capability(trait_ty);
    quote! {
        {
            trait __ProbeFallback { const VAL: bool = false; }
            struct __Probe<X: ?Sized>(::core::marker::PhantomData<X>);
            impl<X: ?Sized> __ProbeFallback for __Probe<X> {}
            impl<X: ?Sized + #bound> __Probe<X> { const VAL: bool = true; }
            __Probe::<#ty>::VAL
        }
    }
}
