use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::parse::{Parse, ParseStream};

use crate::common::{generate_probe_body, parse_non_empty_list, TypeCheck};

/// Input for stream_check! macro: one or more type checks
pub struct StreamCheckInput {
    checks: Vec<TypeCheck>,
}

impl Parse for StreamCheckInput {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        Ok(StreamCheckInput { checks: parse_non_empty_list(input)? })
    }
}

/// Expand every `Type: Expr` check into a probe expression and AND them.
pub fn expand_stream_check(input: StreamCheckInput) -> TokenStream2 {
    // Reference user's types before the probes to avoid unused import warnings
    let type_refs = input.checks.iter().map(|c| {
        let ty = &c.ty;
        quote! { __use_type::<#ty>(::core::marker::PhantomData); }
    });
    let check_exprs = input.checks.iter().map(|c| generate_probe_body(&c.expr, &c.ty));

    quote! {
        {
            fn __use_type<__T: ?Sized>(_: ::core::marker::PhantomData<__T>) {}
            #(#type_refs)*
            (#(#check_exprs)&&*)
        }
    }
}
