use proc_macro2::TokenStream as TokenStream2;
use quote::{quote, ToTokens};
use syn::{Data, DeriveInput, Index};

use crate::common::find_marker;

/// #[derive(Layer)] implements `Layer`, and `NextLayer` when one field is
/// marked `#[next_layer]`.
///
/// The generated impls for a marked field `inner: T`:
///
/// ```text
/// impl<..> Layer for Ty<..> where T: Layer { type HasNextLayer = Present; }
/// impl<..> NextLayer for Ty<..> where T: Layer {
///     type Next = T;
///     fn next_layer(&self) -> &T { &self.inner }
///     fn next_layer_mut(&mut self) -> &mut T { &mut self.inner }
/// }
/// ```
///
/// Without a marked field, only `Layer` with `HasNextLayer = Absent`.
pub fn expand_derive_layer(input: DeriveInput) -> syn::Result<TokenStream2> {
    let fields = match &input.data {
        Data::Struct(data) => &data.fields,
        Data::Enum(data) => {
            return Err(syn::Error::new_spanned(
                data.enum_token,
                "#[derive(Layer)] supports structs only",
            ));
        }
        Data::Union(data) => {
            return Err(syn::Error::new_spanned(
                data.union_token,
                "#[derive(Layer)] supports structs only",
            ));
        }
    };

    let mut marked = Vec::new();
    for (index, field) in fields.iter().enumerate() {
        if let Some(attr) = find_marker(&field.attrs, "next_layer")? {
            marked.push((index, field, attr));
        }
    }

    let ident = &input.ident;

    if marked.len() > 1 {
        // A layer wraps one layer: the chain must not branch
        let (_, _, attr) = marked[1];
        return Err(syn::Error::new_spanned(
            attr,
            "only one field may be marked #[next_layer]",
        ));
    }

    let Some(&(index, field, _)) = marked.first() else {
        let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();
        return Ok(quote! {
            impl #impl_generics ::stream_caps::Layer for #ident #ty_generics #where_clause {
                type HasNextLayer = ::stream_caps::Absent;
            }
        });
    };

    let next_ty = &field.ty;
    let member = match &field.ident {
        Some(name) => name.to_token_stream(),
        None => Index::from(index).to_token_stream(),
    };

    let mut generics = input.generics.clone();
    generics
        .make_where_clause()
        .predicates
        .push(syn::parse_quote! { #next_ty: ::stream_caps::Layer });
    let (impl_generics, ty_generics, where_clause) = generics.split_for_impl();

    Ok(quote! {
        impl #impl_generics ::stream_caps::Layer for #ident #ty_generics #where_clause {
            type HasNextLayer = ::stream_caps::Present;
        }

        impl #impl_generics ::stream_caps::NextLayer for #ident #ty_generics #where_clause {
            type Next = #next_ty;

            #[inline]
            fn next_layer(&self) -> &Self::Next {
                &self.#member
            }

            #[inline]
            fn next_layer_mut(&mut self) -> &mut Self::Next {
                &mut self.#member
            }
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn expand(src: &str) -> syn::Result<String> {
        let input: DeriveInput = syn::parse_str(src)?;
        expand_derive_layer(input).map(|ts| ts.to_string())
    }

    #[test]
    fn test_terminal_struct() {
        let out = expand("struct Socket { fd: i32 }").unwrap();
        assert!(out.contains("Absent"));
        assert!(!out.contains("NextLayer"));
    }

    #[test]
    fn test_wrapper_struct() {
        let out = expand("struct Framed<S> { #[next_layer] inner: S, buf: Vec<u8> }").unwrap();
        assert!(out.contains("Present"));
        assert!(out.contains("type Next = S"));
        assert!(out.contains("& self . inner"));
        assert!(out.contains("S : :: stream_caps :: Layer"));
    }

    #[test]
    fn test_tuple_struct_uses_index() {
        let out = expand("struct Counted<S>(u64, #[next_layer] S);").unwrap();
        assert!(out.contains("& mut self . 1"));
    }

    #[test]
    fn test_rejects_two_next_layers() {
        let err = expand("struct Split<A, B> { #[next_layer] a: A, #[next_layer] b: B }").unwrap_err();
        assert!(err.to_string().contains("only one field"));
    }

    #[test]
    fn test_rejects_marker_arguments() {
        assert!(expand("struct Bad<S> { #[next_layer(x)] s: S }").is_err());
    }

    #[test]
    fn test_rejects_enum() {
        assert!(expand("enum Either { A, B }").is_err());
    }
}
