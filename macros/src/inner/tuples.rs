//! Tuple arity generation macro.

use proc_macro2::{Literal, Span, TokenStream};
use quote::quote;
use syn::Ident;

use crate::common::ArityInput;

pub fn expand_for_each_tuple(input: ArityInput) -> TokenStream {
    let ArityInput { callback, max } = input;

    // Arity 0..=max, each call carrying the entries of the previous one plus one
    let mut calls = Vec::with_capacity(max + 1);
    let mut entries = Vec::with_capacity(max);
    calls.push(quote! { #callback! {} });

    for n in 0..max {
        let param = Ident::new(&format!("E{}", n), Span::call_site());
        let index = Literal::usize_unsuffixed(n);
        entries.push(quote! { (#param, #index) });
        calls.push(quote! { #callback! { #(#entries)* } });
    }

    quote! { #(#calls)* }
}
