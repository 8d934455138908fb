//! Common parsing utilities

use syn::{
    parse::{Parse, ParseStream},
    Ident, LitInt, Token,
};

// =============================================================================
// Arity Parsing: `callback, N`
// =============================================================================

/// Input of `for_each_tuple!`: the callback macro and the largest arity.
pub struct ArityInput {
    pub callback: Ident,
    pub max: usize,
}

impl Parse for ArityInput {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        let callback: Ident = input.parse()?;
        input.parse::<Token![,]>()?;
        let lit: LitInt = input.parse()?;
        let max = lit.base10_parse::<usize>()?;
        if max > 16 {
            return Err(syn::Error::new(lit.span(), "tuple arity is limited to 16"));
        }
        // Allow trailing comma
        let _ = input.parse::<Option<Token![,]>>()?;
        Ok(ArityInput { callback, max })
    }
}
