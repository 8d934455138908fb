//! Procedural macros for dry-comparisons
//!
//! | Macro | Target | Purpose |
//! |-------|--------|---------|
//! | `for_each_tuple!` | - | Drive a `macro_rules!` once per tuple arity |

use proc_macro::TokenStream;
use syn::parse_macro_input;

// =============================================================================
// Module Declarations (Two-tier: inner / common)
// =============================================================================

mod inner;
mod common;

// =============================================================================
// Internal Macros (inner/)
// =============================================================================

/// Invoke a declarative macro once per tuple arity.
///
/// # Usage
/// ```ignore
/// for_each_tuple!(impl_fold, 3);
/// // impl_fold! {}
/// // impl_fold! { (E0, 0) }
/// // impl_fold! { (E0, 0) (E1, 1) }
/// // impl_fold! { (E0, 0) (E1, 1) (E2, 2) }
/// ```
///
/// Each entry is `(TypeParam, field_index)`; the index is an unsuffixed
/// literal so `self.$idx` projects the tuple field.
#[proc_macro]
pub fn for_each_tuple(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as common::ArityInput);
    inner::tuples::expand_for_each_tuple(input).into()
}
