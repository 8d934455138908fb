#![cfg_attr(not(feature = "std"), no_std)]

// Feature flags handled:
// - std: default, enables std library
// - alloc: truthiness for Box / Rc / Arc in no_std

//! # dry-comparisons
//!
//! **Quantified comparisons without the repetition.**
//!
//! Instead of `x == a || x == b || x == c`, write
//! `x.equals(&any_of![a, b, c])` or `any_of![a, b, c].eq(&x)`.
//!
//! ## Architecture
//!
//! A combinator is a kind (`any_of` / `all_of` / `none_of`) plus a tuple of
//! heterogeneous elements. Every operation folds over the tuple, left to
//! right, stopping at the first element that settles the answer.
//!
//! ```text
//! +-------------------------------------------------------------------+
//! |  Layer 0: Primitives                                              |
//! |  - Type-level Bool (Present / Absent) for static guarantees       |
//! +-------------------------------------------------------------------+
//!                                |
//!                                v
//! +-------------------------------------------------------------------+
//! |  Layer 1: Element Binding                                         |
//! |  - Borrowed (macro-time dispatch), Truthy, Lazy                   |
//! +-------------------------------------------------------------------+
//!                                |
//!                                v
//! +-------------------------------------------------------------------+
//! |  Layer 2: Fold Engine                                             |
//! |  - Kind (Or / And / Nor), Relation + Test, Fold, Probe (mirror)   |
//! +-------------------------------------------------------------------+
//!                                |
//!                                v
//! +-------------------------------------------------------------------+
//! |  Layer 3: Combinator                                              |
//! |  - relations, bool view, call (compose), Display / Debug          |
//! +-------------------------------------------------------------------+
//!                                |
//!                                v
//! +-------------------------------------------------------------------+
//! |  Layer 4: Capability Queries                                      |
//! |  - supports!, Detect consts, trait bounds                         |
//! +-------------------------------------------------------------------+
//! ```
//!
//! ## Quick Start
//!
//! ```
//! use dry_comparisons::prelude::*;
//!
//! let x: i32 = 3;
//!
//! assert!(any_of![1, 3, 5].eq(&x));
//! assert!(x.less_than(&all_of![4, 5, 6]));
//! assert!(none_of![1, 2, 4].eq(&x));
//!
//! // Elements can be callables; calling composes.
//! let small = |v: i32| v < 10;
//! let odd = |v: i32| v % 2 == 1;
//! assert!(all_of![small, odd].call((x,)).as_bool());
//!
//! assert_eq!(any_of![1, 3, 5].to_string(), "any_of{1,3,5}");
//! ```
//!
//! ## Inequality
//!
//! `ne` folds the per-element `!=` like every other relation, so
//! `any_of![1, 3].ne(&3)` is true (1 differs) and `none_of![a, b].ne(&u)`
//! means "no element differs from `u`". For "not any equal", negate `eq`.
//!
//! ## Failure
//!
//! The built-in relations cannot fail. A custom `Relation` may; its error
//! is passed through untouched and `Satisfy::NO_FAIL` tells statically
//! whether any element's test can produce one.

// Allow `::dry_comparisons` to work inside the crate itself
extern crate self as dry_comparisons;

#[cfg(feature = "alloc")]
extern crate alloc;

// Re-export paste for the detection macros
pub use paste;

// =============================================================================
// Layer 0: Primitives (no dependencies)
// =============================================================================
pub mod primitives;

// =============================================================================
// Layer 1: Element Binding
// =============================================================================
pub mod bind;

// =============================================================================
// Layer 2: Fold Engine
// =============================================================================
pub mod fold;

// =============================================================================
// Layer 3: Combinator
// =============================================================================
pub mod combinator;
pub mod compose;
pub mod print;

// =============================================================================
// Layer 4: Capability Queries
// =============================================================================
pub mod detect;

// Syntax macros (any_of!, all_of!, none_of!)
pub mod syntax_macros;

// =============================================================================
// Re-exports at Crate Root
// =============================================================================

pub use primitives::bool::{Absent, Bool, Present};
pub use bind::{lazy, Borrowed, Lazy, Truthy};
pub use fold::{
    And, AsBool, Elements, Equal, Fold, Greater, GreaterEqual, Kind, Less, LessEqual,
    Nor, NotEqual, Or, Probe, Quantifier, Relation, Test,
};
pub use combinator::{all_of, any_of, none_of, AllOf, AnyOf, Combinator, NoneOf, Satisfy};
pub use compose::{Callable, Invoke};

/// Common items for building and comparing combinators.
pub mod prelude {
    pub use crate::{all_of, any_of, none_of};
    pub use crate::combinator::{AllOf, AnyOf, Combinator, NoneOf, Satisfy};
    pub use crate::bind::{lazy, Borrowed, Truthy};
    pub use crate::compose::Callable;
    pub use crate::fold::{
        AsBool, Equal, Greater, GreaterEqual, Less, LessEqual, NotEqual, Probe, Quantifier,
        Relation, Test,
    };
    pub use crate::primitives::{Absent, Bool, Present};
}
