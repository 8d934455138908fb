//! # Layer 2: Fold Engine
//!
//! One fold routine, parameterized twice:
//!
//! ```text
//! (e0, e1, ..., en)  --Test<Ei, U>-->  b0, b1, ..., bn  --Kind-->  bool
//!                      relation            per element     connective
//! ```
//!
//! - `kind.rs`: the connectives (`Or` = any_of, `And` = all_of, `Nor` = none_of).
//! - `relation.rs`: per-element relations (`Equal`, `Less`, ..., `AsBool`).
//! - `engine.rs`: tuple impls of `Fold`, left to right with short-circuit.
//! - `mirror.rs`: `u OP combinator`, rewritten as `combinator MIRROR(OP) u`.

pub mod engine;
pub mod kind;
pub mod mirror;
pub mod relation;

pub use engine::{Elements, Fold};
pub use kind::{And, Kind, Nor, Or, Quantifier};
pub use mirror::Probe;
pub use relation::{
    AsBool, Equal, Greater, GreaterEqual, Less, LessEqual, NotEqual, Relation, Test,
};
