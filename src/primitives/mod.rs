//! # Layer 0: Primitives
//!
//! Basic building blocks shared by every other layer:
//! - `bool.rs`: Type-level boolean logic (Present/Absent) used to carry
//!   static no-fail guarantees through a fold.

pub mod bool;

// Re-export key types at this level
pub use bool::{Absent, Bool, Present};
