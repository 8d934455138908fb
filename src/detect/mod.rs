//! # Layer 4: Capability Queries
//!
//! Which operations a given combinator type supports, answered at compile
//! time without triggering a hard error:
//!
//! ```
//! use dry_comparisons::prelude::*;
//! use dry_comparisons::supports;
//!
//! struct Opaque;
//!
//! assert!(supports!(AnyOf<(i32, i32)>: core::fmt::Display));
//! assert!(!supports!(AnyOf<(i32, Opaque)>: core::fmt::Display));
//! assert!(supports!(AllOf<(fn(i32) -> bool,)>: Callable<(i32,)>));
//! assert!(!supports!(AllOf<(fn(i32) -> bool,)>: Callable<(&'static str,)>));
//! assert!(supports!(NoneOf<(u8, u8)>: Satisfy<Less, u8>));
//! ```
//!
//! ## Limitation
//!
//! Both `supports!` and the `Detect` consts only work for **concrete types**
//! known at the call site. In generic code, use the trait itself as a bound
//! (`C: Satisfy<Equal, U>`, `C: Callable<Args>`, `C: Display`).

pub mod autoref;
pub mod probe;

pub use autoref::*;
