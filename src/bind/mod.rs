//! # Layer 1: Element Binding
//!
//! How a combinator holds each of its elements, decided once per element
//! when the combinator is built by `any_of!` / `all_of!` / `none_of!`:
//!
//! ```text
//! any_of![&level, 5, String::from("x")]
//!          |      |   |
//!          |      |   +-- owned     String, compares as itself
//!          |      +------ owned     i32, compares as itself
//!          +------------- borrowed  Borrowed<'_, L>, compares as `level`
//! ```
//!
//! An owned element needs nothing beyond the capability of the operation
//! applied to it. A borrowed element forwards every capability to the value
//! it points at.
//!
//! - `borrowed.rs`: `Borrowed` - the stored form of a reference argument.
//! - `dispatch.rs`: per-argument choice between the two modes.
//! - `truthy.rs`: `Truthy` - what a stored element converts to as a `bool`.

pub mod borrowed;
pub mod dispatch;
pub mod truthy;

pub use borrowed::Borrowed;
pub use truthy::{lazy, Lazy, Truthy};
