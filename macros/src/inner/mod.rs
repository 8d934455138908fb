//! Internal generator macros (not user-facing)

pub mod tuples;
