// Common utilities shared by the generator macros
//
// This module contains:
// - parse_utils: input parsing for the generator macros

mod parse_utils;

pub use parse_utils::*;
