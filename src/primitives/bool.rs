//! Type-level boolean logic.
//!
//! Core types: `Present` (true), `Absent` (false), `Bool` trait.
//!
//! Static guarantees such as "this fold never yields an error" are carried
//! as `Present`/`Absent` and combined element by element with `And`.

/// Type-level boolean.
pub trait Bool: 'static {
    const VALUE: bool;

    /// Logical AND
    type And<Other: Bool>: Bool;
}

/// Type-level True.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Present;

/// Type-level False.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Absent;

impl Bool for Present {
    const VALUE: bool = true;
    type And<Other: Bool> = Other;
}

impl Bool for Absent {
    const VALUE: bool = false;
    type And<Other: Bool> = Absent;
}

/// Conjunction of any number of type-level booleans, `Present` when empty.
///
/// ```ignore
/// type Out = conj!(Present, Absent, Present); // Absent
/// ```
#[doc(hidden)]
#[macro_export]
macro_rules! conj {
    () => { $crate::Present };
    ($head:ty $(, $tail:ty)* $(,)?) => {
        <$head as $crate::Bool>::And<$crate::conj!($($tail),*)>
    };
}
