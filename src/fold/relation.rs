//! Per-element relations.
//!
//! A relation is a marker type (`Equal`, `Less`, ...) plus one `Test` impl
//! per element type it can be applied to. The fold engine never looks at
//! the operator itself; it only asks `Test<Ei, U>` for each element.
//!
//! The built-in comparisons ask nothing of an element beyond the std
//! operator trait: `Test<E, U> for Less` holds exactly when `E: PartialOrd<U>`.
//! Borrowed elements are covered through `Borrowed`'s forwarding impls.

use core::convert::Infallible;

use crate::bind::Truthy;
use crate::primitives::{Bool, Present};

/// A binary relation `element OP probe`.
///
/// `Error` is what a single test may fail with; the fold passes it through
/// untouched. `Mirror` is the relation that holds for `probe OP element`.
pub trait Relation {
    type Error;
    type Mirror: Relation<Error = Self::Error>;

    fn mirror(&self) -> Self::Mirror;
}

/// Apply a relation to one stored element of type `E` against a probe `U`.
#[diagnostic::on_unimplemented(
    message = "relation `{Self}` cannot compare an element of type `{E}` with `{U}`",
    label = "`{E}` does not support `{Self}` against `{U}`",
    note = "only this operation is unavailable; the rest of the combinator stays usable"
)]
pub trait Test<E, U: ?Sized>: Relation {
    /// `Present` when `test` never returns `Err` for this element type.
    type NoFail: Bool;

    fn test(&self, element: &E, probe: &U) -> Result<bool, Self::Error>;
}

// =============================================================================
// Comparison Relations (generated)
// =============================================================================

/// Generate a comparison relation backed by a std operator.
macro_rules! define_relations {
    ($(
        $(#[$meta:meta])*
        $name:ident: $bound:ident, $op:tt, mirror = $mirror:ident;
    )*) => {
        $(
            $(#[$meta])*
            #[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
            pub struct $name;

            impl Relation for $name {
                type Error = Infallible;
                type Mirror = $mirror;

                #[inline(always)]
                fn mirror(&self) -> $mirror {
                    $mirror
                }
            }

            impl<E, U> Test<E, U> for $name
            where
                E: $bound<U>,
                U: ?Sized,
            {
                type NoFail = Present;

                #[inline(always)]
                fn test(&self, element: &E, probe: &U) -> Result<bool, Infallible> {
                    Ok(*element $op *probe)
                }
            }
        )*
    };
}

define_relations! {
    /// `element == probe`
    Equal: PartialEq, ==, mirror = Equal;
    /// `element != probe`
    NotEqual: PartialEq, !=, mirror = NotEqual;
    /// `element < probe`
    Less: PartialOrd, <, mirror = Greater;
    /// `element <= probe`
    LessEqual: PartialOrd, <=, mirror = GreaterEqual;
    /// `element > probe`
    Greater: PartialOrd, >, mirror = Less;
    /// `element >= probe`
    GreaterEqual: PartialOrd, >=, mirror = LessEqual;
}

// =============================================================================
// Boolean View
// =============================================================================

/// The element itself, read as a `bool`. Folded against the unit probe.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct AsBool;

impl Relation for AsBool {
    type Error = Infallible;
    type Mirror = AsBool;

    #[inline(always)]
    fn mirror(&self) -> AsBool {
        AsBool
    }
}

impl<E: Truthy> Test<E, ()> for AsBool {
    type NoFail = Present;

    #[inline(always)]
    fn test(&self, element: &E, _: &()) -> Result<bool, Infallible> {
        Ok(element.truthy())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bind::Borrowed;

    fn check<R: Test<E, U, Error = Infallible>, E, U: ?Sized>(rel: R, element: E, probe: &U) -> bool {
        match rel.test(&element, probe) {
            Ok(result) => result,
            Err(never) => match never {},
        }
    }

    #[test]
    fn test_comparisons() {
        assert!(check(Equal, 3, &3));
        assert!(check(NotEqual, 3, &4));
        assert!(check(Less, 2, &3));
        assert!(check(LessEqual, 3, &3));
        assert!(check(Greater, 4, &3));
        assert!(!check(GreaterEqual, 2, &3));
    }

    #[test]
    fn test_unsized_probe() {
        let abc = Borrowed::new("abc");
        assert!(check(Equal, abc, "abc"));
        assert!(check(Less, abc, "abd"));
        assert!(check(Equal, "abc", &"abc"));
    }

    #[test]
    fn test_owned_compares_as_itself() {
        assert!(check(Equal, (1, 'x'), &(1, 'x')));
        assert!(check(Greater, core::cmp::Reverse(1), &core::cmp::Reverse(3)));
        assert!(check(LessEqual, core::num::NonZeroU8::MIN, &core::num::NonZeroU8::MAX));
    }

    #[test]
    fn test_mirror_pairs() {
        assert_eq!(Less.mirror(), Greater);
        assert_eq!(LessEqual.mirror(), GreaterEqual);
        assert_eq!(Greater.mirror().mirror(), Greater);
        assert_eq!(Equal.mirror(), Equal);
        assert_eq!(NotEqual.mirror(), NotEqual);
    }

    #[test]
    fn test_as_bool() {
        assert!(check(AsBool, true, &()));
        assert!(!check(AsBool, &false, &()));
    }
}
