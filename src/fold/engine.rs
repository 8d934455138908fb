//! Tuple impls of the fold.
//!
//! Elements are visited left to right and the fold returns at the first
//! element whose result settles the kind; later elements are not touched.
//! The static `NoFail` of a fold is the conjunction over every element,
//! including those a particular run never reaches.

use crate::fold::kind::Kind;
use crate::fold::relation::{Relation, Test};

/// Fixed-arity element storage.
pub trait Elements {
    const LEN: usize;
}

/// Fold relation `R` against a probe `U` across every element.
#[diagnostic::on_unimplemented(
    message = "the elements `{Self}` cannot all be tested with `{R}` against `{U}`",
    label = "some element does not support `{R}` with `{U}`",
    note = "every element must support the relation; other operations on the same combinator stay usable"
)]
pub trait Fold<R: Relation, U: ?Sized> {
    /// Conjunction of every element's `Test::NoFail`.
    type NoFail: crate::primitives::Bool;

    fn fold<K: Kind>(&self, relation: &R, probe: &U) -> Result<bool, R::Error>;
}

#[doc(hidden)]
macro_rules! __one {
    ($x:tt) => {
        1
    };
}

macro_rules! impl_fold {
    ($(($E:ident, $idx:tt))*) => {
        impl<$($E,)*> Elements for ($($E,)*) {
            const LEN: usize = 0 $(+ __one!($E))*;
        }

        impl<R, U, $($E,)*> Fold<R, U> for ($($E,)*)
        where
            R: Relation $(+ Test<$E, U>)*,
            U: ?Sized,
        {
            type NoFail = crate::conj!($(<R as Test<$E, U>>::NoFail),*);

            #[inline]
            #[allow(unused_variables)]
            fn fold<K: Kind>(&self, relation: &R, probe: &U) -> Result<bool, R::Error> {
                $(
                    if <R as Test<$E, U>>::test(relation, &self.$idx, probe)? == K::DECISIVE {
                        return Ok(K::settle(K::DECISIVE));
                    }
                )*
                Ok(K::settle(!K::DECISIVE))
            }
        }
    };
}

macros::for_each_tuple!(impl_fold, 12);
