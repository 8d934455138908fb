//! Reversed operand order: `u OP combinator`.
//!
//! Nothing is folded here. Every reversed comparison is rewritten through
//! the relation's mirror and handed to the combinator:
//!
//! ```text
//! u <  c   ==>   c >  u
//! u <= c   ==>   c >= u
//! u == c   ==>   c == u
//! u != c   ==>   c != u
//! ```

use crate::combinator::Satisfy;
use crate::fold::relation::{Equal, Greater, GreaterEqual, Less, LessEqual, NotEqual, Relation};

/// Probe-side comparisons against a combinator, available on every value.
///
/// ```
/// use dry_comparisons::prelude::*;
///
/// assert!(3_i32.less_than(&any_of![5, 3, 2, 4]));
/// assert!(3_i32.not_equals(&all_of![1, 2, 4]));
/// ```
pub trait Probe {
    /// `self R combinator`, for any relation `R` with a mirror.
    #[inline]
    fn relates<R, C>(&self, relation: &R, combinator: &C) -> Result<bool, R::Error>
    where
        R: Relation,
        C: Satisfy<R::Mirror, Self>,
    {
        combinator.try_satisfy(&relation.mirror(), self)
    }

    /// `self == combinator`
    #[inline]
    fn equals<C: Satisfy<Equal, Self>>(&self, combinator: &C) -> bool {
        combinator.satisfy(&Equal.mirror(), self)
    }

    /// `self != combinator`
    #[inline]
    fn not_equals<C: Satisfy<NotEqual, Self>>(&self, combinator: &C) -> bool {
        combinator.satisfy(&NotEqual.mirror(), self)
    }

    /// `self < combinator`, i.e. `combinator > self`
    #[inline]
    fn less_than<C: Satisfy<Greater, Self>>(&self, combinator: &C) -> bool {
        combinator.satisfy(&Less.mirror(), self)
    }

    /// `self <= combinator`, i.e. `combinator >= self`
    #[inline]
    fn less_equal<C: Satisfy<GreaterEqual, Self>>(&self, combinator: &C) -> bool {
        combinator.satisfy(&LessEqual.mirror(), self)
    }

    /// `self > combinator`, i.e. `combinator < self`
    #[inline]
    fn greater_than<C: Satisfy<Less, Self>>(&self, combinator: &C) -> bool {
        combinator.satisfy(&Greater.mirror(), self)
    }

    /// `self >= combinator`, i.e. `combinator <= self`
    #[inline]
    fn greater_equal<C: Satisfy<LessEqual, Self>>(&self, combinator: &C) -> bool {
        combinator.satisfy(&GreaterEqual.mirror(), self)
    }
}

impl<U: ?Sized> Probe for U {}
