//! # Layer 3: The Combinator
//!
//! `Combinator<K, T>` wraps a tuple of elements `T` and a kind `K`. It is
//! never mutated after construction; the call operator builds a new one.
//!
//! | Kind  | Alias       | `c OP u` holds when                    |
//! |-------|-------------|----------------------------------------|
//! | `Or`  | `AnyOf<T>`  | some element satisfies `e OP u`        |
//! | `And` | `AllOf<T>`  | every element satisfies `e OP u`       |
//! | `Nor` | `NoneOf<T>` | no element satisfies `e OP u`          |

use core::convert::Infallible;
use core::marker::PhantomData;
use core::ops::Not;

use crate::bind::Truthy;
use crate::fold::{
    And, AsBool, Elements, Equal, Fold, Greater, GreaterEqual, Kind, Less, LessEqual,
    Nor, NotEqual, Or, Quantifier, Relation,
};
use crate::primitives::Bool;

/// A fixed, ordered set of elements folded with the connective of `K`.
pub struct Combinator<K, T> {
    elements: T,
    kind: PhantomData<K>,
}

/// `any_of{...}`
pub type AnyOf<T> = Combinator<Or, T>;

/// `all_of{...}`
pub type AllOf<T> = Combinator<And, T>;

/// `none_of{...}`
pub type NoneOf<T> = Combinator<Nor, T>;

/// Build an `any_of` combinator from a tuple of elements.
///
/// The elements are stored exactly as given. `any_of![..]` additionally
/// binds reference arguments as [`Borrowed`](crate::bind::Borrowed).
#[inline(always)]
pub const fn any_of<T>(elements: T) -> AnyOf<T> {
    Combinator::new(elements)
}

/// Build an `all_of` combinator from a tuple of elements.
#[inline(always)]
pub const fn all_of<T>(elements: T) -> AllOf<T> {
    Combinator::new(elements)
}

/// Build a `none_of` combinator from a tuple of elements.
#[inline(always)]
pub const fn none_of<T>(elements: T) -> NoneOf<T> {
    Combinator::new(elements)
}

impl<K, T> Combinator<K, T> {
    #[inline(always)]
    pub const fn new(elements: T) -> Self {
        Combinator { elements, kind: PhantomData }
    }

    /// The stored elements, in construction order.
    #[inline(always)]
    pub const fn elements(&self) -> &T {
        &self.elements
    }

    #[inline(always)]
    pub fn into_elements(self) -> T {
        self.elements
    }
}

impl<K: Kind, T> Combinator<K, T> {
    #[inline(always)]
    pub const fn quantifier(&self) -> Quantifier {
        K::QUANTIFIER
    }

    /// Printed name of the kind (`"any_of"`, `"all_of"`, `"none_of"`).
    #[inline(always)]
    pub const fn name(&self) -> &'static str {
        K::NAME
    }
}

impl<K, T: Elements> Combinator<K, T> {
    #[inline(always)]
    pub const fn len(&self) -> usize {
        T::LEN
    }

    #[inline(always)]
    pub const fn is_empty(&self) -> bool {
        T::LEN == 0
    }
}

impl<K, T: Clone> Clone for Combinator<K, T> {
    #[inline]
    fn clone(&self) -> Self {
        Combinator::new(self.elements.clone())
    }
}

impl<K, T: Copy> Copy for Combinator<K, T> {}

// =============================================================================
// Satisfy - the relational capability
// =============================================================================

/// "This combinator supports relation `R` against `U`."
///
/// Implemented exactly when every element supports `R` with `U`, so it
/// doubles as the capability query for generic code.
#[diagnostic::on_unimplemented(
    message = "`{Self}` cannot be compared under `{R}` with `{U}`",
    label = "some element does not support `{R}` with `{U}`",
    note = "only this relation is unavailable; other operations on the same combinator stay usable"
)]
pub trait Satisfy<R: Relation, U: ?Sized> {
    /// `Present` when no element's test can fail.
    type NoFail: Bool;

    /// Static no-fail guarantee as a const.
    const NO_FAIL: bool = <Self::NoFail as Bool>::VALUE;

    /// Fold `R` across the elements. The first element error is returned as is.
    fn try_satisfy(&self, relation: &R, probe: &U) -> Result<bool, R::Error>;

    /// Fold an infallible relation.
    #[inline]
    fn satisfy(&self, relation: &R, probe: &U) -> bool
    where
        R: Relation<Error = Infallible>,
    {
        match self.try_satisfy(relation, probe) {
            Ok(result) => result,
            Err(never) => match never {},
        }
    }
}

impl<K, T, R, U> Satisfy<R, U> for Combinator<K, T>
where
    K: Kind,
    R: Relation,
    T: Fold<R, U>,
    U: ?Sized,
{
    type NoFail = <T as Fold<R, U>>::NoFail;

    #[inline]
    fn try_satisfy(&self, relation: &R, probe: &U) -> Result<bool, R::Error> {
        self.elements.fold::<K>(relation, probe)
    }
}

// =============================================================================
// Comparison Methods (generated)
// =============================================================================

macro_rules! comparison_methods {
    ($($(#[$meta:meta])* $method:ident => $rel:ident;)*) => {
        #[allow(clippy::should_implement_trait)]
        impl<K: Kind, T> Combinator<K, T> {
            $(
                $(#[$meta])*
                #[inline]
                pub fn $method<U: ?Sized>(&self, probe: &U) -> bool
                where
                    T: Fold<$rel, U>,
                {
                    self.satisfy(&$rel, probe)
                }
            )*
        }
    };
}

comparison_methods! {
    /// `combinator == probe`
    ///
    /// ```
    /// use dry_comparisons::prelude::*;
    ///
    /// assert!(any_of![1, 3, 5].eq(&3));
    /// assert!(!all_of![3, 2, 3].eq(&3));
    /// ```
    eq => Equal;
    /// `combinator != probe`, folding `e != probe` per element.
    ///
    /// For `none_of` this is "no element differs from the probe".
    ne => NotEqual;
    /// `combinator < probe`
    lt => Less;
    /// `combinator <= probe`
    le => LessEqual;
    /// `combinator > probe`
    gt => Greater;
    /// `combinator >= probe`
    ge => GreaterEqual;
}

// =============================================================================
// Boolean View
// =============================================================================

impl<K: Kind, T: Fold<AsBool, ()>> Combinator<K, T> {
    /// Fold the elements themselves, read as `bool`.
    ///
    /// ```
    /// use dry_comparisons::prelude::*;
    ///
    /// assert!(any_of![false, true].as_bool());
    /// assert!(!all_of![true, false].as_bool());
    /// assert!(none_of![false, false].as_bool());
    /// ```
    #[inline]
    pub fn as_bool(&self) -> bool {
        self.satisfy(&AsBool, &())
    }
}

impl<K: Kind, T: Fold<AsBool, ()>> Truthy for Combinator<K, T> {
    #[inline]
    fn truthy(&self) -> bool {
        self.as_bool()
    }
}

impl<K: Kind, T: Fold<AsBool, ()>> Not for Combinator<K, T> {
    type Output = bool;

    #[inline]
    fn not(self) -> bool {
        !self.as_bool()
    }
}

impl<K: Kind, T: Fold<AsBool, ()>> Not for &Combinator<K, T> {
    type Output = bool;

    #[inline]
    fn not(self) -> bool {
        !self.as_bool()
    }
}

impl<K: Kind, T: Fold<AsBool, ()>> From<Combinator<K, T>> for bool {
    #[inline]
    fn from(combinator: Combinator<K, T>) -> bool {
        combinator.as_bool()
    }
}

impl<K: Kind, T: Fold<AsBool, ()>> From<&Combinator<K, T>> for bool {
    #[inline]
    fn from(combinator: &Combinator<K, T>) -> bool {
        combinator.as_bool()
    }
}
