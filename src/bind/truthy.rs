//! Boolean conversion of a single element.

use core::cell::Cell;

use crate::bind::borrowed::Borrowed;

#[cfg(feature = "alloc")]
use alloc::{boxed::Box, rc::Rc, sync::Arc};

/// An element that converts to `bool` on its own, without a probe.
#[diagnostic::on_unimplemented(
    message = "`{Self}` has no boolean view",
    label = "`{Self}` does not implement `Truthy`",
    note = "wrap a deferred predicate with `lazy(..)`, or map the elements to `bool` with `.call(..)` first"
)]
pub trait Truthy {
    fn truthy(&self) -> bool;
}

impl Truthy for bool {
    #[inline(always)]
    fn truthy(&self) -> bool {
        *self
    }
}

impl Truthy for Cell<bool> {
    #[inline(always)]
    fn truthy(&self) -> bool {
        self.get()
    }
}

impl<T: Truthy + ?Sized> Truthy for &T {
    #[inline(always)]
    fn truthy(&self) -> bool {
        (**self).truthy()
    }
}

impl<T: Truthy + ?Sized> Truthy for &mut T {
    #[inline(always)]
    fn truthy(&self) -> bool {
        (**self).truthy()
    }
}

impl<T: Truthy + ?Sized> Truthy for Borrowed<'_, T> {
    #[inline(always)]
    fn truthy(&self) -> bool {
        self.get().truthy()
    }
}

#[cfg(feature = "alloc")]
impl<T: Truthy + ?Sized> Truthy for Box<T> {
    #[inline(always)]
    fn truthy(&self) -> bool {
        (**self).truthy()
    }
}

#[cfg(feature = "alloc")]
impl<T: Truthy + ?Sized> Truthy for Rc<T> {
    #[inline(always)]
    fn truthy(&self) -> bool {
        (**self).truthy()
    }
}

#[cfg(feature = "alloc")]
impl<T: Truthy + ?Sized> Truthy for Arc<T> {
    #[inline(always)]
    fn truthy(&self) -> bool {
        (**self).truthy()
    }
}

// =============================================================================
// Lazy - deferred predicate
// =============================================================================

/// A predicate evaluated only when the fold reaches it.
///
/// ```
/// use dry_comparisons::prelude::*;
///
/// let settled = any_of![lazy(|| true), lazy(|| unreachable!("never reached"))];
/// assert!(settled.as_bool());
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Lazy<F>(pub F);

/// Wrap a nullary predicate so it can sit in a boolean fold.
#[inline(always)]
pub const fn lazy<F: Fn() -> bool>(predicate: F) -> Lazy<F> {
    Lazy(predicate)
}

impl<F: Fn() -> bool> Truthy for Lazy<F> {
    #[inline(always)]
    fn truthy(&self) -> bool {
        (self.0)()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_and_cell() {
        assert!(true.truthy());
        assert!(!false.truthy());
        let flag = Cell::new(false);
        assert!(!(&flag).truthy());
        flag.set(true);
        assert!((&flag).truthy());
        assert!(Borrowed::new(&flag).truthy());
    }

    #[test]
    fn test_lazy_runs_on_demand() {
        let calls = Cell::new(0);
        let predicate = lazy(|| {
            calls.set(calls.get() + 1);
            true
        });
        assert_eq!(calls.get(), 0);
        assert!(predicate.truthy());
        assert!(predicate.truthy());
        assert_eq!(calls.get(), 2);
    }
}
