//! Borrowed elements.
//!
//! A reference argument (`&T`, `&mut T`) is stored as `Borrowed<'a, T>`: a
//! back-reference to a value living at the construction site. Every later
//! change the original goes through is observed (via interior mutability,
//! since a shared borrow freezes the rest).
//!
//! `Borrowed` compares, prints and converts exactly like `T`, so
//! `Borrowed<'_, T>: PartialEq<U>` holds whenever `T: PartialEq<U>`.

use core::borrow::Borrow;
use core::cmp::Ordering;
use core::fmt;
use core::ops::Deref;

/// A non-owning element.
#[repr(transparent)]
pub struct Borrowed<'a, T: ?Sized>(&'a T);

impl<'a, T: ?Sized> Borrowed<'a, T> {
    #[inline(always)]
    pub const fn new(value: &'a T) -> Self {
        Borrowed(value)
    }

    /// The original value, with the lifetime of the borrow.
    #[inline(always)]
    pub const fn get(&self) -> &'a T {
        self.0
    }
}

impl<T: ?Sized> Clone for Borrowed<'_, T> {
    #[inline(always)]
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: ?Sized> Copy for Borrowed<'_, T> {}

impl<T: ?Sized> Deref for Borrowed<'_, T> {
    type Target = T;

    #[inline(always)]
    fn deref(&self) -> &T {
        self.0
    }
}

impl<T: ?Sized> AsRef<T> for Borrowed<'_, T> {
    #[inline(always)]
    fn as_ref(&self) -> &T {
        self.0
    }
}

impl<T: ?Sized> Borrow<T> for Borrowed<'_, T> {
    #[inline(always)]
    fn borrow(&self) -> &T {
        self.0
    }
}

// =============================================================================
// Forwarded capabilities
// =============================================================================

impl<T: ?Sized + PartialEq<U>, U: ?Sized> PartialEq<U> for Borrowed<'_, T> {
    #[inline(always)]
    fn eq(&self, other: &U) -> bool {
        self.0.eq(other)
    }

    #[inline(always)]
    #[allow(clippy::partialeq_ne_impl)]
    fn ne(&self, other: &U) -> bool {
        self.0.ne(other)
    }
}

impl<T: ?Sized + PartialOrd<U>, U: ?Sized> PartialOrd<U> for Borrowed<'_, T> {
    #[inline(always)]
    fn partial_cmp(&self, other: &U) -> Option<Ordering> {
        self.0.partial_cmp(other)
    }

    #[inline(always)]
    fn lt(&self, other: &U) -> bool {
        self.0.lt(other)
    }

    #[inline(always)]
    fn le(&self, other: &U) -> bool {
        self.0.le(other)
    }

    #[inline(always)]
    fn gt(&self, other: &U) -> bool {
        self.0.gt(other)
    }

    #[inline(always)]
    fn ge(&self, other: &U) -> bool {
        self.0.ge(other)
    }
}

impl<T: ?Sized + fmt::Display> fmt::Display for Borrowed<'_, T> {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self.0, f)
    }
}

impl<T: ?Sized + fmt::Debug> fmt::Debug for Borrowed<'_, T> {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self.0, f)
    }
}
