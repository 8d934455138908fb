//! Construction-time choice of binding mode.
//!
//! The construction macros run every argument through `__bind!`:
//!
//! ```text
//! Binder::of(&arg).tag().bind(arg)
//!
//! arg: &'a T       ->  SharedTag  ->  Borrowed<'a, T>
//! arg: &'a mut T   ->  UniqueTag  ->  Borrowed<'a, T>
//! arg: T           ->  OwnedTag   ->  T
//! ```
//!
//! `tag()` is resolved by autoref: the reference impls are found on
//! `Binder<_>` itself, the owned fallback only on `&Binder<_>`, so a
//! reference never reaches the fallback. The choice is made where the
//! argument type is concrete; a type parameter binds owned.

use core::marker::PhantomData;

use crate::bind::borrowed::Borrowed;

/// Carries the argument type into method resolution.
#[doc(hidden)]
pub struct Binder<E>(PhantomData<E>);

impl<E> Binder<E> {
    #[inline(always)]
    pub const fn of(_: &E) -> Self {
        Binder(PhantomData)
    }
}

#[doc(hidden)]
pub struct SharedTag;

#[doc(hidden)]
pub struct UniqueTag;

#[doc(hidden)]
pub struct OwnedTag;

#[doc(hidden)]
pub trait BindShared {
    fn tag(self) -> SharedTag;
}

impl<T: ?Sized> BindShared for Binder<&T> {
    #[inline(always)]
    fn tag(self) -> SharedTag {
        SharedTag
    }
}

#[doc(hidden)]
pub trait BindUnique {
    fn tag(self) -> UniqueTag;
}

impl<T: ?Sized> BindUnique for Binder<&mut T> {
    #[inline(always)]
    fn tag(self) -> UniqueTag {
        UniqueTag
    }
}

#[doc(hidden)]
pub trait BindOwned {
    fn tag(self) -> OwnedTag;
}

impl<E> BindOwned for &Binder<E> {
    #[inline(always)]
    fn tag(self) -> OwnedTag {
        OwnedTag
    }
}

impl SharedTag {
    #[inline(always)]
    pub const fn bind<T: ?Sized>(self, element: &T) -> Borrowed<'_, T> {
        Borrowed::new(element)
    }
}

impl UniqueTag {
    #[inline(always)]
    pub fn bind<T: ?Sized>(self, element: &mut T) -> Borrowed<'_, T> {
        Borrowed::new(element)
    }
}

impl OwnedTag {
    #[inline(always)]
    pub fn bind<T>(self, element: T) -> T {
        element
    }
}

/// Bind one construction argument: references borrowed, everything else
/// moved in.
#[doc(hidden)]
#[macro_export]
macro_rules! __bind {
    ($element:expr) => {
        match $element {
            element => {
                #[allow(unused_imports)]
                use $crate::bind::dispatch::{BindOwned as _, BindShared as _, BindUnique as _};
                $crate::bind::dispatch::Binder::of(&element).tag().bind(element)
            }
        }
    };
}
