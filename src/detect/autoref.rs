//! Autoref-based capability detection.
//!
//! For each capability `X` we want to detect:
//! 1. A fallback trait with `const IS_X: bool = false`
//! 2. The fallback implemented for `Detect<T>` for all `T`
//! 3. An inherent const `IS_X = true` on `Detect<T>` where `T: X`
//!
//! When resolving `Detect::<Concrete>::IS_X`, the compiler:
//! - If `Concrete: X`, finds the inherent const (true)
//! - Otherwise, finds the trait const (false)
//!
//! The fallback traits must be in scope (`use dry_comparisons::detect::*`).

use core::marker::PhantomData;

/// Detection wrapper type.
#[doc(hidden)]
pub struct Detect<T: ?Sized>(PhantomData<T>);

/// Generate fallback trait + inherent const for one capability.
macro_rules! impl_detect {
    ($($Cap:ident => $Trait:path;)*) => {
        $(
            ::paste::paste! {
                #[doc(hidden)]
                pub trait [<$Cap Fallback>] { const [<IS_ $Cap:upper>]: bool = false; }
                impl<T: ?Sized> [<$Cap Fallback>] for Detect<T> {}
                impl<T: ?Sized + $Trait> Detect<T> { pub const [<IS_ $Cap:upper>]: bool = true; }
            }
        )*
    };
}

impl_detect! {
    Display => core::fmt::Display;
    Debug => core::fmt::Debug;
    Truthy => crate::bind::Truthy;
    Comparable => PartialEq;
    Ordered => PartialOrd;
    Clone => Clone;
    Copy => Copy;
}
