//! `supports!` - trait detection on concrete types.

/// Check if a concrete type implements a trait at compile time.
///
/// Uses the "Inherent Const Fallback" pattern: an inherent const shadows
/// a trait const when the bound is satisfied. The trait may carry generic
/// arguments, so relation and call capabilities can be queried too.
///
/// Unlike a bare trait name, the pattern is a full trait path with its
/// generic arguments (`Satisfy<Less, i32>`, `Callable<(u8,)>`), so the
/// question can name the relation and probe type being asked about.
///
/// **Note**: Only works for concrete types. For generic contexts, use a
/// trait bound.
///
/// # Usage
///
/// ```
/// use dry_comparisons::prelude::*;
/// use dry_comparisons::supports;
///
/// assert!(supports!(AnyOf<(i32, i32)>: Satisfy<Equal, i32>));
/// assert!(!supports!(AnyOf<(i32, &str)>: Satisfy<Equal, i32>));
/// ```
#[macro_export]
macro_rules! supports {
    ($T:ty : $Trait:path) => {{
        struct __Probe<__T: ?Sized>(core::marker::PhantomData<__T>);

        trait __Fallback { const VAL: bool = false; }
        impl<__T: ?Sized> __Fallback for __Probe<__T> {}

        impl<__T: ?Sized + $Trait> __Probe<__T> {
            #[allow(dead_code)]
            const VAL: bool = true;
        }

        __Probe::<$T>::VAL
    }};
}
