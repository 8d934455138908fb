//! Callable composition.
//!
//! Calling a combinator calls every element with the same arguments and
//! wraps the results in a new combinator of the same kind:
//!
//! ```text
//! all_of![f, g].call((x,))  ==>  all_of![f(x), g(x)]
//! ```
//!
//! No truth is decided here; compare or convert the result afterwards.

use crate::bind::Borrowed;
use crate::combinator::Combinator;
use crate::fold::Kind;

/// Something callable with the argument tuple `Args`.
///
/// Implemented for every `Fn` of arity 0 to 6, and for combinators whose
/// elements are all callable with `Args`, so compositions nest.
#[diagnostic::on_unimplemented(
    message = "`{Self}` cannot be called with arguments `{Args}`",
    label = "not callable with `{Args}`",
    note = "arguments are passed as a tuple: `.call((a, b))`, `.call((a,))`, `.call(())`"
)]
pub trait Callable<Args> {
    type Output;

    fn call(&self, args: Args) -> Self::Output;
}

macro_rules! impl_callable {
    ($($A:ident $a:ident),*) => {
        impl<F, R, $($A,)*> Callable<($($A,)*)> for F
        where
            F: Fn($($A),*) -> R,
        {
            type Output = R;

            #[inline(always)]
            fn call(&self, ($($a,)*): ($($A,)*)) -> R {
                self($($a),*)
            }
        }
    };
}

impl_callable!();
impl_callable!(A0 a0);
impl_callable!(A0 a0, A1 a1);
impl_callable!(A0 a0, A1 a1, A2 a2);
impl_callable!(A0 a0, A1 a1, A2 a2, A3 a3);
impl_callable!(A0 a0, A1 a1, A2 a2, A3 a3, A4 a4);
impl_callable!(A0 a0, A1 a1, A2 a2, A3 a3, A4 a4, A5 a5);

impl<F: Callable<Args> + ?Sized, Args> Callable<Args> for Borrowed<'_, F> {
    type Output = F::Output;

    #[inline(always)]
    fn call(&self, args: Args) -> F::Output {
        self.get().call(args)
    }
}

/// Call every element of a tuple with the same arguments.
///
/// Every element but the last gets a clone of `args`; the last one gets
/// `args` itself. A single element therefore needs no `Clone`, which lets
/// `&mut` and other move-only arguments through.
#[diagnostic::on_unimplemented(
    message = "the elements `{Self}` cannot all be called with `{Args}`",
    label = "some element is not callable with `{Args}`, or `{Args}` is not `Clone`",
    note = "calling more than one element clones the arguments for all but the last"
)]
pub trait Invoke<Args> {
    type Output;

    fn invoke(&self, args: Args) -> Self::Output;
}

impl<Args> Invoke<Args> for () {
    type Output = ();

    #[inline]
    fn invoke(&self, _: Args) {}
}

macro_rules! impl_invoke {
    // Split off the last entry; it receives `args` by move.
    (@split [$($done:tt)*] ($L:ident, $lidx:tt)) => {
        impl_invoke!(@emit [$($done)*] ($L, $lidx));
    };
    (@split [$($done:tt)*] $head:tt $($rest:tt)+) => {
        impl_invoke!(@split [$($done)* $head] $($rest)+);
    };
    (@emit [$(($E:ident, $idx:tt))*] ($L:ident, $lidx:tt)) => {
        impl<Args, $($E,)* $L> Invoke<Args> for ($($E,)* $L,)
        where
            $($E: Callable<Args>, Args: Clone,)*
            $L: Callable<Args>,
        {
            type Output = ($(<$E as Callable<Args>>::Output,)* <$L as Callable<Args>>::Output,);

            #[inline]
            fn invoke(&self, args: Args) -> Self::Output {
                (
                    $(<$E as Callable<Args>>::call(&self.$idx, args.clone()),)*
                    <$L as Callable<Args>>::call(&self.$lidx, args),
                )
            }
        }
    };
    () => {};
    ($($entry:tt)+) => {
        impl_invoke!(@split [] $($entry)+);
    };
}

macros::for_each_tuple!(impl_invoke, 12);

impl<K: Kind, T> Combinator<K, T> {
    /// Call every element with `args`, left to right, and collect the
    /// results into a combinator of the same kind.
    ///
    /// ```
    /// use dry_comparisons::prelude::*;
    ///
    /// let positive = |x: i32| x > 0;
    /// let even = |x: i32| x % 2 == 0;
    /// assert!(all_of![positive, even].call((4,)).as_bool());
    /// assert!(any_of![|x: i32| x * 2, |x: i32| x + 1].call((3,)).eq(&6));
    /// ```
    #[inline]
    pub fn call<Args>(&self, args: Args) -> Combinator<K, T::Output>
    where
        T: Invoke<Args>,
    {
        Combinator::new(self.elements().invoke(args))
    }
}

impl<K: Kind, T: Invoke<Args>, Args> Callable<Args> for Combinator<K, T> {
    type Output = Combinator<K, T::Output>;

    #[inline]
    fn call(&self, args: Args) -> Self::Output {
        Combinator::call(self, args)
    }
}
