//! Variadic construction macros.
//!
//! `any_of![a, b, c]` is `any_of((a, b, c))` with each argument bound on
//! its own: a reference (`&x`, `&mut x`, or a variable holding one) is
//! stored as `Borrowed`, anything else is moved in and compares as itself.
//!
//! A borrow must outlive the combinator; binding a temporary that is
//! dropped first is rejected at compile time:
//!
//! ```compile_fail
//! use dry_comparisons::any_of;
//!
//! let escaped = {
//!     let local = 3;
//!     any_of![&local, 4]
//! };
//! assert!(escaped.eq(&3));
//! ```

// =============================================================================
// any_of! / all_of! / none_of!
// =============================================================================

/// Build an `any_of` combinator: true when *some* element satisfies the relation.
///
/// ```
/// use dry_comparisons::any_of;
///
/// let x = 3;
/// assert!(any_of![1, 3, 5].eq(&x));
/// assert!(!any_of![1, 2, 5].eq(&x));
/// ```
#[macro_export]
macro_rules! any_of {
    ($($element:expr),* $(,)?) => {
        $crate::any_of(($($crate::__bind!($element),)*))
    };
}

/// Build an `all_of` combinator: true when *every* element satisfies the relation.
///
/// ```
/// use dry_comparisons::all_of;
///
/// assert!(all_of![3, 3, 3].eq(&3));
/// assert!(all_of![4, 5, 6].gt(&3));
/// ```
#[macro_export]
macro_rules! all_of {
    ($($element:expr),* $(,)?) => {
        $crate::all_of(($($crate::__bind!($element),)*))
    };
}

/// Build a `none_of` combinator: true when *no* element satisfies the relation.
///
/// ```
/// use dry_comparisons::none_of;
///
/// assert!(none_of![1, 2, 4].eq(&3));
/// assert!(!none_of![1, 3, 4].eq(&3));
/// ```
#[macro_export]
macro_rules! none_of {
    ($($element:expr),* $(,)?) => {
        $crate::none_of(($($crate::__bind!($element),)*))
    };
}
