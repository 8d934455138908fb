//! Tests for capability queries: which operations a given combinator has.

use std::cmp::Reverse;
use std::fmt;
use std::num::NonZeroU32;

use dry_comparisons::detect::*;
use dry_comparisons::prelude::*;
use dry_comparisons::supports;

#[derive(PartialEq)]
struct Opaque(u8);

#[derive(Debug, PartialEq, PartialOrd)]
struct Score(u32);

#[test]
fn test_relations_follow_elements() {
    assert!(supports!(AnyOf<(i32, i32)>: Satisfy<Equal, i32>));
    assert!(supports!(AnyOf<(i32, i32)>: Satisfy<Less, i32>));
    assert!(supports!(AllOf<(Borrowed<'_, Opaque>,)>: Satisfy<Equal, Opaque>));
    assert!(!supports!(AllOf<(Borrowed<'_, Opaque>,)>: Satisfy<Less, Opaque>));
    assert!(supports!(NoneOf<(Score, Borrowed<'_, Score>)>: Satisfy<GreaterEqual, Score>));
}

#[test]
fn test_owned_elements_compare_as_themselves() {
    assert!(supports!(AnyOf<(Score,)>: Satisfy<GreaterEqual, Score>));
    assert!(supports!(AnyOf<(Opaque,)>: Satisfy<Equal, Opaque>));
    assert!(supports!(AnyOf<((i32, i32),)>: Satisfy<Equal, (i32, i32)>));
    assert!(supports!(AnyOf<(NonZeroU32,)>: Satisfy<Less, NonZeroU32>));
    assert!(supports!(AllOf<(Reverse<u8>, Reverse<u8>)>: Satisfy<Greater, Reverse<u8>>));
}

#[test]
fn test_macro_built_types() {
    fn relates_to_score<C: Satisfy<GreaterEqual, Score>>(_: &C) -> bool {
        true
    }

    let kept = Score(4);
    let c = none_of![Score(1), &kept];
    assert!(relates_to_score(&c));
    assert!(!c.ge(&Score(3)));
    assert!(c.ge(&Score(5)));
}

#[test]
fn test_one_missing_element_removes_only_that_relation() {
    assert!(!supports!(AnyOf<(i32, Borrowed<'_, Opaque>)>: Satisfy<Equal, i32>));
    assert!(!supports!(AnyOf<(i32, Borrowed<'_, Opaque>)>: Satisfy<AsBool, ()>));
    assert!(supports!(AnyOf<(bool, Borrowed<'_, bool>)>: Satisfy<AsBool, ()>));
    assert!(supports!(AnyOf<(bool, &bool)>: Satisfy<AsBool, ()>));
}

#[test]
fn test_boolean_view() {
    assert!(Detect::<AnyOf<(bool, bool)>>::IS_TRUTHY);
    assert!(!Detect::<AnyOf<(bool, u8)>>::IS_TRUTHY);
    assert!(Detect::<AnyOf<(AllOf<(bool,)>, bool)>>::IS_TRUTHY);
}

#[test]
fn test_printing() {
    assert!(Detect::<NoneOf<(i32, String)>>::IS_DISPLAY);
    assert!(Detect::<NoneOf<(Score,)>>::IS_DEBUG);
    assert!(!Detect::<NoneOf<(Score,)>>::IS_DISPLAY);
    assert!(!Detect::<NoneOf<(Opaque,)>>::IS_DEBUG);
    assert!(supports!(AnyOf<()>: fmt::Display));
}

#[test]
fn test_calling() {
    assert!(supports!(AllOf<(fn(i32) -> bool, fn(i32) -> i32)>: Callable<(i32,)>));
    assert!(!supports!(AllOf<(fn(i32) -> bool, i32)>: Callable<(i32,)>));
    assert!(!supports!(AllOf<(fn(i32) -> bool,)>: Callable<(i32, i32)>));
    assert!(supports!(AnyOf<()>: Callable<(u8,)>));
}

#[test]
fn test_copy_and_clone() {
    assert!(Detect::<AnyOf<(i32, char)>>::IS_COPY);
    assert!(Detect::<AnyOf<(i32, String)>>::IS_CLONE);
    assert!(!Detect::<AnyOf<(i32, String)>>::IS_COPY);
    assert!(Detect::<AnyOf<(Borrowed<'static, String>,)>>::IS_COPY);
}

#[test]
fn test_bounds_in_generic_code() {
    fn describe<C>(c: &C) -> String
    where
        C: fmt::Display + Satisfy<Less, i32>,
    {
        format!("{c} < 10: {}", c.try_satisfy(&Less, &10) == Ok(true))
    }

    assert_eq!(describe(&all_of![1, 2]), "all_of{1,2} < 10: true");
    assert_eq!(describe(&any_of![11, 12]), "any_of{11,12} < 10: false");
}

#[test]
fn test_static_no_fail_query() {
    const GUARANTEED: bool = <AnyOf<(i32, i32)> as Satisfy<Equal, i32>>::NO_FAIL;
    assert!(GUARANTEED);
}
