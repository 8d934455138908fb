//! Tests for borrowed / owned element binding.

use std::cell::Cell;
use std::cmp::Reverse;
use std::num::NonZeroU32;
use std::rc::Rc;

use dry_comparisons::prelude::*;

#[derive(Debug, PartialEq, PartialOrd)]
struct Version(u32, u32);

#[derive(PartialEq)]
struct Tagged<T>(T);

/// Comparable with `i32` only, never with itself.
struct Meters(i32);

impl PartialEq<i32> for Meters {
    fn eq(&self, other: &i32) -> bool {
        self.0 == *other
    }
}

// =============================================================================
// Borrowed
// =============================================================================

#[test]
fn test_borrowed_element_observes_mutation() {
    let level = Cell::new(1);
    let c = any_of![&level, Cell::new(7)];

    assert!(!c.eq(&Cell::new(3)));
    level.set(3);
    assert!(c.eq(&Cell::new(3)));
}

#[test]
fn test_borrowed_boolean_view() {
    let ready = Cell::new(false);
    let gate = all_of![&ready, true];

    assert!(!gate.as_bool());
    ready.set(true);
    assert!(gate.as_bool());
}

#[test]
fn test_user_type_by_reference() {
    let (a, b) = (Meters(1), Meters(2));
    let c = none_of![&a, &b];
    assert!(c.eq(&3));
    assert!(!c.eq(&2));
}

#[test]
fn test_unique_reference_is_borrowed() {
    let mut count = 5;
    let c = any_of![&mut count, 9];
    assert!(c.eq(&5));
    assert!(c.lt(&6));
}

#[test]
fn test_pointee_through_owning_pointer() {
    let boxed = Box::new(3);
    let shared: Rc<str> = Rc::from("shared");

    assert!(any_of![&*boxed, 4].eq(&3));
    assert!(any_of![&*shared].eq("shared"));
    assert_eq!(Rc::strong_count(&shared), 1);
}

#[test]
fn test_into_elements_keeps_borrow() {
    let kept = 10;
    let (borrowed, owned) = any_of![&kept, 20].into_elements();
    assert!(std::ptr::eq(borrowed.get(), &kept));
    assert_eq!(owned, 20);
}

// =============================================================================
// Owned
// =============================================================================

#[test]
fn test_owned_element_is_independent() {
    let original = Cell::new(5);
    let c = all_of![original.clone()];

    original.set(6);
    assert!(c.eq(&Cell::new(5)));
    assert!(!c.eq(&Cell::new(6)));
}

#[test]
fn test_user_types_by_value() {
    let releases = any_of![Version(1, 0), Version(2, 0)];
    assert!(releases.eq(&Version(2, 0)));
    assert!(releases.lt(&Version(1, 5)));
    assert!(!releases.gt(&Version(2, 0)));

    let tags = all_of![Tagged('x'), Tagged('x')];
    assert!(tags.eq(&Tagged('x')));
    assert!(!tags.eq(&Tagged('y')));

    assert!(none_of![Meters(1), Meters(2)].eq(&3));
}

#[test]
fn test_std_types_by_value() {
    assert!(any_of![(1, 'a'), (2, 'b')].eq(&(2, 'b')));
    assert!(all_of![Reverse(3), Reverse(5)].lt(&Reverse(2)));

    let one = NonZeroU32::MIN;
    let four = NonZeroU32::new(4).unwrap();
    assert!(none_of![one, four].eq(&NonZeroU32::MAX));
    assert!(any_of![one, four].ge(&four));
}

#[test]
fn test_owning_pointers_compare_as_themselves() {
    let shared: Rc<str> = Rc::from("shared");
    let c = any_of![shared.clone()];
    assert!(c.eq(&shared));
    assert_eq!(Rc::strong_count(&shared), 2);

    assert!(any_of![Box::new(3), Box::new(4)].gt(&Box::new(3)));
}

#[test]
fn test_composition_results_compare() {
    let pair = |x: i32| (x, x + 1);
    assert!(any_of![pair].call((1,)).eq(&(1, 2)));
    assert!(all_of![pair, |x: i32| (x, 0)].call((4,)).gt(&(3, 9)));
}

#[test]
fn test_function_form_stores_elements_as_given() {
    let (a, b) = (1, 2);
    let raw = any_of((&a, &b));
    assert!(raw.eq(&&2));
    assert!(std::ptr::eq(raw.elements().0, &a));
}

#[test]
fn test_type_parameter_binds_owned() {
    fn single<T: PartialEq>(value: T) -> AnyOf<(T,)> {
        any_of![value]
    }

    assert!(single(Version(1, 1)).eq(&Version(1, 1)));
    assert!(single(&7).eq(&&7));
}
