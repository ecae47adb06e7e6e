//! Tests for the order in which preconditions are checked
//!
//! When an input violates several preconditions at once, the first check in
//! the documented order decides the error kind.

use checkops_core::*;
use std::collections::{BTreeMap, HashMap};

#[test]
fn test_absent_sequence_wins_over_bad_index() {
    for index in [-5, 0, 2, isize::MAX] {
        let err = sum_sequence_up_to::<i64>(None, index).unwrap_err();
        assert_eq!(err, OpError::NullInput { name: "sequence" });
    }
}

#[test]
fn test_bad_index_wins_over_overflow() {
    let values = [i32::MAX, i32::MAX];
    let err = sum_sequence_up_to(Some(&values[..]), 2).unwrap_err();
    assert_eq!(err, OpError::IndexOutOfRange { index: 2, len: 2 });
}

#[test]
fn test_missing_key_wins_over_malformed_text() {
    // every stored value is malformed, so only the lookup can fail first
    let map: BTreeMap<&str, &str> = [("a", "x1"), ("b", "")].into_iter().collect();

    let err = get_element_as_number::<i32, _, _>(&map, "c").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::KeyNotFound);

    let err = get_element_as_number::<i32, _, _>(&map, "a").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::FormatError);
}

#[test]
fn test_zero_divisor_wins_over_overflow() {
    let err = divide_integers(i64::MIN, 0).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::DivideByZero);
}

#[test]
fn test_discount_checked_before_price() {
    let err = calculate_discount(Decimal::from(-5), Decimal::from(150)).unwrap_err();
    match err {
        OpError::InvalidArgument { name, .. } => assert_eq!(name, "discount"),
        other => panic!("Expected InvalidArgument, got {other:?}"),
    }
}

#[test]
fn test_lookup_accepts_borrowed_keys() {
    let owned: HashMap<String, String> = HashMap::from([("n".to_string(), "42".to_string())]);
    assert_eq!(get_element_as_number::<u16, _, _>(&owned, "n"), Ok(42));

    let key = String::from("n");
    assert_eq!(
        get_element_as_number::<u16, _, _>(&owned, key.as_str()),
        Ok(42)
    );
}
