use lexkit_diagnostic::messages::{INTEGER_TOO_LARGE, INVALID_UTF8};
use proptest::prelude::*;

use super::*;

#[test]
fn from_length_zero_is_nothing() {
    assert_eq!(MatchResult::from_length(0), MatchResult::Nothing);
}

#[test]
fn explicit_zero_success_is_allowed() {
    let result = MatchResult::success(0);
    assert!(result.is_success());
    assert_eq!(result.length(), Some(0));
}

#[test]
fn predicates() {
    let failure: MatchResult = MatchResult::failure(&INTEGER_TOO_LARGE, 3);
    assert!(failure.is_failure());
    assert!(!failure.is_success());
    assert_eq!(failure.length(), None);
    assert!(MatchResult::<()>::Nothing.is_nothing());
}

#[test]
fn map_keeps_variant() {
    let success = MatchResult::from_length(2).map(|()| 7u8);
    assert_eq!(success, MatchResult::Success { length: 2, value: 7 });

    let failure = MatchResult::<()>::failure(&INVALID_UTF8, 1).map(|()| 7u8);
    assert!(matches!(failure, MatchResult::Failure { message, length: 1 } if message.is(&INVALID_UTF8)));

    assert_eq!(MatchResult::Nothing.map(|()| 7u8), MatchResult::Nothing);
}

#[test]
fn or_else_only_on_nothing() {
    let alt = || MatchResult::from_length(9);
    assert_eq!(MatchResult::Nothing.or_else(alt), MatchResult::from_length(9));
    assert_eq!(MatchResult::from_length(1).or_else(alt), MatchResult::from_length(1));

    let failure = MatchResult::failure(&INTEGER_TOO_LARGE, 2).or_else(alt);
    assert!(failure.is_failure());
}

proptest! {
    #[test]
    fn from_length_canonicalises(n in 1usize..usize::MAX) {
        prop_assert_eq!(MatchResult::from_length(n), MatchResult::Success { length: n, value: () });
    }
}
