//! Property-based tests for assurance-validator.

use assurance_validator::prelude::*;
use proptest::prelude::*;
use serde_json::{Value, json};

fn scalar() -> impl Strategy<Value = Value> {
    prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::from),
        any::<i64>().prop_map(Value::from),
        ".{0,12}".prop_map(Value::from),
    ]
}

// ============================================================================
// KINDS: every value has exactly one kind
// ============================================================================

proptest! {
    #[test]
    fn exactly_one_kind_matches(value in scalar()) {
        let matching = ValueKind::ALL
            .iter()
            .filter(|kind| is_kind(**kind).validate(&value).is_ok())
            .count();
        prop_assert_eq!(matching, 1);
    }

    #[test]
    fn kind_name_round_trips(index in 0usize..ValueKind::ALL.len()) {
        let kind = ValueKind::ALL[index];
        prop_assert_eq!(kind.name().parse::<ValueKind>().unwrap(), kind);
    }
}

// ============================================================================
// NUMERIC: failures split cleanly into InvalidType / InvalidValue
// ============================================================================

proptest! {
    #[test]
    fn positive_matches_sign(n in any::<i64>()) {
        prop_assert_eq!(positive().validate(&json!(n)).is_ok(), n >= 0);
        prop_assert_eq!(strictly_positive().validate(&json!(n)).is_ok(), n > 0);
    }

    #[test]
    fn numeric_failures_on_numbers_are_invalid_value(n in any::<i32>(), bound in any::<i32>()) {
        let value = json!(n);
        for result in [
            greater_than(f64::from(bound)).validate(&value),
            less_than(f64::from(bound)).validate(&value),
            max(f64::from(bound)).validate(&value),
        ] {
            if let Err(err) = result {
                prop_assert_eq!(err.kind, ErrorKind::InvalidValue);
            }
        }
    }

    #[test]
    fn numeric_checks_reject_strings_as_invalid_type(s in "[a-z]{0,8}") {
        let err = greater_than(0.0).validate(&json!(s)).unwrap_err();
        prop_assert_eq!(err.kind, ErrorKind::InvalidType);
    }
}

// ============================================================================
// SANITIZERS
// ============================================================================

proptest! {
    #[test]
    fn to_int_parses_integer_strings(n in any::<i64>(), pad in "[ ]{0,3}") {
        let input = json!(format!("{pad}{n}{pad}"));
        prop_assert_eq!(to_int().sanitize(&input).unwrap(), json!(n));
    }

    #[test]
    fn trim_is_idempotent(s in ".{0,20}") {
        let once = trim().sanitize(&json!(s)).unwrap();
        let twice = trim().sanitize(&once).unwrap();
        prop_assert_eq!(once, twice);
    }
}
