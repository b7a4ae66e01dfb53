//! Property-based tests for validation sessions.

use assurance::prelude::*;
use proptest::prelude::*;
use serde_json::{Value, json};

fn element() -> impl Strategy<Value = Value> {
    prop_oneof![
        "[a-z]{0,6}".prop_map(Value::from),
        any::<i32>().prop_map(Value::from),
        any::<bool>().prop_map(Value::from),
        Just(Value::Null),
    ]
}

// ============================================================================
// PATHS: array element errors name their index
// ============================================================================

proptest! {
    #[test]
    fn array_errors_name_offending_indices(items in prop::collection::vec(element(), 0..12)) {
        let expected: Vec<String> = items
            .iter()
            .enumerate()
            .filter(|(_, item)| !item.is_string())
            .map(|(i, _)| format!("list[{i}]"))
            .collect();

        let mut data = json!({ "list": items });
        let mut session = Assurance::new(&mut data);
        session.nest("list", |item| {
            item.it().is(ValueKind::String);
        });

        let actual: Vec<String> = session
            .end()
            .iter()
            .filter_map(|e| e.param.clone())
            .collect();
        prop_assert_eq!(actual, expected);
    }

    #[test]
    fn nested_object_paths_are_dotted(outer in "[a-z]{1,6}", inner in "[a-z]{1,6}") {
        let mut data = json!({ outer.clone(): { inner.clone(): 1 } });
        let mut session = Assurance::new(&mut data);
        session.nest(&outer, |scope| {
            scope.me(&inner).is(ValueKind::String);
        });

        let param = session.end()[0].param.clone();
        prop_assert_eq!(param, Some(format!("{outer}.{inner}")));
    }
}

// ============================================================================
// OPTIONAL: missing values contribute nothing, present values are checked
// ============================================================================

proptest! {
    #[test]
    fn optional_skips_only_missing(value in element()) {
        let missing = value.is_null() || value == json!("");
        let mut data = json!({ "field": value });

        let errors = Assurance::single(&mut data, "field")
            .optional()
            .is(ValueKind::Array)
            .end();

        prop_assert_eq!(errors.is_empty(), missing);
    }
}

// ============================================================================
// LEAF CHECKS THROUGH A CHAIN
// ============================================================================

proptest! {
    #[test]
    fn is_positive_follows_sign(n in any::<i32>(), allow_zero in any::<bool>()) {
        let mut data = json!({ "n": n });
        let errors = Assurance::single(&mut data, "n").is_positive_with(allow_zero).end();

        let ok = if allow_zero { n >= 0 } else { n > 0 };
        prop_assert_eq!(errors.is_empty(), ok);
    }

    #[test]
    fn numeric_checks_on_strings_are_invalid_type(s in "[a-z]{0,8}", bound in any::<i16>()) {
        let mut data = json!({ "s": s });
        let errors = Assurance::single(&mut data, "s").gt(f64::from(bound)).end();
        prop_assert_eq!(errors.len(), 1);
        prop_assert_eq!(errors[0].kind, ErrorKind::InvalidType);
    }

    #[test]
    fn to_int_then_number_check_passes(n in any::<i64>()) {
        let mut data = json!({ "n": n.to_string() });
        let errors = Assurance::single(&mut data, "n")
            .to_int()
            .is(ValueKind::Number)
            .end();

        prop_assert!(errors.is_empty());
        prop_assert_eq!(&data["n"], &json!(n));
    }
}

// ============================================================================
// CUSTOM AND DEFAULT
// ============================================================================

proptest! {
    #[test]
    fn custom_appends_exactly_its_error(message in "[a-z ]{1,20}", fail in any::<bool>()) {
        let mut data = json!({ "field": 1 });
        let errors = Assurance::single(&mut data, "field")
            .custom(|_, errors| {
                if fail {
                    Err(errors.invalid_value(message.clone()))
                } else {
                    Ok(())
                }
            })
            .end();

        if fail {
            prop_assert_eq!(errors.len(), 1);
            prop_assert_eq!(&*errors[0].message, message.as_str());
        } else {
            prop_assert!(errors.is_empty());
        }
    }

    #[test]
    fn default_is_observed_by_later_checks(fallback in element()) {
        prop_assume!(!fallback.is_null() && fallback != json!(""));
        let kind = ValueKind::of(&fallback);

        let mut data = json!({});
        let errors = Assurance::single(&mut data, "field")
            .default(fallback.clone())
            .is(kind)
            .end();

        prop_assert!(errors.is_empty());
        prop_assert_eq!(&data["field"], &fallback);
    }
}

// ============================================================================
// ALLOW-LIST: excluded root fields never contribute errors
// ============================================================================

proptest! {
    #[test]
    fn only_listed_fields_report(allowed in prop::collection::btree_set("[a-d]", 0..4)) {
        let mut data = json!({ "a": 1, "b": 2, "c": 3, "d": 4 });
        let mut session = Assurance::new(&mut data).with_only(allowed.iter().cloned());

        for field in ["a", "b", "c", "d"] {
            session.me(field).is(ValueKind::String);
        }

        let reported: Vec<String> = session.end().iter().filter_map(|e| e.param.clone()).collect();
        let expected: Vec<String> = allowed.into_iter().collect();
        prop_assert_eq!(reported, expected);
    }
}
