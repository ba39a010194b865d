use super::*;
use crate::ValueError;
use chrono::TimeZone;
use pretty_assertions::assert_eq;

#[test]
fn factory_methods() {
    let s = Value::string("westus");
    assert_eq!(s.as_str(), Some("westus"));

    let list = Value::array(vec![Value::Integer(1), Value::Integer(2)]);
    assert_eq!(list.as_array().map(<[Value]>::len), Some(2));

    let obj = Value::object_from_pairs([("sku", "Standard"), ("tier", "Premium")]);
    assert_eq!(obj.as_object().map(ObjectMap::len), Some(2));

    let secret = Value::text_placeholder("parameters('adminPassword')");
    assert_eq!(
        secret.as_placeholder().and_then(Placeholder::as_text),
        Some("parameters('adminPassword')")
    );
}

#[test]
fn accessors_do_not_unwrap_placeholders() {
    let p = Value::placeholder(Placeholder::Array(vec![Value::Integer(1)]));
    assert_eq!(p.as_array(), None);
    assert_eq!(Value::text_placeholder("x").as_str(), None);
}

#[test]
fn object_construction_is_first_wins() {
    let obj = Value::object_from_pairs([("a", 1), ("b", 2), ("a", 3)]);
    let map = obj.as_object();
    assert_eq!(map.and_then(|m| m.get("a")), Some(&Value::Integer(1)));
    assert_eq!(map.map(ObjectMap::len), Some(2));
}

#[test]
fn collect_builds_arrays_and_objects() {
    let array: Value = (1_i64..=3).map(Value::Integer).collect();
    assert_eq!(array, Value::from(vec![1_i64, 2, 3]));

    let object: Value = vec![("k", Value::Boolean(true))].into_iter().collect();
    assert_eq!(object, Value::object_from_pairs([("k", true)]));
}

#[test]
fn display_is_literal_text() {
    assert_eq!(Value::Boolean(true).to_string(), "True");
    assert_eq!(Value::Boolean(false).to_string(), "False");
    assert_eq!(Value::Integer(-42).to_string(), "-42");
    assert_eq!(Value::string("plain").to_string(), "plain");
    assert_eq!(Value::Null.to_string(), "");
    assert_eq!(
        Value::from(vec![Value::Boolean(true), Value::string("a")]).to_string(),
        r#"[true,"a"]"#
    );
    assert_eq!(
        Value::object_from_pairs([("b", 1), ("a", 2)]).to_string(),
        r#"{"b":1,"a":2}"#
    );
}

#[test]
fn display_placeholders() {
    assert_eq!(Value::text_placeholder("{{secret}}").to_string(), "{{secret}}");
    assert_eq!(Value::placeholder(Placeholder::Boolean(true)).to_string(), "True");
    assert_eq!(Value::placeholder(Placeholder::Integer(7)).to_string(), "7");
}

#[test]
fn display_date_time_in_utc() {
    let dt = Utc.with_ymd_and_hms(2021, 3, 4, 5, 6, 7).single();
    let value = Value::from(dt);
    assert_eq!(value.to_string(), "2021-03-04T05:06:07Z");
}

#[test]
fn type_names() {
    assert_eq!(Value::Null.type_name(), "null");
    assert_eq!(Value::Integer(1).type_name(), "int");
    assert_eq!(Value::object(ObjectMap::new()).type_name(), "object");
    assert_eq!(Value::text_placeholder("p").type_name(), "placeholder");
}

#[test]
fn partial_eq_is_exact_representation() {
    assert_eq!(Value::string("a"), Value::string("a"));
    assert_ne!(Value::Integer(1), Value::string("1"));
    assert_ne!(Value::Integer(1), Value::placeholder(Placeholder::Integer(1)));
    assert_ne!(
        Value::object_from_pairs([("a", 1), ("b", 2)]),
        Value::object_from_pairs([("b", 2), ("a", 1)])
    );
}

#[test]
fn from_option() {
    assert_eq!(Value::from(None::<i64>), Value::Null);
    assert_eq!(Value::from(Some("x")), Value::string("x"));
}

mod json {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn parses_nested_documents() {
        let parsed = Value::from_json_str(r#"{"name":"vm1","zones":[1,2],"enabled":true,"tags":null}"#);
        let expected = Value::object_from_pairs([
            ("name", Value::string("vm1")),
            ("zones", Value::from(vec![1_i64, 2])),
            ("enabled", Value::Boolean(true)),
            ("tags", Value::Null),
        ]);
        assert_eq!(parsed, Ok(expected));
    }

    #[test]
    fn duplicate_keys_keep_first() {
        let parsed = Value::from_json_str(r#"{"a":1,"b":2,"a":3}"#);
        assert_eq!(parsed, Ok(Value::object_from_pairs([("a", 1), ("b", 2)])));
    }

    #[test]
    fn rejects_fractional_numbers() {
        assert!(matches!(
            Value::from_json_str("[1.5]"),
            Err(ValueError::Json(_))
        ));
    }

    #[test]
    fn rejects_integers_beyond_i64() {
        assert!(Value::from_json_str("18446744073709551615").is_err());
        assert_eq!(
            Value::from_json_str("9223372036854775807"),
            Ok(Value::Integer(i64::MAX))
        );
    }

    #[test]
    fn serializes_canonical_shape() {
        let value = Value::object_from_pairs([
            ("z", Value::placeholder(Placeholder::Integer(3))),
            ("a", Value::text_placeholder("ref")),
        ]);
        let text = serde_json::to_string(&value).unwrap_or_default();
        assert_eq!(text, r#"{"z":3,"a":"ref"}"#);
    }
}
