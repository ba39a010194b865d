use super::*;
use tmpl_value::Placeholder;

mod arrays {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn removes_duplicates_in_first_occurrence_order() {
        let result = union_array(&[Value::from(vec![1_i64, 2]), Value::from(vec![2_i64, 3])]);
        assert_eq!(result, Value::from(vec![1_i64, 2, 3]));
    }

    #[test]
    fn deduplicates_within_one_argument() {
        let result = union_array(&[Value::from(vec!["a", "b", "a", "c", "b"])]);
        assert_eq!(result, Value::from(vec!["a", "b", "c"]));
    }

    #[test]
    fn structural_duplicates_are_removed() {
        let result = union_array(&[
            Value::from(vec![Value::object_from_pairs([("a", 1), ("b", 2)])]),
            Value::from(vec![
                Value::object_from_pairs([("b", 2), ("a", 1)]),
                Value::from(vec![1_i64]),
            ]),
            Value::from(vec![Value::from(vec![1_i64])]),
        ]);
        assert_eq!(
            result,
            Value::from(vec![
                Value::object_from_pairs([("a", 1), ("b", 2)]),
                Value::from(vec![1_i64]),
            ])
        );
    }

    #[test]
    fn non_arrays_are_ignored() {
        let result = union_array(&[
            Value::string("skip"),
            Value::from(vec![1_i64]),
            Value::Null,
            Value::object_from_pairs([("a", 1)]),
        ]);
        assert_eq!(result, Value::from(vec![1_i64]));
    }

    #[test]
    fn different_kinds_are_distinct() {
        let result = union_array(&[Value::from(vec![
            Value::Integer(1),
            Value::string("1"),
            Value::Boolean(true),
        ])]);
        assert_eq!(result.as_array().map(<[Value]>::len), Some(3));
    }

    #[test]
    fn placeholder_arrays_contribute_elements() {
        let result = union_array(&[
            Value::placeholder(Placeholder::Array(vec![Value::string("x")])),
            Value::from(vec!["x", "y"]),
        ]);
        assert_eq!(result, Value::from(vec!["x", "y"]));
    }

    #[test]
    fn no_arguments() {
        assert_eq!(union_array(&[]), Value::array(vec![]));
    }

    #[test]
    fn inputs_are_untouched() {
        let left = Value::from(vec![1_i64, 1]);
        let _ = union_array(&[left.clone()]);
        assert_eq!(left, Value::from(vec![1_i64, 1]));
    }
}

mod objects {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn first_occurrence_wins() {
        let result = union_object(&[
            Value::object_from_pairs([("a", 1), ("b", 2)]),
            Value::object_from_pairs([("b", 9), ("c", 3)]),
        ]);
        assert_eq!(result, Value::object_from_pairs([("a", 1), ("b", 2), ("c", 3)]));
    }

    #[test]
    fn key_order_follows_first_appearance() {
        let result = union_object(&[
            Value::object_from_pairs([("z", 1)]),
            Value::object_from_pairs([("m", 2), ("z", 3), ("a", 4)]),
        ]);
        let keys: Vec<&str> = result
            .as_object()
            .map(|m| m.keys().map(String::as_str).collect())
            .unwrap_or_default();
        assert_eq!(keys, vec!["z", "m", "a"]);
    }

    #[test]
    fn keys_are_case_sensitive() {
        let result = union_object(&[
            Value::object_from_pairs([("name", 1)]),
            Value::object_from_pairs([("Name", 2)]),
        ]);
        assert_eq!(result.as_object().map(ObjectMap::len), Some(2));
    }

    #[test]
    fn values_are_not_merged_recursively() {
        let result = union_object(&[
            Value::object_from_pairs([("tags", Value::object_from_pairs([("env", "dev")]))]),
            Value::object_from_pairs([("tags", Value::object_from_pairs([("owner", "ops")]))]),
        ]);
        assert_eq!(
            result,
            Value::object_from_pairs([("tags", Value::object_from_pairs([("env", "dev")]))])
        );
    }

    #[test]
    fn non_objects_and_placeholders() {
        let deferred: ObjectMap = [("p", true)].into_iter().collect();
        let result = union_object(&[
            Value::from(vec![1_i64]),
            Value::placeholder(Placeholder::Object(deferred)),
            Value::object_from_pairs([("p", false), ("q", true)]),
        ]);
        assert_eq!(result, Value::object_from_pairs([("p", true), ("q", true)]));
    }

    #[test]
    fn no_arguments() {
        assert_eq!(union_object(&[]), Value::object(ObjectMap::new()));
    }
}
