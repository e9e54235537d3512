//! Tests for structural diffs between whole documents.

#[cfg(test)]
mod tests {
    use crate::diff::{diff, DiffLine};
    use crate::value::{from_yaml, Value};
    use pretty_assertions::assert_eq;

    fn yaml(text: &str) -> Value {
        from_yaml(text).unwrap()
    }

    fn removed(text: &str) -> DiffLine {
        DiffLine::Removed(text.to_string())
    }

    fn added(text: &str) -> DiffLine {
        DiffLine::Added(text.to_string())
    }

    #[test]
    fn test_diff_with_itself_is_empty() {
        let docs = [
            "null",
            "42",
            "[1, [2, 3], {a: b}]",
            "kind: Pod\nmetadata:\n  name: a\n  labels: {app: x}\nspec:\n  containers:\n  - name: c\n    image: nginx\n",
            "nan: .nan\n",
        ];
        for doc in docs {
            let value = yaml(doc);
            assert!(diff(&value, &value).is_same(), "expected no diff for {doc:?}");
        }
    }

    #[test]
    fn test_key_order_is_ignored() {
        let left = yaml(r#"{"a": 1, "b": 2}"#);
        let right = yaml(r#"{"b": 2, "a": 1}"#);
        assert!(diff(&left, &right).is_empty());
    }

    #[test]
    fn test_nested_key_order_is_ignored() {
        let left = yaml("spec:\n  x: 1\n  y:\n    q: true\n    p: false\n");
        let right = yaml("spec:\n  y:\n    p: false\n    q: true\n  x: 1\n");
        assert!(diff(&left, &right).is_same());
    }

    #[test]
    fn test_list_order_is_significant() {
        let result = diff(&yaml("[1, 2, 3]"), &yaml("[3, 2, 1]"));
        assert!(!result.is_empty());
        assert_eq!(result.added_count(), 2);
        assert_eq!(result.removed_count(), 2);
    }

    #[test]
    fn test_scalar_change() {
        let left = yaml("kind: Pod\nmetadata:\n  name: a\nspec:\n  replicas: 1\n");
        let right = yaml("kind: Pod\nmetadata:\n  name: a\nspec:\n  replicas: 2\n");

        let result = diff(&left, &right);
        assert_eq!(
            result.lines(),
            &[removed("    replicas: 1,"), added("    replicas: 2,")]
        );
    }

    #[test]
    fn test_large_unsigned_change_is_reported() {
        let left = yaml("uid: 18446744073709551615\n");
        let right = yaml("uid: 18446744073709551614\n");

        let result = diff(&left, &right);
        assert!(!result.is_same());
        assert_eq!(
            result.lines(),
            &[
                removed("  uid: 18446744073709551615,"),
                added("  uid: 18446744073709551614,"),
            ]
        );
    }

    #[test]
    fn test_added_and_removed_keys() {
        let left = yaml("spec:\n  a: 1\n  b: 2\n");
        let right = yaml("spec:\n  b: 2\n  c: 3\n");

        let result = diff(&left, &right);
        assert_eq!(
            result.lines(),
            &[removed("    a: 1,"), added("    c: 3,")]
        );
    }

    #[test]
    fn test_added_subtree() {
        let left = yaml("metadata:\n  name: a\n");
        let right = yaml("metadata:\n  name: a\n  labels:\n    app: web\n");

        let result = diff(&left, &right);
        assert_eq!(
            result.lines(),
            &[
                added("    labels: {"),
                added("      app: \"web\","),
                added("    },"),
            ]
        );
    }

    #[test]
    fn test_type_change_is_reported() {
        let left = yaml("port: 80\n");
        let right = yaml("port: \"80\"\n");
        assert_eq!(
            diff(&left, &right).lines(),
            &[removed("  port: 80,"), added("  port: \"80\",")]
        );
    }

    #[test]
    fn test_empty_container_to_populated() {
        let left = yaml("items: []\n");
        let right = yaml("items: [x]\n");
        assert_eq!(
            diff(&left, &right).lines(),
            &[
                removed("  items: [],"),
                added("  items: ["),
                added("    \"x\","),
                added("  ],"),
            ]
        );
    }

    #[test]
    fn test_whole_document_replacement() {
        let result = diff(&Value::Null, &yaml("a: 1\n"));
        assert_eq!(
            result.lines(),
            &[removed("null"), added("{"), added("  a: 1,"), added("}")]
        );
    }

    #[test]
    fn test_display_prefixes_signs() {
        let result = diff(&yaml("v: 1\n"), &yaml("v: 2\n"));
        assert_eq!(result.to_string(), "-  v: 1,\n+  v: 2,");
    }
}
