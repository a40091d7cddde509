//! Unit tests for JSONPath discovery
//!
//! Tests cover:
//! - Ordering, uniqueness and idempotence of the path list
//! - Array homogenization through `[*]`
//! - Dot versus bracket notation
//! - Documented edge cases (quotes in keys, nested arrays)

use jsonpathgen::discovery::{
    discover_paths, discover_paths_from_str, discover_paths_with_config, DiscoveryConfig,
    OutputFormat, PathDiscoveryEngine, QuoteHandling,
};
use jsonpathgen::error::PathGenError;
use serde_json::{json, Value};

fn sample_documents() -> Vec<Value> {
    vec![
        json!({}),
        json!([]),
        json!(null),
        json!({"a": 1, "b": {"c": [1, 2, 3]}, "d-e": null}),
        json!([{"a": 1}, {"b": 2}, 3, [4], {"a": {"z": true}}]),
        json!({"store": {"book": [
            {"category": "reference", "author": "Nigel Rees", "price": 8.95},
            {"category": "fiction", "author": "Evelyn Waugh", "price": 12.99, "isbn": "0-553"},
            {"category": "fiction", "display-price": 22.99, "tags": [{"k": "v"}]}
        ], "bicycle": {"color": "red", "price": 19.95}}}),
    ]
}

#[cfg(test)]
mod discovery_tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_output_is_sorted_and_unique() {
        for doc in sample_documents() {
            let paths = discover_paths(&doc);
            for pair in paths.windows(2) {
                assert!(pair[0] < pair[1], "{:?} not strictly before {:?}", pair[0], pair[1]);
            }
        }
    }

    #[test]
    fn test_discovery_is_idempotent() {
        for doc in sample_documents() {
            assert_eq!(discover_paths(&doc), discover_paths(&doc));
        }
    }

    #[test]
    fn test_root_is_never_emitted() {
        for doc in sample_documents() {
            let paths = discover_paths(&doc);
            assert!(paths.iter().all(|p| p != "$"));
            assert!(paths.iter().all(|p| p.starts_with('$')));
        }
    }

    #[test]
    fn test_array_homogenization() {
        let paths = discover_paths(&json!([{"a": 1}, {"b": 2}]));
        assert_eq!(paths, vec!["$[*].a", "$[*].b"]);
    }

    #[test]
    fn test_nested_projection() {
        let paths = discover_paths(&json!({"items": [{"x": {"y": 1}}]}));
        assert_eq!(paths, vec!["$.items", "$.items[*].x", "$.items[*].x.y"]);
    }

    #[test]
    fn test_bracket_notation() {
        assert_eq!(discover_paths(&json!({"foo-bar": 1})), vec!["$['foo-bar']"]);
        assert_eq!(discover_paths(&json!({"plain": 1})), vec!["$.plain"]);
        assert_eq!(
            discover_paths(&json!({"a.b": {"c:d": {"e f": 1}}})),
            vec!["$['a.b']", "$['a.b']['c:d']", "$['a.b']['c:d']['e f']"]
        );
    }

    #[test]
    fn test_empty_containers() {
        assert_eq!(discover_paths(&json!({})), Vec::<String>::new());
        assert_eq!(discover_paths(&json!([])), Vec::<String>::new());
    }

    #[test]
    fn test_people_scenario() {
        let json = r#"{"data":{"people":[{"name":"Rocco","age":42,"gender":"m"},{"name":"John","age":12,"gender":"m"}]}}"#;
        assert_eq!(
            discover_paths_from_str(json).unwrap(),
            vec![
                "$.data",
                "$.data.people",
                "$.data.people[*].age",
                "$.data.people[*].gender",
                "$.data.people[*].name",
            ]
        );
    }

    #[test]
    fn test_bookstore_document() {
        let paths = discover_paths(&sample_documents()[5]);
        assert_eq!(
            paths,
            vec![
                "$.store",
                "$.store.bicycle",
                "$.store.bicycle.color",
                "$.store.bicycle.price",
                "$.store.book",
                "$.store.book[*].author",
                "$.store.book[*].category",
                "$.store.book[*].isbn",
                "$.store.book[*].price",
                "$.store.book[*].tags",
                "$.store.book[*].tags[*].k",
                "$.store.book[*]['display-price']",
            ]
        );
    }

    #[test]
    fn test_mixed_array_only_projects_objects() {
        let paths = discover_paths(&sample_documents()[4]);
        assert_eq!(paths, vec!["$[*].a", "$[*].a.z", "$[*].b"]);
    }

    #[test]
    fn test_single_quote_in_key_is_verbatim_by_default() {
        let paths = discover_paths(&json!({"it's ok": 1, "it's": 2}));
        assert_eq!(paths, vec!["$.it's", "$['it's ok']"]);
    }

    #[test]
    fn test_single_quote_in_key_escaped_on_request() {
        let config = DiscoveryConfig::new().with_quote_handling(QuoteHandling::Escape);
        let paths = discover_paths_with_config(&json!({"it's ok": 1, "it's": 2}), &config);
        assert_eq!(paths, vec![r"$['it\'s ok']", r"$['it\'s']"]);
    }

    #[test]
    fn test_arrays_of_arrays_stop_at_first_wildcard() {
        assert_eq!(discover_paths(&json!([[{"a": 1}]])), Vec::<String>::new());
        assert_eq!(
            discover_paths(&json!({"m": [[{"a": 1}]]})),
            vec!["$.m"]
        );
    }

    #[test]
    fn test_invalid_json_fails_before_discovery() {
        let error = discover_paths_from_str("{\"a\": [1, 2,]}").unwrap_err();
        assert!(matches!(error, PathGenError::Parse(_)));
        assert!(error.user_message().starts_with("JSON parse error"));
    }

    #[test]
    fn test_engine_is_shareable_across_threads() {
        let engine = std::sync::Arc::new(PathDiscoveryEngine::default());
        let handles: Vec<_> = sample_documents()
            .into_iter()
            .map(|doc| {
                let engine = std::sync::Arc::clone(&engine);
                std::thread::spawn(move || engine.discover(&doc).into_paths())
            })
            .collect();

        for (handle, doc) in handles.into_iter().zip(sample_documents()) {
            assert_eq!(handle.join().unwrap(), discover_paths(&doc));
        }
    }

    #[test]
    fn test_line_break_in_key_stays_in_dot_notation() {
        let value = json!({"two\nlines": {"x": 1}});
        let report = PathDiscoveryEngine::default().discover(&value);
        assert_eq!(report.paths, vec!["$.two\nlines", "$.two\nlines.x"]);

        // Text output splits such a path across lines; the JSON rendering keeps it whole.
        let text = report.render(OutputFormat::Text).unwrap();
        assert_eq!(text.lines().count(), 4);

        let json_rendering = report.render(OutputFormat::Json).unwrap();
        let parsed: Vec<String> = serde_json::from_str(&json_rendering).unwrap();
        assert_eq!(parsed, report.paths);
    }
}
