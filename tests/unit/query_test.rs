//! Unit tests for the JSONPath query collaborator
//!
//! The discovery output is fed back into the query service to check that
//! every generated path actually addresses something in the document.

use assert_matches::assert_matches;
use jsonpathgen::discovery::discover_paths;
use jsonpathgen::error::{PathGenError, PathGenResult};
use jsonpathgen::query::{JsonPathQueryService, QueryService};
use serde_json::{json, Value};

/// Service that records nothing and returns canned matches
struct CannedService {
    matches: Vec<Value>,
}

impl QueryService for CannedService {
    fn evaluate(&self, _document: &Value, _path: &str) -> PathGenResult<Vec<Value>> {
        Ok(self.matches.clone())
    }

    fn validate_syntax(&self, path: &str) -> Option<String> {
        if path.starts_with('$') {
            None
        } else {
            Some("queries must start with '$'".to_string())
        }
    }
}

#[cfg(test)]
mod query_tests {
    use super::*;

    #[test]
    fn test_discovered_paths_resolve() {
        let service = JsonPathQueryService::new();
        let document = json!({
            "data": {
                "people": [
                    {"name": "Rocco", "age": 42, "gender": "m"},
                    {"name": "John", "age": 12, "gender": "m", "pets": [{"kind": "cat"}]}
                ]
            },
            "meta-info": {"version": "1.0"}
        });

        for path in discover_paths(&document) {
            let matches = service.evaluate(&document, &path).unwrap();
            assert!(!matches.is_empty(), "{} matched nothing", path);
        }
    }

    #[test]
    fn test_query_and_format_uses_injected_service() {
        let service = CannedService {
            matches: vec![json!({"a": 1})],
        };
        let output = service.query_and_format("{}", "$.anything").unwrap();
        assert_eq!(serde_json::from_str::<Value>(&output).unwrap(), json!({"a": 1}));

        let service = CannedService {
            matches: vec![json!(1), json!(2)],
        };
        let output = service.query_and_format("{}", "$.anything").unwrap();
        assert_eq!(serde_json::from_str::<Value>(&output).unwrap(), json!([1, 2]));

        let service = CannedService { matches: vec![] };
        assert_eq!(service.query_and_format("{}", "$.x").unwrap(), "[]");
    }

    #[test]
    fn test_validation_runs_before_parsing() {
        let service = CannedService { matches: vec![] };
        assert_matches!(
            service.query_and_format("not json", "a.b"),
            Err(PathGenError::InvalidQuery { .. })
        );
        assert_matches!(
            service.query_and_format("not json", "$.b"),
            Err(PathGenError::Parse(_))
        );
    }

    #[test]
    fn test_filter_query() {
        let service = JsonPathQueryService::new();
        let json = r#"[{"name": "a", "active": true}, {"name": "b", "active": false}]"#;
        let output = service
            .query_and_format(json, "$[?@.active == true].name")
            .unwrap();
        assert_eq!(serde_json::from_str::<Value>(&output).unwrap(), json!(["a"]));
    }

    #[test]
    fn test_invalid_expression_message() {
        let service = JsonPathQueryService::new();
        let message = service.validate_syntax("$[?(").unwrap();
        assert!(!message.is_empty());
    }
}
