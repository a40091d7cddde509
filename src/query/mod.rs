//! JSONPath query collaborator
//!
//! Query evaluation and syntax validation are delegated to `serde_json_path`.
//! The discovery engine never calls into this module; both simply consume the
//! same parsed documents. Hosts receive a `QueryService` explicitly rather
//! than reaching for a process-wide instance.

use crate::error::{PathGenError, PathGenResult};
use crate::parser::parse_from_string;
use serde_json::Value;
use serde_json_path::JsonPath;

/// Narrow interface to a JSONPath query engine
pub trait QueryService: Send + Sync {
    /// Evaluate `path` against `document` and return the matched values
    fn evaluate(&self, document: &Value, path: &str) -> PathGenResult<Vec<Value>>;

    /// `None` when `path` is a valid expression, otherwise a description of the problem
    fn validate_syntax(&self, path: &str) -> Option<String>;

    /// Validate `path`, parse `json`, evaluate and pretty-print the matches.
    ///
    /// No match renders as `[]`. A single object or array match is printed on
    /// its own; anything else is printed as the array of matches.
    fn query_and_format(&self, json: &str, path: &str) -> PathGenResult<String> {
        if let Some(error) = self.validate_syntax(path) {
            return Err(PathGenError::invalid_query(error));
        }

        let document = parse_from_string(json)?;
        let mut results = self.evaluate(&document, path)?;

        if results.is_empty() {
            return Ok("[]".to_string());
        }

        let display = if results.len() == 1 && (results[0].is_object() || results[0].is_array())
        {
            results.remove(0)
        } else {
            Value::Array(results)
        };

        serde_json::to_string_pretty(&display)
            .map_err(|e| PathGenError::query_execution(e.to_string()))
    }
}

/// `QueryService` backed by `serde_json_path`
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonPathQueryService;

impl JsonPathQueryService {
    pub fn new() -> Self {
        Self
    }

    fn compile(path: &str) -> PathGenResult<JsonPath> {
        JsonPath::parse(path).map_err(|e| PathGenError::invalid_query(e.to_string()))
    }
}

impl QueryService for JsonPathQueryService {
    fn evaluate(&self, document: &Value, path: &str) -> PathGenResult<Vec<Value>> {
        let compiled = Self::compile(path)?;
        let matches: Vec<Value> = compiled.query(document).all().into_iter().cloned().collect();

        tracing::debug!(query = path, matches = matches.len(), "query evaluated");
        Ok(matches)
    }

    fn validate_syntax(&self, path: &str) -> Option<String> {
        JsonPath::parse(path).err().map(|e| e.to_string())
    }
}
