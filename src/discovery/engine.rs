//! Core path discovery engine
//!
//! Walks a parsed JSON value depth-first and records one JSONPath expression
//! per structural location. Arrays are treated as a single location `[*]`
//! whose members are the union of the keys of all object elements, so the
//! number of paths grows with the number of distinct keys rather than with
//! the array length.

use crate::discovery::config::{DiscoveryConfig, OutputFormat};
use crate::discovery::segment::{append_member, append_wildcard, ROOT};
use crate::error::{PathGenError, PathGenResult};
use crate::parser::{parse_from_string, JsonSource};
use serde_json::{Map, Value};
use std::collections::BTreeSet;
use std::time::Instant;

/// Paths discovered in one document
#[derive(Debug, Clone)]
pub struct PathReport {
    pub paths: Vec<String>,
    pub metadata: DiscoveryMetadata,
}

impl PathReport {
    pub fn new(paths: Vec<String>, metadata: DiscoveryMetadata) -> Self {
        Self { paths, metadata }
    }

    pub fn len(&self) -> usize {
        self.paths.len()
    }

    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }

    pub fn into_paths(self) -> Vec<String> {
        self.paths
    }

    /// Render the paths in the requested format
    pub fn render(&self, format: OutputFormat) -> PathGenResult<String> {
        match format {
            OutputFormat::Text => Ok(self.paths.join("\n")),
            OutputFormat::Json => serde_json::to_string_pretty(&self.paths)
                .map_err(|e| PathGenError::Other(e.into())),
        }
    }
}

/// Metadata about a discovery run
#[derive(Debug, Clone, Default)]
pub struct DiscoveryMetadata {
    /// Size of the raw input in bytes, when discovery started from text
    pub input_size: Option<u64>,
    /// Number of values visited, the root included
    pub node_count: usize,
    pub path_count: usize,
    /// Deepest emitted location, in segments below the root
    pub max_depth: usize,
    pub processing_time_ms: u64,
}

/// Main discovery engine
#[derive(Debug, Clone, Default)]
pub struct PathDiscoveryEngine {
    config: DiscoveryConfig,
}

impl PathDiscoveryEngine {
    pub fn new(config: DiscoveryConfig) -> Self {
        Self { config }
    }

    /// Discover every structural path beneath `root`
    pub fn discover(&self, root: &Value) -> PathReport {
        let start_time = Instant::now();

        let mut walk = Walk {
            config: &self.config,
            paths: BTreeSet::new(),
            node_count: 0,
            deepest: 0,
        };
        walk.visit(root, ROOT, 0);

        let Walk {
            paths,
            node_count,
            deepest,
            ..
        } = walk;
        let paths: Vec<String> = paths.into_iter().collect();

        let metadata = DiscoveryMetadata {
            input_size: None,
            node_count,
            path_count: paths.len(),
            max_depth: deepest,
            processing_time_ms: start_time.elapsed().as_millis() as u64,
        };

        tracing::debug!(
            paths = metadata.path_count,
            nodes = metadata.node_count,
            depth = metadata.max_depth,
            "path discovery finished"
        );

        PathReport::new(paths, metadata)
    }

    /// Parse `json` and discover its paths
    pub fn discover_str(&self, json: &str) -> PathGenResult<PathReport> {
        let value = parse_from_string(json)?;
        let mut report = self.discover(&value);
        report.metadata.input_size = Some(json.len() as u64);
        Ok(report)
    }

    /// Read and parse `source`, then discover its paths
    pub fn discover_source(&self, source: &JsonSource) -> PathGenResult<PathReport> {
        let value = source.parse()?;
        let mut report = self.discover(&value);
        report.metadata.input_size = source.estimated_size();
        Ok(report)
    }
}

/// Per-call traversal state; the accumulator never outlives one `discover` call
struct Walk<'a> {
    config: &'a DiscoveryConfig,
    paths: BTreeSet<String>,
    node_count: usize,
    deepest: usize,
}

impl Walk<'_> {
    fn visit(&mut self, value: &Value, path: &str, depth: usize) {
        self.node_count += 1;
        if depth > 0 {
            self.record(path, depth);
        }

        if self.at_depth_limit(depth) {
            return;
        }

        match value {
            Value::Object(map) => {
                for (key, child) in map {
                    let child_path = append_member(path, key, self.config.quote_handling);
                    self.visit(child, &child_path, depth + 1);
                }
            }
            Value::Array(items) => self.visit_array(items, path, depth),
            Value::Null | Value::Bool(_) | Value::Number(_) | Value::String(_) => {}
        }
    }

    /// Project the key superset of the array's object elements through `[*]`.
    /// Scalars and nested arrays inside the array contribute nothing.
    fn visit_array(&mut self, items: &[Value], path: &str, depth: usize) {
        let key_superset: BTreeSet<&str> = items
            .iter()
            .filter_map(Value::as_object)
            .flat_map(Map::keys)
            .map(String::as_str)
            .collect();

        if key_superset.is_empty() {
            return;
        }

        let wildcard = append_wildcard(path);
        for key in key_superset {
            let child_path = append_member(&wildcard, key, self.config.quote_handling);
            self.record(&child_path, depth + 1);

            for member in items.iter().filter_map(|item| item.as_object()?.get(key)) {
                self.visit(member, &child_path, depth + 1);
            }
        }
    }

    fn record(&mut self, path: &str, depth: usize) {
        self.deepest = self.deepest.max(depth);
        if !self.paths.contains(path) {
            self.paths.insert(path.to_string());
        }
    }

    fn at_depth_limit(&self, depth: usize) -> bool {
        self.config.max_depth.is_some_and(|limit| depth >= limit)
    }
}

/// Discover paths with the default configuration
pub fn discover_paths(root: &Value) -> Vec<String> {
    PathDiscoveryEngine::default().discover(root).into_paths()
}

/// Discover paths with a custom configuration
pub fn discover_paths_with_config(root: &Value, config: &DiscoveryConfig) -> Vec<String> {
    PathDiscoveryEngine::new(config.clone())
        .discover(root)
        .into_paths()
}

/// Parse `json` and discover its paths; fails only when parsing fails
pub fn discover_paths_from_str(json: &str) -> PathGenResult<Vec<String>> {
    Ok(PathDiscoveryEngine::default()
        .discover_str(json)?
        .into_paths())
}
