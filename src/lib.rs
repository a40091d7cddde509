//! JSONPath path discovery
//!
//! A Rust CLI tool and library that walks a JSON document and lists every
//! JSONPath expression addressing a location inside it, plus thin helpers for
//! running and validating JSONPath queries.

pub mod cli;
pub mod discovery;
pub mod error;
pub mod parser;
pub mod query;

// Re-export commonly used types
pub use discovery::{
    discover_paths, discover_paths_from_str, discover_paths_with_config, DiscoveryConfig,
    DiscoveryStatistics, OutputFormat, PathDiscoveryEngine, PathReport, QuoteHandling,
};
pub use error::{ParseError, PathGenError, PathGenResult};
pub use parser::JsonSource;
pub use query::{JsonPathQueryService, QueryService};
