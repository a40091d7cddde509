//! JSONPath discovery module
//!
//! This module contains the discovery engine, its configuration, segment
//! formatting and statistics.

pub mod config;
pub mod engine;
pub mod segment;
pub mod stats;

pub use config::{DiscoveryConfig, OutputFormat, QuoteHandling};
pub use engine::{
    discover_paths, discover_paths_from_str, discover_paths_with_config, DiscoveryMetadata,
    PathDiscoveryEngine, PathReport,
};
pub use stats::DiscoveryStatistics;
