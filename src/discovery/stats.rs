//! Statistics collected across discovery runs

use crate::discovery::engine::PathReport;
use serde::{Deserialize, Serialize};

/// Aggregated statistics for one or more discovery runs
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DiscoveryStatistics {
    /// Input JSON size in bytes (sum of known sizes)
    pub input_size_bytes: u64,
    /// Paths emitted
    pub path_count: usize,
    /// Values visited
    pub node_count: usize,
    /// Deepest emitted location across all documents
    pub max_depth: usize,
    pub processing_time_ms: u64,
    /// Documents processed successfully
    pub file_count: usize,
    /// Documents that failed to parse or read
    pub failed_count: usize,
    /// Timestamp of when statistics were collected
    pub collected_at: chrono::DateTime<chrono::Utc>,
}

impl Default for DiscoveryStatistics {
    fn default() -> Self {
        Self {
            input_size_bytes: 0,
            path_count: 0,
            node_count: 0,
            max_depth: 0,
            processing_time_ms: 0,
            file_count: 0,
            failed_count: 0,
            collected_at: chrono::Utc::now(),
        }
    }
}

impl DiscoveryStatistics {
    pub fn new() -> Self {
        Self::default()
    }

    /// Statistics for a single report
    pub fn for_report(report: &PathReport) -> Self {
        let metadata = &report.metadata;
        Self {
            input_size_bytes: metadata.input_size.unwrap_or(0),
            path_count: metadata.path_count,
            node_count: metadata.node_count,
            max_depth: metadata.max_depth,
            processing_time_ms: metadata.processing_time_ms,
            file_count: 1,
            failed_count: 0,
            collected_at: chrono::Utc::now(),
        }
    }

    /// Fold another set of statistics into this one
    pub fn combine(&mut self, other: &Self) {
        self.input_size_bytes += other.input_size_bytes;
        self.path_count += other.path_count;
        self.node_count += other.node_count;
        self.max_depth = self.max_depth.max(other.max_depth);
        self.processing_time_ms += other.processing_time_ms;
        self.file_count += other.file_count;
        self.failed_count += other.failed_count;
        self.collected_at = chrono::Utc::now();
    }

    pub fn record_report(&mut self, report: &PathReport) {
        self.combine(&Self::for_report(report));
    }

    pub fn record_failure(&mut self) {
        self.failed_count += 1;
        self.collected_at = chrono::Utc::now();
    }

    /// Average number of paths per successfully processed document
    pub fn avg_paths_per_file(&self) -> f32 {
        if self.file_count == 0 {
            0.0
        } else {
            self.path_count as f32 / self.file_count as f32
        }
    }

    /// Get a formatted summary
    pub fn summary(&self) -> String {
        let mut summary = format!(
            "Processed {} file(s) in {}ms - {} paths from {} values, max depth {}",
            self.file_count,
            self.processing_time_ms,
            self.path_count,
            self.node_count,
            self.max_depth
        );
        if self.failed_count > 0 {
            summary.push_str(&format!(", {} failed", self.failed_count));
        }
        summary
    }

    /// Export to JSON string
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Import from JSON string
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}
