//! Error types and handling infrastructure for path discovery and queries

use anyhow::Error;
use std::fmt;
use std::path::PathBuf;

/// Main error type for discovery, parsing and query operations
#[derive(Debug, thiserror::Error)]
pub enum PathGenError {
    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error("Invalid JSONPath query: {message}")]
    InvalidQuery { message: String },

    #[error("Query execution error: {message}")]
    QueryExecution { message: String },

    #[error("IO error: {message}")]
    Io {
        message: String,
        path: Option<PathBuf>,
    },

    #[error("Invalid configuration: {message}")]
    Configuration { message: String },

    #[error(transparent)]
    Other(#[from] Error),
}

impl PathGenError {
    pub fn parse(message: String, location: Option<(usize, usize)>) -> Self {
        Self::Parse(ParseError::new(message, location))
    }

    pub fn invalid_query(message: String) -> Self {
        Self::InvalidQuery { message }
    }

    pub fn query_execution(message: String) -> Self {
        Self::QueryExecution { message }
    }

    pub fn io(message: String, path: Option<PathBuf>) -> Self {
        Self::Io { message, path }
    }

    pub fn configuration(message: String) -> Self {
        Self::Configuration { message }
    }

    /// True when the error came from the JSON parsing collaborator
    pub fn is_invalid_json(&self) -> bool {
        matches!(self, Self::Parse(_))
    }

    /// Create a user-friendly error message
    pub fn user_message(&self) -> String {
        match self {
            Self::Parse(err) => match err.location {
                Some((line, col)) => format!(
                    "JSON parse error at line {}, column {}: {}",
                    line, col, err.message
                ),
                None => format!("JSON parse error: {}", err.message),
            },
            Self::InvalidQuery { message } => format!("Invalid query: {}", message),
            Self::QueryExecution { message } => format!("Execution error: {}", message),
            Self::Io { message, path } => match path {
                Some(path) => format!("IO error on {}: {}", path.display(), message),
                None => format!("IO error: {}", message),
            },
            Self::Configuration { .. } => self.to_string(),
            Self::Other(err) => format!("Unexpected error: {}", err),
        }
    }
}

/// JSON parsing errors
#[derive(Debug, Clone)]
pub struct ParseError {
    pub message: String,
    pub location: Option<(usize, usize)>,
    pub input_preview: Option<String>,
}

impl ParseError {
    pub fn new(message: String, location: Option<(usize, usize)>) -> Self {
        Self {
            message,
            location,
            input_preview: None,
        }
    }

    pub fn with_preview(mut self, preview: String) -> Self {
        self.input_preview = Some(preview);
        self
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)?;
        if let Some((line, col)) = self.location {
            write!(f, " at line {}, column {}", line, col)?;
        }
        Ok(())
    }
}

impl std::error::Error for ParseError {}

/// Result type for discovery and query operations
pub type PathGenResult<T> = Result<T, PathGenError>;

/// Convenience result type for parsing operations
pub type ParseResult<T> = Result<T, ParseError>;
