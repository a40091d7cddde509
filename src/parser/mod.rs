//! JSON parsing and input source handling

pub mod directory;
pub mod filter;
pub mod validation;

use crate::error::{ParseError, ParseResult};
use serde::{Deserialize, Serialize};
use std::io::Read;
use std::path::{Path, PathBuf};

/// Source of a JSON document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum JsonSource {
    /// Raw JSON string input
    String(String),
    /// Single JSON file path
    File(PathBuf),
    /// Directory containing multiple JSON files
    Directory(PathBuf),
    /// Standard input stream
    Stdin,
}

impl JsonSource {
    /// Parse JSON from this source
    pub fn parse(&self) -> ParseResult<serde_json::Value> {
        match self {
            JsonSource::String(content) => parse_from_string(content),
            JsonSource::File(path) => parse_from_file(path),
            JsonSource::Stdin => parse_from_stdin(),
            JsonSource::Directory(_) => Err(ParseError::new(
                "Cannot parse directory as single JSON value".to_string(),
                None,
            )),
        }
    }

    /// Get a human-readable description of the source
    pub fn description(&self) -> String {
        match self {
            JsonSource::String(_) => "string input".to_string(),
            JsonSource::File(path) => format!("file: {}", path.display()),
            JsonSource::Directory(path) => format!("directory: {}", path.display()),
            JsonSource::Stdin => "standard input".to_string(),
        }
    }

    /// Check if the source exists and is accessible
    pub fn exists(&self) -> bool {
        match self {
            JsonSource::String(_) | JsonSource::Stdin => true,
            JsonSource::File(path) => path.is_file(),
            JsonSource::Directory(path) => path.is_dir(),
        }
    }

    /// Size of the source in bytes, when it can be known without reading stdin
    pub fn estimated_size(&self) -> Option<u64> {
        match self {
            JsonSource::String(s) => Some(s.len() as u64),
            JsonSource::File(path) => std::fs::metadata(path).ok().map(|m| m.len()),
            JsonSource::Directory(_) | JsonSource::Stdin => None,
        }
    }

    /// Read content as string (if possible)
    pub fn read_content(&self) -> Result<String, std::io::Error> {
        match self {
            JsonSource::String(content) => Ok(content.clone()),
            JsonSource::File(path) => std::fs::read_to_string(path),
            JsonSource::Stdin => {
                let mut buffer = String::new();
                std::io::stdin().read_to_string(&mut buffer)?;
                Ok(buffer)
            }
            JsonSource::Directory(_) => Err(std::io::Error::new(
                std::io::ErrorKind::InvalidInput,
                "Cannot read directory as content",
            )),
        }
    }
}

/// Parse JSON from a string
pub fn parse_from_string(content: &str) -> ParseResult<serde_json::Value> {
    let trimmed = content.trim();
    if trimmed.is_empty() {
        return Err(ParseError::new("Empty JSON string".to_string(), None));
    }

    serde_json::from_str(trimmed).map_err(|e| {
        let location = error_location(&e);
        ParseError::new(format!("Invalid JSON: {}", e), location)
            .with_preview(error_preview(trimmed, location))
    })
}

/// Parse JSON from a file
fn parse_from_file(path: &Path) -> ParseResult<serde_json::Value> {
    let content = std::fs::read_to_string(path)
        .map_err(|e| ParseError::new(format!("Failed to read file: {}", e), None))?;

    parse_from_string(&content)
}

/// Parse JSON from standard input
fn parse_from_stdin() -> ParseResult<serde_json::Value> {
    let mut buffer = String::new();
    std::io::stdin()
        .read_to_string(&mut buffer)
        .map_err(|e| ParseError::new(format!("Failed to read stdin: {}", e), None))?;

    parse_from_string(&buffer)
}

/// Line and column reported by serde_json (both 1-based, line 0 means unknown)
fn error_location(error: &serde_json::Error) -> Option<(usize, usize)> {
    if error.line() == 0 {
        None
    } else {
        Some((error.line(), error.column()))
    }
}

/// Render the offending line with a caret under the error column
fn error_preview(content: &str, location: Option<(usize, usize)>) -> String {
    let Some((line, col)) = location else {
        return "Context not available".to_string();
    };

    match content.lines().nth(line.saturating_sub(1)) {
        Some(error_line) => {
            let caret_at = col.saturating_sub(1).min(error_line.chars().count());
            format!("{}\n{}^", error_line, " ".repeat(caret_at))
        }
        None => "Context not available".to_string(),
    }
}
