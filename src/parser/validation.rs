//! JSON syntax checks used by `--validate-only`

use crate::error::ParseResult;
use crate::parser::parse_from_string;

/// Validate JSON syntax without keeping the parsed value
pub fn validate_json_syntax(json_str: &str) -> ParseResult<()> {
    parse_from_string(json_str).map(|_| ())
}
