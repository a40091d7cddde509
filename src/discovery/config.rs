//! Configuration options for path discovery

/// How single quotes inside object keys are written in bracket notation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum QuoteHandling {
    /// Emit the key untouched, so `it's ok` becomes `$['it's ok']`
    #[default]
    Verbatim,
    /// Escape `'` and `\` and force bracket notation for such keys
    Escape,
}

impl QuoteHandling {
    pub fn from_str(s: &str) -> Result<Self, String> {
        match s.to_lowercase().as_str() {
            "verbatim" => Ok(QuoteHandling::Verbatim),
            "escape" => Ok(QuoteHandling::Escape),
            other => Err(format!(
                "Invalid quote handling '{}'. Use 'verbatim' or 'escape'",
                other
            )),
        }
    }
}

/// Rendering of a discovered path list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// One path per line
    #[default]
    Text,
    /// Pretty-printed JSON array of strings
    Json,
}

impl OutputFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            OutputFormat::Text => "paths",
            OutputFormat::Json => "paths.json",
        }
    }
}

/// Path discovery configuration
#[derive(Debug, Clone, Default)]
pub struct DiscoveryConfig {
    /// Treatment of single quotes in bracketed keys
    pub quote_handling: QuoteHandling,
    /// Deepest location (in segments below the root) to emit; `None` is unbounded
    pub max_depth: Option<usize>,
    /// Rendering used by `PathReport::render`
    pub output_format: OutputFormat,
}

impl DiscoveryConfig {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Configuration that only ever emits syntactically unambiguous paths
    pub fn strict() -> Self {
        Self {
            quote_handling: QuoteHandling::Escape,
            ..Default::default()
        }
    }

    /// Configuration limited to the top `depth` levels of a document
    pub fn outline(depth: usize) -> Self {
        Self {
            max_depth: Some(depth),
            ..Default::default()
        }
    }

    pub fn with_quote_handling(mut self, quote_handling: QuoteHandling) -> Self {
        self.quote_handling = quote_handling;
        self
    }

    pub fn with_max_depth(mut self, depth: Option<usize>) -> Self {
        self.max_depth = depth;
        self
    }

    pub fn with_output_format(mut self, format: OutputFormat) -> Self {
        self.output_format = format;
        self
    }

    /// Validate configuration consistency
    pub fn validate(&self) -> Result<(), String> {
        if self.max_depth == Some(0) {
            return Err("Max depth must be at least 1".to_string());
        }

        Ok(())
    }
}
