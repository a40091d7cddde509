//! Command-line interface module

use clap::{Parser, Subcommand, ValueEnum};
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::discovery::{DiscoveryConfig, OutputFormat, QuoteHandling};
use crate::error::{PathGenError, PathGenResult};
use crate::parser::JsonSource;

pub mod logging;
pub mod path_mapping;

/// Main CLI arguments
#[derive(Parser, Debug, Clone)]
#[command(name = "jsonpathgen")]
#[command(about = "Discover every JSONPath expression in a JSON document")]
#[command(version = "0.1.0")]
#[command(long_about = None)]
pub struct Args {
    /// Input JSON source (string, file, or directory)
    #[arg()]
    pub input: Option<String>,

    /// Output file path, or output directory for directory input (default: stdout)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Read JSON from standard input
    #[arg(long)]
    pub stdin: bool,

    /// Recursively process directories
    #[arg(long)]
    pub recursive: bool,

    /// Output format: text (one path per line) or json. Use json when keys
    /// may contain line breaks, since text output cannot keep such a path on one line
    #[arg(long, value_enum)]
    pub format: Option<Format>,

    /// Single quotes in bracketed keys: verbatim, or escape them with a backslash
    #[arg(long, value_parser = QuoteHandling::from_str, default_value = "verbatim")]
    pub quotes: QuoteHandling,

    /// Only emit paths up to this many segments below the root
    #[arg(long)]
    pub max_depth: Option<usize>,

    /// Only validate JSON, don't discover paths
    #[arg(long)]
    pub validate_only: bool,

    /// Output discovery statistics
    #[arg(long)]
    pub stats: bool,

    /// Enable verbose logging
    #[arg(long, global = true)]
    pub verbose: bool,

    /// Suppress non-error output
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Continue with other files when one file fails
    #[arg(long)]
    pub continue_on_error: bool,

    /// Subcommands for query operations
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// CLI subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Run a JSONPath query against a document and pretty-print the matches
    Query {
        /// JSONPath expression
        expression: String,
        /// Input JSON (string or file)
        input: Option<String>,
        /// Read JSON from standard input
        #[arg(long)]
        stdin: bool,
        /// Output file path (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Check the syntax of a JSONPath expression
    Validate {
        /// JSONPath expression
        expression: String,
    },
}

/// Output formats for CLI
#[derive(ValueEnum, Debug, Clone, Copy)]
pub enum Format {
    #[value(name = "text", alias = "txt")]
    Text,
    #[value(name = "json")]
    Json,
}

impl From<Format> for OutputFormat {
    fn from(format: Format) -> Self {
        match format {
            Format::Text => OutputFormat::Text,
            Format::Json => OutputFormat::Json,
        }
    }
}

/// CLI configuration
#[derive(Debug, Clone)]
pub struct CliConfig {
    pub args: Args,
    pub discovery_config: DiscoveryConfig,
}

impl CliConfig {
    /// Create CLI configuration from arguments
    pub fn from_args(args: Args) -> PathGenResult<Self> {
        let discovery_config = Self::create_discovery_config(&args)?;

        Ok(Self {
            args,
            discovery_config,
        })
    }

    fn create_discovery_config(args: &Args) -> PathGenResult<DiscoveryConfig> {
        let config = DiscoveryConfig::new()
            .with_quote_handling(args.quotes)
            .with_max_depth(args.max_depth)
            .with_output_format(args.format.map(OutputFormat::from).unwrap_or_default());

        config.validate().map_err(PathGenError::configuration)?;

        Ok(config)
    }

    pub fn continue_on_error(&self) -> bool {
        self.args.continue_on_error
    }

    pub fn is_quiet(&self) -> bool {
        self.args.quiet
    }

    pub fn want_stats(&self) -> bool {
        self.args.stats
    }

    pub fn is_validate_only(&self) -> bool {
        self.args.validate_only
    }

    /// Resolve the top-level input into a JSON source
    pub fn source(&self) -> PathGenResult<JsonSource> {
        resolve_source(self.args.input.as_deref(), self.args.stdin)
    }
}

/// Decide where JSON comes from: stdin, an inline document, a file or a directory
pub fn resolve_source(input: Option<&str>, stdin: bool) -> PathGenResult<JsonSource> {
    if stdin {
        return Ok(JsonSource::Stdin);
    }

    let Some(input) = input else {
        return Err(PathGenError::configuration(
            "No input provided. Use --stdin or provide an input path".to_string(),
        ));
    };

    let trimmed = input.trim();
    if (trimmed.starts_with('{') && trimmed.ends_with('}'))
        || (trimmed.starts_with('[') && trimmed.ends_with(']'))
    {
        return Ok(JsonSource::String(input.to_string()));
    }

    let path = PathBuf::from(input);
    if path.is_file() {
        Ok(JsonSource::File(path))
    } else if path.is_dir() {
        Ok(JsonSource::Directory(path))
    } else if serde_json::from_str::<serde_json::Value>(trimmed).is_ok() {
        // Bare scalars such as `42` or `"x"` are documents too
        Ok(JsonSource::String(input.to_string()))
    } else {
        Err(PathGenError::io(
            format!("Input path does not exist: {}", input),
            Some(path),
        ))
    }
}

/// Write `content` to `output`, creating parent directories, or print it to stdout
pub fn write_output(content: &str, output: Option<&Path>) -> PathGenResult<()> {
    match output {
        Some(path) => {
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent)
                    .map_err(|e| PathGenError::io(e.to_string(), Some(parent.to_path_buf())))?;
            }
            let mut body = content.to_string();
            if !body.is_empty() && !body.ends_with('\n') {
                body.push('\n');
            }
            std::fs::write(path, body)
                .map_err(|e| PathGenError::io(e.to_string(), Some(path.to_path_buf())))
        }
        None => {
            if !content.is_empty() {
                println!("{}", content);
            }
            Ok(())
        }
    }
}

/// CLI utilities and helpers
pub struct CliUtils;

impl CliUtils {
    /// Format a duration in human-readable format
    pub fn format_duration(duration: Duration) -> String {
        let total_millis = duration.as_millis();

        if total_millis < 1000 {
            format!("{}ms", total_millis)
        } else if total_millis < 60_000 {
            format!("{:.1}s", total_millis as f64 / 1000.0)
        } else {
            let minutes = total_millis / 60_000;
            let seconds = (total_millis % 60_000) / 1000;
            format!("{}m {}s", minutes, seconds)
        }
    }

    /// Create a progress bar for file processing
    pub fn create_progress_bar(total: u64, quiet: bool) -> indicatif::ProgressBar {
        if quiet {
            return indicatif::ProgressBar::hidden();
        }

        let pb = indicatif::ProgressBar::new(total);
        if let Ok(style) = indicatif::ProgressStyle::default_bar().template(
            "{spinner:.green} [{elapsed_precise}] [{wide_bar:.cyan/blue}] {pos}/{len} {msg}",
        ) {
            pb.set_style(style.progress_chars("#>-"));
        }
        pb
    }

    /// Show a success message (if not in quiet mode)
    pub fn show_success(message: &str, quiet: bool) {
        if !quiet {
            if Self::should_use_color() {
                println!("{} {}", console::style("✓").green(), message);
            } else {
                println!("✓ {}", message);
            }
        }
    }

    /// Show an error message
    pub fn show_error(message: &str) {
        if Self::should_use_color() {
            eprintln!("{} {}", console::style("✗").red(), message);
        } else {
            eprintln!("✗ {}", message);
        }
    }

    /// Show a warning message (if not in quiet mode)
    pub fn show_warning(message: &str, quiet: bool) {
        if !quiet {
            eprintln!("⚠ {}", message);
        }
    }

    /// Check if output should be colored
    pub fn should_use_color() -> bool {
        atty::is(atty::Stream::Stdout) && std::env::var("NO_COLOR").is_err()
    }
}

/// Handle CLI errors with user-friendly messages
pub fn handle_error(error: &PathGenError) {
    CliUtils::show_error(&error.user_message());

    match error {
        PathGenError::Parse(parse) => {
            if let Some(preview) = &parse.input_preview {
                eprintln!("\n{}", preview);
            }
            eprintln!("\nTip: Use --validate-only to check JSON syntax");
        }
        PathGenError::InvalidQuery { .. } => {
            eprintln!("\nTip: Use 'jsonpathgen validate <EXPR>' to check a query");
        }
        _ => {}
    }

    eprintln!("\nTry 'jsonpathgen --help' for usage information.");
}
