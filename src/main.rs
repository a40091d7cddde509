use clap::Parser;
use std::path::Path;
use std::time::Instant;

use anyhow::Result;

use jsonpathgen::cli::path_mapping::map_input_to_output;
use jsonpathgen::cli::{
    handle_error, logging, resolve_source, write_output, Args, CliConfig, CliUtils, Commands,
};
use jsonpathgen::parser::directory::find_json_files;
use jsonpathgen::parser::validation::validate_json_syntax;
use jsonpathgen::{
    DiscoveryStatistics, JsonPathQueryService, JsonSource, PathDiscoveryEngine, PathGenError,
    PathGenResult, QueryService,
};

fn main() -> Result<()> {
    let args = Args::parse();
    logging::init(args.verbose, args.quiet)?;
    tracing::debug!("verbose mode enabled");

    let config = match CliConfig::from_args(args) {
        Ok(config) => config,
        Err(error) => {
            handle_error(&error);
            std::process::exit(2);
        }
    };

    let service = JsonPathQueryService::new();
    if let Err(error) = run(&config, &service) {
        handle_error(&error);
        std::process::exit(1);
    }

    Ok(())
}

fn run(config: &CliConfig, service: &dyn QueryService) -> PathGenResult<()> {
    match &config.args.command {
        Some(Commands::Validate { expression }) => handle_validate(expression, service, config),
        Some(Commands::Query {
            expression,
            input,
            stdin,
            output,
        }) => {
            let source = resolve_source(input.as_deref(), *stdin)?;
            handle_query(expression, &source, output.as_deref(), service)
        }
        None if config.is_validate_only() => handle_validation(config),
        None => handle_discovery(config),
    }
}

fn handle_validate(
    expression: &str,
    service: &dyn QueryService,
    config: &CliConfig,
) -> PathGenResult<()> {
    match service.validate_syntax(expression) {
        None => {
            CliUtils::show_success("Valid JSONPath", config.is_quiet());
            Ok(())
        }
        Some(error) => Err(PathGenError::invalid_query(error)),
    }
}

fn handle_query(
    expression: &str,
    source: &JsonSource,
    output: Option<&Path>,
    service: &dyn QueryService,
) -> PathGenResult<()> {
    if let JsonSource::Directory(path) = source {
        return Err(PathGenError::configuration(format!(
            "Queries run against a single document, got directory {}",
            path.display()
        )));
    }

    let json = source
        .read_content()
        .map_err(|e| PathGenError::io(e.to_string(), None))?;
    let formatted = service.query_and_format(&json, expression)?;
    write_output(&formatted, output)
}

fn handle_validation(config: &CliConfig) -> PathGenResult<()> {
    match config.source()? {
        JsonSource::Directory(dir) => validate_directory(&dir, config),
        source => {
            source.parse()?;
            CliUtils::show_success("Valid JSON", config.is_quiet());
            Ok(())
        }
    }
}

fn validate_directory(dir: &Path, config: &CliConfig) -> PathGenResult<()> {
    let json_files = find_json_files(dir, config.args.recursive)
        .map_err(|e| PathGenError::io(e.to_string(), Some(dir.to_path_buf())))?;

    let mut failures = 0usize;
    for json_file in &json_files {
        let relative_path = json_file.strip_prefix(dir).unwrap_or(json_file);

        let checked = std::fs::read_to_string(json_file)
            .map_err(|e| e.to_string())
            .and_then(|content| validate_json_syntax(&content).map_err(|e| e.to_string()));
        match checked {
            Ok(()) => {
                CliUtils::show_success(&relative_path.display().to_string(), config.is_quiet())
            }
            Err(e) => {
                failures += 1;
                CliUtils::show_error(&format!("{}: {}", relative_path.display(), e));
            }
        }
    }

    if failures > 0 {
        return Err(PathGenError::configuration(format!(
            "{} of {} JSON files are invalid",
            failures,
            json_files.len()
        )));
    }

    Ok(())
}

fn handle_discovery(config: &CliConfig) -> PathGenResult<()> {
    let engine = PathDiscoveryEngine::new(config.discovery_config.clone());

    match config.source()? {
        JsonSource::Directory(dir) => discover_directory(&dir, &engine, config),
        source => {
            let report = engine.discover_source(&source)?;
            if report.is_empty() {
                tracing::debug!(source = %source.description(), "document has no member paths");
            }
            let rendered = report.render(config.discovery_config.output_format)?;
            write_output(&rendered, config.args.output.as_deref())?;

            if let Some(output) = &config.args.output {
                CliUtils::show_success(
                    &format!("{} paths written to {}", report.len(), output.display()),
                    config.is_quiet(),
                );
            }

            if config.want_stats() {
                output_statistics(&DiscoveryStatistics::for_report(&report), config.is_quiet());
            }
            Ok(())
        }
    }
}

fn discover_directory(
    dir: &Path,
    engine: &PathDiscoveryEngine,
    config: &CliConfig,
) -> PathGenResult<()> {
    let output_dir = config.args.output.as_deref().ok_or_else(|| {
        PathGenError::configuration("Output directory required for directory input".to_string())
    })?;

    std::fs::create_dir_all(output_dir)
        .map_err(|e| PathGenError::io(e.to_string(), Some(output_dir.to_path_buf())))?;

    let json_files = find_json_files(dir, config.args.recursive)
        .map_err(|e| PathGenError::io(e.to_string(), Some(dir.to_path_buf())))?;

    if json_files.is_empty() {
        CliUtils::show_warning(
            &format!("No JSON files found in {}", dir.display()),
            config.is_quiet(),
        );
        return Ok(());
    }

    tracing::info!(
        files = json_files.len(),
        dir = %dir.display(),
        "discovering paths in directory"
    );

    let started = Instant::now();
    let format = config.discovery_config.output_format;
    let progress = CliUtils::create_progress_bar(json_files.len() as u64, config.is_quiet());
    let mut stats = DiscoveryStatistics::new();

    for json_file in &json_files {
        let relative_path = json_file.strip_prefix(dir).unwrap_or(json_file);
        progress.set_message(relative_path.display().to_string());

        let output_file = map_input_to_output(dir, json_file, output_dir, format.extension());
        let result = engine
            .discover_source(&JsonSource::File(json_file.clone()))
            .and_then(|report| {
                write_output(&report.render(format)?, Some(output_file.as_path()))?;
                Ok(report)
            });

        match result {
            Ok(report) => stats.record_report(&report),
            Err(e) => {
                stats.record_failure();
                tracing::warn!(
                    file = %relative_path.display(),
                    error = %e,
                    "path discovery failed"
                );
                progress.suspend(|| {
                    CliUtils::show_error(&format!(
                        "{}: {}",
                        relative_path.display(),
                        e.user_message()
                    ))
                });
                if !config.continue_on_error() {
                    progress.abandon();
                    return Err(e);
                }
            }
        }
        progress.inc(1);
    }

    progress.finish_and_clear();
    CliUtils::show_success(
        &format!(
            "{} of {} files written to {} in {}",
            stats.file_count,
            json_files.len(),
            output_dir.display(),
            CliUtils::format_duration(started.elapsed())
        ),
        config.is_quiet(),
    );

    if config.want_stats() {
        output_statistics(&stats, config.is_quiet());
    }

    Ok(())
}

fn output_statistics(stats: &DiscoveryStatistics, quiet: bool) {
    if quiet {
        return;
    }

    eprintln!("\nDiscovery Statistics:");
    eprintln!("{}", stats.summary());
    eprintln!("Average paths per file: {:.1}", stats.avg_paths_per_file());
    if stats.input_size_bytes > 0 {
        eprintln!("Input size: {} bytes", stats.input_size_bytes);
    }
}
