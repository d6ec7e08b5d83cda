//! pathtool CLI Binary
//!
//! Command-line interface for listing the resolved paths and views of an application tree.

use anyhow::Context;
use clap::Parser;
use pathtool::cli::{Cli, RunContext};
use pathtool::config::ConfigLoader;
use pathtool::logging::{init_logging, LoggingConfig};
use std::io::Write;
use std::process;
use tracing::{error, info};

fn main() {
    let cli = Cli::parse();

    // Build logging config from CLI args, env vars, and config file
    let logging_config = build_logging_config(&cli);

    if let Err(e) = init_logging(Some(&logging_config)) {
        eprintln!("Failed to initialize logging: {}", e);
        process::exit(1);
    }

    info!("pathtool starting");

    let context = match RunContext::new(cli.workspace.clone(), cli.config.clone()) {
        Ok(ctx) => ctx,
        Err(e) => {
            error!("Error loading configuration: {}", e);
            eprintln!("{}", pathtool::cli::map_error(&e));
            process::exit(1);
        }
    };

    match context.execute(&cli.command) {
        Ok(output) => {
            if let Err(e) = emit(&output) {
                eprintln!("error: {:#}", e);
                process::exit(1);
            }
            info!("Command completed successfully");
        }
        Err(e) => {
            error!("Command failed: {}", e);
            eprintln!("{}", pathtool::cli::map_error(&e));
            process::exit(1);
        }
    }
}

fn emit(output: &str) -> anyhow::Result<()> {
    if output.is_empty() {
        return Ok(());
    }
    let mut stdout = std::io::stdout().lock();
    stdout
        .write_all(output.as_bytes())
        .context("Failed to write report to stdout")?;
    stdout.flush().context("Failed to flush stdout")?;
    Ok(())
}

/// Build logging configuration from CLI args and config file.
/// Precedence: CLI flags override config file override defaults.
fn build_logging_config(cli: &Cli) -> LoggingConfig {
    let mut config = match cli.config {
        Some(ref config_path) => ConfigLoader::load_from_file(config_path)
            .ok()
            .map(|c| c.logging)
            .unwrap_or_default(),
        None => ConfigLoader::load(&cli.workspace)
            .ok()
            .map(|c| c.logging)
            .unwrap_or_default(),
    };

    if cli.verbose {
        config.level = "debug".to_string();
    }
    if let Some(ref level) = cli.log_level {
        config.level = level.clone();
    }
    if let Some(ref format) = cli.log_format {
        config.format = format.clone();
    }
    if let Some(ref output) = cli.log_output {
        config.output = output.clone();
    }
    if let Some(ref file) = cli.log_file {
        config.file = file.clone();
    }

    config
}
