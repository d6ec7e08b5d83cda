//! Logging System
//!
//! Structured logging using the `tracing` crate. Log level, format and destination come
//! from configuration and can be overridden through `PATHTOOL_LOG*` environment
//! variables. Logs go to stderr by default because stdout carries the report.

use crate::error::ApiError;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::Mutex;
use tracing_subscriber::fmt::time::ChronoUtc;
use tracing_subscriber::fmt::writer::BoxMakeWriter;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Registry};

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level: trace, debug, info, warn, error, off
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Output format: json, text (default: text)
    #[serde(default = "default_format")]
    pub format: String,

    /// Output destination: stdout, stderr, file
    #[serde(default = "default_output")]
    pub output: String,

    /// Log file path (if output is "file")
    #[serde(default = "default_log_file")]
    pub file: PathBuf,

    /// Enable colored output (text format on a terminal stream only)
    #[serde(default = "default_true")]
    pub color: bool,

    /// Module-specific log levels
    #[serde(default)]
    pub modules: HashMap<String, String>,
}

fn default_log_level() -> String {
    "warn".to_string()
}

fn default_format() -> String {
    "text".to_string()
}

fn default_output() -> String {
    "stderr".to_string()
}

fn default_log_file() -> PathBuf {
    PathBuf::from("pathtool.log")
}

fn default_true() -> bool {
    true
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_format(),
            output: default_output(),
            file: default_log_file(),
            color: default_true(),
            modules: HashMap::new(),
        }
    }
}

/// Where log lines are written
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LogOutput {
    Stdout,
    Stderr,
    File,
}

/// Initialize the global subscriber
///
/// Priority order (highest to lowest):
/// 1. Environment variables (PATHTOOL_LOG, PATHTOOL_LOG_FORMAT, ...)
/// 2. The given configuration (CLI flags are already folded into it)
/// 3. Defaults
pub fn init_logging(config: Option<&LoggingConfig>) -> Result<(), ApiError> {
    let filter = build_env_filter(config)?;
    let format = determine_format(config)?;
    let output = determine_output(config)?;
    let use_color = config.map(|c| c.color).unwrap_or(true) && output != LogOutput::File;

    let writer = match output {
        LogOutput::Stdout => BoxMakeWriter::new(std::io::stdout),
        LogOutput::Stderr => BoxMakeWriter::new(std::io::stderr),
        LogOutput::File => {
            let log_file = config
                .map(|c| c.file.clone())
                .unwrap_or_else(default_log_file);
            if let Some(parent) = log_file.parent().filter(|p| !p.as_os_str().is_empty()) {
                std::fs::create_dir_all(parent).map_err(|e| {
                    ApiError::ConfigError(format!("Failed to create log directory: {}", e))
                })?;
            }
            let file = std::fs::OpenOptions::new()
                .create(true)
                .append(true)
                .open(&log_file)
                .map_err(|e| {
                    ApiError::ConfigError(format!(
                        "Failed to open log file {:?}: {}",
                        log_file, e
                    ))
                })?;
            BoxMakeWriter::new(Mutex::new(file))
        }
    };

    let base_subscriber = Registry::default().with(filter);
    let result = if format == "json" {
        base_subscriber
            .with(
                fmt::layer()
                    .json()
                    .with_target(true)
                    .with_timer(ChronoUtc::rfc_3339())
                    .with_writer(writer),
            )
            .try_init()
    } else {
        base_subscriber
            .with(
                fmt::layer()
                    .with_target(true)
                    .with_timer(ChronoUtc::rfc_3339())
                    .with_ansi(use_color)
                    .with_writer(writer),
            )
            .try_init()
    };

    result.map_err(|e| ApiError::ConfigError(format!("Failed to initialize logging: {}", e)))
}

/// Build environment filter from config or environment variables
fn build_env_filter(config: Option<&LoggingConfig>) -> Result<EnvFilter, ApiError> {
    if let Ok(filter) = EnvFilter::try_from_env("PATHTOOL_LOG") {
        return Ok(filter);
    }

    let level = config.map(|c| c.level.as_str()).unwrap_or("warn");
    if level == "off" {
        return Ok(EnvFilter::new("off"));
    }

    let mut filter = EnvFilter::new(level);

    if let Some(config) = config {
        let mut modules: Vec<_> = config.modules.iter().collect();
        modules.sort();
        for (module, module_level) in modules {
            let directive = format!("{}={}", module, module_level);
            filter = filter.add_directive(
                directive
                    .parse()
                    .map_err(|e| ApiError::ConfigError(format!("Invalid log directive: {}", e)))?,
            );
        }
    }

    if let Ok(modules_str) = std::env::var("PATHTOOL_LOG_MODULES") {
        for module_spec in modules_str.split(',') {
            let parts: Vec<&str> = module_spec.split('=').collect();
            if parts.len() == 2 {
                let directive = format!("{}={}", parts[0].trim(), parts[1].trim());
                filter = filter.add_directive(directive.parse().map_err(|e| {
                    ApiError::ConfigError(format!("Invalid log directive from env: {}", e))
                })?);
            }
        }
    }

    Ok(filter)
}

/// Determine output format from environment or config
fn determine_format(config: Option<&LoggingConfig>) -> Result<String, ApiError> {
    if let Ok(format) = std::env::var("PATHTOOL_LOG_FORMAT") {
        if format == "json" || format == "text" {
            return Ok(format);
        }
    }

    let format = config.map(|c| c.format.as_str()).unwrap_or("text");
    if format != "json" && format != "text" {
        return Err(ApiError::ConfigError(format!(
            "Invalid log format: {} (must be 'json' or 'text')",
            format
        )));
    }

    Ok(format.to_string())
}

/// Determine output destination from environment or config
fn determine_output(config: Option<&LoggingConfig>) -> Result<LogOutput, ApiError> {
    if let Ok(output) = std::env::var("PATHTOOL_LOG_OUTPUT") {
        return parse_output(&output);
    }

    parse_output(config.map(|c| c.output.as_str()).unwrap_or("stderr"))
}

fn parse_output(output: &str) -> Result<LogOutput, ApiError> {
    match output {
        "stdout" => Ok(LogOutput::Stdout),
        "stderr" => Ok(LogOutput::Stderr),
        "file" => Ok(LogOutput::File),
        _ => Err(ApiError::ConfigError(format!(
            "Invalid log output: {} (must be 'stdout', 'stderr' or 'file')",
            output
        ))),
    }
}
