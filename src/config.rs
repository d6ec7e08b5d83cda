//! Configuration System
//!
//! Layered configuration: built-in defaults, then the global file, then the workspace
//! file, then `PATHTOOL__SECTION__KEY` environment variables. Command line flags are
//! applied on top by the CLI.

use crate::error::ApiError;
use crate::format::{CsvLayout, OutputFormat};
use crate::logging::LoggingConfig;
use crate::record::SortOrder;
use crate::views::ViewScope;
use config::builder::DefaultState;
use config::{ConfigBuilder, Environment, File};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;

mod merge {
    pub mod merge_policy;
}
mod sources {
    pub mod global_file;
    pub mod workspace_file;
}

pub use merge::merge_policy::DEFAULT_MANIFEST;

/// Root configuration structure
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PathToolConfig {
    #[serde(default)]
    pub report: ReportConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Report defaults, overridable per invocation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportConfig {
    /// Manifest file, relative paths are taken from the workspace root
    #[serde(default = "default_manifest")]
    pub manifest: PathBuf,

    /// Application to list when none is given; the manifest root otherwise
    #[serde(default)]
    pub default_app: Option<String>,

    #[serde(default)]
    pub format: OutputFormat,

    #[serde(default)]
    pub csv_layout: CsvLayout,

    #[serde(default)]
    pub view_scope: ViewScope,

    #[serde(default)]
    pub sort: SortOrder,
}

fn default_manifest() -> PathBuf {
    PathBuf::from(DEFAULT_MANIFEST)
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            manifest: default_manifest(),
            default_app: None,
            format: OutputFormat::default(),
            csv_layout: CsvLayout::default(),
            view_scope: ViewScope::default(),
            sort: SortOrder::default(),
        }
    }
}

/// Configuration validation errors
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Report: {0}")]
    Report(String),

    #[error("Logging: {0}")]
    Logging(String),
}

const LOG_LEVELS: [&str; 6] = ["trace", "debug", "info", "warn", "error", "off"];

impl PathToolConfig {
    /// Validate the entire configuration
    pub fn validate(&self) -> Result<(), Vec<ValidationError>> {
        let mut errors = Vec::new();

        if self.report.manifest.as_os_str().is_empty() {
            errors.push(ValidationError::Report(
                "Manifest path cannot be empty".to_string(),
            ));
        }
        if matches!(&self.report.default_app, Some(app) if app.trim().is_empty()) {
            errors.push(ValidationError::Report(
                "Default application cannot be blank".to_string(),
            ));
        }

        let logging = &self.logging;
        if !LOG_LEVELS.contains(&logging.level.to_lowercase().as_str()) {
            errors.push(ValidationError::Logging(format!(
                "Unknown level '{}'",
                logging.level
            )));
        }
        if logging.format != "text" && logging.format != "json" {
            errors.push(ValidationError::Logging(format!(
                "Unknown format '{}'",
                logging.format
            )));
        }
        if !["stdout", "stderr", "file"].contains(&logging.output.as_str()) {
            errors.push(ValidationError::Logging(format!(
                "Unknown output '{}'",
                logging.output
            )));
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    /// Validate and fold every problem into one error
    pub fn ensure_valid(&self) -> Result<(), ApiError> {
        self.validate().map_err(|errors| {
            let error_msgs: Vec<String> = errors.iter().map(|e| e.to_string()).collect();
            ApiError::ConfigError(format!(
                "Configuration validation failed:\n{}",
                error_msgs.join("\n")
            ))
        })
    }
}

/// Builds a [`PathToolConfig`] from its layered sources
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load defaults, the global file, the workspace file and the environment
    pub fn load(workspace_root: &Path) -> Result<PathToolConfig, ApiError> {
        let builder = merge::merge_policy::builder_with_defaults()?;
        let builder = sources::global_file::add_to_builder(builder)?;
        let builder = sources::workspace_file::add_to_builder(builder, workspace_root)?;
        Self::finish(builder)
    }

    /// Load defaults, the given file and the environment; no other files are read
    pub fn load_from_file(path: &Path) -> Result<PathToolConfig, ApiError> {
        if !path.exists() {
            return Err(ApiError::ConfigError(format!(
                "Configuration file not found: {}",
                path.display()
            )));
        }
        let builder = merge::merge_policy::builder_with_defaults()?
            .add_source(File::from(path.to_path_buf()).required(true));
        Self::finish(builder)
    }

    pub fn global_config_path() -> Option<PathBuf> {
        sources::global_file::global_config_path()
    }

    pub fn workspace_config_path(workspace_root: &Path) -> PathBuf {
        sources::workspace_file::workspace_config_path(workspace_root)
    }

    fn finish(builder: ConfigBuilder<DefaultState>) -> Result<PathToolConfig, ApiError> {
        let settings = builder
            .add_source(Environment::with_prefix("PATHTOOL").separator("__"))
            .build()?;
        let config: PathToolConfig = settings.try_deserialize()?;
        debug!(
            manifest = %config.report.manifest.display(),
            format = %config.report.format,
            "Loaded configuration"
        );
        Ok(config)
    }
}
