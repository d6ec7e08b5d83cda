//! Error types for the path reporting tool.

use crate::action::AppId;
use crate::model::ModelId;
use thiserror::Error;

/// Errors raised while resolving the path tree of an application
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ResolveError {
    #[error("Unknown application: {0}")]
    UnknownApp(AppId),

    #[error("Mount cycle detected: {app} is mounted inside itself")]
    MountCycle { app: AppId },
}

/// Errors raised while loading a routing manifest
#[derive(Debug, Error)]
pub enum ManifestError {
    #[error("Manifest I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid TOML manifest: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Invalid JSON manifest: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Root application {0} is not declared in the manifest")]
    UnknownRoot(AppId),

    #[error("Application {app} mounts undeclared application {target}")]
    UnknownMountTarget { app: AppId, target: AppId },

    #[error("Mount cycle detected: {}", format_cycle(.0))]
    MountCycle(Vec<AppId>),

    #[error("Cannot compute a consistent method resolution order for {0}")]
    InconsistentMro(ModelId),
}

fn format_cycle(apps: &[AppId]) -> String {
    apps.iter()
        .map(|app| app.as_str())
        .collect::<Vec<_>>()
        .join(" -> ")
}

/// Top-level errors surfaced to the CLI
#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    Resolve(#[from] ResolveError),

    #[error(transparent)]
    Manifest(#[from] ManifestError),

    #[error("Output error: {0}")]
    Format(String),

    #[error("Output I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    ConfigError(String),
}

impl From<config::ConfigError> for ApiError {
    fn from(err: config::ConfigError) -> Self {
        ApiError::ConfigError(err.to_string())
    }
}

impl From<csv::Error> for ApiError {
    fn from(err: csv::Error) -> Self {
        ApiError::Format(err.to_string())
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        ApiError::Format(err.to_string())
    }
}
