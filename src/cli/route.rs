//! CLI route: single route table and run context.

use crate::cli::parse::Commands;
use crate::cli::presentation::format_apps;
use crate::config::{ConfigLoader, PathToolConfig};
use crate::error::{ApiError, ManifestError};
use crate::format::write_report;
use crate::manifest::{Manifest, Registry};
use crate::tree::{InfoBuilder, ResolveOptions};
use std::fs::File;
use std::io::{self, BufWriter};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Runtime context for CLI execution: workspace root and the loaded configuration.
pub struct RunContext {
    workspace_root: PathBuf,
    config: PathToolConfig,
}

impl RunContext {
    /// Create run context from workspace root and optional config path. Uses ConfigLoader only.
    pub fn new(workspace_root: PathBuf, config_path: Option<PathBuf>) -> Result<Self, ApiError> {
        let config = match config_path {
            Some(ref path) => ConfigLoader::load_from_file(path)?,
            None => ConfigLoader::load(&workspace_root)?,
        };
        config.ensure_valid()?;
        Ok(Self::with_config(workspace_root, config))
    }

    /// Run context over an already loaded configuration
    pub fn with_config(workspace_root: PathBuf, config: PathToolConfig) -> Self {
        Self {
            workspace_root,
            config,
        }
    }

    pub fn config(&self) -> &PathToolConfig {
        &self.config
    }

    /// Execute a command. Returns what should be printed on stdout.
    pub fn execute(&self, command: &Commands) -> Result<String, ApiError> {
        match command {
            Commands::List {
                manifest,
                app,
                format,
                csv_layout,
                view_scope,
                sort,
                output,
            } => {
                let registry = self.load_registry(manifest.as_deref())?;
                let requested = app
                    .as_deref()
                    .or(self.config.report.default_app.as_deref());
                let root = registry.resolve_app(requested)?;

                let report = &self.config.report;
                let options = ResolveOptions {
                    view_scope: view_scope.unwrap_or(report.view_scope),
                    sort: sort.unwrap_or(report.sort),
                };
                let records = InfoBuilder::new(&registry.store, &registry.hierarchy)
                    .with_options(options)
                    .build(&root)?;

                let format = format.unwrap_or(report.format);
                let layout = csv_layout.unwrap_or(report.csv_layout);
                match output {
                    Some(path) => {
                        let mut writer = BufWriter::new(File::create(path)?);
                        write_report(&mut writer, &records, format, layout)?;
                        info!(
                            output = %path.display(),
                            records = records.len(),
                            "Wrote report"
                        );
                        Ok(String::new())
                    }
                    None => {
                        let mut buffer = Vec::new();
                        write_report(&mut buffer, &records, format, layout)?;
                        String::from_utf8(buffer).map_err(|e| ApiError::Format(e.to_string()))
                    }
                }
            }
            Commands::Apps { manifest, format } => {
                let registry = self.load_registry(manifest.as_deref())?;
                let summaries = registry.summaries()?;
                format_apps(&summaries, *format)
            }
        }
    }

    /// Manifest path: the explicit one, or the configured one; relative paths are
    /// taken from the workspace root.
    pub fn manifest_path(&self, explicit: Option<&Path>) -> PathBuf {
        let path = explicit.unwrap_or(self.config.report.manifest.as_path());
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.workspace_root.join(path)
        }
    }

    fn load_registry(&self, explicit: Option<&Path>) -> Result<Registry, ApiError> {
        let path = self.manifest_path(explicit);
        if !path.exists() {
            return Err(ManifestError::Io(io::Error::new(
                io::ErrorKind::NotFound,
                format!("manifest not found: {}", path.display()),
            ))
            .into());
        }
        debug!(manifest = %path.display(), "Loading manifest");
        Ok(Manifest::load(&path)?)
    }
}
