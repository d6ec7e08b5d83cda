//! Workspace config file source: config/pathtool.toml

use config::builder::DefaultState;
use config::ConfigBuilder;
use config::ConfigError;
use config::File;
use std::path::{Path, PathBuf};

pub fn workspace_config_path(workspace_root: &Path) -> PathBuf {
    workspace_root.join("config").join("pathtool.toml")
}

/// Add the workspace config file to builder if it exists.
pub fn add_to_builder(
    builder: ConfigBuilder<DefaultState>,
    workspace_root: &Path,
) -> Result<ConfigBuilder<DefaultState>, ConfigError> {
    let path = workspace_config_path(workspace_root);
    if path.exists() {
        return Ok(builder.add_source(File::from(path).required(false)));
    }
    Ok(builder)
}
