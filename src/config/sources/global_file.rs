//! Global config file source: $XDG_CONFIG_HOME/pathtool/config.toml or ~/.config/pathtool/config.toml

use config::builder::DefaultState;
use config::ConfigBuilder;
use config::ConfigError;
use config::File;
use directories::ProjectDirs;
use std::path::PathBuf;
use tracing::debug;

/// Path to global config file.
pub fn global_config_path() -> Option<PathBuf> {
    ProjectDirs::from("", "", "pathtool")
        .map(|dirs| dirs.config_dir().to_path_buf())
        .or_else(|| {
            std::env::var_os("HOME")
                .map(|home| PathBuf::from(home).join(".config").join("pathtool"))
        })
        .map(|dir| dir.join("config.toml"))
}

/// Add global config file source to builder if it exists.
pub fn add_to_builder(
    mut builder: ConfigBuilder<DefaultState>,
) -> Result<ConfigBuilder<DefaultState>, ConfigError> {
    if let Some(path) = global_config_path() {
        if path.exists() {
            builder = builder.add_source(File::from(path).required(false));
        } else {
            debug!(config_path = %path.display(), "No global configuration file");
        }
    }
    Ok(builder)
}
