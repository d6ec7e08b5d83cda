//! Merge rules: defaults first, later sources override earlier ones key by key.

use config::builder::DefaultState;
use config::Config;
use config::ConfigBuilder;
use config::ConfigError;

/// Manifest file looked up in the workspace when none is configured
pub const DEFAULT_MANIFEST: &str = "pathtool.toml";

/// Create a Config builder with merge policy defaults applied.
pub fn builder_with_defaults() -> Result<ConfigBuilder<DefaultState>, ConfigError> {
    Config::builder()
        .set_default("report.manifest", DEFAULT_MANIFEST)?
        .set_default("report.format", "csv")?
        .set_default("report.csv_layout", "full")?
        .set_default("report.view_scope", "tree")?
        .set_default("report.sort", "canonical")?
        .set_default("logging.level", "warn")?
        .set_default("logging.format", "text")?
        .set_default("logging.output", "stderr")
}
