//! CLI parse: clap types for pathtool. No behavior; definitions only.

use crate::cli::presentation::AppsFormat;
use crate::format::{CsvLayout, OutputFormat};
use crate::record::SortOrder;
use crate::views::ViewScope;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// pathtool - list every URL path and view an application tree publishes
#[derive(Parser, Debug)]
#[command(name = "pathtool")]
#[command(about = "Report the resolved URL paths and views of a routed application tree")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Workspace root directory
    #[arg(long, global = true, default_value = ".")]
    pub workspace: PathBuf,

    /// Configuration file path (replaces the global and workspace config files)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Log at debug level
    #[arg(long, global = true)]
    pub verbose: bool,

    /// Log level (trace, debug, info, warn, error, off)
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Log format (json, text)
    #[arg(long, global = true)]
    pub log_format: Option<String>,

    /// Log output (stdout, stderr, file)
    #[arg(long, global = true)]
    pub log_output: Option<String>,

    /// Log file path (if output is "file")
    #[arg(long, global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// List resolved paths, mounts and views
    List {
        /// Manifest describing the applications (default: pathtool.toml in the workspace)
        #[arg(long)]
        manifest: Option<PathBuf>,

        /// Application to start from (default: the manifest root)
        #[arg(long)]
        app: Option<String>,

        /// Output format (text, csv, json, table)
        #[arg(long)]
        format: Option<OutputFormat>,

        /// CSV columns (full, minimal)
        #[arg(long)]
        csv_layout: Option<CsvLayout>,

        /// Which views a path can see (tree, app)
        #[arg(long)]
        view_scope: Option<ViewScope>,

        /// Record order (canonical, rendered-path)
        #[arg(long)]
        sort: Option<SortOrder>,

        /// Write the report here instead of stdout
        output: Option<PathBuf>,
    },
    /// List the applications declared in the manifest
    Apps {
        /// Manifest describing the applications (default: pathtool.toml in the workspace)
        #[arg(long)]
        manifest: Option<PathBuf>,

        /// Output format (text or json)
        #[arg(long, default_value = "text")]
        format: AppsFormat,
    },
}
