//! Path Tree
//!
//! Reconstructs the full URL path tree of an application from its path and mount
//! declarations, then drives the resolution pass that produces the report.

pub mod builder;
pub mod path;
pub mod walker;

pub use builder::{InfoBuilder, ResolveOptions};
pub use walker::{PathWalk, ResolvedPath};
