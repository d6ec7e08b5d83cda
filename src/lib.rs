//! pathtool
//!
//! Reports every URL path, mount point and view published by a routed application tree.
//! Applications declare path, mount and view actions; the resolver walks the mount tree,
//! joins path templates, binds views to paths through the model type hierarchy and emits
//! a deterministic, sorted listing in text, CSV, JSON or table form.

pub mod action;
pub mod cli;
pub mod config;
pub mod error;
pub mod format;
pub mod logging;
pub mod manifest;
pub mod model;
pub mod record;
pub mod tree;
pub mod views;
