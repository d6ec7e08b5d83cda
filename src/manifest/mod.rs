//! Routing Manifest
//!
//! Declarative description of an application tree: the applications, the model types
//! their paths resolve to, and every path, mount and view declaration with its source
//! location. A manifest is parsed from TOML (or JSON, by file extension) and loaded into
//! a [`Registry`] that the resolver queries.

mod registry;

pub use registry::{AppSummary, Registry};

use crate::action::AppId;
use crate::error::ManifestError;
use crate::model::{ModelDecl, ModelId};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::path::Path;
use tracing::debug;

/// Directive used by view declarations that do not name one
pub const DEFAULT_VIEW_DIRECTIVE: &str = "view";

/// Root manifest document
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Manifest {
    /// Application listed when no application is requested
    pub root: AppId,

    #[serde(default)]
    pub models: BTreeMap<ModelId, ModelDecl>,

    #[serde(default)]
    pub apps: BTreeMap<AppId, AppDecl>,
}

/// Declarations made directly on one application.
///
/// Applications carry no module, so the `model` column of a mount record is the bare
/// identifier of the mounted application rather than a dotted model name.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppDecl {
    #[serde(default)]
    pub paths: Vec<PathDecl>,

    #[serde(default)]
    pub mounts: Vec<MountDecl>,

    #[serde(default)]
    pub views: Vec<ViewDecl>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PathDecl {
    pub path: String,
    pub model: ModelId,
    #[serde(default)]
    pub absorb: bool,
    /// Declaring source file; defaults to the manifest itself
    pub file: Option<String>,
    #[serde(default)]
    pub line: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MountDecl {
    pub path: String,
    pub app: AppId,
    #[serde(default)]
    pub absorb: bool,
    pub file: Option<String>,
    #[serde(default)]
    pub line: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ViewDecl {
    pub model: ModelId,
    #[serde(default = "default_view_directive")]
    pub directive: String,
    #[serde(default)]
    pub predicates: BTreeMap<String, PredicateValue>,
    #[serde(default)]
    pub internal: bool,
    pub file: Option<String>,
    #[serde(default)]
    pub line: u32,
}

fn default_view_directive() -> String {
    DEFAULT_VIEW_DIRECTIVE.to_string()
}

/// Scalar predicate value as written in the manifest
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PredicateValue {
    Bool(bool),
    Integer(i64),
    Float(f64),
    Text(String),
}

impl fmt::Display for PredicateValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PredicateValue::Bool(value) => write!(f, "{}", value),
            PredicateValue::Integer(value) => write!(f, "{}", value),
            // 1.0 stays distinct from 1
            PredicateValue::Float(value) if value.is_finite() && value.fract() == 0.0 => {
                write!(f, "{:.1}", value)
            }
            PredicateValue::Float(value) => write!(f, "{}", value),
            PredicateValue::Text(value) => f.write_str(value),
        }
    }
}

impl Manifest {
    pub fn from_toml_str(source: &str) -> Result<Self, ManifestError> {
        Ok(toml::from_str(source)?)
    }

    pub fn from_json_str(source: &str) -> Result<Self, ManifestError> {
        Ok(serde_json::from_str(source)?)
    }

    /// Read a manifest file; `.json` files are parsed as JSON, anything else as TOML
    pub fn from_path(path: &Path) -> Result<Self, ManifestError> {
        let source = std::fs::read_to_string(path)?;
        let is_json = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
        debug!(manifest = %path.display(), json = is_json, "Parsing manifest");
        if is_json {
            Self::from_json_str(&source)
        } else {
            Self::from_toml_str(&source)
        }
    }

    /// Read and load a manifest file in one step
    pub fn load(path: &Path) -> Result<Registry, ManifestError> {
        let source_name = path.display().to_string();
        Self::from_path(path)?.into_registry(&source_name)
    }
}
