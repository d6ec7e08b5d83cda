//! Routing Actions
//!
//! Actions are the immutable declarations extracted from an application's routing
//! configuration: paths, mounts and views. An [`ActionStore`] answers queries for the
//! actions of a given kind declared on a given application; the resolver never looks
//! at how the store was populated.

pub mod memory;

pub use memory::MemoryActionStore;

use crate::error::ResolveError;
use crate::model::ModelId;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Identifier of an application (a node of the mount tree)
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AppId(String);

impl AppId {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AppId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for AppId {
    fn from(name: &str) -> Self {
        Self(name.to_string())
    }
}

/// Source location of a declaration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CodeInfo {
    pub file: String,
    pub line: u32,
}

impl CodeInfo {
    pub fn new(file: impl Into<String>, line: u32) -> Self {
        Self {
            file: file.into(),
            line,
        }
    }
}

impl fmt::Display for CodeInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.file, self.line)
    }
}

/// A path template bound to a model type
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathAction {
    pub path: String,
    pub model: ModelId,
    /// Path consumes all remaining URL segments
    pub absorb: bool,
    pub code: CodeInfo,
}

/// A path template that grafts another application underneath it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MountAction {
    pub path: String,
    pub app: AppId,
    pub absorb: bool,
    pub code: CodeInfo,
}

/// A view registered for a model type
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewAction {
    /// Declaring directive (`view`, `json`, `html`, ...)
    pub directive: String,
    pub model: ModelId,
    pub predicates: BTreeMap<String, String>,
    /// Only reachable programmatically, never through a URL
    pub internal: bool,
    pub code: CodeInfo,
}

/// Any declaration the resolver understands
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Path(PathAction),
    Mount(MountAction),
    View(ViewAction),
}

impl Action {
    /// Directive name the action was declared with
    pub fn directive(&self) -> &str {
        match self {
            Action::Path(_) => "path",
            Action::Mount(_) => "mount",
            Action::View(view) => &view.directive,
        }
    }

    pub fn code(&self) -> &CodeInfo {
        match self {
            Action::Path(path) => &path.code,
            Action::Mount(mount) => &mount.code,
            Action::View(view) => &view.code,
        }
    }
}

/// Kind of action requested from a store
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ActionKind {
    /// Path declarations, mounts included
    Path,
    /// Mount declarations only
    Mount,
    View,
}

impl ActionKind {
    pub fn matches(self, action: &Action) -> bool {
        match (self, action) {
            (ActionKind::Path, Action::Path(_) | Action::Mount(_)) => true,
            (ActionKind::Mount, Action::Mount(_)) => true,
            (ActionKind::View, Action::View(_)) => true,
            _ => false,
        }
    }
}

/// Read-only registry of declarations, queried per application
pub trait ActionStore {
    /// All actions of `kind` declared directly on `app`, in declaration order.
    fn query(&self, kind: ActionKind, app: &AppId) -> Result<Vec<Action>, ResolveError>;

    fn contains_app(&self, app: &AppId) -> bool;
}
