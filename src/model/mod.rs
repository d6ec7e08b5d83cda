//! Model Types
//!
//! Model types are the values that paths resolve to. Each declared type carries a module
//! and its direct bases; the hierarchy precomputes a method resolution order (MRO) for
//! every type so that view lookup never has to walk the inheritance graph again.

pub mod mro;

use crate::error::ManifestError;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};
use std::fmt;

/// Identifier of a model type as written in the manifest (unqualified name)
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ModelId(String);

impl ModelId {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ModelId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ModelId {
    fn from(name: &str) -> Self {
        Self(name.to_string())
    }
}

/// Declaration of a single model type
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModelDecl {
    /// Module the type lives in; empty for top-level names
    #[serde(default)]
    pub module: String,

    /// Direct bases, most significant first
    #[serde(default)]
    pub bases: Vec<ModelId>,
}

/// Type hierarchy with a precomputed linearization per declared type
#[derive(Debug, Clone, Default)]
pub struct TypeHierarchy {
    decls: BTreeMap<ModelId, ModelDecl>,
    mros: HashMap<ModelId, Vec<ModelId>>,
}

impl TypeHierarchy {
    /// Build a hierarchy from type declarations.
    ///
    /// Bases that are referenced but never declared are treated as root types.
    pub fn build(decls: BTreeMap<ModelId, ModelDecl>) -> Result<Self, ManifestError> {
        let mros = mro::linearize_all(&decls)?;
        Ok(Self { decls, mros })
    }

    /// Method resolution order of `model`, most derived first.
    ///
    /// An undeclared model resolves to itself alone.
    pub fn mro<'a>(&'a self, model: &'a ModelId) -> &'a [ModelId] {
        match self.mros.get(model) {
            Some(mro) => mro,
            None => std::slice::from_ref(model),
        }
    }

    /// Fully qualified name (`module.Name`) of a model
    pub fn dotted_name(&self, model: &ModelId) -> String {
        match self.decls.get(model) {
            Some(decl) if !decl.module.is_empty() => format!("{}.{}", decl.module, model),
            _ => model.to_string(),
        }
    }

    pub fn len(&self) -> usize {
        self.decls.len()
    }

    pub fn is_empty(&self) -> bool {
        self.decls.is_empty()
    }
}
