//! View Binding
//!
//! Attaches view declarations to resolved paths. Views are indexed once per resolution
//! pass by the exact model type they were declared for; binding a path then walks the
//! MRO of the path's model (most derived first) and collects every view found along
//! the way, so a view declared on a base type shows up on every descendant path next to
//! any views declared on the descendant itself.

use crate::action::{Action, ActionKind, ActionStore, AppId, ViewAction};
use crate::error::ResolveError;
use crate::model::{ModelId, TypeHierarchy};
use crate::tree::path::view_path;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeSet, HashMap};
use std::str::FromStr;

/// Which view declarations a path can see
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ViewScope {
    /// Views declared anywhere in the application tree
    #[default]
    Tree,
    /// Only views declared in the same application as the path
    App,
}

impl FromStr for ViewScope {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "tree" => Ok(ViewScope::Tree),
            "app" => Ok(ViewScope::App),
            _ => Err(format!("Invalid view scope: {} (must be 'tree' or 'app')", s)),
        }
    }
}

/// View declarations keyed by the exact model type they were declared for
#[derive(Debug, Clone, Default)]
pub struct ViewIndex {
    by_model: HashMap<ModelId, Vec<ViewAction>>,
}

impl ViewIndex {
    /// Index the views declared directly on each of `apps`, in the given order
    pub fn build<'a, S, I>(store: &S, apps: I) -> Result<Self, ResolveError>
    where
        S: ActionStore + ?Sized,
        I: IntoIterator<Item = &'a AppId>,
    {
        let mut index = Self::default();
        for app in apps {
            for action in store.query(ActionKind::View, app)? {
                if let Action::View(view) = action {
                    index.insert(view);
                }
            }
        }
        Ok(index)
    }

    pub fn insert(&mut self, view: ViewAction) {
        self.by_model
            .entry(view.model.clone())
            .or_default()
            .push(view);
    }

    /// Views declared for exactly `model`, without inheritance
    pub fn declared_for(&self, model: &ModelId) -> &[ViewAction] {
        self.by_model.get(model).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Every view applicable to `model`, paired with its path below `base`.
    ///
    /// Views are returned in MRO order: those of the model itself first, then those of
    /// each ancestor.
    pub fn bind<'a>(
        &'a self,
        hierarchy: &TypeHierarchy,
        model: &ModelId,
        base: &str,
    ) -> Vec<(&'a ViewAction, String)> {
        hierarchy
            .mro(model)
            .iter()
            .flat_map(|ancestor| self.declared_for(ancestor))
            .map(|view| {
                let name = view.predicates.get("name").map(String::as_str).unwrap_or("");
                (view, view_path(base, name))
            })
            .collect()
    }

    /// Number of indexed view declarations
    pub fn len(&self) -> usize {
        self.by_model.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.by_model.is_empty()
    }
}

/// Every application reachable from `root` through mounts, root first, in discovery order
pub fn reachable_apps<S: ActionStore + ?Sized>(
    store: &S,
    root: &AppId,
) -> Result<Vec<AppId>, ResolveError> {
    let mut seen = BTreeSet::new();
    let mut order = Vec::new();
    let mut stack = vec![root.clone()];
    while let Some(app) = stack.pop() {
        if !seen.insert(app.clone()) {
            continue;
        }
        let mounts = store.query(ActionKind::Mount, &app)?;
        order.push(app);
        // Reverse so the first declared mount is visited first.
        for action in mounts.into_iter().rev() {
            if let Action::Mount(mount) = action {
                stack.push(mount.app);
            }
        }
    }
    Ok(order)
}
