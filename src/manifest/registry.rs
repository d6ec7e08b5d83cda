//! Loading a manifest into a queryable registry

use crate::action::{
    Action, ActionKind, ActionStore, AppId, CodeInfo, MemoryActionStore, MountAction,
    PathAction, ViewAction,
};
use crate::error::{ManifestError, ResolveError};
use crate::manifest::Manifest;
use crate::model::TypeHierarchy;
use serde::Serialize;
use std::collections::{BTreeMap, HashMap};
use tracing::debug;

/// Loaded manifest: the action store, the type hierarchy and the default root
#[derive(Debug, Clone)]
pub struct Registry {
    pub root: AppId,
    pub store: MemoryActionStore,
    pub hierarchy: TypeHierarchy,
}

/// Per-application declaration counts
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AppSummary {
    pub app: AppId,
    pub root: bool,
    pub paths: usize,
    pub mounts: usize,
    pub views: usize,
}

impl Manifest {
    /// Validate the manifest and build the registry.
    ///
    /// `source_name` is used as the file of declarations that do not name one.
    pub fn into_registry(self, source_name: &str) -> Result<Registry, ManifestError> {
        if !self.apps.contains_key(&self.root) {
            return Err(ManifestError::UnknownRoot(self.root));
        }

        let mut mount_graph: BTreeMap<AppId, Vec<AppId>> = BTreeMap::new();
        for (app, decl) in &self.apps {
            for mount in &decl.mounts {
                if !self.apps.contains_key(&mount.app) {
                    return Err(ManifestError::UnknownMountTarget {
                        app: app.clone(),
                        target: mount.app.clone(),
                    });
                }
                mount_graph
                    .entry(app.clone())
                    .or_default()
                    .push(mount.app.clone());
            }
        }
        check_mount_cycles(&mount_graph)?;

        let hierarchy = TypeHierarchy::build(self.models)?;

        let code = |file: Option<String>, line: u32| {
            CodeInfo::new(file.unwrap_or_else(|| source_name.to_string()), line)
        };

        let mut store = MemoryActionStore::new();
        for (app, decl) in self.apps {
            store.declare(app.clone());
            for path in decl.paths {
                store.push(
                    app.clone(),
                    Action::Path(PathAction {
                        path: path.path,
                        model: path.model,
                        absorb: path.absorb,
                        code: code(path.file, path.line),
                    }),
                );
            }
            for mount in decl.mounts {
                store.push(
                    app.clone(),
                    Action::Mount(MountAction {
                        path: mount.path,
                        app: mount.app,
                        absorb: mount.absorb,
                        code: code(mount.file, mount.line),
                    }),
                );
            }
            for view in decl.views {
                store.push(
                    app.clone(),
                    Action::View(ViewAction {
                        directive: view.directive,
                        model: view.model,
                        predicates: view
                            .predicates
                            .into_iter()
                            .map(|(key, value)| (key, value.to_string()))
                            .collect(),
                        internal: view.internal,
                        code: code(view.file, view.line),
                    }),
                );
            }
        }

        debug!(
            root = %self.root,
            models = hierarchy.len(),
            "Loaded manifest"
        );

        Ok(Registry {
            root: self.root,
            store,
            hierarchy,
        })
    }
}

impl Registry {
    /// The requested application, or the manifest root when none is requested
    pub fn resolve_app(&self, requested: Option<&str>) -> Result<AppId, ResolveError> {
        let app = requested.map(AppId::from).unwrap_or_else(|| self.root.clone());
        if self.store.contains_app(&app) {
            Ok(app)
        } else {
            Err(ResolveError::UnknownApp(app))
        }
    }

    /// Declaration counts per application, root first, then by name
    pub fn summaries(&self) -> Result<Vec<AppSummary>, ResolveError> {
        let mut summaries = Vec::new();
        for app in self.store.apps() {
            let count = |kind| self.store.query(kind, app).map(|actions| actions.len());
            let mounts = count(ActionKind::Mount)?;
            summaries.push(AppSummary {
                app: app.clone(),
                root: *app == self.root,
                paths: count(ActionKind::Path)? - mounts,
                mounts,
                views: count(ActionKind::View)?,
            });
        }
        summaries.sort_by(|a, b| b.root.cmp(&a.root).then_with(|| a.app.cmp(&b.app)));
        Ok(summaries)
    }
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum Mark {
    Visiting,
    Done,
}

/// Reject mount graphs in which an application ends up mounted inside itself
fn check_mount_cycles(graph: &BTreeMap<AppId, Vec<AppId>>) -> Result<(), ManifestError> {
    let mut marks = HashMap::new();
    let mut stack = Vec::new();
    for app in graph.keys() {
        visit(app, graph, &mut marks, &mut stack)?;
    }
    Ok(())
}

fn visit(
    app: &AppId,
    graph: &BTreeMap<AppId, Vec<AppId>>,
    marks: &mut HashMap<AppId, Mark>,
    stack: &mut Vec<AppId>,
) -> Result<(), ManifestError> {
    match marks.get(app) {
        Some(Mark::Done) => return Ok(()),
        Some(Mark::Visiting) => {
            let start = stack.iter().position(|a| a == app).unwrap_or(0);
            let mut cycle = stack[start..].to_vec();
            cycle.push(app.clone());
            return Err(ManifestError::MountCycle(cycle));
        }
        None => {}
    }

    marks.insert(app.clone(), Mark::Visiting);
    stack.push(app.clone());
    for target in graph.get(app).into_iter().flatten() {
        visit(target, graph, marks, stack)?;
    }
    stack.pop();
    marks.insert(app.clone(), Mark::Done);
    Ok(())
}
