//! Report builder: one resolution pass from an action store to sorted records

use crate::action::{Action, ActionStore, AppId};
use crate::error::ResolveError;
use crate::model::TypeHierarchy;
use crate::record::{sort_records, ResolvedRecord, SortOrder};
use crate::tree::walker::{PathWalk, ResolvedPath};
use crate::views::{reachable_apps, ViewIndex, ViewScope};
use std::collections::HashMap;
use std::time::Instant;
use tracing::{debug, info, instrument};

/// Knobs of a resolution pass
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ResolveOptions {
    pub view_scope: ViewScope,
    pub sort: SortOrder,
}

/// Builds the path and view listing of an application tree
pub struct InfoBuilder<'a, S: ActionStore + ?Sized> {
    store: &'a S,
    hierarchy: &'a TypeHierarchy,
    options: ResolveOptions,
}

impl<'a, S: ActionStore + ?Sized> InfoBuilder<'a, S> {
    pub fn new(store: &'a S, hierarchy: &'a TypeHierarchy) -> Self {
        Self {
            store,
            hierarchy,
            options: ResolveOptions::default(),
        }
    }

    pub fn with_options(mut self, options: ResolveOptions) -> Self {
        self.options = options;
        self
    }

    /// Every path, mount and view declaration reachable from `root`, with its path.
    ///
    /// Each path declaration is immediately followed by the views bound to it; mounts
    /// are followed by the declarations of the mounted application. Mounts never get
    /// views of their own.
    pub fn actions(&self, root: &AppId) -> Result<Vec<(Action, String)>, ResolveError> {
        if !self.store.contains_app(root) {
            return Err(ResolveError::UnknownApp(root.clone()));
        }

        let tree_index = match self.options.view_scope {
            ViewScope::Tree => {
                let apps = reachable_apps(self.store, root)?;
                let index = ViewIndex::build(self.store, &apps)?;
                debug!(apps = apps.len(), views = index.len(), "Indexed views");
                Some(index)
            }
            ViewScope::App => None,
        };
        let mut app_indexes: HashMap<AppId, ViewIndex> = HashMap::new();

        let mut actions = Vec::new();
        for resolved in PathWalk::new(self.store, root, "")? {
            let ResolvedPath { action, path, app } = resolved?;
            let model = match &action {
                Action::Path(decl) => Some(decl.model.clone()),
                _ => None,
            };
            let Some(model) = model else {
                actions.push((action, path));
                continue;
            };

            let index = match &tree_index {
                Some(index) => index,
                None => {
                    if !app_indexes.contains_key(&app) {
                        let index = ViewIndex::build(self.store, [&app])?;
                        app_indexes.insert(app.clone(), index);
                    }
                    &app_indexes[&app]
                }
            };
            let views: Vec<(Action, String)> = index
                .bind(self.hierarchy, &model, &path)
                .into_iter()
                .map(|(view, view_path)| (Action::View(view.clone()), view_path))
                .collect();

            actions.push((action, path));
            actions.extend(views);
        }
        Ok(actions)
    }

    /// Resolve and sort the records of the tree rooted at `root`
    #[instrument(skip_all, fields(root = %root))]
    pub fn build(&self, root: &AppId) -> Result<Vec<ResolvedRecord>, ResolveError> {
        let start = Instant::now();

        let mut records: Vec<ResolvedRecord> = self
            .actions(root)?
            .into_iter()
            .map(|(action, path)| match action {
                Action::Path(decl) => ResolvedRecord::from_path(&decl, path, self.hierarchy),
                Action::Mount(decl) => ResolvedRecord::from_mount(&decl, path),
                Action::View(decl) => ResolvedRecord::from_view(&decl, path),
            })
            .collect();
        sort_records(&mut records, self.options.sort);

        let views = records.iter().filter(|r| r.view.is_some()).count();
        info!(
            records = records.len(),
            views,
            duration_ms = start.elapsed().as_millis(),
            "Resolved path listing"
        );
        Ok(records)
    }
}
