//! Lazy depth-first walk over the path and mount declarations of an application tree

use crate::action::{Action, ActionKind, ActionStore, AppId};
use crate::error::ResolveError;
use crate::tree::path::join_path;
use tracing::trace;

/// A path or mount declaration together with its fully resolved path
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedPath {
    pub action: Action,
    pub path: String,
    /// Application that declared the action
    pub app: AppId,
}

/// One application on the walk stack
struct Frame {
    app: AppId,
    base: String,
    pending: std::vec::IntoIter<Action>,
}

/// Pre-order walk of an application tree.
///
/// Yields each path or mount declaration in store order; a mount is followed by every
/// declaration of the mounted application before its own siblings. After an error the
/// walk is exhausted.
pub struct PathWalk<'s, S: ActionStore + ?Sized> {
    store: &'s S,
    stack: Vec<Frame>,
}

impl<'s, S: ActionStore + ?Sized> PathWalk<'s, S> {
    /// Start a walk at `root`, prefixing every path with `base`
    pub fn new(store: &'s S, root: &AppId, base: &str) -> Result<Self, ResolveError> {
        let pending = store.query(ActionKind::Path, root)?;
        Ok(Self {
            store,
            stack: vec![Frame {
                app: root.clone(),
                base: base.to_string(),
                pending: pending.into_iter(),
            }],
        })
    }

    fn enter(&mut self, app: &AppId, base: &str) -> Result<(), ResolveError> {
        if self.stack.iter().any(|frame| &frame.app == app) {
            return Err(ResolveError::MountCycle { app: app.clone() });
        }
        let pending = self.store.query(ActionKind::Path, app)?;
        trace!(app = %app, base, declarations = pending.len(), "Entering mounted app");
        self.stack.push(Frame {
            app: app.clone(),
            base: base.to_string(),
            pending: pending.into_iter(),
        });
        Ok(())
    }
}

impl<S: ActionStore + ?Sized> Iterator for PathWalk<'_, S> {
    type Item = Result<ResolvedPath, ResolveError>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let frame = self.stack.last_mut()?;
            let Some(action) = frame.pending.next() else {
                self.stack.pop();
                continue;
            };

            let path = match &action {
                Action::Path(decl) => join_path(&frame.base, &decl.path, decl.absorb),
                Action::Mount(decl) => join_path(&frame.base, &decl.path, decl.absorb),
                Action::View(_) => continue,
            };
            let app = frame.app.clone();

            if let Action::Mount(mount) = &action {
                if let Err(err) = self.enter(&mount.app, &path) {
                    self.stack.clear();
                    return Some(Err(err));
                }
            }

            return Some(Ok(ResolvedPath { action, path, app }));
        }
    }
}
