//! In-memory action store

use crate::action::{
    Action, ActionKind, ActionStore, AppId, CodeInfo, MountAction, PathAction, ViewAction,
};
use crate::error::ResolveError;
use crate::model::ModelId;
use std::collections::BTreeMap;

/// Action store backed by a map of application to its declarations
#[derive(Debug, Clone, Default)]
pub struct MemoryActionStore {
    apps: BTreeMap<AppId, Vec<Action>>,
}

impl MemoryActionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Declare an application, even if it ends up with no actions
    pub fn declare(&mut self, app: AppId) {
        self.apps.entry(app).or_default();
    }

    /// Append an action to an application, declaring it if needed
    pub fn push(&mut self, app: AppId, action: Action) {
        self.apps.entry(app).or_default().push(action);
    }

    /// Declared applications in name order
    pub fn apps(&self) -> impl Iterator<Item = &AppId> {
        self.apps.keys()
    }

    pub fn app(mut self, app: &str) -> Self {
        self.declare(AppId::from(app));
        self
    }

    pub fn path(mut self, app: &str, path: &str, model: &str, code: CodeInfo) -> Self {
        self.push(
            AppId::from(app),
            Action::Path(PathAction {
                path: path.to_string(),
                model: ModelId::from(model),
                absorb: false,
                code,
            }),
        );
        self
    }

    pub fn absorb_path(mut self, app: &str, path: &str, model: &str, code: CodeInfo) -> Self {
        self.push(
            AppId::from(app),
            Action::Path(PathAction {
                path: path.to_string(),
                model: ModelId::from(model),
                absorb: true,
                code,
            }),
        );
        self
    }

    pub fn mount(mut self, app: &str, path: &str, target: &str, code: CodeInfo) -> Self {
        self.declare(AppId::from(target));
        self.push(
            AppId::from(app),
            Action::Mount(MountAction {
                path: path.to_string(),
                app: AppId::from(target),
                absorb: false,
                code,
            }),
        );
        self
    }

    /// Add a `view` directive for `model` with the given predicates
    pub fn view(
        self,
        app: &str,
        model: &str,
        predicates: &[(&str, &str)],
        code: CodeInfo,
    ) -> Self {
        self.view_action(app, "view", model, predicates, false, code)
    }

    pub fn view_action(
        mut self,
        app: &str,
        directive: &str,
        model: &str,
        predicates: &[(&str, &str)],
        internal: bool,
        code: CodeInfo,
    ) -> Self {
        self.push(
            AppId::from(app),
            Action::View(ViewAction {
                directive: directive.to_string(),
                model: ModelId::from(model),
                predicates: predicates
                    .iter()
                    .map(|(k, v)| (k.to_string(), v.to_string()))
                    .collect(),
                internal,
                code,
            }),
        );
        self
    }
}

impl ActionStore for MemoryActionStore {
    fn query(&self, kind: ActionKind, app: &AppId) -> Result<Vec<Action>, ResolveError> {
        let actions = self
            .apps
            .get(app)
            .ok_or_else(|| ResolveError::UnknownApp(app.clone()))?;
        Ok(actions
            .iter()
            .filter(|action| kind.matches(action))
            .cloned()
            .collect())
    }

    fn contains_app(&self, app: &AppId) -> bool {
        self.apps.contains_key(app)
    }
}
