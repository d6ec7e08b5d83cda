//! Resolved Records
//!
//! Uniform output rows for path, mount and view declarations, plus the total ordering
//! used to make reports diffable across builds.

use crate::action::{MountAction, PathAction, ViewAction};
use crate::model::TypeHierarchy;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::collections::BTreeMap;
use std::str::FromStr;

/// Rendered path of views that cannot be reached through a URL
pub const INTERNAL_PATH: &str = "internal";

/// Request method assumed when a view does not restrict it
pub const DEFAULT_REQUEST_METHOD: &str = "GET";

/// Predicates that have dedicated report columns
const KNOWN_PREDICATES: [&str; 2] = ["name", "request_method"];

/// View-specific fields of a record
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ViewInfo {
    pub predicates: BTreeMap<String, String>,
    pub view_name: String,
    pub request_method: String,
    /// Predicates beyond `name` and `request_method` are present
    pub extra_predicates: bool,
    pub internal: bool,
}

impl ViewInfo {
    fn from_predicates(predicates: &BTreeMap<String, String>, internal: bool) -> Self {
        Self {
            predicates: predicates.clone(),
            view_name: predicates.get("name").cloned().unwrap_or_default(),
            request_method: predicates
                .get("request_method")
                .cloned()
                .unwrap_or_else(|| DEFAULT_REQUEST_METHOD.to_string()),
            extra_predicates: predicates
                .keys()
                .any(|key| !KNOWN_PREDICATES.contains(&key.as_str())),
            internal,
        }
    }

    /// `key=value` pairs joined by commas, in key order
    pub fn predicates_string(&self) -> String {
        self.predicates
            .iter()
            .map(|(key, value)| format!("{}={}", key, value))
            .collect::<Vec<_>>()
            .join(",")
    }
}

/// One line of the report
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolvedRecord {
    pub directive: String,
    /// Rendered path; `internal` for internal views
    pub path: String,
    /// True resolved path, kept so internal views still sort where they belong
    #[serde(skip)]
    pub sort_path: String,
    pub filename: String,
    pub lineno: u32,
    /// Dotted model name, for path and mount records
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,
    #[serde(flatten)]
    pub view: Option<ViewInfo>,
}

impl ResolvedRecord {
    pub fn from_path(action: &PathAction, path: String, hierarchy: &TypeHierarchy) -> Self {
        Self {
            directive: "path".to_string(),
            sort_path: path.clone(),
            path,
            filename: action.code.file.clone(),
            lineno: action.code.line,
            model: Some(hierarchy.dotted_name(&action.model)),
            view: None,
        }
    }

    /// The model of a mount is the application it mounts
    pub fn from_mount(action: &MountAction, path: String) -> Self {
        Self {
            directive: "mount".to_string(),
            sort_path: path.clone(),
            path,
            filename: action.code.file.clone(),
            lineno: action.code.line,
            model: Some(action.app.to_string()),
            view: None,
        }
    }

    pub fn from_view(action: &ViewAction, path: String) -> Self {
        let rendered = if action.internal {
            INTERNAL_PATH.to_string()
        } else {
            path.clone()
        };
        Self {
            directive: action.directive.clone(),
            path: rendered,
            sort_path: path,
            filename: action.code.file.clone(),
            lineno: action.code.line,
            model: None,
            view: Some(ViewInfo::from_predicates(&action.predicates, action.internal)),
        }
    }

    pub fn view_name(&self) -> &str {
        self.view.as_ref().map(|v| v.view_name.as_str()).unwrap_or("")
    }

    /// Request method, or empty for records that are not views
    pub fn request_method(&self) -> &str {
        self.view
            .as_ref()
            .map(|v| v.request_method.as_str())
            .unwrap_or("")
    }

    pub fn extra_predicates(&self) -> bool {
        self.view.as_ref().is_some_and(|v| v.extra_predicates)
    }

    /// `file:line` of the declaration
    pub fn location(&self) -> String {
        format!("{}:{}", self.filename, self.lineno)
    }

    fn directive_rank(&self) -> (bool, &str) {
        directive_sort_key(&self.directive)
    }

    /// Full ordering key: true path, path/mount before views, view name, request
    /// method, file, line.
    pub fn canonical_cmp(&self, other: &Self) -> Ordering {
        (
            self.sort_path.as_str(),
            self.directive_rank(),
            self.view_name(),
            self.request_method(),
            self.filename.as_str(),
            self.lineno,
        )
            .cmp(&(
                other.sort_path.as_str(),
                other.directive_rank(),
                other.view_name(),
                other.request_method(),
                other.filename.as_str(),
                other.lineno,
            ))
    }

    /// Historical text-report key: rendered path, then path/mount before views
    pub fn rendered_path_cmp(&self, other: &Self) -> Ordering {
        (self.path.as_str(), self.directive_rank())
            .cmp(&(other.path.as_str(), other.directive_rank()))
    }
}

/// `path` and `mount` sort before every other directive, the rest alphabetically
pub fn directive_sort_key(directive: &str) -> (bool, &str) {
    let sort_after = directive != "path" && directive != "mount";
    (sort_after, directive)
}

/// Record ordering used for a report
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SortOrder {
    /// Total order keyed on the true path of every record
    #[default]
    Canonical,
    /// Order by rendered path only; internal views cluster under `internal`
    RenderedPath,
}

impl FromStr for SortOrder {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "canonical" => Ok(SortOrder::Canonical),
            "rendered-path" => Ok(SortOrder::RenderedPath),
            _ => Err(format!(
                "Invalid sort order: {} (must be 'canonical' or 'rendered-path')",
                s
            )),
        }
    }
}

/// Sort records in place. Both orders are stable.
pub fn sort_records(records: &mut [ResolvedRecord], order: SortOrder) {
    match order {
        SortOrder::Canonical => records.sort_by(ResolvedRecord::canonical_cmp),
        SortOrder::RenderedPath => records.sort_by(ResolvedRecord::rendered_path_cmp),
    }
}
