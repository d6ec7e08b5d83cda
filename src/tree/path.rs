//! Path template normalization and joining

/// Suffix appended to paths that absorb the remaining URL segments
pub const ABSORB_SUFFIX: &str = "/...";

/// Strip a single leading and a single trailing `/` from a path template.
///
/// Only one slash is removed on each side so that deliberate empty segments survive.
pub fn normalize_path(template: &str) -> &str {
    let path = template.strip_prefix('/').unwrap_or(template);
    path.strip_suffix('/').unwrap_or(path)
}

/// Join a declared template onto the resolved path of its parent.
///
/// A template that normalizes to nothing (the root `/`) resolves to the base itself, so
/// the root of a tree is `""` and its children get exactly one separator.
pub fn join_path(base: &str, template: &str, absorb: bool) -> String {
    let normalized = normalize_path(template);
    let mut path = if normalized.is_empty() {
        base.to_string()
    } else {
        format!("{}/{}", base, normalized)
    };
    if absorb {
        path.push_str(ABSORB_SUFFIX);
    }
    path
}

/// Sub-path of a named view below its owning path
pub fn view_path(base: &str, name: &str) -> String {
    if name.is_empty() {
        base.to_string()
    } else {
        format!("{}/+{}", base, name)
    }
}
