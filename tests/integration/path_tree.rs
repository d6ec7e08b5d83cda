//! Integration tests for path tree reconstruction across mounts

use super::test_utils::{code, owned, pairs, resolve};
use pathtool::action::{AppId, MemoryActionStore};
use pathtool::error::ResolveError;
use pathtool::model::TypeHierarchy;
use pathtool::tree::{InfoBuilder, PathWalk};

#[test]
fn test_mount_prefixes_nested_paths() {
    let store = MemoryActionStore::new()
        .mount("App", "api/", "Api", code(1))
        .path("Api", "widgets", "Widget", code(2));
    let records = resolve(&store, &TypeHierarchy::default(), "App");
    assert_eq!(
        pairs(&records),
        owned(&[("/api", "mount"), ("/api/widgets", "path")])
    );
}

#[test]
fn test_root_path_resolves_to_empty_string() {
    let store = MemoryActionStore::new()
        .path("App", "/", "Root", code(1))
        .path("App", "/about/", "About", code(2));
    let records = resolve(&store, &TypeHierarchy::default(), "App");
    assert_eq!(pairs(&records), owned(&[("", "path"), ("/about", "path")]));
}

#[test]
fn test_root_mount_keeps_single_separators() {
    let store = MemoryActionStore::new()
        .mount("App", "/", "Site", code(1))
        .path("Site", "/pages/", "Page", code(2));
    let records = resolve(&store, &TypeHierarchy::default(), "App");
    assert_eq!(pairs(&records), owned(&[("", "mount"), ("/pages", "path")]));
}

#[test]
fn test_absorb_paths_end_in_marker() {
    let store = MemoryActionStore::new()
        .absorb_path("App", "files", "File", code(1))
        .mount("App", "docs", "Docs", code(2))
        .absorb_path("Docs", "/", "Doc", code(3));
    let records = resolve(&store, &TypeHierarchy::default(), "App");
    assert_eq!(
        pairs(&records),
        owned(&[
            ("/docs", "mount"),
            ("/docs/...", "path"),
            ("/files/...", "path")
        ])
    );
}

#[test]
fn test_walk_is_preorder_through_nested_mounts() {
    let store = MemoryActionStore::new()
        .mount("App", "a", "A", code(1))
        .path("App", "z", "Z", code(2))
        .mount("A", "b", "B", code(3))
        .path("A", "x", "X", code(4))
        .path("B", "y", "Y", code(5));

    let walked: Vec<String> = PathWalk::new(&store, &AppId::from("App"), "")
        .unwrap()
        .map(|resolved| resolved.unwrap().path)
        .collect();
    assert_eq!(walked, vec!["/a", "/a/b", "/a/b/y", "/a/x", "/z"]);
}

#[test]
fn test_same_app_mounted_twice_is_listed_under_both_prefixes() {
    let store = MemoryActionStore::new()
        .mount("App", "v1", "Api", code(1))
        .mount("App", "v2", "Api", code(2))
        .path("Api", "status", "Status", code(3));
    let records = resolve(&store, &TypeHierarchy::default(), "App");
    let paths: Vec<&str> = records.iter().map(|r| r.path.as_str()).collect();
    assert_eq!(paths, vec!["/v1", "/v1/status", "/v2", "/v2/status"]);
}

#[test]
fn test_app_without_paths_yields_nothing() {
    let store = MemoryActionStore::new().app("Empty");
    let records = resolve(&store, &TypeHierarchy::default(), "Empty");
    assert!(records.is_empty());
}

#[test]
fn test_unknown_app_is_resolution_error() {
    let store = MemoryActionStore::new().path("App", "foo", "A", code(1));
    let hierarchy = TypeHierarchy::default();
    let err = InfoBuilder::new(&store, &hierarchy)
        .build(&AppId::from("Nope"))
        .unwrap_err();
    assert_eq!(err, ResolveError::UnknownApp(AppId::from("Nope")));
}

#[test]
fn test_mount_cycle_in_store_is_reported() {
    let store = MemoryActionStore::new()
        .mount("App", "sub", "Sub", code(1))
        .mount("Sub", "back", "App", code(2));
    let hierarchy = TypeHierarchy::default();
    let err = InfoBuilder::new(&store, &hierarchy)
        .build(&AppId::from("App"))
        .unwrap_err();
    assert_eq!(
        err,
        ResolveError::MountCycle {
            app: AppId::from("App")
        }
    );
}
