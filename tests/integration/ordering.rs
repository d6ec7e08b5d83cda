//! Integration tests for the total record order

use super::test_utils::{code, owned, pairs, resolve, resolve_with, SHOP_MANIFEST};
use pathtool::action::{AppId, MemoryActionStore};
use pathtool::manifest::Manifest;
use pathtool::model::TypeHierarchy;
use pathtool::record::SortOrder;
use pathtool::tree::{InfoBuilder, ResolveOptions};
use pathtool::views::ViewScope;

#[test]
fn test_shop_manifest_canonical_order() {
    let registry = Manifest::from_toml_str(SHOP_MANIFEST)
        .unwrap()
        .into_registry("routes.toml")
        .unwrap();
    let records = resolve(&registry.store, &registry.hierarchy, "Shop");
    assert_eq!(
        pairs(&records),
        owned(&[
            ("", "path"),
            ("", "view"),
            ("/admin", "mount"),
            ("/admin/orders/...", "path"),
            ("/admin/orders/...", "view"),
            ("internal", "view"),
            ("/items/{id}", "path"),
            ("/items/{id}", "view"),
            ("/items/{id}/+edit", "json"),
        ])
    );
}

#[test]
fn test_rendered_path_order_groups_internal_views_last() {
    let registry = Manifest::from_toml_str(SHOP_MANIFEST)
        .unwrap()
        .into_registry("routes.toml")
        .unwrap();
    let records = resolve_with(
        &registry.store,
        &registry.hierarchy,
        "Shop",
        ResolveOptions {
            view_scope: ViewScope::Tree,
            sort: SortOrder::RenderedPath,
        },
    );
    let last = records.last().unwrap();
    assert_eq!(last.path, "internal");
    assert_eq!(last.sort_path, "/admin/orders/.../+audit");
}

#[test]
fn test_path_and_mount_sort_before_views_on_the_same_path() {
    let store = MemoryActionStore::new()
        .view("App", "A", &[], code(1))
        .view_action("App", "html", "A", &[], false, code(2))
        .path("App", "a", "A", code(3));
    let records = resolve(&store, &TypeHierarchy::default(), "App");
    assert_eq!(
        pairs(&records),
        owned(&[("/a", "path"), ("/a", "html"), ("/a", "view")])
    );
}

#[test]
fn test_ties_break_on_view_name_then_method_then_location() {
    let store = MemoryActionStore::new()
        .path("App", "a", "A", code(1))
        .view("App", "A", &[("request_method", "POST")], code(9))
        .view("App", "A", &[("request_method", "DELETE")], code(8))
        .view("App", "A", &[], code(7))
        .view("App", "A", &[], code(6));
    let records = resolve(&store, &TypeHierarchy::default(), "App");
    let keys: Vec<(&str, u32)> = records
        .iter()
        .skip(1)
        .map(|r| (r.request_method(), r.lineno))
        .collect();
    assert_eq!(
        keys,
        vec![("DELETE", 8), ("GET", 6), ("GET", 7), ("POST", 9)]
    );
}

#[test]
fn test_declaration_order_does_not_change_the_report() {
    let forward = MemoryActionStore::new()
        .path("App", "b", "B", code(1))
        .path("App", "a", "A", code(2))
        .mount("App", "m", "Sub", code(3))
        .path("Sub", "x", "A", code(4))
        .view("App", "A", &[("name", "v")], code(5));
    let reversed = MemoryActionStore::new()
        .view("App", "A", &[("name", "v")], code(5))
        .path("Sub", "x", "A", code(4))
        .mount("App", "m", "Sub", code(3))
        .path("App", "a", "A", code(2))
        .path("App", "b", "B", code(1));
    let hierarchy = TypeHierarchy::default();
    assert_eq!(
        resolve(&forward, &hierarchy, "App"),
        resolve(&reversed, &hierarchy, "App")
    );
}

#[test]
fn test_repeated_runs_are_identical() {
    let registry = Manifest::from_toml_str(SHOP_MANIFEST)
        .unwrap()
        .into_registry("routes.toml")
        .unwrap();
    let builder = InfoBuilder::new(&registry.store, &registry.hierarchy);
    let root = AppId::from("Shop");
    let first = builder.build(&root).unwrap();
    for _ in 0..5 {
        assert_eq!(builder.build(&root).unwrap(), first);
    }
}
