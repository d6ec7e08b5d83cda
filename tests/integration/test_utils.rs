//! Shared fixtures for integration tests

use pathtool::action::{AppId, CodeInfo, MemoryActionStore};
use pathtool::model::{ModelDecl, ModelId, TypeHierarchy};
use pathtool::record::ResolvedRecord;
use pathtool::tree::{InfoBuilder, ResolveOptions};
use std::collections::BTreeMap;
use std::path::Path;

pub fn code(line: u32) -> CodeInfo {
    CodeInfo::new("app.py", line)
}

/// Hierarchy from `(name, module, bases)` triples; bases are comma separated
pub fn hierarchy(models: &[(&str, &str, &str)]) -> TypeHierarchy {
    let decls: BTreeMap<ModelId, ModelDecl> = models
        .iter()
        .map(|(name, module, bases)| {
            (
                ModelId::from(*name),
                ModelDecl {
                    module: module.to_string(),
                    bases: bases
                        .split(',')
                        .map(str::trim)
                        .filter(|b| !b.is_empty())
                        .map(ModelId::from)
                        .collect(),
                },
            )
        })
        .collect();
    TypeHierarchy::build(decls).unwrap()
}

pub fn resolve(store: &MemoryActionStore, hierarchy: &TypeHierarchy, root: &str) -> Vec<ResolvedRecord> {
    resolve_with(store, hierarchy, root, ResolveOptions::default())
}

pub fn resolve_with(
    store: &MemoryActionStore,
    hierarchy: &TypeHierarchy,
    root: &str,
    options: ResolveOptions,
) -> Vec<ResolvedRecord> {
    InfoBuilder::new(store, hierarchy)
        .with_options(options)
        .build(&AppId::from(root))
        .unwrap()
}

/// `(path, directive)` pairs of a report
pub fn pairs(records: &[ResolvedRecord]) -> Vec<(String, String)> {
    records
        .iter()
        .map(|r| (r.path.clone(), r.directive.clone()))
        .collect()
}

pub fn owned(pairs: &[(&str, &str)]) -> Vec<(String, String)> {
    pairs
        .iter()
        .map(|(a, b)| (a.to_string(), b.to_string()))
        .collect()
}

/// Manifest used by the file-based tests: a root app with a mounted admin app
pub const SHOP_MANIFEST: &str = r#"
root = "Shop"

[models.Base]
module = "shop.models"

[models.Item]
module = "shop.models"
bases = ["Base"]

[models.Order]
module = "shop.models"
bases = ["Base"]

[[apps.Shop.paths]]
path = "/"
model = "Base"
file = "shop/app.py"
line = 10

[[apps.Shop.paths]]
path = "/items/{id}"
model = "Item"
file = "shop/app.py"
line = 14

[[apps.Shop.mounts]]
path = "admin/"
app = "Admin"
file = "shop/app.py"
line = 20

[[apps.Shop.views]]
model = "Base"
file = "shop/views.py"
line = 3

[[apps.Shop.views]]
model = "Item"
directive = "json"
predicates = { name = "edit", request_method = "POST" }
file = "shop/views.py"
line = 8

[[apps.Admin.paths]]
path = "orders"
model = "Order"
absorb = true
file = "admin/app.py"
line = 5

[[apps.Admin.views]]
model = "Order"
predicates = { name = "audit", permission = "Admin" }
internal = true
file = "admin/views.py"
line = 12
"#;

pub fn write_manifest(dir: &Path, name: &str, contents: &str) -> std::path::PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, contents).unwrap();
    path
}
