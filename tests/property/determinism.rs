//! Property-based tests for determinism guarantees

use pathtool::action::{AppId, CodeInfo, MemoryActionStore};
use pathtool::format::{write_report, CsvLayout, OutputFormat};
use pathtool::model::{ModelDecl, ModelId, TypeHierarchy};
use pathtool::record::ResolvedRecord;
use pathtool::tree::InfoBuilder;
use proptest::prelude::*;
use std::collections::BTreeMap;

const APPS: usize = 4;
const MODELS: [&str; 4] = ["Base", "Item", "Order", "Special"];

#[derive(Debug, Clone)]
enum Decl {
    Path { app: usize, path: String, model: usize, absorb: bool },
    Mount { app: usize, path: String, target: usize },
    View { app: usize, model: usize, name: String, internal: bool },
}

fn decl() -> impl Strategy<Value = Decl> {
    let path = "/?[a-z]{1,4}/?";
    prop_oneof![
        (0..APPS, path, 0..MODELS.len(), any::<bool>()).prop_map(|(app, path, model, absorb)| {
            Decl::Path { app, path, model, absorb }
        }),
        (0..APPS - 1, path, 1..APPS).prop_map(|(app, path, offset)| {
            // Mount only later apps so the tree stays acyclic
            let target = (app + offset).min(APPS - 1).max(app + 1);
            Decl::Mount { app, path, target }
        }),
        (0..APPS, 0..MODELS.len(), "(edit|info|)", any::<bool>()).prop_map(
            |(app, model, name, internal)| Decl::View { app, model, name, internal }
        ),
    ]
}

/// Item and Order derive from Base; Special derives from Item
fn hierarchy() -> TypeHierarchy {
    let mut decls = BTreeMap::new();
    decls.insert(ModelId::from("Base"), ModelDecl::default());
    for (name, base) in [("Item", "Base"), ("Order", "Base"), ("Special", "Item")] {
        decls.insert(
            ModelId::from(name),
            ModelDecl {
                module: "pkg".to_string(),
                bases: vec![ModelId::from(base)],
            },
        );
    }
    TypeHierarchy::build(decls).unwrap()
}

fn store<'a>(decls: impl Iterator<Item = (usize, &'a Decl)>) -> MemoryActionStore {
    let app_name = |index: usize| format!("App{}", index);
    let mut store = MemoryActionStore::new().app("App0");
    for (line, decl) in decls {
        let code = CodeInfo::new("app.py", line as u32);
        store = match decl {
            Decl::Path { app, path, model, absorb: false } => {
                store.path(&app_name(*app), path, MODELS[*model], code)
            }
            Decl::Path { app, path, model, absorb: true } => {
                store.absorb_path(&app_name(*app), path, MODELS[*model], code)
            }
            Decl::Mount { app, path, target } => {
                store.mount(&app_name(*app), path, &app_name(*target), code)
            }
            Decl::View { app, model, name, internal } => {
                let predicates: Vec<(&str, &str)> = if name.is_empty() {
                    Vec::new()
                } else {
                    vec![("name", name.as_str())]
                };
                store.view_action(
                    &app_name(*app),
                    "view",
                    MODELS[*model],
                    &predicates,
                    *internal,
                    code,
                )
            }
        };
    }
    store
}

fn resolve(store: &MemoryActionStore, hierarchy: &TypeHierarchy) -> Vec<ResolvedRecord> {
    InfoBuilder::new(store, hierarchy)
        .build(&AppId::from("App0"))
        .unwrap()
}

fn csv(records: &[ResolvedRecord]) -> Vec<u8> {
    let mut out = Vec::new();
    write_report(&mut out, records, OutputFormat::Csv, CsvLayout::Full).unwrap();
    out
}

proptest! {
    #[test]
    fn report_is_independent_of_declaration_order(
        decls in prop::collection::vec(decl(), 0..24),
    ) {
        let hierarchy = hierarchy();
        let forward = store(decls.iter().enumerate());
        let backward = store(decls.iter().enumerate().rev());

        let forward_records = resolve(&forward, &hierarchy);
        let backward_records = resolve(&backward, &hierarchy);
        prop_assert_eq!(csv(&forward_records), csv(&backward_records));
    }

    #[test]
    fn repeated_resolution_is_byte_identical(
        decls in prop::collection::vec(decl(), 0..24),
    ) {
        let hierarchy = hierarchy();
        let store = store(decls.iter().enumerate());
        let first = csv(&resolve(&store, &hierarchy));
        let second = csv(&resolve(&store, &hierarchy));
        prop_assert_eq!(first, second);
    }

    #[test]
    fn internal_views_sort_by_their_true_path(
        decls in prop::collection::vec(decl(), 0..24),
    ) {
        let hierarchy = hierarchy();
        let records = resolve(&store(decls.iter().enumerate()), &hierarchy);
        for record in &records {
            let internal = record.view.as_ref().is_some_and(|v| v.internal);
            if internal {
                prop_assert_eq!(record.path.as_str(), "internal");
            } else {
                prop_assert_eq!(&record.path, &record.sort_path);
            }
        }
        for pair in records.windows(2) {
            prop_assert!(pair[0].sort_path <= pair[1].sort_path);
        }
    }
}
