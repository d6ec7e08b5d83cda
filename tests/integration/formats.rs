//! Integration tests for report rendering

use super::test_utils::{code, resolve, SHOP_MANIFEST};
use pathtool::action::MemoryActionStore;
use pathtool::format::{write_report, CsvLayout, OutputFormat};
use pathtool::manifest::Manifest;
use pathtool::model::TypeHierarchy;
use pathtool::record::ResolvedRecord;

fn item_records() -> Vec<ResolvedRecord> {
    let store = MemoryActionStore::new()
        .path("App", "/items", "Item", code(1))
        .view(
            "App",
            "Item",
            &[("name", "edit"), ("request_method", "POST")],
            code(2),
        );
    resolve(&store, &TypeHierarchy::default(), "App")
}

fn render(records: &[ResolvedRecord], format: OutputFormat, layout: CsvLayout) -> String {
    let mut out = Vec::new();
    write_report(&mut out, records, format, layout).unwrap();
    String::from_utf8(out).unwrap()
}

#[test]
fn test_text_shows_predicates_for_views() {
    let text = render(&item_records(), OutputFormat::Text, CsvLayout::Full);
    let predicates = "name=edit,request_method=POST";
    let expected = format!(
        "{:<width$} path app.py:1\n{} view app.py:2\n",
        "/items",
        predicates,
        width = predicates.len()
    );
    assert_eq!(text, expected);
}

#[test]
fn test_csv_full_layout() {
    let csv = render(&item_records(), OutputFormat::Csv, CsvLayout::Full);
    assert_eq!(
        csv,
        "path,directive,filename,lineno,model,view_name,request_method,extra_predicates\n\
         /items,path,app.py,1,Item,,,\n\
         /items/+edit,view,app.py,2,,edit,POST,\n"
    );
}

#[test]
fn test_csv_minimal_layout() {
    let csv = render(&item_records(), OutputFormat::Csv, CsvLayout::Minimal);
    assert_eq!(
        csv,
        "path,directive,filename,lineno,view_name,request_method\n\
         /items,path,app.py,1,,\n\
         /items/+edit,view,app.py,2,edit,POST\n"
    );
}

#[test]
fn test_csv_header_without_records() {
    for layout in [CsvLayout::Full, CsvLayout::Minimal] {
        let csv = render(&[], OutputFormat::Csv, layout);
        assert_eq!(csv, format!("{}\n", layout.fields().join(",")));
    }
}

#[test]
fn test_csv_quotes_paths_with_commas() {
    let store = MemoryActionStore::new().path("App", "a,b", "A", code(1));
    let records = resolve(&store, &TypeHierarchy::default(), "App");
    let csv = render(&records, OutputFormat::Csv, CsvLayout::Minimal);
    assert!(csv.lines().nth(1).unwrap().starts_with("\"/a,b\",path"));
}

#[test]
fn test_json_omits_sort_path_and_flattens_views() {
    let registry = Manifest::from_toml_str(SHOP_MANIFEST)
        .unwrap()
        .into_registry("routes.toml")
        .unwrap();
    let records = resolve(&registry.store, &registry.hierarchy, "Shop");
    let json = render(&records, OutputFormat::Json, CsvLayout::Full);
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    let rows = value.as_array().unwrap();
    assert_eq!(rows.len(), records.len());

    assert_eq!(rows[0]["directive"], "path");
    assert_eq!(rows[0]["model"], "shop.models.Base");
    assert!(rows[0].get("sort_path").is_none());
    assert!(rows[0].get("view_name").is_none());

    let internal = rows.iter().find(|row| row["path"] == "internal").unwrap();
    assert_eq!(internal["view_name"], "audit");
    assert_eq!(internal["internal"], true);
    assert_eq!(internal["extra_predicates"], true);
    assert_eq!(internal["predicates"]["permission"], "Admin");
    assert_eq!(internal["filename"], "admin/views.py");
}

#[test]
fn test_table_lists_every_record() {
    let table = render(&item_records(), OutputFormat::Table, CsvLayout::Full);
    assert!(table.contains("Path"));
    assert!(table.contains("/items/+edit"));
    assert!(table.contains("app.py:2"));
    assert!(table.contains("POST"));
}

#[test]
fn test_empty_report_text_is_empty() {
    assert_eq!(render(&[], OutputFormat::Text, CsvLayout::Full), "");
}
