//! Terminal table report

use crate::record::ResolvedRecord;
use comfy_table::Table;

pub fn format_table(records: &[ResolvedRecord]) -> String {
    let mut table = Table::new();
    table.load_preset(comfy_table::presets::UTF8_FULL);
    table.set_header(vec!["Path", "Directive", "Location", "Model", "View", "Method"]);
    for record in records {
        table.add_row(vec![
            record.path.clone(),
            record.directive.clone(),
            record.location(),
            record.model.clone().unwrap_or_else(|| "-".to_string()),
            record.view_name().to_string(),
            record.request_method().to_string(),
        ]);
    }
    table.to_string()
}
