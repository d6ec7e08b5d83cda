//! CSV report

use crate::record::ResolvedRecord;
use serde::{Deserialize, Serialize};
use std::io::Write;
use std::str::FromStr;

/// Columns of the full layout, in order
pub const FULL_FIELDS: [&str; 8] = [
    "path",
    "directive",
    "filename",
    "lineno",
    "model",
    "view_name",
    "request_method",
    "extra_predicates",
];

/// Columns of the minimal layout, in order
pub const MINIMAL_FIELDS: [&str; 6] = [
    "path",
    "directive",
    "filename",
    "lineno",
    "view_name",
    "request_method",
];

/// Column set written to CSV
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CsvLayout {
    #[default]
    Full,
    /// Without `model` and `extra_predicates`
    Minimal,
}

impl CsvLayout {
    pub fn fields(self) -> &'static [&'static str] {
        match self {
            CsvLayout::Full => &FULL_FIELDS,
            CsvLayout::Minimal => &MINIMAL_FIELDS,
        }
    }
}

impl FromStr for CsvLayout {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "full" => Ok(CsvLayout::Full),
            "minimal" => Ok(CsvLayout::Minimal),
            _ => Err(format!(
                "Invalid CSV layout: {} (must be 'full' or 'minimal')",
                s
            )),
        }
    }
}

fn field(record: &ResolvedRecord, name: &str) -> String {
    match name {
        "path" => record.path.clone(),
        "directive" => record.directive.clone(),
        "filename" => record.filename.clone(),
        "lineno" => record.lineno.to_string(),
        "model" => record.model.clone().unwrap_or_default(),
        "view_name" => record.view_name().to_string(),
        "request_method" => record.request_method().to_string(),
        "extra_predicates" if record.extra_predicates() => "y".to_string(),
        _ => String::new(),
    }
}

/// Write the header row followed by one row per record
pub fn write_csv<W: Write>(
    writer: W,
    records: &[ResolvedRecord],
    layout: CsvLayout,
) -> Result<(), csv::Error> {
    let fields = layout.fields();
    let mut wtr = csv::Writer::from_writer(writer);

    wtr.write_record(fields)?;
    for record in records {
        wtr.write_record(fields.iter().map(|name| field(record, name)))?;
    }

    wtr.flush()?;
    Ok(())
}
