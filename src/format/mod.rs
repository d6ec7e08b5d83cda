//! Report Formatters
//!
//! Render an ordered record list as aligned text, CSV, JSON or a terminal table.

pub mod csv;
pub mod json;
pub mod table;
pub mod text;

use crate::error::ApiError;
use crate::record::ResolvedRecord;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::io::Write;
use std::str::FromStr;

pub use self::csv::CsvLayout;

/// Output encoding of a report
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    Text,
    #[default]
    Csv,
    Json,
    Table,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "text" => Ok(OutputFormat::Text),
            "csv" => Ok(OutputFormat::Csv),
            "json" => Ok(OutputFormat::Json),
            "table" => Ok(OutputFormat::Table),
            _ => Err(format!(
                "Invalid output format: {} (must be 'text', 'csv', 'json' or 'table')",
                s
            )),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            OutputFormat::Text => "text",
            OutputFormat::Csv => "csv",
            OutputFormat::Json => "json",
            OutputFormat::Table => "table",
        };
        f.write_str(name)
    }
}

/// Write `records` to `writer` in the requested format
pub fn write_report<W: Write>(
    writer: &mut W,
    records: &[ResolvedRecord],
    format: OutputFormat,
    layout: CsvLayout,
) -> Result<(), ApiError> {
    match format {
        OutputFormat::Text => text::write_text(writer, records)?,
        OutputFormat::Csv => self::csv::write_csv(&mut *writer, records, layout)?,
        OutputFormat::Json => json::write_json(writer, records)?,
        OutputFormat::Table => {
            if !records.is_empty() {
                writeln!(writer, "{}", table::format_table(records))?;
            }
        }
    }
    writer.flush()?;
    Ok(())
}
