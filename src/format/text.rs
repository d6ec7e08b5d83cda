//! Aligned plain-text report
//!
//! Path and mount records show their path in the first column; view records show their
//! predicates there instead. Columns are padded to the widest value across all records.

use crate::record::ResolvedRecord;
use std::io::{self, Write};

/// Render the report lines, without line terminators
pub fn format_text_lines(records: &[ResolvedRecord]) -> Vec<String> {
    let predicates: Vec<String> = records
        .iter()
        .map(|r| r.view.as_ref().map(|v| v.predicates_string()).unwrap_or_default())
        .collect();

    let max_path = records.iter().map(|r| r.path.chars().count()).max().unwrap_or(0);
    let max_predicates = predicates.iter().map(|p| p.chars().count()).max().unwrap_or(0);
    let max_directive = records
        .iter()
        .map(|r| r.directive.chars().count())
        .max()
        .unwrap_or(0);
    let first_width = max_path.max(max_predicates);

    records
        .iter()
        .zip(&predicates)
        .map(|(record, predicates)| {
            let first = if record.view.is_some() {
                predicates.as_str()
            } else {
                record.path.as_str()
            };
            format!(
                "{:<first_width$} {:<max_directive$} {}",
                first,
                record.directive,
                record.location(),
            )
        })
        .collect()
}

/// Write one line per record
pub fn write_text<W: Write>(writer: &mut W, records: &[ResolvedRecord]) -> io::Result<()> {
    for line in format_text_lines(records) {
        writeln!(writer, "{}", line)?;
    }
    Ok(())
}
