//! JSON report

use crate::record::ResolvedRecord;
use std::io::Write;

/// Pretty-printed array of records followed by a newline
pub fn write_json<W: Write>(
    writer: &mut W,
    records: &[ResolvedRecord],
) -> Result<(), serde_json::Error> {
    serde_json::to_writer_pretty(&mut *writer, records)?;
    writeln!(writer).map_err(serde_json::Error::io)?;
    Ok(())
}
