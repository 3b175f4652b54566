//! Results file loading

use std::fs::File;
use std::path::Path;

use crate::constants::columns;
use crate::error::{ReportError, ReportResult};
use crate::models::RawResultRow;

/// Read the delimited results file at `path`.
///
/// Only the three required columns are kept; any others are ignored. A
/// missing required column is a schema error, while an unreadable file or a
/// row with the wrong number of fields is a load error.
pub fn load_results(path: &Path, delimiter: u8) -> ReportResult<Vec<RawResultRow>> {
    let file = File::open(path).map_err(|e| ReportError::load(path, e))?;

    let mut reader = csv::ReaderBuilder::new()
        .delimiter(delimiter)
        .trim(csv::Trim::Headers)
        .from_reader(file);

    let headers = reader
        .headers()
        .map_err(|e| ReportError::load(path, e))?
        .clone();

    let column_index = |name: &str| -> ReportResult<usize> {
        headers
            .iter()
            .position(|h| h == name)
            .ok_or_else(|| ReportError::schema(path, name))
    };

    let algorithm = column_index(columns::ALGORITHM)?;
    let stabilization = column_index(columns::STABILIZATION_TIME)?;
    let total = column_index(columns::TOTAL_TIME)?;

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record.map_err(|e| ReportError::load(path, e))?;
        let line = record.position().map(|p| p.line()).unwrap_or_default();

        rows.push(RawResultRow {
            line,
            algorithm: record[algorithm].to_string(),
            stabilization_time: record[stabilization].to_string(),
            total_time: record[total].to_string(),
        });
    }

    tracing::info!(path = %path.display(), rows = rows.len(), "Loaded benchmark results");

    Ok(rows)
}
