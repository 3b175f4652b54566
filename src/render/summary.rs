//! Summary table persistence

use std::fs::File;
use std::path::Path;

use crate::constants::summary_columns;
use crate::error::{ReportError, ReportResult};
use crate::models::{Metric, SummaryRecord, SummaryTable};

/// Write `Algorithm,mean,std` rows to `path`, NaN as an empty field
pub fn write_summary(summary: &SummaryTable, path: &Path) -> ReportResult<()> {
    let file = File::create(path).map_err(|e| ReportError::write(path, e))?;
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(file);

    // Header is written explicitly so an empty table still has one
    writer
        .write_record([summary_columns::ALGORITHM, summary_columns::MEAN, summary_columns::STD])
        .map_err(|e| ReportError::write(path, e))?;

    for row in &summary.rows {
        writer
            .serialize(SummaryRecord::from(row))
            .map_err(|e| ReportError::write(path, e))?;
    }

    writer.flush().map_err(|e| ReportError::write(path, e))?;

    tracing::info!(
        column = summary.metric.column(),
        rows = summary.rows.len(),
        path = %path.display(),
        "Wrote summary table"
    );
    Ok(())
}

/// Read a summary table written by [`write_summary`]
pub fn read_summary(path: &Path, metric: Metric) -> ReportResult<SummaryTable> {
    let file = File::open(path).map_err(|e| ReportError::load(path, e))?;
    let mut reader = csv::Reader::from_reader(file);

    let rows = reader
        .deserialize::<SummaryRecord>()
        .map(|record| {
            record
                .map(SummaryRecord::into_row)
                .map_err(|e| ReportError::load(path, e))
        })
        .collect::<ReportResult<Vec<_>>>()?;

    Ok(SummaryTable { metric, rows })
}
