//! Numeric coercion of result cells
//!
//! A cell that does not hold a finite number becomes a missing value. Rows
//! are never dropped here, and coercion never fails.

use crate::constants::{MISSING_SENTINELS, columns};
use crate::models::{RawResultRow, ResultRow, ResultTable};

/// Classification of a single text cell
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CellValue {
    Number(f64),
    /// A known marker for "no value", such as `timeout`
    Sentinel,
    /// Anything else that is not a finite number
    Malformed,
}

impl CellValue {
    pub fn number(self) -> Option<f64> {
        match self {
            Self::Number(v) => Some(v),
            Self::Sentinel | Self::Malformed => None,
        }
    }
}

pub fn classify_cell(text: &str) -> CellValue {
    let trimmed = text.trim();
    if MISSING_SENTINELS
        .iter()
        .any(|s| s.eq_ignore_ascii_case(trimmed))
    {
        return CellValue::Sentinel;
    }

    match trimmed.parse::<f64>() {
        Ok(value) if value.is_finite() => CellValue::Number(value),
        _ => CellValue::Malformed,
    }
}

/// Parse a cell as a float, or `None` if it is missing or not numeric
pub fn parse_numeric_or_missing(text: &str) -> Option<f64> {
    classify_cell(text).number()
}

#[derive(Debug, Default)]
struct MissingCounts {
    sentinel: usize,
    malformed: usize,
}

impl MissingCounts {
    fn record(&mut self, value: CellValue) -> Option<f64> {
        match value {
            CellValue::Sentinel => self.sentinel += 1,
            CellValue::Malformed => self.malformed += 1,
            CellValue::Number(_) => {}
        }
        value.number()
    }
}

/// Coerce both time columns of every row.
///
/// The original stabilization text is retained next to its numeric value;
/// total time is replaced by its numeric form.
pub fn coerce_table(raw: Vec<RawResultRow>) -> ResultTable {
    let mut stabilization = MissingCounts::default();
    let mut total = MissingCounts::default();

    let rows = raw
        .into_iter()
        .map(|row| {
            let stabilization_value = classify_cell(&row.stabilization_time);
            let total_value = classify_cell(&row.total_time);

            if total_value == CellValue::Malformed {
                tracing::warn!(
                    line = row.line,
                    algorithm = %row.algorithm,
                    value = %row.total_time,
                    "Malformed {} value treated as missing",
                    columns::TOTAL_TIME
                );
            }

            ResultRow {
                line: row.line,
                algorithm: row.algorithm,
                stabilization_time_numeric: stabilization.record(stabilization_value),
                stabilization_time: row.stabilization_time,
                total_time: total.record(total_value),
            }
        })
        .collect::<Vec<_>>();

    tracing::info!(
        rows = rows.len(),
        timeouts = stabilization.sentinel,
        malformed = stabilization.malformed,
        "Coerced {}",
        columns::STABILIZATION_TIME
    );
    tracing::info!(
        rows = rows.len(),
        missing = total.sentinel,
        malformed = total.malformed,
        "Coerced {}",
        columns::TOTAL_TIME
    );

    ResultTable::new(rows)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(line: u64, algorithm: &str, stabilization: &str, total: &str) -> RawResultRow {
        RawResultRow {
            line,
            algorithm: algorithm.to_string(),
            stabilization_time: stabilization.to_string(),
            total_time: total.to_string(),
        }
    }

    #[test]
    fn test_parse_numbers() {
        assert_eq!(parse_numeric_or_missing("1.0"), Some(1.0));
        assert_eq!(parse_numeric_or_missing(" 2.5 "), Some(2.5));
        assert_eq!(parse_numeric_or_missing("-3"), Some(-3.0));
        assert_eq!(parse_numeric_or_missing("1e-3"), Some(0.001));
    }

    #[test]
    fn test_timeout_is_missing() {
        assert_eq!(parse_numeric_or_missing("timeout"), None);
        assert_eq!(parse_numeric_or_missing("TIMEOUT"), None);
        assert_eq!(classify_cell("Timeout"), CellValue::Sentinel);
    }

    #[test]
    fn test_empty_and_nan_are_sentinels() {
        assert_eq!(classify_cell(""), CellValue::Sentinel);
        assert_eq!(classify_cell("  "), CellValue::Sentinel);
        assert_eq!(classify_cell("NaN"), CellValue::Sentinel);
        assert_eq!(classify_cell("N/A"), CellValue::Sentinel);
    }

    #[test]
    fn test_garbage_and_infinity_are_malformed() {
        assert_eq!(classify_cell("fast"), CellValue::Malformed);
        assert_eq!(classify_cell("1.0s"), CellValue::Malformed);
        assert_eq!(classify_cell("inf"), CellValue::Malformed);
        assert_eq!(parse_numeric_or_missing("inf"), None);
    }

    #[test]
    fn test_rows_are_retained_with_original_text() {
        let table = coerce_table(vec![
            raw(2, "X", "1.0", "2.0"),
            raw(3, "X", "timeout", "3.0"),
            raw(4, "Y", "5.0", "oops"),
        ]);

        assert_eq!(table.len(), 3);
        assert_eq!(table.rows[1].stabilization_time, "timeout");
        assert_eq!(table.rows[1].stabilization_time_numeric, None);
        assert_eq!(table.rows[1].total_time, Some(3.0));
        assert_eq!(table.rows[2].total_time, None);
        assert_eq!(table.stabilization_missing(), 1);
        assert_eq!(table.total_missing(), 1);
    }
}
