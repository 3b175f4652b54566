//! Per-algorithm summary models

use serde::{Deserialize, Serialize};

use crate::constants::{columns, files};
use crate::models::ResultRow;

/// A numeric column that gets summarized and charted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Metric {
    Stabilization,
    Total,
}

impl Metric {
    pub const ALL: [Metric; 2] = [Metric::Stabilization, Metric::Total];

    /// Input column carrying this metric
    pub fn column(self) -> &'static str {
        match self {
            Self::Stabilization => columns::STABILIZATION_TIME,
            Self::Total => columns::TOTAL_TIME,
        }
    }

    /// Coerced value of this metric for a row
    pub fn value(self, row: &ResultRow) -> Option<f64> {
        match self {
            Self::Stabilization => row.stabilization_time_numeric,
            Self::Total => row.total_time,
        }
    }

    pub fn summary_file(self) -> &'static str {
        match self {
            Self::Stabilization => files::STABILIZATION_SUMMARY,
            Self::Total => files::TOTAL_SUMMARY,
        }
    }

    pub fn mean_chart_file(self) -> &'static str {
        match self {
            Self::Stabilization => files::STABILIZATION_AVG_CHART,
            Self::Total => files::TOTAL_AVG_CHART,
        }
    }

    pub fn distribution_chart_file(self) -> &'static str {
        match self {
            Self::Stabilization => files::STABILIZATION_DIST_CHART,
            Self::Total => files::TOTAL_DIST_CHART,
        }
    }

    pub fn mean_chart_title(self) -> &'static str {
        match self {
            Self::Stabilization => "Mean Stabilization Time by Algorithm (Excluding Timeouts)",
            Self::Total => "Mean Total Execution Time by Algorithm",
        }
    }

    pub fn distribution_chart_title(self) -> &'static str {
        match self {
            Self::Stabilization => {
                "Stabilization Time Distribution by Algorithm (Excluding Timeouts)"
            }
            Self::Total => "Total Execution Time Distribution by Algorithm",
        }
    }

    pub fn mean_axis_label(self) -> &'static str {
        "Mean Time (s)"
    }

    pub fn distribution_axis_label(self) -> &'static str {
        match self {
            Self::Stabilization => "Stabilization Time (s)",
            Self::Total => "Total Time (s)",
        }
    }
}

impl std::fmt::Display for Metric {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Stabilization => write!(f, "stabilization"),
            Self::Total => write!(f, "total"),
        }
    }
}

/// Aggregate of one algorithm's values for one metric
#[derive(Debug, Clone, PartialEq)]
pub struct SummaryRow {
    pub algorithm: String,
    /// Arithmetic mean of non-missing values, NaN if there are none
    pub mean: f64,
    /// Sample standard deviation (n - 1), NaN with fewer than two values
    pub std: f64,
    /// Number of non-missing values
    pub samples: usize,
    /// Number of rows whose value was missing
    pub missing: usize,
}

/// Ordered summary of one metric, one row per algorithm
#[derive(Debug, Clone, PartialEq)]
pub struct SummaryTable {
    pub metric: Metric,
    pub rows: Vec<SummaryRow>,
}

impl SummaryTable {
    pub fn get(&self, algorithm: &str) -> Option<&SummaryRow> {
        self.rows.iter().find(|r| r.algorithm == algorithm)
    }

    pub fn algorithms(&self) -> impl Iterator<Item = &str> {
        self.rows.iter().map(|r| r.algorithm.as_str())
    }
}

/// On-disk form of a summary row. NaN is stored as an empty field.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SummaryRecord {
    #[serde(rename = "Algorithm")]
    pub algorithm: String,
    pub mean: Option<f64>,
    pub std: Option<f64>,
}

impl From<&SummaryRow> for SummaryRecord {
    fn from(row: &SummaryRow) -> Self {
        Self {
            algorithm: row.algorithm.clone(),
            mean: Some(row.mean).filter(|v| !v.is_nan()),
            std: Some(row.std).filter(|v| !v.is_nan()),
        }
    }
}

impl SummaryRecord {
    /// Back to an in-memory row; sample counts are not persisted
    pub fn into_row(self) -> SummaryRow {
        SummaryRow {
            algorithm: self.algorithm,
            mean: self.mean.unwrap_or(f64::NAN),
            std: self.std.unwrap_or(f64::NAN),
            samples: 0,
            missing: 0,
        }
    }
}
