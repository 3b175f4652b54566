//! Artifact rendering
//!
//! Charts are drawn through the [`ChartRenderer`] trait so the pipeline can
//! be exercised without a drawing backend. Summary tables are plain CSV.

pub mod bitmap;
pub mod box_glyph;
pub mod font;
pub mod summary;

use std::path::Path;

use crate::error::ReportResult;
use crate::models::{Metric, SummaryTable};

pub use bitmap::BitmapRenderer;
pub use summary::{read_summary, write_summary};

/// Bar chart: one bar per algorithm
#[derive(Debug, Clone, PartialEq)]
pub struct BarChartSpec {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    /// `(algorithm, value)`; NaN values leave an empty slot
    pub bars: Vec<(String, f64)>,
}

impl BarChartSpec {
    /// Means of a summary table
    pub fn means(summary: &SummaryTable) -> Self {
        let metric = summary.metric;
        Self {
            title: metric.mean_chart_title().to_string(),
            x_label: "Algorithm".to_string(),
            y_label: metric.mean_axis_label().to_string(),
            bars: summary
                .rows
                .iter()
                .map(|r| (r.algorithm.clone(), r.mean))
                .collect(),
        }
    }
}

/// Box plot: one box per algorithm over its raw values
#[derive(Debug, Clone, PartialEq)]
pub struct BoxPlotSpec {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    /// `(algorithm, values)`; an empty value list keeps the slot without a box
    pub groups: Vec<(String, Vec<f64>)>,
}

impl BoxPlotSpec {
    pub fn distribution(metric: Metric, groups: Vec<(String, Vec<f64>)>) -> Self {
        Self {
            title: metric.distribution_chart_title().to_string(),
            x_label: "Algorithm".to_string(),
            y_label: metric.distribution_axis_label().to_string(),
            groups,
        }
    }
}

/// Draws charts to image files
#[cfg_attr(test, mockall::automock)]
pub trait ChartRenderer {
    fn render_bar_chart(&self, chart: &BarChartSpec, path: &Path) -> ReportResult<()>;

    fn render_box_plot(&self, chart: &BoxPlotSpec, path: &Path) -> ReportResult<()>;
}
