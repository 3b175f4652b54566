//! Application-wide constants
//!
//! Default locations, input/output names and chart geometry.
//! Constants are grouped by their purpose for better organization.

// =============================================================================
// CONFIGURATION DEFAULTS
// =============================================================================

/// Default input file, relative to the working directory
pub const DEFAULT_INPUT_PATH: &str = "results.csv";

/// Default destination directory for charts and summaries
pub const DEFAULT_OUTPUT_DIR: &str = ".";

/// Default field delimiter of the input file
pub const DEFAULT_DELIMITER: u8 = b',';

/// Default tracing filter
pub const DEFAULT_LOG_LEVEL: &str = "info";

// =============================================================================
// INPUT SCHEMA
// =============================================================================

/// Required input columns
pub mod columns {
    pub const ALGORITHM: &str = "Algorithm";
    pub const STABILIZATION_TIME: &str = "StabilizationTime";
    pub const TOTAL_TIME: &str = "TotalTime";
}

/// Cell values recorded as missing without being reported as malformed.
/// Matched case-insensitively after trimming.
pub const MISSING_SENTINELS: &[&str] = &["", "timeout", "timed out", "na", "n/a", "nan", "null", "none"];

// =============================================================================
// OUTPUT FILES
// =============================================================================

/// Output file names, written under the configured output directory
pub mod files {
    pub const STABILIZATION_AVG_CHART: &str = "stabilization_time_avg.png";
    pub const TOTAL_AVG_CHART: &str = "total_time_avg.png";
    pub const STABILIZATION_DIST_CHART: &str = "stabilization_time_dist.png";
    pub const TOTAL_DIST_CHART: &str = "total_time_dist.png";
    pub const STABILIZATION_SUMMARY: &str = "summary_stabilization.csv";
    pub const TOTAL_SUMMARY: &str = "summary_total.csv";
}

/// Summary table header
pub mod summary_columns {
    pub const ALGORITHM: &str = "Algorithm";
    pub const MEAN: &str = "mean";
    pub const STD: &str = "std";
}

// =============================================================================
// CHART DEFAULTS
// =============================================================================

/// Default chart width in pixels (8in at 100dpi)
pub const DEFAULT_CHART_WIDTH: u32 = 800;

/// Default chart height in pixels (6in at 100dpi)
pub const DEFAULT_CHART_HEIGHT: u32 = 600;

/// Font family used for all chart text
pub const CHART_FONT_FAMILY: &str = "sans-serif";

/// Caption font size
pub const CHART_TITLE_SIZE: u32 = 20;

/// Axis description font size
pub const CHART_AXIS_DESC_SIZE: u32 = 15;

/// Outlier marker radius in pixels
pub const OUTLIER_RADIUS: u32 = 3;

/// Fonts probed when `REPORT_FONT_PATH` is not set
pub const FONT_CANDIDATES: &[&str] = &[
    "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
    "/usr/share/fonts/dejavu/DejaVuSans.ttf",
    "/usr/share/fonts/TTF/DejaVuSans.ttf",
    "/usr/share/fonts/truetype/liberation/LiberationSans-Regular.ttf",
    "/usr/share/fonts/liberation/LiberationSans-Regular.ttf",
    "/usr/share/fonts/truetype/freefont/FreeSans.ttf",
    "/usr/share/fonts/noto/NotoSans-Regular.ttf",
    "/usr/share/fonts/truetype/noto/NotoSans-Regular.ttf",
    "/System/Library/Fonts/Supplemental/Arial.ttf",
    "/Library/Fonts/Arial.ttf",
    "C:\\Windows\\Fonts\\arial.ttf",
];
