//! benchreport - Benchmark Result Reporting
//!
//! This library turns the results file of an algorithm benchmarking run into
//! per-algorithm summary tables and comparison charts.
//!
//! # Features
//!
//! - Tolerant numeric coercion: timeouts and malformed cells become missing
//!   values instead of aborting the run
//! - Mean and sample standard deviation per algorithm
//! - Bar charts of means and box plots of distributions (PNG)
//! - `Algorithm,mean,std` summary tables (CSV)
//!
//! # Architecture
//!
//! The application is a single linear pipeline:
//! - **Analysis**: loading, coercion and aggregation (pure, no I/O beyond reading)
//! - **Render**: charts behind the `ChartRenderer` trait, summary CSV files
//! - **Services**: the pipeline wiring everything together
//! - **Models**: result rows, summaries and the output manifest

pub mod analysis;
pub mod config;
pub mod constants;
pub mod error;
pub mod models;
pub mod render;
pub mod services;
pub mod utils;

// Re-export commonly used types
pub use config::Config;
pub use error::{ReportError, ReportResult};
pub use services::ReportService;
