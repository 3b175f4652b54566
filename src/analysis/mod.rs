//! Result processing
//!
//! The data half of a report run:
//!
//! 1. **Loader** (`loader.rs`): reads the delimited results file and checks
//!    that the required columns exist.
//! 2. **Coercer** (`coerce.rs`): turns time cells into numbers, recording
//!    timeouts and malformed cells as missing values.
//! 3. **Metrics** (`metrics.rs`): groups rows by algorithm and computes
//!    mean/standard deviation and per-algorithm distributions.

pub mod coerce;
pub mod loader;
pub mod metrics;

pub use coerce::{coerce_table, parse_numeric_or_missing};
pub use loader::load_results;
pub use metrics::{aggregate, distribution, summarize};
