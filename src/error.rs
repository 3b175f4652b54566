//! Custom error types and handling
//!
//! Every failure that can stop a report run is a [`ReportError`]. Numeric
//! coercion problems are not errors: they become missing values in the table.

use std::fmt::Display;
use std::path::{Path, PathBuf};

use crate::config::ConfigError;

/// Application-wide error type
#[derive(Debug, thiserror::Error)]
pub enum ReportError {
    /// Input file missing, unreadable or structurally malformed
    #[error("Load error: {}: {message}", .path.display())]
    Load { path: PathBuf, message: String },

    /// A required input column is absent
    #[error("Schema error: {}: missing required column '{column}'", .path.display())]
    Schema { path: PathBuf, column: String },

    /// An output artifact could not be written
    #[error("Write error: {}: {message}", .path.display())]
    Write { path: PathBuf, message: String },

    #[error("Configuration error: {0}")]
    Configuration(#[from] ConfigError),
}

impl ReportError {
    pub fn load(path: &Path, err: impl Display) -> Self {
        Self::Load {
            path: path.to_path_buf(),
            message: err.to_string(),
        }
    }

    pub fn schema(path: &Path, column: &str) -> Self {
        Self::Schema {
            path: path.to_path_buf(),
            column: column.to_string(),
        }
    }

    pub fn write(path: &Path, err: impl Display) -> Self {
        Self::Write {
            path: path.to_path_buf(),
            message: err.to_string(),
        }
    }

    /// Get the error code for this error type
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::Load { .. } => "LOAD_ERROR",
            Self::Schema { .. } => "SCHEMA_ERROR",
            Self::Write { .. } => "WRITE_ERROR",
            Self::Configuration(_) => "CONFIGURATION_ERROR",
        }
    }
}

/// Result type alias using ReportError
pub type ReportResult<T> = Result<T, ReportError>;
