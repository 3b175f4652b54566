//! Application configuration management
//!
//! Configuration is loaded once from environment variables (optionally via a
//! `.env` file) and passed explicitly into the report pipeline. Every value
//! has a default, so an empty environment reproduces the fixed-path behavior:
//! read `results.csv`, write into the working directory.

use std::env;
use std::path::PathBuf;
use std::str::FromStr;

use crate::constants::{
    DEFAULT_CHART_HEIGHT, DEFAULT_CHART_WIDTH, DEFAULT_DELIMITER, DEFAULT_INPUT_PATH,
    DEFAULT_LOG_LEVEL, DEFAULT_OUTPUT_DIR,
};

/// Main application configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Delimited results file to read
    pub input_path: PathBuf,
    /// Directory receiving charts and summary tables
    pub output_dir: PathBuf,
    /// Single-byte field delimiter
    pub delimiter: u8,
    /// Ordering of algorithms in summaries and charts
    pub group_order: GroupOrder,
    pub chart: ChartConfig,
    pub rust_log: String,
}

/// Chart rendering configuration
#[derive(Debug, Clone)]
pub struct ChartConfig {
    pub width: u32,
    pub height: u32,
    /// Font for chart text; system locations are probed when unset
    pub font_path: Option<PathBuf>,
}

/// How algorithm groups are ordered in output
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GroupOrder {
    /// Lexicographic by label
    #[default]
    Sorted,
    /// Order of first appearance in the input
    FirstSeen,
}

impl FromStr for GroupOrder {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "sorted" | "lexicographic" => Ok(Self::Sorted),
            "first-seen" | "first_seen" | "input" => Ok(Self::FirstSeen),
            _ => Err(ConfigError::InvalidValue("REPORT_GROUP_ORDER".to_string())),
        }
    }
}

impl Config {
    /// Build a configuration for the given paths with defaults elsewhere
    pub fn new(input_path: impl Into<PathBuf>, output_dir: impl Into<PathBuf>) -> Self {
        Self {
            input_path: input_path.into(),
            output_dir: output_dir.into(),
            delimiter: DEFAULT_DELIMITER,
            group_order: GroupOrder::default(),
            chart: ChartConfig::default(),
            rust_log: DEFAULT_LOG_LEVEL.to_string(),
        }
    }

    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        Ok(Self {
            input_path: PathBuf::from(
                env::var("REPORT_INPUT_PATH").unwrap_or_else(|_| DEFAULT_INPUT_PATH.to_string()),
            ),
            output_dir: PathBuf::from(
                env::var("REPORT_OUTPUT_DIR").unwrap_or_else(|_| DEFAULT_OUTPUT_DIR.to_string()),
            ),
            delimiter: match env::var("REPORT_DELIMITER") {
                Ok(value) => parse_delimiter(&value)?,
                Err(_) => DEFAULT_DELIMITER,
            },
            group_order: match env::var("REPORT_GROUP_ORDER") {
                Ok(value) => value.parse()?,
                Err(_) => GroupOrder::default(),
            },
            chart: ChartConfig::from_env()?,
            rust_log: env::var("RUST_LOG").unwrap_or_else(|_| DEFAULT_LOG_LEVEL.to_string()),
        })
    }
}

impl ChartConfig {
    fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            width: env::var("REPORT_CHART_WIDTH")
                .unwrap_or_else(|_| DEFAULT_CHART_WIDTH.to_string())
                .parse()
                .map_err(|_| ConfigError::InvalidValue("REPORT_CHART_WIDTH".to_string()))?,
            height: env::var("REPORT_CHART_HEIGHT")
                .unwrap_or_else(|_| DEFAULT_CHART_HEIGHT.to_string())
                .parse()
                .map_err(|_| ConfigError::InvalidValue("REPORT_CHART_HEIGHT".to_string()))?,
            font_path: env::var("REPORT_FONT_PATH").ok().map(PathBuf::from),
        })
    }
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_CHART_WIDTH,
            height: DEFAULT_CHART_HEIGHT,
            font_path: None,
        }
    }
}

/// Accepts a single ASCII character, or `\t` / `tab` for tab-separated input
fn parse_delimiter(value: &str) -> Result<u8, ConfigError> {
    match value {
        "\\t" | "tab" | "\t" => Ok(b'\t'),
        v if v.len() == 1 && v.is_ascii() => Ok(v.as_bytes()[0]),
        _ => Err(ConfigError::InvalidValue("REPORT_DELIMITER".to_string())),
    }
}

/// Configuration loading errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for environment variable: {0}")]
    InvalidValue(String),
}

#[cfg(test)]
#[allow(unsafe_code)]
mod tests {
    use super::*;
    use serial_test::serial;

    const VARS: &[&str] = &[
        "REPORT_INPUT_PATH",
        "REPORT_OUTPUT_DIR",
        "REPORT_DELIMITER",
        "REPORT_GROUP_ORDER",
        "REPORT_CHART_WIDTH",
        "REPORT_CHART_HEIGHT",
        "REPORT_FONT_PATH",
        "RUST_LOG",
    ];

    fn clear_env() {
        for var in VARS {
            unsafe {
                env::remove_var(var);
            }
        }
    }

    fn set_env(var: &str, value: &str) {
        unsafe {
            env::set_var(var, value);
        }
    }

    #[test]
    #[serial]
    fn test_from_env_defaults() {
        clear_env();

        let config = Config::from_env().unwrap();

        assert_eq!(config.input_path, PathBuf::from("results.csv"));
        assert_eq!(config.output_dir, PathBuf::from("."));
        assert_eq!(config.delimiter, b',');
        assert_eq!(config.group_order, GroupOrder::Sorted);
        assert_eq!(config.chart.width, 800);
        assert_eq!(config.chart.height, 600);
        assert!(config.chart.font_path.is_none());
        assert_eq!(config.rust_log, "info");
    }

    #[test]
    #[serial]
    fn test_from_env_overrides() {
        clear_env();
        set_env("REPORT_INPUT_PATH", "data/runs.tsv");
        set_env("REPORT_OUTPUT_DIR", "out");
        set_env("REPORT_DELIMITER", "tab");
        set_env("REPORT_GROUP_ORDER", "first-seen");
        set_env("REPORT_CHART_WIDTH", "1024");
        set_env("REPORT_CHART_HEIGHT", "768");
        set_env("REPORT_FONT_PATH", "/opt/fonts/custom.ttf");

        let config = Config::from_env().unwrap();
        clear_env();

        assert_eq!(config.input_path, PathBuf::from("data/runs.tsv"));
        assert_eq!(config.output_dir, PathBuf::from("out"));
        assert_eq!(config.delimiter, b'\t');
        assert_eq!(config.group_order, GroupOrder::FirstSeen);
        assert_eq!((config.chart.width, config.chart.height), (1024, 768));
        assert_eq!(config.chart.font_path, Some(PathBuf::from("/opt/fonts/custom.ttf")));
    }

    #[test]
    #[serial]
    fn test_from_env_rejects_invalid_values() {
        for (var, value) in [
            ("REPORT_DELIMITER", ";;"),
            ("REPORT_GROUP_ORDER", "random"),
            ("REPORT_CHART_WIDTH", "wide"),
            ("REPORT_CHART_HEIGHT", "-1"),
        ] {
            clear_env();
            set_env(var, value);

            let err = Config::from_env().unwrap_err();

            let ConfigError::InvalidValue(name) = err;
            assert_eq!(name, var);
        }
        clear_env();
    }

    #[test]
    fn test_new_uses_defaults_beyond_paths() {
        let config = Config::new("in/results.csv", "out");
        assert_eq!(config.input_path, PathBuf::from("in/results.csv"));
        assert_eq!(config.output_dir, PathBuf::from("out"));
        assert_eq!(config.delimiter, DEFAULT_DELIMITER);
        assert_eq!(config.group_order, GroupOrder::Sorted);
        assert_eq!(config.chart.width, DEFAULT_CHART_WIDTH);
        assert!(config.chart.font_path.is_none());
    }

    #[test]
    fn test_group_order_parsing() {
        assert_eq!("sorted".parse::<GroupOrder>().unwrap(), GroupOrder::Sorted);
        assert_eq!(" First-Seen ".parse::<GroupOrder>().unwrap(), GroupOrder::FirstSeen);
        assert!("random".parse::<GroupOrder>().is_err());
    }

    #[test]
    fn test_delimiter_parsing() {
        assert_eq!(parse_delimiter(";").unwrap(), b';');
        assert_eq!(parse_delimiter("\\t").unwrap(), b'\t');
        assert_eq!(parse_delimiter("tab").unwrap(), b'\t');
        assert!(parse_delimiter(";;").is_err());
        assert!(parse_delimiter("").is_err());
    }
}
