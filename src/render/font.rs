//! Font registration for chart text
//!
//! The bitmap backend draws text with fonts registered at runtime. A font is
//! loaded once per process, from the configured path or from the first
//! readable system font.

use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use plotters::style::{FontStyle, register_font};

use crate::constants::{CHART_FONT_FAMILY, FONT_CANDIDATES};

static FONT_REGISTERED: OnceLock<bool> = OnceLock::new();

/// Register a font for chart text, returning whether text can be drawn.
///
/// Only the first call does any work; later calls report the first outcome.
pub fn ensure_chart_font(configured: Option<&Path>) -> bool {
    *FONT_REGISTERED.get_or_init(|| register_first(&candidates(configured)))
}

fn candidates(configured: Option<&Path>) -> Vec<PathBuf> {
    match configured {
        Some(path) => vec![path.to_path_buf()],
        None => FONT_CANDIDATES.iter().map(PathBuf::from).collect(),
    }
}

fn register_first(paths: &[PathBuf]) -> bool {
    for path in paths {
        let Ok(bytes) = std::fs::read(path) else {
            continue;
        };

        // Registered fonts must outlive every chart
        let bytes: &'static [u8] = Box::leak(bytes.into_boxed_slice());
        match register_font(CHART_FONT_FAMILY, FontStyle::Normal, bytes) {
            Ok(()) => {
                tracing::debug!(path = %path.display(), "Registered chart font");
                return true;
            }
            Err(_) => {
                tracing::warn!(path = %path.display(), "Not a valid TrueType/OpenType font");
            }
        }
    }

    tracing::warn!("No usable font found; charts are rendered without text (set REPORT_FONT_PATH)");
    false
}
