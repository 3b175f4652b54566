//! Time utilities

use std::time::Duration;

/// Format an elapsed duration as a human-readable string
pub fn format_elapsed(elapsed: Duration) -> String {
    let ms = elapsed.as_millis();

    if ms < 1000 {
        format!("{}ms", ms)
    } else if ms < 60000 {
        format!("{:.2}s", elapsed.as_secs_f64())
    } else {
        let seconds = elapsed.as_secs();
        format!("{}m {}s", seconds / 60, seconds % 60)
    }
}
