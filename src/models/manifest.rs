//! Manifest of produced artifacts

use std::fmt;
use std::path::PathBuf;

/// Paths written by a report run, in the order they were produced
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Manifest {
    pub charts: Vec<PathBuf>,
    pub summaries: Vec<PathBuf>,
}

impl Manifest {
    pub fn len(&self) -> usize {
        self.charts.len() + self.summaries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// All paths, charts first
    pub fn paths(&self) -> impl Iterator<Item = &PathBuf> {
        self.charts.iter().chain(self.summaries.iter())
    }
}

impl fmt::Display for Manifest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Graphs generated and saved:")?;
        for path in &self.charts {
            writeln!(f, "- {}", path.display())?;
        }
        writeln!(f, "Summary statistics saved:")?;
        for path in &self.summaries {
            writeln!(f, "- {}", path.display())?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_lists_charts_then_summaries() {
        let manifest = Manifest {
            charts: vec![PathBuf::from("out/a.png"), PathBuf::from("out/b.png")],
            summaries: vec![PathBuf::from("out/s.csv")],
        };

        assert_eq!(
            manifest.to_string(),
            "Graphs generated and saved:\n- out/a.png\n- out/b.png\nSummary statistics saved:\n- out/s.csv\n"
        );
        assert_eq!(manifest.len(), 3);
    }
}
