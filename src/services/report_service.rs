//! Report service - Runs the load, coerce, aggregate, render pipeline

use std::path::{Path, PathBuf};

use crate::{
    analysis::{coerce_table, distribution, load_results, summarize},
    config::Config,
    error::{ReportError, ReportResult},
    models::{Manifest, Metric, ResultTable, SummaryTable},
    render::{BarChartSpec, BoxPlotSpec, ChartRenderer, write_summary},
};

/// Produces charts and summary tables from one results file
pub struct ReportService<R> {
    config: Config,
    renderer: R,
}

impl<R: ChartRenderer> ReportService<R> {
    pub fn new(config: Config, renderer: R) -> Self {
        Self { config, renderer }
    }

    /// Run the full pipeline once.
    ///
    /// Artifacts are written one at a time; if one fails the error is
    /// returned and anything already written stays on disk.
    pub fn run(&self) -> ReportResult<Manifest> {
        let table = self.load()?;
        let order = self.config.group_order;

        let summaries: Vec<SummaryTable> = Metric::ALL
            .into_iter()
            .map(|metric| summarize(&table, metric, order))
            .collect();

        prepare_output_dir(&self.config.output_dir)?;

        let mut manifest = Manifest::default();

        for summary in &summaries {
            let path = self.output_path(summary.metric.mean_chart_file());
            self.renderer
                .render_bar_chart(&BarChartSpec::means(summary), &path)?;
            manifest.charts.push(path);
        }

        for metric in Metric::ALL {
            let path = self.output_path(metric.distribution_chart_file());
            let chart = BoxPlotSpec::distribution(metric, distribution(&table, metric, order));
            self.renderer.render_box_plot(&chart, &path)?;
            manifest.charts.push(path);
        }

        for summary in &summaries {
            let path = self.output_path(summary.metric.summary_file());
            write_summary(summary, &path)?;
            manifest.summaries.push(path);
        }

        Ok(manifest)
    }

    /// Load and coerce the configured input file
    pub fn load(&self) -> ReportResult<ResultTable> {
        let raw = load_results(&self.config.input_path, self.config.delimiter)?;
        Ok(coerce_table(raw))
    }

    fn output_path(&self, file_name: &str) -> PathBuf {
        self.config.output_dir.join(file_name)
    }
}

fn prepare_output_dir(dir: &Path) -> ReportResult<()> {
    std::fs::create_dir_all(dir).map_err(|e| ReportError::write(dir, e))
}
