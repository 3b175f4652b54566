//! benchreport - Application Entry Point
//!
//! Reads the benchmark results file, writes charts and summary tables, and
//! prints the list of produced files.

use std::time::Instant;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use benchreport::{Config, ReportService, render::BitmapRenderer, utils::format_elapsed};

fn main() -> anyhow::Result<()> {
    let config = Config::from_env()?;

    // Initialize tracing; stdout is reserved for the manifest
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| config.rust_log.clone().into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    tracing::info!(
        input = %config.input_path.display(),
        output = %config.output_dir.display(),
        "Generating benchmark report..."
    );

    let started = Instant::now();
    let renderer = BitmapRenderer::new(&config.chart);
    if !renderer.draws_text() {
        tracing::warn!("Charts will have no titles or axis labels");
    }

    let manifest = ReportService::new(config, renderer)
        .run()
        .inspect_err(|e| tracing::error!(code = e.error_code(), "{}", e))?;

    tracing::info!(
        artifacts = manifest.len(),
        "Report generated in {}",
        format_elapsed(started.elapsed())
    );

    print!("{manifest}");

    Ok(())
}
