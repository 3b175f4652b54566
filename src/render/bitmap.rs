//! PNG charts on the plotters bitmap backend

use std::error::Error;
use std::fmt::Display;
use std::path::Path;

use plotters::prelude::*;

use crate::config::ChartConfig;
use crate::constants::{
    CHART_AXIS_DESC_SIZE, CHART_FONT_FAMILY, CHART_TITLE_SIZE, OUTLIER_RADIUS,
};
use crate::error::{ReportError, ReportResult};
use crate::render::box_glyph::{BoxGlyph, BoxStats};
use crate::render::{BarChartSpec, BoxPlotSpec, ChartRenderer, font};

/// Viridis, sampled at ten evenly spaced stops
const VIRIDIS: [(u8, u8, u8); 10] = [
    (68, 1, 84),
    (72, 40, 120),
    (62, 73, 137),
    (49, 104, 142),
    (38, 130, 142),
    (31, 158, 137),
    (53, 183, 121),
    (110, 206, 88),
    (181, 222, 43),
    (253, 231, 37),
];

/// Renders charts as PNG files.
///
/// Each call owns its drawing surface for the duration of the call only, so
/// a failed chart never holds on to a file or buffer needed by the next one.
#[derive(Debug, Clone)]
pub struct BitmapRenderer {
    width: u32,
    height: u32,
    /// Whether a font is available for captions, labels and tick values
    text: bool,
}

impl BitmapRenderer {
    pub fn new(config: &ChartConfig) -> Self {
        Self {
            width: config.width,
            height: config.height,
            text: font::ensure_chart_font(config.font_path.as_deref()),
        }
    }

    /// Renderer that never draws text
    pub fn without_text(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            text: false,
        }
    }

    pub fn draws_text(&self) -> bool {
        self.text
    }

    fn bar_chart(&self, chart: &BarChartSpec, path: &Path) -> Result<(), Box<dyn Error>> {
        let root = BitMapBackend::new(path, (self.width, self.height)).into_drawing_area();
        root.fill(&WHITE)?;

        let names: Vec<&str> = chart.bars.iter().map(|(name, _)| name.as_str()).collect();
        if names.is_empty() {
            root.present()?;
            return Ok(());
        }

        let y_max = bar_upper_bound(chart.bars.iter().map(|(_, value)| *value));

        let mut builder = ChartBuilder::on(&root);
        builder
            .margin(15)
            .x_label_area_size(40)
            .y_label_area_size(60);
        if self.text {
            builder.caption(&chart.title, (CHART_FONT_FAMILY, CHART_TITLE_SIZE));
        }
        let mut ctx = builder.build_cartesian_2d(names[..].into_segmented(), 0f64..y_max)?;

        if self.text {
            ctx.configure_mesh()
                .disable_x_mesh()
                .light_line_style(WHITE)
                .bold_line_style(BLACK.mix(0.15))
                .x_desc(chart.x_label.as_str())
                .y_desc(chart.y_label.as_str())
                .axis_desc_style((CHART_FONT_FAMILY, CHART_AXIS_DESC_SIZE))
                .x_label_formatter(&|v| segment_label(v))
                .draw()?;
        }

        for (i, (name, (_, value))) in names.iter().zip(&chart.bars).enumerate() {
            // NaN means leave the slot empty
            if !value.is_finite() {
                continue;
            }
            let color = viridis(i, names.len());
            ctx.draw_series(
                Histogram::vertical(&ctx)
                    .style(color.filled())
                    .margin(12)
                    .data(std::iter::once((name, *value))),
            )?;
        }

        root.present()?;
        Ok(())
    }

    fn box_plot(&self, chart: &BoxPlotSpec, path: &Path) -> Result<(), Box<dyn Error>> {
        let root = BitMapBackend::new(path, (self.width, self.height)).into_drawing_area();
        root.fill(&WHITE)?;

        let names: Vec<&str> = chart.groups.iter().map(|(name, _)| name.as_str()).collect();
        if names.is_empty() {
            root.present()?;
            return Ok(());
        }

        let boxes: Vec<Option<BoxStats>> = chart
            .groups
            .iter()
            .map(|(_, values)| BoxStats::from_values(values))
            .collect();

        let (y_min, y_max) = box_value_range(chart.groups.iter().flat_map(|(_, v)| v.iter().copied()));

        let mut builder = ChartBuilder::on(&root);
        builder
            .margin(15)
            .x_label_area_size(40)
            .y_label_area_size(60);
        if self.text {
            builder.caption(&chart.title, (CHART_FONT_FAMILY, CHART_TITLE_SIZE));
        }
        let mut ctx = builder.build_cartesian_2d(names[..].into_segmented(), y_min..y_max)?;

        if self.text {
            ctx.configure_mesh()
                .disable_x_mesh()
                .light_line_style(WHITE)
                .bold_line_style(BLACK.mix(0.15))
                .x_desc(chart.x_label.as_str())
                .y_desc(chart.y_label.as_str())
                .axis_desc_style((CHART_FONT_FAMILY, CHART_AXIS_DESC_SIZE))
                .x_label_formatter(&|v| segment_label(v))
                .draw()?;
        }

        let box_width = (self.width as f64 * 0.5 / names.len() as f64).clamp(8.0, 120.0) as u32;

        for (i, (name, stats)) in names.iter().zip(&boxes).enumerate() {
            let Some(stats) = stats else {
                continue;
            };
            let color = viridis(i, names.len());

            ctx.draw_series(std::iter::once(BoxGlyph::new(
                SegmentValue::CenterOf(name),
                *stats,
                box_width,
                color.filled(),
            )))?;

            ctx.draw_series(stats.outliers(&chart.groups[i].1).map(|v| {
                Circle::new((SegmentValue::CenterOf(name), v as f32), OUTLIER_RADIUS, color.filled())
            }))?;
        }

        root.present()?;
        Ok(())
    }
}

impl ChartRenderer for BitmapRenderer {
    fn render_bar_chart(&self, chart: &BarChartSpec, path: &Path) -> ReportResult<()> {
        self.bar_chart(chart, path)
            .map_err(|e| ReportError::write(path, e))?;
        tracing::info!(path = %path.display(), bars = chart.bars.len(), "Wrote bar chart");
        Ok(())
    }

    fn render_box_plot(&self, chart: &BoxPlotSpec, path: &Path) -> ReportResult<()> {
        self.box_plot(chart, path)
            .map_err(|e| ReportError::write(path, e))?;
        tracing::info!(path = %path.display(), boxes = chart.groups.len(), "Wrote box plot");
        Ok(())
    }
}

fn segment_label<T: Display>(value: &SegmentValue<T>) -> String {
    match value {
        SegmentValue::Exact(label) | SegmentValue::CenterOf(label) => label.to_string(),
        SegmentValue::Last => String::new(),
    }
}

/// Colour `index` of `count`, spread across the viridis range
fn viridis(index: usize, count: usize) -> RGBColor {
    let t = (index as f64 + 0.5) / count.max(1) as f64;
    let scaled = t.clamp(0.0, 1.0) * (VIRIDIS.len() - 1) as f64;
    let lo = scaled.floor() as usize;
    let hi = (lo + 1).min(VIRIDIS.len() - 1);
    let frac = scaled - lo as f64;

    let mix = |a: u8, b: u8| (a as f64 + (b as f64 - a as f64) * frac).round() as u8;
    let (a, b) = (VIRIDIS[lo], VIRIDIS[hi]);
    RGBColor(mix(a.0, b.0), mix(a.1, b.1), mix(a.2, b.2))
}

/// Top of the y axis for bars: 10% headroom over the largest finite value
fn bar_upper_bound(values: impl Iterator<Item = f64>) -> f64 {
    let max = values.filter(|v| v.is_finite()).fold(0.0, f64::max);
    if max > 0.0 { max * 1.1 } else { 1.0 }
}

/// Padded y range covering every value; `0..1` when there are none
fn box_value_range(values: impl Iterator<Item = f64>) -> (f32, f32) {
    let (min, max) = values
        .filter(|v| v.is_finite())
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| (lo.min(v), hi.max(v)));

    if min > max {
        return (0.0, 1.0);
    }

    let pad = if max > min { (max - min) * 0.05 } else { min.abs().max(1.0) * 0.1 };
    ((min - pad) as f32, (max + pad) as f32)
}
