//! Box-and-whisker element for the distribution charts
//!
//! Quartiles use linear interpolation. Whiskers stop at the most extreme
//! observation within 1.5 IQR of the box, so they never extend past the
//! data; anything beyond them is an outlier.

use plotters::element::{Drawable, PointCollection};
use plotters::prelude::*;
use plotters_backend::{BackendCoord, DrawingErrorKind};

/// Whisker reach, in multiples of the interquartile range
const WHISKER_IQR: f64 = 1.5;

/// Outline, whisker and median colour
const LINE_COLOR: RGBColor = RGBColor(60, 60, 60);

/// Five values drawn for one group
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoxStats {
    pub lower_whisker: f64,
    pub q1: f64,
    pub median: f64,
    pub q3: f64,
    pub upper_whisker: f64,
}

impl BoxStats {
    /// `None` when there are no finite values
    pub fn from_values(values: &[f64]) -> Option<Self> {
        let mut sorted: Vec<f64> = values.iter().copied().filter(|v| v.is_finite()).collect();
        if sorted.is_empty() {
            return None;
        }
        sorted.sort_by(f64::total_cmp);

        let q1 = percentile(&sorted, 0.25);
        let median = percentile(&sorted, 0.5);
        let q3 = percentile(&sorted, 0.75);
        let reach = (q3 - q1) * WHISKER_IQR;

        let lower_whisker = sorted
            .iter()
            .copied()
            .find(|v| *v >= q1 - reach)
            .map_or(q1, |v| v.min(q1));
        let upper_whisker = sorted
            .iter()
            .rev()
            .copied()
            .find(|v| *v <= q3 + reach)
            .map_or(q3, |v| v.max(q3));

        Some(Self {
            lower_whisker,
            q1,
            median,
            q3,
            upper_whisker,
        })
    }

    /// Values drawn as individual points
    pub fn outliers<'a>(&self, values: &'a [f64]) -> impl Iterator<Item = f64> + 'a {
        let (lo, hi) = (self.lower_whisker, self.upper_whisker);
        values
            .iter()
            .copied()
            .filter(move |v| v.is_finite() && (*v < lo || *v > hi))
    }

    fn values(&self) -> [f64; 5] {
        [self.lower_whisker, self.q1, self.median, self.q3, self.upper_whisker]
    }
}

/// Value at fraction `p` of a sorted, non-empty slice
fn percentile(sorted: &[f64], p: f64) -> f64 {
    let rank = p * (sorted.len() - 1) as f64;
    let lo = rank.floor() as usize;
    let hi = rank.ceil() as usize;
    sorted[lo] + (sorted[hi] - sorted[lo]) * (rank - lo as f64)
}

/// Vertical box plot glyph centred on `key`
pub struct BoxGlyph<K> {
    key: K,
    stats: BoxStats,
    width: u32,
    fill: ShapeStyle,
}

impl<K> BoxGlyph<K> {
    pub fn new(key: K, stats: BoxStats, width: u32, fill: impl Into<ShapeStyle>) -> Self {
        Self {
            key,
            stats,
            width,
            fill: fill.into(),
        }
    }
}

impl<'a, K: Clone> PointCollection<'a, (K, f32)> for &'a BoxGlyph<K> {
    type Point = (K, f32);
    type IntoIter = Vec<Self::Point>;

    fn point_iter(self) -> Self::IntoIter {
        self.stats
            .values()
            .iter()
            .map(|v| (self.key.clone(), *v as f32))
            .collect()
    }
}

impl<K, DB: DrawingBackend> Drawable<DB> for BoxGlyph<K> {
    fn draw<I: Iterator<Item = BackendCoord>>(
        &self,
        points: I,
        backend: &mut DB,
        _: (u32, u32),
    ) -> Result<(), DrawingErrorKind<DB::ErrorType>> {
        let points: Vec<BackendCoord> = points.take(5).collect();
        let Ok([lower, q1, median, q3, upper]) = <[BackendCoord; 5]>::try_from(points) else {
            return Ok(());
        };

        let line = LINE_COLOR.stroke_width(1);
        let half = (self.width / 2) as i32;
        let cap = (self.width / 4) as i32;
        let x = median.0;

        // y grows downwards in backend space
        let top = q1.1.min(q3.1);
        let bottom = q1.1.max(q3.1);
        backend.draw_rect((x - half, top), (x + half, bottom), &self.fill, true)?;
        backend.draw_rect((x - half, top), (x + half, bottom), &line, false)?;
        backend.draw_line((x - half, median.1), (x + half, median.1), &line)?;

        for (end, edge) in [(lower, q1), (upper, q3)] {
            backend.draw_line((x, end.1), (x, edge.1), &line)?;
            backend.draw_line((x - cap, end.1), (x + cap, end.1), &line)?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_whiskers_stop_at_observations() {
        // Fences at 6.25 and 16.25 lie outside the data
        let stats = BoxStats::from_values(&[10.0, 10.0, 10.0, 20.0]).unwrap();

        assert_eq!(stats.lower_whisker, 10.0);
        assert_eq!(stats.q1, 10.0);
        assert_eq!(stats.median, 10.0);
        assert_eq!(stats.q3, 12.5);
        assert_eq!(stats.upper_whisker, 12.5);
        assert_eq!(stats.outliers(&[10.0, 10.0, 10.0, 20.0]).collect::<Vec<_>>(), vec![20.0]);
    }

    #[test]
    fn test_whiskers_reach_extreme_inliers() {
        let values = [1.0, 2.0, 2.5, 3.0, 40.0];
        let stats = BoxStats::from_values(&values).unwrap();

        assert_eq!(stats.q1, 2.0);
        assert_eq!(stats.median, 2.5);
        assert_eq!(stats.q3, 3.0);
        assert_eq!(stats.lower_whisker, 1.0);
        assert_eq!(stats.upper_whisker, 3.0);
        assert_eq!(stats.outliers(&values).collect::<Vec<_>>(), vec![40.0]);
    }

    #[test]
    fn test_whiskers_stay_within_data() {
        let values = [3.0, 7.0, 8.0, 8.5, 9.0, 12.0, 30.0, -4.0];
        let stats = BoxStats::from_values(&values).unwrap();
        let min = values.iter().copied().fold(f64::INFINITY, f64::min);
        let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);

        assert!(stats.lower_whisker >= min && stats.upper_whisker <= max);
        assert!(stats.lower_whisker <= stats.q1 && stats.q3 <= stats.upper_whisker);
    }

    #[test]
    fn test_single_value_and_empty() {
        let stats = BoxStats::from_values(&[4.0]).unwrap();
        assert_eq!(stats.values(), [4.0; 5]);
        assert!(BoxStats::from_values(&[]).is_none());
    }

    #[test]
    fn test_glyph_draws_nothing_below_lower_whisker() {
        const W: u32 = 200;
        const H: u32 = 300;
        let stats = BoxStats::from_values(&[10.0, 10.0, 10.0, 20.0]).unwrap();
        let names = ["X"];
        let mut buf = vec![0u8; (W * H * 3) as usize];

        let (inside, below) = {
            let root = BitMapBackend::with_buffer(&mut buf, (W, H)).into_drawing_area();
            root.fill(&WHITE).unwrap();
            let mut ctx = ChartBuilder::on(&root)
                .build_cartesian_2d(names[..].into_segmented(), 0f32..30f32)
                .unwrap();
            let key = SegmentValue::CenterOf(&names[0]);
            ctx.draw_series(std::iter::once(BoxGlyph::new(key.clone(), stats, 40, BLUE.filled())))
                .unwrap();
            let inside = ctx.backend_coord(&(key.clone(), 11.0));
            let below = ctx.backend_coord(&(key, 7.0));
            root.present().unwrap();
            (inside, below)
        };

        let pixel = |(x, y): (i32, i32)| {
            let i = ((y as u32 * W + x as u32) * 3) as usize;
            (buf[i], buf[i + 1], buf[i + 2])
        };
        assert_eq!(pixel(inside), (0, 0, 255));
        assert_eq!(pixel(below), (255, 255, 255));
    }
}
