// File: crates/chart-core/src/scale.rs
// Summary: Category (X) and Value (Y) scales plus the combined plot layout.

use crate::geometry::RectI32;
use crate::series::ChartData;

/// Value Y coordinate (e.g., a count).
pub type Value = f64;

/// Horizontal category scale: splits the plot width into equal bands.
#[derive(Clone, Copy, Debug)]
pub struct BandScale {
    pub left_px: f32,
    pub right_px: f32,
    pub count: usize,
}

impl BandScale {
    pub fn new(left_px: f32, right_px: f32, count: usize) -> Self {
        Self { left_px, right_px: right_px.max(left_px), count }
    }
    #[inline]
    pub fn band_width(&self) -> f32 {
        if self.count == 0 { return 0.0; }
        (self.right_px - self.left_px) / self.count as f32
    }
    #[inline]
    pub fn band_start(&self, index: usize) -> f32 {
        self.left_px + self.band_width() * index as f32
    }
    #[inline]
    pub fn center(&self, index: usize) -> f32 {
        self.band_start(index) + self.band_width() * 0.5
    }
}

/// Vertical value scale mapping data range to [top, bottom] pixels.
#[derive(Clone, Copy, Debug)]
pub struct ValueScale {
    pub top_px: f32,
    pub bottom_px: f32,
    pub vmin: Value,
    pub vmax: Value,
}

impl ValueScale {
    pub fn new_linear(top_px: f32, bottom_px: f32, vmin: Value, vmax: Value) -> Self {
        let mut s = Self { top_px, bottom_px, vmin, vmax };
        if (s.vmax - s.vmin).abs() < 1e-12 { s.vmax = s.vmin + 1.0; }
        s
    }
    #[inline]
    pub fn to_px(&self, y: Value) -> f32 {
        let span = (self.vmax - self.vmin).max(1e-12);
        self.bottom_px - ((y - self.vmin) / span) as f32 * (self.bottom_px - self.top_px)
    }
}

/// Fraction of a band a single bar occupies when one series is drawn.
const BAR_FILL: f32 = 0.6;

/// Plot rect plus both scales for one chart render.
#[derive(Clone, Copy, Debug)]
pub struct PlotLayout {
    pub plot: RectI32,
    pub x: BandScale,
    pub y: ValueScale,
    pub series_count: usize,
}

/// Pixel rectangle of one bar, top-left origin.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BarRect {
    pub left: f32,
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
}

impl PlotLayout {
    pub fn new(plot: RectI32, data: &ChartData) -> Self {
        let (low, high) = data.value_bounds();
        Self {
            plot,
            x: BandScale::new(plot.left as f32, plot.right as f32, data.category_count()),
            y: ValueScale::new_linear(plot.top as f32, plot.bottom as f32, low, high),
            series_count: data.series.len(),
        }
    }

    /// Pixel Y of the zero line bars grow from.
    pub fn baseline_px(&self) -> f32 {
        self.y.to_px(0.0f64.clamp(self.y.vmin, self.y.vmax))
    }

    /// Bars of all series share a category band side by side.
    pub fn bar_rect(&self, series_index: usize, category: usize, value: Value) -> BarRect {
        let n = self.series_count.max(1) as f32;
        let group = self.x.band_width() * BAR_FILL;
        let width = group / n;
        let left = self.x.center(category) - group * 0.5 + width * series_index as f32;
        let base = self.baseline_px();
        let tip = self.y.to_px(value);
        BarRect { left, top: tip.min(base), right: left + width, bottom: tip.max(base) }
    }

    /// Centre of the bar's top edge (or bottom edge for negative values).
    pub fn bar_tip(&self, series_index: usize, category: usize, value: Value) -> (f32, f32) {
        let r = self.bar_rect(series_index, category, value);
        let y = if value >= 0.0 { r.top } else { r.bottom };
        ((r.left + r.right) * 0.5, y)
    }

    /// Line chart point for `category`.
    pub fn point(&self, category: usize, value: Value, full_width: bool) -> (f32, f32) {
        let x = if full_width {
            // Points span edge to edge: first at the left, last at the right.
            let steps = self.x.count.saturating_sub(1).max(1) as f32;
            self.x.left_px + (self.x.right_px - self.x.left_px) * category as f32 / steps
        } else {
            self.x.center(category)
        };
        (x, self.y.to_px(value))
    }
}
