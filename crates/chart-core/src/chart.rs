// File: crates/chart-core/src/chart.rs
// Summary: Chart model, immutable chart options, and headless PNG/RGBA rendering using Skia CPU raster surfaces.

use anyhow::Result;
use skia_safe as skia;

use crate::axis::AxisOptions;
use crate::geometry::RectI32;
use crate::grid::{format_value, value_ticks};
use crate::plugin::{PluginSet, PointLabels};
use crate::scale::PlotLayout;
use crate::series::ChartData;
use crate::text::{Anchor, TextShaper};
use crate::theme::Theme;
use crate::types::{Insets, HEIGHT, WIDTH};

/// Number of horizontal grid divisions along the value axis.
const Y_DIVISIONS: usize = 4;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ChartKind {
    Bar,
    Line,
}

/// Per-chart presentation options. Plain values: build one, pass it by reference.
#[derive(Clone, Debug)]
pub struct ChartOptions {
    pub kind: ChartKind,
    /// Stretch the plot to the right edge of the surface.
    pub full_width: bool,
    pub axis_x: AxisOptions,
    pub axis_y: AxisOptions,
    /// Curve line segments instead of straight joins. Ignored for bars.
    pub line_smooth: bool,
    pub plugins: PluginSet,
}

impl ChartOptions {
    /// Full-width bars, Y labels hidden, values printed above each bar.
    pub fn bar() -> Self {
        Self {
            kind: ChartKind::Bar,
            full_width: true,
            axis_x: AxisOptions::default(),
            axis_y: AxisOptions::hidden_labels(),
            line_smooth: false,
            plugins: PluginSet::new().with(PointLabels::default()),
        }
    }

    /// Same as `bar()` but drawn as a straight-segment line.
    pub fn line() -> Self {
        Self { kind: ChartKind::Line, ..Self::bar() }
    }
}

pub struct RenderOptions {
    pub width: i32,
    pub height: i32,
    pub insets: Insets,
    pub theme: Theme,
    /// Draw axis labels and plugin annotations. Off gives font-independent pixels.
    pub draw_labels: bool,
    pub font_size: f32,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            width: WIDTH,
            height: HEIGHT,
            insets: Insets::default(),
            theme: Theme::dark(),
            draw_labels: true,
            font_size: 14.0,
        }
    }
}

#[derive(Clone, Debug)]
pub struct Chart {
    pub data: ChartData,
    pub options: ChartOptions,
}

impl Chart {
    pub fn new(data: ChartData, options: ChartOptions) -> Self {
        Self { data, options }
    }

    pub fn bar(data: ChartData) -> Self {
        Self::new(data, ChartOptions::bar())
    }

    pub fn line(data: ChartData) -> Self {
        Self::new(data, ChartOptions::line())
    }

    /// Pixel layout this chart uses on a surface described by `opts`.
    pub fn layout(&self, opts: &RenderOptions) -> PlotLayout {
        let insets = if self.options.full_width { opts.insets.without_right() } else { opts.insets };
        let plot = RectI32::plot_area(opts.width, opts.height, &insets);
        PlotLayout::new(plot, &self.data)
    }

    /// Render the chart to a PNG at `output_png_path` using a CPU raster surface.
    pub fn render_to_png(
        &self,
        opts: &RenderOptions,
        output_png_path: impl AsRef<std::path::Path>,
    ) -> Result<()> {
        let bytes = self.render_to_png_bytes(opts)?;
        if let Some(parent) = output_png_path.as_ref().parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(output_png_path, bytes)?;
        Ok(())
    }

    /// Render the chart and return encoded PNG bytes.
    pub fn render_to_png_bytes(&self, opts: &RenderOptions) -> Result<Vec<u8>> {
        let mut surface = skia::surfaces::raster_n32_premul((opts.width, opts.height))
            .ok_or_else(|| anyhow::anyhow!("failed to create raster surface"))?;
        self.draw(surface.canvas(), opts)?;

        let image = surface.image_snapshot();
        #[allow(deprecated)]
        let data = image
            .encode_to_data(skia::EncodedImageFormat::PNG)
            .ok_or_else(|| anyhow::anyhow!("encode PNG failed"))?;
        Ok(data.as_bytes().to_vec())
    }

    /// Render into an unpremultiplied RGBA8 buffer.
    /// Returns `(pixels, width, height, row_stride_bytes)`.
    pub fn render_to_rgba8(&self, opts: &RenderOptions) -> Result<(Vec<u8>, u32, u32, usize)> {
        // Raster surfaces must be premultiplied; unpremultiply on readback.
        let info = skia::ImageInfo::new(
            (opts.width, opts.height),
            skia::ColorType::RGBA8888,
            skia::AlphaType::Premul,
            None,
        );
        let mut surface = skia::surfaces::raster(&info, None, None)
            .ok_or_else(|| anyhow::anyhow!("failed to create RGBA surface"))?;
        self.draw(surface.canvas(), opts)?;

        let info = info.with_alpha_type(skia::AlphaType::Unpremul);

        let stride = opts.width as usize * 4;
        let mut pixels = vec![0u8; stride * opts.height as usize];
        if !surface.read_pixels(&info, &mut pixels, stride, (0, 0)) {
            anyhow::bail!("reading back RGBA pixels failed");
        }
        Ok((pixels, opts.width as u32, opts.height as u32, stride))
    }

    /// Draw onto any Skia canvas. The canvas is cleared first.
    pub fn draw(&self, canvas: &skia::Canvas, opts: &RenderOptions) -> Result<()> {
        self.data.validate()?;
        let theme = &opts.theme;
        canvas.clear(theme.background);

        let layout = self.layout(opts);
        draw_grid(canvas, &layout, &self.options, theme, &self.data);
        draw_baseline(canvas, &layout, theme);

        match self.options.kind {
            ChartKind::Bar => draw_bars(canvas, &layout, &self.data, theme),
            ChartKind::Line => draw_lines(canvas, &layout, &self.data, &self.options, theme),
        }

        if opts.draw_labels {
            let shaper = TextShaper::new();
            draw_labels(canvas, &shaper, &layout, self, opts);
        }
        Ok(())
    }

    /// X pixel of the category label / grid line for `index`.
    fn category_x(&self, layout: &PlotLayout, index: usize) -> f32 {
        match self.options.kind {
            ChartKind::Bar => layout.x.center(index),
            ChartKind::Line => layout.point(index, 0.0, self.options.full_width).0,
        }
    }
}

// ---- helpers ----------------------------------------------------------------

fn draw_grid(canvas: &skia::Canvas, layout: &PlotLayout, options: &ChartOptions, theme: &Theme, data: &ChartData) {
    let mut paint = skia::Paint::default();
    paint.set_color(theme.grid);
    paint.set_anti_alias(true);
    paint.set_stroke_width(1.0);

    let p = layout.plot;
    if options.axis_y.show_grid {
        for v in value_ticks(layout.y.vmin, layout.y.vmax, Y_DIVISIONS) {
            let y = layout.y.to_px(v);
            canvas.draw_line((p.left as f32, y), (p.right as f32, y), &paint);
        }
    }
    if options.axis_x.show_grid {
        for i in 0..data.category_count() {
            let x = match options.kind {
                ChartKind::Bar => layout.x.band_start(i),
                ChartKind::Line => layout.point(i, 0.0, options.full_width).0,
            };
            canvas.draw_line((x, p.top as f32), (x, p.bottom as f32), &paint);
        }
    }
}

fn draw_baseline(canvas: &skia::Canvas, layout: &PlotLayout, theme: &Theme) {
    let mut axis_paint = skia::Paint::default();
    axis_paint.set_color(theme.axis_line);
    axis_paint.set_anti_alias(true);
    axis_paint.set_stroke_width(1.5);

    let y = layout.baseline_px();
    canvas.draw_line((layout.plot.left as f32, y), (layout.plot.right as f32, y), &axis_paint);
}

fn draw_bars(canvas: &skia::Canvas, layout: &PlotLayout, data: &ChartData, theme: &Theme) {
    let mut body = skia::Paint::default();
    body.set_anti_alias(true);
    body.set_style(skia::paint::Style::Fill);

    for (si, s) in data.series.iter().enumerate() {
        body.set_color(theme.series_color(si));
        for (ci, &v) in s.values.iter().enumerate() {
            let r = layout.bar_rect(si, ci, v);
            // zero-valued bars still show as a hairline on the axis
            let bottom = r.bottom.max(r.top + 1.0);
            canvas.draw_rect(skia::Rect::from_ltrb(r.left, r.top, r.right, bottom), &body);
        }
    }
}

fn draw_lines(canvas: &skia::Canvas, layout: &PlotLayout, data: &ChartData, options: &ChartOptions, theme: &Theme) {
    let mut stroke = skia::Paint::default();
    stroke.set_anti_alias(true);
    stroke.set_style(skia::paint::Style::Stroke);
    stroke.set_stroke_width(2.0);

    let mut dot = skia::Paint::default();
    dot.set_anti_alias(true);
    dot.set_style(skia::paint::Style::Fill);

    for (si, s) in data.series.iter().enumerate() {
        let color = theme.series_color(si);
        stroke.set_color(color);
        dot.set_color(color);

        let pts: Vec<(f32, f32)> = s
            .values
            .iter()
            .enumerate()
            .map(|(ci, &v)| layout.point(ci, v, options.full_width))
            .collect();
        if pts.is_empty() { continue; }

        if pts.len() >= 2 {
            let mut path = skia::Path::new();
            path.move_to(pts[0]);
            for w in pts.windows(2) {
                let ((x0, y0), (x1, y1)) = (w[0], w[1]);
                if options.line_smooth {
                    let mx = (x0 + x1) * 0.5;
                    path.cubic_to((mx, y0), (mx, y1), (x1, y1));
                } else {
                    path.line_to((x1, y1));
                }
            }
            canvas.draw_path(&path, &stroke);
        }
        for &p in &pts {
            canvas.draw_circle(p, 3.5, &dot);
        }
    }
}

fn draw_labels(canvas: &skia::Canvas, shaper: &TextShaper, layout: &PlotLayout, chart: &Chart, opts: &RenderOptions) {
    let theme = &opts.theme;
    let size = opts.font_size;
    let p = layout.plot;

    if chart.options.axis_x.show_label {
        for (i, label) in chart.data.labels.iter().enumerate() {
            let x = chart.category_x(layout, i);
            let anchor = category_anchor(chart, i);
            shaper.draw(canvas, label, x, p.bottom as f32 + size + 6.0, size, theme.axis_label, anchor);
        }
    }

    if chart.options.axis_y.show_label {
        for v in value_ticks(layout.y.vmin, layout.y.vmax, Y_DIVISIONS) {
            let y = layout.y.to_px(v) + size * 0.35;
            shaper.draw(canvas, &format_value(v), p.left as f32 - 8.0, y, size, theme.axis_label, Anchor::End);
        }
    }

    let annotations = chart
        .options
        .plugins
        .annotate_all(&chart.data, layout, chart.options.kind, chart.options.full_width);
    for a in annotations {
        shaper.draw(canvas, &a.text, a.x, a.y, size * 0.85, theme.point_label, Anchor::Middle);
    }
}

/// Full-width lines put the first and last labels on the plot edges; keep them inside.
fn category_anchor(chart: &Chart, index: usize) -> Anchor {
    let last = chart.data.category_count().saturating_sub(1);
    match chart.options.kind {
        ChartKind::Line if chart.options.full_width && last > 0 && index == last => Anchor::End,
        ChartKind::Line if chart.options.full_width && last > 0 && index == 0 => Anchor::Start,
        _ => Anchor::Middle,
    }
}
