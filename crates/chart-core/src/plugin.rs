// File: crates/chart-core/src/plugin.rs
// Summary: Plugin trait definitions with a minimal, renderer-agnostic API, and the point-label plugin.

use std::sync::Arc;

use crate::chart::ChartKind;
use crate::grid::format_value;
use crate::scale::PlotLayout;
use crate::series::ChartData;

/// Text placed at a pixel position; `y` is the text baseline, `x` its centre.
#[derive(Clone, Debug, PartialEq)]
pub struct Annotation {
    pub text: String,
    pub x: f32,
    pub y: f32,
}

/// A plugin derives extra annotations from the laid-out data. Backends draw them last.
pub trait Plugin: Send + Sync {
    fn id(&self) -> &'static str;
    fn annotate(&self, data: &ChartData, layout: &PlotLayout, kind: ChartKind, full_width: bool) -> Vec<Annotation>;
}

/// Labels every data point with its value.
#[derive(Clone, Copy, Debug)]
pub struct PointLabels {
    /// Gap between the bar top / point and the label baseline, in pixels.
    pub offset_y: f32,
}

impl Default for PointLabels {
    fn default() -> Self { Self { offset_y: 6.0 } }
}

impl Plugin for PointLabels {
    fn id(&self) -> &'static str { "point_labels" }

    fn annotate(&self, data: &ChartData, layout: &PlotLayout, kind: ChartKind, full_width: bool) -> Vec<Annotation> {
        let mut out = Vec::new();
        for (si, s) in data.series.iter().enumerate() {
            for (ci, &v) in s.values.iter().enumerate() {
                let (x, y) = match kind {
                    ChartKind::Bar => layout.bar_tip(si, ci, v),
                    ChartKind::Line => layout.point(ci, v, full_width),
                };
                out.push(Annotation { text: format_value(v), x, y: y - self.offset_y });
            }
        }
        out
    }
}

/// Ordered, shareable list of plugins attached to a chart's options.
#[derive(Clone, Default)]
pub struct PluginSet {
    plugins: Vec<Arc<dyn Plugin>>,
}

impl PluginSet {
    pub fn new() -> Self { Self::default() }

    pub fn with(mut self, plugin: impl Plugin + 'static) -> Self {
        self.plugins.push(Arc::new(plugin));
        self
    }

    pub fn ids(&self) -> Vec<&'static str> {
        self.plugins.iter().map(|p| p.id()).collect()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.plugins.iter().any(|p| p.id() == id)
    }

    pub fn is_empty(&self) -> bool { self.plugins.is_empty() }

    pub fn annotate_all(&self, data: &ChartData, layout: &PlotLayout, kind: ChartKind, full_width: bool) -> Vec<Annotation> {
        self.plugins
            .iter()
            .flat_map(|p| p.annotate(data, layout, kind, full_width))
            .collect()
    }
}

impl std::fmt::Debug for PluginSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.ids()).finish()
    }
}
