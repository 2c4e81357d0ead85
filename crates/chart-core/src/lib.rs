// File: crates/chart-core/src/lib.rs
// Summary: Core library entry point; exports public API for categorical chart construction and rendering.

pub mod chart;
pub mod series;
pub mod axis;
pub mod grid;
pub mod types;
pub mod geometry;
pub mod scale;
pub mod theme;
pub mod text;
pub mod plugin;

pub use chart::{Chart, ChartKind, ChartOptions, RenderOptions};
pub use series::{ChartData, DataError, Series};
pub use axis::AxisOptions;
pub use scale::{BandScale, PlotLayout, ValueScale};
pub use theme::Theme;
pub use text::TextShaper;
pub use plugin::{Annotation, Plugin, PluginSet, PointLabels};
