// File: crates/chart-core/src/axis.rs
// Summary: Per-axis display options.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AxisOptions {
    /// Draw tick/category labels along this axis.
    pub show_label: bool,
    /// Draw grid lines perpendicular to this axis.
    pub show_grid: bool,
}

impl AxisOptions {
    pub const fn new(show_label: bool, show_grid: bool) -> Self {
        Self { show_label, show_grid }
    }

    /// Axis with labels suppressed but grid kept.
    pub const fn hidden_labels() -> Self {
        Self::new(false, true)
    }
}

impl Default for AxisOptions {
    fn default() -> Self {
        Self::new(true, true)
    }
}
