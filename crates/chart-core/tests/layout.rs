// File: crates/chart-core/tests/layout.rs
// Purpose: Validate value bounds, band/value scales and bar geometry.

use chart_core::{Chart, ChartData, RenderOptions};
use chart_core::geometry::RectI32;
use chart_core::grid::format_value;
use chart_core::scale::PlotLayout;
use chart_core::types::Insets;

fn plot() -> RectI32 {
    RectI32::from_ltrb(0, 0, 400, 200)
}

#[test]
fn value_bounds_include_zero() {
    let data = ChartData::single(["a", "b"], vec![120.0, 45.0]);
    assert_eq!(data.value_bounds(), (0.0, 120.0));

    let data = ChartData::single(["a", "b"], vec![-5.0, 10.0]);
    assert_eq!(data.value_bounds(), (-5.0, 10.0));
}

#[test]
fn value_bounds_all_zero_get_unit_range() {
    let data = ChartData::single(["a", "b"], vec![0.0, 0.0]);
    assert_eq!(data.value_bounds(), (0.0, 1.0));
    assert_eq!(ChartData::default().value_bounds(), (0.0, 1.0));
}

#[test]
fn bars_grow_from_baseline_in_category_order() {
    let data = ChartData::single(["Non Criminal", "Criminal"], vec![120.0, 45.0]);
    let layout = PlotLayout::new(plot(), &data);

    assert_eq!(layout.baseline_px(), 200.0);
    let first = layout.bar_rect(0, 0, 120.0);
    let second = layout.bar_rect(0, 1, 45.0);
    assert!(first.right <= second.left, "first category is left of the second");
    assert!((first.top - 0.0).abs() < 1e-3, "max value reaches the plot top");
    assert_eq!(first.bottom, 200.0);
    assert!((second.top - 125.0).abs() < 1e-3);
}

#[test]
fn zero_bar_has_no_height() {
    let data = ChartData::single(["a", "b"], vec![0.0, 0.0]);
    let layout = PlotLayout::new(plot(), &data);
    let r = layout.bar_rect(0, 1, 0.0);
    assert_eq!(r.top, r.bottom);
}

#[test]
fn full_width_drops_right_inset() {
    let data = ChartData::single(["a", "b"], vec![1.0, 2.0]);
    let mut opts = RenderOptions::default();
    opts.width = 300;
    opts.insets = Insets::new(10, 50, 10, 10);

    let full = Chart::bar(data.clone()).layout(&opts);
    assert_eq!(full.plot.right, 300);

    let mut chart = Chart::bar(data);
    chart.options.full_width = false;
    assert_eq!(chart.layout(&opts).plot.right, 250);
}

#[test]
fn full_width_line_points_touch_both_edges() {
    let data = ChartData::single(["a", "b", "c"], vec![1.0, 2.0, 3.0]);
    let layout = PlotLayout::new(plot(), &data);
    assert_eq!(layout.point(0, 1.0, true).0, 0.0);
    assert_eq!(layout.point(2, 3.0, true).0, 400.0);
    // Without full width, points sit in band centres.
    assert!((layout.point(0, 1.0, false).0 - 400.0 / 6.0).abs() < 1e-3);
}

#[test]
fn oversized_insets_collapse_plot() {
    let r = RectI32::plot_area(50, 50, &Insets::new(40, 40, 40, 40));
    assert_eq!(r.width(), 0);
    assert_eq!(r.height(), 0);
}

#[test]
fn values_format_like_counts() {
    assert_eq!(format_value(120.0), "120");
    assert_eq!(format_value(0.0), "0");
    assert_eq!(format_value(2.5), "2.5");
    assert_eq!(format_value(1.234), "1.23");
}
