// File: crates/dashboard/src/render.rs
// Summary: Turn fetched records into charts and draw them into their fixed regions.

use chart_core::{Chart, ChartOptions};

use crate::breakdown::{Breakdown, BreakdownKind, LogKind};
use crate::error::{DashboardError, DashboardResult};
use crate::summary::CrimeCountSummary;
use crate::surface::DisplaySurface;

pub const TOTAL_REGION: &str = "chart-crimes-total";
pub const BY_MONTH_REGION: &str = "chart-crimes-by-month";
pub const BY_YEAR_REGION: &str = "chart-crimes-by-year";
pub const BY_NATURE_REGION: &str = "chart-crimes-by-nature";

/// Draw the totals bar chart into `chart-crimes-total`.
pub fn render_total(
    summary: &CrimeCountSummary,
    options: &ChartOptions,
    surface: &mut dyn DisplaySurface,
) -> DashboardResult<()> {
    let chart = Chart::new(summary.to_chart_data(), options.clone());
    surface
        .draw(TOTAL_REGION, &chart)
        .map_err(|e| DashboardError::render(TOTAL_REGION, e))
}

/// Region a breakdown is drawn into.
pub fn breakdown_region(kind: BreakdownKind) -> &'static str {
    match kind {
        BreakdownKind::Month => BY_MONTH_REGION,
        BreakdownKind::Year => BY_YEAR_REGION,
        BreakdownKind::Nature => BY_NATURE_REGION,
    }
}

/// Default options for a breakdown: lines over time, bars per nature.
pub fn breakdown_options(kind: BreakdownKind) -> ChartOptions {
    match kind {
        BreakdownKind::Month | BreakdownKind::Year => ChartOptions::line(),
        BreakdownKind::Nature => ChartOptions::bar(),
    }
}

pub fn render_breakdown(
    breakdown: &Breakdown,
    log: LogKind,
    options: &ChartOptions,
    surface: &mut dyn DisplaySurface,
) -> DashboardResult<()> {
    let region = breakdown_region(breakdown.kind);
    let chart = Chart::new(breakdown.to_chart_data(log), options.clone());
    surface.draw(region, &chart).map_err(|e| DashboardError::render(region, e))
}
