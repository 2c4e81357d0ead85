// File: crates/dashboard/src/report.rs
// Summary: The dashboard's charts as a closed set: fetch, shape and draw each one.

use std::fmt;
use std::str::FromStr;

use chart_core::ChartOptions;
use tracing::{info, instrument};

use crate::breakdown::{BreakdownKind, LogKind};
use crate::client::{StatsClient, TOTAL_ENDPOINT};
use crate::error::DashboardResult;
use crate::render::{breakdown_options, breakdown_region, render_breakdown, render_total, TOTAL_REGION};
use crate::surface::DisplaySurface;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Report {
    Total,
    ByMonth,
    ByYear,
    ByNature,
}

impl Report {
    pub const ALL: [Report; 4] = [Report::Total, Report::ByMonth, Report::ByYear, Report::ByNature];

    fn breakdown_kind(self) -> Option<BreakdownKind> {
        match self {
            Report::Total => None,
            Report::ByMonth => Some(BreakdownKind::Month),
            Report::ByYear => Some(BreakdownKind::Year),
            Report::ByNature => Some(BreakdownKind::Nature),
        }
    }

    pub fn endpoint(self) -> &'static str {
        self.breakdown_kind().map_or(TOTAL_ENDPOINT, BreakdownKind::endpoint)
    }

    pub fn region(self) -> &'static str {
        self.breakdown_kind().map_or(TOTAL_REGION, breakdown_region)
    }

    pub fn default_options(self) -> ChartOptions {
        self.breakdown_kind().map_or_else(ChartOptions::bar, breakdown_options)
    }

    /// Fetch this report's data and draw it. Nothing is drawn if the fetch fails.
    /// `log` only matters for breakdowns; the totals chart shows both logs.
    #[instrument(skip(client, surface), fields(endpoint = self.endpoint()))]
    pub async fn show(
        self,
        client: &StatsClient,
        surface: &mut dyn DisplaySurface,
        log: LogKind,
    ) -> DashboardResult<()> {
        let options = self.default_options();
        match self.breakdown_kind() {
            None => {
                let summary = client.fetch_total().await?;
                info!(
                    non_criminal = summary.non_criminal_count,
                    criminal = summary.criminal_count,
                    "totals fetched"
                );
                render_total(&summary, &options, surface)
            }
            Some(kind) => {
                let breakdown = client.fetch_breakdown(kind).await?;
                info!(buckets = breakdown.buckets(log).len(), %log, "breakdown fetched");
                render_breakdown(&breakdown, log, &options, surface)
            }
        }
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Report::Total => "total",
            Report::ByMonth => "by-month",
            Report::ByYear => "by-year",
            Report::ByNature => "by-nature",
        })
    }
}

impl FromStr for Report {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace('_', "-").as_str() {
            "total" => Ok(Report::Total),
            "by-month" | "month" => Ok(Report::ByMonth),
            "by-year" | "year" => Ok(Report::ByYear),
            "by-nature" | "nature" => Ok(Report::ByNature),
            other => Err(format!("unknown report `{other}` (expected total, by-month, by-year or by-nature)")),
        }
    }
}
