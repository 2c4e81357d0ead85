// File: crates/dashboard/src/config.rs
// Summary: Command-line / environment configuration for the dashboard binary.

use std::path::PathBuf;
use std::time::Duration;

use chart_core::{theme, RenderOptions};
use clap::Parser;

use crate::breakdown::LogKind;
use crate::client::StatsClient;
use crate::crawler::{self, LogCrawler};
use crate::error::FetchError;
use crate::report::Report;

#[derive(Parser, Debug, Clone)]
#[command(name = "crime-dashboard")]
#[command(about = "Fetch crime-log counts and render them as charts")]
#[command(version)]
pub struct DashboardConfig {
    /// Backend base URL
    #[arg(long, env = "CRIME_STATS_URL", default_value = "http://localhost:5000")]
    pub base_url: String,

    /// Directory the chart PNGs are written to
    #[arg(short, long, default_value = "target/out")]
    pub out_dir: PathBuf,

    /// Charts to draw: total, by-month, by-year, by-nature (repeatable)
    #[arg(short, long = "report", default_values_t = [Report::Total])]
    pub reports: Vec<Report>,

    /// Draw every chart
    #[arg(long, conflicts_with = "reports")]
    pub all: bool,

    /// Log the breakdown charts are drawn from: criminal or non-criminal
    #[arg(long, default_value_t = LogKind::Criminal)]
    pub log: LogKind,

    /// Color theme (dark, light, high-contrast-dark)
    #[arg(long, default_value = "dark")]
    pub theme: String,

    /// Image width in pixels
    #[arg(long, default_value_t = chart_core::types::WIDTH)]
    pub width: i32,

    /// Image height in pixels
    #[arg(long, default_value_t = chart_core::types::HEIGHT)]
    pub height: i32,

    /// Request timeout in seconds (0 waits forever)
    #[arg(long, default_value_t = 30)]
    pub timeout_secs: u64,

    /// Scrape the crime-log page at this offset to `<out-dir>/crimelog-<OFFSET>.json` instead of drawing charts
    #[arg(long, value_name = "OFFSET", conflicts_with_all = ["reports", "all"])]
    pub crawl: Option<u32>,

    /// Crime-log listing read by `--crawl`
    #[arg(long, default_value = crawler::CRIMINAL_LOGS_URL)]
    pub crawl_url: String,

    /// Skip all text (axis and point labels)
    #[arg(long)]
    pub no_labels: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}

impl DashboardConfig {
    pub fn timeout(&self) -> Option<Duration> {
        (self.timeout_secs > 0).then(|| Duration::from_secs(self.timeout_secs))
    }

    pub fn client(&self) -> Result<StatsClient, FetchError> {
        StatsClient::with_timeout(self.base_url.clone(), self.timeout())
    }

    /// Crawler sharing the HTTP client (and timeout) of [`Self::client`].
    pub fn crawler(&self, client: &StatsClient) -> LogCrawler {
        LogCrawler::new(self.crawl_url.clone(), client.http().clone())
    }

    pub fn crawl_output(&self, offset: u32) -> PathBuf {
        self.out_dir.join(format!("crimelog-{offset}.json"))
    }

    pub fn render_options(&self) -> RenderOptions {
        RenderOptions {
            width: self.width.max(1),
            height: self.height.max(1),
            theme: theme::find(&self.theme),
            draw_labels: !self.no_labels,
            ..RenderOptions::default()
        }
    }

    /// Reports in the order they will be drawn, duplicates removed.
    pub fn selected_reports(&self) -> Vec<Report> {
        if self.all {
            return Report::ALL.to_vec();
        }
        let mut out = Vec::new();
        for r in &self.reports {
            if !out.contains(r) {
                out.push(*r);
            }
        }
        out
    }

    /// Default tracing filter when `RUST_LOG` is unset.
    pub fn log_filter(&self) -> &'static str {
        if self.verbose { "debug" } else { "info" }
    }
}
