// File: crates/dashboard/src/lib.rs
// Summary: Crime-log dashboard: fetch count summaries from the backend and draw them as charts.

pub mod breakdown;
pub mod client;
pub mod config;
pub mod crawler;
pub mod error;
mod payload;
pub mod render;
pub mod report;
pub mod summary;
pub mod surface;

pub use breakdown::{Breakdown, BreakdownKind, Bucket, BucketKey, LogKind};
pub use client::StatsClient;
pub use config::DashboardConfig;
pub use crawler::{LogCrawler, LogRecord};
pub use error::{CrawlError, DashboardError, DashboardResult, FetchError, NetworkError, SchemaError};
pub use render::{render_breakdown, render_total, TOTAL_REGION};
pub use report::Report;
pub use summary::CrimeCountSummary;
pub use surface::{DisplaySurface, PngSurface};
