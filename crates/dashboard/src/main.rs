// File: crates/dashboard/src/main.rs
// Summary: Fetches crime-log counts from the backend and renders the selected charts to PNGs.

use anyhow::{Context, Result};
use clap::Parser;
use crime_dashboard::crawler::save_records;
use crime_dashboard::{DashboardConfig, PngSurface};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let config = DashboardConfig::parse();

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.log_filter()));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let client = config.client()?;

    if let Some(offset) = config.crawl {
        let crawler = config.crawler(&client);
        let records = crawler
            .crawl_page(offset)
            .await
            .with_context(|| format!("crawling {} failed", crawler.page_url(offset)))?;
        let path = config.crawl_output(offset);
        save_records(&path, &records)?;
        info!(records = records.len(), path = %path.display(), "crawl saved");
        return Ok(());
    }

    let mut surface = PngSurface::new(&config.out_dir, config.render_options());
    info!(base_url = client.base_url(), out_dir = %surface.out_dir().display(), "starting");

    for report in config.selected_reports() {
        report
            .show(&client, &mut surface, config.log)
            .await
            .with_context(|| format!("report `{report}` failed"))?;
    }
    Ok(())
}
