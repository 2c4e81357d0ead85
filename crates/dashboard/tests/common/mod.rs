// File: crates/dashboard/tests/common/mod.rs
// Purpose: Shared helpers: a throwaway backend on a loopback port and a surface that records draws.

#![allow(dead_code)]

use std::collections::BTreeMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use axum::Router;
use chart_core::Chart;
use crime_dashboard::DisplaySurface;

/// Serve `router` on 127.0.0.1 with an OS-assigned port; returns the base URL.
pub async fn serve(router: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.expect("bind loopback");
    let addr = listener.local_addr().expect("local addr");
    tokio::spawn(async move {
        axum::serve(listener, router).await.expect("mock backend");
    });
    format!("http://{addr}")
}

/// A URL nothing listens on.
pub async fn dead_url() -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.expect("bind loopback");
    let addr = listener.local_addr().expect("local addr");
    drop(listener);
    format!("http://{addr}")
}

/// Request counter shared with route handlers.
#[derive(Clone, Default)]
pub struct Hits(Arc<AtomicUsize>);

impl Hits {
    pub fn bump(&self) { self.0.fetch_add(1, Ordering::SeqCst); }
    pub fn get(&self) -> usize { self.0.load(Ordering::SeqCst) }
}

/// Keeps the last chart drawn per region, plus a draw count.
#[derive(Default)]
pub struct RecordingSurface {
    pub regions: BTreeMap<String, Chart>,
    pub draws: usize,
}

impl RecordingSurface {
    pub fn region(&self, id: &str) -> Option<&Chart> {
        self.regions.get(id)
    }
}

impl DisplaySurface for RecordingSurface {
    fn draw(&mut self, region: &str, chart: &Chart) -> anyhow::Result<()> {
        self.draws += 1;
        self.regions.insert(region.to_string(), chart.clone());
        Ok(())
    }
}
