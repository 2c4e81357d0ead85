// File: crates/dashboard/src/surface.rs
// Summary: Display surfaces: named regions that charts are drawn into.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chart_core::{Chart, RenderOptions};
use tracing::info;

/// A place charts are drawn into, addressed by region id.
/// Drawing a region replaces whatever it showed before.
pub trait DisplaySurface {
    fn draw(&mut self, region: &str, chart: &Chart) -> Result<()>;
}

/// Writes each region to `<out_dir>/<region>.png`.
pub struct PngSurface {
    out_dir: PathBuf,
    render: RenderOptions,
}

impl PngSurface {
    pub fn new(out_dir: impl Into<PathBuf>, render: RenderOptions) -> Self {
        Self { out_dir: out_dir.into(), render }
    }

    pub fn out_dir(&self) -> &Path {
        &self.out_dir
    }

    pub fn region_path(&self, region: &str) -> PathBuf {
        self.out_dir.join(format!("{region}.png"))
    }
}

impl DisplaySurface for PngSurface {
    fn draw(&mut self, region: &str, chart: &Chart) -> Result<()> {
        let path = self.region_path(region);
        chart
            .render_to_png(&self.render, &path)
            .with_context(|| format!("writing {}", path.display()))?;
        info!(region, path = %path.display(), "chart written");
        Ok(())
    }
}
