// File: crates/dashboard/src/output.rs
// Summary: Writes the composed page and the per-chart SVG/PNG files into the output directory.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chart_core::{Chart, RenderOptions};
use chart_render_skia::SkiaRenderer;
use tracing::info;

use crate::page::Page;
use crate::settings::OutputFormat;
use crate::state::LoadState;

pub const INDEX_FILE: &str = "index.html";

fn write_file(path: &Path, contents: &[u8]) -> Result<()> {
    std::fs::write(path, contents).with_context(|| format!("writing {}", path.display()))
}

/// Write `index.html` and, when the dataset is ready, one image per chart.
/// Returns every path written.
pub fn write_dashboard(
    out_dir: &Path,
    page: &Page,
    state: &LoadState,
    charts: &[Chart],
    opts: &RenderOptions,
    format: OutputFormat,
) -> Result<Vec<PathBuf>> {
    std::fs::create_dir_all(out_dir).with_context(|| format!("creating {}", out_dir.display()))?;

    let mut written = Vec::new();
    let index = out_dir.join(INDEX_FILE);
    write_file(&index, page.to_html().as_bytes())?;
    written.push(index);

    let Some(dataset) = state.dataset() else {
        return Ok(written);
    };

    if format.svg() {
        for card in page.cards() {
            let path = out_dir.join(format!("{}.svg", card.slug));
            write_file(&path, card.svg.as_bytes())?;
            written.push(path);
        }
    }

    if format.png() {
        let renderer = SkiaRenderer::new();
        for (chart, card) in charts.iter().zip(page.cards()) {
            let path = out_dir.join(format!("{}.png", card.slug));
            renderer
                .render_to_png(chart, dataset, opts, &path)
                .with_context(|| format!("rendering {}", chart.title))?;
            written.push(path);
        }
    }

    info!(dir = %out_dir.display(), files = written.len(), "dashboard written");
    Ok(written)
}
