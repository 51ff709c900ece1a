//! `readme-gen toc-assets`: rewrite the TOC and header SVGs.

use std::path::PathBuf;

use anyhow::{Context, Result};
use readme_render::{ReadmePipeline, RenderSession};
use tracing::info;

use super::resolve_layout;

pub fn execute(repo_root: Option<PathBuf>) -> Result<()> {
    let layout = resolve_layout(repo_root)?;
    let assets_dir = layout.assets_dir();
    let pipeline = ReadmePipeline::new(RenderSession::open(layout)?);

    let written = pipeline
        .regenerate_toc_assets()
        .context("Failed to regenerate TOC assets")?;
    info!(count = written, "Wrote TOC assets to {}", assets_dir.display());
    Ok(())
}
