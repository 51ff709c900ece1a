//! `readme-gen generate`: the full run.

use std::path::PathBuf;

use anyhow::{Context, Result};
use readme_render::{ReadmeConfig, ReadmePipeline, RenderSession};
use tracing::info;

use super::resolve_layout;

#[derive(Debug)]
pub struct GenerateArgs {
    pub repo_root: Option<PathBuf>,
    /// Replaces `readme.root_style` from the config file
    pub root_style: Option<String>,
}

pub fn execute(args: GenerateArgs) -> Result<()> {
    let layout = resolve_layout(args.repo_root)?;
    let mut config = ReadmeConfig::load(&layout.config_file()).context("Failed to load configuration")?;
    if let Some(style) = args.root_style {
        config = config.with_root_style(style);
    }

    let pipeline = ReadmePipeline::new(RenderSession::new(layout, config));
    let report = pipeline.run().context("README generation failed")?;

    for generated in &report.reports {
        info!(
            style = %generated.style_id,
            resources = generated.rendered_count,
            "Wrote {}",
            generated.output_path.display()
        );
    }
    let backups = report.backups().count();
    if backups > 0 {
        info!(
            count = backups,
            dir = %pipeline.session().backups().dir().display(),
            "Backed up previous versions"
        );
    }
    Ok(())
}
