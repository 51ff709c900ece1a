//! `readme-gen style`: render one style to one file.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use readme_render::{FlatStyle, RenderSession, StyleGenerator, StyleRegistry, generate};
use tracing::info;

use super::resolve_layout;

#[derive(Debug)]
pub struct StyleArgs {
    pub style: String,
    pub repo_root: Option<PathBuf>,
    pub output: Option<PathBuf>,
    pub category: Option<String>,
    pub sort: Option<String>,
}

pub fn execute(args: StyleArgs) -> Result<()> {
    let generator = resolve_generator(&args)?;
    let layout = resolve_layout(args.repo_root)?;
    let session = RenderSession::open(layout).context("Failed to load configuration")?;

    let report = generate(generator.as_ref(), &session, args.output.as_deref())
        .with_context(|| format!("Failed to generate the {} README", args.style))?;

    info!(
        style = %report.style_id,
        resources = report.rendered_count,
        "Wrote {}",
        report.output_path.display()
    );
    if let Some(backup) = &report.backup_path {
        info!("Previous version saved to {}", backup.display());
    }
    Ok(())
}

fn resolve_generator(args: &StyleArgs) -> Result<Arc<dyn StyleGenerator>> {
    if args.style == "flat" {
        let category = args.category.as_deref().unwrap_or("all");
        let sort = args.sort.as_deref().unwrap_or("az");
        return Ok(Arc::new(FlatStyle::from_slugs(category, sort)?));
    }
    if args.category.is_some() || args.sort.is_some() {
        anyhow::bail!("--category and --sort only apply to the flat style");
    }
    let registry = StyleRegistry::new();
    registry.require(&args.style).with_context(|| {
        format!("Available styles: {}", registry.style_ids().join(", "))
    })
}
