//! Command implementations for readme-gen
//!
//! Each command resolves the repository, then delegates to readme-render.

use std::path::PathBuf;

use anyhow::{Context, Result};
use readme_render::RepoLayout;

pub mod anchors;
pub mod generate;
pub mod style;
pub mod toc_assets;

/// Layout for `--repo-root`, or the nearest repository above the working directory.
pub fn resolve_layout(repo_root: Option<PathBuf>) -> Result<RepoLayout> {
    if let Some(root) = repo_root {
        if !root.is_dir() {
            anyhow::bail!("Repository root does not exist: {}", root.display());
        }
        return Ok(RepoLayout::new(root));
    }
    let cwd = std::env::current_dir().context("Failed to get current directory")?;
    RepoLayout::discover(&cwd).with_context(|| {
        format!(
            "No repository found at or above {} (looked for acc-config.yaml or THE_RESOURCES_TABLE.csv)",
            cwd.display()
        )
    })
}
