//! `readme-gen anchors`: print table-of-contents anchors.

use std::path::PathBuf;

use anyhow::{Context, Result};
use readme_render::{RenderSession, StyleRegistry, toc_anchors};

use super::resolve_layout;

pub fn execute(repo_root: Option<PathBuf>, style: &str) -> Result<()> {
    let generator = StyleRegistry::new().require(style)?;
    let session = RenderSession::open(resolve_layout(repo_root)?)?;

    let anchors = toc_anchors(generator.as_ref(), &session)
        .with_context(|| format!("Failed to render the {style} table of contents"))?;
    for anchor in anchors {
        println!("#{anchor}");
    }
    Ok(())
}
