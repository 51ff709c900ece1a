/*
 * generate.rs
 * Copyright (c) 2025 awesome-claude-code maintainers
 *
 * Generation of a single README document.
 */

//! Generation of a single README document.
//!
//! [`generate`] runs the whole flow for one style and one output file:
//!
//! 1. Load overrides, active resources, the taxonomy, announcements and footer
//! 2. Build a fresh [`RenderContext`]
//! 3. Let the style fill its template
//! 4. Prepend the generated-file header and resolve asset tokens for the output location
//! 5. Back up the existing file, then replace it atomically

use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

use regex::Regex;

use crate::assets::{ensure_generated_header, resolve_asset_tokens};
use crate::context::RenderContext;
use crate::error::{RenderError, Result};
use crate::session::RenderSession;
use crate::style::StyleGenerator;
use crate::styles::shared::{BACK_TO_TOP_ANCHOR, announcements_markdown};

static TOC_LINK_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r##"\]\(#([^)\s]+)\)|href="#([^"]+)""##).expect("valid TOC link regex")
});

/// Outcome of one successful generation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationReport {
    pub style_id: String,
    /// Number of resources the document reports on
    pub rendered_count: usize,
    /// Backup of the previous version, when there was one
    pub backup_path: Option<PathBuf>,
    pub output_path: PathBuf,
}

fn load_footer(path: &Path) -> Result<String> {
    if !path.exists() {
        tracing::warn!(path = %path.display(), "Footer template not found, leaving footer empty");
        return Ok(String::new());
    }
    std::fs::read_to_string(path).map_err(|e| RenderError::io(path, e))
}

/// Load the catalog and build a fresh [`RenderContext`] for one document.
pub fn build_context(session: &RenderSession) -> Result<RenderContext<'_>> {
    let layout = session.layout();
    let sources = session.sources();
    let overrides = sources.overrides()?;
    let resources = sources.active_resources(&overrides)?;
    let taxonomy = sources.taxonomy()?;
    let announcements = announcements_markdown(&sources.announcements()?);
    let footer = load_footer(&layout.footer_template())?;

    let unfiled = resources
        .iter()
        .filter(|r| taxonomy.category_by_name(&r.category).is_none())
        .count();
    if unfiled > 0 {
        tracing::debug!(count = unfiled, "Resources outside the taxonomy are not listed in sections");
    }

    Ok(
        RenderContext::new(taxonomy.categories(), resources, layout, session.config(), session.today())
            .with_announcements(announcements)
            .with_footer(footer),
    )
}

/// Anchors the style's table of contents links to, in document order.
pub fn toc_anchors(generator: &dyn StyleGenerator, session: &RenderSession) -> Result<Vec<String>> {
    let ctx = build_context(session)?;
    let toc = generator.render_toc(&ctx)?;
    Ok(TOC_LINK_PATTERN
        .captures_iter(&toc)
        .filter_map(|caps| caps.get(1).or_else(|| caps.get(2)))
        .map(|m| m.as_str())
        .filter(|anchor| *anchor != BACK_TO_TOP_ANCHOR.trim_start_matches('#'))
        .map(str::to_string)
        .collect())
}

/// Render `generator` and write the result.
///
/// `output_path` is relative to the repository root (absolute paths are
/// used as given); `None` uses the style's preferred output path.
pub fn generate(
    generator: &dyn StyleGenerator,
    session: &RenderSession,
    output_path: Option<&Path>,
) -> Result<GenerationReport> {
    let layout = session.layout();
    let output_path = match output_path {
        Some(path) => layout.resolve(path),
        None => layout.resolve(generator.preferred_output_path()),
    };
    let style_id = generator.style_id().to_string();
    tracing::debug!(style = %style_id, path = %output_path.display(), "Generating README");

    let ctx = build_context(session)?;
    let template = generator.load_template(layout)?;
    let document = generator.render_document(&template, &ctx, &output_path)?;
    let content = resolve_asset_tokens(
        &ensure_generated_header(&document.content),
        &output_path,
        layout.root(),
    );

    let backup_path = write_document(&output_path, &content, session)?;
    tracing::info!(
        style = %style_id,
        path = %output_path.display(),
        resources = document.rendered_count,
        "Generated README"
    );

    Ok(GenerationReport {
        style_id,
        rendered_count: document.rendered_count,
        backup_path,
        output_path,
    })
}

/// Back up `path`, then replace it through a temporary file in the same directory.
fn write_document(path: &Path, content: &str, session: &RenderSession) -> Result<Option<PathBuf>> {
    let parent = path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));
    std::fs::create_dir_all(parent).map_err(|e| RenderError::io(parent, e))?;

    let backup = session.backups().backup(path)?;
    let write_error = |source: std::io::Error| RenderError::Write {
        path: path.to_path_buf(),
        backup: backup.clone(),
        source,
    };

    let mut temp = tempfile::NamedTempFile::new_in(parent).map_err(write_error)?;
    temp.write_all(content.as_bytes()).map_err(write_error)?;
    temp.persist(path).map_err(|e| write_error(e.error))?;

    if let Some(backup) = &backup {
        tracing::debug!(path = %path.display(), backup = %backup.display(), "Replaced existing file");
    }
    Ok(backup)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backup::BackupStore;
    use crate::config::ReadmeConfig;
    use crate::layout::RepoLayout;
    use chrono::NaiveDate;
    use tempfile::TempDir;

    #[test]
    fn test_write_document_backs_up_previous_version() {
        let temp = TempDir::new().unwrap();
        let layout = RepoLayout::new(temp.path());
        let captured = NaiveDate::from_ymd_opt(2025, 1, 2)
            .and_then(|d| d.and_hms_opt(3, 4, 5))
            .unwrap();
        let session = RenderSession::new(layout.clone(), ReadmeConfig::default())
            .with_backups(BackupStore::at(layout.backup_dir(), captured));

        let path = temp.path().join("nested/README.md");
        assert_eq!(write_document(&path, "first", &session).unwrap(), None);
        let backup = write_document(&path, "second", &session).unwrap().unwrap();

        assert_eq!(std::fs::read_to_string(&path).unwrap(), "second");
        assert_eq!(std::fs::read_to_string(&backup).unwrap(), "first");
        assert!(backup.ends_with("README.md.20250102_030405-0.bak"));
    }

    #[test]
    fn test_missing_footer_is_empty() {
        let temp = TempDir::new().unwrap();
        assert_eq!(load_footer(&temp.path().join("footer.template.md")).unwrap(), "");
    }
}
