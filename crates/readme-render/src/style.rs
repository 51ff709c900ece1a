/*
 * style.rs
 * Copyright (c) 2025 awesome-claude-code maintainers
 *
 * StyleGenerator trait definition.
 */

//! StyleGenerator trait for README styles.

use std::path::{Path, PathBuf};

use readme_catalog::{Category, Resource};

use crate::context::RenderContext;
use crate::error::{RenderError, Result};
use crate::layout::RepoLayout;
use crate::styles::shared::style_selector;

/// Section separator inside `{{BODY_SECTIONS}}`.
pub const SECTION_SEPARATOR: &str = "\n<br>\n\n";

/// A README style: how entries, the table of contents and sections look.
///
/// The generation flow itself lives in [`crate::generate::generate`]; a style
/// only turns catalog data into markup. Markup may contain asset tokens
/// (`{{ASSET_PATH('x.svg')}}`) which are resolved against the output location
/// after the document is assembled.
///
/// # Implementation Notes
///
/// - Every method receives the same [`RenderContext`] for one generation.
///   Per-run counters (e.g. repeated "General" anchors) must be local to a
///   single call.
/// - Styles that draw SVGs write them through `ctx.assets`.
/// - Styles with a different placeholder set override
///   [`render_document`](StyleGenerator::render_document).
pub trait StyleGenerator: Send + Sync {
    /// Identifier used in configuration and the style selector
    /// (e.g. "extra", "classic", "awesome", "flat").
    fn style_id(&self) -> &str;

    /// Template file name inside `templates/`.
    fn template_file(&self) -> &str;

    /// Repository-relative path this style renders to when no output path
    /// is given. Never the root `README.md`.
    fn preferred_output_path(&self) -> PathBuf;

    /// Markup for a single resource.
    fn format_entry(&self, resource: &Resource, ctx: &RenderContext<'_>) -> Result<String>;

    /// The table of contents.
    fn render_toc(&self, ctx: &RenderContext<'_>) -> Result<String>;

    /// The "latest additions" block.
    fn render_weekly_additions(&self, ctx: &RenderContext<'_>) -> Result<String>;

    /// One category section. `index` is the position of the category in
    /// taxonomy order, counting from zero.
    fn render_category_section(
        &self,
        category: &Category,
        index: usize,
        ctx: &RenderContext<'_>,
    ) -> Result<String>;

    /// Featured-projects ticker. Default: none.
    fn render_ticker(&self) -> String {
        String::new()
    }

    /// Banner image markup for a document written to `output_path`. Default: none.
    fn render_banner(&self, _output_path: &Path, _ctx: &RenderContext<'_>) -> String {
        String::new()
    }

    /// Read this style's template.
    ///
    /// A missing template is an error unless a style provides a fallback.
    fn load_template(&self, layout: &RepoLayout) -> Result<String> {
        let path = layout.template(self.template_file());
        std::fs::read_to_string(&path).map_err(|e| RenderError::io(&path, e))
    }

    /// Fill the template's placeholders.
    ///
    /// The default handles `ANNOUNCEMENTS`, `WEEKLY_SECTION`,
    /// `TABLE_OF_CONTENTS`, `BODY_SECTIONS`, `FOOTER`, `STYLE_SELECTOR`,
    /// `REPO_TICKER` and `BANNER_IMAGE`. Categories without resources are
    /// left out of the body.
    fn render_document(
        &self,
        template: &str,
        ctx: &RenderContext<'_>,
        output_path: &Path,
    ) -> Result<RenderedDocument> {
        let toc = self.render_toc(ctx)?;
        let weekly = self.render_weekly_additions(ctx)?;

        let mut sections = Vec::new();
        for (index, category) in ctx.categories.iter().enumerate() {
            if !ctx.category_has_resources(category) {
                tracing::debug!(category = %category.name, "Skipping empty category");
                continue;
            }
            sections.push(self.render_category_section(category, index, ctx)?);
        }

        let selector = style_selector(self.style_id(), output_path, ctx.layout.root(), ctx.config);
        let content = template
            .replace("{{ANNOUNCEMENTS}}", &ctx.announcements)
            .replace("{{WEEKLY_SECTION}}", &weekly)
            .replace("{{TABLE_OF_CONTENTS}}", &toc)
            .replace("{{BODY_SECTIONS}}", &sections.join(SECTION_SEPARATOR))
            .replace("{{FOOTER}}", &ctx.footer)
            .replace("{{STYLE_SELECTOR}}", &selector)
            .replace("{{REPO_TICKER}}", &self.render_ticker())
            .replace("{{BANNER_IMAGE}}", &self.render_banner(output_path, ctx));

        Ok(RenderedDocument {
            content,
            rendered_count: ctx.listed_resource_count(),
        })
    }
}

/// A filled-in template, before the generated header and asset paths are applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedDocument {
    pub content: String,
    /// Number of resources the document reports on
    pub rendered_count: usize,
}

/// A planned output: which style renders where.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyleDocument {
    pub style_id: String,
    pub template_file: String,
    /// Repository-relative output path
    pub output_path: PathBuf,
}

impl StyleDocument {
    pub fn for_generator(generator: &dyn StyleGenerator, output_path: PathBuf) -> Self {
        Self {
            style_id: generator.style_id().to_string(),
            template_file: generator.template_file().to_string(),
            output_path,
        }
    }

    /// Number of directories between the repository root and the output.
    pub fn depth(&self) -> usize {
        self.output_path.components().count().saturating_sub(1)
    }
}
