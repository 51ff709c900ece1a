/*
 * asset_writer.rs
 * Copyright (c) 2025 awesome-claude-code maintainers
 *
 * Writes generated SVG assets into the repository's assets directory.
 */

use std::path::{Path, PathBuf};

use readme_catalog::Category;

use crate::anchor::category_dir_name;
use crate::error::{RenderError, Result};
use crate::styles::flat::{FlatCategory, SortMode};
use crate::svg;

/// Suffix of the light-mode twin of a TOC SVG.
const LIGHT_TOC_SUFFIX: &str = "-light-anim-scanline.svg";

/// Light-mode TOC header.
pub const TOC_HEADER_LIGHT: &str = "toc-header-light-anim-scanline.svg";

/// Separator between illustrated entries.
pub const ENTRY_SEPARATOR: &str = "entry-separator-light-animated.svg";

/// Dark TOC row file for a category.
pub fn category_svg_filename(category_id: &str) -> String {
    let mapped = match category_id {
        "skills" => "toc-row-skills.svg",
        "workflows" => "toc-row-workflows.svg",
        "tooling" => "toc-row-tooling.svg",
        "statusline" => "toc-row-statusline.svg",
        "hooks" => "toc-row-custom.svg",
        "slash-commands" => "toc-row-commands.svg",
        "claude-md-files" => "toc-row-config.svg",
        "alternative-clients" => "toc-row-clients.svg",
        "official-documentation" => "toc-row-docs.svg",
        other => return format!("toc-row-{other}.svg"),
    };
    mapped.to_string()
}

/// Dark TOC row file for a subcategory.
pub fn subcategory_svg_filename(subcategory_id: &str) -> String {
    let mapped = match subcategory_id {
        "general" => "toc-sub-general",
        "ide-integrations" => "toc-sub-ide",
        "usage-monitors" => "toc-sub-monitors",
        "orchestrators" => "toc-sub-orchestrators",
        "config-managers" => "toc-sub-config-managers",
        "version-control-git" => "toc-sub-git",
        "code-analysis-testing" => "toc-sub-code-analysis",
        "context-loading-priming" => "toc-sub-context",
        "documentation-changelogs" => "toc-sub-documentation",
        "ci-deployment" => "toc-sub-ci",
        "project-task-management" => "toc-sub-project-mgmt",
        "miscellaneous" => "toc-sub-misc",
        "language-specific" => "toc-sub-language",
        "domain-specific" => "toc-sub-domain",
        "project-scaffolding-mcp" => "toc-sub-scaffolding",
        "ralph-wiggum" => "toc-sub-ralph-wiggum",
        other => return format!("toc-sub-{other}.svg"),
    };
    format!("{mapped}.svg")
}

/// Light-mode twin of a dark TOC SVG file name.
pub fn light_toc_filename(dark: &str) -> String {
    match dark.strip_suffix(".svg") {
        Some(stem) => format!("{stem}{LIGHT_TOC_SUFFIX}"),
        None => format!("{dark}{LIGHT_TOC_SUFFIX}"),
    }
}

/// File name of a resource's name badge: `badge-{slug}.svg`.
pub fn resource_badge_filename(display_name: &str) -> String {
    let mut slug = String::with_capacity(display_name.len());
    for c in display_name.to_lowercase().chars() {
        if c.is_ascii_alphanumeric() {
            slug.push(c);
        } else if !slug.ends_with('-') {
            slug.push('-');
        }
    }
    format!("badge-{}.svg", slug.trim_matches('-'))
}

/// Dark and light header files for a category section.
pub fn category_header_filenames(category_id: &str) -> (String, String) {
    let safe_name = category_id.replace('-', "_");
    (
        format!("header_{safe_name}.svg"),
        format!("header_{safe_name}-light-v3.svg"),
    )
}

/// Dark and light section divider files for a divider variant (1 to 3).
pub fn section_divider_filenames(variant: usize) -> (String, String) {
    (
        "section-divider-alt2.svg".to_string(),
        format!("section-divider-light-manual-v{variant}.svg"),
    )
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetWriter {
    assets_dir: PathBuf,
}

impl AssetWriter {
    pub fn new(assets_dir: impl Into<PathBuf>) -> Self {
        Self {
            assets_dir: assets_dir.into(),
        }
    }

    pub fn assets_dir(&self) -> &Path {
        &self.assets_dir
    }

    /// Write `content` to `assets/{filename}`, replacing any existing file.
    pub fn write(&self, filename: &str, content: &str) -> Result<PathBuf> {
        std::fs::create_dir_all(&self.assets_dir).map_err(|e| RenderError::io(&self.assets_dir, e))?;
        let path = self.assets_dir.join(filename);
        std::fs::write(&path, content).map_err(|e| RenderError::io(&path, e))?;
        Ok(path)
    }

    /// Write `content` only when the file does not exist yet.
    ///
    /// Returns `true` when the file was written.
    pub fn write_if_missing(&self, filename: &str, content: &str) -> Result<bool> {
        if self.assets_dir.join(filename).exists() {
            return Ok(false);
        }
        self.write(filename, content)?;
        Ok(true)
    }

    /// Regenerate both header SVGs of a category section.
    pub fn category_headers(
        &self,
        category_id: &str,
        title: &str,
        section_number: &str,
        icon: &str,
    ) -> Result<(String, String)> {
        let (dark, light) = category_header_filenames(category_id);
        self.write(&dark, &svg::render_h2_svg(title, icon))?;
        self.write(&light, &svg::category_header_light_svg(title, section_number))?;
        Ok((dark, light))
    }

    /// Regenerate a subsection header SVG.
    pub fn subheader(&self, text: &str, filename: &str) -> Result<String> {
        self.write(filename, &with_trailing_newline(svg::render_h3_svg(text)))?;
        Ok(filename.to_string())
    }

    /// Regenerate the name badge for a resource and return its file name.
    pub fn resource_badge(&self, display_name: &str, author_name: &str) -> Result<String> {
        let filename = resource_badge_filename(display_name);
        let content = with_trailing_newline(svg::render_resource_badge_svg(display_name, author_name));
        self.write(&filename, &content)?;
        Ok(filename)
    }

    /// Make sure the light divider for `variant` exists.
    pub fn section_divider(&self, variant: usize) -> Result<(String, String)> {
        let (dark, light) = section_divider_filenames(variant);
        self.write_if_missing(&light, svg::section_divider_light_svg(variant))?;
        Ok((dark, light))
    }

    /// Make sure the light description box frame exists.
    pub fn desc_box(&self, position: svg::DescBoxPosition) -> Result<String> {
        let filename = format!("desc-box-{}-light.svg", position.as_str());
        self.write_if_missing(&filename, svg::desc_box_light_svg(position))?;
        Ok(filename)
    }

    /// Make sure the entry separator exists.
    pub fn entry_separator(&self) -> Result<&'static str> {
        self.write_if_missing(ENTRY_SEPARATOR, svg::entry_separator_svg())?;
        Ok(ENTRY_SEPARATOR)
    }

    /// Regenerate the sort and category badges used by the flat lists.
    pub fn flat_badges(&self) -> Result<usize> {
        let mut written = 0;
        for sort in SortMode::ALL {
            self.write(
                &sort.badge_filename(),
                &svg::render_flat_sort_badge_svg(sort.display(), sort.color()),
            )?;
            written += 1;
        }
        for category in FlatCategory::all() {
            self.write(
                &category.badge_filename(),
                &svg::render_flat_category_badge_svg(category.display, category.color, category.badge_width()),
            )?;
            written += 1;
        }
        tracing::debug!(count = written, dir = %self.assets_dir.display(), "Wrote flat list badges");
        Ok(written)
    }

    /// Regenerate every TOC row, subcategory row and the light header from the taxonomy.
    ///
    /// Returns the number of files written.
    pub fn regenerate_toc_assets(&self, categories: &[Category]) -> Result<usize> {
        let mut written = 0;
        for category in categories {
            let label = category_dir_name(&category.name, &category.id);
            let dark = category_svg_filename(&category.id);
            self.write(&dark, &svg::toc_row_svg(&label, &category.description))?;
            self.write(&light_toc_filename(&dark), &svg::toc_row_light_svg(&label))?;
            written += 2;

            for sub in &category.subcategories {
                let dark = subcategory_svg_filename(&sub.id);
                self.write(&dark, &svg::toc_sub_svg(&sub.name))?;
                self.write(&light_toc_filename(&dark), &svg::toc_sub_light_svg(&sub.name))?;
                written += 2;
            }
        }
        self.write(TOC_HEADER_LIGHT, svg::toc_header_light_svg())?;
        written += 1;

        tracing::info!(count = written, dir = %self.assets_dir.display(), "Regenerated TOC assets");
        Ok(written)
    }
}

fn with_trailing_newline(mut content: String) -> String {
    if !content.ends_with('\n') {
        content.push('\n');
    }
    content
}

#[cfg(test)]
mod tests {
    use super::*;
    use readme_catalog::Subcategory;
    use tempfile::TempDir;

    #[test]
    fn test_filename_maps() {
        assert_eq!(category_svg_filename("hooks"), "toc-row-custom.svg");
        assert_eq!(category_svg_filename("output-styles"), "toc-row-output-styles.svg");
        assert_eq!(subcategory_svg_filename("version-control-git"), "toc-sub-git.svg");
        assert_eq!(subcategory_svg_filename("tooling-general"), "toc-sub-tooling-general.svg");
        assert_eq!(light_toc_filename("toc-row-custom.svg"), "toc-row-custom-light-anim-scanline.svg");
    }

    #[test]
    fn test_resource_badge_filename() {
        assert_eq!(resource_badge_filename("Claude Code Router"), "badge-claude-code-router.svg");
        assert_eq!(resource_badge_filename("  CC--Usage (v2)! "), "badge-cc-usage-v2.svg");
        assert_eq!(resource_badge_filename("Über Tool"), "badge-ber-tool.svg");
    }

    #[test]
    fn test_header_and_divider_names() {
        assert_eq!(
            category_header_filenames("slash-commands"),
            (
                "header_slash_commands.svg".to_string(),
                "header_slash_commands-light-v3.svg".to_string()
            )
        );
        assert_eq!(
            section_divider_filenames(2).1,
            "section-divider-light-manual-v2.svg"
        );
    }

    #[test]
    fn test_write_if_missing_keeps_existing() {
        let temp = TempDir::new().unwrap();
        let writer = AssetWriter::new(temp.path().join("assets"));
        assert!(writer.write_if_missing("x.svg", "first").unwrap());
        assert!(!writer.write_if_missing("x.svg", "second").unwrap());
        assert_eq!(std::fs::read_to_string(temp.path().join("assets/x.svg")).unwrap(), "first");
    }

    #[test]
    fn test_entry_separator_written_once() {
        let temp = TempDir::new().unwrap();
        let writer = AssetWriter::new(temp.path());
        std::fs::write(temp.path().join(ENTRY_SEPARATOR), "custom").unwrap();
        assert_eq!(writer.entry_separator().unwrap(), ENTRY_SEPARATOR);
        assert_eq!(std::fs::read_to_string(temp.path().join(ENTRY_SEPARATOR)).unwrap(), "custom");
    }

    #[test]
    fn test_resource_badge_written_with_newline() {
        let temp = TempDir::new().unwrap();
        let writer = AssetWriter::new(temp.path());
        let name = writer.resource_badge("My Tool", "me").unwrap();
        assert_eq!(name, "badge-my-tool.svg");
        let content = std::fs::read_to_string(temp.path().join(name)).unwrap();
        assert!(content.ends_with("</svg>\n"));
    }

    #[test]
    fn test_flat_badges() {
        let temp = TempDir::new().unwrap();
        let writer = AssetWriter::new(temp.path());
        assert_eq!(writer.flat_badges().unwrap(), 15);
        assert!(temp.path().join("badge-sort-releases.svg").exists());
        assert!(temp.path().join("badge-cat-claude-md.svg").exists());
    }

    #[test]
    fn test_regenerate_toc_assets() {
        let temp = TempDir::new().unwrap();
        let writer = AssetWriter::new(temp.path());
        let categories = vec![Category {
            name: "Hooks".to_string(),
            id: "hooks".to_string(),
            prefix: "hook".to_string(),
            icon: Some("🪝".to_string()),
            description: "Lifecycle hooks".to_string(),
            order: 1,
            subcategories: vec![Subcategory {
                name: "General".to_string(),
                id: "general".to_string(),
                description: String::new(),
            }],
        }];

        assert_eq!(writer.regenerate_toc_assets(&categories).unwrap(), 5);
        let row = std::fs::read_to_string(temp.path().join("toc-row-custom.svg")).unwrap();
        assert!(row.contains("HOOKS/"));
        assert!(temp.path().join("toc-row-custom-light-anim-scanline.svg").exists());
        assert!(temp.path().join("toc-sub-general-light-anim-scanline.svg").exists());
        assert!(temp.path().join(TOC_HEADER_LIGHT).exists());
    }
}
