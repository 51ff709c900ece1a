/*
 * visual.rs
 * Copyright (c) 2025 awesome-claude-code maintainers
 *
 * The illustrated "extra" style.
 */

//! The illustrated "extra" style.
//!
//! Headings, table-of-contents rows, resource names and separators are SVG
//! images with dark and light variants. SVGs that depend on catalog content
//! (section headers, subsection headers, name badges) are regenerated into
//! `assets/` on every render; static frames are only written when missing.
//!
//! Headings set explicit ids, computed with the extra-dash anchor rule and
//! no icon suffix, so links from other pages resolve the same way.

use std::path::PathBuf;

use readme_catalog::{Category, Resource};

use crate::anchor::{sanitize_filename_from_anchor, toc_anchor};
use crate::asset_writer::{TOC_HEADER_LIGHT, category_svg_filename, light_toc_filename, subcategory_svg_filename};
use crate::assets::asset_path_token;
use crate::context::RenderContext;
use crate::error::Result;
use crate::github::parse_github_url;
use crate::layout::ALTERNATIVES_DIR;
use crate::style::StyleGenerator;
use crate::styles::shared::{BACK_TO_TOP_ANCHOR, github_stats_url};
use crate::svg::DescBoxPosition;

const STATS_THEME: &str = "&hide_border=true&bg_color=00000000&icon_color=FF0000&text_color=FF0000";

#[derive(Debug, Clone, Copy, Default)]
pub struct VisualStyle;

/// `<picture>` with dark and light sources, indented the way every block uses it.
fn picture(dark: &str, light: &str, img_attrs: &str) -> Vec<String> {
    vec![
        "  <picture>".to_string(),
        format!(
            "    <source media=\"(prefers-color-scheme: dark)\" srcset=\"{}\">",
            asset_path_token(dark)
        ),
        format!(
            "    <source media=\"(prefers-color-scheme: light)\" srcset=\"{}\">",
            asset_path_token(light)
        ),
        format!("    <img src=\"{}\" {img_attrs}>", asset_path_token(light)),
        "  </picture>".to_string(),
    ]
}

fn centered_picture(dark: &str, light: &str, img_attrs: &str) -> Vec<String> {
    let mut lines = vec!["<div align=\"center\">".to_string()];
    lines.extend(picture(dark, light, img_attrs));
    lines.push("</div>".to_string());
    lines
}

fn toc_row(href: &str, dark: &str, alt: &str) -> Vec<String> {
    let mut lines = vec![
        "<div style=\"height:40px;width:400px;overflow:hidden;display:block;\">".to_string(),
        format!("<a href=\"#{href}\">"),
    ];
    lines.extend(picture(
        dark,
        &light_toc_filename(dark),
        &format!("alt=\"{alt}\" height=\"40\" style=\"height:40px;max-width:none;\""),
    ));
    lines.push("</a>".to_string());
    lines.push("</div>".to_string());
    lines
}

impl VisualStyle {
    fn entry(&self, resource: &Resource, ctx: &RenderContext<'_>, include_separator: bool) -> Result<String> {
        let link = resource.primary_link.trim();
        let badge = ctx.assets.resource_badge(&resource.display_name, resource.author())?;

        let mut entry = format!(
            "<a href=\"{link}\"><img src=\"{}\" alt=\"{}\"></a>",
            asset_path_token(&badge),
            resource.display_name
        );

        let removed = resource.is_removed_from_origin();
        let description = resource.summary();
        if !description.is_empty() {
            entry.push_str(&format!("  \n_{description}_"));
            if removed {
                entry.push('*');
            }
        }
        if removed {
            entry.push_str("  \n<sub>* Removed from origin</sub>");
        }

        if !link.is_empty() && !removed {
            if let Some(repo) = parse_github_url(link) {
                entry.push_str(&format!(
                    "  \n![GitHub Stats for {}]({}{STATS_THEME})",
                    repo.repo,
                    github_stats_url(&repo)
                ));
            }
        }

        if include_separator {
            let separator = ctx.assets.entry_separator()?;
            entry.push_str(&format!(
                "\n\n<div align=\"center\"><img src=\"{}\" alt=\"\"></div>\n",
                asset_path_token(separator)
            ));
        }
        Ok(entry)
    }
}

impl StyleGenerator for VisualStyle {
    fn style_id(&self) -> &str {
        "extra"
    }

    fn template_file(&self) -> &str {
        "README_EXTRA.template.md"
    }

    fn preferred_output_path(&self) -> PathBuf {
        PathBuf::from(ALTERNATIVES_DIR).join("README_EXTRA.md")
    }

    fn format_entry(&self, resource: &Resource, ctx: &RenderContext<'_>) -> Result<String> {
        self.entry(resource, ctx, true)
    }

    fn render_toc(&self, ctx: &RenderContext<'_>) -> Result<String> {
        let header = format!(
            "<!-- Directory Tree Terminal - Theme Adaptive -->
<picture>
  <source media=\"(prefers-color-scheme: dark)\" srcset=\"{dark}\">
  <source media=\"(prefers-color-scheme: light)\" srcset=\"{light}\">
  <img src=\"{light}\" alt=\"Directory Listing\" height=\"48\" style=\"height:48px;max-width:none;\">
</picture>",
            dark = asset_path_token("toc-header.svg"),
            light = asset_path_token(TOC_HEADER_LIGHT),
        );

        let mut lines = vec![
            "<div style=\"overflow-x:auto;white-space:nowrap;text-align:left;\">".to_string(),
            format!("<div style=\"height:48px;width:400px;overflow:hidden;display:block;\">{header}</div>"),
        ];

        for category in ctx.categories {
            if !ctx.category_has_resources(category) {
                continue;
            }
            let anchor = toc_anchor(&category.name, None, true);
            lines.extend(toc_row(&anchor, &category_svg_filename(&category.id), &category.name));

            for group in ctx.section_groups(category) {
                let Some(sub) = group.subcategory else {
                    continue;
                };
                let sub_anchor = ctx.general_map.subcategory_id(&category.id, &sub.name);
                lines.extend(toc_row(&sub_anchor, &subcategory_svg_filename(&sub.id), &sub.name));
            }
        }

        lines.push("</div>".to_string());
        Ok(lines.join("\n").trim().to_string())
    }

    fn render_weekly_additions(&self, ctx: &RenderContext<'_>) -> Result<String> {
        let mut lines = centered_picture(
            "latest-additions-header.svg",
            "latest-additions-header-light.svg",
            "alt=\"LATEST ADDITIONS\"",
        );
        lines.push(String::new());

        for resource in ctx.latest_additions() {
            lines.push(self.entry(resource, ctx, false)?);
            lines.push(String::new());
        }
        Ok(format!("{}\n", lines.join("\n").trim_end()))
    }

    fn render_category_section(
        &self,
        category: &Category,
        index: usize,
        ctx: &RenderContext<'_>,
    ) -> Result<String> {
        let (dark_divider, light_divider) = ctx.assets.section_divider(index % 3 + 1)?;
        let mut lines = centered_picture(
            &dark_divider,
            &light_divider,
            "alt=\"\" width=\"100%\" style=\"max-width: 800px;\"",
        );
        lines.push(String::new());

        let anchor = toc_anchor(&category.name, None, true);
        let display_title = if category.id == "workflows" {
            "Workflows & Guides"
        } else {
            category.name.as_str()
        };
        let section_number = format!("{:02}", index + 1);
        let (dark_header, light_header) =
            ctx.assets
                .category_headers(&category.id, display_title, &section_number, category.icon())?;

        lines.push(format!("<h2 id=\"{anchor}\">"));
        lines.extend(centered_picture(
            &dark_header,
            &light_header,
            &format!("alt=\"{}\" style=\"max-width: 600px;\"", category.name),
        ));
        lines.push("</h2>".to_string());
        lines.push(format!(
            "<div align=\"right\"><a href=\"{BACK_TO_TOP_ANCHOR}\">🔝 Back to top</a></div>"
        ));
        lines.push(String::new());

        let description = category.description.trim();
        if !description.is_empty() {
            let top = ctx.assets.desc_box(DescBoxPosition::Top)?;
            let bottom = ctx.assets.desc_box(DescBoxPosition::Bottom)?;
            let frame_attrs = "alt=\"\" width=\"100%\" style=\"max-width: 900px;\"";

            lines.push(String::new());
            lines.extend(centered_picture("desc-box-top.svg", &top, frame_attrs));
            lines.push(format!("<h3 id='{anchor}' align='center'>{description}</h3>"));
            lines.extend(centered_picture("desc-box-bottom.svg", &bottom, frame_attrs));
        }

        for group in ctx.section_groups(category) {
            lines.push(String::new());
            match group.subcategory {
                Some(sub) => {
                    let sub_anchor = ctx.general_map.subcategory_id(&category.id, &sub.name);
                    let filename = format!("subheader_{}.svg", sanitize_filename_from_anchor(&sub_anchor));
                    let filename = ctx.assets.subheader(&sub.name, &filename)?;

                    lines.push(format!("<details open id=\"{sub_anchor}\">"));
                    lines.push(format!(
                        "<summary><span><picture><img src=\"{}\" alt=\"{}\" align=\"absmiddle\"></picture></span></summary>",
                        asset_path_token(&filename),
                        sub.name
                    ));
                    lines.push(String::new());
                    for resource in group.resources {
                        lines.push(self.format_entry(resource, ctx)?);
                        lines.push(String::new());
                    }
                    lines.push("</details>".to_string());
                }
                None => {
                    for resource in group.resources {
                        lines.push(self.format_entry(resource, ctx)?);
                        lines.push(String::new());
                    }
                }
            }
        }

        Ok(format!("{}\n", lines.join("\n").trim_end()))
    }

    fn render_ticker(&self) -> String {
        format!(
            "<div align=\"center\">

<br />

<picture>
  <source media=\"(prefers-color-scheme: dark)\" srcset=\"{dark}\">
  <source media=\"(prefers-color-scheme: light)\" srcset=\"{light}\">
  <img src=\"{light}\" alt=\"Featured Claude Code Projects\" width=\"100%\">
</picture>

</div>",
            dark = asset_path_token("repo-ticker.svg"),
            light = asset_path_token("repo-ticker-light.svg"),
        )
    }
}
