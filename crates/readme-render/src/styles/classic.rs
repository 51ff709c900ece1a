//! Collapsible markdown with GitHub stats cards.
//!
//! Every heading carries a back-to-top link, so anchors use the extra-dash
//! rule throughout (`has_back_to_top = true`).

use std::path::PathBuf;

use readme_catalog::{Category, Resource};

use crate::anchor::{subcategory_anchor, toc_anchor};
use crate::context::RenderContext;
use crate::error::Result;
use crate::github::parse_github_url;
use crate::layout::ALTERNATIVES_DIR;
use crate::style::StyleGenerator;
use crate::styles::shared::{BACK_TO_TOP_ANCHOR, github_stats_url};

#[derive(Debug, Clone, Copy, Default)]
pub struct ClassicStyle;

/// A classic entry: backticked name, author, license and a stats card.
pub fn classic_entry(resource: &Resource) -> String {
    let link = resource.primary_link.trim();
    let mut entry = format!("[`{}`]({link})", resource.display_name);

    let author = resource.author();
    if !author.is_empty() {
        match resource.author_url() {
            "" => entry.push_str(&format!(" &nbsp; by &nbsp; {author}")),
            url => entry.push_str(&format!(" &nbsp; by &nbsp; [{author}]({url})")),
        }
    }
    entry.push_str("  ");

    if let Some(license) = resource.known_license() {
        entry.push_str(&format!("&nbsp;&nbsp;⚖️&nbsp;&nbsp;{license}"));
    }

    let removed = resource.is_removed_from_origin();
    let description = resource.summary();
    if !description.is_empty() {
        entry.push_str("  \n");
        entry.push_str(description);
        if removed {
            entry.push_str("*  ");
        }
    }
    if removed {
        entry.push_str("\n<sub>* Removed from origin</sub>");
    }

    if !link.is_empty() && !removed {
        if let Some(repo) = parse_github_url(link) {
            entry.push_str("\n\n<details>");
            entry.push_str("\n<summary>📊 GitHub Stats</summary>");
            entry.push_str(&format!(
                "\n\n![GitHub Stats for {}]({})",
                repo.repo,
                github_stats_url(&repo)
            ));
            entry.push_str("\n\n</details>");
            entry.push_str("\n<br>");
        }
    }
    entry
}

impl StyleGenerator for ClassicStyle {
    fn style_id(&self) -> &str {
        "classic"
    }

    fn template_file(&self) -> &str {
        "README_CLASSIC.template.md"
    }

    fn preferred_output_path(&self) -> PathBuf {
        PathBuf::from(ALTERNATIVES_DIR).join("README_CLASSIC.md")
    }

    fn format_entry(&self, resource: &Resource, _ctx: &RenderContext<'_>) -> Result<String> {
        Ok(classic_entry(resource))
    }

    fn render_toc(&self, ctx: &RenderContext<'_>) -> Result<String> {
        let mut lines = vec![
            format!("## Contents [🔝]({BACK_TO_TOP_ANCHOR})"),
            String::new(),
            "<details open>".to_string(),
            "<summary>Table of Contents</summary>".to_string(),
            String::new(),
        ];
        let mut general_counter = 0;

        for category in ctx.categories {
            if !ctx.category_has_resources(category) {
                continue;
            }
            let anchor = toc_anchor(&category.name, category.icon.as_deref(), true);

            if category.subcategories.is_empty() {
                lines.push(format!("- [{}](#{anchor})", category.name));
            } else {
                lines.push("- <details open>".to_string());
                lines.push(format!(
                    "  <summary><a href=\"#{anchor}\">{}</a></summary>",
                    category.name
                ));
                lines.push(String::new());
                for group in ctx.section_groups(category) {
                    if let Some(sub) = group.subcategory {
                        let (sub_anchor, next) = subcategory_anchor(&sub.name, general_counter, true);
                        general_counter = next;
                        lines.push(format!("  - [{}](#{sub_anchor})", sub.name));
                    }
                }
                lines.push(String::new());
                lines.push("  </details>".to_string());
            }
            lines.push(String::new());
        }

        lines.push("</details>".to_string());
        Ok(lines.join("\n").trim().to_string())
    }

    fn render_weekly_additions(&self, ctx: &RenderContext<'_>) -> Result<String> {
        let mut lines = vec![
            format!("## Latest Additions ✨ [🔝]({BACK_TO_TOP_ANCHOR})"),
            String::new(),
            String::new(),
        ];
        for resource in ctx.latest_additions() {
            lines.push(classic_entry(resource));
            lines.push(String::new());
        }
        Ok(format!("{}\n", lines.join("\n").trim_end()))
    }

    fn render_category_section(
        &self,
        category: &Category,
        _index: usize,
        ctx: &RenderContext<'_>,
    ) -> Result<String> {
        let header = match category.icon.as_deref().filter(|i| !i.is_empty()) {
            Some(icon) => format!("{} {icon}", category.name),
            None => category.name.clone(),
        };
        let mut lines = vec![format!("## {header} [🔝]({BACK_TO_TOP_ANCHOR})"), String::new()];

        let description = category.description.trim();
        if !description.is_empty() {
            lines.push(format!("> {description}"));
            lines.push(String::new());
        }

        for group in ctx.section_groups(category) {
            let Some(sub) = group.subcategory else {
                for resource in group.resources {
                    lines.push(classic_entry(resource));
                    lines.push(String::new());
                }
                continue;
            };
            lines.push("<details open>".to_string());
            lines.push(format!(
                "<summary><h3>{} <a href=\"{BACK_TO_TOP_ANCHOR}\">🔝</a></h3></summary>",
                sub.name
            ));
            lines.push(String::new());
            for resource in group.resources {
                lines.push(classic_entry(resource));
                lines.push(String::new());
            }
            lines.push("</details>".to_string());
            lines.push(String::new());
        }

        lines.push("<br>".to_string());
        Ok(format!("{}\n", lines.join("\n").trim_end()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ReadmeConfig;
    use crate::layout::RepoLayout;
    use chrono::NaiveDate;
    use pretty_assertions::assert_eq;
    use readme_catalog::Subcategory;

    fn github_resource() -> Resource {
        Resource {
            id: "tool-1".to_string(),
            display_name: "Tool".to_string(),
            category: "Tooling".to_string(),
            sub_category: "General".to_string(),
            primary_link: "https://github.com/me/tool".to_string(),
            author_name: "me".to_string(),
            author_link: "https://github.com/me".to_string(),
            license: "MIT".to_string(),
            description: "Does things.".to_string(),
            active: "TRUE".to_string(),
            ..Resource::default()
        }
    }

    #[test]
    fn test_entry_with_stats() {
        assert_eq!(
            classic_entry(&github_resource()),
            "[`Tool`](https://github.com/me/tool) &nbsp; by &nbsp; [me](https://github.com/me)  &nbsp;&nbsp;⚖️&nbsp;&nbsp;MIT  \n\
Does things.

<details>
<summary>📊 GitHub Stats</summary>

![GitHub Stats for tool](https://github-readme-stats-fork-orpin.vercel.app/api/pin/?repo=tool&username=me&all_stats=true&stats_only=true)

</details>
<br>"
        );
    }

    #[test]
    fn test_removed_entry_has_no_stats() {
        let resource = Resource {
            removed_from_origin: "TRUE".to_string(),
            license: "NOT_FOUND".to_string(),
            author_link: String::new(),
            ..github_resource()
        };
        assert_eq!(
            classic_entry(&resource),
            "[`Tool`](https://github.com/me/tool) &nbsp; by &nbsp; me    \nDoes things.*  \n<sub>* Removed from origin</sub>"
        );
    }

    #[test]
    fn test_toc_uses_back_to_top_anchors() {
        let layout = RepoLayout::new("/repo");
        let config = ReadmeConfig::default();
        let categories = vec![
            Category {
                name: "Tooling".to_string(),
                id: "tooling".to_string(),
                prefix: "tool".to_string(),
                icon: None,
                description: String::new(),
                order: 1,
                subcategories: vec![Subcategory {
                    name: "General".to_string(),
                    id: "general".to_string(),
                    description: String::new(),
                }],
            },
            Category {
                name: "Hooks".to_string(),
                id: "hooks".to_string(),
                prefix: "hook".to_string(),
                icon: None,
                description: String::new(),
                order: 2,
                subcategories: Vec::new(),
            },
        ];
        let today = NaiveDate::from_ymd_opt(2025, 6, 1)
            .and_then(|d| d.and_hms_opt(0, 0, 0))
            .unwrap();
        let ctx = RenderContext::new(&categories, vec![github_resource()], &layout, &config, today);

        let toc = ClassicStyle.render_toc(&ctx).unwrap();
        assert_eq!(
            toc,
            "## Contents [🔝](#awesome-claude-code)

<details open>
<summary>Table of Contents</summary>

- <details open>
  <summary><a href=\"#tooling-\">Tooling</a></summary>

  - [General](#general-)

  </details>

</details>"
        );
    }
}
