//! Plain markdown in the usual awesome-list shape.

use std::path::PathBuf;

use readme_catalog::{Category, Resource};

use crate::anchor::{subcategory_anchor, toc_anchor};
use crate::assets::asset_path_token;
use crate::context::RenderContext;
use crate::error::Result;
use crate::layout::ALTERNATIVES_DIR;
use crate::style::StyleGenerator;
use crate::styles::shared::with_terminal_punctuation;

#[derive(Debug, Clone, Copy, Default)]
pub struct AwesomeStyle;

fn heading_text(category: &Category) -> String {
    match category.icon.as_deref().filter(|i| !i.is_empty()) {
        Some(icon) => format!("{} {icon}", category.name),
        None => category.name.clone(),
    }
}

/// `- [Name](link) by [Author](link) - Description.`
pub fn awesome_entry(resource: &Resource) -> String {
    let mut entry = String::from("- ");
    let link = resource.primary_link.trim();
    if link.is_empty() {
        entry.push_str(&resource.display_name);
    } else {
        entry.push_str(&format!("[{}]({link})", resource.display_name));
    }

    let author = resource.author();
    if !author.is_empty() {
        match resource.author_url() {
            "" => entry.push_str(&format!(" by {author}")),
            url => entry.push_str(&format!(" by [{author}]({url})")),
        }
    }

    let description = resource.summary();
    if !description.is_empty() {
        entry.push_str(" - ");
        entry.push_str(&with_terminal_punctuation(description));
    }

    if resource.is_removed_from_origin() {
        entry.push_str(" *(Removed from origin)*");
    }
    entry
}

impl StyleGenerator for AwesomeStyle {
    fn style_id(&self) -> &str {
        "awesome"
    }

    fn template_file(&self) -> &str {
        "README_AWESOME.template.md"
    }

    fn preferred_output_path(&self) -> PathBuf {
        PathBuf::from(ALTERNATIVES_DIR).join("README_AWESOME.md")
    }

    fn format_entry(&self, resource: &Resource, _ctx: &RenderContext<'_>) -> Result<String> {
        Ok(awesome_entry(resource))
    }

    fn render_toc(&self, ctx: &RenderContext<'_>) -> Result<String> {
        let mut lines = vec!["## Contents".to_string(), String::new()];
        let mut general_counter = 0;

        for category in ctx.categories {
            if !ctx.category_has_resources(category) {
                continue;
            }
            let anchor = toc_anchor(&category.name, category.icon.as_deref(), false);
            lines.push(format!("- [{}](#{anchor})", heading_text(category)));
            for group in ctx.section_groups(category) {
                if let Some(sub) = group.subcategory {
                    let (sub_anchor, next) = subcategory_anchor(&sub.name, general_counter, false);
                    general_counter = next;
                    lines.push(format!("  - [{}](#{sub_anchor})", sub.name));
                }
            }
        }

        Ok(lines.join("\n").trim().to_string())
    }

    fn render_weekly_additions(&self, ctx: &RenderContext<'_>) -> Result<String> {
        let mut lines = vec!["## Latest Additions".to_string(), String::new()];
        lines.extend(ctx.latest_additions().into_iter().map(awesome_entry));
        lines.push(String::new());
        Ok(format!("{}\n", lines.join("\n").trim_end()))
    }

    fn render_category_section(
        &self,
        category: &Category,
        _index: usize,
        ctx: &RenderContext<'_>,
    ) -> Result<String> {
        let mut lines = vec![format!("## {}", heading_text(category)), String::new()];

        let description = category.description.trim();
        if !description.is_empty() {
            lines.push(format!("> {description}"));
            lines.push(String::new());
        }

        for group in ctx.section_groups(category) {
            if let Some(sub) = group.subcategory {
                lines.push(format!("### {}", sub.name));
                lines.push(String::new());
            }
            lines.extend(group.resources.into_iter().map(awesome_entry));
            lines.push(String::new());
        }

        Ok(format!("{}\n", lines.join("\n").trim_end()))
    }

    fn render_ticker(&self) -> String {
        format!(
            "<div align=\"center\">\n\n<img src=\"{}\" alt=\"Featured Claude Code Projects\" width=\"100%\">\n\n</div>",
            asset_path_token("repo-ticker-awesome.svg")
        )
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

    fn resource(name: &str, sub: &str) -> Resource {
        Resource {
            id: name.to_lowercase(),
            display_name: name.to_string(),
            category: "Tooling".to_string(),
            sub_category: sub.to_string(),
            primary_link: format!("https://github.com/me/{}", name.to_lowercase()),
            author_name: "me".to_string(),
            author_link: "https://github.com/me".to_string(),
            description: format!("{name} does things"),
            active: "TRUE".to_string(),
            ..Resource::default()
        }
    }

    fn tooling() -> Category {
        Category {
            name: "Tooling".to_string(),
            id: "tooling".to_string(),
            prefix: "tool".to_string(),
            icon: Some("\u{1f9f0}".to_string()),
            description: "Tools.".to_string(),
            order: 1,
            subcategories: ["General", "IDE Integrations"]
                .into_iter()
                .map(|name| Subcategory {
                    name: name.to_string(),
                    id: name.to_lowercase().replace(' ', "-"),
                    description: String::new(),
                })
                .collect(),
        }
    }

    fn today() -> chrono::NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 6, 1)
            .and_then(|d| d.and_hms_opt(0, 0, 0))
            .unwrap()
    }

    #[test]
    fn test_entry_variants() {
        let full = resource("Alpha", "General");
        assert_eq!(
            awesome_entry(&full),
            "- [Alpha](https://github.com/me/alpha) by [me](https://github.com/me) - Alpha does things."
        );

        let bare = Resource {
            display_name: "Bare".to_string(),
            author_name: "someone".to_string(),
            description: "Done!".to_string(),
            removed_from_origin: "true".to_string(),
            ..Resource::default()
        };
        assert_eq!(awesome_entry(&bare), "- Bare by someone - Done! *(Removed from origin)*");
    }

    #[test]
    fn test_toc_and_section() {
        let layout = RepoLayout::new("/repo");
        let config = ReadmeConfig::default();
        let categories = vec![tooling()];
        let resources = vec![resource("Alpha", "General"), resource("Beta", "IDE Integrations")];
        let ctx = RenderContext::new(&categories, resources, &layout, &config, today());

        let toc = AwesomeStyle.render_toc(&ctx).unwrap();
        assert_eq!(
            toc,
            "## Contents\n\n- [Tooling \u{1f9f0}](#tooling-)\n  - [General](#general)\n  - [IDE Integrations](#ide-integrations)"
        );

        let section = AwesomeStyle.render_category_section(&categories[0], 0, &ctx).unwrap();
        assert_eq!(
            section,
            "## Tooling \u{1f9f0}

> Tools.

### General

- [Alpha](https://github.com/me/alpha) by [me](https://github.com/me) - Alpha does things.

### IDE Integrations

- [Beta](https://github.com/me/beta) by [me](https://github.com/me) - Beta does things.
"
        );
    }

    #[test]
    fn test_toc_skips_empty_categories() {
        let layout = RepoLayout::new("/repo");
        let config = ReadmeConfig::default();
        let hooks = Category {
            name: "Hooks".to_string(),
            id: "hooks".to_string(),
            prefix: "hook".to_string(),
            icon: None,
            description: String::new(),
            order: 2,
            subcategories: Vec::new(),
        };
        let empty_tooling = Category {
            name: "Empty Tooling".to_string(),
            ..tooling()
        };
        let categories = vec![tooling(), hooks, empty_tooling];
        let ctx = RenderContext::new(&categories, vec![resource("Alpha", "General")], &layout, &config, today());

        let toc = AwesomeStyle.render_toc(&ctx).unwrap();
        assert_eq!(
            toc,
            "## Contents\n\n- [Tooling \u{1f9f0}](#tooling-)\n  - [General](#general)"
        );
    }

    #[test]
    fn test_ticker_uses_asset_token() {
        assert!(AwesomeStyle.render_ticker().contains("{{ASSET_PATH('repo-ticker-awesome.svg')}}"));
    }
}
