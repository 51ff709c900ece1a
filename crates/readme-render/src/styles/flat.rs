/*
 * flat.rs
 * Copyright (c) 2025 awesome-claude-code maintainers
 *
 * Flat, sortable resource tables.
 */

//! Flat, sortable resource tables.
//!
//! The flat style is a matrix: one document per (category filter, sort mode)
//! pair, each a single HTML table. Documents link to each other through
//! badge rows, so every combination is generated on every run.

use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use chrono::{Duration, NaiveDateTime};
use readme_catalog::{Category, Resource};

use crate::assets::{asset_path_token, relative_path};
use crate::context::RenderContext;
use crate::error::{RenderError, Result};
use crate::github::{GithubRepo, extract_github_owner_repo};
use crate::layout::{ALTERNATIVES_DIR, RepoLayout};
use crate::style::{RenderedDocument, StyleGenerator};
use crate::styles::shared::style_selector;

/// How far back the `releases` sort looks.
pub const RELEASES_WINDOW_DAYS: i64 = 30;

/// Template used when `templates/README_FLAT.template.md` is absent.
pub const DEFAULT_TEMPLATE: &str = "<!--lint disable remark-lint:awesome-badge-->

{{STYLE_SELECTOR}}

# Awesome Claude Code (Flat)

[![Awesome](https://awesome.re/badge-flat2.svg)](https://awesome.re)

A flat list view of all resources. Category: **{{CATEGORY_NAME}}** | Sorted: {{SORT_DESC}}

---

## Sort By:

{{NAVIGATION}}

---

## Resources
{{RELEASES_DISCLAIMER}}
{{RESOURCES_TABLE}}

---

**Total Resources:** {{RESOURCE_COUNT}}

**Last Generated:** {{GENERATED_DATE}}
";

const RELEASES_DISCLAIMER: &str = "\n> **Note:** Latest release data is pulled from GitHub Releases only. \
Projects without GitHub Releases will not show release info here. \
Please verify with the project directly.\n";

/// A category filter of the flat lists.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FlatCategory {
    pub slug: &'static str,
    /// Exact `Category` column value, or `None` for every resource
    pub csv_value: Option<&'static str>,
    pub display: &'static str,
    pub color: &'static str,
}

const fn flat_category(
    slug: &'static str,
    csv_value: Option<&'static str>,
    display: &'static str,
    color: &'static str,
) -> FlatCategory {
    FlatCategory {
        slug,
        csv_value,
        display,
        color,
    }
}

static FLAT_CATEGORIES: [FlatCategory; 11] = [
    flat_category("all", None, "All", "#71717a"),
    flat_category("tooling", Some("Tooling"), "Tooling", "#3b82f6"),
    flat_category("commands", Some("Slash-Commands"), "Commands", "#8b5cf6"),
    flat_category("claude-md", Some("CLAUDE.md Files"), "CLAUDE.md", "#ec4899"),
    flat_category("workflows", Some("Workflows & Knowledge Guides"), "Workflows", "#14b8a6"),
    flat_category("hooks", Some("Hooks"), "Hooks", "#f97316"),
    flat_category("skills", Some("Agent Skills"), "Skills", "#eab308"),
    flat_category("styles", Some("Output Styles"), "Styles", "#06b6d4"),
    flat_category("statusline", Some("Status Lines"), "Status", "#84cc16"),
    flat_category("docs", Some("Official Documentation"), "Docs", "#6366f1"),
    flat_category("clients", Some("Alternative Clients"), "Clients", "#f43f5e"),
];

impl FlatCategory {
    /// Every filter, in navigation order. `all` comes first.
    pub fn all() -> &'static [FlatCategory] {
        &FLAT_CATEGORIES
    }

    pub fn from_slug(slug: &str) -> Result<&'static FlatCategory> {
        FLAT_CATEGORIES
            .iter()
            .find(|c| c.slug == slug)
            .ok_or_else(|| RenderError::UnknownFlatCategory(slug.to_string()))
    }

    pub fn badge_filename(&self) -> String {
        format!("badge-cat-{}.svg", self.slug)
    }

    /// Badge width grows with the label, never below 70.
    pub fn badge_width(&self) -> usize {
        (self.display.chars().count() * 10 + 30).max(70)
    }

    pub fn matches(&self, resource: &Resource) -> bool {
        match self.csv_value {
            None => true,
            Some(value) => resource.category.trim() == value,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SortMode {
    Az,
    Updated,
    Created,
    Releases,
}

impl SortMode {
    pub const ALL: [SortMode; 4] = [Self::Az, Self::Updated, Self::Created, Self::Releases];

    pub fn slug(self) -> &'static str {
        match self {
            Self::Az => "az",
            Self::Updated => "updated",
            Self::Created => "created",
            Self::Releases => "releases",
        }
    }

    pub fn display(self) -> &'static str {
        match self {
            Self::Az => "A - Z",
            Self::Updated => "UPDATED",
            Self::Created => "CREATED",
            Self::Releases => "RELEASES",
        }
    }

    pub fn color(self) -> &'static str {
        match self {
            Self::Az => "#6366f1",
            Self::Updated => "#f472b6",
            Self::Created => "#34d399",
            Self::Releases => "#f59e0b",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Self::Az => "alphabetically by name",
            Self::Updated => "by last updated date",
            Self::Created => "by date created",
            Self::Releases => "by latest release (30 days)",
        }
    }

    pub fn badge_filename(self) -> String {
        format!("badge-sort-{}.svg", self.slug())
    }

    /// Filter (releases only) and order `resources`.
    ///
    /// Date sorts are newest first with undated rows last; ties keep table order.
    pub fn apply<'r>(self, mut resources: Vec<&'r Resource>, today: NaiveDateTime) -> Vec<&'r Resource> {
        match self {
            Self::Az => {
                resources.sort_by_key(|r| r.display_name.to_lowercase());
                resources
            }
            Self::Updated => sort_newest_first(resources, Resource::last_modified_at),
            Self::Created => sort_newest_first(resources, Resource::repo_created_at),
            Self::Releases => {
                let cutoff = today - Duration::days(RELEASES_WINDOW_DAYS);
                let recent = resources
                    .into_iter()
                    .filter(|r| r.latest_release_at().is_some_and(|at| at >= cutoff))
                    .collect();
                sort_newest_first(recent, Resource::latest_release_at)
            }
        }
    }
}

fn sort_newest_first<'r>(
    resources: Vec<&'r Resource>,
    date: fn(&Resource) -> Option<NaiveDateTime>,
) -> Vec<&'r Resource> {
    let mut keyed: Vec<(Option<NaiveDateTime>, &Resource)> =
        resources.into_iter().map(|r| (date(r), r)).collect();
    keyed.sort_by(|a, b| match (a.0, b.0) {
        (Some(x), Some(y)) => y.cmp(&x),
        (Some(_), None) => std::cmp::Ordering::Less,
        (None, Some(_)) => std::cmp::Ordering::Greater,
        (None, None) => std::cmp::Ordering::Equal,
    });
    keyed.into_iter().map(|(_, r)| r).collect()
}

impl FromStr for SortMode {
    type Err = RenderError;

    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|mode| mode.slug() == s)
            .ok_or_else(|| RenderError::UnknownSortMode(s.to_string()))
    }
}

impl fmt::Display for SortMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

/// File name of the flat document for a category filter and sort mode.
pub fn flat_filename(category_slug: &str, sort: SortMode) -> String {
    format!(
        "README_FLAT_{}_{}.md",
        category_slug.to_uppercase(),
        sort.slug().to_uppercase()
    )
}

fn alternatives_link_prefix(output_path: &Path, repo_root: &Path) -> String {
    let from = output_path.parent().unwrap_or_else(|| Path::new(""));
    match relative_path(&repo_root.join(ALTERNATIVES_DIR), from).as_str() {
        "." => String::new(),
        rel => format!("{rel}/"),
    }
}

fn release_source_display(source: &str) -> &str {
    match source {
        "github-releases" => "GitHub",
        "npm" => "npm",
        "pypi" => "PyPI",
        "crates" => "crates.io",
        "homebrew" => "Homebrew",
        "readme" => "README",
        "" => "-",
        other => other,
    }
}

fn or_dash(value: &str) -> &str {
    if value.is_empty() { "-" } else { value }
}

/// shields.io badges for a GitHub repository, separated by spaces.
pub fn shields_badges(repo: &GithubRepo) -> String {
    const KINDS: [(&str, &str); 9] = [
        ("stars", "stars"),
        ("forks", "forks"),
        ("issues", "issues"),
        ("prs", "issues-pr"),
        ("created", "created-at"),
        ("last-commit", "last-commit"),
        ("release-date", "release-date"),
        ("version", "v/release"),
        ("license", "license"),
    ];
    KINDS
        .iter()
        .map(|(alt, kind)| {
            format!(
                "<img src=\"https://img.shields.io/github/{kind}/{}/{}?style=flat-square\" alt=\"{alt}\">",
                repo.owner, repo.repo
            )
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// One flat document: a category filter plus a sort mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FlatStyle {
    category: &'static FlatCategory,
    sort: SortMode,
}

impl Default for FlatStyle {
    fn default() -> Self {
        Self {
            category: &FLAT_CATEGORIES[0],
            sort: SortMode::Az,
        }
    }
}

impl FlatStyle {
    pub fn new(category: &'static FlatCategory, sort: SortMode) -> Self {
        Self { category, sort }
    }

    /// Look up a category slug and sort slug, e.g. `("hooks", "updated")`.
    pub fn from_slugs(category: &str, sort: &str) -> Result<Self> {
        Ok(Self::new(FlatCategory::from_slug(category)?, sort.parse()?))
    }

    /// Every (category, sort) combination, categories outermost.
    pub fn matrix() -> Vec<FlatStyle> {
        FlatCategory::all()
            .iter()
            .flat_map(|category| SortMode::ALL.into_iter().map(move |sort| Self::new(category, sort)))
            .collect()
    }

    pub fn category(&self) -> &'static FlatCategory {
        self.category
    }

    pub fn sort(&self) -> SortMode {
        self.sort
    }

    fn column_count(&self) -> usize {
        if self.sort == SortMode::Releases { 5 } else { 4 }
    }

    /// Filtered and sorted resources this document lists.
    pub fn select<'r>(&self, ctx: &'r RenderContext<'_>) -> Vec<&'r Resource> {
        let filtered = ctx.resources.iter().filter(|r| self.category.matches(r)).collect();
        self.sort.apply(filtered, ctx.today)
    }

    fn sort_navigation(&self, link_prefix: &str) -> String {
        let mut lines = vec!["<p align=\"center\">".to_string()];
        for sort in SortMode::ALL {
            let style = if sort == self.sort {
                format!(" style=\"border: 3px solid {}; border-radius: 6px;\"", sort.color())
            } else {
                String::new()
            };
            lines.push(format!(
                "  <a href=\"{link_prefix}{}\"><img src=\"{}\" alt=\"{}\" height=\"48\"{style}></a>",
                flat_filename(self.category.slug, sort),
                asset_path_token(&sort.badge_filename()),
                sort.display(),
            ));
        }
        lines.push("</p>".to_string());
        lines.join("\n")
    }

    fn category_navigation(&self, link_prefix: &str) -> String {
        let mut lines = vec!["<p align=\"center\">".to_string()];
        for category in FlatCategory::all() {
            let style = if category.slug == self.category.slug {
                format!(" style=\"border: 2px solid {}; border-radius: 4px;\"", category.color)
            } else {
                String::new()
            };
            lines.push(format!(
                "  <a href=\"{link_prefix}{}\"><img src=\"{}\" alt=\"{}\" height=\"28\"{style}></a>",
                flat_filename(category.slug, self.sort),
                asset_path_token(&category.badge_filename()),
                category.display,
            ));
        }
        lines.push("</p>".to_string());
        lines.join("\n")
    }

    /// Sort badges, category badges and a "currently viewing" line.
    ///
    /// `link_prefix` reaches `README_ALTERNATIVES/` from the document being
    /// rendered: empty for alternatives, `README_ALTERNATIVES/` for the root.
    pub fn navigation(&self, link_prefix: &str) -> String {
        let mut current = format!("**{}** sorted {}", self.category.display, self.sort.description());
        if self.sort == SortMode::Releases {
            current.push_str(" (past 30 days)");
        }
        format!(
            "{}\n<p align=\"center\"><strong>Category:</strong></p>\n{}\n<p align=\"center\"><em>Currently viewing: {current}</em></p>",
            self.sort_navigation(link_prefix),
            self.category_navigation(link_prefix),
        )
    }

    /// The HTML table, or a placeholder line when nothing matches.
    pub fn resources_table(&self, resources: &[&Resource]) -> String {
        if resources.is_empty() {
            return match self.sort {
                SortMode::Releases => "*No releases in the past 30 days for this category.*".to_string(),
                _ => "*No resources found in this category.*".to_string(),
            };
        }

        let headers: &[&str] = match self.sort {
            SortMode::Releases => &["Resource", "Version", "Source", "Release Date", "Description"],
            _ => &["Resource", "Category", "Sub-Category", "Description"],
        };

        let mut lines = vec!["<table>".to_string(), "<thead>".to_string(), "<tr>".to_string()];
        lines.extend(headers.iter().map(|h| format!("<th>{h}</th>")));
        lines.extend(["</tr>", "</thead>", "<tbody>"].map(String::from));
        for resource in resources {
            lines.push(self.table_row(resource));
        }
        lines.extend(["</tbody>", "</table>"].map(String::from));
        lines.join("\n")
    }

    fn table_row(&self, resource: &Resource) -> String {
        let name = resource.display_name.trim();
        let link = resource.primary_link.trim();

        let mut cell = if link.is_empty() {
            format!("<b>{name}</b>")
        } else {
            format!("<a href=\"{link}\"><b>{name}</b></a>")
        };
        let author = match (resource.author(), resource.author_url()) {
            ("", _) => String::new(),
            (name, "") => name.to_string(),
            (name, url) => format!("<a href=\"{url}\">{name}</a>"),
        };
        if !author.is_empty() {
            cell.push_str(&format!("<br>by {author}"));
        }

        let mut lines = vec!["<tr>".to_string(), format!("<td>{cell}</td>")];
        let values: Vec<&str> = match self.sort {
            SortMode::Releases => vec![
                or_dash(resource.release_version.trim()),
                release_source_display(resource.release_source.trim()),
                resource
                    .latest_release
                    .get(..10)
                    .unwrap_or(or_dash(&resource.latest_release)),
                resource.summary(),
            ],
            _ => vec![
                or_dash(resource.category.trim()),
                or_dash(resource.subcategory()),
                resource.summary(),
            ],
        };
        lines.extend(values.into_iter().map(|v| format!("<td>{v}</td>")));
        lines.push("</tr>".to_string());

        if !link.is_empty() {
            if let Some(repo) = extract_github_owner_repo(link) {
                lines.push("<tr>".to_string());
                lines.push(format!(
                    "<td colspan=\"{}\">{}</td>",
                    self.column_count(),
                    shields_badges(&repo)
                ));
                lines.push("</tr>".to_string());
            }
        }
        lines.join("\n")
    }
}

impl StyleGenerator for FlatStyle {
    fn style_id(&self) -> &str {
        "flat"
    }

    fn template_file(&self) -> &str {
        "README_FLAT.template.md"
    }

    fn preferred_output_path(&self) -> PathBuf {
        PathBuf::from(ALTERNATIVES_DIR).join(flat_filename(self.category.slug, self.sort))
    }

    /// A table row, followed by a badge row for GitHub-hosted resources.
    fn format_entry(&self, resource: &Resource, _ctx: &RenderContext<'_>) -> Result<String> {
        Ok(self.table_row(resource))
    }

    /// Flat lists have no table of contents.
    fn render_toc(&self, _ctx: &RenderContext<'_>) -> Result<String> {
        Ok(String::new())
    }

    fn render_weekly_additions(&self, _ctx: &RenderContext<'_>) -> Result<String> {
        Ok(String::new())
    }

    /// Flat lists are not sectioned; the whole table comes from `render_document`.
    fn render_category_section(
        &self,
        _category: &Category,
        _index: usize,
        _ctx: &RenderContext<'_>,
    ) -> Result<String> {
        Ok(String::new())
    }

    fn load_template(&self, layout: &RepoLayout) -> Result<String> {
        let path = layout.template(self.template_file());
        if !path.exists() {
            tracing::warn!(path = %path.display(), "Flat template not found, using built-in default");
            return Ok(DEFAULT_TEMPLATE.to_string());
        }
        std::fs::read_to_string(&path).map_err(|e| RenderError::io(&path, e))
    }

    fn render_document(
        &self,
        template: &str,
        ctx: &RenderContext<'_>,
        output_path: &Path,
    ) -> Result<RenderedDocument> {
        let selected = self.select(ctx);
        let disclaimer = if self.sort == SortMode::Releases {
            RELEASES_DISCLAIMER
        } else {
            ""
        };
        let selector = style_selector(self.style_id(), output_path, ctx.layout.root(), ctx.config);
        let link_prefix = alternatives_link_prefix(output_path, ctx.layout.root());

        let content = template
            .replace("{{STYLE_SELECTOR}}", &selector)
            .replace("{{NAVIGATION}}", &self.navigation(&link_prefix))
            .replace("{{RELEASES_DISCLAIMER}}", disclaimer)
            .replace("{{RESOURCES_TABLE}}", &self.resources_table(&selected))
            .replace("{{RESOURCE_COUNT}}", &selected.len().to_string())
            .replace("{{CATEGORY_NAME}}", self.category.display)
            .replace("{{SORT_DESC}}", self.sort.description())
            .replace("{{GENERATED_DATE}}", &ctx.today.format("%Y-%m-%d").to_string());

        tracing::debug!(
            category = self.category.slug,
            sort = %self.sort,
            count = selected.len(),
            "Rendered flat list"
        );

        Ok(RenderedDocument {
            content,
            rendered_count: selected.len(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ReadmeConfig;
    use chrono::NaiveDate;
    use pretty_assertions::assert_eq;

    fn today() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 6, 30)
            .and_then(|d| d.and_hms_opt(12, 0, 0))
            .unwrap()
    }

    fn row(name: &str, category: &str) -> Resource {
        Resource {
            id: name.to_lowercase(),
            display_name: name.to_string(),
            category: category.to_string(),
            active: "TRUE".to_string(),
            ..Resource::default()
        }
    }

    fn names(resources: &[&Resource]) -> Vec<String> {
        resources.iter().map(|r| r.display_name.clone()).collect()
    }

    #[test]
    fn test_slugs_and_filenames() {
        assert_eq!(FlatCategory::all().len(), 11);
        assert_eq!(FlatStyle::matrix().len(), 44);
        assert_eq!(flat_filename("claude-md", SortMode::Releases), "README_FLAT_CLAUDE-MD_RELEASES.md");
        assert_eq!(
            FlatStyle::default().preferred_output_path(),
            PathBuf::from("README_ALTERNATIVES/README_FLAT_ALL_AZ.md")
        );
        assert!(matches!(
            FlatStyle::from_slugs("nope", "az"),
            Err(RenderError::UnknownFlatCategory(_))
        ));
        assert!(matches!(
            FlatStyle::from_slugs("hooks", "stars"),
            Err(RenderError::UnknownSortMode(_))
        ));
        assert_eq!(FlatCategory::from_slug("claude-md").unwrap().badge_width(), 120);
        assert_eq!(FlatCategory::from_slug("docs").unwrap().badge_width(), 70);
    }

    #[test]
    fn test_az_is_case_insensitive() {
        let rows = [row("beta", "Hooks"), row("Alpha", "Hooks"), row("gamma", "Hooks")];
        let sorted = SortMode::Az.apply(rows.iter().collect(), today());
        assert_eq!(names(&sorted), vec!["Alpha", "beta", "gamma"]);
    }

    #[test]
    fn test_updated_puts_undated_last() {
        let mut old = row("old", "Hooks");
        old.last_modified = "2024-01-01".to_string();
        let mut new = row("new", "Hooks");
        new.last_modified = "2025-05-01:10-00-00".to_string();
        let mut garbage = row("garbage", "Hooks");
        garbage.last_modified = "yesterday".to_string();
        let undated = row("undated", "Hooks");

        let rows = [undated, old, garbage, new];
        let sorted = SortMode::Updated.apply(rows.iter().collect(), today());
        assert_eq!(names(&sorted), vec!["new", "old", "undated", "garbage"]);
    }

    #[test]
    fn test_releases_window() {
        let mut recent = row("recent", "Hooks");
        recent.latest_release = "2025-06-20:08-00-00".to_string();
        let mut newest = row("newest", "Hooks");
        newest.latest_release = "2025-06-29:08-00-00".to_string();
        let mut stale = row("stale", "Hooks");
        stale.latest_release = "2025-05-01:08-00-00".to_string();
        let mut date_only = row("date-only", "Hooks");
        date_only.latest_release = "2025-06-25".to_string();

        let rows = [recent, stale, newest, date_only];
        let sorted = SortMode::Releases.apply(rows.iter().collect(), today());
        assert_eq!(names(&sorted), vec!["newest", "recent"]);
    }

    #[test]
    fn test_category_filter_trims() {
        let hooks = FlatCategory::from_slug("hooks").unwrap();
        assert!(hooks.matches(&row("a", " Hooks ")));
        assert!(!hooks.matches(&row("a", "Tooling")));
        assert!(FlatCategory::from_slug("all").unwrap().matches(&row("a", "Anything")));
    }

    #[test]
    fn test_empty_tables() {
        let releases = FlatStyle::from_slugs("hooks", "releases").unwrap();
        assert_eq!(
            releases.resources_table(&[]),
            "*No releases in the past 30 days for this category.*"
        );
        let az = FlatStyle::from_slugs("hooks", "az").unwrap();
        assert_eq!(az.resources_table(&[]), "*No resources found in this category.*");
    }

    #[test]
    fn test_table_rows() {
        let mut resource = row("Tool", "Tooling");
        resource.primary_link = "https://github.com/me/tool".to_string();
        resource.author_name = "me".to_string();
        resource.author_link = "https://github.com/me".to_string();
        resource.description = "Does things.".to_string();
        resource.latest_release = "2025-06-20:08-00-00".to_string();
        resource.release_source = "crates".to_string();

        let style = FlatStyle::from_slugs("all", "releases").unwrap();
        let table = style.resources_table(&[&resource]);
        assert!(table.contains("<th>Release Date</th>"));
        assert!(table.contains(
            "<tr>\n<td><a href=\"https://github.com/me/tool\"><b>Tool</b></a><br>by <a href=\"https://github.com/me\">me</a></td>\n<td>-</td>\n<td>crates.io</td>\n<td>2025-06-20</td>\n<td>Does things.</td>\n</tr>"
        ));
        assert!(table.contains("<td colspan=\"5\"><img src=\"https://img.shields.io/github/stars/me/tool?style=flat-square\" alt=\"stars\">"));
        assert!(table.contains("https://img.shields.io/github/v/release/me/tool?style=flat-square\" alt=\"version\""));

        let plain = Resource {
            primary_link: String::new(),
            author_link: String::new(),
            ..resource
        };
        let az = FlatStyle::from_slugs("all", "az").unwrap();
        assert_eq!(
            az.table_row(&plain),
            "<tr>\n<td><b>Tool</b><br>by me</td>\n<td>Tooling</td>\n<td>-</td>\n<td>Does things.</td>\n</tr>"
        );
    }

    #[test]
    fn test_navigation_highlights_current() {
        let style = FlatStyle::from_slugs("hooks", "releases").unwrap();
        let nav = style.navigation("");
        assert!(nav.contains(
            "  <a href=\"README_FLAT_HOOKS_RELEASES.md\"><img src=\"{{ASSET_PATH('badge-sort-releases.svg')}}\" alt=\"RELEASES\" height=\"48\" style=\"border: 3px solid #f59e0b; border-radius: 6px;\"></a>"
        ));
        assert!(nav.contains(
            "  <a href=\"README_FLAT_ALL_RELEASES.md\"><img src=\"{{ASSET_PATH('badge-cat-all.svg')}}\" alt=\"All\" height=\"28\"></a>"
        ));
        assert!(nav.ends_with(
            "<p align=\"center\"><em>Currently viewing: **Hooks** sorted by latest release (30 days) (past 30 days)</em></p>"
        ));
    }

    #[test]
    fn test_render_document_with_default_template() {
        let layout = RepoLayout::new("/repo");
        let config = ReadmeConfig::default();
        let resources = vec![row("b", "Hooks"), row("a", "Hooks"), row("t", "Tooling")];
        let ctx = RenderContext::new(&[], resources, &layout, &config, today());
        let style = FlatStyle::from_slugs("hooks", "az").unwrap();

        let doc = style
            .render_document(
                DEFAULT_TEMPLATE,
                &ctx,
                Path::new("/repo/README_ALTERNATIVES/README_FLAT_HOOKS_AZ.md"),
            )
            .unwrap();

        assert_eq!(doc.rendered_count, 2);
        let resolved = crate::assets::resolve_asset_tokens(
            &doc.content,
            Path::new("/repo/README_ALTERNATIVES/README_FLAT_HOOKS_AZ.md"),
            Path::new("/repo"),
        );
        assert!(!resolved.contains("{{"));
        assert!(resolved.contains("<a href=\"README_FLAT_HOOKS_UPDATED.md\"><img src=\"../assets/badge-sort-updated.svg\""));
        assert!(doc.content.contains("**Total Resources:** 2"));
        assert!(doc.content.contains("**Last Generated:** 2025-06-30"));
        assert!(doc.content.contains("Category: **Hooks** | Sorted: alphabetically by name"));
        assert!(doc.content.contains("## Resources\n\n<table>"));
    }

    #[test]
    fn test_alternatives_link_prefix() {
        let root = Path::new("/repo");
        assert_eq!(
            alternatives_link_prefix(Path::new("/repo/README_ALTERNATIVES/README_FLAT_ALL_AZ.md"), root),
            ""
        );
        assert_eq!(alternatives_link_prefix(Path::new("/repo/README.md"), root), "README_ALTERNATIVES/");
    }
}
