/*
 * anchor.rs
 * Copyright (c) 2025 awesome-claude-code maintainers
 *
 * Heading anchors compatible with GitHub's slug rules.
 */

//! Heading anchors compatible with GitHub's slug rules.
//!
//! GitHub drops emoji from heading text when computing the anchor and leaves
//! a single dash in their place. A Unicode variation selector (U+FE00 to
//! U+FE0F) attached to the emoji is *not* dropped: it survives and shows up
//! percent-encoded in the anchor. A heading like `## Hooks 🪝` therefore
//! links as `#hooks-`, while `## Official Documentation 🏛️` links as
//! `#official-documentation-%EF%B8%8F`.
//!
//! A heading that also contains a `[🔝](#...)` back-to-top link gets one more
//! trailing dash, since that emoji is stripped the same way.

use std::collections::HashMap;

use readme_catalog::{Category, Resource};

const VARIATION_SELECTORS: std::ops::RangeInclusive<char> = '\u{FE00}'..='\u{FE0F}';

/// The subcategory name that recurs across categories.
pub const GENERAL: &str = "General";

/// Anchor suffix contributed by a trailing icon.
///
/// Only the first variation selector in `icon` is encoded.
pub fn anchor_suffix(icon: &str) -> String {
    if icon.is_empty() {
        return String::new();
    }
    match icon.chars().find(|c| VARIATION_SELECTORS.contains(c)) {
        Some(selector) => {
            let mut buf = [0u8; 4];
            let encoded: String = selector
                .encode_utf8(&mut buf)
                .bytes()
                .map(|byte| format!("%{byte:02X}"))
                .collect();
            format!("-{encoded}")
        }
        None => "-".to_string(),
    }
}

fn heading_slug(title: &str) -> String {
    title
        .to_lowercase()
        .replace(' ', "-")
        .replace(['&', '/'], "")
}

/// Anchor for a category heading.
///
/// `has_back_to_top` must be `true` when the rendered heading itself contains
/// a back-to-top emoji link.
pub fn toc_anchor(title: &str, icon: Option<&str>, has_back_to_top: bool) -> String {
    let base = heading_slug(title).replace('.', "");
    let suffix = icon.map(anchor_suffix).unwrap_or_default();
    let back_to_top = if has_back_to_top { "-" } else { "" };
    format!("{base}{suffix}{back_to_top}")
}

/// Anchor for a subcategory heading plus the updated "General" counter.
///
/// GitHub numbers repeated headings in document order: the first "General"
/// is `general`, later ones `general-1`, `general-2`, ... The counter is
/// scoped to a single render and threaded through by the caller.
pub fn subcategory_anchor(title: &str, general_counter: usize, has_back_to_top: bool) -> (String, usize) {
    let back_to_top = if has_back_to_top { "-" } else { "" };
    if title == GENERAL {
        let anchor = if general_counter == 0 {
            format!("general{back_to_top}")
        } else {
            format!("general-{back_to_top}{general_counter}")
        };
        return (anchor, general_counter + 1);
    }
    (format!("{}{back_to_top}", heading_slug(title)), general_counter)
}

/// Turn an anchor into a file name fragment: `tooling-general-` becomes `tooling_general`.
pub fn sanitize_filename_from_anchor(anchor: &str) -> String {
    let mut out = String::with_capacity(anchor.len());
    for c in anchor.trim_end_matches('-').chars() {
        let c = if c == '-' { '_' } else { c };
        if c == '_' && out.ends_with('_') {
            continue;
        }
        out.push(c);
    }
    out.trim_matches('_').to_string()
}

/// Directory-style label used on table-of-contents rows, e.g. `AGENT_SKILLS/`.
pub fn category_dir_name(name: &str, category_id: &str) -> String {
    if category_id == "workflows" {
        return "WORKFLOWS_&_GUIDES/".to_string();
    }
    let mut slug = String::with_capacity(name.len());
    for c in name.chars() {
        if c.is_ascii_alphanumeric() {
            slug.push(c.to_ascii_uppercase());
        } else if !slug.ends_with('_') {
            slug.push('_');
        }
    }
    format!("{}/", slug.trim_matches('_'))
}

/// Explicit anchors for every "General" subcategory that will be rendered.
///
/// Built once per generation and shared by the table of contents and the
/// body so both emit the same `{category_id}-general` identifier.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GeneralAnchorMap {
    anchors: HashMap<(String, String), String>,
}

impl GeneralAnchorMap {
    pub fn build(categories: &[Category], resources: &[Resource]) -> Self {
        let mut anchors = HashMap::new();
        for category in categories {
            if !category.has_subcategory(GENERAL) {
                continue;
            }
            let populated = resources
                .iter()
                .any(|r| r.category == category.name && r.subcategory() == GENERAL);
            if populated {
                anchors.insert(
                    (category.id.clone(), GENERAL.to_string()),
                    format!("{}-general", category.id),
                );
            }
        }
        Self { anchors }
    }

    pub fn get(&self, category_id: &str, subcategory: &str) -> Option<&str> {
        self.anchors
            .get(&(category_id.to_string(), subcategory.to_string()))
            .map(String::as_str)
    }

    /// Explicit anchor for a subcategory section in a style that sets its own ids.
    pub fn subcategory_id(&self, category_id: &str, subcategory: &str) -> String {
        if subcategory == GENERAL {
            return self
                .get(category_id, subcategory)
                .map(str::to_string)
                .unwrap_or_else(|| format!("{category_id}-general"));
        }
        heading_slug(subcategory)
    }

    pub fn len(&self) -> usize {
        self.anchors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.anchors.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use readme_catalog::Subcategory;

    #[test]
    fn test_anchor_suffix() {
        assert_eq!(anchor_suffix(""), "");
        assert_eq!(anchor_suffix("🎯"), "-");
        assert_eq!(anchor_suffix("\u{1F3DB}\u{FE0F}"), "-%EF%B8%8F");
        assert_eq!(anchor_suffix("\u{FE0E}"), "-%EF%B8%8E");
    }

    #[test]
    fn test_only_first_variation_selector_counts() {
        assert_eq!(anchor_suffix("☀\u{FE0E}\u{FE0F}"), "-%EF%B8%8E");
    }

    #[test]
    fn test_toc_anchor() {
        assert_eq!(toc_anchor("Agent Skills", Some("🤖"), false), "agent-skills-");
        assert_eq!(toc_anchor("Agent Skills", Some("🤖"), true), "agent-skills--");
        assert_eq!(toc_anchor("CLAUDE.md Files", Some("📂"), false), "claudemd-files-");
        assert_eq!(
            toc_anchor("Workflows & Knowledge Guides", Some("🧠"), false),
            "workflows--knowledge-guides-"
        );
        assert_eq!(
            toc_anchor("Official Documentation", Some("\u{1F3DB}\u{FE0F}"), false),
            "official-documentation-%EF%B8%8F"
        );
        assert_eq!(toc_anchor("Hooks", None, true), "hooks-");
        assert_eq!(toc_anchor("Hooks", None, false), "hooks");
    }

    #[test]
    fn test_subcategory_anchor_counts_generals() {
        let (first, counter) = subcategory_anchor("General", 0, false);
        let (other, counter) = subcategory_anchor("IDE Integrations", counter, false);
        let (second, counter) = subcategory_anchor("General", counter, false);
        assert_eq!(first, "general");
        assert_eq!(other, "ide-integrations");
        assert_eq!(second, "general-1");
        assert_eq!(counter, 2);

        let (first, counter) = subcategory_anchor("General", 0, true);
        let (second, _) = subcategory_anchor("General", counter, true);
        assert_eq!(first, "general-");
        assert_eq!(second, "general--1");
    }

    #[test]
    fn test_subcategory_anchor_keeps_dots() {
        let (anchor, _) = subcategory_anchor("Node.js / Deno", 0, false);
        assert_eq!(anchor, "node.js--deno");
    }

    #[test]
    fn test_sanitize_filename_from_anchor() {
        assert_eq!(sanitize_filename_from_anchor("tooling-general"), "tooling_general");
        assert_eq!(sanitize_filename_from_anchor("ide-integrations--"), "ide_integrations");
        assert_eq!(sanitize_filename_from_anchor("version-control--git"), "version_control_git");
    }

    #[test]
    fn test_category_dir_name() {
        assert_eq!(category_dir_name("Agent Skills", "skills"), "AGENT_SKILLS/");
        assert_eq!(category_dir_name("CLAUDE.md Files", "claude-md-files"), "CLAUDE_MD_FILES/");
        assert_eq!(category_dir_name("Workflows & Knowledge Guides", "workflows"), "WORKFLOWS_&_GUIDES/");
    }

    fn category(name: &str, id: &str) -> Category {
        Category {
            name: name.to_string(),
            id: id.to_string(),
            prefix: id.to_string(),
            icon: None,
            description: String::new(),
            order: 1,
            subcategories: vec![Subcategory {
                name: GENERAL.to_string(),
                id: "general".to_string(),
                description: String::new(),
            }],
        }
    }

    fn resource(category: &str, sub: &str) -> Resource {
        Resource {
            category: category.to_string(),
            sub_category: sub.to_string(),
            ..Resource::default()
        }
    }

    #[test]
    fn test_general_map_distinct_per_category() {
        let categories = vec![category("Tooling", "tooling"), category("Hooks", "hooks"), category("Docs", "docs")];
        let resources = vec![resource("Tooling", "General"), resource("Hooks", "General")];
        let map = GeneralAnchorMap::build(&categories, &resources);

        assert_eq!(map.len(), 2);
        assert_eq!(map.get("tooling", "General"), Some("tooling-general"));
        assert_eq!(map.get("hooks", "General"), Some("hooks-general"));
        assert_eq!(map.get("docs", "General"), None);
        assert_ne!(map.get("tooling", "General"), map.get("hooks", "General"));
    }

    #[test]
    fn test_subcategory_id() {
        let map = GeneralAnchorMap::build(&[category("Tooling", "tooling")], &[resource("Tooling", "General")]);
        assert_eq!(map.subcategory_id("tooling", "General"), "tooling-general");
        assert_eq!(map.subcategory_id("tooling", "IDE Integrations"), "ide-integrations");
    }
}
