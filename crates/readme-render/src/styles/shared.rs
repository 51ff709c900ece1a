//! Markup shared by several styles.

use std::path::Path;

use readme_catalog::{Announcement, AnnouncementItem};

use crate::assets::{asset_path_token, resolve_relative_link};
use crate::config::ReadmeConfig;
use crate::github::GithubRepo;

/// Heading every "back to top" link points at.
pub const BACK_TO_TOP_ANCHOR: &str = "#awesome-claude-code";

const STATS_CARD_BASE: &str = "https://github-readme-stats-fork-orpin.vercel.app/api/pin/";

/// Stats card URL for a GitHub repository.
pub fn github_stats_url(repo: &GithubRepo) -> String {
    format!(
        "{STATS_CARD_BASE}?repo={}&username={}&all_stats=true&stats_only=true",
        repo.repo, repo.owner
    )
}

/// Append a period unless `text` already ends a sentence.
pub fn with_terminal_punctuation(text: &str) -> String {
    if text.ends_with(['.', '!', '?']) {
        text.to_string()
    } else {
        format!("{text}.")
    }
}

/// The "Pick Your Style" badge row.
///
/// Links are relative to `output_path`, so the same selector works from the
/// root README and from documents beneath `README_ALTERNATIVES/`. The badge of
/// `current_style` gets a border in its highlight color.
pub fn style_selector(
    current_style: &str,
    output_path: &Path,
    repo_root: &Path,
    config: &ReadmeConfig,
) -> String {
    let mut lines = vec![
        "<h3 align=\"center\">Pick Your Style:</h3>".to_string(),
        "<p align=\"center\">".to_string(),
    ];

    for style_id in config.ordered_styles() {
        let href = resolve_relative_link(output_path, &config.selector_target(style_id), repo_root);
        let style_attr = if style_id == current_style {
            format!(
                " style=\"border: 2px solid {}; border-radius: 4px;\"",
                config.highlight_color(style_id)
            )
        } else {
            String::new()
        };
        lines.push(format!(
            "<a href=\"{href}\"><img src=\"{}\" alt=\"{}\" height=\"28\"{style_attr}></a>",
            asset_path_token(&config.badge(style_id)),
            config.display_name(style_id),
        ));
    }

    lines.push("</p>".to_string());
    lines.join("\n")
}

/// Collapsible announcements block. No entries render to an empty string.
pub fn announcements_markdown(announcements: &[Announcement]) -> String {
    if announcements.is_empty() {
        return String::new();
    }

    let mut lines: Vec<String> = vec![
        format!("### Announcements [🔝]({BACK_TO_TOP_ANCHOR})"),
        String::new(),
        "<details open>".to_string(),
        "<summary>View Announcements</summary>".to_string(),
        String::new(),
    ];

    for entry in announcements {
        lines.push("- <details open>".to_string());
        match entry.title.as_deref().filter(|t| !t.is_empty()) {
            Some(title) => lines.push(format!("  <summary>{} - {title}</summary>", entry.date)),
            None => lines.push(format!("  <summary>{}</summary>", entry.date)),
        }
        lines.push(String::new());

        for item in &entry.items {
            if push_announcement_item(&mut lines, item) {
                lines.push(String::new());
            }
        }

        lines.push("  </details>".to_string());
        lines.push(String::new());
    }

    lines.push("</details>".to_string());
    lines.join("\n").trim().to_string()
}

/// Returns `false` when the item has nothing to show.
fn push_announcement_item(lines: &mut Vec<String>, item: &AnnouncementItem) -> bool {
    match item {
        AnnouncementItem::Text(text) => lines.push(format!("  - {text}")),
        AnnouncementItem::Detailed { summary, text } if !summary.is_empty() && !text.is_empty() => {
            lines.push("  - <details open>".to_string());
            lines.push(format!("    <summary>{summary}</summary>"));
            lines.push(String::new());
            let mut text_lines = text.trim().lines();
            if let Some(first) = text_lines.next() {
                lines.push(format!("    - {first}"));
            }
            for rest in text_lines {
                lines.push(format!("      {rest}"));
            }
            lines.push(String::new());
            lines.push("    </details>".to_string());
        }
        AnnouncementItem::Detailed { summary, text } => {
            let only = if summary.is_empty() { text } else { summary };
            if only.is_empty() {
                return false;
            }
            lines.push(format!("  - {only}"));
        }
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_terminal_punctuation() {
        assert_eq!(with_terminal_punctuation("Does things"), "Does things.");
        assert_eq!(with_terminal_punctuation("Wow!"), "Wow!");
        assert_eq!(with_terminal_punctuation("Really?"), "Really?");
    }

    #[test]
    fn test_stats_url() {
        let repo = GithubRepo {
            owner: "me".to_string(),
            repo: "tool".to_string(),
        };
        assert_eq!(
            github_stats_url(&repo),
            "https://github-readme-stats-fork-orpin.vercel.app/api/pin/?repo=tool&username=me&all_stats=true&stats_only=true"
        );
    }

    #[test]
    fn test_selector_from_alternative_document() {
        let root = Path::new("/repo");
        let config = ReadmeConfig::default();
        let selector = style_selector(
            "classic",
            &root.join("README_ALTERNATIVES/README_CLASSIC.md"),
            root,
            &config,
        );

        assert!(selector.starts_with("<h3 align=\"center\">Pick Your Style:</h3>\n<p align=\"center\">"));
        assert!(selector.contains("<a href=\"../\"><img src=\"{{ASSET_PATH('badge-style-extra.svg')}}\" alt=\"Extra\" height=\"28\"></a>"));
        assert!(selector.contains(
            "<a href=\"README_CLASSIC.md\"><img src=\"{{ASSET_PATH('badge-style-classic.svg')}}\" alt=\"Classic\" height=\"28\" style=\"border: 2px solid #c9a227; border-radius: 4px;\"></a>"
        ));
        assert!(selector.contains("<a href=\"README_FLAT_ALL_AZ.md\">"));
        assert!(selector.ends_with("</p>"));
    }

    #[test]
    fn test_selector_from_root() {
        let root = Path::new("/repo");
        let config = ReadmeConfig::default();
        let selector = style_selector("extra", &root.join("README.md"), root, &config);
        assert!(selector.contains("<a href=\"./\">"));
        assert!(selector.contains("<a href=\"README_ALTERNATIVES/README_AWESOME.md\">"));
    }

    #[test]
    fn test_no_announcements() {
        assert_eq!(announcements_markdown(&[]), "");
    }

    #[test]
    fn test_announcements_markdown() {
        let entries = vec![Announcement {
            date: "2025-09-01".to_string(),
            title: Some("Flat views".to_string()),
            items: vec![
                AnnouncementItem::Text("New lists".to_string()),
                AnnouncementItem::Detailed {
                    summary: "Selector".to_string(),
                    text: "Line one\nLine two\n".to_string(),
                },
                AnnouncementItem::Detailed {
                    summary: String::new(),
                    text: "Bare text".to_string(),
                },
                AnnouncementItem::Detailed {
                    summary: String::new(),
                    text: String::new(),
                },
            ],
        }];

        let expected = "### Announcements [🔝](#awesome-claude-code)

<details open>
<summary>View Announcements</summary>

- <details open>
  <summary>2025-09-01 - Flat views</summary>

  - New lists

  - <details open>
    <summary>Selector</summary>

    - Line one
      Line two

    </details>

  - Bare text

  </details>

</details>";
        assert_eq!(announcements_markdown(&entries), expected);
    }

    #[test]
    fn test_announcements_skip_empty_items() {
        let entries = vec![Announcement {
            date: "2025-09-02".to_string(),
            title: None,
            items: vec![
                AnnouncementItem::Detailed {
                    summary: String::new(),
                    text: String::new(),
                },
                AnnouncementItem::Text("Kept".to_string()),
            ],
        }];

        let expected = "### Announcements [🔝](#awesome-claude-code)

<details open>
<summary>View Announcements</summary>

- <details open>
  <summary>2025-09-02</summary>

  - Kept

  </details>

</details>";
        assert_eq!(announcements_markdown(&entries), expected);
    }
}
