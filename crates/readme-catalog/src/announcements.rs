//! Announcement entries from `templates/announcements.yaml`.

use std::path::Path;

use serde::Deserialize;

use crate::error::{CatalogError, Result};

/// One announcement item: either a single line or a summary with body text.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum AnnouncementItem {
    Text(String),
    Detailed {
        #[serde(default)]
        summary: String,
        #[serde(default)]
        text: String,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Announcement {
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub items: Vec<AnnouncementItem>,
}

/// Parse announcements. An empty document has no entries.
pub fn parse_announcements(content: &str) -> std::result::Result<Vec<Announcement>, serde_yaml::Error> {
    if content.trim().is_empty() {
        return Ok(Vec::new());
    }
    let entries: Option<Vec<Announcement>> = serde_yaml::from_str(content)?;
    Ok(entries.unwrap_or_default())
}

/// Load announcements; an absent file yields no entries.
pub fn load_announcements(path: &Path) -> Result<Vec<Announcement>> {
    if !path.exists() {
        return Ok(Vec::new());
    }
    let content = std::fs::read_to_string(path).map_err(|e| CatalogError::io(path, e))?;
    parse_announcements(&content).map_err(|e| CatalogError::yaml(path, e))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_mixed_items() {
        let entries = parse_announcements(
            r#"
- date: "2025-09-01"
  title: Flat views
  items:
    - New sortable flat lists
    - summary: Style selector
      text: |
        Pick a style at the top.
        Links work from every page.
- date: "2025-08-01"
  items: []
"#,
        )
        .unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].title.as_deref(), Some("Flat views"));
        assert_eq!(
            entries[0].items[0],
            AnnouncementItem::Text("New sortable flat lists".to_string())
        );
        match &entries[0].items[1] {
            AnnouncementItem::Detailed { summary, text } => {
                assert_eq!(summary, "Style selector");
                assert!(text.starts_with("Pick a style"));
            }
            other => panic!("unexpected item: {other:?}"),
        }
        assert!(entries[1].title.is_none());
    }

    #[test]
    fn test_empty_and_missing() {
        assert!(parse_announcements("").unwrap().is_empty());
        let dir = tempfile::tempdir().unwrap();
        assert!(load_announcements(&dir.path().join("announcements.yaml")).unwrap().is_empty());
    }
}
