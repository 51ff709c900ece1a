/*
 * config.rs
 * Copyright (c) 2025 awesome-claude-code maintainers
 *
 * README style configuration (acc-config.yaml).
 */

//! README style configuration.
//!
//! ```yaml
//! readme:
//!   root_style: extra
//! styles:
//!   extra:
//!     name: Extra
//!     badge: badge-style-extra.svg
//!     highlight_color: "#6a6a8a"
//!     filename: README_EXTRA.md
//! style_order: [extra, classic, flat, awesome]
//! ```
//!
//! Exactly one style is the root style. It renders to `README.md`; every
//! other style renders beneath `README_ALTERNATIVES/`.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::{RenderError, Result};
use crate::layout::{ALTERNATIVES_DIR, ROOT_README};

const FALLBACK_ROOT_STYLE: &str = "extra";
const FALLBACK_HIGHLIGHT: &str = "#666666";

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ReadmeSection {
    #[serde(default)]
    pub root_style: Option<String>,
    /// Older name for `root_style`.
    #[serde(default)]
    pub default_style: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct StyleConfig {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub badge: Option<String>,
    #[serde(default)]
    pub highlight_color: Option<String>,
    #[serde(default)]
    pub filename: Option<String>,
}

fn default_style_order() -> Vec<String> {
    ["extra", "classic", "flat", "awesome"]
        .into_iter()
        .map(String::from)
        .collect()
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ReadmeConfig {
    #[serde(default)]
    pub readme: ReadmeSection,
    #[serde(default)]
    pub styles: BTreeMap<String, StyleConfig>,
    #[serde(default = "default_style_order")]
    pub style_order: Vec<String>,
}

fn builtin_style(name: &str, color: &str, filename: &str) -> StyleConfig {
    let id = name.to_lowercase();
    StyleConfig {
        name: Some(name.to_string()),
        badge: Some(format!("badge-style-{id}.svg")),
        highlight_color: Some(color.to_string()),
        filename: Some(filename.to_string()),
    }
}

impl Default for ReadmeConfig {
    fn default() -> Self {
        let styles = [
            ("extra", builtin_style("Extra", "#6a6a8a", "README_EXTRA.md")),
            ("classic", builtin_style("Classic", "#c9a227", "README_CLASSIC.md")),
            ("awesome", builtin_style("Awesome", "#cc3366", "README_AWESOME.md")),
            ("flat", builtin_style("Flat", "#71717a", "README_FLAT_ALL_AZ.md")),
        ]
        .into_iter()
        .map(|(id, style)| (id.to_string(), style))
        .collect();

        Self {
            readme: ReadmeSection {
                root_style: Some(FALLBACK_ROOT_STYLE.to_string()),
                default_style: None,
            },
            styles,
            style_order: default_style_order(),
        }
    }
}

fn title_case(id: &str) -> String {
    let mut chars = id.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
        None => String::new(),
    }
}

impl ReadmeConfig {
    pub fn parse(content: &str) -> std::result::Result<Self, serde_yaml::Error> {
        if content.trim().is_empty() {
            return serde_yaml::from_str("{}");
        }
        serde_yaml::from_str(content)
    }

    /// Load the configuration file, falling back to built-in defaults when absent.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            tracing::warn!(path = %path.display(), "Configuration file not found, using defaults");
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path).map_err(|e| RenderError::io(path, e))?;
        Self::parse(&content).map_err(|source| RenderError::Config {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Replace the configured root style.
    pub fn with_root_style(mut self, style_id: impl Into<String>) -> Self {
        self.readme.root_style = Some(style_id.into());
        self
    }

    /// The style rendered to the top-level `README.md`.
    pub fn root_style(&self) -> &str {
        [&self.readme.root_style, &self.readme.default_style]
            .into_iter()
            .flatten()
            .map(String::as_str)
            .find(|id| !id.is_empty())
            .unwrap_or(FALLBACK_ROOT_STYLE)
    }

    pub fn is_root_style(&self, style_id: &str) -> bool {
        self.root_style() == style_id
    }

    fn style(&self, style_id: &str) -> Option<&StyleConfig> {
        self.styles.get(style_id)
    }

    pub fn display_name(&self, style_id: &str) -> String {
        self.style(style_id)
            .and_then(|s| s.name.clone())
            .unwrap_or_else(|| title_case(style_id))
    }

    pub fn badge(&self, style_id: &str) -> String {
        self.style(style_id)
            .and_then(|s| s.badge.clone())
            .unwrap_or_else(|| format!("badge-style-{style_id}.svg"))
    }

    pub fn highlight_color(&self, style_id: &str) -> &str {
        self.style(style_id)
            .and_then(|s| s.highlight_color.as_deref())
            .unwrap_or(FALLBACK_HIGHLIGHT)
    }

    /// File name of a style's alternative document (no directory part).
    pub fn alternative_filename(&self, style_id: &str) -> String {
        let configured = self.style(style_id).and_then(|s| s.filename.as_deref());
        match configured {
            Some(filename) => Path::new(filename)
                .file_name()
                .map(|name| name.to_string_lossy().into_owned())
                .unwrap_or_else(|| filename.to_string()),
            None if style_id == "flat" => "README_FLAT_ALL_AZ.md".to_string(),
            None => format!("README_{}.md", style_id.to_uppercase()),
        }
    }

    /// Repository-relative target of a style selector link.
    pub fn selector_target(&self, style_id: &str) -> PathBuf {
        if self.is_root_style(style_id) {
            PathBuf::from(ROOT_README)
        } else {
            Path::new(ALTERNATIVES_DIR).join(self.alternative_filename(style_id))
        }
    }

    /// Style IDs in selector order, without duplicates.
    pub fn ordered_styles(&self) -> Vec<&str> {
        let mut seen = Vec::new();
        for id in &self.style_order {
            if !seen.contains(&id.as_str()) {
                seen.push(id.as_str());
            }
        }
        seen
    }
}
