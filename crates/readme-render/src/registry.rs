/*
 * registry.rs
 * Copyright (c) 2025 awesome-claude-code maintainers
 *
 * Registry of available README styles.
 */

//! Registry of available README styles.
//!
//! The registry maps style ids to generators and knows which documents a
//! full run produces: one alternative document per primary style, the flat
//! matrix, and the root `README.md`.

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::Arc;

use crate::config::ReadmeConfig;
use crate::error::{RenderError, Result};
use crate::layout::ROOT_README;
use crate::style::{StyleDocument, StyleGenerator};
use crate::styles::{AwesomeStyle, ClassicStyle, FlatStyle, VisualStyle};

/// Styles rendered once each into `README_ALTERNATIVES/`, in run order.
pub const PRIMARY_STYLES: [&str; 3] = ["extra", "classic", "awesome"];

/// Registry of README styles, keyed by style id.
///
/// `flat` is registered as the all-categories, A-Z document; other flat
/// combinations are built with [`FlatStyle::matrix`].
pub struct StyleRegistry {
    styles: HashMap<String, Arc<dyn StyleGenerator>>,
}

impl StyleRegistry {
    /// Create a registry with the built-in styles.
    pub fn new() -> Self {
        let mut registry = Self::empty();
        registry.register(Arc::new(VisualStyle));
        registry.register(Arc::new(ClassicStyle));
        registry.register(Arc::new(AwesomeStyle));
        registry.register(Arc::new(FlatStyle::default()));
        registry
    }

    /// Create an empty registry (for testing).
    pub fn empty() -> Self {
        Self {
            styles: HashMap::new(),
        }
    }

    /// Register a style, replacing any style with the same id.
    pub fn register(&mut self, style: Arc<dyn StyleGenerator>) {
        self.styles.insert(style.style_id().to_string(), style);
    }

    pub fn get(&self, style_id: &str) -> Option<Arc<dyn StyleGenerator>> {
        self.styles.get(style_id).cloned()
    }

    /// Look up a style, failing with [`RenderError::UnknownStyle`].
    pub fn require(&self, style_id: &str) -> Result<Arc<dyn StyleGenerator>> {
        self.get(style_id)
            .ok_or_else(|| RenderError::UnknownStyle(style_id.to_string()))
    }

    /// Registered style ids, sorted.
    pub fn style_ids(&self) -> Vec<&str> {
        let mut ids: Vec<&str> = self.styles.keys().map(String::as_str).collect();
        ids.sort_unstable();
        ids
    }

    pub fn has_style(&self, style_id: &str) -> bool {
        self.styles.contains_key(style_id)
    }

    pub fn len(&self) -> usize {
        self.styles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.styles.is_empty()
    }

    /// Primary styles that are registered, in run order.
    pub fn primary_styles(&self) -> Vec<Arc<dyn StyleGenerator>> {
        PRIMARY_STYLES.iter().filter_map(|id| self.get(id)).collect()
    }

    /// The generator for `README.md`.
    pub fn root_generator(&self, config: &ReadmeConfig) -> Result<Arc<dyn StyleGenerator>> {
        self.require(config.root_style())
    }

    /// Every document a full run writes, in run order.
    pub fn documents(&self, config: &ReadmeConfig) -> Result<Vec<StyleDocument>> {
        let mut documents: Vec<StyleDocument> = self
            .primary_styles()
            .iter()
            .map(|style| StyleDocument::for_generator(style.as_ref(), style.preferred_output_path()))
            .collect();
        documents.extend(
            FlatStyle::matrix()
                .iter()
                .map(|flat| StyleDocument::for_generator(flat, flat.preferred_output_path())),
        );
        let root = self.root_generator(config)?;
        documents.push(StyleDocument::for_generator(root.as_ref(), PathBuf::from(ROOT_README)));
        Ok(documents)
    }
}

impl Default for StyleRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for StyleRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StyleRegistry")
            .field("styles", &self.style_ids())
            .finish()
    }
}
