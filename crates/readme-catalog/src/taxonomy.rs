/*
 * taxonomy.rs
 * Copyright (c) 2025 awesome-claude-code maintainers
 *
 * Category and subcategory definitions.
 */

//! Category and subcategory definitions.
//!
//! The taxonomy is read from `templates/categories.yaml`:
//!
//! ```yaml
//! categories:
//!   - name: Agent Skills
//!     id: skills
//!     prefix: skill
//!     icon: "🤖"
//!     description: Model-controlled configurations...
//!     order: 1
//!     subcategories:
//!       - name: General
//!         id: general
//!         description: ...
//! ```
//!
//! Categories are exposed sorted by `order` (missing order sorts as 999).
//! A taxonomy is immutable once built.

use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{CatalogError, Result};

const DEFAULT_ORDER: i64 = 999;

fn default_order() -> i64 {
    DEFAULT_ORDER
}

/// One subcategory beneath a [`Category`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Subcategory {
    pub name: String,
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub description: String,
}

/// A top-level category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub name: String,
    pub id: String,
    #[serde(default)]
    pub prefix: String,
    /// Trailing emoji shown after the heading. May carry a variation selector.
    #[serde(default)]
    pub icon: Option<String>,
    #[serde(default)]
    pub description: String,
    #[serde(default = "default_order")]
    pub order: i64,
    #[serde(default)]
    pub subcategories: Vec<Subcategory>,
}

impl Category {
    /// The icon, or an empty string when the category has none.
    pub fn icon(&self) -> &str {
        self.icon.as_deref().unwrap_or_default()
    }

    pub fn has_subcategory(&self, name: &str) -> bool {
        self.subcategories.iter().any(|sub| sub.name == name)
    }
}

/// A subcategory together with the name of its parent category.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubcategoryRef {
    pub parent: String,
    pub name: String,
    pub full_name: String,
}

#[derive(Debug, Deserialize)]
struct TaxonomyFile {
    #[serde(default)]
    categories: Vec<Category>,
    #[serde(default)]
    toc: Option<serde_yaml::Value>,
}

/// The ordered category taxonomy.
#[derive(Debug, Clone, Default)]
pub struct Taxonomy {
    categories: Vec<Category>,
    toc: Option<serde_yaml::Value>,
}

impl Taxonomy {
    /// Build a taxonomy from categories, sorting them by display order.
    pub fn new(mut categories: Vec<Category>) -> Self {
        categories.sort_by_key(|category| category.order);
        Self {
            categories,
            toc: None,
        }
    }

    /// Parse a taxonomy from YAML text.
    pub fn parse(content: &str) -> std::result::Result<Self, serde_yaml::Error> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        let file: TaxonomyFile = serde_yaml::from_str(content)?;
        let mut taxonomy = Self::new(file.categories);
        taxonomy.toc = file.toc;
        Ok(taxonomy)
    }

    /// Load a taxonomy file. Missing or malformed files are errors.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| CatalogError::io(path, e))?;
        let taxonomy = Self::parse(&content).map_err(|e| CatalogError::yaml(path, e))?;
        tracing::debug!(
            path = %path.display(),
            categories = taxonomy.categories.len(),
            "Loaded category taxonomy"
        );
        Ok(taxonomy)
    }

    /// Categories in display order.
    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    pub fn category_names(&self) -> Vec<&str> {
        self.categories.iter().map(|c| c.name.as_str()).collect()
    }

    pub fn category_by_name(&self, name: &str) -> Option<&Category> {
        self.categories.iter().find(|c| c.name == name)
    }

    pub fn category_by_id(&self, id: &str) -> Option<&Category> {
        self.categories.iter().find(|c| c.id == id)
    }

    /// Map of category name to resource ID prefix.
    pub fn prefixes(&self) -> BTreeMap<&str, &str> {
        self.categories
            .iter()
            .map(|c| (c.name.as_str(), c.prefix.as_str()))
            .collect()
    }

    /// Every subcategory, paired with its parent category name.
    pub fn all_subcategories(&self) -> Vec<SubcategoryRef> {
        self.categories
            .iter()
            .flat_map(|category| {
                category.subcategories.iter().map(|sub| SubcategoryRef {
                    parent: category.name.clone(),
                    name: sub.name.clone(),
                    full_name: format!("{}: {}", category.name, sub.name),
                })
            })
            .collect()
    }

    pub fn subcategories_for(&self, category_name: &str) -> Vec<&str> {
        self.category_by_name(category_name)
            .map(|c| c.subcategories.iter().map(|s| s.name.as_str()).collect())
            .unwrap_or_default()
    }

    /// Check that `subcategory` belongs to `category`.
    ///
    /// An empty subcategory is always valid; an unknown category never is.
    pub fn validate_category_subcategory(&self, category: &str, subcategory: &str) -> bool {
        if subcategory.is_empty() {
            return true;
        }
        self.category_by_name(category)
            .is_some_and(|c| c.has_subcategory(subcategory))
    }

    /// The raw `toc:` section of the taxonomy file, if present.
    pub fn toc_config(&self) -> Option<&serde_yaml::Value> {
        self.toc.as_ref()
    }

    pub fn len(&self) -> usize {
        self.categories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }
}
