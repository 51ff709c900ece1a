//! Per-resource overrides.
//!
//! `templates/resource-overrides.yaml` lets maintainers pin fields that the
//! automated collectors would otherwise rewrite:
//!
//! ```yaml
//! overrides:
//!   tool-00a1b2c3:
//!     license: MIT
//!     license_locked: true
//!     active: "FALSE"
//!     skip_validation: true
//!     notes: Repository archived, keep listed until replacement lands.
//! ```
//!
//! Only `license`, `active` and `description` change what gets rendered.
//! `skip_validation` and `notes` belong to the link validator. Any other key
//! (the `*_locked` markers among them) is ignored here.

use std::collections::{BTreeMap, BTreeSet};
use std::path::Path;

use serde::Deserialize;

use crate::error::{CatalogError, Result};
use crate::resource::Resource;

/// An `active:` override, written either as a YAML boolean or as text.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum OverrideFlag {
    Bool(bool),
    Text(String),
}

impl OverrideFlag {
    /// The value as it would appear in the resource table.
    pub fn as_table_value(&self) -> String {
        match self {
            Self::Bool(true) => "TRUE".to_string(),
            Self::Bool(false) => "FALSE".to_string(),
            Self::Text(text) => text.clone(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct OverrideEntry {
    #[serde(default)]
    pub license: Option<String>,
    #[serde(default)]
    pub active: Option<OverrideFlag>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub skip_validation: bool,
    #[serde(default)]
    pub notes: Option<String>,
}

/// Fields an override can replace.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum LockedField {
    License,
    Active,
    Description,
}

impl LockedField {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::License => "license",
            Self::Active => "active",
            Self::Description => "description",
        }
    }
}

#[derive(Debug, Deserialize)]
struct OverrideFile {
    #[serde(default)]
    overrides: Option<BTreeMap<String, OverrideEntry>>,
}

/// Override entries keyed by resource ID.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    entries: BTreeMap<String, OverrideEntry>,
}

impl Overrides {
    pub fn new(entries: BTreeMap<String, OverrideEntry>) -> Self {
        Self { entries }
    }

    pub fn parse(content: &str) -> std::result::Result<Self, serde_yaml::Error> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        let file: Option<OverrideFile> = serde_yaml::from_str(content)?;
        Ok(Self::new(
            file.and_then(|f| f.overrides).unwrap_or_default(),
        ))
    }

    /// Load overrides. An absent file yields an empty set; a malformed one is an error.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "No override file, using empty overrides");
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path).map_err(|e| CatalogError::io(path, e))?;
        let overrides = Self::parse(&content).map_err(|e| CatalogError::yaml(path, e))?;
        tracing::debug!(path = %path.display(), entries = overrides.len(), "Loaded overrides");
        Ok(overrides)
    }

    pub fn get(&self, resource_id: &str) -> Option<&OverrideEntry> {
        self.entries.get(resource_id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Result of applying overrides to one resource row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppliedOverride {
    pub resource: Resource,
    /// Fields whose values came from the override file.
    pub locked_fields: BTreeSet<LockedField>,
    pub skip_validation: bool,
}

/// Apply the override for `resource.id`, if any.
pub fn apply_override(mut resource: Resource, overrides: &Overrides) -> AppliedOverride {
    let mut locked_fields = BTreeSet::new();
    let Some(entry) = overrides.get(&resource.id) else {
        return AppliedOverride {
            resource,
            locked_fields,
            skip_validation: false,
        };
    };

    if let Some(license) = &entry.license {
        resource.license = license.clone();
        locked_fields.insert(LockedField::License);
    }
    if let Some(active) = &entry.active {
        resource.active = active.as_table_value();
        locked_fields.insert(LockedField::Active);
    }
    if let Some(description) = &entry.description {
        resource.description = description.clone();
        locked_fields.insert(LockedField::Description);
    }

    AppliedOverride {
        resource,
        locked_fields,
        skip_validation: entry.skip_validation,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn resource(id: &str) -> Resource {
        Resource {
            id: id.to_string(),
            display_name: "Thing".to_string(),
            license: "NOT_FOUND".to_string(),
            active: "TRUE".to_string(),
            description: "Original".to_string(),
            ..Resource::default()
        }
    }

    #[test]
    fn test_parse_ignores_locked_markers_and_unknown_keys() {
        let overrides = Overrides::parse(
            r#"
overrides:
  tool-1:
    license: MIT
    license_locked: true
    notes: checked by hand
    something_else: 42
"#,
        )
        .unwrap();
        let entry = overrides.get("tool-1").unwrap();
        assert_eq!(entry.license.as_deref(), Some("MIT"));
        assert_eq!(entry.notes.as_deref(), Some("checked by hand"));
        assert!(!entry.skip_validation);
    }

    #[test]
    fn test_apply_replaces_fields_and_records_locks() {
        let overrides = Overrides::parse(
            r#"
overrides:
  tool-1:
    license: Apache-2.0
    active: false
    description: Replacement
    skip_validation: true
"#,
        )
        .unwrap();
        let applied = apply_override(resource("tool-1"), &overrides);
        assert_eq!(applied.resource.license, "Apache-2.0");
        assert_eq!(applied.resource.active, "FALSE");
        assert_eq!(applied.resource.description, "Replacement");
        assert!(applied.skip_validation);
        assert_eq!(
            applied.locked_fields.into_iter().collect::<Vec<_>>(),
            vec![LockedField::License, LockedField::Active, LockedField::Description]
        );
    }

    #[test]
    fn test_apply_without_entry_is_identity() {
        let overrides = Overrides::parse("overrides:\n  other: {license: MIT}\n").unwrap();
        let applied = apply_override(resource("tool-1"), &overrides);
        assert_eq!(applied.resource, resource("tool-1"));
        assert!(applied.locked_fields.is_empty());
        assert!(!applied.skip_validation);
    }

    #[test]
    fn test_text_active_flag_is_kept_verbatim() {
        let overrides = Overrides::parse("overrides:\n  tool-1:\n    active: \"false\"\n").unwrap();
        let applied = apply_override(resource("tool-1"), &overrides);
        assert_eq!(applied.resource.active, "false");
    }

    #[test]
    fn test_empty_documents_yield_no_overrides() {
        assert!(Overrides::parse("").unwrap().is_empty());
        assert!(Overrides::parse("overrides:\n").unwrap().is_empty());
    }

    #[test]
    fn test_missing_file_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let overrides = Overrides::load(&dir.path().join("resource-overrides.yaml")).unwrap();
        assert!(overrides.is_empty());
    }

    #[test]
    fn test_malformed_file_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("resource-overrides.yaml");
        std::fs::write(&path, "overrides: [unclosed").unwrap();
        let err = Overrides::load(&path).unwrap_err();
        assert!(matches!(err, CatalogError::Yaml { .. }));
    }
}
