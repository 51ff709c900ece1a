/*
 * resource.rs
 * Copyright (c) 2025 awesome-claude-code maintainers
 *
 * Resource table rows and loading.
 */

//! Resource table rows and loading.
//!
//! Rows keep the table's raw text so that a row read and written back is
//! unchanged. Typed views (flags, dates, licenses) are exposed as accessors.

use std::path::Path;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::dates::{parse_release_timestamp, parse_resource_date};
use crate::error::{CatalogError, Result};
use crate::overrides::{Overrides, apply_override};

/// Sentinel used by the license collector when no license could be detected.
pub const LICENSE_NOT_FOUND: &str = "NOT_FOUND";

/// Columns that must be present in the table header.
pub const REQUIRED_COLUMNS: &[&str] = &["ID", "Display Name", "Category", "Primary Link", "Active"];

/// One row of the resource table.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Resource {
    #[serde(rename = "ID")]
    pub id: String,
    #[serde(rename = "Display Name")]
    pub display_name: String,
    #[serde(rename = "Category")]
    pub category: String,
    #[serde(rename = "Sub-Category", default)]
    pub sub_category: String,
    #[serde(rename = "Primary Link")]
    pub primary_link: String,
    #[serde(rename = "Secondary Link", default)]
    pub secondary_link: String,
    #[serde(rename = "Author Name", default)]
    pub author_name: String,
    #[serde(rename = "Author Link", default)]
    pub author_link: String,
    #[serde(rename = "Active")]
    pub active: String,
    #[serde(rename = "Date Added", default)]
    pub date_added: String,
    #[serde(rename = "Last Modified", default)]
    pub last_modified: String,
    #[serde(rename = "Last Checked", default)]
    pub last_checked: String,
    #[serde(rename = "License", default)]
    pub license: String,
    #[serde(rename = "Description", default)]
    pub description: String,
    #[serde(rename = "Removed From Origin", default)]
    pub removed_from_origin: String,
    #[serde(rename = "Stale", default)]
    pub stale: String,
    #[serde(rename = "Repo Created", default)]
    pub repo_created: String,
    #[serde(rename = "Latest Release", default)]
    pub latest_release: String,
    #[serde(rename = "Release Version", default)]
    pub release_version: String,
    #[serde(rename = "Release Source", default)]
    pub release_source: String,
}

fn is_true(value: &str) -> bool {
    value.trim().eq_ignore_ascii_case("TRUE")
}

impl Resource {
    pub fn is_active(&self) -> bool {
        is_true(&self.active)
    }

    pub fn is_removed_from_origin(&self) -> bool {
        is_true(&self.removed_from_origin)
    }

    pub fn is_stale(&self) -> bool {
        is_true(&self.stale)
    }

    /// Subcategory name with surrounding whitespace removed.
    pub fn subcategory(&self) -> &str {
        self.sub_category.trim()
    }

    pub fn author(&self) -> &str {
        self.author_name.trim()
    }

    pub fn author_url(&self) -> &str {
        self.author_link.trim()
    }

    pub fn summary(&self) -> &str {
        self.description.trim()
    }

    /// The license, or `None` when unknown.
    pub fn known_license(&self) -> Option<&str> {
        let license = self.license.trim();
        (!license.is_empty() && license != LICENSE_NOT_FOUND).then_some(license)
    }

    pub fn date_added_at(&self) -> Option<NaiveDateTime> {
        parse_resource_date(&self.date_added)
    }

    pub fn last_modified_at(&self) -> Option<NaiveDateTime> {
        parse_resource_date(&self.last_modified)
    }

    pub fn repo_created_at(&self) -> Option<NaiveDateTime> {
        parse_resource_date(&self.repo_created)
    }

    /// Latest release time. Only full collector timestamps count.
    pub fn latest_release_at(&self) -> Option<NaiveDateTime> {
        parse_release_timestamp(&self.latest_release)
    }
}

/// Read every row of the resource table, in file order.
pub fn load_resources(path: &Path) -> Result<Vec<Resource>> {
    let file = std::fs::File::open(path).map_err(|e| CatalogError::io(path, e))?;
    let mut reader = csv::ReaderBuilder::new().flexible(true).from_reader(file);

    let headers = reader
        .headers()
        .map_err(|e| CatalogError::csv(path, e))?
        .clone();
    let missing: Vec<String> = REQUIRED_COLUMNS
        .iter()
        .filter(|column| !headers.iter().any(|h| h.trim() == **column))
        .map(|column| column.to_string())
        .collect();
    if !missing.is_empty() {
        return Err(CatalogError::MissingColumns {
            path: path.to_path_buf(),
            columns: missing,
        });
    }

    let mut resources = Vec::new();
    for record in reader.deserialize::<Resource>() {
        resources.push(record.map_err(|e| CatalogError::csv(path, e))?);
    }
    tracing::debug!(path = %path.display(), rows = resources.len(), "Read resource table");
    Ok(resources)
}

/// Read the table, apply overrides, and keep only active rows.
///
/// The returned list preserves the table's on-disk order.
pub fn load_active_resources(path: &Path, overrides: &Overrides) -> Result<Vec<Resource>> {
    let active: Vec<Resource> = load_resources(path)?
        .into_iter()
        .map(|row| apply_override(row, overrides).resource)
        .filter(Resource::is_active)
        .collect();
    tracing::debug!(active = active.len(), "Filtered active resources");
    Ok(active)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const HEADER: &str = "ID,Display Name,Category,Sub-Category,Primary Link,Secondary Link,Author Name,Author Link,Active,Date Added,Last Modified,Last Checked,License,Description,Removed From Origin,Stale,Repo Created,Latest Release,Release Version,Release Source";

    fn write_table(rows: &[&str]) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "{HEADER}").unwrap();
        for row in rows {
            writeln!(file, "{row}").unwrap();
        }
        file
    }

    #[test]
    fn test_load_keeps_file_order() {
        let file = write_table(&[
            "b-1,Beta,Tooling,General,https://example.com/b,,,,TRUE,2025-01-02,,,MIT,Second,FALSE,FALSE,,,,",
            "a-1,Alpha,Tooling,General,https://example.com/a,,,,TRUE,2025-01-01,,,MIT,First,FALSE,FALSE,,,,",
        ]);
        let rows = load_resources(file.path()).unwrap();
        assert_eq!(rows.iter().map(|r| r.id.as_str()).collect::<Vec<_>>(), vec!["b-1", "a-1"]);
    }

    #[test]
    fn test_active_filter_is_case_insensitive() {
        let file = write_table(&[
            "a-1,Alpha,Tooling,,https://a,,,,true,,,,,,,,,,,",
            "b-1,Beta,Tooling,,https://b,,,,FALSE,,,,,,,,,,,",
            "c-1,Gamma,Tooling,,https://c,,,,True,,,,,,,,,,,",
        ]);
        let rows = load_active_resources(file.path(), &Overrides::default()).unwrap();
        assert_eq!(rows.iter().map(|r| r.id.as_str()).collect::<Vec<_>>(), vec!["a-1", "c-1"]);
    }

    #[test]
    fn test_override_can_deactivate() {
        let file = write_table(&["a-1,Alpha,Tooling,,https://a,,,,TRUE,,,,,,,,,,,"]);
        let overrides = Overrides::parse("overrides:\n  a-1:\n    active: \"FALSE\"\n").unwrap();
        let rows = load_active_resources(file.path(), &overrides).unwrap();
        assert!(rows.is_empty());
    }

    #[test]
    fn test_missing_required_columns() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "ID,Display Name,Description").unwrap();
        let err = load_resources(file.path()).unwrap_err();
        match err {
            CatalogError::MissingColumns { columns, .. } => {
                assert_eq!(columns, vec!["Category", "Primary Link", "Active"]);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_resources(&dir.path().join("nope.csv")).unwrap_err();
        assert!(matches!(err, CatalogError::Io { .. }));
    }

    #[test]
    fn test_accessors() {
        let resource = Resource {
            license: "NOT_FOUND".to_string(),
            removed_from_origin: "TRUE".to_string(),
            sub_category: " General ".to_string(),
            latest_release: "2025-03-01".to_string(),
            last_modified: "2025-03-01:10-00-00".to_string(),
            ..Resource::default()
        };
        assert_eq!(resource.known_license(), None);
        assert!(resource.is_removed_from_origin());
        assert_eq!(resource.subcategory(), "General");
        assert!(resource.latest_release_at().is_none());
        assert!(resource.last_modified_at().is_some());
    }
}
