//! End-to-end loading of a catalog directory.

use std::fs;
use std::path::Path;

use pretty_assertions::assert_eq;
use readme_catalog::{CatalogPaths, CatalogSources, LockedField, Overrides, apply_override, load_resources};
use tempfile::TempDir;

const TABLE: &str = "\
ID,Display Name,Category,Sub-Category,Primary Link,Secondary Link,Author Name,Author Link,Active,Date Added,Last Modified,Last Checked,License,Description,Removed From Origin,Stale,Repo Created,Latest Release,Release Version,Release Source
hook-1,Hook Runner,Hooks,General,https://github.com/acme/hook-runner,,acme,https://github.com/acme,TRUE,2025-09-01:10-00-00,2025-09-10:10-00-00,,MIT,Runs hooks.,FALSE,FALSE,2024-01-01:00-00-00,,,
hook-2,Old Hook,Hooks,General,https://github.com/acme/old-hook,,acme,https://github.com/acme,TRUE,2025-01-01,,,NOT_FOUND,Retired.,FALSE,FALSE,,,,
tool-1,\"Tool, With Comma\",Tooling,,https://example.com/tool,,Jane,,FALSE,2025-02-01,,,Apache-2.0,\"Quoted, description\",FALSE,FALSE,,,,
";

struct CatalogFixture {
    dir: TempDir,
}

impl CatalogFixture {
    fn new() -> Self {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("THE_RESOURCES_TABLE.csv"), TABLE).unwrap();
        fs::write(
            dir.path().join("categories.yaml"),
            "categories:\n  - name: Tooling\n    id: tooling\n    order: 2\n  - name: Hooks\n    id: hooks\n    order: 1\n",
        )
        .unwrap();
        fs::write(
            dir.path().join("resource-overrides.yaml"),
            "overrides:\n  hook-2:\n    active: false\n  tool-1:\n    active: \"TRUE\"\n    license: MIT\n",
        )
        .unwrap();
        Self { dir }
    }

    fn root(&self) -> &Path {
        self.dir.path()
    }

    fn sources(&self) -> CatalogSources {
        CatalogSources::new(CatalogPaths {
            resources: self.root().join("THE_RESOURCES_TABLE.csv"),
            categories: self.root().join("categories.yaml"),
            overrides: self.root().join("resource-overrides.yaml"),
            announcements: self.root().join("announcements.yaml"),
        })
    }
}

#[test]
fn test_overrides_flip_active_rows() {
    let fixture = CatalogFixture::new();
    let sources = fixture.sources();
    let overrides = sources.overrides().unwrap();
    let active = sources.active_resources(&overrides).unwrap();

    let ids: Vec<&str> = active.iter().map(|r| r.id.as_str()).collect();
    assert_eq!(ids, vec!["hook-1", "tool-1"]);
    assert_eq!(active[1].display_name, "Tool, With Comma");
    assert_eq!(active[1].license, "MIT");
}

#[test]
fn test_taxonomy_order_and_missing_announcements() {
    let fixture = CatalogFixture::new();
    let sources = fixture.sources();
    assert_eq!(
        sources.taxonomy().unwrap().category_names(),
        vec!["Hooks", "Tooling"]
    );
    assert!(sources.announcements().unwrap().is_empty());
}

#[test]
fn test_locked_fields_reported_per_row() {
    let fixture = CatalogFixture::new();
    let overrides = Overrides::load(&fixture.root().join("resource-overrides.yaml")).unwrap();
    let rows = load_resources(&fixture.root().join("THE_RESOURCES_TABLE.csv")).unwrap();

    let tool = rows.into_iter().find(|r| r.id == "tool-1").unwrap();
    let applied = apply_override(tool, &overrides);
    assert_eq!(
        applied.locked_fields.into_iter().collect::<Vec<_>>(),
        vec![LockedField::License, LockedField::Active]
    );
}
