/*
 * layout.rs
 * Copyright (c) 2025 awesome-claude-code maintainers
 *
 * Repository layout for README generation.
 */

//! Repository layout for README generation.
//!
//! Every path the pipeline reads or writes is derived from the repository
//! root through [`RepoLayout`], so tests can point a whole run at a
//! temporary directory.

use std::path::{Path, PathBuf};

use readme_catalog::CatalogPaths;

pub const RESOURCES_TABLE: &str = "THE_RESOURCES_TABLE.csv";
pub const TEMPLATES_DIR: &str = "templates";
pub const ASSETS_DIR: &str = "assets";
pub const ALTERNATIVES_DIR: &str = "README_ALTERNATIVES";
pub const BACKUP_DIR: &str = ".myob/backups";
pub const CONFIG_FILE: &str = "acc-config.yaml";
pub const ROOT_README: &str = "README.md";

/// Files whose presence marks a directory as the repository root.
const ROOT_MARKERS: &[&str] = &[CONFIG_FILE, RESOURCES_TABLE];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepoLayout {
    root: PathBuf,
}

impl RepoLayout {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Walk upward from `start` until a directory containing a root marker is found.
    pub fn discover(start: &Path) -> Option<Self> {
        start
            .ancestors()
            .find(|dir| ROOT_MARKERS.iter().any(|marker| dir.join(marker).is_file()))
            .map(Self::new)
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Resolve a repository-relative path. Absolute paths are returned unchanged.
    pub fn resolve(&self, path: impl AsRef<Path>) -> PathBuf {
        let path = path.as_ref();
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.root.join(path)
        }
    }

    pub fn resources_table(&self) -> PathBuf {
        self.root.join(RESOURCES_TABLE)
    }

    pub fn templates_dir(&self) -> PathBuf {
        self.root.join(TEMPLATES_DIR)
    }

    pub fn template(&self, name: &str) -> PathBuf {
        self.templates_dir().join(name)
    }

    pub fn categories_file(&self) -> PathBuf {
        self.template("categories.yaml")
    }

    pub fn overrides_file(&self) -> PathBuf {
        self.template("resource-overrides.yaml")
    }

    pub fn announcements_file(&self) -> PathBuf {
        self.template("announcements.yaml")
    }

    pub fn footer_template(&self) -> PathBuf {
        self.template("footer.template.md")
    }

    pub fn assets_dir(&self) -> PathBuf {
        self.root.join(ASSETS_DIR)
    }

    pub fn alternatives_dir(&self) -> PathBuf {
        self.root.join(ALTERNATIVES_DIR)
    }

    pub fn backup_dir(&self) -> PathBuf {
        self.root.join(BACKUP_DIR)
    }

    pub fn config_file(&self) -> PathBuf {
        self.root.join(CONFIG_FILE)
    }

    pub fn root_readme(&self) -> PathBuf {
        self.root.join(ROOT_README)
    }

    pub fn catalog_paths(&self) -> CatalogPaths {
        CatalogPaths {
            resources: self.resources_table(),
            categories: self.categories_file(),
            overrides: self.overrides_file(),
            announcements: self.announcements_file(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paths_hang_off_root() {
        let layout = RepoLayout::new("/repo");
        assert_eq!(layout.resources_table(), PathBuf::from("/repo/THE_RESOURCES_TABLE.csv"));
        assert_eq!(layout.categories_file(), PathBuf::from("/repo/templates/categories.yaml"));
        assert_eq!(layout.backup_dir(), PathBuf::from("/repo/.myob/backups"));
        assert_eq!(
            layout.resolve("README_ALTERNATIVES/README_EXTRA.md"),
            PathBuf::from("/repo/README_ALTERNATIVES/README_EXTRA.md")
        );
        assert_eq!(layout.resolve("/elsewhere/x.md"), PathBuf::from("/elsewhere/x.md"));
    }

    #[test]
    fn test_discover_walks_upward() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join(CONFIG_FILE), "readme: {}\n").unwrap();
        let nested = dir.path().join("scripts").join("readme");
        std::fs::create_dir_all(&nested).unwrap();

        let layout = RepoLayout::discover(&nested).unwrap();
        assert_eq!(layout.root(), dir.path());
    }
}
