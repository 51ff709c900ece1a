/*
 * sources.rs
 * Copyright (c) 2025 awesome-claude-code maintainers
 *
 * Catalog file locations and the per-run taxonomy cache.
 */

//! Catalog file locations and the per-run taxonomy cache.
//!
//! A [`CatalogSources`] value is constructed once per generation run and
//! passed to whatever needs catalog data. The taxonomy is parsed on first
//! access and then reused for the lifetime of that value. There is no reload:
//! a changed taxonomy file is only observed by a new `CatalogSources`.

use std::path::PathBuf;
use std::sync::OnceLock;

use crate::announcements::{Announcement, load_announcements};
use crate::error::Result;
use crate::overrides::Overrides;
use crate::resource::{Resource, load_active_resources};
use crate::taxonomy::Taxonomy;

/// Locations of the catalog input files.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogPaths {
    pub resources: PathBuf,
    pub categories: PathBuf,
    pub overrides: PathBuf,
    pub announcements: PathBuf,
}

#[derive(Debug)]
pub struct CatalogSources {
    paths: CatalogPaths,
    taxonomy: OnceLock<Taxonomy>,
}

impl CatalogSources {
    pub fn new(paths: CatalogPaths) -> Self {
        Self {
            paths,
            taxonomy: OnceLock::new(),
        }
    }

    /// Sources with an already-built taxonomy; the categories file is never read.
    pub fn with_taxonomy(paths: CatalogPaths, taxonomy: Taxonomy) -> Self {
        let cell = OnceLock::new();
        let _ = cell.set(taxonomy);
        Self {
            paths,
            taxonomy: cell,
        }
    }

    pub fn paths(&self) -> &CatalogPaths {
        &self.paths
    }

    /// The taxonomy, loading it on first call.
    pub fn taxonomy(&self) -> Result<&Taxonomy> {
        if let Some(taxonomy) = self.taxonomy.get() {
            return Ok(taxonomy);
        }
        let loaded = Taxonomy::load(&self.paths.categories)?;
        Ok(self.taxonomy.get_or_init(|| loaded))
    }

    pub fn overrides(&self) -> Result<Overrides> {
        Overrides::load(&self.paths.overrides)
    }

    pub fn active_resources(&self, overrides: &Overrides) -> Result<Vec<Resource>> {
        load_active_resources(&self.paths.resources, overrides)
    }

    pub fn announcements(&self) -> Result<Vec<Announcement>> {
        load_announcements(&self.paths.announcements)
    }
}
