/*
 * session.rs
 * Copyright (c) 2025 awesome-claude-code maintainers
 *
 * Inputs shared by every document generated in one run.
 */

use chrono::NaiveDateTime;
use readme_catalog::CatalogSources;

use crate::backup::BackupStore;
use crate::config::ReadmeConfig;
use crate::error::Result;
use crate::layout::RepoLayout;

/// Everything one generation run reads from, created once and passed to
/// [`generate`](crate::generate::generate) for each document.
///
/// The taxonomy inside `sources` is cached for the lifetime of the session,
/// and all backups made in the session share one timestamp.
#[derive(Debug)]
pub struct RenderSession {
    layout: RepoLayout,
    config: ReadmeConfig,
    sources: CatalogSources,
    backups: BackupStore,
    today: NaiveDateTime,
}

impl RenderSession {
    pub fn new(layout: RepoLayout, config: ReadmeConfig) -> Self {
        let today = chrono::Local::now().naive_local();
        Self {
            sources: CatalogSources::new(layout.catalog_paths()),
            backups: BackupStore::at(layout.backup_dir(), today),
            layout,
            config,
            today,
        }
    }

    /// Session for the repository at `layout`, reading `acc-config.yaml`.
    pub fn open(layout: RepoLayout) -> Result<Self> {
        let config = ReadmeConfig::load(&layout.config_file())?;
        Ok(Self::new(layout, config))
    }

    /// Pin the reference date used for date windows and the generated date.
    pub fn with_today(mut self, today: NaiveDateTime) -> Self {
        self.today = today;
        self
    }

    pub fn with_backups(mut self, backups: BackupStore) -> Self {
        self.backups = backups;
        self
    }

    pub fn with_sources(mut self, sources: CatalogSources) -> Self {
        self.sources = sources;
        self
    }

    pub fn layout(&self) -> &RepoLayout {
        &self.layout
    }

    pub fn config(&self) -> &ReadmeConfig {
        &self.config
    }

    pub fn sources(&self) -> &CatalogSources {
        &self.sources
    }

    pub fn backups(&self) -> &BackupStore {
        &self.backups
    }

    pub fn today(&self) -> NaiveDateTime {
        self.today
    }
}
