/*
 * pipeline.rs
 * Copyright (c) 2025 awesome-claude-code maintainers
 *
 * Full README generation run.
 */

//! Full README generation run.
//!
//! The run is sequential and stops at the first error:
//!
//! 1. Flat list sort and category badges
//! 2. Each primary style into `README_ALTERNATIVES/README_{ID}.md`
//! 3. All flat documents (every category filter with every sort mode)
//! 4. The root style into `README.md`
//!
//! The root style is rendered twice: once as its alternative document and
//! once as the root README, whose asset paths and links differ.

use std::path::Path;

use readme_catalog::Category;

use crate::asset_writer::AssetWriter;
use crate::error::Result;
use crate::generate::{GenerationReport, generate};
use crate::layout::ROOT_README;
use crate::registry::StyleRegistry;
use crate::session::RenderSession;
use crate::styles::FlatStyle;

/// Every document written by a run, in order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PipelineReport {
    pub reports: Vec<GenerationReport>,
}

impl PipelineReport {
    pub fn len(&self) -> usize {
        self.reports.len()
    }

    pub fn is_empty(&self) -> bool {
        self.reports.is_empty()
    }

    /// Report for the root `README.md`, if the run got that far.
    pub fn root(&self) -> Option<&GenerationReport> {
        self.reports.last().filter(|r| r.output_path.ends_with(ROOT_README))
    }

    pub fn backups(&self) -> impl Iterator<Item = &Path> {
        self.reports.iter().filter_map(|r| r.backup_path.as_deref())
    }
}

#[derive(Debug)]
pub struct ReadmePipeline {
    session: RenderSession,
    registry: StyleRegistry,
}

impl ReadmePipeline {
    pub fn new(session: RenderSession) -> Self {
        Self {
            session,
            registry: StyleRegistry::new(),
        }
    }

    pub fn with_registry(mut self, registry: StyleRegistry) -> Self {
        self.registry = registry;
        self
    }

    pub fn session(&self) -> &RenderSession {
        &self.session
    }

    pub fn registry(&self) -> &StyleRegistry {
        &self.registry
    }

    pub fn run(&self) -> Result<PipelineReport> {
        let layout = self.session.layout();
        let config = self.session.config();
        let root = self.registry.root_generator(config)?;
        let mut report = PipelineReport::default();

        tracing::info!(root = %layout.root().display(), root_style = root.style_id(), "Starting README generation");

        let badges = AssetWriter::new(layout.assets_dir()).flat_badges()?;
        tracing::info!(count = badges, "Generated flat list badges");

        for style in self.registry.primary_styles() {
            report.reports.push(generate(style.as_ref(), &self.session, None)?);
        }

        for flat in FlatStyle::matrix() {
            report.reports.push(generate(&flat, &self.session, None)?);
        }
        tracing::info!(count = FlatStyle::matrix().len(), "Generated flat lists");

        report
            .reports
            .push(generate(root.as_ref(), &self.session, Some(Path::new(ROOT_README)))?);

        tracing::info!(documents = report.len(), "README generation complete");
        Ok(report)
    }

    /// Regenerate the TOC row, subcategory and header SVGs from the taxonomy.
    pub fn regenerate_toc_assets(&self) -> Result<usize> {
        let taxonomy = self.session.sources().taxonomy()?;
        regenerate_toc_assets(taxonomy.categories(), &self.session.layout().assets_dir())
    }
}

/// Write dark and light TOC SVGs for `categories` into `assets_dir`.
pub fn regenerate_toc_assets(categories: &[Category], assets_dir: &Path) -> Result<usize> {
    AssetWriter::new(assets_dir).regenerate_toc_assets(categories)
}
