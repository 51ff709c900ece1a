/*
 * context.rs
 * Copyright (c) 2025 awesome-claude-code maintainers
 *
 * Per-generation render state.
 */

//! Per-generation render state.
//!
//! A [`RenderContext`] is built once for each document that is generated and
//! handed to every [`StyleGenerator`](crate::style::StyleGenerator) method.
//! It owns everything that is computed per run, like the General anchor map,
//! so that no state leaks from one generation into the next.

use chrono::{Duration, NaiveDateTime};
use readme_catalog::{Category, Resource, Subcategory};

use crate::anchor::GeneralAnchorMap;
use crate::asset_writer::AssetWriter;
use crate::config::ReadmeConfig;
use crate::layout::RepoLayout;

/// How far back "latest additions" reach.
pub const LATEST_ADDITIONS_DAYS: i64 = 7;

/// Minimum number of entries in "latest additions", regardless of age.
pub const LATEST_ADDITIONS_MIN: usize = 3;

/// Resources of one subcategory within a category section.
#[derive(Debug)]
pub struct SectionGroup<'c, 'r> {
    pub subcategory: Option<&'c Subcategory>,
    pub resources: Vec<&'r Resource>,
}

pub struct RenderContext<'a> {
    /// Taxonomy categories in display order
    pub categories: &'a [Category],

    /// Active resources in table order, overrides applied
    pub resources: Vec<Resource>,

    /// Rendered announcements block (may be empty)
    pub announcements: String,

    /// Footer template content (may be empty)
    pub footer: String,

    /// Shared anchors for "General" subcategories
    pub general_map: GeneralAnchorMap,

    pub layout: &'a RepoLayout,

    pub config: &'a ReadmeConfig,

    /// Writer for SVGs generated while rendering
    pub assets: AssetWriter,

    /// Captured once per generation; all date windows are relative to it
    pub today: NaiveDateTime,
}

impl<'a> RenderContext<'a> {
    pub fn new(
        categories: &'a [Category],
        resources: Vec<Resource>,
        layout: &'a RepoLayout,
        config: &'a ReadmeConfig,
        today: NaiveDateTime,
    ) -> Self {
        let general_map = GeneralAnchorMap::build(categories, &resources);
        Self {
            categories,
            resources,
            announcements: String::new(),
            footer: String::new(),
            general_map,
            layout,
            config,
            assets: AssetWriter::new(layout.assets_dir()),
            today,
        }
    }

    pub fn with_announcements(mut self, announcements: String) -> Self {
        self.announcements = announcements;
        self
    }

    pub fn with_footer(mut self, footer: String) -> Self {
        self.footer = footer;
        self
    }

    /// Resources filed under `category`, in table order.
    pub fn resources_in(&self, category: &Category) -> Vec<&Resource> {
        self.resources
            .iter()
            .filter(|r| r.category == category.name)
            .collect()
    }

    /// Resources filed under `category` / `subcategory`, in table order.
    pub fn resources_in_subcategory(&self, category: &Category, subcategory: &str) -> Vec<&Resource> {
        self.resources
            .iter()
            .filter(|r| r.category == category.name && r.subcategory() == subcategory)
            .collect()
    }

    /// Number of resources filed under some taxonomy category.
    pub fn listed_resource_count(&self) -> usize {
        self.resources
            .iter()
            .filter(|r| self.categories.iter().any(|c| c.name == r.category))
            .count()
    }

    pub fn category_has_resources(&self, category: &Category) -> bool {
        self.resources.iter().any(|r| r.category == category.name)
    }

    /// Populated groups of a category section, in taxonomy order.
    ///
    /// A category without subcategories forms a single unnamed group holding
    /// all of its resources. Empty groups are dropped.
    pub fn section_groups<'c>(&self, category: &'c Category) -> Vec<SectionGroup<'c, '_>> {
        if category.subcategories.is_empty() {
            let resources = self.resources_in(category);
            if resources.is_empty() {
                return Vec::new();
            }
            return vec![SectionGroup {
                subcategory: None,
                resources,
            }];
        }

        category
            .subcategories
            .iter()
            .filter_map(|sub| {
                let resources = self.resources_in_subcategory(category, &sub.name);
                (!resources.is_empty()).then_some(SectionGroup {
                    subcategory: Some(sub),
                    resources,
                })
            })
            .collect()
    }

    /// Recently added resources, newest first.
    ///
    /// Everything added in the last week is included, topped up with older
    /// additions until at least three entries are shown. Rows without a
    /// parseable "Date Added" never appear.
    pub fn latest_additions(&self) -> Vec<&Resource> {
        let mut dated: Vec<(NaiveDateTime, &Resource)> = self
            .resources
            .iter()
            .filter_map(|r| r.date_added_at().map(|added| (added, r)))
            .collect();
        dated.sort_by(|a, b| b.0.cmp(&a.0));

        let cutoff = self.today - Duration::days(LATEST_ADDITIONS_DAYS);
        let mut latest = Vec::new();
        for (added, resource) in dated {
            if added >= cutoff || latest.len() < LATEST_ADDITIONS_MIN {
                latest.push(resource);
            } else {
                break;
            }
        }
        latest
    }
}
