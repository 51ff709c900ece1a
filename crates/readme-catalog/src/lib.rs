/*
 * lib.rs
 * Copyright (c) 2025 awesome-claude-code maintainers
 *
 * Catalog inputs for README generation.
 */

//! Catalog inputs for README generation.
//!
//! This crate owns everything the renderer reads but never writes:
//!
//! - [`resource`]: the tabular resource catalog (`THE_RESOURCES_TABLE.csv`)
//! - [`taxonomy`]: ordered category and subcategory definitions
//! - [`overrides`]: per-resource field replacements applied before rendering
//! - [`announcements`]: dated announcement entries shown at the top of a README
//! - [`sources`]: file locations plus a lazily loaded, per-run taxonomy
//!
//! All loaders are synchronous and local; nothing here touches the network.

pub mod announcements;
pub mod dates;
pub mod error;
pub mod overrides;
pub mod resource;
pub mod sources;
pub mod taxonomy;

pub use announcements::{Announcement, AnnouncementItem, load_announcements};
pub use dates::{parse_release_timestamp, parse_resource_date};
pub use error::{CatalogError, Result};
pub use overrides::{AppliedOverride, LockedField, OverrideEntry, OverrideFlag, Overrides, apply_override};
pub use resource::{Resource, load_active_resources, load_resources};
pub use sources::{CatalogPaths, CatalogSources};
pub use taxonomy::{Category, Subcategory, SubcategoryRef, Taxonomy};
