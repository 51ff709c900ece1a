/*
 * lib.rs
 * Copyright (c) 2025 awesome-claude-code maintainers
 *
 * Multi-style README rendering.
 */

//! Multi-style README rendering.
//!
//! One catalog, several presentations. Each presentation is a
//! [`StyleGenerator`]; [`generate`] renders one style to one file and
//! [`ReadmePipeline`] renders every style in a fixed order.
//!
//! # Architecture
//!
//! ```text
//! RenderSession (layout, config, catalog sources, backups, today)
//!     ↓
//! generate(style) → RenderContext → style.render_document(template)
//!     ↓
//! generated header → asset tokens resolved → backup → atomic write
//! ```
//!
//! Styles emit asset references as `{{ASSET_PATH('file.svg')}}` tokens. They
//! are resolved against the output location at the end, so the same markup
//! works from `README.md` and from `README_ALTERNATIVES/`.

pub mod anchor;
pub mod asset_writer;
pub mod assets;
pub mod backup;
pub mod config;
pub mod context;
pub mod error;
pub mod generate;
pub mod github;
pub mod layout;
pub mod pipeline;
pub mod registry;
pub mod session;
pub mod style;
pub mod styles;
pub mod svg;

pub use anchor::{GeneralAnchorMap, anchor_suffix, subcategory_anchor, toc_anchor};
pub use asset_writer::AssetWriter;
pub use assets::{asset_path_token, ensure_generated_header, resolve_asset_tokens, resolve_relative_link};
pub use backup::BackupStore;
pub use config::ReadmeConfig;
pub use context::RenderContext;
pub use error::{RenderError, Result};
pub use generate::{GenerationReport, build_context, generate, toc_anchors};
pub use layout::RepoLayout;
pub use pipeline::{PipelineReport, ReadmePipeline, regenerate_toc_assets};
pub use registry::StyleRegistry;
pub use session::RenderSession;
pub use style::{RenderedDocument, StyleDocument, StyleGenerator};
pub use styles::{AwesomeStyle, ClassicStyle, FlatCategory, FlatStyle, SortMode, VisualStyle};
