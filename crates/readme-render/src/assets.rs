/*
 * assets.rs
 * Copyright (c) 2025 awesome-claude-code maintainers
 *
 * Asset token resolution and document link helpers.
 */

//! Asset token resolution and document link helpers.
//!
//! Markup refers to shared images symbolically so the same fragment can be
//! emitted into `README.md` and into `README_ALTERNATIVES/*.md`:
//!
//! - `{{ASSET_PATH('name.svg')}}` (single or double quotes)
//! - `asset:name.svg`
//! - `{{ASSET_PREFIX}}`, which expands to the assets directory plus `/`
//!
//! [`resolve_asset_tokens`] rewrites all three relative to the directory of
//! the document being written.

use std::path::{Component, Path, PathBuf};
use std::sync::LazyLock;

use regex::{Captures, Regex};

use crate::layout::{ASSETS_DIR, ROOT_README};

/// First line of every generated document.
pub const GENERATED_HEADER: &str = "<!-- GENERATED FILE: do not edit directly -->";

static ASSET_PATH_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"\{\{ASSET_PATH\(\s*(?:'([^'"]+)'|"([^'"]+)")\s*\)\}\}"#)
        .expect("valid ASSET_PATH regex")
});

static ASSET_URL_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"asset:([A-Za-z0-9_.\-/]+)").expect("valid asset: regex"));

const ASSET_PREFIX_TOKEN: &str = "{{ASSET_PREFIX}}";

/// Build an `{{ASSET_PATH('...')}}` token for `filename`.
pub fn asset_path_token(filename: &str) -> String {
    format!("{{{{ASSET_PATH('{}')}}}}", filename.trim_start_matches('/'))
}

/// Prepend [`GENERATED_HEADER`] unless it is already the first line.
pub fn ensure_generated_header(content: &str) -> String {
    if content.starts_with(GENERATED_HEADER) {
        return content.to_string();
    }
    format!("{GENERATED_HEADER}\n{}", content.trim_start_matches('\n'))
}

/// Make `path` absolute and fold away `.` and `..` components without
/// touching the filesystem.
pub(crate) fn normalize(path: &Path) -> PathBuf {
    let absolute = if path.is_absolute() {
        path.to_path_buf()
    } else {
        std::env::current_dir()
            .map(|cwd| cwd.join(path))
            .unwrap_or_else(|_| path.to_path_buf())
    };
    let mut out = PathBuf::new();
    for component in absolute.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                out.pop();
            }
            other => out.push(other.as_os_str()),
        }
    }
    out
}

/// Relative path from directory `from` to `to`, joined with `/`.
///
/// Returns `"."` when both are the same location.
pub fn relative_path(to: &Path, from: &Path) -> String {
    let to = normalize(to);
    let from = normalize(from);
    let to_components: Vec<_> = to.components().collect();
    let from_components: Vec<_> = from.components().collect();

    let common_len = to_components
        .iter()
        .zip(from_components.iter())
        .take_while(|(a, b)| a == b)
        .count();

    let mut parts: Vec<String> = Vec::new();
    for _ in common_len..from_components.len() {
        parts.push("..".to_string());
    }
    for component in &to_components[common_len..] {
        parts.push(component.as_os_str().to_string_lossy().into_owned());
    }

    if parts.is_empty() {
        ".".to_string()
    } else {
        parts.join("/")
    }
}

/// Prefix that reaches the repository's assets directory from `output_path`.
pub fn assets_prefix(output_path: &Path, repo_root: &Path) -> String {
    let base_dir = output_path.parent().unwrap_or_else(|| Path::new(""));
    let rel = relative_path(&repo_root.join(ASSETS_DIR), base_dir);
    if rel == "." {
        ASSETS_DIR.to_string()
    } else {
        rel.trim_end_matches('/').to_string()
    }
}

/// Replace every asset token in `content` with a path relative to `output_path`.
pub fn resolve_asset_tokens(content: &str, output_path: &Path, repo_root: &Path) -> String {
    let prefix = assets_prefix(output_path, repo_root);
    let join_asset = |name: &str| -> String {
        let name = name.trim_start_matches('/');
        if prefix.is_empty() {
            name.to_string()
        } else {
            format!("{prefix}/{name}")
        }
    };

    let content = content.replace(ASSET_PREFIX_TOKEN, &format!("{prefix}/"));
    let content = ASSET_PATH_PATTERN.replace_all(&content, |caps: &Captures<'_>| {
        let name = caps
            .get(1)
            .or_else(|| caps.get(2))
            .map(|m| m.as_str())
            .unwrap_or_default();
        join_asset(name)
    });
    ASSET_URL_PATTERN
        .replace_all(&content, |caps: &Captures<'_>| join_asset(&caps[1]))
        .into_owned()
}

/// Link from document `from_path` to the repository-relative document `to_path`.
///
/// Links that land on the root README are written as directory links
/// (`./`, `../`) so the hosting platform renders the repository page.
pub fn resolve_relative_link(from_path: &Path, to_path: &Path, repo_root: &Path) -> String {
    let to_path = if to_path.is_absolute() {
        to_path.to_path_buf()
    } else {
        repo_root.join(to_path)
    };
    let from_dir = from_path.parent().unwrap_or_else(|| Path::new(""));
    let rel = relative_path(&to_path, from_dir);

    if normalize(&to_path) == normalize(&repo_root.join(ROOT_README)) {
        if rel == "." || rel == ROOT_README {
            return "./".to_string();
        }
        if let Some(dir) = rel.strip_suffix(ROOT_README) {
            if dir.ends_with('/') {
                return dir.to_string();
            }
        }
    }
    rel
}
