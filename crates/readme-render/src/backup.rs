/*
 * backup.rs
 * Copyright (c) 2025 awesome-claude-code maintainers
 *
 * Backups of generated documents before they are overwritten.
 */

//! Backups of generated documents before they are overwritten.
//!
//! Backups are named `{basename}.{YYYYmmdd_HHMMSS}-{seq}.bak`. The timestamp
//! is captured once when the store is created and the sequence number
//! increases with every backup, so names sort in creation order even when
//! many files are backed up within the same second. Pruning orders backups
//! by that embedded key and never looks at file modification times.

use std::cell::Cell;
use std::path::{Path, PathBuf};

use chrono::NaiveDateTime;

use crate::error::{RenderError, Result};

const TIMESTAMP_FORMAT: &str = "%Y%m%d_%H%M%S";

/// Number of backups kept per file unless configured otherwise.
pub const DEFAULT_KEEP_LATEST: usize = 1;

#[derive(Debug)]
pub struct BackupStore {
    dir: PathBuf,
    timestamp: String,
    next_seq: Cell<u64>,
    keep_latest: usize,
}

/// Sort key embedded in a backup file name.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
struct BackupKey {
    timestamp: String,
    seq: u64,
}

impl BackupStore {
    /// Create a store writing into `dir`, stamped with the current local time.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self::at(dir, chrono::Local::now().naive_local())
    }

    /// Create a store stamped with an explicit time.
    pub fn at(dir: impl Into<PathBuf>, captured: NaiveDateTime) -> Self {
        Self {
            dir: dir.into(),
            timestamp: captured.format(TIMESTAMP_FORMAT).to_string(),
            next_seq: Cell::new(0),
            keep_latest: DEFAULT_KEEP_LATEST,
        }
    }

    /// Keep this many backups per file; `0` disables pruning.
    pub fn with_keep_latest(mut self, keep_latest: usize) -> Self {
        self.keep_latest = keep_latest;
        self
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn timestamp(&self) -> &str {
        &self.timestamp
    }

    /// Copy `path` into the backup directory.
    ///
    /// Returns `None` when there is nothing to back up.
    pub fn backup(&self, path: &Path) -> Result<Option<PathBuf>> {
        if !path.is_file() {
            return Ok(None);
        }
        let basename = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .ok_or_else(|| RenderError::other(format!("cannot back up {}", path.display())))?;

        std::fs::create_dir_all(&self.dir).map_err(|e| RenderError::io(&self.dir, e))?;

        let existing = self.existing_backups(&basename)?;
        let after_existing = existing
            .iter()
            .filter(|(key, _)| key.timestamp == self.timestamp)
            .map(|(key, _)| key.seq + 1)
            .max()
            .unwrap_or(0);
        let seq = self.next_seq.get().max(after_existing);
        self.next_seq.set(seq + 1);

        let backup_path = self
            .dir
            .join(format!("{basename}.{}-{seq}.bak", self.timestamp));
        std::fs::copy(path, &backup_path).map_err(|e| RenderError::io(&backup_path, e))?;
        tracing::debug!(path = %path.display(), backup = %backup_path.display(), "Backed up existing file");

        if self.keep_latest > 0 {
            self.prune(&basename)?;
        }
        Ok(Some(backup_path))
    }

    fn existing_backups(&self, basename: &str) -> Result<Vec<(BackupKey, PathBuf)>> {
        let entries = std::fs::read_dir(&self.dir).map_err(|e| RenderError::io(&self.dir, e))?;
        let mut backups = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|e| RenderError::io(&self.dir, e))?;
            let name = entry.file_name().to_string_lossy().into_owned();
            if let Some(key) = parse_backup_name(basename, &name) {
                backups.push((key, entry.path()));
            }
        }
        Ok(backups)
    }

    fn prune(&self, basename: &str) -> Result<()> {
        let mut backups = self.existing_backups(basename)?;
        backups.sort_by(|a, b| b.0.cmp(&a.0));
        for (_, stale) in backups.into_iter().skip(self.keep_latest) {
            if let Err(err) = std::fs::remove_file(&stale) {
                tracing::warn!(path = %stale.display(), error = %err, "Failed to remove old backup");
            }
        }
        Ok(())
    }
}

fn parse_backup_name(basename: &str, name: &str) -> Option<BackupKey> {
    let middle = name
        .strip_prefix(basename)?
        .strip_prefix('.')?
        .strip_suffix(".bak")?;
    let (timestamp, seq) = middle.rsplit_once('-')?;
    NaiveDateTime::parse_from_str(timestamp, TIMESTAMP_FORMAT).ok()?;
    Some(BackupKey {
        timestamp: timestamp.to_string(),
        seq: seq.parse().ok()?,
    })
}
