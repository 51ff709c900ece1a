//! Error types for readme-render

use std::path::{Path, PathBuf};

use readme_catalog::CatalogError;
use thiserror::Error;

fn backup_hint(backup: &Option<PathBuf>) -> String {
    match backup {
        Some(path) => format!(" (previous version preserved at {})", path.display()),
        None => String::new(),
    }
}

#[derive(Error, Debug)]
pub enum RenderError {
    #[error(transparent)]
    Catalog(#[from] CatalogError),

    #[error("I/O error at {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("invalid configuration in {}: {source}", .path.display())]
    Config {
        path: PathBuf,
        source: serde_yaml::Error,
    },

    #[error("Unknown style: {0}")]
    UnknownStyle(String),

    #[error("Unknown flat category: {0}")]
    UnknownFlatCategory(String),

    #[error("Unknown sort mode: {0}")]
    UnknownSortMode(String),

    /// Writing a generated document failed after its predecessor was backed up.
    #[error("failed to write {}{}: {source}", .path.display(), backup_hint(.backup))]
    Write {
        path: PathBuf,
        backup: Option<PathBuf>,
        source: std::io::Error,
    },

    #[error("{0}")]
    Other(String),
}

impl RenderError {
    pub fn other(msg: impl Into<String>) -> Self {
        Self::Other(msg.into())
    }

    pub(crate) fn io(path: impl AsRef<Path>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }

    /// The backup recorded with a failed write, if any.
    pub fn backup_path(&self) -> Option<&Path> {
        match self {
            Self::Write { backup, .. } => backup.as_deref(),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, RenderError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_error_mentions_backup() {
        let err = RenderError::Write {
            path: PathBuf::from("README.md"),
            backup: Some(PathBuf::from(".myob/backups/README.md.20250101_000000-0.bak")),
            source: std::io::Error::other("disk full"),
        };
        let message = err.to_string();
        assert!(message.contains("README.md"));
        assert!(message.contains("previous version preserved at .myob/backups/"));
        assert!(message.contains("disk full"));
        assert!(err.backup_path().is_some());
    }

    #[test]
    fn test_write_error_without_backup() {
        let err = RenderError::Write {
            path: PathBuf::from("README.md"),
            backup: None,
            source: std::io::Error::other("denied"),
        };
        assert_eq!(err.to_string(), "failed to write README.md: denied");
        assert!(err.backup_path().is_none());
    }
}
