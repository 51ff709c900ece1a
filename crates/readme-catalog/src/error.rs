//! Error types for readme-catalog

use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("malformed YAML in {}: {source}", .path.display())]
    Yaml {
        path: PathBuf,
        source: serde_yaml::Error,
    },

    #[error("malformed resource table {}: {source}", .path.display())]
    Csv { path: PathBuf, source: csv::Error },

    #[error("resource table {} is missing required columns: {}", .path.display(), .columns.join(", "))]
    MissingColumns { path: PathBuf, columns: Vec<String> },
}

impl CatalogError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    pub(crate) fn yaml(path: impl Into<PathBuf>, source: serde_yaml::Error) -> Self {
        Self::Yaml {
            path: path.into(),
            source,
        }
    }

    pub(crate) fn csv(path: impl Into<PathBuf>, source: csv::Error) -> Self {
        Self::Csv {
            path: path.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, CatalogError>;
