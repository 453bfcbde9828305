use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("failed to load catalog from {}: {reason}", path.display())]
    DataLoad { path: PathBuf, reason: String },

    #[error("catalog {} is missing {what}: {columns:?}", path.display())]
    MissingColumns {
        path: PathBuf,
        what: &'static str,
        columns: Vec<String>,
    },

    #[error("not found: {entity} with index {index}")]
    NotFound { entity: &'static str, index: String },

    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

/// Coarse classification of an [`Error`], used by transports to pick a
/// user-facing status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    DataLoad,
    NotFound,
    InvalidArgument,
}

impl ErrorKind {
    /// HTTP-style status code for this kind.
    #[must_use]
    pub const fn status_code(self) -> u16 {
        match self {
            Self::NotFound => 404,
            Self::InvalidArgument => 400,
            Self::DataLoad => 500,
        }
    }
}

impl Error {
    /// The requested index is kept as given, even when it is negative or
    /// wider than any catalog index.
    pub fn not_found(entity: &'static str, index: impl std::fmt::Display) -> Self {
        Self::NotFound {
            entity,
            index: index.to_string(),
        }
    }

    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::DataLoad { .. } | Self::MissingColumns { .. } => ErrorKind::DataLoad,
            Self::NotFound { .. } => ErrorKind::NotFound,
            Self::InvalidArgument(_) => ErrorKind::InvalidArgument,
        }
    }

    /// Returns `true` when the error indicates a lookup outside the catalog.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, Self::InvalidArgument(_))
    }

    /// Returns `true` when the process must not serve requests after this
    /// error (catalog could not be loaded).
    pub fn is_fatal(&self) -> bool {
        self.kind() == ErrorKind::DataLoad
    }
}

pub type Result<T> = std::result::Result<T, Error>;
