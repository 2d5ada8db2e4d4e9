//! Error types for cinemateca.

use std::path::PathBuf;

/// Result type alias for cinemateca operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while loading or querying a catalog.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// No director has the requested name.
    #[error("Director '{name}' not found")]
    DirectorNotFound {
        /// The name that was looked up.
        name: String,
    },

    /// No movie has the requested name.
    #[error("Movie '{name}' not found")]
    MovieNotFound {
        /// The name that was looked up.
        name: String,
    },

    /// A record references an id that has no matching record.
    #[error("Dangling reference: {entity} {id} does not exist in the catalog")]
    DanglingReference {
        /// Kind of the missing record ("movie", "director", ...).
        entity: &'static str,
        /// The id that could not be resolved.
        id: u32,
    },

    /// I/O error while reading a catalog document.
    #[error("I/O error at {path:?}: {source}")]
    Io {
        /// The path where the error occurred, if known.
        path: Option<PathBuf>,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Malformed catalog document.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Arrow error while building a result table.
    #[error("Arrow error: {0}")]
    Arrow(#[from] arrow::error::ArrowError),

    /// Unsupported catalog file format.
    #[error("Unsupported format: {format}")]
    UnsupportedFormat {
        /// The unsupported format name or extension.
        format: String,
    },
}

impl Error {
    /// Create an I/O error with a path context.
    pub fn io(source: std::io::Error, path: impl Into<PathBuf>) -> Self {
        Self::Io {
            path: Some(path.into()),
            source,
        }
    }

    /// Create a director not found error.
    pub fn director_not_found(name: impl Into<String>) -> Self {
        Self::DirectorNotFound { name: name.into() }
    }

    /// Create a movie not found error.
    pub fn movie_not_found(name: impl Into<String>) -> Self {
        Self::MovieNotFound { name: name.into() }
    }

    /// Create a dangling reference error.
    #[must_use]
    pub fn dangling(entity: &'static str, id: u32) -> Self {
        Self::DanglingReference { entity, id }
    }

    /// Create an unsupported format error.
    pub fn unsupported_format(format: impl Into<String>) -> Self {
        Self::UnsupportedFormat {
            format: format.into(),
        }
    }

    /// Returns true for lookups that matched nothing.
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::DirectorNotFound { .. } | Self::MovieNotFound { .. }
        )
    }
}
