//! Content access error types.

use std::path::PathBuf;

/// Error raised while reading the content store.
#[derive(Debug, thiserror::Error)]
pub enum ContentError {
    /// Content root directory is missing or not a directory.
    ///
    /// This is a configuration error and fails the whole scan; there is no
    /// silent empty-navigation fallback.
    #[error("Content root not found: {}", .0.display())]
    RootNotFound(PathBuf),

    /// I/O error while reading a file or directory.
    #[error("I/O error reading {}: {source}", .path.display())]
    Io {
        /// Path that failed.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
}

impl ContentError {
    /// Wrap an I/O error with path context.
    #[must_use]
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
