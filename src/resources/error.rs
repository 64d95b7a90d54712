//! Typed error variants for resource operations.
//!
//! Resource code returns these variants directly; callers convert to
//! [`anyhow::Error`] via `?`.

use thiserror::Error;

/// Errors that arise from resource checks and apply operations.
#[derive(Error, Debug)]
pub enum ResourceError {
    /// A destination directory could not be created.
    #[error("cannot create directory {path}: {source}")]
    CreateDir {
        /// Directory that could not be created.
        path: String,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// A symlink could not be created.
    #[error("cannot create symlink {link} -> {target}: {source}")]
    Symlink {
        /// Path of the link.
        link: String,
        /// Target the link should point to.
        target: String,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// The state of an entry could not be inspected.
    #[error("cannot inspect {path}: {source}")]
    Inspect {
        /// Path being inspected.
        path: String,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// A path cannot be expressed relative to another.
    #[error("cannot express {path} relative to {base}")]
    NoRelativePath {
        /// Path to be made relative.
        path: String,
        /// Base directory.
        base: String,
    },
}
