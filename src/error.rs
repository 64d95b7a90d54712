//! Domain-specific error types for the link installer.
//!
//! Internal modules return typed errors (e.g., [`ConfigError`],
//! [`PluginError`]) while the top-level operations convert them to
//! [`anyhow::Error`] via the standard `?` operator.
//!
//! # Error hierarchy
//!
//! ```text
//! ConfigError   — INI parsing, config file I/O
//! PluginError   — reading plugin scripts and the plugin directory
//! ResourceError — directory and symlink creation (see resources::error)
//! ```

use thiserror::Error;

/// Errors that arise from configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The INI file contains a syntax error that prevents parsing.
    #[error("Invalid INI syntax in {file} at line {line}: {message}")]
    InvalidSyntax {
        /// File (or `<string>` for in-memory content) being parsed.
        file: String,
        /// One-based line number of the offending line.
        line: usize,
        /// Human-readable description of the problem.
        message: String,
    },

    /// An I/O error occurred while reading a config file.
    #[error("IO error reading config file {path}: {source}")]
    Io {
        /// Path to the file that could not be read.
        path: String,
        /// Underlying I/O error.
        source: std::io::Error,
    },
}

impl ConfigError {
    /// Attach a file name to an [`InvalidSyntax`](Self::InvalidSyntax) error
    /// produced while parsing in-memory content.
    #[must_use]
    pub fn in_file(self, path: &str) -> Self {
        match self {
            Self::InvalidSyntax { line, message, .. } => Self::InvalidSyntax {
                file: path.to_string(),
                line,
                message,
            },
            other @ Self::Io { .. } => other,
        }
    }
}

/// Errors that arise while reading plugin scripts.
#[derive(Error, Debug)]
pub enum PluginError {
    /// A plugin script could not be opened or read as text.
    #[error("cannot read plugin script {path}: {source}")]
    Read {
        /// Path to the plugin script.
        path: String,
        /// Underlying I/O error (includes invalid UTF-8).
        source: std::io::Error,
    },

    /// The plugin directory could not be listed.
    #[error("cannot list plugin directory {path}: {source}")]
    ListDir {
        /// Path to the plugin directory.
        path: String,
        /// Underlying I/O error.
        source: std::io::Error,
    },
}
