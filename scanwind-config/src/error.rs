//! Error types for descriptor loading.

use std::path::{Path, PathBuf};

use thiserror::Error;

/// Errors surfaced while loading or saving a descriptor.
///
/// Every variant is terminal for the operation that produced it; nothing is
/// retried or recovered internally.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// No descriptor file exists at the expected location.
    #[error("configuration file not found: {}", .path.display())]
    NotFound {
        /// Path that was looked up.
        path: PathBuf,
    },
    /// The file is not a syntactically or structurally valid descriptor.
    #[error("malformed configuration{}: {reason}", location(.path.as_deref()))]
    MalformedConfig {
        /// Source file, when the input came from disk.
        path: Option<PathBuf>,
        /// Parser message describing the violation.
        reason: String,
    },
    /// Underlying I/O failure other than a missing file.
    #[error("i/o error on {}: {source}", .path.display())]
    Io {
        /// Path being read or written.
        path: PathBuf,
        /// Source [`std::io::Error`].
        #[source]
        source: std::io::Error,
    },
    /// The descriptor could not be rendered in the requested format.
    #[error("failed to serialize configuration: {reason}")]
    Serialize {
        /// Serializer message.
        reason: String,
    },
}

impl ConfigError {
    /// Returns `true` for [`ConfigError::NotFound`].
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Returns `true` for [`ConfigError::MalformedConfig`].
    #[must_use]
    pub const fn is_malformed(&self) -> bool {
        matches!(self, Self::MalformedConfig { .. })
    }

    pub(crate) fn malformed(path: Option<&Path>, reason: impl Into<String>) -> Self {
        Self::MalformedConfig {
            path: path.map(Path::to_path_buf),
            reason: reason.into(),
        }
    }

    pub(crate) fn from_io(path: &Path, source: std::io::Error) -> Self {
        match source.kind() {
            std::io::ErrorKind::NotFound => Self::NotFound {
                path: path.to_path_buf(),
            },
            // read_to_string reports non UTF-8 content this way
            std::io::ErrorKind::InvalidData => Self::malformed(Some(path), source.to_string()),
            _ => Self::Io {
                path: path.to_path_buf(),
                source,
            },
        }
    }
}

fn location(path: Option<&Path>) -> String {
    path.map(|p| format!(" in {}", p.display()))
        .unwrap_or_default()
}

/// Result alias for descriptor operations.
pub type ConfigResult<T> = Result<T, ConfigError>;
