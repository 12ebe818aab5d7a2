//! Error types for scanning and rendering

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Result type alias using [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// Errors surfaced by the library.
///
/// Per-entry failures inside a scan never show up here; they are counted in
/// [`crate::scanner::ScanStats`] instead.
#[derive(Error, Debug)]
pub enum Error {
    /// The path did not exist when a node was constructed for it.
    #[error("Path '{}' does not exist", path.display())]
    NotFound { path: PathBuf },

    /// The scan root exists but its entries cannot be listed.
    #[error("Cannot read directory '{}': {source}", path.display())]
    RootUnreadable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Any other I/O failure while inspecting a path.
    #[error("I/O error on '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A settings value is out of range.
    #[error("Invalid settings: {0}")]
    InvalidSettings(String),
}

impl Error {
    pub fn is_not_found(&self) -> bool {
        matches!(self, Error::NotFound { .. })
    }

    /// The underlying OS error, if this error wraps one.
    pub fn io_source(&self) -> Option<&io::Error> {
        match self {
            Error::RootUnreadable { source, .. } | Error::Io { source, .. } => Some(source),
            _ => None,
        }
    }
}
