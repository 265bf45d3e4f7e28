//! Error types for navigation, file dispatch and buffer indexing.
//!
//! None of these are fatal: the controller turns each one into a status line
//! and leaves its state as it was.

use std::{io, path::PathBuf};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum BrowseError {
    /// The directory exists (or did) but could not be enumerated.
    #[error("cannot read {}: {source}", .path.display())]
    DirectoryUnreadable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    /// Canonicalization failed: missing target, broken symlink, permissions.
    #[error("cannot resolve {}: {source}", .path.display())]
    PathResolution {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    /// The process launcher refused or failed to start the program.
    #[error("cannot launch {}: {source}", .path.display())]
    LaunchFailure {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl BrowseError {
    pub fn path(&self) -> &std::path::Path {
        match self {
            Self::DirectoryUnreadable { path, .. }
            | Self::PathResolution { path, .. }
            | Self::LaunchFailure { path, .. } => path,
        }
    }
}

/// A line index past the end of the buffer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
#[error("line {index} out of range ({len} lines)")]
pub struct LineOutOfRange {
    pub index: usize,
    pub len: usize,
}
