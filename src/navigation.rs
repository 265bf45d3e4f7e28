//! Current directory, its listing, and what happens when an entry is opened.

use std::{
    ffi::OsStr,
    fs,
    path::{Path, PathBuf},
};

use crate::{
    config::{self, colors},
    error::BrowseError,
    filetype::FileKind,
    launcher::Launcher,
    line_buffer::DisplayLine,
};

pub const PARENT_MARKER: &str = "..";

#[derive(Debug)]
pub struct Navigator {
    /// Always canonical.
    current: PathBuf,
}

impl Navigator {
    pub fn new(start: &Path) -> Result<Self, BrowseError> {
        let current = canonicalize(start)?;
        Ok(Self { current })
    }

    pub fn current_dir(&self) -> &Path {
        &self.current
    }

    pub fn resolve(&self, name: &OsStr) -> PathBuf {
        self.current.join(name)
    }

    /// Header (path, spacer, parent marker) followed by one line per entry in
    /// the order the filesystem yields them. All or nothing: an error on any
    /// entry fails the whole listing.
    pub fn listing(&self) -> Result<Vec<DisplayLine>, BrowseError> {
        let unreadable = |source| BrowseError::DirectoryUnreadable {
            path: self.current.clone(),
            source,
        };

        let mut lines = Vec::with_capacity(config::HEADER_LINES);
        lines.push(DisplayLine::new(
            self.current.display().to_string(),
            colors::TEXT,
        ));
        lines.push(DisplayLine::new("", colors::TEXT));
        lines.push(DisplayLine::new(PARENT_MARKER, colors::TEXT));
        for entry in fs::read_dir(&self.current).map_err(unreadable)? {
            let entry = entry.map_err(unreadable)?;
            let color = if is_dir(&entry.path()) {
                colors::DIRECTORY
            } else {
                colors::TEXT
            };
            lines.push(DisplayLine::entry(&entry.file_name(), color));
        }
        Ok(lines)
    }

    /// Adopts `path` (relative to the current directory) without checking that
    /// it is a directory.
    pub fn change_dir(&mut self, path: &Path) -> Result<(), BrowseError> {
        self.current = canonicalize(&self.current.join(path))?;
        Ok(())
    }

    /// `change_dir` plus `listing`, rolled back if the new directory cannot
    /// be listed.
    pub fn enter_dir(&mut self, path: &Path) -> Result<Vec<DisplayLine>, BrowseError> {
        let previous = self.current.clone();
        self.change_dir(path)?;
        match self.listing() {
            Ok(lines) => {
                log::info!("entered {}", self.current.display());
                Ok(lines)
            }
            Err(err) => {
                self.current = previous;
                Err(err)
            }
        }
    }

    /// Dispatches on the file's extension. Only executables do anything; the
    /// returned kind tells the caller what was dispatched.
    pub fn open_file<L>(&self, path: &Path, launcher: &mut L) -> Result<FileKind, BrowseError>
    where
        L: Launcher + ?Sized,
    {
        let path = canonicalize(&self.current.join(path))?;
        let kind = FileKind::from_path(&path);
        match kind {
            FileKind::Exec => {
                launcher
                    .launch(&path)
                    .map_err(|source| BrowseError::LaunchFailure {
                        path: path.clone(),
                        source,
                    })?;
            }
            FileKind::Text | FileKind::Media => {
                log::debug!("no handler for {:?} file {}", kind, path.display());
            }
            FileKind::Unregistered => {}
        }
        Ok(kind)
    }
}

/// Follows symlinks; anything that cannot be stat'ed counts as a file.
pub fn is_dir(path: &Path) -> bool {
    fs::metadata(path).map(|m| m.is_dir()).unwrap_or(false)
}

fn canonicalize(path: &Path) -> Result<PathBuf, BrowseError> {
    fs::canonicalize(path).map_err(|source| BrowseError::PathResolution {
        path: path.to_path_buf(),
        source,
    })
}
