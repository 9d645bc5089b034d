// gitmenu-rs: Interactive Git Helper
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Repository bookmarks persisted as JSON.
//!
//! ```text
//! gitmenu.json
//! {
//!   "Repositories": [
//!     { "Path": "...", "DefaultBranch": "main", "LastUsed": "2026-..." }
//!   ],
//!   "DefaultRepo": "...",
//!   "LastUsed": "2026-..."
//! }
//! ```
//!
//! The file is read whole and rewritten whole. A file that is missing or
//! cannot be parsed loads as an empty document, which sends the selector
//! into first-run setup. There is no locking between concurrent instances.

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};
use std::io::Write as _;
use std::path::{Path, PathBuf};
use tracing::{debug, trace};

use crate::error::{ConfigError, GmResult};

/// Default bookmark file name, placed beside the executable.
pub const BOOKMARKS_FILE_NAME: &str = "gitmenu.json";

/// A saved repository and the branch commits should land on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Bookmark {
    pub path: PathBuf,
    pub default_branch: String,
    pub last_used: DateTime<Local>,
}

/// The whole bookmark document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct Bookmarks {
    pub repositories: Vec<Bookmark>,
    #[serde(rename = "DefaultRepo")]
    pub default_repo: Option<PathBuf>,
    pub last_used: Option<DateTime<Local>>,
}

impl Bookmarks {
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.repositories.is_empty()
    }

    #[must_use]
    pub fn find(&self, path: &Path) -> Option<&Bookmark> {
        self.repositories.iter().find(|b| b.path == path)
    }

    /// Insert a bookmark for `path`, or update the branch and timestamp of
    /// the existing one. Other bookmarks are left untouched.
    pub fn upsert(&mut self, path: &Path, default_branch: &str, now: DateTime<Local>) {
        if let Some(existing) = self.repositories.iter_mut().find(|b| b.path == path) {
            existing.default_branch = default_branch.to_string();
            existing.last_used = now;
        } else {
            self.repositories.push(Bookmark {
                path: path.to_path_buf(),
                default_branch: default_branch.to_string(),
                last_used: now,
            });
        }
        self.last_used = Some(now);
    }

    /// Refresh the timestamp of an existing bookmark.
    ///
    /// Returns `false` if `path` is not bookmarked.
    pub fn touch(&mut self, path: &Path, now: DateTime<Local>) -> bool {
        let Some(existing) = self.repositories.iter_mut().find(|b| b.path == path) else {
            return false;
        };
        existing.last_used = now;
        self.last_used = Some(now);
        true
    }

    /// Mark `path` as the default repository.
    ///
    /// Returns `false` (and changes nothing) if `path` is not bookmarked.
    pub fn set_default(&mut self, path: &Path) -> bool {
        if self.find(path).is_none() {
            return false;
        }
        self.default_repo = Some(path.to_path_buf());
        true
    }

    /// The default repository, if it still refers to a bookmark.
    ///
    /// A dangling `DefaultRepo` is treated as unset.
    #[must_use]
    pub fn default_bookmark(&self) -> Option<&Bookmark> {
        let path = self.default_repo.as_deref()?;
        let found = self.find(path);
        if found.is_none() {
            debug!(path = %path.display(), "default repository is not bookmarked, ignoring");
        }
        found
    }

    /// Position (0-based) of the default bookmark in `repositories`.
    #[must_use]
    pub fn default_index(&self) -> Option<usize> {
        let path = self.default_bookmark()?.path.as_path();
        self.repositories.iter().position(|b| b.path == path)
    }
}

/// Reads and writes the bookmark document at a fixed location.
#[derive(Debug, Clone)]
pub struct BookmarkStore {
    path: PathBuf,
}

impl BookmarkStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the document. Missing or malformed files yield an empty one.
    #[must_use]
    pub fn load(&self) -> Bookmarks {
        let content = match std::fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) => {
                debug!(path = %self.path.display(), error = %e, "no bookmark file");
                return Bookmarks::default();
            }
        };

        match serde_json::from_str(&content) {
            Ok(bookmarks) => {
                trace!(path = %self.path.display(), "loaded bookmarks");
                bookmarks
            }
            Err(e) => {
                debug!(path = %self.path.display(), error = %e, "malformed bookmark file, starting fresh");
                Bookmarks::default()
            }
        }
    }

    /// Rewrite the document.
    ///
    /// Writes to a temporary file in the same directory and renames it into
    /// place, so a crash mid-write leaves the previous file intact.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::WriteError` if the directory cannot be created
    /// or the file cannot be written.
    pub fn save(&self, bookmarks: &Bookmarks) -> GmResult<()> {
        let write_error = |message: String| ConfigError::WriteError {
            path: self.path.display().to_string(),
            message,
        };

        let dir = match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        std::fs::create_dir_all(dir).map_err(|e| write_error(e.to_string()))?;

        let json = serde_json::to_string_pretty(bookmarks).map_err(|e| write_error(e.to_string()))?;

        let mut file =
            tempfile::NamedTempFile::new_in(dir).map_err(|e| write_error(e.to_string()))?;
        file.write_all(json.as_bytes())
            .and_then(|()| file.write_all(b"\n"))
            .map_err(|e| write_error(e.to_string()))?;
        file.persist(&self.path)
            .map_err(|e| write_error(e.error.to_string()))?;

        debug!(
            path = %self.path.display(),
            count = bookmarks.repositories.len(),
            "saved bookmarks"
        );
        Ok(())
    }
}
