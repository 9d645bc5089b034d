// gitmenu-rs: Interactive Git Helper
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Git query operations using gix backend.
//!
//! ```text
//! query.rs --> GixBackend --> .git/ (no subprocess)
//! ```

use crate::error::GmResult;
use std::path::Path;

use super::backend::{GitQuery, GixBackend};

/// Whether `path` holds a repository of its own.
///
/// Parent repositories do not count: registering a subdirectory of a
/// checkout is treated as "no repository here".
#[must_use]
pub fn is_git_repo(path: &Path) -> bool {
    GixBackend::is_git_repo(path)
}

/// Branch HEAD points at (None if HEAD is detached). Works on a repository
/// that has no commits yet.
///
/// # Errors
///
/// Returns a `GitError` if the repository cannot be opened or HEAD read.
pub fn head_branch(path: &Path) -> GmResult<Option<String>> {
    GixBackend::head_branch(path)
}
