// gitmenu-rs: Interactive Git Helper
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Interactive workflows.
//!
//! ```text
//! setup --> select --> menu loop
//!                        |-- 1 commit  (commit & push)
//!                        |-- 2 branch  (branch sub-menu)
//!                        |-- 3 pull
//!                        |-- 4 status
//!                        |-- 5 select  (change repository)
//!                        '-- 6 quit
//!
//! repos / options / inis    (non-interactive commands)
//! ```
//!
//! Workflows report their own failures through [`App::report`] and return
//! to the menu that started them. Only `GmError::InputClosed` propagates.

pub mod branch;
pub mod commit;
pub mod config;
pub mod menu;
pub mod repos;
pub mod select;
pub mod setup;
pub mod status;

#[cfg(test)]
pub(crate) mod test_utils;
#[cfg(test)]
mod tests;

use std::path::PathBuf;
use tracing::debug;

use crate::bookmarks::BookmarkStore;
use crate::config::Settings;
use crate::error::GmResult;
use crate::git::backend::{GitRunner, ShellRunner};
use crate::git::cmd::GitClient;
use crate::ui::Terminal;

/// The repository the menus operate on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub repo: PathBuf,
    /// Branch commits are meant to land on, from the bookmark.
    pub default_branch: String,
    /// Branch a repository was just initialized with; lets branch
    /// detection work before the first commit.
    pub initial_branch: Option<String>,
}

impl Session {
    #[must_use]
    pub fn branch_hint(&self) -> Option<&str> {
        self.initial_branch.as_deref()
    }
}

/// Everything a workflow needs.
pub struct App<R = ShellRunner> {
    pub git: GitClient<R>,
    pub term: Terminal,
    pub store: BookmarkStore,
    pub settings: Settings,
}

impl<R: GitRunner> App<R> {
    pub const fn new(
        git: GitClient<R>,
        term: Terminal,
        store: BookmarkStore,
        settings: Settings,
    ) -> Self {
        Self {
            git,
            term,
            store,
            settings,
        }
    }

    /// Print a workflow failure and carry on.
    ///
    /// # Errors
    ///
    /// Re-raises `GmError::InputClosed`, and I/O errors from writing the
    /// report itself.
    pub fn report<T>(&mut self, result: GmResult<T>) -> GmResult<Option<T>> {
        match result {
            Ok(value) => Ok(Some(value)),
            Err(e) if e.is_input_closed() => Err(e),
            Err(e) => {
                debug!(error = %e, "action failed");
                self.term.error(&e)?;
                Ok(None)
            }
        }
    }
}
