// gitmenu-rs: Interactive Git Helper
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Shared fixtures for workflow tests.

use std::path::Path;

use super::{App, Session};
use crate::bookmarks::BookmarkStore;
use crate::config::Settings;
use crate::git::backend::GitRunner;
use crate::git::cmd::GitClient;
use crate::ui::{Terminal, Transcript};

/// App over a scripted terminal, bookmarks stored in `store_dir`.
///
/// Pass `&ScriptedRunner` to keep the runner for assertions.
pub(crate) fn scripted_app<R: GitRunner>(
    runner: R,
    input: &str,
    store_dir: &Path,
) -> (App<R>, Transcript) {
    let (term, transcript) = Terminal::scripted(input);
    let app = App::new(
        GitClient::new(runner),
        term,
        BookmarkStore::new(store_dir.join("gitmenu.json")),
        Settings::default(),
    );
    (app, transcript)
}

pub(crate) fn session(repo: &Path, default_branch: &str) -> Session {
    Session {
        repo: repo.to_path_buf(),
        default_branch: default_branch.to_string(),
        initial_branch: None,
    }
}
