// gitmenu-rs: Interactive Git Helper
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Bookmark listing, shared by the `repos` command and the selector.

use crate::bookmarks::{BookmarkStore, Bookmarks};

/// One numbered line per bookmark, the default one marked.
#[must_use]
pub fn format_bookmarks(bookmarks: &Bookmarks) -> Vec<String> {
    let default = bookmarks.default_index();
    bookmarks
        .repositories
        .iter()
        .enumerate()
        .map(|(i, bookmark)| {
            let marker = if Some(i) == default { "  (default)" } else { "" };
            format!(
                "{:>2}. {} [{}] last used {}{marker}",
                i + 1,
                bookmark.path.display(),
                bookmark.default_branch,
                bookmark.last_used.format("%Y-%m-%d %H:%M"),
            )
        })
        .collect()
}

/// Print the saved repositories.
pub fn run_repos_command(store: &BookmarkStore) {
    let bookmarks = store.load();
    if bookmarks.is_empty() {
        println!("No saved repositories ({})", store.path().display());
        return;
    }
    for line in format_bookmarks(&bookmarks) {
        println!("{line}");
    }
}

