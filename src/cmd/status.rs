// gitmenu-rs: Interactive Git Helper
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Working-tree status and recent history.

use colored::{Color, Colorize};
use std::path::Path;
use tracing::debug;

use super::{App, Session};
use crate::error::GmResult;
use crate::git::backend::GitRunner;
use crate::git::cmd::GitClient;
use crate::git::parse::{self, ChangeSet, CommitSummary, TrackingMap};

/// Changes in the working tree; `None` when there are none at all.
///
/// # Errors
///
/// Returns a `GitError` if `git status` fails.
pub fn list_changes<R: GitRunner>(git: &GitClient<R>, repo: &Path) -> GmResult<Option<ChangeSet>> {
    let raw = git.status_porcelain(repo)?;
    Ok(parse::parse_status(&raw))
}

/// The last `count` commits, newest first.
///
/// # Errors
///
/// Returns a `GitError` if `git log` fails, which includes a repository
/// without commits.
pub fn recent_commits<R: GitRunner>(
    git: &GitClient<R>,
    repo: &Path,
    count: usize,
) -> GmResult<Vec<CommitSummary>> {
    git.log(repo, count)
}

/// Local branch to upstream mapping.
///
/// # Errors
///
/// Returns a `GitError` if the branch listing fails.
pub fn tracking_branches<R: GitRunner>(git: &GitClient<R>, repo: &Path) -> GmResult<TrackingMap> {
    git.tracking_branches(repo)
}

/// Render changes grouped by kind.
#[must_use]
pub fn render_changes(changes: &ChangeSet) -> Vec<String> {
    if changes.is_empty() {
        return vec!["  (only changes of other kinds, e.g. renames)".dimmed().to_string()];
    }

    let mut lines = Vec::with_capacity(changes.len() + 3);
    let groups = [
        ("Modified", &changes.modified, "M", Color::Yellow),
        ("Added", &changes.added, "+", Color::Green),
        ("Deleted", &changes.deleted, "D", Color::Red),
    ];
    for (title, paths, mark, color) in groups {
        if paths.is_empty() {
            continue;
        }
        lines.push(format!("{title} ({}):", paths.len()));
        for path in paths {
            lines.push(format!("  {} {path}", mark.color(color)));
        }
    }
    lines
}

#[must_use]
pub fn render_commits(commits: &[CommitSummary]) -> Vec<String> {
    commits
        .iter()
        .map(|c| format!("  {} {}", c.short_hash.yellow(), c.subject))
        .collect()
}

/// The "view status" screen.
///
/// # Errors
///
/// Returns a `GitError` if the branch or status cannot be read.
pub fn show_status<R: GitRunner>(app: &mut App<R>, session: &Session) -> GmResult<()> {
    let repo = session.repo.as_path();
    let branch = app.git.current_branch(repo, session.branch_hint())?;
    let tracking = tracking_branches(&app.git, repo)?;

    app.term.heading("Status")?;
    app.term.say(format!("Repository: {}", repo.display()))?;
    match tracking.get(&branch) {
        Some(upstream) => app.term.say(format!("Branch:     {branch} -> {upstream}"))?,
        None => app.term.say(format!("Branch:     {branch} (no upstream)"))?,
    }
    app.term.blank()?;

    match list_changes(&app.git, repo)? {
        Some(changes) => {
            for line in render_changes(&changes) {
                app.term.say(line)?;
            }
        }
        None => app.term.success("Working tree clean")?,
    }
    app.term.blank()?;

    app.term.heading("Recent commits")?;
    show_recent_commits(app, repo)
}

/// Print recent commits, or a note when there are none yet.
pub(crate) fn show_recent_commits<R: GitRunner>(app: &mut App<R>, repo: &Path) -> GmResult<()> {
    match recent_commits(&app.git, repo, app.settings.git.log_count) {
        Ok(commits) if !commits.is_empty() => {
            for line in render_commits(&commits) {
                app.term.say(line)?;
            }
        }
        Ok(_) => app.term.say("  No commits yet")?,
        Err(e) => {
            debug!(error = %e, "log unavailable");
            app.term.say("  No commits yet")?;
        }
    }
    Ok(())
}
