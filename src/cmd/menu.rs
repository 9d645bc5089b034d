// gitmenu-rs: Interactive Git Helper
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Main menu loop.

use colored::Colorize;
use std::path::Path;
use tracing::debug;

use super::select::{Selection, select_repository};
use super::{App, Session, branch, commit, setup, status};
use crate::error::{GmResult, InputError};
use crate::git::backend::GitRunner;

/// Main menu entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    CommitAndPush,
    Branches,
    Pull,
    Status,
    ChangeRepository,
    Quit,
}

impl MenuChoice {
    pub const ALL: [Self; 6] = [
        Self::CommitAndPush,
        Self::Branches,
        Self::Pull,
        Self::Status,
        Self::ChangeRepository,
        Self::Quit,
    ];

    #[must_use]
    pub fn from_choice(input: &str) -> Option<Self> {
        let n: usize = input.trim().parse().ok()?;
        Self::ALL.get(n.checked_sub(1)?).copied()
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::CommitAndPush => "Commit and push",
            Self::Branches => "Manage branches",
            Self::Pull => "Pull",
            Self::Status => "View status",
            Self::ChangeRepository => "Change repository",
            Self::Quit => "Quit",
        }
    }
}

/// Interactive session: identity check, repository selection, main menu.
///
/// Returns when the user quits.
///
/// # Errors
///
/// Returns `GmError::InputClosed` when input ends, or a `GitError` if the
/// identity check cannot run.
pub fn run_interactive<R: GitRunner>(app: &mut App<R>, cwd: &Path) -> GmResult<()> {
    setup::ensure_identity(app, cwd)?;
    match select_repository(app)? {
        Selection::Repository(session) => run_main_menu(app, session),
        Selection::Quit => Ok(()),
    }
}

/// Run the main menu until the user quits.
///
/// # Errors
///
/// Returns `GmError::InputClosed` when input ends. Workflow failures are
/// reported in place.
pub fn run_main_menu<R: GitRunner>(app: &mut App<R>, mut session: Session) -> GmResult<()> {
    loop {
        app.term.clear()?;
        draw(app, &session)?;

        let answer = app.term.prompt("Choose")?;
        let Some(choice) = MenuChoice::from_choice(&answer) else {
            app.term.error(InputError::InvalidChoice(answer))?;
            app.term.pause()?;
            continue;
        };
        debug!(?choice, "main menu");

        match choice {
            MenuChoice::CommitAndPush => {
                let outcome = commit::run_commit_workflow(app, &session);
                if let Some(outcome) = app.report(outcome)? {
                    debug!(?outcome, "commit workflow finished");
                }
            }
            MenuChoice::Branches => {
                branch::manage_branches(app, &session)?;
                continue;
            }
            MenuChoice::Pull => {
                let pulled = pull_current(app, &session);
                app.report(pulled)?;
            }
            MenuChoice::Status => {
                let shown = status::show_status(app, &session);
                app.report(shown)?;
            }
            MenuChoice::ChangeRepository => match select_repository(app)? {
                Selection::Repository(next) => {
                    session = next;
                    continue;
                }
                Selection::Quit => return Ok(()),
            },
            MenuChoice::Quit => return Ok(()),
        }
        app.term.pause()?;
    }
}

fn draw<R: GitRunner>(app: &mut App<R>, session: &Session) -> GmResult<()> {
    let branch = app
        .git
        .current_branch(&session.repo, session.branch_hint())
        .unwrap_or_else(|e| {
            debug!(error = %e, "current branch unknown");
            "(unknown)".to_string()
        });

    app.term.heading("gitmenu")?;
    app.term
        .say(format!("Repository: {}", session.repo.display()))?;
    app.term.say(format!(
        "Branch:     {} (default {})",
        branch.green(),
        session.default_branch
    ))?;
    app.term.blank()?;
    for (i, choice) in MenuChoice::ALL.iter().enumerate() {
        app.term.say(format!("{}. {}", i + 1, choice.label()))?;
    }
    Ok(())
}

/// Pull the current branch: from its upstream when it has one, otherwise
/// from the same-named branch on the default remote.
///
/// # Errors
///
/// Returns a `GitError` if the branch cannot be read or the pull fails.
pub fn pull_current<R: GitRunner>(app: &mut App<R>, session: &Session) -> GmResult<()> {
    let repo = session.repo.as_path();
    let branch = app.git.current_branch(repo, session.branch_hint())?;
    let tracking = status::tracking_branches(&app.git, repo)?;

    if let Some(upstream) = tracking.get(&branch) {
        app.git.pull(repo, None)?;
        app.term.success(format!("Pulled from {upstream}"))
    } else {
        let remote = app.settings.git.default_remote.clone();
        app.git.pull(repo, Some((&remote, &branch)))?;
        app.term.success(format!("Pulled {remote}/{branch}"))
    }
}
