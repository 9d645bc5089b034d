// gitmenu-rs: Interactive Git Helper
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Commit & push workflow.
//!
//! ```text
//! tracking snapshot --> changes? --none--> NoChanges
//!                          |
//!        recent commits, category, message
//!                          |
//!                      confirm? --no--> Cancelled
//!                          |
//!        switch to default branch (optional)
//!                          |
//!                 add . --> commit -m
//!                          |
//!   tracked? --yes--> push
//!      |
//!      no --> remote (added if missing) --> push -u <remote> <branch>
//!                          |
//!                        Pushed
//! ```
//!
//! The tracking snapshot is taken before anything changes, so the upstream
//! decision reflects the branch as it was when the workflow started.

use chrono::{DateTime, Local};
use std::fmt;
use tracing::info;

use super::{App, Session, status};
use crate::error::{GitError, GmError, GmResult, InputError};
use crate::git::backend::GitRunner;
use crate::git::cmd::PushTarget;

/// Commit message categories, numbered 1-7 in the prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommitCategory {
    Feature,
    Fix,
    Docs,
    Refactor,
    Style,
    Test,
    Chore,
}

impl CommitCategory {
    pub const ALL: [Self; 7] = [
        Self::Feature,
        Self::Fix,
        Self::Docs,
        Self::Refactor,
        Self::Style,
        Self::Test,
        Self::Chore,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Feature => "feature",
            Self::Fix => "fix",
            Self::Docs => "docs",
            Self::Refactor => "refactor",
            Self::Style => "style",
            Self::Test => "test",
            Self::Chore => "chore",
        }
    }

    /// Category for a 1-based menu answer. Anything that is not a number in
    /// `1..=7` means `chore`.
    #[must_use]
    pub fn from_choice(input: &str) -> Self {
        input
            .trim()
            .parse::<usize>()
            .ok()
            .and_then(|n| n.checked_sub(1))
            .and_then(|i| Self::ALL.get(i).copied())
            .unwrap_or(Self::Chore)
    }
}

impl fmt::Display for CommitCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// What the user asked to commit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommitIntent {
    pub category: CommitCategory,
    pub text: String,
}

impl CommitIntent {
    /// Blank `text` is replaced by [`default_message`] for `now`.
    #[must_use]
    pub fn new(category: CommitCategory, text: &str, now: &DateTime<Local>) -> Self {
        let text = text.trim();
        let text = if text.is_empty() {
            default_message(now)
        } else {
            text.to_string()
        };
        Self { category, text }
    }

    /// `[category] text`.
    #[must_use]
    pub fn compose(&self) -> String {
        format!("[{}] {}", self.category, self.text)
    }
}

#[must_use]
pub fn default_message(now: &DateTime<Local>) -> String {
    format!("Automatic update at {}", now.format("%Y-%m-%d %H:%M:%S"))
}

/// How the workflow ended when nothing went wrong.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommitOutcome {
    NoChanges,
    Cancelled,
    Pushed,
}

/// Run the commit & push workflow on `session`.
///
/// # Errors
///
/// Returns `GitError::CheckoutFailed` if switching to the default branch
/// fails, other `GitError`s from staging, committing or pushing, and
/// `GmError::InputClosed` when input ends.
pub fn run_commit_workflow<R: GitRunner>(
    app: &mut App<R>,
    session: &Session,
) -> GmResult<CommitOutcome> {
    let repo = session.repo.as_path();

    let tracking = status::tracking_branches(&app.git, repo)?;

    let Some(changes) = status::list_changes(&app.git, repo)? else {
        app.term.say("No changes to commit.")?;
        return Ok(CommitOutcome::NoChanges);
    };
    app.term.heading("Changes")?;
    for line in status::render_changes(&changes) {
        app.term.say(line)?;
    }
    app.term.blank()?;

    app.term.heading("Recent commits")?;
    status::show_recent_commits(app, repo)?;
    app.term.blank()?;

    app.term.heading("Category")?;
    for (i, category) in CommitCategory::ALL.iter().enumerate() {
        app.term.say(format!("{}. {category}", i + 1))?;
    }
    let category = CommitCategory::from_choice(&app.term.prompt("Category [1-7]")?);
    let text = app.term.prompt("Message (empty for an automatic one)")?;
    let message = CommitIntent::new(category, &text, &Local::now()).compose();

    let mut branch = app.git.current_branch(repo, session.branch_hint())?;
    app.term.blank()?;
    app.term.say(format!("Repository: {}", repo.display()))?;
    app.term.say(format!("Branch:     {branch}"))?;
    app.term.say(format!("Message:    {message}"))?;
    if !app.term.confirm("Commit and push?", true)? {
        app.term.warn("Cancelled")?;
        return Ok(CommitOutcome::Cancelled);
    }

    if branch != session.default_branch
        && app.term.confirm(
            &format!(
                "You are on '{branch}'. Switch to default branch '{}'?",
                session.default_branch
            ),
            false,
        )?
    {
        app.git
            .checkout(repo, &session.default_branch)
            .map_err(|e| match e {
                GmError::Git(err) => match *err {
                    GitError::CheckoutFailed { what, message } => GitError::CheckoutFailed {
                        what,
                        message: format!("{message} (does the branch exist?)"),
                    }
                    .into(),
                    other => other.into(),
                },
                other => other,
            })?;
        branch.clone_from(&session.default_branch);
    }

    app.git.add_all(repo)?;
    app.git.commit(repo, &message)?;
    info!(repo = %repo.display(), %branch, "committed");

    let target = if let Some(upstream) = tracking.get(&branch) {
        app.term.say(format!("Pushing to {upstream}"))?;
        PushTarget::Tracked
    } else {
        let remote = choose_remote(app, session)?;
        PushTarget::Explicit {
            remote,
            branch: branch.clone(),
            set_upstream: true,
        }
    };
    app.git.push(repo, &target)?;

    app.term.success(format!("Committed and pushed '{branch}'"))?;
    Ok(CommitOutcome::Pushed)
}

/// Ask which remote an untracked branch goes to, registering it first if
/// it is not configured.
fn choose_remote<R: GitRunner>(app: &mut App<R>, session: &Session) -> GmResult<String> {
    let default_remote = app.settings.git.default_remote.clone();
    let remote = app
        .term
        .prompt_default("No upstream set. Remote to push to", &default_remote)?;

    if !app.git.remote_exists(&session.repo, &remote)? {
        let url = app
            .term
            .prompt(&format!("Remote '{remote}' is not configured. URL"))?;
        if url.is_empty() {
            return Err(InputError::EmptyValue("remote URL".to_string()).into());
        }
        app.git.remote_add(&session.repo, &remote, &url)?;
        app.term.say(format!("Added remote '{remote}' -> {url}"))?;
    }
    Ok(remote)
}
