// gitmenu-rs: Interactive Git Helper
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Branch sub-menu.
//!
//! ```text
//! loop:
//!   snapshot (current, local, remote)
//!   1 create | 2 switch | 3 delete | 4 merge | 5 pull | 6 push | 7 return
//!   action --> report --> pause
//! ```
//!
//! A number picks from the local listing shown in the same round (1-based).
//! Anything else is passed to git as a branch name, unchecked. Switching to,
//! deleting, or merging the current branch is refused before git is run.

use colored::Colorize;
use tracing::debug;

use super::{App, Session};
use crate::error::{GmResult, InputError};
use crate::git::backend::GitRunner;
use crate::git::cmd::PushTarget;

/// Branch sub-menu entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BranchAction {
    Create,
    Switch,
    Delete,
    Merge,
    Pull,
    Push,
    Return,
}

impl BranchAction {
    pub const ALL: [Self; 7] = [
        Self::Create,
        Self::Switch,
        Self::Delete,
        Self::Merge,
        Self::Pull,
        Self::Push,
        Self::Return,
    ];

    #[must_use]
    pub fn from_choice(input: &str) -> Option<Self> {
        let n: usize = input.trim().parse().ok()?;
        Self::ALL.get(n.checked_sub(1)?).copied()
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Create => "Create branch",
            Self::Switch => "Switch branch",
            Self::Delete => "Delete branch",
            Self::Merge => "Merge branch into current",
            Self::Pull => "Pull",
            Self::Push => "Push",
            Self::Return => "Return to main menu",
        }
    }
}

/// Branch state read at the top of each round.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BranchView {
    pub current: String,
    pub local: Vec<String>,
    pub remote: Vec<String>,
}

impl BranchView {
    /// # Errors
    ///
    /// Returns a `GitError` if any of the listings fails.
    pub fn read<R: GitRunner>(app: &App<R>, session: &Session) -> GmResult<Self> {
        let repo = session.repo.as_path();
        Ok(Self {
            current: app.git.current_branch(repo, session.branch_hint())?,
            local: app.git.local_branches(repo)?,
            remote: app.git.remote_branches(repo)?,
        })
    }
}

/// Turn a typed answer into a branch name.
///
/// # Errors
///
/// Returns `InputError::EmptyValue` for a blank answer and
/// `InputError::InvalidBranchIndex` for a number outside the listing.
pub fn resolve_branch(input: &str, listed: &[String]) -> Result<String, InputError> {
    let input = input.trim();
    if input.is_empty() {
        return Err(InputError::EmptyValue("branch name".to_string()));
    }
    match input.parse::<usize>() {
        Ok(index) => index
            .checked_sub(1)
            .and_then(|i| listed.get(i))
            .cloned()
            .ok_or(InputError::InvalidBranchIndex {
                index,
                count: listed.len(),
            }),
        Err(_) => Ok(input.to_string()),
    }
}

/// Refuse an `action` aimed at the checked-out branch.
fn reject_current(action: &str, target: &str, current: &str) -> Result<(), InputError> {
    if target == current {
        return Err(InputError::CurrentBranch {
            action: action.to_string(),
            branch: target.to_string(),
        });
    }
    Ok(())
}

/// Run the branch sub-menu until the user returns.
///
/// # Errors
///
/// Returns `GmError::InputClosed` when input ends; everything else is
/// reported in place.
pub fn manage_branches<R: GitRunner>(app: &mut App<R>, session: &Session) -> GmResult<()> {
    loop {
        app.term.clear()?;
        let view = BranchView::read(app, session);
        let Some(view) = app.report(view)? else {
            app.term.pause()?;
            return Ok(());
        };
        draw(app, &view)?;

        let choice = app.term.prompt("Choose an action")?;
        let Some(action) = BranchAction::from_choice(&choice) else {
            app.term.error(InputError::InvalidChoice(choice))?;
            app.term.pause()?;
            continue;
        };
        debug!(?action, "branch action");

        let result = match action {
            BranchAction::Create => create(app, session, &view),
            BranchAction::Switch => switch(app, session, &view),
            BranchAction::Delete => delete(app, session, &view),
            BranchAction::Merge => merge(app, session, &view),
            BranchAction::Pull => pull(app, session, &view),
            BranchAction::Push => push(app, session, &view),
            BranchAction::Return => return Ok(()),
        };
        app.report(result)?;
        app.term.pause()?;
    }
}

fn draw<R: GitRunner>(app: &mut App<R>, view: &BranchView) -> GmResult<()> {
    app.term.heading("Branches")?;
    app.term.say(format!("Current branch: {}", view.current.green()))?;
    app.term.blank()?;

    app.term.say("Local:")?;
    if view.local.is_empty() {
        app.term.say("  (none yet)")?;
    }
    for (i, name) in view.local.iter().enumerate() {
        let marker = if *name == view.current { "*" } else { " " };
        app.term.say(format!("{marker} {:>2}. {name}", i + 1))?;
    }
    if !view.remote.is_empty() {
        app.term.say("Remote:")?;
        for name in &view.remote {
            app.term.say(format!("       {}", name.dimmed()))?;
        }
    }
    app.term.blank()?;

    for (i, action) in BranchAction::ALL.iter().enumerate() {
        app.term.say(format!("{}. {}", i + 1, action.label()))?;
    }
    Ok(())
}

fn create<R: GitRunner>(app: &mut App<R>, session: &Session, view: &BranchView) -> GmResult<()> {
    let name = app.term.prompt("New branch name")?;
    if name.is_empty() {
        return Err(InputError::EmptyValue("branch name".to_string()).into());
    }
    if view.local.contains(&name) {
        return Err(InputError::BranchExists(name).into());
    }

    if app.term.confirm(&format!("Switch to '{name}' now?"), true)? {
        app.git.checkout_new(&session.repo, &name)?;
        app.term.success(format!("Created and switched to '{name}'"))
    } else {
        app.git.create_branch(&session.repo, &name)?;
        app.term.success(format!("Created '{name}'"))
    }
}

fn pick<R: GitRunner>(app: &mut App<R>, message: &str, view: &BranchView) -> GmResult<String> {
    let answer = app.term.prompt(message)?;
    Ok(resolve_branch(&answer, &view.local)?)
}

fn switch<R: GitRunner>(app: &mut App<R>, session: &Session, view: &BranchView) -> GmResult<()> {
    let target = pick(app, "Switch to (number or name)", view)?;
    reject_current("switch to", &target, &view.current)?;
    app.git.checkout(&session.repo, &target)?;
    app.term.success(format!("Switched to '{target}'"))
}

fn delete<R: GitRunner>(app: &mut App<R>, session: &Session, view: &BranchView) -> GmResult<()> {
    let target = pick(app, "Delete (number or name)", view)?;
    reject_current("delete", &target, &view.current)?;
    let force = app
        .term
        .confirm("Force delete even if unmerged (-D)?", false)?;
    app.git.delete_branch(&session.repo, &target, force)?;
    app.term.success(format!("Deleted '{target}'"))
}

fn merge<R: GitRunner>(app: &mut App<R>, session: &Session, view: &BranchView) -> GmResult<()> {
    let target = pick(app, "Merge into current (number or name)", view)?;
    reject_current("merge", &target, &view.current)?;
    app.git.merge(&session.repo, &target)?;
    app.term
        .success(format!("Merged '{target}' into '{}'", view.current))
}

fn pull<R: GitRunner>(app: &mut App<R>, session: &Session, view: &BranchView) -> GmResult<()> {
    let default_remote = app.settings.git.default_remote.clone();
    let remote = app.term.prompt_default("Remote", &default_remote)?;
    let branch = app.term.prompt_default("Branch", &view.current)?;
    app.git.pull(&session.repo, Some((&remote, &branch)))?;
    app.term.success(format!("Pulled {remote}/{branch}"))
}

fn push<R: GitRunner>(app: &mut App<R>, session: &Session, view: &BranchView) -> GmResult<()> {
    let branch = app.term.prompt_default("Branch", &view.current)?;
    let default_remote = app.settings.git.default_remote.clone();
    let remote = app.term.prompt_default("Remote", &default_remote)?;
    let set_upstream = app.term.confirm("Set upstream (-u)?", false)?;
    let target = PushTarget::Explicit {
        remote: remote.clone(),
        branch: branch.clone(),
        set_upstream,
    };
    app.git.push(&session.repo, &target)?;
    app.term.success(format!("Pushed '{branch}' to {remote}"))
}

#[cfg(test)]
mod tests;
