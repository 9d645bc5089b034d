// gitmenu-rs: Interactive Git Helper
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Repository selection and registration.
//!
//! ```text
//!            load bookmarks
//!                  |
//!        empty? --yes--> AddNew --------------------+
//!                  |        |                       |
//!                  no       | path ok + repo        | declined init,
//!                  v        | (or init accepted)    | missing path,
//!   list: <n> | n | q | ""  v                       | git failure
//!     |       |   |   |   pick default branch,      |
//!     |       |   |   |   save bookmark             |
//!     |       |   |   |        |                    |
//!     |       |   |   |        v                    |
//!     |       |   |   +--> Repository(Session)      |
//!     |       |   '------> Quit                     |
//!     |       '----------> AddNew                   |
//!     '--------------------------------------------<+ (loop)
//! ```
//!
//! Every retry is another turn of the same loop.

use chrono::Local;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use super::branch::resolve_branch;
use super::repos::format_bookmarks;
use super::{App, Session};
use crate::bookmarks::Bookmarks;
use crate::error::{GmResult, InputError};
use crate::git::backend::GitRunner;
use crate::git::query;

/// Where the selector ended up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selection {
    Repository(Session),
    Quit,
}

/// A parsed answer to the bookmark list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ListChoice {
    Bookmark(usize),
    AddNew,
    Quit,
    Invalid,
}

fn parse_list_choice(input: &str, bookmarks: &Bookmarks) -> ListChoice {
    let input = input.trim();
    if input.is_empty() {
        return bookmarks
            .default_index()
            .map_or(ListChoice::Invalid, ListChoice::Bookmark);
    }
    if input.eq_ignore_ascii_case("n") {
        return ListChoice::AddNew;
    }
    if input.eq_ignore_ascii_case("q") {
        return ListChoice::Quit;
    }
    input
        .parse::<usize>()
        .ok()
        .and_then(|n| n.checked_sub(1))
        .filter(|&i| i < bookmarks.repositories.len())
        .map_or(ListChoice::Invalid, ListChoice::Bookmark)
}

/// Let the user pick or register a repository.
///
/// # Errors
///
/// Returns `GmError::InputClosed` when input ends; git and bookmark
/// failures are reported and the user is asked again.
pub fn select_repository<R: GitRunner>(app: &mut App<R>) -> GmResult<Selection> {
    loop {
        let bookmarks = app.store.load();

        if bookmarks.is_empty() {
            app.term.clear()?;
            app.term.heading("No saved repositories yet, let's add one")?;
            let added = add_repository(app);
            if let Some(Some(session)) = app.report(added)? {
                return Ok(Selection::Repository(session));
            }
            app.term.pause()?;
            continue;
        }

        app.term.clear()?;
        app.term.heading("Repositories")?;
        for line in format_bookmarks(&bookmarks) {
            app.term.say(line)?;
        }
        app.term.say(" n. Add a repository")?;
        app.term.say(" q. Quit")?;

        let answer = app.term.prompt("Select")?;
        match parse_list_choice(&answer, &bookmarks) {
            ListChoice::Bookmark(index) => {
                let opened = open_bookmark(app, bookmarks, index);
                if let Some(Some(session)) = app.report(opened)? {
                    return Ok(Selection::Repository(session));
                }
            }
            ListChoice::AddNew => {
                let added = add_repository(app);
                if let Some(Some(session)) = app.report(added)? {
                    return Ok(Selection::Repository(session));
                }
            }
            ListChoice::Quit => return Ok(Selection::Quit),
            ListChoice::Invalid => app.term.error(InputError::InvalidChoice(answer))?,
        }
        app.term.pause()?;
    }
}

/// Open an existing bookmark and refresh its timestamp.
fn open_bookmark<R: GitRunner>(
    app: &mut App<R>,
    mut bookmarks: Bookmarks,
    index: usize,
) -> GmResult<Option<Session>> {
    let bookmark = bookmarks.repositories[index].clone();
    if !query::is_git_repo(&bookmark.path) {
        app.term.error(format!(
            "{} is no longer a git repository",
            bookmark.path.display()
        ))?;
        return Ok(None);
    }

    bookmarks.touch(&bookmark.path, Local::now());
    app.store.save(&bookmarks)?;
    debug!(path = %bookmark.path.display(), "opened bookmark");

    Ok(Some(Session {
        repo: bookmark.path,
        default_branch: bookmark.default_branch,
        initial_branch: None,
    }))
}

/// Register a repository: path, optional init, default branch, save.
///
/// `Ok(None)` means the user should be asked again.
fn add_repository<R: GitRunner>(app: &mut App<R>) -> GmResult<Option<Session>> {
    let cwd = std::env::current_dir()?;
    let answer = app
        .term
        .prompt_default("Repository path", &cwd.display().to_string())?;
    let path = absolute(&cwd, &answer);

    if !path.is_dir() {
        app.term
            .error(format!("{} is not an existing directory", path.display()))?;
        return Ok(None);
    }
    let path = normalize(&path)?;

    let mut initial_branch = None;
    if !query::is_git_repo(&path) {
        let init = app.term.confirm(
            &format!("{} is not a git repository. Initialize one?", path.display()),
            false,
        )?;
        if !init {
            app.term.warn("Not a repository; choose another path.")?;
            return Ok(None);
        }
        initial_branch = Some(init_repository(app, &path)?);
    }

    let default_branch = pick_default_branch(app, &path, initial_branch.as_deref())?;
    let make_default = app.term.confirm("Make this the default repository?", false)?;

    let mut bookmarks = app.store.load();
    bookmarks.upsert(&path, &default_branch, Local::now());
    if make_default {
        bookmarks.set_default(&path);
    }
    app.store.save(&bookmarks)?;
    info!(path = %path.display(), %default_branch, "repository saved");
    app.term.success(format!("Saved {}", path.display()))?;

    Ok(Some(Session {
        repo: path,
        default_branch,
        initial_branch,
    }))
}

/// `git init`, name the unborn branch, and optionally add a remote.
/// Returns the initial branch.
fn init_repository<R: GitRunner>(app: &mut App<R>, path: &Path) -> GmResult<String> {
    let default_initial = app.settings.git.initial_branch.clone();
    let branch = app.term.prompt_default("Initial branch", &default_initial)?;

    app.git.init(path)?;
    app.git.rename_branch(path, &branch)?;
    app.term.success(format!("Initialized repository on '{branch}'"))?;

    let remote = app.settings.git.default_remote.clone();
    let url = app
        .term
        .prompt(&format!("URL for remote '{remote}' (empty to skip)"))?;
    if !url.is_empty() {
        app.git.remote_add(path, &remote, &url)?;
        app.term.say(format!("Added remote '{remote}' -> {url}"))?;
    }
    Ok(branch)
}

/// Choose the bookmark's default branch by number or name; empty keeps the
/// checked-out one.
fn pick_default_branch<R: GitRunner>(
    app: &mut App<R>,
    path: &Path,
    unborn_hint: Option<&str>,
) -> GmResult<String> {
    let current = app.git.current_branch(path, unborn_hint)?;
    let local = app.git.local_branches(path)?;

    app.term.say("Local branches:")?;
    if local.is_empty() {
        app.term.say(format!("  (none yet, on '{current}')"))?;
    }
    for (i, name) in local.iter().enumerate() {
        let marker = if *name == current { "*" } else { " " };
        app.term.say(format!("{marker} {:>2}. {name}", i + 1))?;
    }

    loop {
        let answer = app
            .term
            .prompt_default("Default branch (number or name)", &current)?;
        match resolve_branch(&answer, &local) {
            Ok(branch) => return Ok(branch),
            Err(e) => app.term.error(e)?,
        }
    }
}

/// Canonical form of an existing directory, so that one repository is never
/// bookmarked under two spellings. A `.git` directory stands for its work tree.
fn normalize(path: &Path) -> GmResult<PathBuf> {
    let path = path.canonicalize()?;
    if path.file_name().is_some_and(|name| name == ".git")
        && let Some(work_tree) = path.parent()
    {
        return Ok(work_tree.to_path_buf());
    }
    Ok(path)
}

fn absolute(cwd: &Path, answer: &str) -> PathBuf {
    let path = PathBuf::from(answer);
    if path.is_absolute() {
        path
    } else {
        cwd.join(path)
    }
}
