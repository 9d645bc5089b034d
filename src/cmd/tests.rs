// gitmenu-rs: Interactive Git Helper
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use chrono::{Local, TimeZone};
use std::path::Path;

use super::menu::{MenuChoice, pull_current, run_interactive, run_main_menu};
use super::repos::format_bookmarks;
use super::status::{render_changes, render_commits, show_status};
use super::test_utils::{scripted_app, session};
use super::*;
use crate::bookmarks::Bookmarks;
use crate::git::backend::GitOutput;
use crate::git::parse::{ChangeSet, CommitSummary};
use crate::git::test_utils::ScriptedRunner;

const REPO: &str = "/work/repo";

fn main_repo() -> ScriptedRunner {
    ScriptedRunner::new()
        .on(&["rev-parse"], GitOutput::ok("main\n"))
        .on(
            &["for-each-ref"],
            GitOutput::ok("main\torigin\trefs/heads/main\ntopic\t\t\n"),
        )
        .on(&["log"], GitOutput::ok("1a2b3c4 Initial commit\n"))
}

// =============================================================================
// App::report
// =============================================================================

#[test]
fn test_report_prints_and_swallows_failures() {
    let temp = tempfile::tempdir().unwrap();
    let (mut app, transcript) = scripted_app(ScriptedRunner::new(), "", temp.path());

    let failed: GmResult<()> = Err(crate::error::InputError::EmptyValue("name".into()).into());
    assert_eq!(app.report(failed).unwrap(), None);
    assert_eq!(app.report(Ok(3)).unwrap(), Some(3));
    assert!(transcript.contents().contains("Error: name must not be empty"));

    let closed: GmResult<()> = Err(crate::error::GmError::InputClosed);
    assert!(app.report(closed).unwrap_err().is_input_closed());
}

// =============================================================================
// Status rendering
// =============================================================================

#[test]
fn test_render_changes_groups() {
    let changes = ChangeSet {
        modified: vec!["src/lib.rs".into()],
        added: vec!["notes.md".into(), "todo.md".into()],
        deleted: Vec::new(),
    };
    let lines = render_changes(&changes);
    assert_eq!(lines.len(), 5);
    assert_eq!(lines[0], "Modified (1):");
    assert!(lines[1].ends_with(" src/lib.rs"));
    assert_eq!(lines[2], "Added (2):");
    assert!(lines[4].ends_with(" todo.md"));
    assert!(!lines.iter().any(|l| l.starts_with("Deleted")));
}

#[test]
fn test_render_changes_only_unclassified() {
    let lines = render_changes(&ChangeSet::default());
    assert_eq!(lines.len(), 1);
    assert!(lines[0].contains("renames"));
}

#[test]
fn test_render_commits() {
    let commits = vec![CommitSummary {
        short_hash: "1a2b3c4".into(),
        subject: "[fix] handle empty repos".into(),
    }];
    let lines = render_commits(&commits);
    assert!(lines[0].contains("1a2b3c4"));
    assert!(lines[0].ends_with(" [fix] handle empty repos"));
}

#[test]
fn test_show_status_clean_tree() {
    let temp = tempfile::tempdir().unwrap();
    let runner = main_repo();
    let (mut app, transcript) = scripted_app(&runner, "", temp.path());

    show_status(&mut app, &session(Path::new(REPO), "main")).unwrap();

    let out = transcript.contents();
    assert!(out.contains("Repository: /work/repo"));
    assert!(out.contains("Branch:     main -> origin/main"));
    assert!(out.contains("Working tree clean"));
    assert!(out.contains("Initial commit"));
    assert!(runner.calls().contains(&"log -n 5 --format=%h %s".to_string()));
}

#[test]
fn test_show_status_untracked_branch_without_commits() {
    let temp = tempfile::tempdir().unwrap();
    let runner = main_repo()
        .on(&["rev-parse"], GitOutput::ok("topic\n"))
        .on(&["status"], GitOutput::ok(" D gone.txt\n"))
        .on(&["log"], GitOutput::failed(128, "fatal: no commits yet"));
    let (mut app, transcript) = scripted_app(&runner, "", temp.path());

    show_status(&mut app, &session(Path::new(REPO), "main")).unwrap();

    let out = transcript.contents();
    assert!(out.contains("Branch:     topic (no upstream)"));
    assert!(out.contains("Deleted (1):"));
    assert!(out.contains("No commits yet"));
}

// =============================================================================
// Bookmark listing
// =============================================================================

#[test]
fn test_format_bookmarks_marks_default() {
    let when = Local.with_ymd_and_hms(2026, 3, 14, 9, 26, 53).unwrap();
    let mut bookmarks = Bookmarks::default();
    bookmarks.upsert(Path::new("/src/alpha"), "main", when);
    bookmarks.upsert(Path::new("/src/beta"), "develop", when);
    assert!(bookmarks.set_default(Path::new("/src/beta")));

    insta::assert_debug_snapshot!(format_bookmarks(&bookmarks), @r#"
    [
        " 1. /src/alpha [main] last used 2026-03-14 09:26",
        " 2. /src/beta [develop] last used 2026-03-14 09:26  (default)",
    ]
    "#);
}

#[test]
fn test_format_bookmarks_dangling_default_unmarked() {
    let when = Local.with_ymd_and_hms(2026, 1, 1, 0, 0, 0).unwrap();
    let mut bookmarks = Bookmarks::default();
    bookmarks.upsert(Path::new("/src/alpha"), "main", when);
    bookmarks.default_repo = Some("/src/removed".into());

    let lines = format_bookmarks(&bookmarks);
    assert_eq!(lines.len(), 1);
    assert!(!lines[0].contains("(default)"));
}

// =============================================================================
// Identity
// =============================================================================

#[test]
fn test_identity_already_configured_asks_nothing() {
    let temp = tempfile::tempdir().unwrap();
    let runner = ScriptedRunner::new().on(&["config", "--global"], GitOutput::ok("set\n"));
    let (mut app, transcript) = scripted_app(&runner, "", temp.path());

    setup::ensure_identity(&mut app, temp.path()).unwrap();
    assert_eq!(transcript.contents(), "");
    assert_eq!(runner.calls().len(), 2);
}

#[test]
fn test_identity_prompts_for_missing_values() {
    let temp = tempfile::tempdir().unwrap();
    // user.email falls through to an empty answer
    let runner = ScriptedRunner::new()
        .on(&["config", "--global", "user.name"], GitOutput::ok("Ada Lovelace\n"));
    let (mut app, transcript) = scripted_app(&runner, "ada@example.com\n", temp.path());

    setup::ensure_identity(&mut app, temp.path()).unwrap();
    assert!(!transcript.contents().contains("Your name"));
    assert!(transcript.contents().contains("Your email: "));
    assert!(
        runner
            .calls()
            .contains(&"config --global user.email ada@example.com".to_string())
    );
}

#[test]
fn test_identity_blank_answer_leaves_unset() {
    let temp = tempfile::tempdir().unwrap();
    let runner = ScriptedRunner::new().on(&["config", "--global"], GitOutput::failed(1, ""));
    let (mut app, transcript) = scripted_app(&runner, "\n\n", temp.path());

    setup::ensure_identity(&mut app, temp.path()).unwrap();
    assert_eq!(runner.calls().len(), 2);
    assert_eq!(transcript.contents().matches("Skipped;").count(), 2);
}

#[test]
fn test_probe_version() {
    let runner = ScriptedRunner::new().on(&["--version"], GitOutput::ok("git version 2.47.1\n"));
    let git = crate::git::cmd::GitClient::new(&runner);
    assert_eq!(
        setup::probe_version(&git, Path::new(".")).unwrap(),
        "git version 2.47.1"
    );
}

// =============================================================================
// Main menu
// =============================================================================

#[test]
fn test_menu_choice_from_choice() {
    assert_eq!(MenuChoice::from_choice("1"), Some(MenuChoice::CommitAndPush));
    assert_eq!(MenuChoice::from_choice("6"), Some(MenuChoice::Quit));
    assert_eq!(MenuChoice::from_choice("7"), None);
    assert_eq!(MenuChoice::from_choice("quit"), None);
}

#[test]
fn test_pull_tracked_branch_uses_upstream() {
    let temp = tempfile::tempdir().unwrap();
    let runner = main_repo();
    let (mut app, transcript) = scripted_app(&runner, "", temp.path());

    pull_current(&mut app, &session(Path::new(REPO), "main")).unwrap();
    assert_eq!(runner.calls().last().unwrap(), "pull");
    assert!(transcript.contents().contains("Pulled from origin/main"));
}

#[test]
fn test_pull_untracked_branch_names_remote() {
    let temp = tempfile::tempdir().unwrap();
    let runner = main_repo().on(&["rev-parse"], GitOutput::ok("topic\n"));
    let (mut app, _) = scripted_app(&runner, "", temp.path());

    pull_current(&mut app, &session(Path::new(REPO), "main")).unwrap();
    assert_eq!(runner.calls().last().unwrap(), "pull origin topic");
}

#[test]
fn test_menu_quit() {
    let temp = tempfile::tempdir().unwrap();
    let runner = main_repo();
    let (mut app, transcript) = scripted_app(&runner, "6\n", temp.path());

    run_main_menu(&mut app, session(Path::new(REPO), "main")).unwrap();
    let out = transcript.contents();
    assert!(out.contains("1. Commit and push"));
    assert!(out.contains("6. Quit"));
}

#[test]
fn test_menu_reports_failures_and_continues() {
    let temp = tempfile::tempdir().unwrap();
    let runner = main_repo().on(&["pull"], GitOutput::failed(1, "fatal: couldn't find remote ref"));
    let (mut app, transcript) = scripted_app(&runner, "abc\n3\n6\n", temp.path());

    run_main_menu(&mut app, session(Path::new(REPO), "main")).unwrap();
    let out = transcript.contents();
    assert!(out.contains("invalid choice: 'abc'"));
    assert!(out.contains("git pull failed: fatal: couldn't find remote ref"));
    assert_eq!(out.matches("Choose: ").count(), 3);
}

#[test]
fn test_menu_commit_without_changes() {
    let temp = tempfile::tempdir().unwrap();
    let runner = main_repo();
    let (mut app, transcript) = scripted_app(&runner, "1\n6\n", temp.path());

    run_main_menu(&mut app, session(Path::new(REPO), "main")).unwrap();
    assert!(transcript.contents().contains("No changes to commit."));
    assert!(!runner.called(&["add"]));
    assert!(!runner.called(&["commit"]));
    assert!(!runner.called(&["push"]));
}

#[test]
fn test_menu_branches_round_trip() {
    let temp = tempfile::tempdir().unwrap();
    let runner = main_repo();
    let (mut app, transcript) = scripted_app(&runner, "2\n7\n6\n", temp.path());

    run_main_menu(&mut app, session(Path::new(REPO), "main")).unwrap();
    assert!(transcript.contents().contains("7. Return to main menu"));
}

#[test]
fn test_menu_change_repository_then_quit_from_selector() {
    let temp = tempfile::tempdir().unwrap();
    let repo = tempfile::tempdir().unwrap();
    gix::init(repo.path()).unwrap();
    let store = crate::bookmarks::BookmarkStore::new(temp.path().join("gitmenu.json"));
    let mut bookmarks = Bookmarks::default();
    bookmarks.upsert(repo.path(), "main", Local::now());
    store.save(&bookmarks).unwrap();

    let runner = main_repo();
    let (mut app, _) = scripted_app(&runner, "5\nq\n", temp.path());
    run_main_menu(&mut app, session(Path::new(REPO), "main")).unwrap();
}

#[test]
fn test_menu_closed_input_escapes() {
    let temp = tempfile::tempdir().unwrap();
    let runner = main_repo();
    let (mut app, _) = scripted_app(&runner, "4\n", temp.path());

    let err = run_main_menu(&mut app, session(Path::new(REPO), "main")).unwrap_err();
    assert!(err.is_input_closed());
}

#[test]
fn test_interactive_quit_from_selector() {
    let temp = tempfile::tempdir().unwrap();
    let repo = tempfile::tempdir().unwrap();
    gix::init(repo.path()).unwrap();
    let store = crate::bookmarks::BookmarkStore::new(temp.path().join("gitmenu.json"));
    let mut bookmarks = Bookmarks::default();
    bookmarks.upsert(repo.path(), "main", Local::now());
    store.save(&bookmarks).unwrap();

    let runner = ScriptedRunner::new().on(&["config", "--global"], GitOutput::ok("set\n"));
    let (mut app, _) = scripted_app(&runner, "q\n", temp.path());
    run_interactive(&mut app, temp.path()).unwrap();
    assert!(!runner.called(&["rev-parse"]));
}
