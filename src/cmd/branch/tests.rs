// gitmenu-rs: Interactive Git Helper
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use std::path::Path;

use super::*;
use crate::cmd::test_utils::{scripted_app, session};
use crate::git::backend::GitOutput;
use crate::git::test_utils::ScriptedRunner;
use crate::ui::Transcript;

fn repo_runner() -> ScriptedRunner {
    ScriptedRunner::new()
        .on(&["rev-parse"], GitOutput::ok("main\n"))
        .on(
            &["branch", "--format=%(refname:short)"],
            GitOutput::ok("main\nfeature\n"),
        )
        .on(
            &["branch", "-r"],
            GitOutput::ok("origin/HEAD\norigin/main\n"),
        )
}

fn run(runner: &ScriptedRunner, input: &str) -> (Transcript, GmResult<()>) {
    let temp = tempfile::tempdir().unwrap();
    let (mut app, transcript) = scripted_app(runner, input, temp.path());
    let result = manage_branches(&mut app, &session(Path::new("/work/repo"), "main"));
    (transcript, result)
}

// =============================================================================
// resolve_branch
// =============================================================================

#[test]
fn test_resolve_branch_by_index_and_name() {
    let listed = vec!["main".to_string(), "feature".to_string()];
    assert_eq!(resolve_branch("2", &listed).unwrap(), "feature");
    assert_eq!(resolve_branch(" hotfix ", &listed).unwrap(), "hotfix");
}

#[test]
fn test_resolve_branch_rejects_out_of_range() {
    let listed = vec!["main".to_string()];
    insta::assert_snapshot!(resolve_branch("0", &listed).unwrap_err(), @"no branch numbered 0 (1-1 listed)");
    insta::assert_snapshot!(resolve_branch("5", &listed).unwrap_err(), @"no branch numbered 5 (1-1 listed)");
    insta::assert_snapshot!(resolve_branch("  ", &listed).unwrap_err(), @"branch name must not be empty");
}

#[test]
fn test_branch_action_from_choice() {
    assert_eq!(BranchAction::from_choice("1"), Some(BranchAction::Create));
    assert_eq!(BranchAction::from_choice(" 7 "), Some(BranchAction::Return));
    assert_eq!(BranchAction::from_choice("0"), None);
    assert_eq!(BranchAction::from_choice("8"), None);
    assert_eq!(BranchAction::from_choice("push"), None);
}

// =============================================================================
// Local rejections never reach git
// =============================================================================

#[test]
fn test_delete_current_branch_is_rejected_without_git() {
    let runner = repo_runner();
    let (transcript, result) = run(&runner, "3\n1\n7\n");
    result.unwrap();
    assert!(!runner.called(&["branch", "-d"]));
    assert!(!runner.called(&["branch", "-D"]));
    assert!(
        transcript
            .contents()
            .contains("cannot delete 'main': it is the current branch")
    );
}

#[test]
fn test_merge_into_self_is_rejected_without_git() {
    let runner = repo_runner();
    let (transcript, result) = run(&runner, "4\nmain\n7\n");
    result.unwrap();
    assert!(!runner.called(&["merge"]));
    assert!(
        transcript
            .contents()
            .contains("cannot merge 'main': it is the current branch")
    );
}

#[test]
fn test_switch_to_current_is_rejected_without_git() {
    let runner = repo_runner();
    let (transcript, result) = run(&runner, "2\n1\n7\n");
    result.unwrap();
    assert!(!runner.called(&["checkout"]));
    assert!(transcript.contents().contains("cannot switch to 'main'"));
}

#[test]
fn test_out_of_range_index_is_rejected_without_git() {
    let runner = repo_runner();
    let (transcript, result) = run(&runner, "2\n9\n7\n");
    result.unwrap();
    assert!(!runner.called(&["checkout"]));
    assert!(
        transcript
            .contents()
            .contains("no branch numbered 9 (1-2 listed)")
    );
}

#[test]
fn test_create_existing_branch_is_rejected() {
    let runner = repo_runner();
    let (transcript, result) = run(&runner, "1\nfeature\n7\n");
    result.unwrap();
    assert!(!runner.called(&["checkout", "-b"]));
    assert!(transcript.contents().contains("branch 'feature' already exists"));
}

// =============================================================================
// Actions issue the expected git calls
// =============================================================================

#[test]
fn test_create_and_switch() {
    let runner = repo_runner();
    let (_, result) = run(&runner, "1\nnew-thing\n\n7\n");
    result.unwrap();
    assert!(runner.calls().contains(&"checkout -b new-thing".to_string()));
}

#[test]
fn test_create_without_switching() {
    let runner = repo_runner();
    let (_, result) = run(&runner, "1\nnew-thing\nn\n7\n");
    result.unwrap();
    assert!(runner.calls().contains(&"branch new-thing".to_string()));
    assert!(!runner.called(&["checkout"]));
}

#[test]
fn test_switch_by_index() {
    let runner = repo_runner();
    let (transcript, result) = run(&runner, "2\n2\n7\n");
    result.unwrap();
    assert!(runner.calls().contains(&"checkout feature".to_string()));
    assert!(transcript.contents().contains("Switched to 'feature'"));
}

#[test]
fn test_force_delete_by_index() {
    let runner = repo_runner();
    let (_, result) = run(&runner, "3\n2\ny\n7\n");
    result.unwrap();
    assert!(runner.calls().contains(&"branch -D feature".to_string()));
}

#[test]
fn test_safe_delete_by_name() {
    let runner = repo_runner();
    let (_, result) = run(&runner, "3\nfeature\n\n7\n");
    result.unwrap();
    assert!(runner.calls().contains(&"branch -d feature".to_string()));
}

#[test]
fn test_unknown_literal_name_fails_in_git() {
    let runner = repo_runner().on(
        &["checkout", "ghost"],
        GitOutput::failed(1, "error: pathspec 'ghost' did not match any file(s) known to git"),
    );
    let (transcript, result) = run(&runner, "2\nghost\n7\n");
    result.unwrap();
    assert!(runner.called(&["checkout", "ghost"]));
    assert!(transcript.contents().contains("failed to checkout ghost"));
}

#[test]
fn test_pull_with_defaults_and_override() {
    let runner = repo_runner();
    let (_, result) = run(&runner, "5\nupstream\n\n7\n");
    result.unwrap();
    assert!(runner.calls().contains(&"pull upstream main".to_string()));
}

#[test]
fn test_push_with_upstream() {
    let runner = repo_runner();
    let (_, result) = run(&runner, "6\n\n\ny\n7\n");
    result.unwrap();
    assert!(runner.calls().contains(&"push -u origin main".to_string()));
}

#[test]
fn test_invalid_choice_redraws() {
    let runner = repo_runner();
    let (transcript, result) = run(&runner, "9\n7\n");
    result.unwrap();
    assert!(transcript.contents().contains("invalid choice: '9'"));
    // one snapshot per round
    assert_eq!(
        runner
            .calls()
            .iter()
            .filter(|c| c.starts_with("rev-parse"))
            .count(),
        2
    );
}

#[test]
fn test_listing_shows_current_and_remotes() {
    let runner = repo_runner();
    let (transcript, result) = run(&runner, "7\n");
    result.unwrap();
    let out = transcript.contents();
    assert!(out.contains("*  1. main"));
    assert!(out.contains("   2. feature"));
    assert!(out.contains("origin/main"));
    assert!(!out.contains("origin/HEAD"));
}

#[test]
fn test_closed_input_escapes() {
    let runner = repo_runner();
    let (_, result) = run(&runner, "");
    assert!(result.unwrap_err().is_input_closed());
}
