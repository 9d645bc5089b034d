// gitmenu-rs: Interactive Git Helper
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Shared test utilities for code that drives git.
//!
//! `ScriptedRunner` answers git invocations from canned responses and
//! records every call, so tests can assert which commands were (not) run.

use std::cell::RefCell;
use std::path::Path;

use super::backend::{GitOutput, GitRunner};
use crate::error::GmResult;

#[derive(Default)]
pub(crate) struct ScriptedRunner {
    rules: Vec<(Vec<String>, GitOutput)>,
    calls: RefCell<Vec<Vec<String>>>,
}

impl ScriptedRunner {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Answer any call whose arguments start with `prefix`.
    ///
    /// Later rules take precedence over earlier ones; unmatched calls
    /// succeed with empty output.
    pub(crate) fn on(mut self, prefix: &[&str], output: GitOutput) -> Self {
        self.rules.insert(
            0,
            (prefix.iter().map(ToString::to_string).collect(), output),
        );
        self
    }

    /// Every call so far, as space-joined argument strings.
    pub(crate) fn calls(&self) -> Vec<String> {
        self.calls.borrow().iter().map(|args| args.join(" ")).collect()
    }

    /// Whether any call started with the given subcommand words.
    pub(crate) fn called(&self, prefix: &[&str]) -> bool {
        self.calls
            .borrow()
            .iter()
            .any(|args| args.len() >= prefix.len() && args.iter().zip(prefix).all(|(a, p)| a == p))
    }
}

impl GitRunner for ScriptedRunner {
    fn run(&self, args: &[&str], _cwd: &Path) -> GmResult<GitOutput> {
        let args: Vec<String> = args.iter().map(ToString::to_string).collect();
        let output = self
            .rules
            .iter()
            .find(|(prefix, _)| args.len() >= prefix.len() && args.iter().zip(prefix).all(|(a, p)| a == p))
            .map(|(_, output)| output.clone())
            .unwrap_or_default();
        self.calls.borrow_mut().push(args);
        Ok(output)
    }
}
