// gitmenu-rs: Interactive Git Helper
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Parsers for captured git output.
//!
//! ```text
//! status --porcelain      --> parse_status      --> Option<ChangeSet>
//! for-each-ref refs/heads --> parse_tracking    --> TrackingMap
//! branch --format=...     --> parse_branch_list --> Vec<String>
//! log --format="%h %s"    --> parse_log         --> Vec<CommitSummary>
//! ```
//!
//! Pure functions over text; nothing here spawns a process.

use regex::Regex;
use std::collections::BTreeMap;
use std::fmt;
use std::sync::LazyLock;

static MODIFIED: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^ M|^M ").expect("valid regex"));
static ADDED: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\?\?").expect("valid regex"));
static DELETED: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^ D|^D ").expect("valid regex"));

/// `for-each-ref` format behind [`parse_tracking`]: branch, remote and the
/// merge ref on the remote, tab separated.
pub const TRACKING_FORMAT: &str =
    "--format=%(refname:lstrip=2)%09%(upstream:remotename)%09%(upstream:remoteref)";

// `feature/login<TAB>origin<TAB>refs/heads/feature/login`
static TRACKING: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([^\t]+)\t([^\t]+)\t(?:refs/heads/)?([^\t]+)$").expect("valid regex")
});

/// Working-tree changes bucketed by kind.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChangeSet {
    pub modified: Vec<String>,
    pub added: Vec<String>,
    pub deleted: Vec<String>,
}

impl ChangeSet {
    /// Number of classified paths.
    #[must_use]
    pub fn len(&self) -> usize {
        self.modified.len() + self.added.len() + self.deleted.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// The remote branch a local branch pushes to and pulls from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrackingPair {
    pub remote: String,
    pub branch: String,
}

impl fmt::Display for TrackingPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.remote, self.branch)
    }
}

/// Local branch name to its tracking pair.
pub type TrackingMap = BTreeMap<String, TrackingPair>;

/// One line of abbreviated history.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommitSummary {
    pub short_hash: String,
    pub subject: String,
}

impl fmt::Display for CommitSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.short_hash, self.subject)
    }
}

/// Classify `git status --porcelain` output.
///
/// Returns `None` when the output is blank. Lines matching none of the
/// modified/added/deleted patterns (renames, conflicts, `MM`, ...) are
/// dropped, so a non-empty status can still yield an empty `ChangeSet`.
#[must_use]
pub fn parse_status(output: &str) -> Option<ChangeSet> {
    if output.trim().is_empty() {
        return None;
    }

    let mut changes = ChangeSet::default();
    for line in output.lines() {
        let line = line.trim_end();
        let Some(path) = line.get(3..).filter(|p| !p.is_empty()) else {
            continue;
        };
        let path = path.to_string();
        if MODIFIED.is_match(line) {
            changes.modified.push(path);
        } else if ADDED.is_match(line) {
            changes.added.push(path);
        } else if DELETED.is_match(line) {
            changes.deleted.push(path);
        }
    }
    Some(changes)
}

/// Recover tracking pairs from the verbose branch listing produced with
/// [`TRACKING_FORMAT`].
///
/// Branches without an upstream leave the last two columns empty and are
/// absent from the map. Commit subjects are not part of the listing, so
/// nothing a user writes in a message can look like an upstream.
#[must_use]
pub fn parse_tracking(output: &str) -> TrackingMap {
    output
        .lines()
        .filter_map(|line| TRACKING.captures(line.trim_end_matches('\r')))
        .map(|caps| {
            (
                caps[1].to_string(),
                TrackingPair {
                    remote: caps[2].to_string(),
                    branch: caps[3].to_string(),
                },
            )
        })
        .collect()
}

/// Parse `git branch [-r] --format=%(refname:short)`.
///
/// Drops symbolic `<remote>/HEAD` entries, bare remote names (how newer git
/// shortens `refs/remotes/<remote>/HEAD`) in remote listings, and
/// `(HEAD detached ...)` pseudo entries.
#[must_use]
pub fn parse_branch_list(output: &str, remote: bool) -> Vec<String> {
    output
        .lines()
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .filter(|name| !name.starts_with('('))
        .filter(|name| !name.ends_with("/HEAD"))
        .filter(|name| !remote || name.contains('/'))
        .map(ToString::to_string)
        .collect()
}

/// Parse `git log --format="%h %s"`, newest first as git emits it.
#[must_use]
pub fn parse_log(output: &str) -> Vec<CommitSummary> {
    output
        .lines()
        .map(str::trim_end)
        .filter(|line| !line.is_empty())
        .map(|line| {
            let (hash, subject) = line.split_once(' ').unwrap_or((line, ""));
            CommitSummary {
                short_hash: hash.to_string(),
                subject: subject.to_string(),
            }
        })
        .collect()
}
