// gitmenu-rs: Interactive Git Helper
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Library root.
//!
//! # Crate Architecture
//!
//! ```text
//!                        main.rs
//!                           |
//!                +----------+----------+
//!                v                     v
//!             cli (clap)        cmd (workflows)
//!                |       select / menu / commit / branch
//!                +----------+----------+
//!                           v
//!        ,-----------------------------------------,
//!        |  config (TOML)     bookmarks (JSON)     |
//!        '------+--------------------------+-------'
//!               |                          |
//!               v                          v
//!         ui (terminal)              git gix/CLI
//!       prompt / confirm         GitClient, parsers
//!
//!   +-----------------------------------------+
//!   |  foundation   error, logging            |
//!   +-----------------------------------------+
//! ```

pub mod bookmarks;
pub mod cli;
pub mod cmd;
pub mod config;
pub mod error;
pub mod git;
pub mod logging;
pub mod ui;
