// gitmenu-rs: Interactive Git Helper
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Entry point.
//!
//! ```text
//! cli::parse() --> Logging --> Settings --> Command Dispatch
//!   Version | Options | Inis | Repos | (none: interactive)
//! ```

use std::path::Path;
use std::process::ExitCode;

use gitmenu_rs::bookmarks::BookmarkStore;
use gitmenu_rs::cli::global::GlobalOptions;
use gitmenu_rs::cli::{self, Command};
use gitmenu_rs::cmd::config::{run_inis_command, run_options_command};
use gitmenu_rs::cmd::menu::run_interactive;
use gitmenu_rs::cmd::repos::run_repos_command;
use gitmenu_rs::cmd::setup::{ensure_git_available, probe_version};
use gitmenu_rs::cmd::App;
use gitmenu_rs::config::loader::ConfigLoader;
use gitmenu_rs::config::{SETTINGS_FILE_NAME, Settings, exe_dir};
use gitmenu_rs::git::cmd::GitClient;
use gitmenu_rs::logging::init_logging;
use gitmenu_rs::logging::{LogConfig, LogLevel};
use gitmenu_rs::ui::Terminal;

use mimalloc::MiMalloc;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

fn main() -> ExitCode {
    let cli = cli::parse();

    let log_config = build_log_config(&cli.global);
    let _log_guard = match init_logging(&log_config) {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("Failed to initialize logging: {e}");
            return ExitCode::FAILURE;
        }
    };

    dispatch_command(&cli)
}

fn build_log_config(global: &GlobalOptions) -> LogConfig {
    let console_level = global
        .log_level
        .and_then(LogLevel::from_u8)
        .unwrap_or(LogLevel::Warn);

    let file_level = global
        .file_log_level
        .and_then(LogLevel::from_u8)
        .unwrap_or(LogLevel::Trace);

    LogConfig::builder()
        .with_console_level(console_level)
        .with_file_level(file_level)
        .maybe_with_log_file(global.log_file.clone())
        .build()
}

fn dispatch_command(cli: &cli::Cli) -> ExitCode {
    let result = match &cli.command {
        Some(Command::Version) => {
            handle_version_command();
            Ok(())
        }
        Some(Command::Options) => {
            load_settings(&cli.global).map(|settings| run_options_command(&settings))
        }
        Some(Command::Inis) => build_settings_loader(&cli.global).map(|loader| {
            run_inis_command(&loader.format_loaded_files());
        }),
        Some(Command::Repos) => load_settings(&cli.global).map(|settings| {
            run_repos_command(&BookmarkStore::new(settings.bookmarks_path(&exe_dir())));
        }),
        None => load_settings(&cli.global).and_then(run_session),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn handle_version_command() {
    println!("{}", env!("CARGO_PKG_VERSION"));
}

fn run_session(settings: Settings) -> gitmenu_rs::error::Result<()> {
    let git_path = ensure_git_available()?;
    tracing::debug!(path = %git_path.display(), "using git");

    let cwd = std::env::current_dir()?;
    let git = GitClient::shell();
    probe_version(&git, &cwd)?;

    let store = BookmarkStore::new(settings.bookmarks_path(&exe_dir()));
    tracing::debug!(path = %store.path().display(), "bookmark file");

    let term = Terminal::stdio(&settings.ui);
    let mut app = App::new(git, term, store, settings);
    match run_interactive(&mut app, &cwd) {
        Ok(()) => Ok(()),
        Err(e) if e.is_input_closed() => {
            tracing::debug!("input closed, leaving");
            Ok(())
        }
        Err(e) => Err(e.into()),
    }
}

fn build_settings_loader(global: &GlobalOptions) -> gitmenu_rs::error::Result<ConfigLoader> {
    let beside_exe = exe_dir().join(SETTINGS_FILE_NAME);
    let mut loader = ConfigLoader::new().add_toml_file_optional(&beside_exe);
    if !same_file(&beside_exe, Path::new(SETTINGS_FILE_NAME)) {
        loader = loader.add_toml_file_optional(SETTINGS_FILE_NAME);
    }
    for ini_path in &global.inis {
        loader = loader.add_toml_file(ini_path);
    }
    loader = loader.with_env_prefix("GITMENU");
    for (key, value) in global.to_settings_overrides() {
        loader = loader.set(key, value)?;
    }
    Ok(loader)
}

fn load_settings(global: &GlobalOptions) -> gitmenu_rs::error::Result<Settings> {
    build_settings_loader(global)
        .and_then(ConfigLoader::build)
        .map_err(|e| {
            eprintln!("Failed to load settings: {e}");
            e
        })
}

// The working-directory file is skipped when it is the one beside the exe.
fn same_file(a: &Path, b: &Path) -> bool {
    match (a.canonicalize(), b.canonicalize()) {
        (Ok(a), Ok(b)) => a == b,
        _ => false,
    }
}
