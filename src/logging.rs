// Copyright (C) 2026  Caprica Software Limited
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.

//! Tracing subscriber setup.
//!
//! The terminal belongs to the UI, so log output goes to a file instead of
//! stdout or stderr.
//!
//! # Level Resolution
//!
//! 1. The `BOOKUI_LOG` environment variable, in `EnvFilter` syntax.
//! 2. `log_level` from the configuration file.
//! 3. Default: `"info"`.
//!
//! # File Location
//!
//! `log_file` from the configuration file, otherwise `bookui.log` in the
//! system temporary directory.

use std::{
    fs::OpenOptions,
    path::PathBuf,
    sync::Mutex,
};

use tracing_subscriber::EnvFilter;

use crate::config::AppConfig;

const LOG_ENV: &str = "BOOKUI_LOG";
const LOG_FILE_NAME: &str = "bookui.log";
const DEFAULT_LEVEL: &str = "info";

/// Installs the global tracing subscriber.
///
/// Logging is optional: if the log file cannot be opened, or a subscriber is
/// already installed, this returns without doing anything.
pub(crate) fn init_logging(config: &AppConfig) {
    let path = log_path(config);
    let Ok(file) = OpenOptions::new().create(true).append(true).open(&path) else {
        return;
    };

    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter(config))
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(false)
        .try_init();
}

fn log_path(config: &AppConfig) -> PathBuf {
    config
        .log_file
        .clone()
        .unwrap_or_else(|| std::env::temp_dir().join(LOG_FILE_NAME))
}

fn env_filter(config: &AppConfig) -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| {
        EnvFilter::new(config.log_level.as_deref().unwrap_or(DEFAULT_LEVEL))
    })
}
