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

//! Application configuration.
//!
//! This module loads the application configuration file. The configuration
//! is read once at startup; theme changes made in the settings overlay last
//! only for the running session.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::{model::session::DEFAULT_PAGE_SIZE, theme::ThemeVariant};

const CONFIG_NAME: &str = "bookui";

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct AppConfig {
    pub version: u32,
    pub page_size: usize,
    pub dataset: Option<PathBuf>,
    pub theme: ThemeVariant,
    pub log_level: Option<String>,
    pub log_file: Option<PathBuf>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            version: 1,
            page_size: DEFAULT_PAGE_SIZE,
            dataset: None,
            theme: ThemeVariant::default(),
            log_level: None,
            log_file: None,
        }
    }
}

impl AppConfig {
    pub fn page_size(&self) -> usize {
        self.page_size.max(1)
    }
}

/// Loads the configuration file if one exists.
///
/// A missing or unreadable file yields the defaults. Nothing is written to
/// disk.
pub fn load_config() -> AppConfig {
    match confy::get_configuration_file_path(CONFIG_NAME, None) {
        Ok(path) => load_config_from(&path),
        Err(_) => AppConfig::default(),
    }
}

fn load_config_from(path: &Path) -> AppConfig {
    if !path.is_file() {
        return AppConfig::default();
    }
    confy::load_path(path).unwrap_or_default()
}
