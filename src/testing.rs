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

//! Helpers for building application state in tests.

use crate::{App, config::AppConfig, events::AppEvent, model::catalog::Catalog};

/// Builds an [`App`] over `catalog` with the given page size and the default
/// configuration otherwise.
pub(crate) fn app_with(catalog: Catalog, page_size: usize) -> App {
    let config = AppConfig {
        page_size,
        ..AppConfig::default()
    };
    App::new(&config, catalog)
}

/// Collects every event currently queued on the application channel.
pub(crate) fn drain(app: &App) -> Vec<AppEvent> {
    app.event_rx.try_iter().collect()
}
