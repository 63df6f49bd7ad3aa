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

//! Interactive UI components.
//!
//! Each component keeps its own view state, turns raw terminal events into
//! [`AppEvent`](crate::events::AppEvent)s, and knows how to draw itself.
//!
//! * [`preview_grid`]: The paginated grid of book previews.
//! * [`search`]: The search overlay with the title, author and genre fields.
//! * [`settings`]: The settings overlay for choosing the theme.
//! * [`detail`]: The overlay showing one book in full.

pub(crate) mod detail;
pub(crate) mod preview_grid;
pub(crate) mod search;
pub(crate) mod settings;

pub(crate) use detail::DetailView;
pub(crate) use preview_grid::PreviewGrid;
pub(crate) use search::SearchView;
pub(crate) use settings::SettingsView;

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Returns a rectangle of the given percentage size centred in `r`.
pub(crate) fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
