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

//! User interface rendering logic.
//!
//! This module handles the translation of the [`App`] state into visual
//! widgets using the `ratatui` framework. It is responsible for layout
//! management, widget styling, and terminal frame composition.
//!
//! # Rendering Pipeline
//!
//! The primary entry point is the [`draw`] function, which is called after
//! every processed event. The base layer is always the header, the preview
//! grid and the footer; open overlays are then drawn over it.

mod footer;
mod header;

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    widgets::Block,
};

use crate::{
    App,
    render::{footer::draw_footer, header::draw_header},
    theme::Theme,
};

pub(crate) trait Render {
    fn draw(&mut self, f: &mut Frame, area: Rect, theme: &Theme);
}

/// Renders the user interface to the terminal frame.
///
/// It handles:
///
/// * **Layout**: Partitioning the screen into the header, grid and footer.
/// * **State Mapping**: Drawing the current page of previews and recording
///   the areas used for mouse hit-testing.
/// * **Overlays**: Drawing search, settings and detail on top, in that order,
///   so the focused overlay is the one that ends up visible.
///
/// # Arguments
///
/// * `f` - The current terminal frame used for drawing.
/// * `app` - A mutable reference to the application state, allowing the UI
///   to update internal view state such as the grid scroll position.
pub(crate) fn draw(f: &mut Frame, app: &mut App) {
    let area = f.area();

    f.render_widget(
        Block::default().style(
            Style::default()
                .bg(app.theme.background())
                .fg(app.theme.foreground()),
        ),
        area,
    );

    // Outer layout: header, grid, footer
    let outer = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),
            Constraint::Min(0),
            Constraint::Length(2),
        ])
        .split(area);

    draw_header(f, outer[0], app);

    app.preview_grid
        .draw(f, outer[1], app.browser.page(), &app.theme);

    draw_footer(f, outer[2], app);

    if app.overlays.search.is_open() {
        app.search_view.draw(f, area, &app.theme);
    }
    if app.overlays.settings.is_open() {
        app.settings_view.draw(f, area, &app.theme);
    }
    if app.overlays.detail.is_open() {
        app.detail_view.draw(f, area, &app.theme);
    }
}
