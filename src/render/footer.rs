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

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    widgets::{Block, Borders, Paragraph},
};

use crate::App;

/// Draws the show-more control and the status line.
///
/// The control's area is handed to the grid for hit-testing only while it is
/// enabled, so clicks on a disabled control do nothing.
pub(crate) fn draw_footer(f: &mut Frame, area: Rect, app: &mut App) {
    let theme = app.theme;
    let show_more = &app.browser.page().show_more;

    let block = Block::default()
        .borders(Borders::TOP)
        .border_style(Style::default().fg(theme.border_colour));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let label = show_more.label();
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(label.chars().count() as u16 + 2), Constraint::Min(0)])
        .split(inner);

    let style = if show_more.is_enabled() {
        Style::default()
            .fg(theme.accent_colour)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default()
            .fg(theme.muted_colour)
            .add_modifier(Modifier::DIM)
    };

    let enabled = show_more.is_enabled();
    f.render_widget(Paragraph::new(format!(" {label} ")).style(style), columns[0]);
    app.preview_grid
        .set_show_more_area(enabled.then_some(columns[0]));

    if let Some(status) = &app.status {
        f.render_widget(
            Paragraph::new(status.as_str()).style(Style::default().fg(theme.muted_colour)),
            columns[1],
        );
    }
}
