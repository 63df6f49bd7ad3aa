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
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::{App, util::format::format_showing};

const APP_TITLE: &str = "Book Connect";
const KEY_HINTS: &str = "/ search · s settings · m more · q quit";

pub(crate) fn draw_header(f: &mut Frame, area: Rect, app: &App) {
    let theme = &app.theme;
    let page = app.browser.page();

    let block = Block::default()
        .borders(Borders::BOTTOM)
        .border_style(Style::default().fg(theme.border_colour));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(0), Constraint::Length(KEY_HINTS.chars().count() as u16)])
        .split(inner);

    let title = Line::from(vec![
        Span::styled(
            APP_TITLE,
            Style::default()
                .fg(theme.accent_colour)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw("  "),
        Span::styled(
            format_showing(page.items.len(), page.total),
            Style::default().fg(theme.muted_colour),
        ),
    ]);

    f.render_widget(Paragraph::new(title), columns[0]);
    f.render_widget(
        Paragraph::new(KEY_HINTS).style(Style::default().fg(theme.muted_colour)),
        columns[1],
    );
}
