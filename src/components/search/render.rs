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

//! UI rendering logic for the search overlay.

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
};

use crate::{
    components::{SearchView, centered_rect, search::SearchField},
    render::Render,
    theme::Theme,
};

impl Render for SearchView {
    fn draw(&mut self, f: &mut Frame, area: Rect, theme: &Theme) {
        let popup = centered_rect(60, 60, area);
        f.render_widget(Clear, popup);

        let block = Block::default()
            .borders(Borders::ALL)
            .title(Span::styled(" Search ", Style::default().add_modifier(Modifier::BOLD)))
            .border_style(Style::default().fg(theme.accent_colour))
            .style(Style::default().bg(theme.background()).fg(theme.foreground()));

        let inner = block.inner(popup);
        f.render_widget(block, popup);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Length(3),
                Constraint::Length(3),
                Constraint::Min(0),
                Constraint::Length(1),
            ])
            .split(inner);

        self.draw_title_field(f, chunks[0], theme);

        let author = format!("‹ {} ›", self.author_label());
        draw_field(f, chunks[1], " Author ", author, self.focus == SearchField::Author, theme);

        let genre = format!("‹ {} ›", self.genre_label());
        draw_field(f, chunks[2], " Genre ", genre, self.focus == SearchField::Genre, theme);

        let hints = Line::from("Enter search · Esc cancel · Tab next field")
            .style(Style::default().fg(theme.muted_colour));
        f.render_widget(Paragraph::new(hints), chunks[4]);
    }
}

impl SearchView {
    fn draw_title_field(&self, f: &mut Frame, area: Rect, theme: &Theme) {
        let focused = self.focus == SearchField::Title;
        let block = field_block(" Title ", focused, theme);
        let inner = block.inner(area);

        let width = usize::from(inner.width.max(1));
        let scroll = self.title.visual_scroll(width);

        let input = Paragraph::new(self.title.value())
            .scroll((0, scroll as u16))
            .block(block);
        f.render_widget(input, area);

        if focused {
            let cursor = self.title.visual_cursor().max(scroll) - scroll;
            f.set_cursor_position((inner.x + cursor as u16, inner.y));
        }
    }
}

fn draw_field(f: &mut Frame, area: Rect, title: &str, value: String, focused: bool, theme: &Theme) {
    let paragraph = Paragraph::new(value).block(field_block(title, focused, theme));
    f.render_widget(paragraph, area);
}

fn field_block<'a>(title: &'a str, focused: bool, theme: &Theme) -> Block<'a> {
    let colour = if focused {
        theme.accent_colour
    } else {
        theme.border_colour
    };

    Block::default()
        .borders(Borders::ALL)
        .title(title)
        .border_style(Style::default().fg(colour))
}
