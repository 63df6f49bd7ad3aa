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

//! UI rendering logic for the book detail overlay.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Padding, Paragraph, Wrap},
};

use crate::{
    components::{DetailView, centered_rect},
    render::Render,
    theme::Theme,
};

impl Render for DetailView {
    fn draw(&mut self, f: &mut Frame, area: Rect, theme: &Theme) {
        let Some(preview) = &self.preview else {
            return;
        };

        let popup = centered_rect(70, 70, area);
        f.render_widget(Clear, popup);

        let block = Block::default()
            .borders(Borders::ALL)
            .title(Span::styled(
                format!(" {} ", preview.heading()),
                Style::default().add_modifier(Modifier::BOLD),
            ))
            .border_style(Style::default().fg(theme.accent_colour))
            .padding(Padding::new(2, 2, 1, 1))
            .style(Style::default().bg(theme.background()).fg(theme.foreground()));

        let mut lines = vec![
            Line::from(preview.author.as_str()).style(
                Style::default()
                    .fg(theme.author_fg)
                    .add_modifier(Modifier::BOLD),
            ),
        ];

        if !preview.genres.is_empty() {
            lines.push(
                Line::from(preview.genres.join(", ")).style(Style::default().fg(theme.muted_colour)),
            );
        }

        lines.push(Line::from(vec![
            Span::styled("Cover: ", Style::default().fg(theme.muted_colour)),
            Span::raw(preview.image.as_str()),
        ]));
        lines.push(Line::from(""));
        lines.push(Line::from(preview.description.as_str()));

        let paragraph = Paragraph::new(lines)
            .wrap(Wrap { trim: true })
            .scroll((self.scroll, 0))
            .block(block);

        f.render_widget(paragraph, popup);
    }
}
