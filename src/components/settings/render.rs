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

//! UI rendering logic for the settings overlay.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Padding, Paragraph},
};

use crate::{
    components::{SettingsView, centered_rect},
    render::Render,
    theme::{Theme, ThemeVariant},
};

impl Render for SettingsView {
    fn draw(&mut self, f: &mut Frame, area: Rect, theme: &Theme) {
        let popup = centered_rect(40, 30, area);
        f.render_widget(Clear, popup);

        let block = Block::default()
            .borders(Borders::ALL)
            .title(Span::styled(" Settings ", Style::default().add_modifier(Modifier::BOLD)))
            .border_style(Style::default().fg(theme.accent_colour))
            .padding(Padding::uniform(1))
            .style(Style::default().bg(theme.background()).fg(theme.foreground()));

        let options: Vec<Span> = [ThemeVariant::Day, ThemeVariant::Night]
            .into_iter()
            .map(|variant| {
                let label = format!(" {variant} ");
                if variant == self.selected {
                    Span::styled(
                        label,
                        Style::default()
                            .fg(theme.background())
                            .bg(theme.accent_colour)
                            .add_modifier(Modifier::BOLD),
                    )
                } else {
                    Span::raw(label)
                }
            })
            .collect();

        let mut theme_line = vec![Span::raw("Theme  ")];
        theme_line.extend(options);

        let lines = vec![
            Line::from(theme_line),
            Line::from(""),
            Line::from("Enter save · Esc cancel · ←/→ change")
                .style(Style::default().fg(theme.muted_colour)),
        ];

        f.render_widget(Paragraph::new(lines).block(block), popup);
    }
}
