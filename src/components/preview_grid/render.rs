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

//! UI rendering logic for the preview grid.

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Padding, Paragraph, Wrap},
};

use crate::{
    components::preview_grid::{CELL_HEIGHT, NO_RESULTS_MESSAGE, PreviewGrid},
    model::preview::{Preview, PreviewPage},
    theme::Theme,
    util::format::truncate,
};

impl PreviewGrid {
    pub(crate) fn draw(&mut self, f: &mut Frame, area: Rect, page: &PreviewPage, theme: &Theme) {
        self.cells.clear();

        if page.is_empty() {
            let message = Paragraph::new(NO_RESULTS_MESSAGE)
                .style(Style::default().fg(theme.muted_colour))
                .alignment(Alignment::Center)
                .wrap(Wrap { trim: true })
                .block(Block::default().padding(Padding::top(area.height / 2)));
            f.render_widget(message, area);
            return;
        }

        self.fit(area);

        let columns = self.columns;
        let cell_width = area.width / columns as u16;
        let first = self.offset_row * columns;
        let last = ((self.offset_row + self.visible_rows) * columns).min(page.items.len());

        for index in first..last {
            let row = (index / columns - self.offset_row) as u16;
            let column = (index % columns) as u16;

            let rect = Rect::new(
                area.x + column * cell_width,
                area.y + row * CELL_HEIGHT,
                cell_width,
                CELL_HEIGHT,
            )
            .intersection(area);

            draw_cell(f, rect, &page.items[index], index == self.selected, theme);
            self.cells.push((index, rect));
        }
    }
}

fn draw_cell(f: &mut Frame, area: Rect, preview: &Preview, selected: bool, theme: &Theme) {
    let border_colour = if selected {
        theme.accent_colour
    } else {
        theme.border_colour
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_colour))
        .padding(Padding::horizontal(1));

    let width = usize::from(block.inner(area).width);

    let lines = vec![
        Line::from(truncate(&preview.title, width)).style(
            Style::default()
                .fg(theme.foreground())
                .add_modifier(Modifier::BOLD),
        ),
        Line::from(truncate(&preview.author, width)).style(Style::default().fg(theme.author_fg)),
        Line::from(preview.year.to_string()).style(Style::default().fg(theme.muted_colour)),
    ];

    let cell = Paragraph::new(lines)
        .block(block)
        .style(Style::default().bg(theme.background()));

    f.render_widget(cell, area);
}
