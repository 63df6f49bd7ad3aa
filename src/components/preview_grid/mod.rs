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

//! Paginated grid of book previews.
//!
//! The grid lays the revealed page out in fixed-size cells, as many columns
//! as fit the width, and scrolls vertically to keep the selection in view.
//! It remembers the cell rectangles from the last draw so that mouse input
//! is resolved with a single hit-test over the whole grid: a click anywhere
//! inside a cell, on its title, author or border alike, activates that
//! preview once.

mod event;
mod render;

use ratatui::layout::{Position, Rect};

pub(crate) const CELL_WIDTH: u16 = 30;
pub(crate) const CELL_HEIGHT: u16 = 5;

pub(crate) const NO_RESULTS_MESSAGE: &str = "No results found. Your filters might be too narrow.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum GridTarget {
    Preview(usize),
    ShowMore,
}

pub(crate) struct PreviewGrid {
    len: usize,
    selected: usize,
    offset_row: usize,
    columns: usize,
    visible_rows: usize,
    cells: Vec<(usize, Rect)>,
    show_more_area: Option<Rect>,
}

impl PreviewGrid {
    pub(crate) fn new() -> Self {
        Self {
            len: 0,
            selected: 0,
            offset_row: 0,
            columns: 1,
            visible_rows: 1,
            cells: vec![],
            show_more_area: None,
        }
    }

    /// Updates the number of previews on the page, keeping the selection in
    /// range.
    pub(crate) fn set_len(&mut self, len: usize) {
        self.len = len;
        self.selected = self.selected.min(len.saturating_sub(1));
    }

    pub(crate) fn scroll_to_top(&mut self) {
        self.selected = 0;
        self.offset_row = 0;
    }

    #[cfg(test)]
    pub(crate) fn selected(&self) -> usize {
        self.selected
    }

    pub(crate) fn select(&mut self, index: usize) {
        if self.len > 0 {
            self.selected = index.min(self.len - 1);
        }
    }

    /// Records where the enabled show-more control was drawn, or `None` when
    /// it is disabled.
    pub(crate) fn set_show_more_area(&mut self, area: Option<Rect>) {
        self.show_more_area = area;
    }

    /// Resolves a terminal position to the preview cell or control under it.
    pub(crate) fn hit_test(&self, column: u16, row: u16) -> Option<GridTarget> {
        let position = Position::new(column, row);

        if let Some(area) = self.show_more_area {
            if area.contains(position) {
                return Some(GridTarget::ShowMore);
            }
        }

        self.cells
            .iter()
            .find(|(_, rect)| rect.contains(position))
            .map(|(index, _)| GridTarget::Preview(*index))
    }

    fn goto_next(&mut self) {
        self.select(self.selected + 1);
    }

    fn goto_previous(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    fn goto_down(&mut self) {
        if self.selected + self.columns < self.len {
            self.selected += self.columns;
        }
    }

    fn goto_up(&mut self) {
        if self.selected >= self.columns {
            self.selected -= self.columns;
        }
    }

    fn goto_first(&mut self) {
        self.selected = 0;
    }

    fn goto_last(&mut self) {
        self.selected = self.len.saturating_sub(1);
    }

    fn goto_page_forward(&mut self) {
        self.select(self.selected + self.columns * self.visible_rows);
    }

    fn goto_page_back(&mut self) {
        self.selected = self
            .selected
            .saturating_sub(self.columns * self.visible_rows);
    }

    /// Fits the grid to `area` and scrolls so the selected row is visible.
    fn fit(&mut self, area: Rect) {
        self.columns = usize::from((area.width / CELL_WIDTH).max(1));
        self.visible_rows = usize::from((area.height / CELL_HEIGHT).max(1));

        let selected_row = self.selected / self.columns;
        if selected_row < self.offset_row {
            self.offset_row = selected_row;
        } else if selected_row >= self.offset_row + self.visible_rows {
            self.offset_row = selected_row + 1 - self.visible_rows;
        }
    }
}
