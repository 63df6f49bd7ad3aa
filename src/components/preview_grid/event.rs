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

//! Input handling for the preview grid.
//!
//! Keys move the selection and Enter activates it. A left click is
//! hit-tested once against the whole grid and forwarded as a single
//! activation of the cell under the pointer.

use std::sync::mpsc::Sender;

use anyhow::Result;
use crossterm::event::{Event, KeyCode, MouseButton, MouseEventKind};

use crate::{
    components::{PreviewGrid, preview_grid::GridTarget},
    events::{AppEvent, AppEventProcessor},
};

impl AppEventProcessor for PreviewGrid {
    fn process_event(&mut self, event: Event, event_tx: &Sender<AppEvent>) -> Result<()> {
        match event {
            Event::Key(key_event) => match key_event.code {
                KeyCode::Char('l') | KeyCode::Right => self.goto_next(),
                KeyCode::Char('h') | KeyCode::Left => self.goto_previous(),
                KeyCode::Char('j') | KeyCode::Down => self.goto_down(),
                KeyCode::Char('k') | KeyCode::Up => self.goto_up(),
                KeyCode::Char('g') | KeyCode::Home => self.goto_first(),
                KeyCode::Char('G') | KeyCode::End => self.goto_last(),
                KeyCode::PageDown => self.goto_page_forward(),
                KeyCode::PageUp => self.goto_page_back(),

                KeyCode::Enter => {
                    if self.len > 0 {
                        event_tx.send(AppEvent::ActivatePreview(self.selected))?;
                    }
                }

                _ => {}
            },

            Event::Mouse(mouse_event) => match mouse_event.kind {
                MouseEventKind::Down(MouseButton::Left) => {
                    match self.hit_test(mouse_event.column, mouse_event.row) {
                        Some(GridTarget::Preview(index)) => {
                            self.select(index);
                            event_tx.send(AppEvent::ActivatePreview(index))?;
                        }
                        Some(GridTarget::ShowMore) => event_tx.send(AppEvent::ShowMore)?,
                        None => {}
                    }
                }
                MouseEventKind::ScrollDown => self.goto_down(),
                MouseEventKind::ScrollUp => self.goto_up(),
                _ => {}
            },

            _ => {}
        }

        Ok(())
    }
}
