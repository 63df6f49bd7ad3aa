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

//! Book detail overlay.
//!
//! Shows one preview in full: heading with the publication year, author,
//! genres, cover reference and description.

mod render;

use std::sync::mpsc::Sender;

use anyhow::Result;
use crossterm::event::{Event, KeyCode};

use crate::{
    events::{AppEvent, AppEventProcessor},
    model::preview::Preview,
};

#[derive(Default)]
pub(crate) struct DetailView {
    preview: Option<Preview>,
    scroll: u16,
}

impl DetailView {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn show(&mut self, preview: Preview) {
        self.preview = Some(preview);
        self.scroll = 0;
    }

    pub(crate) fn preview(&self) -> Option<&Preview> {
        self.preview.as_ref()
    }
}

impl AppEventProcessor for DetailView {
    fn process_event(&mut self, event: Event, event_tx: &Sender<AppEvent>) -> Result<()> {
        if let Event::Key(key_event) = event {
            match key_event.code {
                KeyCode::Esc | KeyCode::Enter | KeyCode::Char('q') => {
                    event_tx.send(AppEvent::CloseDetail)?
                }
                KeyCode::Down | KeyCode::Char('j') => self.scroll = self.scroll.saturating_add(1),
                KeyCode::Up | KeyCode::Char('k') => self.scroll = self.scroll.saturating_sub(1),
                _ => {}
            }
        }

        Ok(())
    }
}
