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

//! Event routing for the search overlay.
//!
//! Enter submits the form and Escape cancels it. Tab moves between fields;
//! the title field takes text input and the selectors step through their
//! options with the arrow keys.

use std::sync::mpsc::Sender;

use anyhow::Result;
use crossterm::event::{Event, KeyCode};
use tui_input::backend::crossterm::EventHandler;

use crate::{
    components::{SearchView, search::SearchField},
    events::{AppEvent, AppEventProcessor},
};

impl AppEventProcessor for SearchView {
    fn process_event(&mut self, event: Event, event_tx: &Sender<AppEvent>) -> Result<()> {
        let Event::Key(key_event) = event else {
            return Ok(());
        };

        match key_event.code {
            KeyCode::Esc => event_tx.send(AppEvent::CancelSearch)?,
            KeyCode::Enter => event_tx.send(AppEvent::SubmitSearch(self.criteria()))?,
            KeyCode::Tab => self.focus = self.focus.next(),
            KeyCode::BackTab => self.focus = self.focus.previous(),

            code => match self.focus {
                SearchField::Title => {
                    self.title.handle_event(&event);
                }
                SearchField::Author | SearchField::Genre => match code {
                    KeyCode::Left | KeyCode::Up => self.cycle_selector(false),
                    KeyCode::Right | KeyCode::Down | KeyCode::Char(' ') => self.cycle_selector(true),
                    _ => {}
                },
            },
        }

        Ok(())
    }
}
