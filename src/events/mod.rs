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

//! Application event distribution and orchestration.
//!
//! This module defines the central event-handling logic for the application,
//! bridging the gap between user input (keyboard and mouse) and the UI
//! rendering pipeline.
//!
//! # Architecture
//!
//! The system follows a reactive event-loop pattern:
//!
//! 1. **Capture**: Events are received via the [`AppEvent`] enum through a
//!    channel fed by the input thread and by the components themselves.
//! 2. **Process**: The [`process_events`] function updates the [`App`]
//!    state, one event at a time and each to completion.
//! 3. **Render**: After each event is processed, the UI is re-drawn using the
//!    `ratatui` terminal.

mod handlers;
mod key_handlers;

use handlers::*;
use key_handlers::{process_key_event, process_mouse_event};

use std::{io::Stdout, sync::mpsc::Sender};

use anyhow::{Result, bail};
use crossterm::event::{Event, KeyEvent, MouseEvent};
use ratatui::{Terminal, prelude::CrosstermBackend};

use crate::{App, model::FilterCriteria, render::draw, theme::ThemeVariant};

#[derive(Debug)]
pub(crate) enum AppEvent {
    Key(KeyEvent),
    Mouse(MouseEvent),
    Resize,

    ToggleSearchOverlay,
    SubmitSearch(FilterCriteria),
    CancelSearch,

    ShowMore,

    ActivatePreview(usize),
    CloseDetail,

    ToggleSettingsOverlay,
    SaveSettings(ThemeVariant),
    CancelSettings,

    ExitApplication,

    Error(String),
    InputFailed(String),
}

pub(crate) trait AppEventProcessor {
    fn process_event(&mut self, event: Event, event_tx: &Sender<AppEvent>) -> Result<()>;
}

/// Runs the main application loop, handling events and rendering the UI in the
/// terminal.
///
/// This function loops until an exit event is received or the event channel
/// is closed. Losing terminal input is fatal and ends the loop with an error,
/// since nothing could ever ask the application to quit.
pub(crate) fn process_events(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    app: &mut App,
) -> Result<()> {
    run_event_loop(app, |app| {
        terminal.draw(|f| draw(f, app))?;
        Ok(())
    })
}

fn run_event_loop<F>(app: &mut App, mut redraw: F) -> Result<()>
where
    F: FnMut(&mut App) -> Result<()>,
{
    while let Ok(event) = app.event_rx.recv() {
        match event {
            AppEvent::ExitApplication => break,
            AppEvent::InputFailed(message) => bail!("Terminal input failed: {message}"),
            event => handle_event(app, event)?,
        }

        redraw(app)?;
    }
    Ok(())
}

/// Applies a single event to the application state.
pub(crate) fn handle_event(app: &mut App, event: AppEvent) -> Result<()> {
    match event {
        AppEvent::Key(key) => process_key_event(app, key)?,
        AppEvent::Mouse(mouse) => process_mouse_event(app, mouse)?,
        AppEvent::Resize => {}
        AppEvent::ToggleSearchOverlay => handle_toggle_search_overlay(app),
        AppEvent::SubmitSearch(criteria) => handle_submit_search(app, criteria),
        AppEvent::CancelSearch => handle_cancel_search(app),
        AppEvent::ShowMore => handle_show_more(app),
        AppEvent::ActivatePreview(index) => handle_activate_preview(app, index),
        AppEvent::CloseDetail => handle_close_detail(app),
        AppEvent::ToggleSettingsOverlay => handle_toggle_settings_overlay(app),
        AppEvent::SaveSettings(variant) => handle_save_settings(app, variant),
        AppEvent::CancelSettings => handle_cancel_settings(app),
        AppEvent::Error(message) => handle_error(app, message),
        AppEvent::ExitApplication | AppEvent::InputFailed(_) => {}
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::thread;

    use super::*;
    use crate::{model::catalog::fixtures::sample_catalog, testing::app_with};

    #[test]
    fn lost_input_ends_loop_with_error() {
        let mut app = app_with(sample_catalog(), 36);
        let input_tx = app.event_tx.clone();
        thread::spawn(move || {
            input_tx.send(AppEvent::InputFailed("eof".into())).ok();
        })
        .join()
        .unwrap();

        let result = run_event_loop(&mut app, |_| Ok(()));
        let error = result.unwrap_err();
        assert!(error.to_string().contains("eof"));
    }

    #[test]
    fn status_errors_keep_loop_running() {
        let mut app = app_with(sample_catalog(), 36);
        app.event_tx.send(AppEvent::Error("disk full".into())).unwrap();
        app.event_tx.send(AppEvent::ExitApplication).unwrap();

        let mut redraws = 0;
        run_event_loop(&mut app, |_| {
            redraws += 1;
            Ok(())
        })
        .unwrap();

        assert_eq!(redraws, 1);
        assert_eq!(app.status.as_deref(), Some("disk full"));
    }
}
