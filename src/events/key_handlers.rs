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

use anyhow::Result;
use crossterm::event::{Event, KeyCode, KeyEvent, KeyModifiers, MouseEvent};

use crate::{App, events::{AppEvent, AppEventProcessor}, model::overlay::OverlayKind};

/// Maps keyboard input to application actions.
///
/// This function acts as the primary input router for the TUI. The focused
/// overlay, if any, receives the key exclusively. Otherwise the key is
/// either a global control or grid navigation:
///
/// * **Application Control**: Exiting the program.
/// * **Overlays**: Opening the search and settings overlays.
/// * **Pagination**: Revealing another page of results.
/// * **Navigation**: Moving through and activating previews in the grid.
///
/// # Errors
///
/// Returns an error if an event cannot be sent to the application channel.
pub(super) fn process_key_event(app: &mut App, key: KeyEvent) -> Result<()> {
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        app.event_tx.send(AppEvent::ExitApplication)?;
        return Ok(());
    }

    let event = Event::Key(key);
    match app.overlays.focused() {
        Some(OverlayKind::Detail) => app.detail_view.process_event(event, &app.event_tx),
        Some(OverlayKind::Settings) => app.settings_view.process_event(event, &app.event_tx),
        Some(OverlayKind::Search) => app.search_view.process_event(event, &app.event_tx),
        None => process_global_key_event(app, key),
    }
}

fn process_global_key_event(app: &mut App, key: KeyEvent) -> Result<()> {
    match (key.code, key.modifiers) {
        (KeyCode::Char('q'), _) => app.event_tx.send(AppEvent::ExitApplication)?,

        (KeyCode::Char('/'), _) => app.event_tx.send(AppEvent::ToggleSearchOverlay)?,
        (KeyCode::Char('s'), _) => app.event_tx.send(AppEvent::ToggleSettingsOverlay)?,

        (KeyCode::Char('m'), _) => {
            if app.browser.page().show_more.is_enabled() {
                app.event_tx.send(AppEvent::ShowMore)?;
            }
        }

        _ => app.preview_grid.process_event(Event::Key(key), &app.event_tx)?,
    }

    Ok(())
}

/// Routes mouse input to the preview grid while no overlay is open.
pub(super) fn process_mouse_event(app: &mut App, mouse: MouseEvent) -> Result<()> {
    if app.overlays.any_open() {
        return Ok(());
    }

    app.preview_grid.process_event(Event::Mouse(mouse), &app.event_tx)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyEventKind, KeyEventState, MouseButton, MouseEventKind};

    use crate::{
        events::handle_event,
        model::{FilterCriteria, catalog::fixtures::{numbered_catalog, sample_catalog}},
        testing::{app_with, drain},
    };

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent {
            code,
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Press,
            state: KeyEventState::NONE,
        }
    }

    fn click(column: u16, row: u16) -> MouseEvent {
        MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column,
            row,
            modifiers: KeyModifiers::NONE,
        }
    }

    #[test]
    fn slash_requests_search_overlay() {
        let mut app = app_with(sample_catalog(), 36);
        process_key_event(&mut app, key(KeyCode::Char('/'))).unwrap();
        assert!(matches!(drain(&app).as_slice(), [AppEvent::ToggleSearchOverlay]));
    }

    #[test]
    fn show_more_key_ignored_when_disabled() {
        let mut app = app_with(sample_catalog(), 36);
        handle_event(&mut app, AppEvent::SubmitSearch(FilterCriteria::default())).unwrap();

        process_key_event(&mut app, key(KeyCode::Char('m'))).unwrap();
        assert!(drain(&app).is_empty());
    }

    #[test]
    fn show_more_key_sent_when_enabled() {
        let mut app = app_with(numbered_catalog(50), 36);
        handle_event(&mut app, AppEvent::SubmitSearch(FilterCriteria::default())).unwrap();

        process_key_event(&mut app, key(KeyCode::Char('m'))).unwrap();
        assert!(matches!(drain(&app).as_slice(), [AppEvent::ShowMore]));
    }

    #[test]
    fn open_overlay_captures_keys() {
        let mut app = app_with(sample_catalog(), 36);
        handle_event(&mut app, AppEvent::ToggleSearchOverlay).unwrap();

        process_key_event(&mut app, key(KeyCode::Char('q'))).unwrap();
        assert!(drain(&app).is_empty());
        assert_eq!(app.search_view.criteria().title, "q");
    }

    #[test]
    fn enter_on_grid_activates_selected_preview() {
        let mut app = app_with(sample_catalog(), 36);
        handle_event(&mut app, AppEvent::SubmitSearch(FilterCriteria::default())).unwrap();

        process_key_event(&mut app, key(KeyCode::Right)).unwrap();
        process_key_event(&mut app, key(KeyCode::Enter)).unwrap();
        let events = drain(&app);
        assert!(matches!(events.as_slice(), [AppEvent::ActivatePreview(1)]));

        for event in events {
            handle_event(&mut app, event).unwrap();
        }
        assert_eq!(app.detail_view.preview().map(|p| p.id.as_str()), Some("b2"));
    }

    #[test]
    fn mouse_ignored_while_overlay_open() {
        let mut app = app_with(sample_catalog(), 36);
        app.overlays.settings.open();

        process_mouse_event(&mut app, click(1, 1)).unwrap();
        assert!(drain(&app).is_empty());
    }

    #[test]
    fn ctrl_c_exits_from_any_overlay() {
        let mut app = app_with(sample_catalog(), 36);
        app.overlays.detail.open();

        let mut ctrl_c = key(KeyCode::Char('c'));
        ctrl_c.modifiers = KeyModifiers::CONTROL;
        process_key_event(&mut app, ctrl_c).unwrap();
        assert!(matches!(drain(&app).as_slice(), [AppEvent::ExitApplication]));
    }
}
