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

//! # Book Catalog TUI.
//!
//! A terminal browser for a catalog of books.
//!
//! This application coordinates a TUI frontend built with `ratatui` and an
//! in-memory catalog loaded once at startup.
//!
//! It uses an event-driven architecture where:
//!
//! * The **Main Thread** manages the terminal lifecycle, applies every
//!   application event to completion and re-renders the UI.
//! * An **Input Thread** forwards keyboard, mouse and resize events from the
//!   terminal.
//! * **Components** translate raw input into higher level application events
//!   sent back through the same channel.
//!
//! ## Architecture
//!
//! The application follows a strict setup-run-teardown pattern to ensure the
//! terminal state is preserved even in the event of an error. Communication
//! between the input thread and the UI is handled via `std::sync::mpsc`
//! channels.

mod browser;
mod components;
mod config;
mod events;
mod logging;
mod model;
mod render;
mod theme;
mod util;

#[cfg(test)]
mod testing;

use anyhow::{Context, Result};
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::{
    io::{self},
    sync::mpsc::{self, Receiver, Sender},
    thread,
};
use tracing::{error, info};

use crate::{
    browser::Browser,
    components::{DetailView, PreviewGrid, SearchView, SettingsView},
    config::AppConfig,
    events::{AppEvent, process_events},
    model::{FilterCriteria, catalog::Catalog, overlay::Overlays},
    render::draw,
    theme::Theme,
};

/// Application state.
struct App {
    pub theme: Theme,

    pub event_tx: Sender<AppEvent>,
    pub event_rx: Receiver<AppEvent>,

    pub browser: Browser,
    pub overlays: Overlays,

    pub preview_grid: PreviewGrid,
    pub search_view: SearchView,
    pub settings_view: SettingsView,
    pub detail_view: DetailView,

    pub status: Option<String>,
}

impl App {
    /// Create a new instance of application state.
    pub fn new(config: &AppConfig, catalog: Catalog) -> Self {
        let (event_tx, event_rx) = mpsc::channel();

        let theme = Theme::for_variant(config.theme);
        let search_view = SearchView::new(&catalog);

        Self {
            theme,
            event_tx,
            event_rx,
            browser: Browser::new(catalog, config.page_size()),
            overlays: Overlays::default(),
            preview_grid: PreviewGrid::new(),
            search_view,
            settings_view: SettingsView::new(theme.variant),
            detail_view: DetailView::new(),
            status: None,
        }
    }
}

/// The entry point of the application.
///
/// Loads the configuration and the catalog, initialises the application
/// state, manages the terminal lifecycle, and returns an error if any part
/// of the execution fails.
fn main() -> Result<()> {
    let config = config::load_config();
    logging::init_logging(&config);

    let catalog = Catalog::load(config.dataset.as_deref()).context("Failed to load catalog")?;
    info!(
        books = catalog.books().len(),
        authors = catalog.author_count(),
        genres = catalog.genre_count(),
        page_size = config.page_size(),
        "catalog loaded"
    );

    let mut app = App::new(&config, catalog);

    let mut terminal = setup_terminal(&app)?;
    let res = run(&mut terminal, &mut app);
    restore_terminal(&mut terminal);

    if let Err(e) = &res {
        error!(error = %e, "application error");
    }
    res.context("Application error occurred")
}

/// Prepares the terminal for the TUI application.
///
/// This function performs the following side effects:
/// * Sets the terminal background color based on the provided theme.
/// * Enables raw mode to capture all keyboard input.
/// * Switches the terminal to the alternate screen buffer.
/// * Enables mouse capture so previews can be clicked.
///
/// # Errors
///
/// Returns an error if raw mode cannot be enabled or if the alternate screen
/// cannot be entered.
fn setup_terminal(app: &App) -> Result<Terminal<CrosstermBackend<io::Stdout>>> {
    // Set the background of the entire terminal window, without this we'd get
    // a thin black outline
    util::term::apply_theme_background(&app.theme).context("Failed to set terminal background")?;

    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)
        .context("Failed to enter alternate screen")?;

    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend).context("Failed to create terminal")?;

    Ok(terminal)
}

/// Restores the terminal to its original state.
///
/// This reverses the changes made by [`setup_terminal`], including disabling
/// raw mode and mouse capture, leaving the alternate screen, and resetting
/// the background color. It also ensures the cursor is made visible again.
///
/// This function is "best-effort" and does not return a result, as it is
/// called during cleanup.
fn restore_terminal(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) {
    disable_raw_mode().ok();
    execute!(terminal.backend_mut(), DisableMouseCapture, LeaveAlternateScreen).ok();
    util::term::reset_terminal_bg();
    terminal.show_cursor().ok();
}

/// Starts the input thread and enters the main event loop.
///
/// The first page is produced by submitting the empty criteria before the
/// loop starts, so the grid is populated with the whole catalog.
///
/// # Errors
///
/// Returns an error if the event processing loop encounters an unrecoverable
/// application error.
fn run(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, app: &mut App) -> Result<()> {
    // Spawn a thread to translate raw terminal events to application events.
    let tx_input = app.event_tx.clone();
    thread::spawn(move || {
        loop {
            let event = match event::read() {
                Ok(event::Event::Key(key)) if key.kind == KeyEventKind::Press => AppEvent::Key(key),
                Ok(event::Event::Mouse(mouse)) => AppEvent::Mouse(mouse),
                Ok(event::Event::Resize(_, _)) => AppEvent::Resize,
                Ok(_) => continue,
                Err(e) => {
                    tx_input
                        .send(AppEvent::InputFailed(e.to_string()))
                        .ok();
                    break;
                }
            };

            if tx_input.send(event).is_err() {
                break;
            }
        }
    });

    // Initial search with no filters, showing the first page of the catalog
    app.event_tx
        .send(AppEvent::SubmitSearch(FilterCriteria::default()))
        .context("Failed to queue initial search")?;

    terminal.draw(|f| draw(f, app))?;

    // Application event loop, process events until the user quits
    process_events(terminal, app)
}
