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

use tracing::{debug, error, info};

use crate::{
    App,
    events::AppEvent,
    model::{FilterCriteria, session::SearchKind},
    theme::{Theme, ThemeVariant},
    util,
};

pub(super) fn handle_toggle_search_overlay(app: &mut App) {
    if app.overlays.search.toggle() {
        app.search_view.focus_title();
    }
}

pub(super) fn handle_submit_search(app: &mut App, criteria: FilterCriteria) {
    let kind = app.browser.submit(criteria);
    let page = app.browser.page();

    if kind == SearchKind::NewSearch {
        app.preview_grid.scroll_to_top();
    }
    app.preview_grid.set_len(page.items.len());
    app.overlays.search.close();

    debug!(
        ?kind,
        matches = page.total,
        shown = page.items.len(),
        page_count = app.browser.session().page_count(),
        "search submitted"
    );
}

pub(super) fn handle_cancel_search(app: &mut App) {
    app.overlays.search.close();
}

pub(super) fn handle_show_more(app: &mut App) {
    if app.browser.show_more() {
        app.preview_grid.set_len(app.browser.page().items.len());
        debug!(
            page_count = app.browser.session().page_count(),
            remaining = app.browser.session().remaining(),
            "revealed another page"
        );
    }
    app.overlays.search.close();
}

pub(super) fn handle_activate_preview(app: &mut App, index: usize) {
    let Some(preview) = app.browser.preview(index).cloned() else {
        return;
    };

    debug!(id = %preview.id, "opening book detail");
    app.detail_view.show(preview);
    app.overlays.detail.open();
}

pub(super) fn handle_close_detail(app: &mut App) {
    app.overlays.detail.close();
}

pub(super) fn handle_toggle_settings_overlay(app: &mut App) {
    if app.overlays.settings.toggle() {
        app.settings_view.select(app.theme.variant);
    }
}

pub(super) fn handle_save_settings(app: &mut App, variant: ThemeVariant) {
    app.theme = Theme::for_variant(variant);
    if let Err(e) = util::term::apply_theme_background(&app.theme) {
        app.event_tx
            .send(AppEvent::Error(format!("Failed to set terminal background: {e}")))
            .ok();
    }
    info!(%variant, "theme applied");
    app.overlays.settings.close();
}

pub(super) fn handle_cancel_settings(app: &mut App) {
    app.overlays.settings.close();
}

pub(super) fn handle_error(app: &mut App, message: String) {
    error!(%message, "application error");
    app.status = Some(message);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        model::{
            catalog::fixtures::{numbered_catalog, sample_catalog},
            preview::ShowMore,
        },
        testing::app_with,
    };

    #[test]
    fn submit_closes_search_overlay() {
        let mut app = app_with(sample_catalog(), 36);
        handle_toggle_search_overlay(&mut app);
        assert!(app.overlays.search.is_open());

        handle_submit_search(&mut app, FilterCriteria::for_title("harbour"));
        assert!(!app.overlays.search.is_open());
        assert_eq!(app.browser.page().items.len(), 2);
    }

    #[test]
    fn new_search_scrolls_grid_to_top() {
        let mut app = app_with(numbered_catalog(50), 36);
        handle_submit_search(&mut app, FilterCriteria::default());
        app.preview_grid.select(30);

        handle_submit_search(&mut app, FilterCriteria::for_title("book 1"));
        assert_eq!(app.preview_grid.selected(), 0);
    }

    #[test]
    fn continuation_keeps_grid_position_and_pages() {
        let mut app = app_with(numbered_catalog(50), 36);
        handle_submit_search(&mut app, FilterCriteria::default());
        handle_show_more(&mut app);
        app.preview_grid.select(40);

        handle_submit_search(&mut app, FilterCriteria::default());
        assert_eq!(app.browser.session().page_count(), 2);
        assert_eq!(app.preview_grid.selected(), 40);
    }

    #[test]
    fn show_more_reveals_second_page() {
        let mut app = app_with(numbered_catalog(50), 36);
        handle_submit_search(&mut app, FilterCriteria::default());
        assert_eq!(app.browser.page().show_more, ShowMore::Enabled(14));

        handle_show_more(&mut app);
        assert_eq!(app.browser.page().items.len(), 50);
        assert_eq!(app.browser.page().show_more, ShowMore::Disabled);
    }

    #[test]
    fn activation_opens_detail_with_that_book() {
        let mut app = app_with(sample_catalog(), 36);
        handle_submit_search(&mut app, FilterCriteria::default());

        handle_activate_preview(&mut app, 0);
        assert!(app.overlays.detail.is_open());

        let shown = app.detail_view.preview().unwrap();
        assert_eq!(shown.id, "b1");
        assert_eq!(shown.title, "The Silent Harbour");
        assert_eq!(shown.author, "Ada Whitlock");
        assert_eq!(shown.description, "About The Silent Harbour.");
        assert_eq!(shown.image, "https://covers.test/b1.jpg");
        assert_eq!(shown.year, 2018);

        handle_close_detail(&mut app);
        assert!(!app.overlays.detail.is_open());
    }

    #[test]
    fn activation_outside_page_is_ignored() {
        let mut app = app_with(sample_catalog(), 36);
        handle_submit_search(&mut app, FilterCriteria::default());

        handle_activate_preview(&mut app, 99);
        assert!(!app.overlays.detail.is_open());
        assert!(app.detail_view.preview().is_none());
    }

    #[test]
    fn saving_settings_applies_theme_and_closes() {
        let mut app = app_with(sample_catalog(), 36);
        handle_toggle_settings_overlay(&mut app);
        assert!(app.overlays.settings.is_open());

        handle_save_settings(&mut app, ThemeVariant::Day);
        assert_eq!(app.theme, Theme::for_variant(ThemeVariant::Day));
        assert!(!app.overlays.settings.is_open());
    }

    #[test]
    fn cancelling_settings_keeps_theme() {
        let mut app = app_with(sample_catalog(), 36);
        let before = app.theme;
        handle_toggle_settings_overlay(&mut app);
        handle_cancel_settings(&mut app);

        assert_eq!(app.theme, before);
        assert!(!app.overlays.settings.is_open());
    }

    #[test]
    fn errors_are_surfaced_in_status() {
        let mut app = app_with(sample_catalog(), 36);
        handle_error(&mut app, "input closed".into());
        assert_eq!(app.status.as_deref(), Some("input closed"));
    }
}
