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

//! Preview display records.
//!
//! This module turns the revealed window of a [`Session`] into display
//! records with author and genre ids resolved to names. The records carry
//! everything the detail view needs, so the terminal widgets never reach
//! back into the catalog.

use chrono::Datelike;

use crate::model::{Book, catalog::Catalog, session::Session};

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Preview {
    pub(crate) id: String,
    pub(crate) title: String,
    pub(crate) author: String,
    pub(crate) genres: Vec<String>,
    pub(crate) description: String,
    pub(crate) image: String,
    pub(crate) year: i32,
}

impl Preview {
    pub(crate) fn from_book(book: &Book, catalog: &Catalog) -> Self {
        Self {
            id: book.id.clone(),
            title: book.title.clone(),
            author: catalog.author_name(&book.author).to_string(),
            genres: book
                .genres
                .iter()
                .map(|g| catalog.genre_name(g))
                .filter(|name| !name.is_empty())
                .map(str::to_string)
                .collect(),
            description: book.description.clone(),
            image: book.image.clone(),
            year: book.published.year(),
        }
    }

    /// Heading used by the detail view, e.g. `"Winter Crown (1999)"`.
    pub(crate) fn heading(&self) -> String {
        format!("{} ({})", self.title, self.year)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ShowMore {
    Enabled(usize),
    Disabled,
}

impl ShowMore {
    pub(crate) fn from_remaining(remaining: usize) -> Self {
        if remaining > 0 {
            ShowMore::Enabled(remaining)
        } else {
            ShowMore::Disabled
        }
    }

    pub(crate) fn is_enabled(&self) -> bool {
        matches!(self, ShowMore::Enabled(_))
    }

    pub(crate) fn label(&self) -> String {
        match self {
            ShowMore::Enabled(remaining) => format!("Show more ({remaining})"),
            ShowMore::Disabled => "Show more".to_string(),
        }
    }
}

/// One render of the result grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct PreviewPage {
    pub(crate) items: Vec<Preview>,
    pub(crate) total: usize,
    pub(crate) show_more: ShowMore,
}

impl PreviewPage {
    pub(crate) fn empty() -> Self {
        Self {
            items: vec![],
            total: 0,
            show_more: ShowMore::Disabled,
        }
    }

    pub(crate) fn build(session: &Session, catalog: &Catalog) -> Self {
        Self {
            items: session
                .visible()
                .iter()
                .map(|book| Preview::from_book(book, catalog))
                .collect(),
            total: session.matches().len(),
            show_more: ShowMore::from_remaining(session.remaining()),
        }
    }

    /// True when the "no results" indicator should be shown.
    pub(crate) fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{
        AuthorId, FilterCriteria,
        catalog::fixtures::{book, numbered_catalog, sample_catalog},
    };

    #[test]
    fn preview_denormalizes_author_and_year() {
        let catalog = sample_catalog();
        let preview = Preview::from_book(&catalog.books()[0], &catalog);

        assert_eq!(preview.id, "b1");
        assert_eq!(preview.title, "The Silent Harbour");
        assert_eq!(preview.author, "Ada Whitlock");
        assert_eq!(preview.genres, vec!["Mystery".to_string()]);
        assert_eq!(preview.description, "About The Silent Harbour.");
        assert_eq!(preview.image, "https://covers.test/b1.jpg");
        assert_eq!(preview.year, 2018);
        assert_eq!(preview.heading(), "The Silent Harbour (2018)");
    }

    #[test]
    fn year_is_taken_in_utc() {
        let catalog = sample_catalog();
        let mut late = book("nye", "New Year", "a1", &["g1"], 2000);
        late.published = chrono::DateTime::parse_from_rfc3339("2000-12-31T23:30:00-05:00")
            .unwrap()
            .with_timezone(&chrono::Utc);

        assert_eq!(Preview::from_book(&late, &catalog).year, 2001);
    }

    #[test]
    fn unknown_author_renders_empty() {
        let catalog = sample_catalog();
        let mut orphan = book("x", "Orphan", "a1", &["g9"], 1990);
        orphan.author = AuthorId("missing".into());

        let preview = Preview::from_book(&orphan, &catalog);
        assert_eq!(preview.author, "");
        assert!(preview.genres.is_empty());
    }

    #[test]
    fn show_more_enabled_only_with_remaining() {
        assert_eq!(ShowMore::from_remaining(14), ShowMore::Enabled(14));
        assert_eq!(ShowMore::from_remaining(0), ShowMore::Disabled);
        assert_eq!(ShowMore::Enabled(14).label(), "Show more (14)");
        assert!(!ShowMore::Disabled.is_enabled());
    }

    #[test]
    fn page_follows_session_window() {
        let catalog = numbered_catalog(50);
        let mut session = Session::new(36);
        session.submit(catalog.books(), FilterCriteria::default());

        let page = PreviewPage::build(&session, &catalog);
        assert_eq!(page.items.len(), 36);
        assert_eq!(page.items[0].id, "n0");
        assert_eq!(page.total, 50);
        assert_eq!(page.show_more, ShowMore::Enabled(14));

        session.show_more();
        let page = PreviewPage::build(&session, &catalog);
        assert_eq!(page.items.len(), 50);
        assert_eq!(page.items[49].id, "n49");
        assert_eq!(page.show_more, ShowMore::Disabled);
    }

    #[test]
    fn no_match_page_is_empty_and_disabled() {
        let catalog = sample_catalog();
        let mut session = Session::new(36);
        session.submit(catalog.books(), FilterCriteria::for_title("moon"));

        let page = PreviewPage::build(&session, &catalog);
        assert!(page.is_empty());
        assert_eq!(page.show_more, ShowMore::Disabled);
    }
}
