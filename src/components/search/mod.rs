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

//! Search overlay state.
//!
//! This module holds the search form: a free-text title field and the author
//! and genre selectors. Selector options are taken from the catalog once, at
//! construction, with the "any" sentinel first. The form keeps its values
//! between openings, so reopening it shows the last submitted search.

mod event;
mod render;

use tui_input::Input;

use crate::model::{AuthorId, FilterCriteria, GenreId, Selector, catalog::Catalog};

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub(crate) enum SearchField {
    #[default]
    Title,
    Author,
    Genre,
}

impl SearchField {
    fn next(self) -> Self {
        match self {
            SearchField::Title => SearchField::Author,
            SearchField::Author => SearchField::Genre,
            SearchField::Genre => SearchField::Title,
        }
    }

    fn previous(self) -> Self {
        match self {
            SearchField::Title => SearchField::Genre,
            SearchField::Author => SearchField::Title,
            SearchField::Genre => SearchField::Author,
        }
    }
}

pub(crate) struct SearchView {
    title: Input,
    authors: Vec<(Selector<AuthorId>, String)>,
    genres: Vec<(Selector<GenreId>, String)>,
    author_index: usize,
    genre_index: usize,
    focus: SearchField,
}

impl SearchView {
    pub(crate) fn new(catalog: &Catalog) -> Self {
        Self {
            title: Input::default(),
            authors: catalog.author_options(),
            genres: catalog.genre_options(),
            author_index: 0,
            genre_index: 0,
            focus: SearchField::Title,
        }
    }

    pub(crate) fn focus_title(&mut self) {
        self.focus = SearchField::Title;
    }

    #[cfg(test)]
    pub(crate) fn focus(&self) -> SearchField {
        self.focus
    }

    /// The criteria currently entered in the form.
    pub(crate) fn criteria(&self) -> FilterCriteria {
        FilterCriteria {
            title: self.title.value().to_string(),
            author: self
                .authors
                .get(self.author_index)
                .map(|(selector, _)| selector.clone())
                .unwrap_or_default(),
            genre: self
                .genres
                .get(self.genre_index)
                .map(|(selector, _)| selector.clone())
                .unwrap_or_default(),
        }
    }

    pub(crate) fn author_label(&self) -> &str {
        self.authors
            .get(self.author_index)
            .map(|(_, name)| name.as_str())
            .unwrap_or_default()
    }

    pub(crate) fn genre_label(&self) -> &str {
        self.genres
            .get(self.genre_index)
            .map(|(_, name)| name.as_str())
            .unwrap_or_default()
    }

    fn cycle_selector(&mut self, forward: bool) {
        let (index, len) = match self.focus {
            SearchField::Author => (&mut self.author_index, self.authors.len()),
            SearchField::Genre => (&mut self.genre_index, self.genres.len()),
            SearchField::Title => return,
        };
        if len == 0 {
            return;
        }
        *index = if forward {
            (*index + 1) % len
        } else {
            (*index + len - 1) % len
        };
    }
}
