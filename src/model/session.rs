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

//! Search session and pagination state.
//!
//! This module provides state for the current search: the criteria that
//! produced the current result set, the result set itself, and how many pages
//! of it have been revealed.

use std::sync::Arc;

use crate::model::{Book, FilterCriteria, filter::filter};

pub(crate) const DEFAULT_PAGE_SIZE: usize = 36;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum SearchKind {
    /// The criteria differ from the remembered ones, pagination starts over.
    NewSearch,
    /// The criteria are unchanged, revealed pages are kept.
    Continuation,
}

pub(crate) struct Session {
    page_size: usize,
    page_count: usize,
    remembered: Option<FilterCriteria>,
    matches: Vec<Arc<Book>>,
}

impl Session {
    pub(crate) fn new(page_size: usize) -> Self {
        Self {
            page_size: page_size.max(1),
            page_count: 1,
            remembered: None,
            matches: vec![],
        }
    }

    /// Recomputes the result set for `criteria`.
    ///
    /// Nothing is remembered before the first submission, so it is always a
    /// new search.
    pub(crate) fn submit(&mut self, books: &[Arc<Book>], criteria: FilterCriteria) -> SearchKind {
        let kind = if self.remembered.as_ref() == Some(&criteria) {
            SearchKind::Continuation
        } else {
            self.page_count = 1;
            SearchKind::NewSearch
        };

        self.matches = filter(books, &criteria);
        self.remembered = Some(criteria);

        kind
    }

    /// Reveals one more page of the current result set.
    ///
    /// Returns false, leaving the page count alone, when nothing remains.
    pub(crate) fn show_more(&mut self) -> bool {
        if self.remaining() == 0 {
            return false;
        }
        self.page_count += 1;
        true
    }

    #[cfg(test)]
    pub(crate) fn page_size(&self) -> usize {
        self.page_size
    }

    pub(crate) fn page_count(&self) -> usize {
        self.page_count
    }

    #[cfg(test)]
    pub(crate) fn criteria(&self) -> Option<&FilterCriteria> {
        self.remembered.as_ref()
    }

    pub(crate) fn matches(&self) -> &[Arc<Book>] {
        &self.matches
    }

    /// The revealed window `[0, page_size * page_count)`, clipped to the
    /// result length.
    pub(crate) fn visible(&self) -> &[Arc<Book>] {
        let end = self.window().min(self.matches.len());
        &self.matches[..end]
    }

    pub(crate) fn remaining(&self) -> usize {
        self.matches.len().saturating_sub(self.window())
    }

    fn window(&self) -> usize {
        self.page_size.saturating_mul(self.page_count)
    }
}
