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

//! Book browser state management.
//!
//! This module ties the catalog to the search session and keeps the current
//! page of display records in step with both. Every operation that changes
//! the session rebuilds the page, so the remaining count is never stale.

use crate::model::{
    FilterCriteria,
    catalog::Catalog,
    preview::{Preview, PreviewPage},
    session::{SearchKind, Session},
};

pub(crate) struct Browser {
    catalog: Catalog,
    session: Session,
    page: PreviewPage,
}

impl Browser {
    pub(crate) fn new(catalog: Catalog, page_size: usize) -> Self {
        Self {
            catalog,
            session: Session::new(page_size),
            page: PreviewPage::empty(),
        }
    }

    pub(crate) fn session(&self) -> &Session {
        &self.session
    }

    pub(crate) fn page(&self) -> &PreviewPage {
        &self.page
    }

    pub(crate) fn preview(&self, index: usize) -> Option<&Preview> {
        self.page.items.get(index)
    }

    pub(crate) fn submit(&mut self, criteria: FilterCriteria) -> SearchKind {
        let kind = self.session.submit(self.catalog.books(), criteria);
        self.rebuild_page();
        kind
    }

    pub(crate) fn show_more(&mut self) -> bool {
        let revealed = self.session.show_more();
        if revealed {
            self.rebuild_page();
        }
        revealed
    }

    fn rebuild_page(&mut self) {
        self.page = PreviewPage::build(&self.session, &self.catalog);
    }
}
