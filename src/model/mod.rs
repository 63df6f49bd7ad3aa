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

//! Domain models and core data structures.
//!
//! This module defines the central entities of the application, books and
//! the author and genre references they carry, together with the filter
//! criteria used to narrow the catalog down to a result set.

pub(crate) mod catalog;
pub(crate) mod filter;
pub(crate) mod overlay;
pub(crate) mod preview;
pub(crate) mod session;

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub(crate) struct AuthorId(pub(crate) String);

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub(crate) struct GenreId(pub(crate) String);

impl fmt::Display for AuthorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl fmt::Display for GenreId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub(crate) struct Book {
    pub(crate) id: String,
    pub(crate) title: String,
    pub(crate) author: AuthorId,
    pub(crate) genres: Vec<GenreId>,
    pub(crate) description: String,
    pub(crate) image: String,
    pub(crate) published: DateTime<Utc>,
}

/// A selector value that either admits everything or exactly one id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Selector<T> {
    Any,
    Only(T),
}

impl<T> Default for Selector<T> {
    fn default() -> Self {
        Selector::Any
    }
}

impl<T: PartialEq> Selector<T> {
    pub(crate) fn is_any(&self) -> bool {
        matches!(self, Selector::Any)
    }

    pub(crate) fn admits(&self, value: &T) -> bool {
        match self {
            Selector::Any => true,
            Selector::Only(wanted) => wanted == value,
        }
    }

    pub(crate) fn admits_any(&self, values: &[T]) -> bool {
        match self {
            Selector::Any => true,
            Selector::Only(wanted) => values.iter().any(|v| v == wanted),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) struct FilterCriteria {
    pub(crate) title: String,
    pub(crate) author: Selector<AuthorId>,
    pub(crate) genre: Selector<GenreId>,
}

impl FilterCriteria {
    /// True when every field is at its match-all sentinel.
    ///
    /// The title is checked untrimmed, so a whitespace-only query is not a
    /// match-all criteria even though it admits every title.
    pub(crate) fn matches_all(&self) -> bool {
        self.title.is_empty() && self.author.is_any() && self.genre.is_any()
    }

    #[cfg(test)]
    pub(crate) fn for_title(title: &str) -> Self {
        Self {
            title: title.to_string(),
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_criteria_match_everything() {
        assert!(FilterCriteria::default().matches_all());
    }

    #[test]
    fn whitespace_title_is_not_match_all() {
        assert!(!FilterCriteria::for_title("  ").matches_all());
    }

    #[test]
    fn selector_admits_only_its_value() {
        let selector = Selector::Only(AuthorId("a1".into()));
        assert!(selector.admits(&AuthorId("a1".into())));
        assert!(!selector.admits(&AuthorId("a2".into())));
        assert!(Selector::<AuthorId>::Any.admits(&AuthorId("a2".into())));
    }

    #[test]
    fn selector_membership_check() {
        let genres = vec![GenreId("g1".into()), GenreId("g2".into())];
        assert!(Selector::Only(GenreId("g2".into())).admits_any(&genres));
        assert!(!Selector::Only(GenreId("g3".into())).admits_any(&genres));
        assert!(Selector::<GenreId>::Any.admits_any(&[]));
    }
}
