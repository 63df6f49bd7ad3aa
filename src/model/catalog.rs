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

//! Book catalog dataset.
//!
//! This module provides the static dataset the browser works over: the list
//! of books plus the author and genre name mappings. The catalog is loaded
//! once at startup, either from the dataset embedded in the binary or from a
//! JSON file named in the configuration, and is never mutated afterwards.

use std::{
    collections::BTreeMap,
    fs,
    path::{Path, PathBuf},
    sync::Arc,
};

use serde::Deserialize;
use thiserror::Error;

use crate::model::{AuthorId, Book, GenreId, Selector};

const EMBEDDED_DATASET: &str = include_str!("../../data/books.json");

pub(crate) const ANY_AUTHOR_LABEL: &str = "All Authors";
pub(crate) const ANY_GENRE_LABEL: &str = "All Genres";

#[derive(Debug, Error)]
pub(crate) enum CatalogError {
    #[error("failed to read dataset {path}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed dataset: {0}")]
    Parse(#[from] serde_json::Error),
}

#[derive(Deserialize)]
struct DatasetFile {
    authors: BTreeMap<AuthorId, String>,
    genres: BTreeMap<GenreId, String>,
    books: Vec<Book>,
}

pub(crate) struct Catalog {
    books: Vec<Arc<Book>>,
    authors: BTreeMap<AuthorId, String>,
    genres: BTreeMap<GenreId, String>,
}

impl Catalog {
    pub(crate) fn new(
        books: Vec<Book>,
        authors: BTreeMap<AuthorId, String>,
        genres: BTreeMap<GenreId, String>,
    ) -> Self {
        Self {
            books: books.into_iter().map(Arc::new).collect(),
            authors,
            genres,
        }
    }

    /// Loads the catalog from `dataset` if given, otherwise from the dataset
    /// compiled into the binary.
    pub(crate) fn load(dataset: Option<&Path>) -> Result<Self, CatalogError> {
        match dataset {
            Some(path) => Self::from_path(path),
            None => Self::from_json(EMBEDDED_DATASET),
        }
    }

    pub(crate) fn from_path(path: &Path) -> Result<Self, CatalogError> {
        let json = fs::read_to_string(path).map_err(|source| CatalogError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&json)
    }

    pub(crate) fn from_json(json: &str) -> Result<Self, CatalogError> {
        let file: DatasetFile = serde_json::from_str(json)?;
        Ok(Self::new(file.books, file.authors, file.genres))
    }

    pub(crate) fn books(&self) -> &[Arc<Book>] {
        &self.books
    }

    pub(crate) fn author_count(&self) -> usize {
        self.authors.len()
    }

    pub(crate) fn genre_count(&self) -> usize {
        self.genres.len()
    }

    /// Returns the display name for an author, or an empty string when the
    /// id is not in the mapping.
    pub(crate) fn author_name(&self, id: &AuthorId) -> &str {
        self.authors.get(id).map(String::as_str).unwrap_or_default()
    }

    /// Returns the display name for a genre, or an empty string when the id
    /// is not in the mapping.
    pub(crate) fn genre_name(&self, id: &GenreId) -> &str {
        self.genres.get(id).map(String::as_str).unwrap_or_default()
    }

    /// Author selector options: the "any" sentinel followed by every author
    /// sorted by name.
    pub(crate) fn author_options(&self) -> Vec<(Selector<AuthorId>, String)> {
        selector_options(&self.authors, ANY_AUTHOR_LABEL)
    }

    /// Genre selector options: the "any" sentinel followed by every genre
    /// sorted by name.
    pub(crate) fn genre_options(&self) -> Vec<(Selector<GenreId>, String)> {
        selector_options(&self.genres, ANY_GENRE_LABEL)
    }
}

fn selector_options<T: Clone + Ord>(
    names: &BTreeMap<T, String>,
    any_label: &str,
) -> Vec<(Selector<T>, String)> {
    let mut named: Vec<(&T, &String)> = names.iter().collect();
    named.sort_by(|a, b| a.1.cmp(b.1).then_with(|| a.0.cmp(b.0)));

    std::iter::once((Selector::Any, any_label.to_string()))
        .chain(
            named
                .into_iter()
                .map(|(id, name)| (Selector::Only(id.clone()), name.clone())),
        )
        .collect()
}


#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    const DATASET: &str = r#"{
        "authors": { "a1": "Zed Author", "a2": "Amy Author" },
        "genres": { "g1": "Romance" },
        "books": [
            {
                "id": "b1",
                "title": "First",
                "author": "a1",
                "genres": ["g1"],
                "description": "One",
                "image": "https://covers.test/b1.jpg",
                "published": "2018-06-10T13:53:51.000Z"
            }
        ]
    }"#;

    #[test]
    fn parses_dataset_json() {
        let catalog = Catalog::from_json(DATASET).unwrap();
        assert_eq!(catalog.books().len(), 1);
        assert_eq!(catalog.books()[0].title, "First");
        assert_eq!(catalog.author_name(&AuthorId("a1".into())), "Zed Author");
        assert_eq!(catalog.genre_name(&GenreId("g1".into())), "Romance");
    }

    #[test]
    fn missing_names_are_empty() {
        let catalog = Catalog::from_json(DATASET).unwrap();
        assert_eq!(catalog.author_name(&AuthorId("nobody".into())), "");
        assert_eq!(catalog.genre_name(&GenreId("nothing".into())), "");
    }

    #[test]
    fn options_start_with_any_and_sort_by_name() {
        let catalog = Catalog::from_json(DATASET).unwrap();
        let options = catalog.author_options();
        let labels: Vec<&str> = options.iter().map(|(_, name)| name.as_str()).collect();
        assert_eq!(labels, vec![ANY_AUTHOR_LABEL, "Amy Author", "Zed Author"]);
        assert_eq!(options[0].0, Selector::Any);
        assert_eq!(options[1].0, Selector::Only(AuthorId("a2".into())));

        let genres = catalog.genre_options();
        assert_eq!(genres[0].1, ANY_GENRE_LABEL);
        assert_eq!(genres.len(), 2);
    }

    #[test]
    fn loads_dataset_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(DATASET.as_bytes()).unwrap();

        let catalog = Catalog::load(Some(file.path())).unwrap();
        assert_eq!(catalog.books()[0].id, "b1");
    }

    #[test]
    fn missing_file_is_a_read_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.json");

        let err = Catalog::from_path(&path).err().unwrap();
        assert!(matches!(err, CatalogError::Read { .. }));
    }

    #[test]
    fn malformed_json_is_a_parse_error() {
        let err = Catalog::from_json("{ \"books\": 3 }").err().unwrap();
        assert!(matches!(err, CatalogError::Parse(_)));
    }

    #[test]
    fn embedded_dataset_loads() {
        let catalog = Catalog::load(None).unwrap();
        assert!(catalog.books().len() > 36);
        assert!(catalog.author_count() > 0);
        assert!(catalog.genre_count() > 0);
        for book in catalog.books() {
            assert!(!catalog.author_name(&book.author).is_empty());
        }
    }
}
