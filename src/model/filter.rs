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

//! Catalog filtering.
//!
//! Narrows the book list down to the books matching a [`FilterCriteria`]:
//! a case-insensitive title substring, an exact author and genre membership.
//! The result keeps dataset order.

use std::sync::Arc;

use crate::model::{Book, FilterCriteria};

/// Returns the books matching all three criteria, in dataset order.
///
/// Match-all criteria return the whole dataset without inspecting any book.
/// An empty result is a normal outcome.
pub(crate) fn filter(books: &[Arc<Book>], criteria: &FilterCriteria) -> Vec<Arc<Book>> {
    if criteria.matches_all() {
        return books.to_vec();
    }

    let query = criteria.title.trim().to_lowercase();

    books
        .iter()
        .filter(|book| matches(book, &query, criteria))
        .cloned()
        .collect()
}

fn matches(book: &Book, query: &str, criteria: &FilterCriteria) -> bool {
    let title_match = book.title.to_lowercase().contains(query);
    let author_match = criteria.author.admits(&book.author);
    let genre_match = criteria.genre.admits_any(&book.genres);

    title_match && author_match && genre_match
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{
        AuthorId, GenreId, Selector,
        catalog::fixtures::{numbered_catalog, sample_catalog},
    };

    fn ids(books: &[Arc<Book>]) -> Vec<&str> {
        books.iter().map(|b| b.id.as_str()).collect()
    }

    fn satisfies(book: &Book, criteria: &FilterCriteria) -> bool {
        let query = criteria.title.trim().to_lowercase();
        book.title.to_lowercase().contains(&query)
            && (criteria.author.is_any() || criteria.author == Selector::Only(book.author.clone()))
            && match &criteria.genre {
                Selector::Any => true,
                Selector::Only(genre) => book.genres.contains(genre),
            }
    }

    #[test]
    fn match_all_returns_full_dataset_in_order() {
        let catalog = numbered_catalog(50);
        let result = filter(catalog.books(), &FilterCriteria::default());

        assert_eq!(result.len(), 50);
        assert!(result.iter().zip(catalog.books()).all(|(a, b)| Arc::ptr_eq(a, b)));
    }

    #[test]
    fn title_is_trimmed_and_case_insensitive() {
        let catalog = sample_catalog();
        let result = filter(catalog.books(), &FilterCriteria::for_title("  HARBOUR "));
        assert_eq!(ids(&result), vec!["b1", "b3"]);
    }

    #[test]
    fn whitespace_title_matches_everything() {
        let catalog = sample_catalog();
        let result = filter(catalog.books(), &FilterCriteria::for_title("   "));
        assert_eq!(result.len(), catalog.books().len());
    }

    #[test]
    fn author_must_match_exactly() {
        let catalog = sample_catalog();
        let criteria = FilterCriteria {
            author: Selector::Only(AuthorId("a1".into())),
            ..FilterCriteria::default()
        };
        assert_eq!(ids(&filter(catalog.books(), &criteria)), vec!["b1", "b3"]);
    }

    #[test]
    fn genre_is_a_membership_check() {
        let catalog = sample_catalog();
        let criteria = FilterCriteria {
            genre: Selector::Only(GenreId("g3".into())),
            ..FilterCriteria::default()
        };
        assert_eq!(ids(&filter(catalog.books(), &criteria)), vec!["b2", "b4"]);
    }

    #[test]
    fn all_predicates_are_anded() {
        let catalog = sample_catalog();
        let criteria = FilterCriteria {
            title: "winter".into(),
            author: Selector::Only(AuthorId("a1".into())),
            genre: Selector::Only(GenreId("g2".into())),
        };
        assert_eq!(ids(&filter(catalog.books(), &criteria)), vec!["b3"]);
    }

    #[test]
    fn no_match_is_an_empty_result() {
        let catalog = sample_catalog();
        let result = filter(catalog.books(), &FilterCriteria::for_title("moon"));
        assert!(result.is_empty());
    }

    #[test]
    fn unknown_ids_are_not_rejected() {
        let catalog = sample_catalog();
        let criteria = FilterCriteria {
            author: Selector::Only(AuthorId("a9".into())),
            ..FilterCriteria::default()
        };
        assert_eq!(ids(&filter(catalog.books(), &criteria)), vec!["b5"]);
    }

    #[test]
    fn result_is_exactly_the_satisfying_books() {
        let catalog = sample_catalog();
        let grid = [
            FilterCriteria::for_title("the"),
            FilterCriteria {
                title: "o".into(),
                genre: Selector::Only(GenreId("g2".into())),
                ..FilterCriteria::default()
            },
            FilterCriteria {
                author: Selector::Only(AuthorId("a3".into())),
                genre: Selector::Only(GenreId("g1".into())),
                ..FilterCriteria::default()
            },
        ];

        for criteria in &grid {
            let result = filter(catalog.books(), criteria);
            for book in catalog.books() {
                let included = result.iter().any(|b| Arc::ptr_eq(b, book));
                assert_eq!(included, satisfies(book, criteria), "{} with {:?}", book.id, criteria);
            }
        }
    }

    #[test]
    fn filtering_is_idempotent() {
        let catalog = sample_catalog();
        let criteria = FilterCriteria::for_title("harbour");
        assert_eq!(
            ids(&filter(catalog.books(), &criteria)),
            ids(&filter(catalog.books(), &criteria))
        );
    }
}
