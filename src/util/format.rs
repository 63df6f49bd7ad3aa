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

//! Text formatting helpers for the preview grid and status lines.

/// Shortens `text` to at most `width` characters, replacing the tail with an
/// ellipsis when it does not fit.
///
/// # Examples
///
/// ```ignore
/// assert_eq!(truncate("Winter Crown", 8), "Winter …");
/// assert_eq!(truncate("Winter", 8), "Winter");
/// ```
pub(crate) fn truncate(text: &str, width: usize) -> String {
    if text.chars().count() <= width {
        return text.to_string();
    }
    if width == 0 {
        return String::new();
    }

    let mut shortened: String = text.chars().take(width - 1).collect();
    shortened.push('…');
    shortened
}

/// Formats the result summary shown in the header, e.g. `"Showing 36 of 84"`.
pub(crate) fn format_showing(shown: usize, total: usize) -> String {
    match total {
        1 => "Showing 1 book".to_string(),
        _ if shown == total => format!("Showing all {} books", total),
        _ => format!("Showing {} of {}", shown, total),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truncate_keeps_short_text() {
        assert_eq!(truncate("Winter", 8), "Winter");
        assert_eq!(truncate("Winter", 6), "Winter");
    }

    #[test]
    fn truncate_adds_ellipsis() {
        assert_eq!(truncate("Winter Crown", 8), "Winter …");
        assert_eq!(truncate("Winter Crown", 1), "…");
        assert_eq!(truncate("Winter Crown", 0), "");
    }

    #[test]
    fn truncate_counts_characters_not_bytes() {
        assert_eq!(truncate("Café au lait", 5), "Café…");
    }

    #[test]
    fn showing_summary() {
        assert_eq!(format_showing(36, 84), "Showing 36 of 84");
        assert_eq!(format_showing(50, 50), "Showing all 50 books");
        assert_eq!(format_showing(0, 0), "Showing all 0 books");
        assert_eq!(format_showing(1, 1), "Showing 1 book");
    }
}
