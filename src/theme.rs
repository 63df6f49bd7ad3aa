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

//! Visual styling and color configuration for the TUI.
//!
//! This module defines the day and night palettes. Each palette is built
//! around two colour variables, `dark` and `light`, which swap roles between
//! the variants. `light` paints the background and `dark` the text, and the
//! remaining colours are fixed accents.
//!
//! Colours are converted to hexadecimal strings when the terminal emulator's
//! own background is updated to match.

use std::fmt;

use ratatui::style::Color;
use serde::{Deserialize, Serialize};

const DAY_DARK: (u8, u8, u8) = (10, 10, 20);
const DAY_LIGHT: (u8, u8, u8) = (255, 255, 255);

const NIGHT_DARK: (u8, u8, u8) = (255, 255, 255);
const NIGHT_LIGHT: (u8, u8, u8) = (10, 10, 20);

#[derive(Serialize, Deserialize, Debug, Default, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub(crate) enum ThemeVariant {
    Day,
    #[default]
    Night,
}

impl ThemeVariant {
    pub(crate) fn other(self) -> Self {
        match self {
            ThemeVariant::Day => ThemeVariant::Night,
            ThemeVariant::Night => ThemeVariant::Day,
        }
    }
}

impl fmt::Display for ThemeVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ThemeVariant::Day => f.write_str("Day"),
            ThemeVariant::Night => f.write_str("Night"),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct Theme {
    pub(crate) variant: ThemeVariant,

    pub(crate) colour_dark: Color,
    pub(crate) colour_light: Color,

    pub(crate) accent_colour: Color,
    pub(crate) border_colour: Color,
    pub(crate) muted_colour: Color,
    pub(crate) author_fg: Color,
}

impl Default for Theme {
    // Returns the standard application theme.
    fn default() -> Self {
        Self::for_variant(ThemeVariant::default())
    }
}

impl Theme {
    pub(crate) const fn for_variant(variant: ThemeVariant) -> Self {
        let (dark, light) = match variant {
            ThemeVariant::Day => (DAY_DARK, DAY_LIGHT),
            ThemeVariant::Night => (NIGHT_DARK, NIGHT_LIGHT),
        };

        Self {
            variant,
            colour_dark: Color::Rgb(dark.0, dark.1, dark.2),
            colour_light: Color::Rgb(light.0, light.1, light.2),
            accent_colour: Color::Rgb(0, 150, 255),
            border_colour: Color::Rgb(102, 102, 102),
            muted_colour: Color::Rgb(140, 140, 150),
            author_fg: Color::Rgb(179, 157, 219),
        }
    }

    pub(crate) fn background(&self) -> Color {
        self.colour_light
    }

    pub(crate) fn foreground(&self) -> Color {
        self.colour_dark
    }

    /// Converts a [`ratatui::style::Color`] into a CSS-style hexadecimal
    /// string, for setting the terminal emulator's background via escape
    /// sequences.
    ///
    /// Returns `None` for anything other than [`Color::Rgb`].
    pub(crate) fn to_hex(colour: Color) -> Option<String> {
        match colour {
            Color::Rgb(r, g, b) => Some(format!("#{:02x}{:02x}{:02x}", r, g, b)),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn day_and_night_swap_colour_variables() {
        let day = Theme::for_variant(ThemeVariant::Day);
        let night = Theme::for_variant(ThemeVariant::Night);

        assert_eq!(day.colour_dark, Color::Rgb(10, 10, 20));
        assert_eq!(day.colour_light, Color::Rgb(255, 255, 255));
        assert_eq!(night.colour_dark, day.colour_light);
        assert_eq!(night.colour_light, day.colour_dark);
    }

    #[test]
    fn hex_conversion() {
        assert_eq!(Theme::to_hex(Color::Rgb(10, 10, 20)).as_deref(), Some("#0a0a14"));
        assert_eq!(Theme::to_hex(Color::Red), None);
    }

    #[test]
    fn variant_round_trips_through_config_names() {
        let parsed: ThemeVariant = serde_json::from_str("\"day\"").unwrap();
        assert_eq!(parsed, ThemeVariant::Day);
        assert_eq!(ThemeVariant::Day.other(), ThemeVariant::Night);
    }
}
