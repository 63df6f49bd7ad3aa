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

//! Settings overlay for choosing between the day and night themes.
//!
//! The choice only takes effect when saved; cancelling leaves the current
//! theme untouched.

mod event;
mod render;

use crate::theme::ThemeVariant;

pub(crate) struct SettingsView {
    selected: ThemeVariant,
}

impl SettingsView {
    pub(crate) fn new(current: ThemeVariant) -> Self {
        Self { selected: current }
    }

    /// Resets the pending choice, used when the overlay opens.
    pub(crate) fn select(&mut self, variant: ThemeVariant) {
        self.selected = variant;
    }

    #[cfg(test)]
    pub(crate) fn selected(&self) -> ThemeVariant {
        self.selected
    }
}
