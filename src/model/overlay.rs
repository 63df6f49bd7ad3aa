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

//! Overlay visibility state.

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Overlay {
    open: bool,
}

impl Overlay {
    pub(crate) fn is_open(&self) -> bool {
        self.open
    }

    /// Flips the overlay and returns whether it is now open.
    pub(crate) fn toggle(&mut self) -> bool {
        self.open = !self.open;
        self.open
    }

    pub(crate) fn open(&mut self) {
        self.open = true;
    }

    pub(crate) fn close(&mut self) {
        self.open = false;
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum OverlayKind {
    Detail,
    Settings,
    Search,
}

/// The three independent overlays drawn above the preview grid.
#[derive(Debug, Default)]
pub(crate) struct Overlays {
    pub(crate) detail: Overlay,
    pub(crate) search: Overlay,
    pub(crate) settings: Overlay,
}

impl Overlays {
    /// The open overlay that receives input, checked detail first, then
    /// settings, then search.
    pub(crate) fn focused(&self) -> Option<OverlayKind> {
        if self.detail.is_open() {
            Some(OverlayKind::Detail)
        } else if self.settings.is_open() {
            Some(OverlayKind::Settings)
        } else if self.search.is_open() {
            Some(OverlayKind::Search)
        } else {
            None
        }
    }

    pub(crate) fn any_open(&self) -> bool {
        self.focused().is_some()
    }
}
