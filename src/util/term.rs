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

//! Terminal environment and styling utilities.
//!
//! This module provides functions to manipulate the terminal emulator's
//! properties, such as background colors, using OSC (Operating System Command)
//! escape sequences.
//!
//! # Compatibility
//!
//! These functions rely on the terminal emulator supporting the specific OSC
//! codes. Most modern terminals (XTerm, iTerm2, Alacritty, Kitty) support these
//! sequences. Terminals that do not simply ignore them.

use std::io::{self, Write};

use crate::theme::Theme;

/// Repaints the terminal emulator background with the theme's background
/// colour, so no unstyled border shows around the UI.
pub(crate) fn apply_theme_background(theme: &Theme) -> io::Result<()> {
    match Theme::to_hex(theme.background()) {
        Some(hex) => set_terminal_bg(&hex),
        None => Ok(()),
    }
}

/// Sets the terminal background color using an OSC 11 escape sequence.
fn set_terminal_bg(hex_color: &str) -> io::Result<()> {
    let mut stdout = io::stdout();
    write!(stdout, "\x1b]11;{}\x07", hex_color)?;
    stdout.flush()
}

/// Resets the terminal background to its default color with OSC 111.
///
/// Called during cleanup, so failures are ignored.
pub(crate) fn reset_terminal_bg() {
    let mut stdout = io::stdout();
    let _ = write!(stdout, "\x1b]111\x07");
    let _ = stdout.flush();
}
