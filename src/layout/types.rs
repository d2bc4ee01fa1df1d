// SPDX-License-Identifier: GPL-3.0-only

//! Core data types for keyboard pages and character grids.
//!
//! The on-screen keyboard shows one of three selectable character grids
//! ("pages") at a time. A [`Layout`] is the fixed character-to-cell grid for
//! one page in one language; a cell holds either a single printable
//! character or nothing (unassigned cells are skipped during lookup).

use serde::{Deserialize, Serialize};
use std::fmt;

/// Marker used in the row tables for an unassigned cell. Space can never
/// appear in a grid because it is typed with the alternate confirm trigger,
/// so it is free to reuse here.
pub(crate) const EMPTY_CELL: char = ' ';

/// One of the three selectable keyboard pages.
///
/// The on-screen keyboard cycles through more pages than these (see the
/// page state machine), but only these three are ever addressed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Page {
    /// Lowercase letters plus a few punctuation cells.
    Lower,
    /// Uppercase letters and digits. Letter cells are stored in their
    /// lowercase form; the page itself provides the casing.
    Upper,
    /// Symbols and special characters.
    Symbols,
}

impl fmt::Display for Page {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Page::Lower => write!(f, "lower"),
            Page::Upper => write!(f, "upper"),
            Page::Symbols => write!(f, "symbols"),
        }
    }
}

/// Language variant selecting which concrete layout set backs the pages.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    /// English (QWERTY) layout set.
    #[default]
    English,
    /// German (QWERTZ) layout set.
    German,
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Language::English => write!(f, "english"),
            Language::German => write!(f, "german"),
        }
    }
}

impl std::str::FromStr for Language {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "english" | "en" => Ok(Language::English),
            "german" | "de" => Ok(Language::German),
            other => Err(format!("unknown language '{other}' (expected 'english' or 'german')")),
        }
    }
}

/// A (row, column) cell address within a layout grid.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CellPosition {
    /// Zero-based row index from the top of the grid.
    pub row: usize,
    /// Zero-based column index from the left of the grid.
    pub col: usize,
}

impl CellPosition {
    /// Creates a cell position.
    #[must_use]
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

impl fmt::Display for CellPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// The fixed character-to-cell grid for one page in one language.
///
/// Rows are stored as string slices where each `char` is one cell and
/// [`EMPTY_CELL`] marks an unassigned cell. Rows may have different lengths;
/// the cursor only ever targets assigned cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Layout {
    rows: &'static [&'static str],
}

impl Layout {
    /// Creates a layout from static row data.
    pub(crate) const fn from_rows(rows: &'static [&'static str]) -> Self {
        Self { rows }
    }

    /// Finds the cell holding `ch`, scanning rows top to bottom and cells
    /// left to right. Returns the first match; unassigned cells never match.
    #[must_use]
    pub fn position_of(&self, ch: char) -> Option<CellPosition> {
        if ch == EMPTY_CELL {
            return None;
        }
        for (row, cells) in self.rows.iter().enumerate() {
            if let Some(col) = cells.chars().position(|c| c == ch) {
                return Some(CellPosition::new(row, col));
            }
        }
        None
    }

    /// Returns whether `ch` is assigned to any cell of this layout.
    #[must_use]
    pub fn contains(&self, ch: char) -> bool {
        self.position_of(ch).is_some()
    }

    /// Returns the character at `pos`, or `None` for unassigned or
    /// out-of-bounds cells.
    #[must_use]
    pub fn char_at(&self, pos: CellPosition) -> Option<char> {
        let ch = self.rows.get(pos.row)?.chars().nth(pos.col)?;
        if ch == EMPTY_CELL { None } else { Some(ch) }
    }

    /// Number of rows in the grid.
    #[must_use]
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Iterates over all assigned characters with their cell positions.
    pub fn cells(&self) -> impl Iterator<Item = (char, CellPosition)> + '_ {
        self.rows.iter().enumerate().flat_map(|(row, cells)| {
            cells
                .chars()
                .enumerate()
                .filter(|&(_, ch)| ch != EMPTY_CELL)
                .map(move |(col, ch)| (ch, CellPosition::new(row, col)))
        })
    }
}

// ============================================================================
// Tests
// ============================================================================
