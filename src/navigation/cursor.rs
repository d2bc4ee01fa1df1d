// SPDX-License-Identifier: GPL-3.0-only

//! Cursor tracking within the active keyboard grid.
//!
//! The on-screen keyboard gives no feedback about where its cursor is, so
//! the tracker maintains the *believed* (row, col) position and keeps it
//! consistent with every directional step it hands out: each emitted step
//! moves the tracked position by exactly one grid unit at the moment it is
//! produced.

use crate::app_settings::RESET_BOUND_STEPS;
use crate::driver::Direction;
use crate::layout::CellPosition;

/// Believed cursor position within the currently active layout grid.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CursorTracker {
    row: usize,
    col: usize,
}

impl CursorTracker {
    /// Creates a tracker at the top-left corner.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The currently believed cursor position.
    #[must_use]
    pub fn position(&self) -> CellPosition {
        CellPosition::new(self.row, self.col)
    }

    /// Produces the single-step moves from the believed position to
    /// `target`, resolving the full vertical distance before the horizontal
    /// one so paths are deterministic and reproducible.
    ///
    /// The step count always equals the Manhattan distance between start and
    /// target, and the tracked position equals `target` afterwards.
    pub fn move_to(&mut self, target: CellPosition) -> Vec<Direction> {
        let mut steps = Vec::new();
        while self.row < target.row {
            steps.push(Direction::Down);
            self.row += 1;
        }
        while self.row > target.row {
            steps.push(Direction::Up);
            self.row -= 1;
        }
        while self.col < target.col {
            steps.push(Direction::Right);
            self.col += 1;
        }
        while self.col > target.col {
            steps.push(Direction::Left);
            self.col -= 1;
        }
        steps
    }

    /// Produces the fixed bounding sequence toward the top-left corner and
    /// sets the tracked position to (0, 0).
    ///
    /// The grid clamps movement at its edges, so the Up steps always reach
    /// row zero even if the believed position had drifted from reality. The
    /// Left count is the same fixed figure the real device sequence uses and
    /// does not cover the widest columns.
    pub fn reset(&mut self) -> Vec<Direction> {
        let mut steps = Vec::with_capacity(RESET_BOUND_STEPS * 2);
        steps.extend(std::iter::repeat_n(Direction::Up, RESET_BOUND_STEPS));
        steps.extend(std::iter::repeat_n(Direction::Left, RESET_BOUND_STEPS));
        self.row = 0;
        self.col = 0;
        steps
    }
}

// ============================================================================
// Tests
// ============================================================================
