// SPDX-License-Identifier: GPL-3.0-only

//! The virtual-controller seam.
//!
//! Everything the navigation core needs from the underlying virtual gamepad
//! is expressed by [`ControllerDriver`]: four directional moves and four
//! discrete button actions. Each call is blocking and must honor the
//! hold-then-release-then-settle contract from the timing model, since the
//! receiving emulator needs discrete, well-spaced presses to register them.
//!
//! Concrete backends (ViGEm on Windows, uinput on Linux, the in-tree trace
//! backend) implement this trait; the rest of the crate never sees them
//! directly.

use std::fmt;

/// A single-step cursor move on the keyboard grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// One cell up.
    Up,
    /// One cell down.
    Down,
    /// One cell left.
    Left,
    /// One cell right.
    Right,
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::Up => write!(f, "up"),
            Direction::Down => write!(f, "down"),
            Direction::Left => write!(f, "left"),
            Direction::Right => write!(f, "right"),
        }
    }
}

/// Result type for controller operations.
pub type DriverResult<T> = Result<T, DriverError>;

/// Errors surfaced by a controller backend.
#[derive(Debug, Clone)]
pub enum DriverError {
    /// The backend could not be located or connected at startup. Fatal for
    /// the session; typing cannot start until resolved.
    Unavailable {
        /// Name of the backend that was requested.
        backend: String,
        /// Why it could not be used.
        reason: String,
    },
    /// The backend failed while emitting an action mid-session. The session
    /// aborts and surfaces the error; no automatic retry.
    EmitFailed {
        /// The action that was being emitted.
        action: String,
        /// Why the emission failed.
        reason: String,
    },
}

impl fmt::Display for DriverError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DriverError::Unavailable { backend, reason } => {
                write!(f, "controller backend '{backend}' unavailable: {reason}")
            }
            DriverError::EmitFailed { action, reason } => {
                write!(f, "failed to emit {action}: {reason}")
            }
        }
    }
}

impl std::error::Error for DriverError {}

/// Blocking emission primitives for the virtual controller.
///
/// All five calls are strictly sequential with respect to each other: an
/// implementation holds the control for its hold duration, releases it, then
/// waits the settle delay before returning. Callers may therefore chain
/// calls back to back without extra pacing.
pub trait ControllerDriver: Send {
    /// Deflects the stick one step in `direction`, then recenters it.
    fn send_directional(&mut self, direction: Direction) -> DriverResult<()>;

    /// Presses the shift trigger that toggles between the lower and upper
    /// pages.
    fn send_shift_toggle(&mut self) -> DriverResult<()>;

    /// Presses the face button that advances the page cycle
    /// (upper -> hidden -> symbols -> upper -> ...).
    fn send_page_toggle(&mut self) -> DriverResult<()>;

    /// Presses the confirm button that selects the cell under the cursor.
    fn send_confirm(&mut self) -> DriverResult<()>;

    /// Presses the alternate confirm trigger mapped to space.
    fn send_confirm_alternate(&mut self) -> DriverResult<()>;
}
