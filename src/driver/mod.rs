// SPDX-License-Identifier: GPL-3.0-only

//! Virtual-controller backends and the timing model.
//!
//! The navigation core talks to the gamepad through the [`ControllerDriver`]
//! trait; which concrete backend sits behind it is decided exactly once, at
//! startup, by [`resolve`]. Backends are looked up by name from the
//! configuration instead of being baked in, so binding a platform backend
//! (ViGEm, uinput) is a matter of adding an arm here.

pub mod controller;
pub mod timing;
pub mod trace;

pub use controller::{ControllerDriver, Direction, DriverError, DriverResult};
pub use timing::ActionTimings;
pub use trace::TraceDriver;

/// Resolves a controller backend by name.
///
/// Performed once at startup; a backend that cannot be located or connected
/// is fatal for the session and surfaces as [`DriverError::Unavailable`].
pub fn resolve(backend: &str, timings: ActionTimings) -> DriverResult<Box<dyn ControllerDriver>> {
    match backend {
        "trace" => {
            tracing::info!("controller backend 'trace' resolved (dry-run, no emission)");
            Ok(Box::new(TraceDriver::new(timings)))
        }
        other => Err(DriverError::Unavailable {
            backend: other.to_string(),
            reason: "no such backend is built into this binary".to_string(),
        }),
    }
}

// ============================================================================
// Test Support
// ============================================================================

#[cfg(test)]
pub mod testing {
    //! Recording driver shared by the unit and integration tests.

    use super::controller::{ControllerDriver, Direction, DriverError, DriverResult};

    /// One action captured by the [`RecordingDriver`].
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub enum RecordedAction {
        /// A single-step directional move.
        Move(Direction),
        /// A shift-toggle trigger press.
        ShiftToggle,
        /// A page-toggle button press.
        PageToggle,
        /// A confirm button press.
        Confirm,
        /// An alternate confirm (space) trigger press.
        ConfirmAlternate,
    }

    /// Captures the emitted action stream without sleeping, optionally
    /// failing after a set number of actions to exercise abort paths.
    #[derive(Debug, Default)]
    pub struct RecordingDriver {
        /// Every action emitted so far, in order.
        pub actions: Vec<RecordedAction>,
        /// If set, the action with this index fails instead of recording.
        pub fail_at: Option<usize>,
    }

    impl RecordingDriver {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn failing_at(index: usize) -> Self {
            Self {
                actions: Vec::new(),
                fail_at: Some(index),
            }
        }

        fn record(&mut self, action: RecordedAction) -> DriverResult<()> {
            if self.fail_at == Some(self.actions.len()) {
                return Err(DriverError::EmitFailed {
                    action: format!("{action:?}"),
                    reason: "injected test failure".to_string(),
                });
            }
            self.actions.push(action);
            Ok(())
        }
    }

    impl ControllerDriver for RecordingDriver {
        fn send_directional(&mut self, direction: Direction) -> DriverResult<()> {
            self.record(RecordedAction::Move(direction))
        }

        fn send_shift_toggle(&mut self) -> DriverResult<()> {
            self.record(RecordedAction::ShiftToggle)
        }

        fn send_page_toggle(&mut self) -> DriverResult<()> {
            self.record(RecordedAction::PageToggle)
        }

        fn send_confirm(&mut self) -> DriverResult<()> {
            self.record(RecordedAction::Confirm)
        }

        fn send_confirm_alternate(&mut self) -> DriverResult<()> {
            self.record(RecordedAction::ConfirmAlternate)
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
