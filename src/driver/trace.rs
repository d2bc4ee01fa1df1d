// SPDX-License-Identifier: GPL-3.0-only

//! Trace backend: logs every action and honors the timing contract.
//!
//! This backend emits nothing to the operating system. It exists for dry
//! runs (verifying what a session *would* send, at the pace it would send
//! it) and as the reference implementation of the hold/settle contract for
//! real backends to copy.

use crate::driver::controller::{ControllerDriver, Direction, DriverResult};
use crate::driver::timing::ActionTimings;
use std::thread;
use std::time::Duration;

/// A [`ControllerDriver`] that logs actions via `tracing` instead of
/// emitting them, while still pacing itself like a real backend.
#[derive(Debug, Clone)]
pub struct TraceDriver {
    timings: ActionTimings,
}

impl TraceDriver {
    /// Creates a trace backend with the given timing set.
    #[must_use]
    pub fn new(timings: ActionTimings) -> Self {
        Self { timings }
    }

    fn press(&self, action: &str, hold: Duration, settle: Duration) {
        tracing::debug!(action, hold_ms = hold.as_millis() as u64, "press");
        thread::sleep(hold);
        tracing::trace!(action, "release");
        thread::sleep(settle);
    }
}

impl ControllerDriver for TraceDriver {
    fn send_directional(&mut self, direction: Direction) -> DriverResult<()> {
        self.press(
            &format!("move-{direction}"),
            self.timings.move_hold,
            self.timings.move_settle,
        );
        Ok(())
    }

    fn send_shift_toggle(&mut self) -> DriverResult<()> {
        // Page switches settle longer than plain button presses so the
        // keyboard finishes its page animation.
        self.press("shift-toggle", self.timings.button_hold, self.timings.page_settle);
        Ok(())
    }

    fn send_page_toggle(&mut self) -> DriverResult<()> {
        self.press("page-toggle", self.timings.button_hold, self.timings.page_settle);
        Ok(())
    }

    fn send_confirm(&mut self) -> DriverResult<()> {
        self.press("confirm", self.timings.button_hold, self.timings.button_settle);
        Ok(())
    }

    fn send_confirm_alternate(&mut self) -> DriverResult<()> {
        self.press(
            "confirm-alternate",
            self.timings.trigger_hold,
            self.timings.trigger_settle,
        );
        Ok(())
    }
}
