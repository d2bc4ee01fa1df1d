// SPDX-License-Identifier: GPL-3.0-only

//! Input timing model.
//!
//! The receiving emulator only registers discrete presses when each control
//! is held for a minimum duration and the next action waits out a settle
//! delay. The base durations below were tuned against the real on-screen
//! keyboard; a user-configurable speed scale divides all of them uniformly,
//! clamped so delays never collapse to zero or below.

use crate::app_settings;
use std::time::Duration;

/// The full set of hold and settle delays used when emitting actions,
/// already adjusted for the active speed scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActionTimings {
    /// Hold duration for a directional stick deflection.
    pub move_hold: Duration,
    /// Settle delay after a directional move.
    pub move_settle: Duration,
    /// Hold duration for a face button press.
    pub button_hold: Duration,
    /// Settle delay after a face button press.
    pub button_settle: Duration,
    /// Hold duration for a trigger press.
    pub trigger_hold: Duration,
    /// Settle delay after a trigger press.
    pub trigger_settle: Duration,
    /// Settle delay after a page switch (covers the page animation).
    pub page_settle: Duration,
    /// Inter-character pause at the session level.
    pub poll_interval: Duration,
}

impl ActionTimings {
    /// Builds the timing set for a speed scale.
    ///
    /// A scale of 1.0 yields the base durations; 2.0 halves every delay;
    /// 0.5 doubles them. Scales below [`app_settings::MIN_SPEED_SCALE`]
    /// are clamped to it.
    #[must_use]
    pub fn scaled(speed: f32) -> Self {
        let speed = speed.max(app_settings::MIN_SPEED_SCALE);
        let scale = |base: Duration| base.div_f32(speed);
        Self {
            move_hold: scale(app_settings::BASE_MOVE_HOLD),
            move_settle: scale(app_settings::BASE_MOVE_SETTLE),
            button_hold: scale(app_settings::BASE_BUTTON_HOLD),
            button_settle: scale(app_settings::BASE_BUTTON_SETTLE),
            trigger_hold: scale(app_settings::BASE_TRIGGER_HOLD),
            trigger_settle: scale(app_settings::BASE_TRIGGER_SETTLE),
            page_settle: scale(app_settings::BASE_PAGE_SETTLE),
            poll_interval: scale(app_settings::BASE_POLL_INTERVAL),
        }
    }
}

impl Default for ActionTimings {
    fn default() -> Self {
        Self::scaled(app_settings::DEFAULT_SPEED)
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    /// Scale 1.0 reproduces the base durations.
    #[test]
    fn test_unity_scale_is_base() {
        let timings = ActionTimings::scaled(1.0);
        assert_eq!(timings.move_hold, app_settings::BASE_MOVE_HOLD);
        assert_eq!(timings.page_settle, app_settings::BASE_PAGE_SETTLE);
        assert_eq!(timings, ActionTimings::default());
    }

    /// Scale 2.0 halves every delay relative to scale 1.0.
    #[test]
    fn test_double_speed_halves_delays() {
        let base = ActionTimings::scaled(1.0);
        let fast = ActionTimings::scaled(2.0);
        assert_eq!(fast.move_hold, base.move_hold / 2);
        assert_eq!(fast.move_settle, base.move_settle / 2);
        assert_eq!(fast.button_hold, base.button_hold / 2);
        assert_eq!(fast.button_settle, base.button_settle / 2);
        assert_eq!(fast.trigger_hold, base.trigger_hold / 2);
        assert_eq!(fast.trigger_settle, base.trigger_settle / 2);
        assert_eq!(fast.page_settle, base.page_settle / 2);
        assert_eq!(fast.poll_interval, base.poll_interval / 2);
    }

    /// Scales below the minimum clamp to the minimum instead of producing
    /// unbounded delays.
    #[test]
    fn test_below_minimum_clamps() {
        let clamped = ActionTimings::scaled(0.05);
        let minimum = ActionTimings::scaled(app_settings::MIN_SPEED_SCALE);
        assert_eq!(clamped, minimum);

        let zero = ActionTimings::scaled(0.0);
        assert_eq!(zero, minimum);
    }

    /// Half speed doubles the delays.
    #[test]
    fn test_half_speed_doubles_delays() {
        let base = ActionTimings::scaled(1.0);
        let slow = ActionTimings::scaled(0.5);
        assert_eq!(slow.button_hold, base.button_hold * 2);
        assert_eq!(slow.poll_interval, base.poll_interval * 2);
    }
}
