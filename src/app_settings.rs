// SPDX-License-Identifier: GPL-3.0-only

//! Centralized application settings and constants.

use std::time::Duration;

/// Application ID in RDNN (reverse domain name notation) format.
pub const APP_ID: &str = "io.github.gridtype.Gridtype";

/// Directory name under the user config directory.
pub const CONFIG_DIR: &str = "gridtype";

/// Config file name inside [`CONFIG_DIR`].
pub const CONFIG_FILE: &str = "config.json";

/// How long a directional stick deflection is held before release.
pub const BASE_MOVE_HOLD: Duration = Duration::from_millis(50);

/// Settle pause after a directional move is released.
pub const BASE_MOVE_SETTLE: Duration = Duration::from_millis(30);

/// How long a face button (confirm, page-toggle) is held.
pub const BASE_BUTTON_HOLD: Duration = Duration::from_millis(20);

/// Settle pause after a face button is released.
pub const BASE_BUTTON_SETTLE: Duration = Duration::from_millis(40);

/// How long a trigger (shift-toggle, confirm-alternate) is held.
pub const BASE_TRIGGER_HOLD: Duration = Duration::from_millis(40);

/// Settle pause after a trigger is released.
pub const BASE_TRIGGER_SETTLE: Duration = Duration::from_millis(40);

/// Settle pause after a page switch, long enough for the on-screen
/// keyboard to finish its page animation.
pub const BASE_PAGE_SETTLE: Duration = Duration::from_millis(120);

/// Pause between characters at the session level.
pub const BASE_POLL_INTERVAL: Duration = Duration::from_millis(10);

/// Lowest speed scale accepted when scaling delays. Anything below this is
/// clamped so delays never grow without bound.
pub const MIN_SPEED_SCALE: f32 = 0.1;

/// Configurable typing speed range exposed to the user.
pub const SPEED_RANGE: (f32, f32) = (0.2, 2.0);

/// Default typing speed multiplier.
pub const DEFAULT_SPEED: f32 = 1.0;

/// Default start/stop keybind stored in the config.
pub const DEFAULT_KEYBIND: &str = "f1";

/// Number of bounding steps emitted per axis by a cursor reset. No grid has
/// more rows than this, so the Up steps always reach the top row; the Left
/// count is the same fixed figure the real device sequence uses.
pub const RESET_BOUND_STEPS: usize = 5;
