// SPDX-License-Identifier: GPL-3.0-only

//! Types text into a grid-based on-screen keyboard by emulating gamepad
//! input.
//!
//! The target keyboard has no pointer and no key events; characters are
//! entered by steering a cell cursor with directional input and confirming
//! cells one at a time, switching between the lower, upper and symbols pages
//! as the text demands. This crate keeps a believed model of the keyboard's
//! state (active page, cursor cell), computes the minimal action sequence
//! for each character, and emits it through a pluggable controller backend
//! with the hold and settle delays the keyboard needs to register presses.
//!
//! The layers, bottom up:
//!
//! - [`layout`]: the fixed character grids per page and language;
//! - [`navigation`]: cursor and page trackers that turn targets into
//!   action sequences;
//! - [`driver`]: the controller backend seam and the timing model;
//! - [`typist`]: per-character classification, resolution and emission;
//! - [`session`]: the background worker that types a whole string, with
//!   progress events and cooperative cancellation;
//! - [`config`]: persisted user options (language, speed, keybind).

pub mod app_settings;
pub mod config;
pub mod driver;
pub mod layout;
pub mod navigation;
pub mod session;
pub mod typist;

// ============================================================================
// Tests
// ============================================================================
