// SPDX-License-Identifier: GPL-3.0-only

//! Keyboard page and layout tables.
//!
//! This module owns the static character-to-grid mappings for the supported
//! on-screen keyboard pages and language variants:
//!
//! - **Pages**: the three addressable grids ([`Page::Lower`], [`Page::Upper`],
//!   [`Page::Symbols`]) shown by the target keyboard.
//! - **Layouts**: one fixed grid per page and language, looked up with
//!   [`layout_for`].
//!
//! Lookup over the symbols layout takes priority over the letter layouts;
//! that policy lives in the typist's classification, not here. The tables
//! only answer "where does this character sit on this page".

pub mod tables;
pub mod types;

pub use tables::layout_for;
pub use types::{CellPosition, Language, Layout, Page};
