// SPDX-License-Identifier: GPL-3.0-only

//! Grid navigation state: cursor tracking and page switching.
//!
//! Both trackers are pure bookkeeping: they compute the action sequences
//! needed to reach a target and update their believed state, leaving the
//! actual emission to the caller. They are owned exclusively by the active
//! typing session; nothing here is shared or global.

pub mod cursor;
pub mod page;

pub use cursor::CursorTracker;
pub use page::{PageAction, PageTracker};
