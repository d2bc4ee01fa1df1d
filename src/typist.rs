// SPDX-License-Identifier: GPL-3.0-only

//! Character typist: turns single characters into controller actions.
//!
//! For each character the typist resolves which page it lives on and at
//! which cell, asks the page tracker for the switch sequence and the cursor
//! tracker for the moves, emits them through the controller driver, and
//! finishes with a confirm press. Space never touches the grid at all; it
//! maps to the alternate confirm trigger.
//!
//! Classification is a single deterministic function over the symbols
//! layout, replacing scattered membership tests: symbols win over letter
//! pages, uppercase letters are looked up by their lowercase form (the upper
//! page stores no separate case glyphs), and digits live on the upper page.
//! A character absent from every layout is skipped with a warning and emits
//! nothing; the session continues.

use crate::driver::{ControllerDriver, DriverResult};
use crate::layout::{layout_for, CellPosition, Language, Page};
use crate::navigation::{CursorTracker, PageAction, PageTracker};

/// Deterministic classification of an input character.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CharClass {
    /// Present on the symbols page (takes priority over letter pages).
    Symbol,
    /// A lowercase letter, typed on the lower page.
    LowerLetter,
    /// An uppercase letter, typed on the upper page via its lowercase cell.
    UpperLetter,
    /// A decimal digit, which lives on the upper page.
    Digit,
    /// None of the above; resolved through the fallback chain.
    Unmapped,
}

/// Classifies `ch` against the symbols layout of the active language.
#[must_use]
pub fn classify(ch: char, language: Language) -> CharClass {
    if layout_for(language, Page::Symbols).contains(ch) {
        CharClass::Symbol
    } else if ch.is_alphabetic() && ch.is_lowercase() {
        CharClass::LowerLetter
    } else if ch.is_alphabetic() && ch.is_uppercase() {
        CharClass::UpperLetter
    } else if ch.is_ascii_digit() {
        CharClass::Digit
    } else {
        CharClass::Unmapped
    }
}

/// Whether a character was actually typed or skipped as unresolvable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TypeOutcome {
    /// The character was resolved and confirmed.
    Typed,
    /// The character was not found in any layout; nothing was emitted.
    Skipped,
}

/// Per-session typist owning the page and cursor trackers.
///
/// Owned exclusively by the active typing session; there is no process-wide
/// keyboard state.
#[derive(Debug)]
pub struct CharacterTypist {
    language: Language,
    pages: PageTracker,
    cursor: CursorTracker,
}

impl CharacterTypist {
    /// Creates a typist believing the keyboard is on the lower page with the
    /// cursor at the top-left corner.
    #[must_use]
    pub fn new(language: Language) -> Self {
        Self {
            language,
            pages: PageTracker::new(),
            cursor: CursorTracker::new(),
        }
    }

    /// The page the typist believes is active.
    #[must_use]
    pub fn active_page(&self) -> Page {
        self.pages.active()
    }

    /// The cell the typist believes the cursor is on.
    #[must_use]
    pub fn cursor_position(&self) -> CellPosition {
        self.cursor.position()
    }

    /// Types one character, optionally looking ahead at the next one.
    ///
    /// The lookahead only matters after a symbols-page character: the switch
    /// back toward the next letter's page is issued right after the confirm,
    /// so the next call finds the page already active instead of paying for
    /// the switch then.
    pub fn type_character(
        &mut self,
        driver: &mut dyn ControllerDriver,
        ch: char,
        next_ch: Option<char>,
    ) -> DriverResult<TypeOutcome> {
        if ch == ' ' {
            driver.send_confirm_alternate()?;
            return Ok(TypeOutcome::Typed);
        }

        let class = classify(ch, self.language);
        let Some((page, cell)) = self.resolve(ch, class) else {
            tracing::warn!(character = %ch.escape_debug(), "character not found in any layout, skipping");
            return Ok(TypeOutcome::Skipped);
        };

        self.switch_page(driver, page)?;
        for step in self.cursor.move_to(cell) {
            driver.send_directional(step)?;
        }
        driver.send_confirm()?;

        if class == CharClass::Symbol {
            if let Some(next) = next_ch {
                if next.is_uppercase() && next.is_alphabetic() {
                    self.switch_page(driver, Page::Upper)?;
                } else if next.is_lowercase() {
                    self.switch_page(driver, Page::Lower)?;
                }
            }
        }

        Ok(TypeOutcome::Typed)
    }

    /// Returns the keyboard and the trackers to their starting state: lower
    /// page active, cursor bounded back to the top-left corner.
    pub fn reset(&mut self, driver: &mut dyn ControllerDriver) -> DriverResult<()> {
        self.switch_page(driver, Page::Lower)?;
        for step in self.cursor.reset() {
            driver.send_directional(step)?;
        }
        Ok(())
    }

    /// Resolves the page and cell for a classified character.
    ///
    /// Unmapped characters fall back to a raw lookup on the symbols page and
    /// then the lower page; characters absent everywhere resolve to `None`.
    /// An uppercase letter whose lowercase form expands to more than one
    /// character cannot name a single cell and resolves to `None` as well.
    fn resolve(&self, ch: char, class: CharClass) -> Option<(Page, CellPosition)> {
        let find = |page: Page, ch: char| {
            layout_for(self.language, page)
                .position_of(ch)
                .map(|cell| (page, cell))
        };

        match class {
            CharClass::Symbol => find(Page::Symbols, ch),
            CharClass::LowerLetter => find(Page::Lower, ch),
            CharClass::UpperLetter => {
                let mut lowered = ch.to_lowercase();
                match (lowered.next(), lowered.next()) {
                    (Some(low), None) => find(Page::Upper, low),
                    _ => None,
                }
            }
            CharClass::Digit => find(Page::Upper, ch),
            CharClass::Unmapped => find(Page::Symbols, ch).or_else(|| find(Page::Lower, ch)),
        }
    }

    fn switch_page(&mut self, driver: &mut dyn ControllerDriver, target: Page) -> DriverResult<()> {
        for action in self.pages.transition_to(target) {
            match action {
                PageAction::ShiftToggle => driver.send_shift_toggle()?,
                PageAction::PageToggle => driver.send_page_toggle()?,
            }
        }
        Ok(())
    }
}

// ============================================================================
// Tests
// ============================================================================
