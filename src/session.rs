// SPDX-License-Identifier: GPL-3.0-only

//! Typing session driver.
//!
//! A session owns the input string, the typist (and through it the page and
//! cursor trackers) and the controller driver, and works through the text
//! one character at a time on a dedicated blocking worker so the calling
//! surface stays responsive. Progress, skips, completion and failure are
//! reported over an event channel.
//!
//! Only one session may be active at a time: [`SessionManager::start`]
//! stops and joins the previous session before spawning the next one.
//! Cancellation is cooperative and checked once per character boundary;
//! a character's emission is never cut in half.

use crate::driver::{ActionTimings, ControllerDriver};
use crate::layout::Language;
use crate::typist::{CharacterTypist, TypeOutcome};
use futures::channel::mpsc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread;

/// Events reported by a running typing session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionEvent {
    /// About to type the character at `index` (zero-based) of `total`.
    Progress {
        /// Index of the character being typed.
        index: usize,
        /// Total number of characters in the session.
        total: usize,
    },
    /// The character at `index` was not found in any layout and skipped.
    CharacterSkipped {
        /// Index of the skipped character.
        index: usize,
        /// The character that could not be resolved.
        character: char,
    },
    /// The whole input was typed and the keyboard state fully reset.
    Completed,
    /// The session was cancelled at a character boundary.
    Stopped,
    /// The session aborted on a driver failure; no automatic retry.
    Failed(String),
}

/// Handle to a spawned typing session.
pub struct SessionHandle {
    cancel: Arc<AtomicBool>,
    worker: tokio::task::JoinHandle<()>,
}

impl SessionHandle {
    /// Requests a cooperative stop; honored at the next character boundary.
    pub fn stop(&self) {
        self.cancel.store(true, Ordering::SeqCst);
    }

    /// Whether the worker has finished (completed, stopped or failed).
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.worker.is_finished()
    }

    /// Waits for the worker to finish.
    pub async fn join(self) {
        if let Err(e) = self.worker.await {
            tracing::error!(error = %e, "session worker panicked");
        }
    }
}

/// Enforces the single-active-session rule.
#[derive(Default)]
pub struct SessionManager {
    current: Option<SessionHandle>,
}

impl SessionManager {
    /// Creates a manager with no active session.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether a session is currently running.
    #[must_use]
    pub fn is_running(&self) -> bool {
        self.current.as_ref().is_some_and(|h| !h.is_finished())
    }

    /// Starts a new typing session, first stopping any session still
    /// running. Returns the event stream for the new session.
    pub async fn start(
        &mut self,
        driver: Box<dyn ControllerDriver>,
        language: Language,
        timings: ActionTimings,
        text: impl Into<String>,
    ) -> mpsc::UnboundedReceiver<SessionEvent> {
        self.stop_current().await;

        let (events, receiver) = mpsc::unbounded();
        let cancel = Arc::new(AtomicBool::new(false));
        let text = text.into();
        let worker = tokio::task::spawn_blocking({
            let cancel = Arc::clone(&cancel);
            move || run_worker(driver, language, timings, &text, &cancel, &events)
        });

        self.current = Some(SessionHandle { cancel, worker });
        receiver
    }

    /// Stops the running session, if any, and waits for it to wind down.
    pub async fn stop_current(&mut self) {
        if let Some(handle) = self.current.take() {
            handle.stop();
            handle.join().await;
        }
    }
}

/// Blocking session body; runs on the dedicated worker.
fn run_worker(
    mut driver: Box<dyn ControllerDriver>,
    language: Language,
    timings: ActionTimings,
    text: &str,
    cancel: &AtomicBool,
    events: &mpsc::UnboundedSender<SessionEvent>,
) {
    let chars: Vec<char> = text.chars().collect();
    let total = chars.len();
    tracing::info!(total, %language, "typing session started");

    let mut typist = CharacterTypist::new(language);

    // Bound the real cursor back to the top-left so the believed state and
    // the keyboard agree before the first character.
    if let Err(e) = typist.reset(driver.as_mut()) {
        tracing::error!(error = %e, "session failed during initial reset");
        let _ = events.unbounded_send(SessionEvent::Failed(e.to_string()));
        return;
    }

    for (index, &ch) in chars.iter().enumerate() {
        if cancel.load(Ordering::SeqCst) {
            tracing::info!(index, total, "typing session stopped");
            // Best effort: leave the keyboard in its starting state for the
            // next session.
            let _ = typist.reset(driver.as_mut());
            let _ = events.unbounded_send(SessionEvent::Stopped);
            return;
        }

        let _ = events.unbounded_send(SessionEvent::Progress { index, total });

        let next_ch = chars.get(index + 1).copied();
        match typist.type_character(driver.as_mut(), ch, next_ch) {
            Ok(TypeOutcome::Typed) => {}
            Ok(TypeOutcome::Skipped) => {
                let _ = events.unbounded_send(SessionEvent::CharacterSkipped {
                    index,
                    character: ch,
                });
            }
            Err(e) => {
                tracing::error!(index, error = %e, "typing session aborted");
                let _ = events.unbounded_send(SessionEvent::Failed(e.to_string()));
                return;
            }
        }

        thread::sleep(timings.poll_interval);
    }

    if let Err(e) = typist.reset(driver.as_mut()) {
        tracing::error!(error = %e, "session failed during final reset");
        let _ = events.unbounded_send(SessionEvent::Failed(e.to_string()));
        return;
    }

    tracing::info!(total, "typing session completed");
    let _ = events.unbounded_send(SessionEvent::Completed);
}

// ============================================================================
// Tests
// ============================================================================
