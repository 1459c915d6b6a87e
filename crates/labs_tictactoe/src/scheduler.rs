//! Deferred computer moves.
//!
//! The computer's reply is applied after a short delay so the human's mark
//! renders first. Correctness never depends on the timer: the task carries
//! an [`AiTicket`] and the session refuses tickets from an earlier game.

use super::{AiTicket, GameSession};
use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Duration;
use tokio::task::JoinHandle;
use tracing::{debug, instrument};

/// Session handle shared between the UI loop and deferred tasks.
pub type SharedSession = Arc<Mutex<GameSession>>;

/// Locks the session, recovering from a poisoned lock.
pub fn lock_session(session: &SharedSession) -> MutexGuard<'_, GameSession> {
    session
        .lock()
        .unwrap_or_else(|poisoned| poisoned.into_inner())
}

/// Schedules at most one pending computer move.
#[derive(Debug)]
pub struct AiScheduler {
    delay: Duration,
    pending: Option<JoinHandle<()>>,
}

impl AiScheduler {
    /// Creates a scheduler that waits `delay` before each computer move.
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            pending: None,
        }
    }

    /// Returns the configured delay.
    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Schedules the computer move for `ticket`, replacing any pending one.
    ///
    /// With a zero delay the move is applied before this returns. Otherwise
    /// a Tokio task is spawned, so this must be called inside a runtime.
    #[instrument(skip(self, session))]
    pub fn schedule(&mut self, session: &SharedSession, ticket: AiTicket) {
        self.cancel();

        if self.delay.is_zero() {
            let applied = lock_session(session).apply_computer_move(ticket);
            debug!(applied, "Computer move applied immediately");
            return;
        }

        let session = Arc::clone(session);
        let delay = self.delay;
        self.pending = Some(tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            let applied = lock_session(&session).apply_computer_move(ticket);
            debug!(applied, game_id = ticket.game_id(), "Deferred computer move fired");
        }));
    }

    /// Returns true while a scheduled move has not fired yet.
    pub fn is_pending(&self) -> bool {
        self.pending.as_ref().is_some_and(|handle| !handle.is_finished())
    }

    /// Abandons the pending move, if any.
    pub fn cancel(&mut self) {
        if let Some(handle) = self.pending.take() {
            handle.abort();
        }
    }
}

impl Drop for AiScheduler {
    fn drop(&mut self) {
        self.cancel();
    }
}
