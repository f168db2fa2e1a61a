//! Deferred computer moves.

use super::controller::Session;
use super::phase::Phase;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;
use tokio::task::JoinHandle;
use tokio::time::sleep;
use tracing::{debug, instrument, warn};

/// A session shared between the input loop and pending computer moves.
pub type SharedSession = Arc<Mutex<Session>>;

/// Wraps a session for sharing.
pub fn share(session: Session) -> SharedSession {
    Arc::new(Mutex::new(session))
}

/// Locks the session, recovering the data if a previous holder panicked.
pub fn lock(session: &SharedSession) -> MutexGuard<'_, Session> {
    session.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Plays the computer's move after `delay`, unless the session moved on.
///
/// The session's revision is recorded now. When the timer fires the move is
/// made only if the session is still at that revision and waiting for the
/// computer, so a reset during the delay cancels it. The task resolves to the
/// cell played, or `None` when it stood down.
///
/// Must be called from within a tokio runtime.
#[instrument(skip(session))]
pub fn schedule_computer_move(session: SharedSession, delay: Duration) -> JoinHandle<Option<usize>> {
    let ticket = lock(&session).revision();
    debug!(ticket, "Scheduling computer move");

    tokio::spawn(async move {
        sleep(delay).await;

        let mut guard = lock(&session);
        if guard.revision() != ticket || guard.phase() != Phase::AwaitingComputer {
            debug!(
                ticket,
                revision = guard.revision(),
                phase = %guard.phase(),
                "Session changed during delay, skipping computer move"
            );
            return None;
        }

        match guard.play_computer() {
            Ok(cell) => Some(cell),
            Err(e) => {
                warn!(error = %e, "Deferred computer move rejected");
                None
            }
        }
    })
}
