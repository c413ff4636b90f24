use crate::playback::session::SessionId;

/// Pause between whole-icon completion and the next looped session, in seconds.
pub const LOOP_PAUSE: f64 = 1.0;

/// A scheduled loop restart, owned by the session that completed.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PendingRearm {
    /// Session whose completion scheduled this restart.
    pub session: SessionId,
    /// Host time at which the restart is due.
    pub due: f64,
}

/// Re-arms playback after [`LOOP_PAUSE`] when looping is enabled.
///
/// Holds at most one pending restart. A restart only fires for the session that scheduled it, so a
/// stale timer from a superseded session can never start a second session.
#[derive(Clone, Debug, PartialEq)]
pub struct LoopCoordinator {
    enabled: bool,
    pause: f64,
    pending: Option<PendingRearm>,
}

impl LoopCoordinator {
    /// Create a coordinator with the standard pause.
    pub fn new(enabled: bool) -> Self {
        Self {
            enabled,
            pause: LOOP_PAUSE,
            pending: None,
        }
    }

    /// Return `true` when looping is enabled.
    pub fn enabled(&self) -> bool {
        self.enabled
    }

    /// Enable or disable looping; disabling cancels any pending restart.
    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
        if !enabled {
            self.cancel();
        }
    }

    /// Pending restart, if any.
    pub fn pending(&self) -> Option<PendingRearm> {
        self.pending
    }

    /// Schedule a restart for `session`, which completed at host time `completed_at`.
    pub fn arm(&mut self, session: SessionId, completed_at: f64) {
        if !self.enabled {
            return;
        }
        let due = completed_at + self.pause;
        tracing::debug!(session = session.0, due, "loop re-arm scheduled");
        self.pending = Some(PendingRearm { session, due });
    }

    /// Drop any pending restart.
    pub fn cancel(&mut self) {
        if let Some(p) = self.pending.take() {
            tracing::debug!(session = p.session.0, "loop re-arm cancelled");
        }
    }

    /// Return `true` (and clear the timer) when a restart for `active` is due at `now`.
    ///
    /// A timer belonging to any other session is discarded.
    pub fn poll(&mut self, now: f64, active: Option<SessionId>) -> bool {
        let Some(p) = self.pending else {
            return false;
        };
        if Some(p.session) != active {
            self.pending = None;
            return false;
        }
        if now >= p.due {
            self.pending = None;
            return true;
        }
        false
    }
}

#[cfg(test)]
#[path = "../../tests/unit/playback/looping.rs"]
mod tests;
