use crate::reveal::schedule::RevealSchedule;
use crate::reveal::state::{PathState, all_complete, sample_path};

/// Identifier of one playback session. Strictly increasing per handle.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct SessionId(pub u64);

/// One live run of the reveal timeline.
///
/// A session maps host time to session time and writes the handle's path states when sampled.
/// Session time never moves backwards, which keeps stroke progress monotonic even if the host
/// clock stutters.
#[derive(Clone, Debug, PartialEq)]
pub struct PlaybackSession {
    id: SessionId,
    started_at: f64,
    elapsed: f64,
    frozen: bool,
    finished: bool,
}

impl PlaybackSession {
    pub(crate) fn start(id: SessionId, started_at: f64) -> Self {
        Self {
            id,
            started_at,
            elapsed: 0.0,
            frozen: false,
            finished: false,
        }
    }

    /// Session identifier.
    pub fn id(&self) -> SessionId {
        self.id
    }

    /// Host time at which the session started.
    pub fn started_at(&self) -> f64 {
        self.started_at
    }

    /// Latest sampled session time, in seconds since start.
    pub fn elapsed(&self) -> f64 {
        self.elapsed
    }

    /// Return `true` while the session is held on its current frame.
    pub fn is_frozen(&self) -> bool {
        self.frozen
    }

    /// Return `true` once whole-icon completion has been observed.
    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// Move session time to host time `now` (clamped to never go backwards; frozen sessions hold).
    pub(crate) fn advance(&mut self, now: f64) -> f64 {
        if !self.frozen {
            let t = now - self.started_at;
            if t.is_finite() && t > self.elapsed {
                self.elapsed = t;
            }
        }
        self.elapsed
    }

    /// Hold the current frame.
    pub(crate) fn freeze(&mut self, now: f64) {
        self.advance(now);
        self.frozen = true;
    }

    /// Sample every path at host time `now` into `states`.
    ///
    /// Returns `true` exactly once: on the first sample where every path is complete.
    pub(crate) fn sample_into(
        &mut self,
        schedule: &RevealSchedule,
        now: f64,
        states: &mut [PathState],
    ) -> bool {
        let t = self.advance(now);
        for (i, st) in states.iter_mut().enumerate() {
            *st = sample_path(schedule, i, t);
        }
        if !self.finished && all_complete(states) {
            self.finished = true;
            return true;
        }
        false
    }
}

#[cfg(test)]
#[path = "../../tests/unit/playback/session.rs"]
mod tests;
