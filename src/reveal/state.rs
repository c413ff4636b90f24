use crate::reveal::schedule::RevealSchedule;
use crate::reveal::stroke::stroke_progress;

/// Reveal phase of one path.
///
/// Phases only move forward (`Idle -> Stroking -> [Filling ->] Complete`) until a reset.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize,
)]
pub enum Phase {
    /// Not started (or reset).
    #[default]
    Idle,
    /// Outline is being drawn.
    Stroking,
    /// Outline done; fill settling or ramping in.
    Filling,
    /// Fully revealed.
    Complete,
}

/// Animation state of one path, as exposed to renderers each frame.
#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize)]
pub struct PathState {
    /// Measured path length.
    pub length: f64,
    /// Drawn fraction of the stroke, in `[0, 1]`.
    pub progress: f64,
    /// Fill opacity, in `[0, 1]`.
    pub fill_opacity: f64,
    /// Current phase.
    pub phase: Phase,
}

impl PathState {
    /// Fresh idle state for a path of `length`.
    pub fn idle(length: f64) -> Self {
        Self {
            length,
            ..Self::default()
        }
    }

    /// Fully drawn (and, when `filled`, fully filled) state.
    pub fn complete(length: f64, filled: bool) -> Self {
        Self {
            length,
            progress: 1.0,
            fill_opacity: if filled { 1.0 } else { 0.0 },
            phase: Phase::Complete,
        }
    }

    /// Clear progress, fill and phase. Length is kept.
    pub fn reset(&mut self) {
        *self = Self::idle(self.length);
    }

    /// Return `true` once this path is `Complete`.
    pub fn is_complete(&self) -> bool {
        self.phase == Phase::Complete
    }
}

/// State of path `i` at session time `t`.
///
/// Pure in `t`: the stroke animator supplies progress and, when enabled, the fill window supplies
/// opacity after this path's own stroke end.
pub(crate) fn sample_path(schedule: &RevealSchedule, i: usize, t: f64) -> PathState {
    let timing = &schedule.timings()[i];
    if t < timing.start {
        return PathState::idle(timing.length);
    }

    let stroke_end = timing.stroke_end();
    if t < stroke_end {
        return PathState {
            length: timing.length,
            progress: stroke_progress(t, timing, schedule.easing()),
            fill_opacity: 0.0,
            phase: Phase::Stroking,
        };
    }

    match schedule.fill() {
        None => PathState::complete(timing.length, false),
        Some(window) if window.is_done(t, stroke_end) => PathState::complete(timing.length, true),
        Some(window) => PathState {
            length: timing.length,
            progress: 1.0,
            fill_opacity: window.opacity(t, stroke_end),
            phase: Phase::Filling,
        },
    }
}

/// Return `true` when every path is `Complete` (vacuously true for an empty icon).
pub fn all_complete(states: &[PathState]) -> bool {
    states.iter().all(PathState::is_complete)
}

#[cfg(test)]
#[path = "../../tests/unit/reveal/state.rs"]
mod tests;
