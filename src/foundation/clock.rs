use std::cell::Cell;
use std::rc::Rc;
use std::time::Instant;

/// Source of host time, in seconds.
///
/// Playback reads the clock when a session starts and on every `tick`. Readings must be
/// non-decreasing; sessions clamp any backwards step.
pub trait Clock {
    /// Current time in seconds since an arbitrary, fixed origin.
    fn now(&self) -> f64;
}

/// Wall clock backed by [`Instant`], with its origin at construction.
#[derive(Clone, Copy, Debug)]
pub struct SystemClock {
    origin: Instant,
}

impl SystemClock {
    /// Create a clock whose origin is "now".
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for SystemClock {
    fn now(&self) -> f64 {
        self.origin.elapsed().as_secs_f64()
    }
}

/// Synthetic clock advanced explicitly by the caller.
///
/// Clones share the same time cell, so a test can keep one clone and hand the other to a
/// [`crate::PlaybackHandle`].
#[derive(Clone, Debug, Default)]
pub struct ManualClock {
    now: Rc<Cell<f64>>,
}

impl ManualClock {
    /// Create a clock starting at `t` seconds.
    pub fn starting_at(t: f64) -> Self {
        Self {
            now: Rc::new(Cell::new(t)),
        }
    }

    /// Jump to absolute time `t`.
    pub fn set(&self, t: f64) {
        self.now.set(t);
    }

    /// Move time forward by `dt` seconds.
    pub fn advance(&self, dt: f64) {
        self.now.set(self.now.get() + dt);
    }
}

impl Clock for ManualClock {
    fn now(&self) -> f64 {
        self.now.get()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/clock.rs"]
mod tests;
