/// Pause between a path's stroke completing and its fill starting to ramp, in seconds.
pub const FILL_SETTLE_DELAY: f64 = 0.1;

/// Duration of the fill opacity ramp from 0 to 1, in seconds.
pub const FILL_RAMP_DURATION: f64 = 0.3;

/// Per-path fill timing relative to that path's own stroke end.
///
/// Independent of path length, so paths that finish stroking early also fill early.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct FillWindow {
    /// Delay after stroke completion before the ramp begins.
    pub settle: f64,
    /// Ramp length.
    pub ramp: f64,
}

impl FillWindow {
    /// The engine's fixed settle delay and ramp.
    pub fn standard() -> Self {
        Self {
            settle: FILL_SETTLE_DELAY,
            ramp: FILL_RAMP_DURATION,
        }
    }

    /// No delay and no ramp; fills snap to 1 when the stroke completes.
    pub fn immediate() -> Self {
        Self {
            settle: 0.0,
            ramp: 0.0,
        }
    }

    /// Settle plus ramp.
    pub fn total(&self) -> f64 {
        self.settle + self.ramp
    }

    /// Fill opacity at session time `t` for a path whose stroke completes at `stroke_end`.
    ///
    /// 0 before `stroke_end + settle`, linear up to 1 over `ramp`, 1 afterwards.
    pub fn opacity(&self, t: f64, stroke_end: f64) -> f64 {
        if self.is_done(t, stroke_end) {
            return 1.0;
        }
        let ramp_start = stroke_end + self.settle;
        if t < ramp_start {
            return 0.0;
        }
        if self.ramp <= 0.0 {
            return 1.0;
        }
        ((t - ramp_start) / self.ramp).clamp(0.0, 1.0)
    }

    /// Return `true` once the fill has fully ramped in.
    pub fn is_done(&self, t: f64, stroke_end: f64) -> bool {
        t >= stroke_end + self.total()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/reveal/fill.rs"]
mod tests;
