use crate::animation::ease::Ease;
use crate::reveal::schedule::PathTiming;

/// Drawn fraction of a path's stroke at session time `t`.
///
/// `easing(clamp((t - start) / duration, 0, 1))`. A pure function of `t`, so frames can be sampled
/// in any order without drift. Zero-duration paths jump straight to 1 at `t >= start`.
pub fn stroke_progress(t: f64, timing: &PathTiming, easing: Ease) -> f64 {
    if t < timing.start {
        return 0.0;
    }
    if timing.duration <= 0.0 {
        return 1.0;
    }
    let raw = ((t - timing.start) / timing.duration).clamp(0.0, 1.0);
    easing.apply(raw)
}

#[cfg(test)]
#[path = "../../tests/unit/reveal/stroke.rs"]
mod tests;
