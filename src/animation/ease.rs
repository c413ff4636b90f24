use crate::foundation::error::{RevealError, RevealResult};

/// Easing curves mapping normalized stroke time to drawn progress.
///
/// Every variant is monotonic non-decreasing on `[0, 1]` with `apply(0) == 0` and
/// `apply(1) == 1`, which keeps stroke progress monotonic while a path is stroking.
#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub enum Ease {
    /// Linear interpolation.
    Linear,
    /// Quadratic ease-in.
    InQuad,
    /// Quadratic ease-out.
    OutQuad,
    /// Quadratic ease-in/out.
    InOutQuad,
    /// Cubic ease-in.
    InCubic,
    /// Cubic ease-out.
    #[default]
    OutCubic,
    /// Cubic ease-in/out.
    InOutCubic,
    /// CSS-style `cubic-bezier(x1, y1, x2, y2)` timing curve.
    CubicBezier([f64; 4]),
}

impl Ease {
    /// Apply this easing function to normalized progress `t` in `[0, 1]`.
    pub fn apply(self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Self::Linear => t,
            Self::InQuad => t * t,
            Self::OutQuad => 1.0 - (1.0 - t) * (1.0 - t),
            Self::InOutQuad => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    1.0 - ((-2.0 * t + 2.0).powi(2) / 2.0)
                }
            }
            Self::InCubic => t * t * t,
            Self::OutCubic => 1.0 - (1.0 - t).powi(3),
            Self::InOutCubic => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    1.0 - ((-2.0 * t + 2.0).powi(3) / 2.0)
                }
            }
            Self::CubicBezier([x1, y1, x2, y2]) => cubic_bezier(x1, y1, x2, y2, t),
        }
    }

    /// Reject curves that are not monotonic functions of time.
    pub fn validate(self) -> RevealResult<()> {
        if let Self::CubicBezier(c) = self {
            if c.iter().any(|v| !v.is_finite()) {
                return Err(RevealError::config("cubic-bezier control points must be finite"));
            }
            if c.iter().any(|v| !(0.0..=1.0).contains(v)) {
                return Err(RevealError::config(
                    "cubic-bezier control points must lie in [0, 1] to stay monotonic",
                ));
            }
        }
        Ok(())
    }
}

fn cubic_bezier(x1: f64, y1: f64, x2: f64, y2: f64, t: f64) -> f64 {
    if t <= 0.0 {
        return 0.0;
    }
    if t >= 1.0 {
        return 1.0;
    }

    // Bernstein form with fixed endpoints (0,0) and (1,1).
    fn coord(p1: f64, p2: f64, s: f64) -> f64 {
        let u = 1.0 - s;
        3.0 * u * u * s * p1 + 3.0 * u * s * s * p2 + s * s * s
    }

    // x(s) is monotonic for x1, x2 in [0, 1]; bisection is exact enough for frame sampling.
    let (mut lo, mut hi) = (0.0_f64, 1.0_f64);
    for _ in 0..48 {
        let mid = 0.5 * (lo + hi);
        if coord(x1, x2, mid) < t {
            lo = mid;
        } else {
            hi = mid;
        }
    }
    coord(y1, y2, 0.5 * (lo + hi)).clamp(0.0, 1.0)
}

#[cfg(test)]
#[path = "../../tests/unit/animation/ease.rs"]
mod tests;
