use kurbo::ParamCurveArclen;

use crate::foundation::core::{BezPath, bezpath_is_finite};
use crate::foundation::error::{RevealError, RevealResult};

/// Absolute accuracy (in user units) requested from kurbo's arc-length solver.
pub const ARCLEN_ACCURACY: f64 = 1e-4;

/// Cached per-path lengths of an icon, measured once at handle creation.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct IconGeometry {
    lengths: Vec<f64>,
}

impl IconGeometry {
    /// Wrap already-measured lengths.
    pub fn from_lengths(lengths: Vec<f64>) -> RevealResult<Self> {
        if let Some((i, l)) = lengths
            .iter()
            .enumerate()
            .find(|(_, l)| !l.is_finite() || **l < 0.0)
        {
            return Err(RevealError::geometry(format!(
                "path {i} has invalid length {l}"
            )));
        }
        Ok(Self { lengths })
    }

    /// Per-path lengths, in icon order.
    pub fn lengths(&self) -> &[f64] {
        &self.lengths
    }

    /// Number of measured paths.
    pub fn len(&self) -> usize {
        self.lengths.len()
    }

    /// Return `true` when the icon has no paths.
    pub fn is_empty(&self) -> bool {
        self.lengths.is_empty()
    }

    /// Sum of all path lengths.
    pub fn total_length(&self) -> f64 {
        self.lengths.iter().sum()
    }
}

/// Measure the arc length of a single path.
///
/// A path with no drawable segments (a lone `MoveTo`, or coincident points) has length 0.
pub fn measure_path(path: &BezPath) -> RevealResult<f64> {
    if !bezpath_is_finite(path) {
        return Err(RevealError::geometry("path has non-finite coordinates"));
    }
    let len: f64 = path
        .segments()
        .map(|seg| seg.arclen(ARCLEN_ACCURACY))
        .sum();
    if !len.is_finite() {
        return Err(RevealError::geometry("path length is not finite"));
    }
    Ok(len.max(0.0))
}

/// Measure every path of an icon, failing on the first unmeasurable one.
#[tracing::instrument(skip(paths), fields(paths = paths.len()))]
pub fn measure_paths(paths: &[BezPath]) -> RevealResult<IconGeometry> {
    let mut lengths = Vec::with_capacity(paths.len());
    for (i, path) in paths.iter().enumerate() {
        let len = measure_path(path).map_err(|e| match e {
            RevealError::Geometry(msg) => RevealError::geometry(format!("path {i}: {msg}")),
            other => other,
        })?;
        lengths.push(len);
    }
    tracing::debug!(total = lengths.iter().sum::<f64>(), "measured icon geometry");
    Ok(IconGeometry { lengths })
}

#[cfg(test)]
#[path = "../../tests/unit/geometry/measure.rs"]
mod tests;
