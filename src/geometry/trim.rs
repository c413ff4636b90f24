use kurbo::{ParamCurve, ParamCurveArclen, PathSeg};

use crate::foundation::core::{BezPath, Point};
use crate::geometry::measure::ARCLEN_ACCURACY;

/// Return the leading portion of `path` covering `progress` (in `[0, 1]`) of its `total_len`.
///
/// Renderers use this to draw a partially revealed stroke. Subpath breaks are preserved, and
/// `progress >= 1` returns the path unchanged (closing segments included).
pub fn trim_path(path: &BezPath, total_len: f64, progress: f64) -> BezPath {
    let progress = progress.clamp(0.0, 1.0);
    if progress >= 1.0 {
        return path.clone();
    }
    let mut out = BezPath::new();
    if progress <= 0.0 || total_len <= 0.0 {
        return out;
    }

    let mut remaining = total_len * progress;
    let mut pen: Option<Point> = None;
    for seg in path.segments() {
        if remaining <= 0.0 {
            break;
        }
        let seg_len = seg.arclen(ARCLEN_ACCURACY);
        let piece = if seg_len <= remaining {
            seg
        } else {
            let t = seg.inv_arclen(remaining, ARCLEN_ACCURACY);
            seg.subsegment(0.0..t)
        };
        remaining -= seg_len;

        let start = piece.start();
        if pen != Some(start) {
            out.move_to(start);
        }
        push_seg(&mut out, piece);
        pen = Some(piece.end());
    }
    out
}

fn push_seg(out: &mut BezPath, seg: PathSeg) {
    match seg {
        PathSeg::Line(l) => out.line_to(l.p1),
        PathSeg::Quad(q) => out.quad_to(q.p1, q.p2),
        PathSeg::Cubic(c) => out.curve_to(c.p1, c.p2, c.p3),
    }
}

#[cfg(test)]
#[path = "../../tests/unit/geometry/trim.rs"]
mod tests;
