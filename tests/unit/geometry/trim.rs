use super::*;
use crate::geometry::measure::measure_path;

fn polyline() -> BezPath {
    let mut p = BezPath::new();
    p.move_to((0.0, 0.0));
    p.line_to((10.0, 0.0));
    p.line_to((10.0, 10.0));
    p
}

#[test]
fn zero_progress_is_empty_and_full_progress_is_identity() {
    let p = polyline();
    assert!(trim_path(&p, 20.0, 0.0).elements().is_empty());
    assert_eq!(trim_path(&p, 20.0, 1.0), p);
    assert_eq!(trim_path(&p, 20.0, 3.0), p);
}

#[test]
fn half_progress_stops_at_the_corner() {
    let p = polyline();
    let half = trim_path(&p, 20.0, 0.5);
    assert!((measure_path(&half).unwrap() - 10.0).abs() < 1e-6);
}

#[test]
fn trimmed_length_tracks_progress_on_curves() {
    let p = BezPath::from_svg("M0 0 C10 20 30 -20 40 0").unwrap();
    let total = measure_path(&p).unwrap();
    for progress in [0.1, 0.25, 0.6, 0.9] {
        let part = trim_path(&p, total, progress);
        let len = measure_path(&part).unwrap();
        assert!(
            (len - total * progress).abs() < 1e-2,
            "progress={progress} len={len} total={total}"
        );
    }
}

#[test]
fn subpath_breaks_are_preserved() {
    let p = BezPath::from_svg("M0 0 L10 0 M20 0 L30 0").unwrap();
    let part = trim_path(&p, 20.0, 0.75);
    let moves = part
        .elements()
        .iter()
        .filter(|el| matches!(el, kurbo::PathEl::MoveTo(_)))
        .count();
    assert_eq!(moves, 2);
    assert!((measure_path(&part).unwrap() - 15.0).abs() < 1e-6);
}

#[test]
fn degenerate_total_length_yields_nothing_until_complete() {
    let mut p = BezPath::new();
    p.move_to((1.0, 1.0));
    assert!(trim_path(&p, 0.0, 0.5).elements().is_empty());
    assert_eq!(trim_path(&p, 0.0, 1.0), p);
}
