use super::*;

fn line(len: f64) -> BezPath {
    let mut p = BezPath::new();
    p.move_to((0.0, 0.0));
    p.line_to((len, 0.0));
    p
}

#[test]
fn straight_lines_measure_exactly() {
    let g = measure_paths(&[line(50.0), line(100.0), line(20.0)]).unwrap();
    assert_eq!(g.lengths(), &[50.0, 100.0, 20.0]);
    assert_eq!(g.total_length(), 170.0);
    assert_eq!(g.len(), 3);
}

#[test]
fn closed_square_includes_closing_edge() {
    let mut p = BezPath::new();
    p.move_to((0.0, 0.0));
    p.line_to((10.0, 0.0));
    p.line_to((10.0, 10.0));
    p.line_to((0.0, 10.0));
    p.close_path();
    let len = measure_path(&p).unwrap();
    assert!((len - 40.0).abs() < 1e-9);
}

#[test]
fn quarter_circle_curve_is_close_to_analytic() {
    let p = BezPath::from_svg("M10 0 A10 10 0 0 1 0 10").unwrap();
    let len = measure_path(&p).unwrap();
    let expected = std::f64::consts::PI * 10.0 / 2.0;
    assert!((len - expected).abs() < 0.05, "len={len}");
}

#[test]
fn degenerate_paths_have_zero_length() {
    let mut point = BezPath::new();
    point.move_to((3.0, 4.0));
    assert_eq!(measure_path(&point).unwrap(), 0.0);

    let mut dot = BezPath::new();
    dot.move_to((3.0, 4.0));
    dot.line_to((3.0, 4.0));
    assert_eq!(measure_path(&dot).unwrap(), 0.0);

    assert_eq!(measure_path(&BezPath::new()).unwrap(), 0.0);
}

#[test]
fn non_finite_path_is_a_geometry_error_with_index() {
    let mut bad = BezPath::new();
    bad.move_to((0.0, 0.0));
    bad.line_to((f64::INFINITY, 0.0));
    let err = measure_paths(&[line(1.0), bad]).unwrap_err();
    assert!(err.is_geometry());
    assert!(err.to_string().contains("path 1"));
}

#[test]
fn from_lengths_rejects_negative() {
    assert!(IconGeometry::from_lengths(vec![1.0, -1.0]).is_err());
    assert!(IconGeometry::from_lengths(vec![0.0, 2.0]).is_ok());
}
