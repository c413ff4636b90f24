use super::*;

const ALL: [Ease; 8] = [
    Ease::Linear,
    Ease::InQuad,
    Ease::OutQuad,
    Ease::InOutQuad,
    Ease::InCubic,
    Ease::OutCubic,
    Ease::InOutCubic,
    Ease::CubicBezier([0.42, 0.0, 0.58, 1.0]),
];

#[test]
fn endpoints_are_stable() {
    for ease in ALL {
        assert_eq!(ease.apply(0.0), 0.0, "{ease:?}");
        assert_eq!(ease.apply(1.0), 1.0, "{ease:?}");
    }
}

#[test]
fn monotonic_spot_check() {
    for ease in ALL {
        let mut prev = 0.0;
        for i in 1..=20 {
            let v = ease.apply(f64::from(i) / 20.0);
            assert!(v >= prev, "{ease:?} not monotonic at step {i}");
            prev = v;
        }
    }
}

#[test]
fn out_of_range_input_is_clamped() {
    assert_eq!(Ease::OutCubic.apply(-3.0), 0.0);
    assert_eq!(Ease::InQuad.apply(7.0), 1.0);
}

#[test]
fn linear_cubic_bezier_tracks_identity() {
    let ease = Ease::CubicBezier([0.25, 0.25, 0.75, 0.75]);
    for t in [0.1, 0.33, 0.5, 0.9] {
        assert!((ease.apply(t) - t).abs() < 1e-6);
    }
}

#[test]
fn validate_rejects_non_monotonic_bezier() {
    assert!(Ease::CubicBezier([0.68, -0.55, 0.27, 1.55]).validate().is_err());
    assert!(Ease::CubicBezier([0.0, 0.0, f64::NAN, 1.0]).validate().is_err());
    assert!(Ease::CubicBezier([0.4, 0.0, 0.2, 1.0]).validate().is_ok());
    assert!(Ease::OutCubic.validate().is_ok());
}

#[test]
fn serde_uses_variant_names() {
    let s = serde_json::to_string(&Ease::InOutQuad).unwrap();
    assert_eq!(s, "\"InOutQuad\"");
    let e: Ease = serde_json::from_str(r#"{"CubicBezier":[0.4,0.0,0.2,1.0]}"#).unwrap();
    assert_eq!(e, Ease::CubicBezier([0.4, 0.0, 0.2, 1.0]));
}
