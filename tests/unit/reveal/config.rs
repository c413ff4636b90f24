use super::*;

#[test]
fn defaults_are_valid() {
    AnimationConfig::default().validate().unwrap();
}

#[test]
fn non_positive_draw_speed_is_a_config_error() {
    for draw_speed in [0.0, -1.0, f64::NAN, f64::INFINITY] {
        let cfg = AnimationConfig {
            draw_speed,
            ..Default::default()
        };
        let err = cfg.validate().unwrap_err();
        assert!(err.is_config(), "{draw_speed}: {err}");
    }
}

#[test]
fn negative_stagger_is_rejected_but_zero_is_fine() {
    let bad = AnimationConfig {
        stagger_delay: -0.01,
        ..Default::default()
    };
    assert!(bad.validate().unwrap_err().is_config());

    let ok = AnimationConfig {
        stagger_delay: 0.0,
        ..Default::default()
    };
    ok.validate().unwrap();
}

#[test]
fn normalization_and_cap_are_checked() {
    let bad_ref = AnimationConfig {
        normalization: Normalization::Sqrt { reference: 0.0 },
        ..Default::default()
    };
    assert!(bad_ref.validate().is_err());

    let bad_cap = AnimationConfig {
        max_duration: Some(0.0),
        ..Default::default()
    };
    assert!(bad_cap.validate().is_err());

    let uncapped = AnimationConfig {
        max_duration: None,
        ..Default::default()
    };
    uncapped.validate().unwrap();
}

#[test]
fn normalization_shapes() {
    let lin = Normalization::Linear { reference: 100.0 };
    assert_eq!(lin.apply(50.0), 0.5);
    assert_eq!(lin.apply(-5.0), 0.0);
    let sqrt = Normalization::Sqrt { reference: 100.0 };
    assert_eq!(sqrt.apply(400.0), 2.0);
}

#[test]
fn partial_json_uses_defaults() {
    let cfg = AnimationConfig::from_reader(
        r#"{ "draw_speed": 2.0, "loop": true, "trigger_mode": "Hover" }"#.as_bytes(),
    )
    .unwrap();
    assert_eq!(cfg.draw_speed, 2.0);
    assert!(cfg.looping);
    assert_eq!(cfg.trigger_mode, TriggerMode::Hover);
    assert_eq!(cfg.stagger_delay, 0.1);
    assert_eq!(cfg.hover_leave, HoverLeavePolicy::Finish);
}

#[test]
fn unknown_options_are_rejected() {
    assert!(AnimationConfig::from_reader(r#"{ "speed": 1 }"#.as_bytes()).is_err());
}

#[test]
fn bad_easing_fails_validation() {
    let cfg = AnimationConfig {
        easing: Ease::CubicBezier([0.5, -1.0, 0.5, 2.0]),
        ..Default::default()
    };
    assert!(cfg.validate().unwrap_err().is_config());
}
