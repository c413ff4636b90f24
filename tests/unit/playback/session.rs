use super::*;
use crate::animation::ease::Ease;
use crate::geometry::measure::IconGeometry;
use crate::reveal::config::AnimationConfig;
use crate::reveal::state::Phase;

fn schedule() -> RevealSchedule {
    let cfg = AnimationConfig {
        draw_speed: 1.0,
        stagger_delay: 0.0,
        fill_after_stroke: false,
        easing: Ease::Linear,
        ..Default::default()
    };
    RevealSchedule::new(&IconGeometry::from_lengths(vec![100.0, 50.0]).unwrap(), &cfg)
}

#[test]
fn session_time_is_relative_to_start() {
    let s = schedule();
    let mut sess = PlaybackSession::start(SessionId(1), 10.0);
    let mut states = vec![PathState::default(); 2];
    assert!(!sess.sample_into(&s, 10.25, &mut states));
    assert_eq!(sess.elapsed(), 0.25);
    assert!((states[0].progress - 0.25).abs() < 1e-12);
    assert!((states[1].progress - 0.5).abs() < 1e-12);
}

#[test]
fn backwards_host_time_does_not_rewind() {
    let s = schedule();
    let mut sess = PlaybackSession::start(SessionId(1), 0.0);
    let mut states = vec![PathState::default(); 2];
    sess.sample_into(&s, 0.6, &mut states);
    let before = states[0].progress;
    sess.sample_into(&s, 0.2, &mut states);
    assert_eq!(states[0].progress, before);
    assert_eq!(sess.elapsed(), 0.6);
}

#[test]
fn completion_is_reported_once() {
    let s = schedule();
    let mut sess = PlaybackSession::start(SessionId(3), 0.0);
    let mut states = vec![PathState::default(); 2];
    assert!(sess.sample_into(&s, 2.0, &mut states));
    assert!(sess.is_finished());
    assert!(states.iter().all(|p| p.phase == Phase::Complete));
    assert!(!sess.sample_into(&s, 3.0, &mut states));
}

#[test]
fn frozen_session_holds_its_frame() {
    let s = schedule();
    let mut sess = PlaybackSession::start(SessionId(1), 0.0);
    let mut states = vec![PathState::default(); 2];
    sess.freeze(0.4);
    assert!(sess.is_frozen());
    sess.sample_into(&s, 5.0, &mut states);
    assert_eq!(sess.elapsed(), 0.4);
    assert_eq!(states[0].phase, Phase::Stroking);
}
