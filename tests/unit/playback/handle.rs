use std::cell::RefCell;
use std::rc::Rc;

use super::*;
use crate::animation::ease::Ease;
use crate::foundation::clock::ManualClock;
use crate::foundation::core::BezPath;
use crate::reveal::config::HoverLeavePolicy;
use crate::reveal::state::Phase;

fn line(len: f64) -> BezPath {
    BezPath::from_svg(&format!("M0 0 L{len} 0")).unwrap()
}

fn icon() -> IconSpec {
    IconSpec::new(vec![line(100.0), line(50.0)])
}

fn cfg(mode: TriggerMode) -> AnimationConfig {
    AnimationConfig {
        draw_speed: 1.0,
        stagger_delay: 0.1,
        fill_after_stroke: false,
        easing: Ease::Linear,
        trigger_mode: mode,
        ..Default::default()
    }
}

fn handle(mode: TriggerMode) -> (PlaybackHandle, ManualClock) {
    let clock = ManualClock::starting_at(0.0);
    let h = PlaybackHandle::with_clock(icon(), cfg(mode), clock.clone()).unwrap();
    (h, clock)
}

#[test]
fn autoplay_starts_session_on_creation() {
    let (mut h, clock) = handle(TriggerMode::Autoplay);
    assert_eq!(h.state(), PlaybackState::Playing);
    assert_eq!(h.active_session().map(|s| s.id()), Some(SessionId(1)));

    clock.set(0.5);
    let paths = h.tick();
    assert!((paths[0].progress - 0.5).abs() < 1e-9);
    assert_eq!(paths[1].phase, Phase::Stroking);
}

#[test]
fn manual_waits_for_play() {
    let (mut h, clock) = handle(TriggerMode::Manual);
    clock.set(5.0);
    assert!(h.tick().iter().all(|p| p.phase == Phase::Idle));
    assert!(h.active_session().is_none());

    h.play();
    clock.advance(0.25);
    assert!((h.tick()[0].progress - 0.25).abs() < 1e-9);
}

#[test]
fn invalid_config_is_rejected() {
    let bad = AnimationConfig {
        draw_speed: 0.0,
        ..Default::default()
    };
    let err = PlaybackHandle::with_clock(icon(), bad, ManualClock::default()).unwrap_err();
    assert!(err.is_config());
}

#[test]
fn completion_fires_listener_once_and_settles() {
    let (mut h, clock) = handle(TriggerMode::Autoplay);
    let events = Rc::new(RefCell::new(Vec::new()));
    let sink = events.clone();
    h.on_complete(move |e| sink.borrow_mut().push(*e));

    clock.set(2.0);
    h.tick();
    clock.set(3.0);
    h.tick();

    assert_eq!(h.state(), PlaybackState::Completed);
    assert_eq!(h.cycles(), 1);
    let events = events.borrow();
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].session, SessionId(1));
    assert_eq!(events[0].cycle, 1);
}

#[test]
fn replay_supersedes_running_session() {
    let (mut h, clock) = handle(TriggerMode::Autoplay);
    clock.set(0.6);
    h.tick();
    h.play();
    assert_eq!(h.active_session().map(|s| s.id()), Some(SessionId(2)));
    assert!(h.paths().iter().all(|p| p.phase == Phase::Idle));

    clock.set(0.7);
    assert!((h.tick()[0].progress - 0.1).abs() < 1e-9);
}

#[test]
fn loop_rearms_after_pause() {
    let clock = ManualClock::starting_at(0.0);
    let config = AnimationConfig {
        looping: true,
        ..cfg(TriggerMode::Autoplay)
    };
    let mut h = PlaybackHandle::with_clock(icon(), config, clock.clone()).unwrap();

    clock.set(1.0);
    h.tick();
    assert_eq!(h.state(), PlaybackState::Completed);
    let due = h.pending_rearm().unwrap().due;
    assert_eq!(due, 1.0 + crate::playback::looping::LOOP_PAUSE);

    clock.set(due);
    h.tick();
    assert_eq!(h.state(), PlaybackState::Playing);
    assert_eq!(h.active_session().map(|s| s.id()), Some(SessionId(2)));
}

#[test]
fn set_loop_false_cancels_pending_rearm() {
    let clock = ManualClock::starting_at(0.0);
    let config = AnimationConfig {
        looping: true,
        ..cfg(TriggerMode::Autoplay)
    };
    let mut h = PlaybackHandle::with_clock(icon(), config, clock.clone()).unwrap();
    clock.set(1.0);
    h.tick();
    assert!(h.pending_rearm().is_some());

    h.set_loop(false);
    clock.set(10.0);
    h.tick();
    assert_eq!(h.state(), PlaybackState::Completed);
    assert_eq!(h.cycles(), 1);
}

#[test]
fn hover_freeze_holds_frame() {
    let clock = ManualClock::starting_at(0.0);
    let config = AnimationConfig {
        hover_leave: HoverLeavePolicy::Freeze,
        ..cfg(TriggerMode::Hover)
    };
    let mut h = PlaybackHandle::with_clock(icon(), config, clock.clone()).unwrap();
    h.pointer_enter();
    clock.set(0.4);
    h.pointer_leave();
    let held = h.paths()[0].progress;
    assert!((held - 0.4).abs() < 1e-9);

    clock.set(5.0);
    assert_eq!(h.tick()[0].progress, held);
    assert!(h.active_session().unwrap().is_frozen());
}

#[test]
fn destroy_is_final() {
    let (mut h, clock) = handle(TriggerMode::Autoplay);
    clock.set(0.5);
    h.tick();
    h.destroy();
    assert!(h.is_destroyed());
    assert!(h.active_session().is_none());

    h.play();
    clock.set(2.0);
    assert!(h.tick().iter().all(|p| p.phase == Phase::Idle));
    assert!(h.active_session().is_none());
}

#[test]
fn unmeasurable_geometry_falls_back_to_static_icon() {
    let mut bad = BezPath::new();
    bad.move_to((0.0, 0.0));
    bad.line_to((f64::NAN, 1.0));
    let icon = IconSpec::new(vec![line(10.0), bad]);
    let mut h =
        PlaybackHandle::with_clock(icon, cfg(TriggerMode::Autoplay), ManualClock::default()).unwrap();

    assert!(h.is_static());
    assert!(h.geometry_fallback().unwrap().is_geometry());
    assert_eq!(h.state(), PlaybackState::Completed);
    assert!(h.tick().iter().all(|p| p.progress == 1.0 && p.is_complete()));
}

#[test]
fn snapshot_reflects_session_time() {
    let (mut h, clock) = handle(TriggerMode::Autoplay);
    clock.set(0.3);
    h.tick();
    let snap = h.snapshot();
    assert_eq!(snap.session, Some(SessionId(1)));
    assert!((snap.time - 0.3).abs() < 1e-12);
    assert_eq!(snap.paths.len(), 2);
}

#[test]
fn static_icon_ignores_triggers_and_never_loops() {
    let mut bad = BezPath::new();
    bad.move_to((0.0, 0.0));
    bad.line_to((f64::NAN, 1.0));
    let clock = ManualClock::starting_at(0.0);
    let config = AnimationConfig {
        looping: true,
        fill_after_stroke: true,
        ..cfg(TriggerMode::Hover)
    };
    let mut h =
        PlaybackHandle::with_clock(IconSpec::new(vec![line(10.0), bad]), config, clock.clone())
            .unwrap();
    let completions = Rc::new(RefCell::new(0u32));
    let sink = completions.clone();
    h.on_complete(move |_| *sink.borrow_mut() += 1);

    let fully_drawn =
        |paths: &[PathState]| paths.iter().all(|p| p.is_complete() && p.fill_opacity == 1.0);

    h.reset();
    assert!(fully_drawn(h.paths()));
    assert!(fully_drawn(h.tick()));

    h.play();
    assert!(fully_drawn(h.paths()));
    h.pointer_enter();
    h.pointer_leave();
    h.set_loop(true);
    assert!(fully_drawn(h.paths()));

    for step in 0..50 {
        clock.set(f64::from(step) * 0.1);
        assert!(fully_drawn(h.tick()));
    }
    assert_eq!(*completions.borrow(), 0);
    assert!(h.active_session().is_none());
    assert!(h.pending_rearm().is_none());
    assert_eq!(h.state(), PlaybackState::Completed);
}
