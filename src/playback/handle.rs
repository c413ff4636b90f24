use crate::foundation::clock::{Clock, SystemClock};
use crate::foundation::error::{RevealError, RevealResult};
use crate::geometry::measure::{IconGeometry, measure_paths};
use crate::icon::spec::IconSpec;
use crate::playback::looping::{LoopCoordinator, PendingRearm};
use crate::playback::session::{PlaybackSession, SessionId};
use crate::playback::trigger::{PlaybackState, TriggerAction, TriggerController, TriggerEvent};
use crate::render::backend::FrameSnapshot;
use crate::reveal::config::{AnimationConfig, TriggerMode};
use crate::reveal::schedule::RevealSchedule;
use crate::reveal::state::PathState;

/// Delivered to completion listeners each time the whole icon is revealed.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct CompletionEvent {
    /// Session that completed.
    pub session: SessionId,
    /// 1-based count of completions on this handle (one per loop cycle).
    pub cycle: u64,
    /// Host time at which completion was observed.
    pub at: f64,
}

/// Completion listener registered with [`PlaybackHandle::on_complete`].
pub type CompletionCallback = Box<dyn FnMut(&CompletionEvent)>;

/// Animation controller for one icon instance.
///
/// The handle exclusively owns the per-path state of its icon. At most one [`PlaybackSession`]
/// exists at a time; starting a new one cancels the previous session's loop timer and resets every
/// path before the new session writes anything. The host drives the handle by calling
/// [`PlaybackHandle::tick`] once per rendered frame.
pub struct PlaybackHandle {
    icon: IconSpec,
    config: AnimationConfig,
    geometry: IconGeometry,
    schedule: RevealSchedule,
    paths: Vec<PathState>,
    trigger: TriggerController,
    looper: LoopCoordinator,
    session: Option<PlaybackSession>,
    next_session: u64,
    cycles: u64,
    listeners: Vec<CompletionCallback>,
    fallback: Option<RevealError>,
    clock: Box<dyn Clock>,
    destroyed: bool,
}

impl PlaybackHandle {
    /// Create a handle driven by the system clock.
    pub fn new(icon: IconSpec, config: AnimationConfig) -> RevealResult<Self> {
        Self::with_clock(icon, config, SystemClock::new())
    }

    /// Create a handle driven by `clock`.
    ///
    /// Invalid configuration is returned as a config error. Unmeasurable geometry is not: the handle
    /// degrades to a static icon (instant timeline, fully drawn) and keeps the error for
    /// [`PlaybackHandle::geometry_fallback`]. A static icon ignores `play`, `reset`, pointer events
    /// and looping.
    pub fn with_clock(
        icon: IconSpec,
        config: AnimationConfig,
        clock: impl Clock + 'static,
    ) -> RevealResult<Self> {
        config.validate()?;

        let (geometry, schedule, fallback) = match measure_paths(icon.paths()) {
            Ok(geometry) => {
                let schedule = RevealSchedule::new(&geometry, &config);
                (geometry, schedule, None)
            }
            Err(err) => {
                tracing::warn!(error = %err, "icon geometry unmeasurable; rendering statically");
                let n = icon.path_count();
                (
                    IconGeometry::from_lengths(vec![0.0; n])?,
                    RevealSchedule::instant(n, config.fill_after_stroke),
                    Some(err),
                )
            }
        };

        let (paths, trigger) = if fallback.is_some() {
            (
                geometry
                    .lengths()
                    .iter()
                    .map(|&l| PathState::complete(l, config.fill_after_stroke))
                    .collect(),
                TriggerController::settled(config.trigger_mode, config.hover_leave),
            )
        } else {
            (
                geometry.lengths().iter().map(|&l| PathState::idle(l)).collect(),
                TriggerController::new(config.trigger_mode, config.hover_leave),
            )
        };

        let mut handle = Self {
            icon,
            config,
            geometry,
            schedule,
            paths,
            trigger,
            looper: LoopCoordinator::new(config.looping),
            session: None,
            next_session: 1,
            cycles: 0,
            listeners: Vec::new(),
            fallback,
            clock: Box::new(clock),
            destroyed: false,
        };
        handle.dispatch(TriggerEvent::Created);
        Ok(handle)
    }

    /// Start or restart playback. A running session is superseded.
    pub fn play(&mut self) {
        self.dispatch(TriggerEvent::Play);
    }

    /// Stop playback and return every path to idle. Idempotent.
    pub fn reset(&mut self) {
        self.dispatch(TriggerEvent::Reset);
    }

    /// Pointer entered the icon (restarts playback in hover mode).
    pub fn pointer_enter(&mut self) {
        self.dispatch(TriggerEvent::PointerEnter);
    }

    /// Pointer left the icon (applies the hover-leave policy in hover mode).
    pub fn pointer_leave(&mut self) {
        self.dispatch(TriggerEvent::PointerLeave);
    }

    /// Enable or disable looping. Disabling cancels a pending restart; enabling after completion
    /// schedules one from now.
    pub fn set_loop(&mut self, enabled: bool) {
        if self.destroyed || self.fallback.is_some() {
            return;
        }
        self.config.looping = enabled;
        self.looper.set_enabled(enabled);
        if enabled
            && self.trigger.state() == PlaybackState::Completed
            && self.loop_allowed()
            && let Some(session) = &self.session
        {
            self.looper.arm(session.id(), self.clock.now());
        }
    }

    /// Register a listener invoked on every whole-icon completion.
    pub fn on_complete(&mut self, callback: impl FnMut(&CompletionEvent) + 'static) {
        if !self.destroyed {
            self.listeners.push(Box::new(callback));
        }
    }

    /// Tear down the instance: cancel the session and timers, drop listeners, reset state.
    ///
    /// Every later call is a no-op.
    pub fn destroy(&mut self) {
        if self.destroyed {
            return;
        }
        self.cancel_session();
        self.listeners.clear();
        self.trigger = TriggerController::new(self.config.trigger_mode, self.config.hover_leave);
        self.destroyed = true;
        tracing::debug!("playback handle destroyed");
    }

    /// Advance to the clock's current time and return the path states for this frame.
    pub fn tick(&mut self) -> &[PathState] {
        if self.destroyed {
            return &self.paths;
        }
        let now = self.clock.now();

        if self
            .looper
            .poll(now, self.session.as_ref().map(PlaybackSession::id))
        {
            self.dispatch(TriggerEvent::Rearm);
        }

        let finished = match (&mut self.session, self.trigger.state()) {
            (Some(session), PlaybackState::Playing) => {
                session.sample_into(&self.schedule, now, &mut self.paths)
            }
            _ => false,
        };
        if finished {
            self.dispatch(TriggerEvent::Finished);
        }
        &self.paths
    }

    /// Current frame, for renderers.
    pub fn snapshot(&self) -> FrameSnapshot<'_> {
        FrameSnapshot {
            session: self.session.as_ref().map(PlaybackSession::id),
            time: self
                .session
                .as_ref()
                .map(PlaybackSession::elapsed)
                .unwrap_or(0.0),
            state: self.trigger.state(),
            paths: &self.paths,
        }
    }

    /// Path states as of the last tick.
    pub fn paths(&self) -> &[PathState] {
        &self.paths
    }

    /// Trigger state.
    pub fn state(&self) -> PlaybackState {
        self.trigger.state()
    }

    /// The live (or retained, once completed) session.
    pub fn active_session(&self) -> Option<&PlaybackSession> {
        self.session.as_ref()
    }

    /// Pending loop restart, if any.
    pub fn pending_rearm(&self) -> Option<PendingRearm> {
        self.looper.pending()
    }

    /// Number of whole-icon completions so far.
    pub fn cycles(&self) -> u64 {
        self.cycles
    }

    /// The icon being animated.
    pub fn icon(&self) -> &IconSpec {
        &self.icon
    }

    /// Effective configuration.
    pub fn config(&self) -> &AnimationConfig {
        &self.config
    }

    /// Measured path lengths.
    pub fn geometry(&self) -> &IconGeometry {
        &self.geometry
    }

    /// Per-path timeline.
    pub fn schedule(&self) -> &RevealSchedule {
        &self.schedule
    }

    /// Geometry error recovered at construction, when the icon is rendered statically.
    pub fn geometry_fallback(&self) -> Option<&RevealError> {
        self.fallback.as_ref()
    }

    /// Return `true` for a static (unanimated) icon.
    pub fn is_static(&self) -> bool {
        self.fallback.is_some()
    }

    /// Return `true` after [`PlaybackHandle::destroy`].
    pub fn is_destroyed(&self) -> bool {
        self.destroyed
    }

    fn loop_allowed(&self) -> bool {
        self.trigger.mode() != TriggerMode::Hover || self.trigger.pointer_inside()
    }

    fn dispatch(&mut self, event: TriggerEvent) {
        // Static icons stay fully drawn whatever the trigger.
        if self.destroyed || self.fallback.is_some() {
            return;
        }
        let action = self.trigger.handle(event);
        if event == TriggerEvent::PointerLeave && self.trigger.mode() == TriggerMode::Hover {
            // Hover loops only run while the pointer is inside.
            self.looper.cancel();
        }
        match action {
            TriggerAction::None => {}
            TriggerAction::StartSession => self.start_session(),
            TriggerAction::Stop => self.cancel_session(),
            TriggerAction::Freeze => {
                let now = self.clock.now();
                let finished = match &mut self.session {
                    Some(session) => {
                        session.freeze(now);
                        // Bring paths up to the frozen frame.
                        session.sample_into(&self.schedule, now, &mut self.paths)
                    }
                    None => false,
                };
                if finished {
                    self.dispatch(TriggerEvent::Finished);
                }
            }
            TriggerAction::Settle => self.settle(),
        }
    }

    #[tracing::instrument(skip(self), fields(paths = self.paths.len()))]
    fn start_session(&mut self) {
        // Cancel the previous session's timer before touching shared path state.
        self.looper.cancel();
        if let Some(old) = self.session.take() {
            tracing::debug!(session = old.id().0, "session superseded");
        }
        for p in &mut self.paths {
            p.reset();
        }
        let id = SessionId(self.next_session);
        self.next_session += 1;
        let now = self.clock.now();
        self.session = Some(PlaybackSession::start(id, now));
        tracing::debug!(session = id.0, started_at = now, "session started");
    }

    fn cancel_session(&mut self) {
        self.looper.cancel();
        if let Some(old) = self.session.take() {
            tracing::debug!(session = old.id().0, "session cancelled");
        }
        for p in &mut self.paths {
            p.reset();
        }
    }

    fn settle(&mut self) {
        let Some(session) = &self.session else {
            return;
        };
        let id = session.id();
        let now = self.clock.now();
        self.cycles += 1;
        tracing::debug!(session = id.0, cycle = self.cycles, "icon fully revealed");

        if self.loop_allowed() {
            self.looper.arm(id, now);
        }
        let event = CompletionEvent {
            session: id,
            cycle: self.cycles,
            at: now,
        };
        for cb in &mut self.listeners {
            cb(&event);
        }
    }
}

impl std::fmt::Debug for PlaybackHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PlaybackHandle")
            .field("paths", &self.paths.len())
            .field("state", &self.trigger.state())
            .field("session", &self.session.as_ref().map(PlaybackSession::id))
            .field("cycles", &self.cycles)
            .field("static", &self.fallback.is_some())
            .field("destroyed", &self.destroyed)
            .finish()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/playback/handle.rs"]
mod tests;
