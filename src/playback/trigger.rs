use crate::reveal::config::{HoverLeavePolicy, TriggerMode};

/// Coarse playback state of an icon instance.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize)]
pub enum PlaybackState {
    /// No session, all paths idle.
    #[default]
    Idle,
    /// A session is running (or frozen mid-way by a hover leave).
    Playing,
    /// The last session reached whole-icon completion and is retained.
    Completed,
}

/// Inputs to the trigger state machine.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TriggerEvent {
    /// The icon instance was created.
    Created,
    /// Explicit `play()` from the host.
    Play,
    /// Pointer entered the icon.
    PointerEnter,
    /// Pointer left the icon.
    PointerLeave,
    /// Explicit `reset()` from the host.
    Reset,
    /// The active session observed whole-icon completion.
    Finished,
    /// The loop pause elapsed.
    Rearm,
}

/// What the owner of the state machine must do after an event.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TriggerAction {
    /// Nothing changes.
    None,
    /// Cancel any current session, reset path state, start a new session.
    StartSession,
    /// Cancel any current session and reset path state to idle.
    Stop,
    /// Hold the current session on its current frame.
    Freeze,
    /// The session completed; notify listeners and consult the loop coordinator.
    Settle,
}

/// State machine deciding when sessions start, stop, or settle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TriggerController {
    mode: TriggerMode,
    hover_leave: HoverLeavePolicy,
    state: PlaybackState,
    pointer_inside: bool,
}

impl TriggerController {
    /// Create a controller in `Idle`.
    pub fn new(mode: TriggerMode, hover_leave: HoverLeavePolicy) -> Self {
        Self {
            mode,
            hover_leave,
            state: PlaybackState::Idle,
            pointer_inside: false,
        }
    }

    /// Create a controller that starts out `Completed` (static, fully drawn icons).
    pub fn settled(mode: TriggerMode, hover_leave: HoverLeavePolicy) -> Self {
        Self {
            state: PlaybackState::Completed,
            ..Self::new(mode, hover_leave)
        }
    }

    /// Current state.
    pub fn state(&self) -> PlaybackState {
        self.state
    }

    /// Trigger mode.
    pub fn mode(&self) -> TriggerMode {
        self.mode
    }

    /// Return `true` while the pointer is over the icon.
    pub fn pointer_inside(&self) -> bool {
        self.pointer_inside
    }

    /// Apply an event and return the action the owner must perform.
    pub fn handle(&mut self, event: TriggerEvent) -> TriggerAction {
        use TriggerAction as A;
        use TriggerEvent as E;

        let action = match event {
            E::Created => match self.mode {
                TriggerMode::Autoplay => A::StartSession,
                TriggerMode::Hover | TriggerMode::Manual => A::None,
            },
            // Re-entrant play restarts from scratch (last writer wins).
            E::Play => A::StartSession,
            E::PointerEnter => {
                self.pointer_inside = true;
                match self.mode {
                    TriggerMode::Hover => A::StartSession,
                    TriggerMode::Autoplay | TriggerMode::Manual => A::None,
                }
            }
            E::PointerLeave => {
                self.pointer_inside = false;
                if self.mode == TriggerMode::Hover && self.state == PlaybackState::Playing {
                    match self.hover_leave {
                        HoverLeavePolicy::Finish => A::None,
                        HoverLeavePolicy::Freeze => A::Freeze,
                        HoverLeavePolicy::Reset => A::Stop,
                    }
                } else {
                    A::None
                }
            }
            E::Reset => A::Stop,
            E::Finished => match self.state {
                PlaybackState::Playing => A::Settle,
                PlaybackState::Idle | PlaybackState::Completed => A::None,
            },
            E::Rearm => match self.state {
                PlaybackState::Completed => A::StartSession,
                PlaybackState::Idle | PlaybackState::Playing => A::None,
            },
        };

        match action {
            A::StartSession => self.state = PlaybackState::Playing,
            A::Stop => self.state = PlaybackState::Idle,
            A::Settle => self.state = PlaybackState::Completed,
            A::Freeze | A::None => {}
        }
        action
    }
}

#[cfg(test)]
#[path = "../../tests/unit/playback/trigger.rs"]
mod tests;
