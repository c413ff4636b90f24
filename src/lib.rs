//! pathreveal progressively "draws" vector icons.
//!
//! Each path of an icon has its stroke revealed along its length, then its fill faded in, with a
//! per-path stagger. The engine is purely time-sampled:
//!
//! - Build an [`IconSpec`] (JSON path data or an SVG document)
//! - Create a [`PlaybackHandle`] with an [`AnimationConfig`]
//! - Call [`PlaybackHandle::tick`] once per frame and draw the returned [`PathState`]s, or hand a
//!   [`FrameSnapshot`] to a [`Renderer`] such as [`CpuRenderer`]
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod foundation;

pub(crate) mod animation;
pub(crate) mod geometry;
pub(crate) mod icon;
pub(crate) mod playback;
pub(crate) mod render;
pub(crate) mod reveal;

pub use crate::foundation::clock::{Clock, ManualClock, SystemClock};
pub use crate::foundation::core::{Affine, BezPath, Point, Rect, Rgba8, Vec2};
pub use crate::foundation::error::{RevealError, RevealResult};

pub use crate::animation::ease::Ease;
pub use crate::geometry::measure::{ARCLEN_ACCURACY, IconGeometry, measure_path, measure_paths};
pub use crate::geometry::trim::trim_path;
pub use crate::icon::spec::{DEFAULT_VIEW_BOX, IconDef, IconSpec};
pub use crate::playback::handle::{CompletionCallback, CompletionEvent, PlaybackHandle};
pub use crate::playback::looping::{LOOP_PAUSE, LoopCoordinator, PendingRearm};
pub use crate::playback::session::{PlaybackSession, SessionId};
pub use crate::playback::trigger::{
    PlaybackState, TriggerAction, TriggerController, TriggerEvent,
};
pub use crate::render::backend::{FrameRGBA, FrameSnapshot, RenderSettings, Renderer};
pub use crate::render::cpu::CpuRenderer;
pub use crate::reveal::config::{AnimationConfig, HoverLeavePolicy, Normalization, TriggerMode};
pub use crate::reveal::fill::{FILL_RAMP_DURATION, FILL_SETTLE_DELAY, FillWindow};
pub use crate::reveal::schedule::{PathTiming, RevealSchedule};
pub use crate::reveal::state::{PathState, Phase, all_complete};
pub use crate::reveal::stroke::stroke_progress;
