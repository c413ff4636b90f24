use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::animation::ease::Ease;
use crate::foundation::error::{RevealError, RevealResult};

/// Policy selecting when a playback session is (re)started.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum TriggerMode {
    /// Start playing as soon as the handle is created.
    #[default]
    Autoplay,
    /// Restart from scratch every time the pointer enters the icon.
    Hover,
    /// Only play when the host calls `play()`.
    Manual,
}

/// What happens to an in-flight hover session when the pointer leaves.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum HoverLeavePolicy {
    /// Let the running session finish and settle in `Completed`.
    #[default]
    Finish,
    /// Hold the current frame until the next trigger.
    Freeze,
    /// Abort to `Idle`, clearing all path state.
    Reset,
}

/// Mapping from raw path length to "normalized length" units.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub enum Normalization {
    /// `length / reference`.
    Linear {
        /// Path length that maps to one normalized unit.
        reference: f64,
    },
    /// `sqrt(length / reference)`; long paths grow sub-linearly.
    Sqrt {
        /// Path length that maps to one normalized unit.
        reference: f64,
    },
}

impl Normalization {
    /// Map a raw length to normalized units.
    pub fn apply(self, length: f64) -> f64 {
        let length = length.max(0.0);
        match self {
            Self::Linear { reference } => length / reference,
            Self::Sqrt { reference } => (length / reference).sqrt(),
        }
    }

    fn reference(self) -> f64 {
        match self {
            Self::Linear { reference } | Self::Sqrt { reference } => reference,
        }
    }
}

impl Default for Normalization {
    fn default() -> Self {
        Self::Linear { reference: 100.0 }
    }
}

/// Animation timing and trigger configuration.
///
/// All fields have defaults, so a JSON config only needs the options it changes.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AnimationConfig {
    /// Seconds per unit of normalized path length.
    pub draw_speed: f64,
    /// Seconds between successive paths' start times.
    pub stagger_delay: f64,
    /// Gate a per-path fill ramp on that path's stroke completion.
    pub fill_after_stroke: bool,
    /// Re-arm playback after a pause once the icon completes.
    #[serde(rename = "loop")]
    pub looping: bool,
    /// When sessions start.
    pub trigger_mode: TriggerMode,
    /// Stroke progress curve.
    pub easing: Ease,
    /// Raw length to normalized length mapping.
    pub normalization: Normalization,
    /// Upper bound on any single path's stroke duration, in seconds.
    pub max_duration: Option<f64>,
    /// Pointer-leave behavior in [`TriggerMode::Hover`].
    pub hover_leave: HoverLeavePolicy,
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            draw_speed: 1.5,
            stagger_delay: 0.1,
            fill_after_stroke: true,
            looping: false,
            trigger_mode: TriggerMode::Autoplay,
            easing: Ease::OutCubic,
            normalization: Normalization::default(),
            max_duration: Some(6.0),
            hover_leave: HoverLeavePolicy::Finish,
        }
    }
}

impl AnimationConfig {
    /// Check timing options. Invalid values are rejected rather than clamped.
    pub fn validate(&self) -> RevealResult<()> {
        if !self.draw_speed.is_finite() || self.draw_speed <= 0.0 {
            return Err(RevealError::config(format!(
                "draw_speed must be finite and > 0 (got {})",
                self.draw_speed
            )));
        }
        if !self.stagger_delay.is_finite() || self.stagger_delay < 0.0 {
            return Err(RevealError::config(format!(
                "stagger_delay must be finite and >= 0 (got {})",
                self.stagger_delay
            )));
        }
        let reference = self.normalization.reference();
        if !reference.is_finite() || reference <= 0.0 {
            return Err(RevealError::config(format!(
                "normalization reference must be finite and > 0 (got {reference})"
            )));
        }
        if let Some(max) = self.max_duration
            && (!max.is_finite() || max <= 0.0)
        {
            return Err(RevealError::config(format!(
                "max_duration must be finite and > 0 (got {max})"
            )));
        }
        self.easing.validate()
    }

    /// Parse a config from a JSON reader. The result is not validated.
    pub fn from_reader<R: std::io::Read>(r: R) -> RevealResult<Self> {
        serde_json::from_reader(r)
            .map_err(|e| RevealError::serde(format!("parse animation config JSON: {e}")))
    }

    /// Parse a config from a JSON file on disk. The result is not validated.
    pub fn from_path(path: impl AsRef<Path>) -> RevealResult<Self> {
        let path = path.as_ref();
        let f = File::open(path).map_err(|e| {
            RevealError::config(format!("open animation config '{}': {e}", path.display()))
        })?;
        Self::from_reader(BufReader::new(f))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/reveal/config.rs"]
mod tests;
