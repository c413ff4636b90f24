use crate::foundation::core::Rgba8;
use crate::foundation::error::RevealResult;
use crate::icon::spec::IconSpec;
use crate::playback::session::SessionId;
use crate::playback::trigger::PlaybackState;
use crate::reveal::state::PathState;

/// Everything a renderer needs to draw one frame of an icon.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct FrameSnapshot<'a> {
    /// Session time in seconds (0 without a session).
    pub time: f64,
    /// Session that produced the path states, if any.
    pub session: Option<SessionId>,
    /// Trigger state at snapshot time.
    pub state: PlaybackState,
    /// Per-path state, in icon order.
    pub paths: &'a [PathState],
}

/// A rendered frame as RGBA8 pixels.
///
/// The `premultiplied` flag makes the alpha convention explicit at API boundaries.
#[derive(Clone, Debug)]
pub struct FrameRGBA {
    /// Frame width in pixels.
    pub width: u32,
    /// Frame height in pixels.
    pub height: u32,
    /// RGBA8 bytes, tightly packed, row-major.
    pub data: Vec<u8>,
    /// Whether the `data` is premultiplied alpha.
    pub premultiplied: bool,
}

impl FrameRGBA {
    /// Convert premultiplied pixels to straight alpha in place (PNG encoders expect straight).
    pub fn unpremultiply(&mut self) {
        if !self.premultiplied {
            return;
        }
        for px in self.data.chunks_exact_mut(4) {
            let a = px[3] as u32;
            if a == 0 || a == 255 {
                continue;
            }
            for c in &mut px[..3] {
                *c = ((*c as u32 * 255 + a / 2) / a).min(255) as u8;
            }
        }
        self.premultiplied = false;
    }
}

/// Output settings shared by renderers.
#[derive(Clone, Debug)]
pub struct RenderSettings {
    /// Output width in pixels.
    pub width: u32,
    /// Output height in pixels.
    pub height: u32,
    /// If set, the frame is cleared to this color before drawing.
    pub background: Option<Rgba8>,
}

impl Default for RenderSettings {
    fn default() -> Self {
        Self {
            width: 256,
            height: 256,
            background: None,
        }
    }
}

/// Draws a [`FrameSnapshot`] of an icon.
pub trait Renderer {
    /// Render `snapshot` of `icon` into a new frame.
    fn render(&mut self, icon: &IconSpec, snapshot: &FrameSnapshot<'_>) -> RevealResult<FrameRGBA>;
}

#[cfg(test)]
#[path = "../../tests/unit/render/backend.rs"]
mod tests;
