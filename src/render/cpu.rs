use crate::foundation::core::{Affine, BezPath, Rect, Rgba8, bezpath_is_finite};
use crate::foundation::error::{RevealError, RevealResult};
use crate::geometry::trim::trim_path;
use crate::icon::spec::IconSpec;
use crate::render::backend::{FrameRGBA, FrameSnapshot, RenderSettings, Renderer};

/// CPU raster renderer powered by `vello_cpu`.
///
/// The icon's view box is fitted (uniform scale, centered) into the output frame. Each path is
/// drawn in icon order: its fill at the current fill opacity, then the revealed prefix of its
/// stroke with round caps and joins.
pub struct CpuRenderer {
    settings: RenderSettings,
    ctx: Option<vello_cpu::RenderContext>,
}

impl CpuRenderer {
    /// Create a renderer for frames of the given settings.
    pub fn new(settings: RenderSettings) -> Self {
        Self {
            settings,
            ctx: None,
        }
    }

    /// Output settings.
    pub fn settings(&self) -> &RenderSettings {
        &self.settings
    }

    fn with_ctx_mut<R>(
        &mut self,
        width: u16,
        height: u16,
        f: impl FnOnce(&mut vello_cpu::RenderContext) -> RevealResult<R>,
    ) -> RevealResult<R> {
        let mut ctx = match self.ctx.take() {
            Some(ctx) if ctx.width() == width && ctx.height() == height => ctx,
            _ => vello_cpu::RenderContext::new(width, height),
        };
        ctx.reset();
        let out = f(&mut ctx)?;
        self.ctx = Some(ctx);
        Ok(out)
    }
}

impl Renderer for CpuRenderer {
    #[tracing::instrument(skip_all, fields(time = snapshot.time, paths = snapshot.paths.len()))]
    fn render(&mut self, icon: &IconSpec, snapshot: &FrameSnapshot<'_>) -> RevealResult<FrameRGBA> {
        if snapshot.paths.len() != icon.path_count() {
            return Err(RevealError::render(format!(
                "snapshot has {} path states, icon has {} paths",
                snapshot.paths.len(),
                icon.path_count()
            )));
        }
        let width: u16 = self
            .settings
            .width
            .try_into()
            .map_err(|_| RevealError::render("frame width exceeds u16"))?;
        let height: u16 = self
            .settings
            .height
            .try_into()
            .map_err(|_| RevealError::render("frame height exceeds u16"))?;
        if width == 0 || height == 0 {
            return Err(RevealError::render("frame size must be non-zero"));
        }

        let view = fit_view_box(icon.view_box(), width as f64, height as f64);
        let background = self.settings.background;
        let mut pixmap = vello_cpu::Pixmap::new(width, height);

        self.with_ctx_mut(width, height, |ctx| {
            ctx.set_paint_transform(vello_cpu::kurbo::Affine::IDENTITY);
            if let Some(bg) = background {
                ctx.set_transform(vello_cpu::kurbo::Affine::IDENTITY);
                ctx.set_paint(paint(bg));
                ctx.fill_rect(&vello_cpu::kurbo::Rect::new(
                    0.0,
                    0.0,
                    width as f64,
                    height as f64,
                ));
            }

            ctx.set_transform(affine_to_cpu(view));
            ctx.set_stroke(
                vello_cpu::kurbo::Stroke::new(icon.stroke_width())
                    .with_caps(vello_cpu::kurbo::Cap::Round)
                    .with_join(vello_cpu::kurbo::Join::Round),
            );

            for (path, state) in icon.paths().iter().zip(snapshot.paths) {
                if !bezpath_is_finite(path) {
                    continue;
                }

                let fill_opacity = state.fill_opacity.clamp(0.0, 1.0) as f32;
                if fill_opacity > 0.0 {
                    ctx.set_paint(paint(icon.fill_color()));
                    if fill_opacity < 1.0 {
                        ctx.push_opacity_layer(fill_opacity);
                    }
                    ctx.fill_path(&bezpath_to_cpu(path));
                    if fill_opacity < 1.0 {
                        ctx.pop_layer();
                    }
                }

                if state.progress > 0.0 {
                    let visible = trim_path(path, state.length, state.progress);
                    if !visible.elements().is_empty() {
                        ctx.set_paint(paint(icon.stroke_color()));
                        ctx.stroke_path(&bezpath_to_cpu(&visible));
                    }
                }
            }

            ctx.flush();
            ctx.render_to_pixmap(&mut pixmap);
            Ok(())
        })?;

        Ok(FrameRGBA {
            width: width as u32,
            height: height as u32,
            data: pixmap.data_as_u8_slice().to_vec(),
            premultiplied: true,
        })
    }
}

/// Map `view_box` into a `width` x `height` frame, preserving aspect ratio and centering.
pub(crate) fn fit_view_box(view_box: Rect, width: f64, height: f64) -> Affine {
    let vw = view_box.width();
    let vh = view_box.height();
    if vw <= 0.0 || vh <= 0.0 {
        return Affine::IDENTITY;
    }
    let s = (width / vw).min(height / vh);
    let dx = (width - vw * s) * 0.5;
    let dy = (height - vh * s) * 0.5;
    Affine::translate((dx, dy)) * Affine::scale(s) * Affine::translate((-view_box.x0, -view_box.y0))
}

fn paint(c: Rgba8) -> vello_cpu::peniko::Color {
    vello_cpu::peniko::Color::from_rgba8(c.r, c.g, c.b, c.a)
}

fn affine_to_cpu(a: Affine) -> vello_cpu::kurbo::Affine {
    vello_cpu::kurbo::Affine::new(a.as_coeffs())
}

fn bezpath_to_cpu(path: &BezPath) -> vello_cpu::kurbo::BezPath {
    use kurbo::PathEl;

    let pt = |p: kurbo::Point| vello_cpu::kurbo::Point::new(p.x, p.y);
    let mut out = vello_cpu::kurbo::BezPath::new();
    for &el in path.elements() {
        match el {
            PathEl::MoveTo(p) => out.move_to(pt(p)),
            PathEl::LineTo(p) => out.line_to(pt(p)),
            PathEl::QuadTo(p1, p2) => out.quad_to(pt(p1), pt(p2)),
            PathEl::CurveTo(p1, p2, p3) => out.curve_to(pt(p1), pt(p2), pt(p3)),
            PathEl::ClosePath => out.close_path(),
        }
    }
    out
}

#[cfg(test)]
#[path = "../../tests/unit/render/cpu.rs"]
mod tests;
