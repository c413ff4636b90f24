use anyhow::Context as _;
use usvg::tiny_skia_path::PathSegment;

use crate::foundation::core::{Affine, BezPath, Point, Rect, Rgba8};
use crate::foundation::error::{RevealError, RevealResult};
use crate::icon::spec::IconSpec;

#[derive(Default)]
struct Collected {
    paths: Vec<BezPath>,
    stroke: Option<(f64, Rgba8)>,
    fill: Option<Rgba8>,
}

impl IconSpec {
    /// Import an icon from an SVG document.
    ///
    /// Every path-like element (paths and basic shapes, which `usvg` normalizes to paths) becomes one
    /// reveal path in document order, with absolute transforms applied. Stroke width and color come
    /// from the first stroked element, fill color from the first filled one. Text and images are
    /// ignored.
    pub fn from_svg_data(bytes: &[u8]) -> RevealResult<Self> {
        let opts = usvg::Options::default();
        let tree = usvg::Tree::from_data(bytes, &opts).context("parse svg tree")?;

        let mut out = Collected::default();
        collect_group(tree.root(), &mut out);
        if out.paths.is_empty() {
            return Err(RevealError::validation("svg contains no path elements"));
        }
        tracing::debug!(paths = out.paths.len(), "imported svg icon");

        let size = tree.size();
        let view_box = Rect::new(0.0, 0.0, f64::from(size.width()), f64::from(size.height()));
        let (width, color) = out.stroke.unwrap_or((2.0, Rgba8::BLACK));
        let mut icon = IconSpec::new(out.paths)
            .with_stroke(width, color)?
            .with_view_box(view_box)?;
        if let Some(fill) = out.fill {
            icon = icon.with_fill(fill);
        }
        Ok(icon)
    }

    /// Import an icon from an SVG file on disk.
    pub fn from_svg_path(path: impl AsRef<std::path::Path>) -> RevealResult<Self> {
        let path = path.as_ref();
        let bytes = std::fs::read(path)
            .with_context(|| format!("read svg '{}'", path.display()))?;
        Self::from_svg_data(&bytes)
    }
}

fn collect_group(group: &usvg::Group, out: &mut Collected) {
    for node in group.children() {
        match node {
            usvg::Node::Group(g) => collect_group(g, out),
            usvg::Node::Path(p) => collect_path(p, out),
            usvg::Node::Image(_) | usvg::Node::Text(_) => {}
        }
    }
}

fn collect_path(path: &usvg::Path, out: &mut Collected) {
    let ts = path.abs_transform();
    let affine = Affine::new([
        f64::from(ts.sx),
        f64::from(ts.ky),
        f64::from(ts.kx),
        f64::from(ts.sy),
        f64::from(ts.tx),
        f64::from(ts.ty),
    ]);

    let mut bez = BezPath::new();
    for seg in path.data().segments() {
        match seg {
            PathSegment::MoveTo(p) => bez.move_to(pt(p)),
            PathSegment::LineTo(p) => bez.line_to(pt(p)),
            PathSegment::QuadTo(p1, p2) => bez.quad_to(pt(p1), pt(p2)),
            PathSegment::CubicTo(p1, p2, p3) => bez.curve_to(pt(p1), pt(p2), pt(p3)),
            PathSegment::Close => bez.close_path(),
        }
    }
    bez.apply_affine(affine);
    out.paths.push(bez);

    if out.stroke.is_none()
        && let Some(stroke) = path.stroke()
        && let Some(color) = paint_color(stroke.paint(), stroke.opacity().get())
    {
        let scale = affine.determinant().abs().sqrt();
        out.stroke = Some((f64::from(stroke.width().get()) * scale, color));
    }
    if out.fill.is_none()
        && let Some(fill) = path.fill()
    {
        out.fill = paint_color(fill.paint(), fill.opacity().get());
    }
}

fn pt(p: usvg::tiny_skia_path::Point) -> Point {
    Point::new(f64::from(p.x), f64::from(p.y))
}

fn paint_color(paint: &usvg::Paint, opacity: f32) -> Option<Rgba8> {
    match paint {
        usvg::Paint::Color(c) => Some(Rgba8::rgba(
            c.red,
            c.green,
            c.blue,
            (opacity.clamp(0.0, 1.0) * 255.0).round() as u8,
        )),
        _ => None,
    }
}

#[cfg(test)]
#[path = "../../tests/unit/icon/svg.rs"]
mod tests;
