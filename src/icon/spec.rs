use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::foundation::core::{BezPath, Rect, Rgba8};
use crate::foundation::error::{RevealError, RevealResult};

/// Default icon coordinate space (`0 0 24 24`), the common icon-set grid.
pub const DEFAULT_VIEW_BOX: [f64; 4] = [0.0, 0.0, 24.0, 24.0];

/// Immutable description of an icon as an ordered set of vector paths.
///
/// Path order is reveal order: path `i` starts `i * stagger_delay` seconds into a session.
#[derive(Clone, Debug, PartialEq)]
pub struct IconSpec {
    paths: Vec<BezPath>,
    stroke_width: f64,
    stroke_color: Rgba8,
    fill_color: Option<Rgba8>,
    view_box: Rect,
}

impl IconSpec {
    /// Build an icon from paths with the default 24x24 view box and a 2-unit black stroke.
    pub fn new(paths: Vec<BezPath>) -> Self {
        let [x, y, w, h] = DEFAULT_VIEW_BOX;
        Self {
            paths,
            stroke_width: 2.0,
            stroke_color: Rgba8::BLACK,
            fill_color: None,
            view_box: Rect::new(x, y, x + w, y + h),
        }
    }

    /// Set stroke width and color.
    pub fn with_stroke(mut self, width: f64, color: Rgba8) -> RevealResult<Self> {
        if !width.is_finite() || width < 0.0 {
            return Err(RevealError::validation(
                "icon stroke_width must be finite and >= 0",
            ));
        }
        self.stroke_width = width;
        self.stroke_color = color;
        Ok(self)
    }

    /// Set the fill color used during the fill phase (defaults to the stroke color).
    pub fn with_fill(mut self, color: Rgba8) -> Self {
        self.fill_color = Some(color);
        self
    }

    /// Set the icon coordinate space.
    pub fn with_view_box(mut self, view_box: Rect) -> RevealResult<Self> {
        if !(view_box.width() > 0.0 && view_box.height() > 0.0) {
            return Err(RevealError::validation(
                "icon view_box must have positive width and height",
            ));
        }
        self.view_box = view_box;
        Ok(self)
    }

    /// Paths in reveal order.
    pub fn paths(&self) -> &[BezPath] {
        &self.paths
    }

    /// Number of paths.
    pub fn path_count(&self) -> usize {
        self.paths.len()
    }

    /// Stroke width in view-box units.
    pub fn stroke_width(&self) -> f64 {
        self.stroke_width
    }

    /// Stroke color.
    pub fn stroke_color(&self) -> Rgba8 {
        self.stroke_color
    }

    /// Fill color (the stroke color unless overridden).
    pub fn fill_color(&self) -> Rgba8 {
        self.fill_color.unwrap_or(self.stroke_color)
    }

    /// Icon coordinate space.
    pub fn view_box(&self) -> Rect {
        self.view_box
    }

    /// Build from the JSON-facing definition, parsing SVG path data.
    pub fn from_def(def: &IconDef) -> RevealResult<Self> {
        let paths = def
            .paths
            .iter()
            .enumerate()
            .map(|(i, d)| {
                BezPath::from_svg(d).map_err(|e| {
                    RevealError::validation(format!("invalid svg path data for path {i}: {e}"))
                })
            })
            .collect::<RevealResult<Vec<_>>>()?;

        let [x, y, w, h] = def.view_box;
        let mut icon = Self::new(paths)
            .with_stroke(def.stroke_width, def.stroke_color)?
            .with_view_box(Rect::new(x, y, x + w, y + h))?;
        if let Some(fill) = def.fill_color {
            icon = icon.with_fill(fill);
        }
        Ok(icon)
    }

    /// Parse an icon definition from a JSON reader.
    pub fn from_reader<R: std::io::Read>(r: R) -> RevealResult<Self> {
        let def: IconDef = serde_json::from_reader(r)
            .map_err(|e| RevealError::serde(format!("parse icon JSON: {e}")))?;
        Self::from_def(&def)
    }

    /// Parse an icon definition from a JSON file on disk.
    pub fn from_path(path: impl AsRef<Path>) -> RevealResult<Self> {
        let path = path.as_ref();
        let f = File::open(path).map_err(|e| {
            RevealError::validation(format!("open icon JSON '{}': {e}", path.display()))
        })?;
        Self::from_reader(BufReader::new(f))
    }

    /// Convert back to the JSON-facing definition.
    pub fn to_def(&self) -> IconDef {
        let vb = self.view_box;
        IconDef {
            view_box: [vb.x0, vb.y0, vb.width(), vb.height()],
            stroke_width: self.stroke_width,
            stroke_color: self.stroke_color,
            fill_color: self.fill_color,
            paths: self.paths.iter().map(|p| p.to_svg()).collect(),
        }
    }
}

/// JSON-facing icon definition.
///
/// ```json
/// { "view_box": [0, 0, 24, 24], "stroke_width": 2, "stroke_color": "#111827",
///   "paths": ["M4 12 L10 18 L20 6"] }
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct IconDef {
    /// `[x, y, width, height]`.
    #[serde(default = "default_view_box")]
    pub view_box: [f64; 4],
    /// Stroke width in view-box units.
    #[serde(default = "default_stroke_width")]
    pub stroke_width: f64,
    /// Stroke color.
    #[serde(default, alias = "color")]
    pub stroke_color: Rgba8,
    /// Optional fill color; defaults to the stroke color.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fill_color: Option<Rgba8>,
    /// SVG path data strings, in reveal order.
    pub paths: Vec<String>,
}

fn default_view_box() -> [f64; 4] {
    DEFAULT_VIEW_BOX
}

fn default_stroke_width() -> f64 {
    2.0
}

#[cfg(test)]
#[path = "../../tests/unit/icon/spec.rs"]
mod tests;
