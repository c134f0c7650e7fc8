//! Frame → Vello drawing commands.
//!
//! Every stroke becomes one open `BezPath` of straight segments, stroked
//! with round joins and caps at a fixed width. Thumbnails reuse the same
//! geometry under a uniform scale transform.

use fb_core::{EditorConfig, Frame, Point};
use kurbo::{Affine, BezPath, Cap, Join, Stroke as KurboStroke};
use peniko::Color;
use vello::Scene;

/// Pen appearance shared by all painters.
#[derive(Debug, Clone, Copy)]
pub struct PaintStyle {
    pub width: f64,
    pub ink: Color,
}

impl Default for PaintStyle {
    fn default() -> Self {
        Self {
            width: 3.0,
            ink: Color::from_rgb8(0, 0, 0),
        }
    }
}

impl PaintStyle {
    /// Take width and ink from the editor config. An unparseable ink color
    /// falls back to black.
    pub fn from_config(config: &EditorConfig) -> Self {
        let ink = parse_css_color(&config.ink_color).unwrap_or_else(|| {
            log::warn!("unknown ink color {:?}, using black", config.ink_color);
            Color::from_rgb8(0, 0, 0)
        });
        Self {
            width: config.line_width,
            ink,
        }
    }

    fn kurbo_stroke(&self) -> KurboStroke {
        KurboStroke {
            width: self.width,
            join: Join::Round,
            start_cap: Cap::Round,
            end_cap: Cap::Round,
            ..Default::default()
        }
    }
}

/// Paint every stroke of a frame. Call with a freshly-cleared `Scene`.
pub fn paint_frame(scene: &mut Scene, frame: &Frame, style: &PaintStyle) {
    paint_frame_with(scene, frame, style, Affine::IDENTITY);
}

/// Paint the in-progress stroke on top of whatever is already in `scene`.
pub fn paint_preview(scene: &mut Scene, points: &[Point], style: &PaintStyle) {
    if let Some(path) = stroke_path(points) {
        scene.stroke(&style.kurbo_stroke(), Affine::IDENTITY, style.ink, None, &path);
    }
}

/// Paint a frame scaled down by `scale` for the timeline strip.
pub fn paint_thumbnail(scene: &mut Scene, frame: &Frame, style: &PaintStyle, scale: f64) {
    log::trace!(
        "THUMB {} strokes at scale {scale}",
        frame.stroke_count()
    );
    paint_frame_with(scene, frame, style, Affine::scale(scale));
}

fn paint_frame_with(scene: &mut Scene, frame: &Frame, style: &PaintStyle, transform: Affine) {
    let stroke = style.kurbo_stroke();
    for s in frame.strokes() {
        if let Some(path) = stroke_path(s.points()) {
            scene.stroke(&stroke, transform, style.ink, None, &path);
        }
    }
}

/// Build the polyline for a point sequence: each point joined to its own
/// successor. A single point becomes a zero-length segment so the round cap
/// still shows a dot. `None` for an empty slice.
pub fn stroke_path(points: &[Point]) -> Option<BezPath> {
    let (first, rest) = points.split_first()?;
    let mut bez = BezPath::new();
    bez.move_to((first.x, first.y));
    if rest.is_empty() {
        bez.line_to((first.x, first.y));
    }
    for p in rest {
        bez.line_to((p.x, p.y));
    }
    Some(bez)
}

// ─── Helpers ─────────────────────────────────────────────────────────────────

fn hex_val(c: u8) -> Option<u8> {
    match c {
        b'0'..=b'9' => Some(c - b'0'),
        b'a'..=b'f' => Some(c - b'a' + 10),
        b'A'..=b'F' => Some(c - b'A' + 10),
        _ => None,
    }
}

/// Parse the CSS colors the editor config uses: `#RGB`, `#RRGGBB`, and the
/// keywords `black` and `white`.
pub fn parse_css_color(s: &str) -> Option<Color> {
    match s.trim().to_ascii_lowercase().as_str() {
        "black" => return Some(Color::from_rgb8(0, 0, 0)),
        "white" => return Some(Color::from_rgb8(255, 255, 255)),
        _ => {}
    }
    let hex = s.trim().strip_prefix('#')?;
    let bytes = hex.as_bytes();
    match bytes.len() {
        3 => {
            let r = hex_val(bytes[0])?;
            let g = hex_val(bytes[1])?;
            let b = hex_val(bytes[2])?;
            Some(Color::from_rgb8(r * 17, g * 17, b * 17))
        }
        6 => {
            let r = hex_val(bytes[0])? << 4 | hex_val(bytes[1])?;
            let g = hex_val(bytes[2])? << 4 | hex_val(bytes[3])?;
            let b = hex_val(bytes[4])? << 4 | hex_val(bytes[5])?;
            Some(Color::from_rgb8(r, g, b))
        }
        _ => None,
    }
}
