//! Canvas2D renderer.
//!
//! Draws frames to an HTML `<canvas>` via `CanvasRenderingContext2d`. Stroke
//! geometry comes from `fb_render::stroke_path`, so the browser and the Vello
//! painter agree on how points are joined and how dots look.

use fb_core::{EditorConfig, Frame, Point};
use fb_editor::Display;
use kurbo::PathEl;
use web_sys::CanvasRenderingContext2d;

/// Pen settings for Canvas2D.
#[derive(Debug, Clone)]
pub struct CanvasStyle {
    pub ink: String,
    pub background: String,
    pub line_width: f64,
}

impl CanvasStyle {
    pub fn from_config(config: &EditorConfig) -> Self {
        Self {
            ink: config.ink_color.clone(),
            background: config.background_color.clone(),
            line_width: config.line_width,
        }
    }
}

/// The main canvas, as seen by the editor session.
pub struct CanvasDisplay {
    ctx: CanvasRenderingContext2d,
    width: f64,
    height: f64,
    style: CanvasStyle,
    highlighted: Option<usize>,
}

impl CanvasDisplay {
    pub fn new(ctx: CanvasRenderingContext2d, width: f64, height: f64, style: CanvasStyle) -> Self {
        Self {
            ctx,
            width,
            height,
            style,
            highlighted: None,
        }
    }

    pub fn resize(&mut self, width: f64, height: f64) {
        self.width = width;
        self.height = height;
    }

    /// Timeline entry currently highlighted by playback.
    pub fn highlighted(&self) -> Option<usize> {
        self.highlighted
    }

    fn blank(&self) {
        blank(&self.ctx, self.width, self.height, &self.style);
    }
}

impl Display for CanvasDisplay {
    fn render(&mut self, frame: &Frame) {
        self.blank();
        draw_frame(&self.ctx, frame, &self.style);
    }

    fn render_preview(&mut self, frame: Option<&Frame>, stroke: &[Point]) {
        self.blank();
        if let Some(frame) = frame {
            draw_frame(&self.ctx, frame, &self.style);
        }
        draw_points(&self.ctx, stroke, &self.style);
    }

    fn clear(&mut self) {
        self.blank();
    }

    fn highlight(&mut self, index: Option<usize>) {
        self.highlighted = index;
    }
}

/// Draw one frame into a thumbnail canvas, scaled uniformly by `scale`.
pub fn render_thumbnail(
    ctx: &CanvasRenderingContext2d,
    frame: &Frame,
    width: f64,
    height: f64,
    scale: f64,
    style: &CanvasStyle,
) {
    blank(ctx, width, height, style);
    ctx.save();
    if let Err(e) = ctx.scale(scale, scale) {
        log::warn!("thumbnail scale failed: {e:?}");
    }
    draw_frame(ctx, frame, style);
    ctx.restore();
}

fn blank(ctx: &CanvasRenderingContext2d, width: f64, height: f64, style: &CanvasStyle) {
    ctx.clear_rect(0.0, 0.0, width, height);
    ctx.set_fill_style_str(&style.background);
    ctx.fill_rect(0.0, 0.0, width, height);
}

fn draw_frame(ctx: &CanvasRenderingContext2d, frame: &Frame, style: &CanvasStyle) {
    for stroke in frame.strokes() {
        draw_points(ctx, stroke.points(), style);
    }
}

fn draw_points(ctx: &CanvasRenderingContext2d, points: &[Point], style: &CanvasStyle) {
    let Some(path) = fb_render::stroke_path(points) else {
        return;
    };
    ctx.set_stroke_style_str(&style.ink);
    ctx.set_line_width(style.line_width);
    ctx.set_line_join("round");
    ctx.set_line_cap("round");
    ctx.begin_path();
    for el in path.elements() {
        match *el {
            PathEl::MoveTo(p) => ctx.move_to(p.x, p.y),
            PathEl::LineTo(p) => ctx.line_to(p.x, p.y),
            _ => {}
        }
    }
    ctx.stroke();
}
