//! Rendering collaborator seam.
//!
//! The editor never draws pixels itself. It tells a `Display` what to show:
//! a committed frame, a frame plus a live stroke preview, a blank canvas, or
//! which timeline entry to highlight during playback.

use fb_core::{Frame, Point};

pub trait Display {
    /// Clear the canvas and draw every stroke of `frame`.
    fn render(&mut self, frame: &Frame);

    /// Draw `frame` and then the in-progress stroke on top. Each preview
    /// point is joined to its own successor.
    fn render_preview(&mut self, frame: Option<&Frame>, stroke: &[Point]);

    /// Blank the canvas.
    fn clear(&mut self);

    /// Highlight the timeline entry being played, or remove the highlight.
    fn highlight(&mut self, index: Option<usize>);
}
