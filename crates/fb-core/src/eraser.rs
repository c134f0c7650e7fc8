//! Eraser hit region: point → strokes to remove.
//!
//! The region is an axis-aligned *open* square around the pointer. A stroke
//! is condemned as a whole if any one of its points falls strictly inside,
//! even when the rest of the stroke lies far outside.

use crate::model::{Frame, Point, Stroke};

/// Half-size used when no configuration overrides it.
pub const DEFAULT_ERASER_HALF_SIZE: f64 = 10.0;

/// Square region centred on the eraser position.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EraserRegion {
    pub center: Point,
    pub half_size: f64,
}

impl EraserRegion {
    pub const fn new(center: Point, half_size: f64) -> Self {
        Self { center, half_size }
    }

    /// Strict containment on both axes. A point exactly on an edge is outside.
    pub fn contains(&self, p: Point) -> bool {
        let h = self.half_size;
        p.x > self.center.x - h
            && p.x < self.center.x + h
            && p.y > self.center.y - h
            && p.y < self.center.y + h
    }

    /// Whether any point of `stroke` lies inside the region.
    pub fn touches(&self, stroke: &Stroke) -> bool {
        stroke.points().iter().any(|p| self.contains(*p))
    }
}

/// Remove every stroke of `frame` touched by `region`.
/// Returns the number of strokes removed.
pub fn erase_strokes(frame: &mut Frame, region: &EraserRegion) -> usize {
    let removed = frame.remove_where(|s| region.touches(s));
    if removed > 0 {
        log::trace!(
            "ERASE {} stroke(s) at ({}, {}) half={}",
            removed,
            region.center.x,
            region.center.y,
            region.half_size
        );
    }
    removed
}
