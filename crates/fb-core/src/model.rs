//! Core data model for flipbook documents.
//!
//! A document is an ordered list of frames. Each frame is an ordered list of
//! strokes in commit order, and each stroke is an ordered list of points in
//! draw order. Frames never reference one another, so copying a frame is a
//! plain deep clone.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

// ─── Point ───────────────────────────────────────────────────────────────

/// A 2D coordinate in canvas space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Self::new(x, y)
    }
}

// ─── Stroke ──────────────────────────────────────────────────────────────

/// Most freehand strokes are short flicks; longer ones spill to the heap.
pub type PointBuf = SmallVec<[Point; 16]>;

/// One continuous freehand line, gesture start to gesture end.
///
/// A stroke always holds at least one point. There is no mutable access to
/// the points once built, so a committed stroke cannot change.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Stroke {
    points: PointBuf,
}

impl Stroke {
    /// A single-point stroke (a dot).
    pub fn dot(point: Point) -> Self {
        let mut points = PointBuf::new();
        points.push(point);
        Self { points }
    }

    /// Build a stroke from a point sequence. Returns `None` for an empty
    /// sequence, since a zero-point stroke is never valid.
    pub fn from_points<I>(points: I) -> Option<Self>
    where
        I: IntoIterator<Item = Point>,
    {
        let points: PointBuf = points.into_iter().collect();
        if points.is_empty() {
            None
        } else {
            Some(Self { points })
        }
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Always `false` for a constructed stroke; provided for symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// First point, where the pen went down.
    pub fn start(&self) -> Point {
        self.points[0]
    }

    /// Consecutive point pairs, each point joined to its own successor.
    pub fn segments(&self) -> impl Iterator<Item = (Point, Point)> + '_ {
        self.points.windows(2).map(|w| (w[0], w[1]))
    }

    /// Append a point. Crate-private: only the in-progress builder grows strokes.
    pub(crate) fn push(&mut self, point: Point) {
        self.points.push(point);
    }
}

// ─── In-progress stroke ──────────────────────────────────────────────────

/// Points accumulated during an active gesture, before commit.
///
/// Kept distinct from `Stroke` so that nothing outside the builder can
/// extend a committed stroke.
#[derive(Debug, Clone, PartialEq)]
pub struct StrokeDraft {
    stroke: Stroke,
}

impl StrokeDraft {
    pub fn begin(point: Point) -> Self {
        Self {
            stroke: Stroke::dot(point),
        }
    }

    pub fn extend(&mut self, point: Point) {
        self.stroke.push(point);
    }

    pub fn points(&self) -> &[Point] {
        self.stroke.points()
    }

    /// Finalize into an immutable stroke.
    pub fn finish(self) -> Stroke {
        self.stroke
    }
}

// ─── Frame ───────────────────────────────────────────────────────────────

/// One still image: zero or more strokes in commit order.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Frame {
    strokes: Vec<Stroke>,
}

impl Frame {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_strokes(strokes: Vec<Stroke>) -> Self {
        Self { strokes }
    }

    pub fn strokes(&self) -> &[Stroke] {
        &self.strokes
    }

    pub fn stroke_count(&self) -> usize {
        self.strokes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.strokes.is_empty()
    }

    /// Total points across all strokes.
    pub fn point_count(&self) -> usize {
        self.strokes.iter().map(Stroke::len).sum()
    }

    pub(crate) fn push(&mut self, stroke: Stroke) {
        self.strokes.push(stroke);
    }

    pub(crate) fn replace_strokes(&mut self, strokes: Vec<Stroke>) {
        self.strokes = strokes;
    }

    /// Drop every stroke matching `pred`, returning how many were removed.
    pub(crate) fn remove_where<F>(&mut self, mut pred: F) -> usize
    where
        F: FnMut(&Stroke) -> bool,
    {
        let before = self.strokes.len();
        self.strokes.retain(|s| !pred(s));
        before - self.strokes.len()
    }
}
