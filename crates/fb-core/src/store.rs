//! Frame store: the ordered frame list, the selection, and the undo history
//! of the selected frame.
//!
//! Frames and history are owned together so they cannot drift apart. Every
//! operation that changes the selection rebuilds the history from the newly
//! selected frame. `commit_stroke` and `undo` are the only paths that touch
//! both, and they update both in the same call.
//!
//! Out-of-range indices are a documented no-op: `select_frame` and
//! `delete_frame` return `false` and leave the store untouched.

use crate::eraser::{EraserRegion, erase_strokes};
use crate::history::UndoHistory;
use crate::model::{Frame, Point, Stroke};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// `commit_stroke` was called before any frame existed or was selected.
    /// The calling layer must create a frame first.
    #[error("no frame is selected to receive the stroke")]
    NoFrameSelected,
}

#[derive(Debug, Clone, Default)]
pub struct FrameStore {
    frames: Vec<Frame>,
    /// `None` means nothing is selected yet (or the list was emptied).
    selected: Option<usize>,
    history: UndoHistory,
}

impl FrameStore {
    pub fn new() -> Self {
        Self::default()
    }

    // ─── Readers ─────────────────────────────────────────────────────────

    pub fn frames(&self) -> &[Frame] {
        &self.frames
    }

    pub fn frame(&self, index: usize) -> Option<&Frame> {
        self.frames.get(index)
    }

    pub fn len(&self) -> usize {
        self.frames.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    pub fn selected_frame_index(&self) -> Option<usize> {
        self.selected
    }

    /// Selection in the `-1`-means-none encoding used by UI bindings.
    pub fn selected_frame_index_i32(&self) -> i32 {
        self.selected.map_or(-1, |i| i as i32)
    }

    pub fn selected_frame(&self) -> Option<&Frame> {
        self.selected.and_then(|i| self.frames.get(i))
    }

    pub fn history(&self) -> &UndoHistory {
        &self.history
    }

    pub fn can_undo(&self) -> bool {
        self.selected.is_some() && self.history.can_undo()
    }

    // ─── Frame CRUD ──────────────────────────────────────────────────────

    /// Append an empty frame and select it. Returns the new frame's index.
    pub fn add_frame(&mut self) -> usize {
        self.frames.push(Frame::new());
        let index = self.frames.len() - 1;
        log::debug!("FRAME add #{index} (total {})", self.frames.len());
        self.select_unchecked(index);
        index
    }

    /// Insert an empty frame right after the selected one and select it.
    /// With nothing selected this is `add_frame`.
    pub fn insert_after_selected(&mut self) -> usize {
        let Some(current) = self.selected else {
            return self.add_frame();
        };
        let index = current + 1;
        self.frames.insert(index, Frame::new());
        log::debug!("FRAME insert #{index} after #{current}");
        self.select_unchecked(index);
        index
    }

    /// Remove the frame at `index`. Returns `false` if out of range.
    ///
    /// A selection past the new end is clamped to the last frame, or cleared
    /// if the list is now empty. History is rebuilt whenever the selected
    /// frame is not the one it was before.
    pub fn delete_frame(&mut self, index: usize) -> bool {
        if index >= self.frames.len() {
            return false;
        }
        self.frames.remove(index);
        log::debug!("FRAME delete #{index} (total {})", self.frames.len());

        let previous = self.selected;
        self.selected = match previous {
            _ if self.frames.is_empty() => None,
            Some(sel) if sel >= self.frames.len() => Some(self.frames.len() - 1),
            other => other,
        };

        let still_same_frame = match previous {
            Some(sel) => sel < index,
            None => true,
        };
        if !still_same_frame {
            self.rebuild_history();
        }
        true
    }

    /// Delete whichever frame is selected.
    pub fn delete_selected(&mut self) -> bool {
        match self.selected {
            Some(index) => self.delete_frame(index),
            None => false,
        }
    }

    /// Select the frame at `index`. Returns `false` if out of range.
    pub fn select_frame(&mut self, index: usize) -> bool {
        if index >= self.frames.len() {
            return false;
        }
        self.select_unchecked(index);
        true
    }

    fn select_unchecked(&mut self, index: usize) {
        self.selected = Some(index);
        self.rebuild_history();
        log::debug!(
            "FRAME select #{index} ({} strokes in history)",
            self.history.depth()
        );
    }

    fn rebuild_history(&mut self) {
        self.history = match self.selected_frame() {
            Some(frame) => UndoHistory::snapshot(frame),
            None => UndoHistory::new(),
        };
    }

    // ─── Stroke mutations ────────────────────────────────────────────────

    /// Append a stroke to the selected frame and record it for undo.
    ///
    /// # Errors
    /// `StoreError::NoFrameSelected` if no frame is selected.
    pub fn commit_stroke(&mut self, stroke: Stroke) -> Result<(), StoreError> {
        let index = self.selected.ok_or(StoreError::NoFrameSelected)?;
        let frame = self
            .frames
            .get_mut(index)
            .ok_or(StoreError::NoFrameSelected)?;
        frame.push(stroke.clone());
        self.history.push(stroke);
        log::debug!(
            "STROKE commit to #{index} ({} strokes)",
            frame.stroke_count()
        );
        Ok(())
    }

    /// Revert the most recent stroke of the selected frame.
    ///
    /// The frame is reset to exactly the flattened remaining history.
    /// Returns the removed stroke, or `None` when there is nothing to undo.
    pub fn undo(&mut self) -> Option<Stroke> {
        let index = self.selected?;
        let popped = self.history.pop()?;
        let remaining = self.history.flatten();
        if let Some(frame) = self.frames.get_mut(index) {
            frame.replace_strokes(remaining);
        }
        log::debug!("UNDO on #{index} ({} left)", self.history.depth());
        Some(popped)
    }

    /// Remove every stroke of the selected frame with a point inside the
    /// open square of `half_size` around `point`. Not recorded in history.
    /// Returns the number of strokes removed (0 with no selection).
    pub fn erase(&mut self, point: Point, half_size: f64) -> usize {
        let Some(frame) = self.selected.and_then(|i| self.frames.get_mut(i)) else {
            return 0;
        };
        erase_strokes(frame, &EraserRegion::new(point, half_size))
    }
}
