//! Per-frame undo history.
//!
//! The history is a stack of strokes in commit order for the *selected*
//! frame only. Flattening the stack reproduces the frame's stroke list, so
//! undo is "pop, then reset the frame to what is left". The stack is rebuilt
//! from a snapshot whenever the selection changes instead of being patched.

use crate::model::{Frame, Stroke};

#[derive(Debug, Clone, Default)]
pub struct UndoHistory {
    stack: Vec<Stroke>,
}

impl UndoHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild from a frame's current strokes. The strokes are cloned so
    /// history entries stay independent of later edits to the live frame.
    pub fn snapshot(frame: &Frame) -> Self {
        Self {
            stack: frame.strokes().to_vec(),
        }
    }

    /// Record a committed stroke.
    pub fn push(&mut self, stroke: Stroke) {
        self.stack.push(stroke);
    }

    /// Remove and return the most recent stroke.
    pub fn pop(&mut self) -> Option<Stroke> {
        self.stack.pop()
    }

    /// The frame content implied by the history: every recorded stroke in
    /// commit order.
    pub fn flatten(&self) -> Vec<Stroke> {
        self.stack.clone()
    }

    pub fn can_undo(&self) -> bool {
        !self.stack.is_empty()
    }

    pub fn depth(&self) -> usize {
        self.stack.len()
    }
}
