//! Edit commands and their application to the frame store.
//!
//! Tools and UI buttons both speak `EditCommand`; `apply_command` is the
//! single place where they turn into `FrameStore` calls.

use fb_core::{FrameStore, Point, StoreError, Stroke};

/// A document edit requested by a tool or a UI control.
#[derive(Debug, Clone, PartialEq)]
pub enum EditCommand {
    AddFrame,
    InsertFrameAfterSelected,
    DeleteFrame(usize),
    DeleteSelectedFrame,
    SelectFrame(usize),
    /// Commit a finished stroke to the selected frame.
    CommitStroke(Stroke),
    /// Erase strokes around a point using the configured half-size.
    Erase(Point),
    Undo,
}

/// Apply one command. Returns `true` if the document changed.
///
/// A stroke finished while nothing is selected first creates a frame to hold
/// it, so drawing on an empty document just works.
///
/// # Errors
/// Propagates `StoreError` from the store; with the guard above this only
/// happens if the store is in an inconsistent state.
pub fn apply_command(
    store: &mut FrameStore,
    command: EditCommand,
    eraser_half_size: f64,
) -> Result<bool, StoreError> {
    let changed = match command {
        EditCommand::AddFrame => {
            store.add_frame();
            true
        }
        EditCommand::InsertFrameAfterSelected => {
            store.insert_after_selected();
            true
        }
        EditCommand::DeleteFrame(index) => store.delete_frame(index),
        EditCommand::DeleteSelectedFrame => store.delete_selected(),
        EditCommand::SelectFrame(index) => store.select_frame(index),
        EditCommand::CommitStroke(stroke) => {
            if store.selected_frame_index().is_none() {
                store.add_frame();
            }
            store.commit_stroke(stroke)?;
            true
        }
        EditCommand::Erase(point) => store.erase(point, eraser_half_size) > 0,
        EditCommand::Undo => store.undo().is_some(),
    };
    Ok(changed)
}
