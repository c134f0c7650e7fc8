//! Tool system for canvas interactions.
//!
//! Each tool translates pointer events into `EditCommand`s. The pen tool is
//! the stroke builder: it accumulates one in-progress stroke per gesture and
//! emits it for commit on release. The eraser tool emits an erase command at
//! every pointer position while pressed.

use crate::commands::EditCommand;
use crate::input::InputEvent;
use fb_core::{Point, Stroke, StrokeDraft};

/// The active tool determines how input events are interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ToolKind {
    #[default]
    Pen,
    Eraser,
}

impl ToolKind {
    pub fn name(self) -> &'static str {
        match self {
            Self::Pen => "pen",
            Self::Eraser => "eraser",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "pen" => Some(Self::Pen),
            "eraser" => Some(Self::Eraser),
            _ => None,
        }
    }
}

/// Trait for tools that handle input and produce commands.
pub trait Tool {
    fn kind(&self) -> ToolKind;

    /// Handle an input event, returning zero or more commands.
    fn handle(&mut self, event: &InputEvent) -> Vec<EditCommand>;
}

// ─── Stroke Builder (pen) ────────────────────────────────────────────────

/// Accumulates the points of one gesture into a stroke.
///
/// While the eraser mode is active `begin` and `extend` do nothing, so no
/// stroke is accumulated during erasing. A gesture already in progress when
/// the mode changes is only finished by `end`.
#[derive(Debug, Default)]
pub struct StrokeBuilder {
    mode: ToolKind,
    draft: Option<StrokeDraft>,
}

impl StrokeBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_mode(&mut self, mode: ToolKind) {
        self.mode = mode;
    }

    pub fn mode(&self) -> ToolKind {
        self.mode
    }

    pub fn is_active(&self) -> bool {
        self.draft.is_some()
    }

    /// Start a new one-point stroke.
    pub fn begin(&mut self, point: Point) {
        if self.mode == ToolKind::Eraser {
            return;
        }
        if self.draft.is_some() {
            log::warn!("stroke begin while a gesture is active; keeping the open gesture");
            return;
        }
        self.draft = Some(StrokeDraft::begin(point));
    }

    /// Append a point to the in-progress stroke.
    pub fn extend(&mut self, point: Point) {
        if self.mode == ToolKind::Eraser {
            return;
        }
        if let Some(draft) = self.draft.as_mut() {
            draft.extend(point);
        }
    }

    /// Finalize the in-progress stroke and reset. A single point is a
    /// complete stroke. `None` when no gesture was active.
    pub fn end(&mut self) -> Option<Stroke> {
        self.draft.take().map(StrokeDraft::finish)
    }

    /// Points of the in-progress stroke, for the live preview.
    pub fn preview(&self) -> Option<&[Point]> {
        self.draft.as_ref().map(StrokeDraft::points)
    }
}

impl Tool for StrokeBuilder {
    fn kind(&self) -> ToolKind {
        ToolKind::Pen
    }

    fn handle(&mut self, event: &InputEvent) -> Vec<EditCommand> {
        match event {
            InputEvent::PointerDown { .. } => {
                self.begin(event.position());
                vec![]
            }
            InputEvent::PointerMove { .. } => {
                self.extend(event.position());
                vec![]
            }
            InputEvent::PointerUp { .. } => {
                self.end().map(EditCommand::CommitStroke).into_iter().collect()
            }
        }
    }
}

// ─── Eraser Tool ─────────────────────────────────────────────────────────

#[derive(Debug, Default)]
pub struct EraserTool {
    pressed: bool,
}

impl EraserTool {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_pressed(&self) -> bool {
        self.pressed
    }
}

impl Tool for EraserTool {
    fn kind(&self) -> ToolKind {
        ToolKind::Eraser
    }

    fn handle(&mut self, event: &InputEvent) -> Vec<EditCommand> {
        match event {
            InputEvent::PointerDown { .. } => {
                self.pressed = true;
                vec![EditCommand::Erase(event.position())]
            }
            InputEvent::PointerMove { .. } if self.pressed => {
                vec![EditCommand::Erase(event.position())]
            }
            InputEvent::PointerMove { .. } => vec![],
            InputEvent::PointerUp { .. } => {
                self.pressed = false;
                vec![]
            }
        }
    }
}
