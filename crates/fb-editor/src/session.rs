//! Editor session: the single owner of all mutable editor state.
//!
//! The session holds the frame store, the drawing tools, the playback
//! scheduler, and the configuration, together with the display and timer
//! collaborators. Every input event and UI action runs to completion here
//! before the next one is processed, so no component ever observes a
//! half-applied mutation.

use crate::commands::{EditCommand, apply_command};
use crate::display::Display;
use crate::input::InputEvent;
use crate::playback::{FrameRate, PlaybackScheduler, PlaybackState, TimerHost};
use crate::tools::{EraserTool, StrokeBuilder, Tool, ToolKind};
use fb_core::{ConfigError, EditorConfig, FrameStore, StoreError};
use serde::Serialize;

/// One row of the timeline strip.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TimelineEntry {
    pub index: usize,
    pub stroke_count: usize,
}

/// What the timeline widget needs to draw itself.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TimelineSnapshot {
    pub frames: Vec<TimelineEntry>,
    pub selected: Option<usize>,
    /// Frame highlighted by playback, if running.
    pub playing: Option<usize>,
}

pub struct EditorSession<D: Display, H: TimerHost> {
    store: FrameStore,
    config: EditorConfig,
    active_tool: ToolKind,
    pen: StrokeBuilder,
    eraser: EraserTool,
    playback: PlaybackScheduler,
    display: D,
    timer: H,
}

impl<D: Display, H: TimerHost> EditorSession<D, H> {
    /// Start a session with an empty document.
    ///
    /// # Errors
    /// Returns the config validation failure, if any.
    pub fn new(config: EditorConfig, display: D, timer: H) -> Result<Self, ConfigError> {
        config.validate()?;
        let frame_rate = FrameRate::new(config.frame_rate).ok_or(ConfigError::ZeroFrameRate)?;
        let mut session = Self {
            store: FrameStore::new(),
            config,
            active_tool: ToolKind::Pen,
            pen: StrokeBuilder::new(),
            eraser: EraserTool::new(),
            playback: PlaybackScheduler::new(frame_rate),
            display,
            timer,
        };
        session.redraw();
        Ok(session)
    }

    // ─── Accessors ───────────────────────────────────────────────────────

    pub fn store(&self) -> &FrameStore {
        &self.store
    }

    pub fn config(&self) -> &EditorConfig {
        &self.config
    }

    pub fn display(&self) -> &D {
        &self.display
    }

    pub fn display_mut(&mut self) -> &mut D {
        &mut self.display
    }

    pub fn timer(&self) -> &H {
        &self.timer
    }

    pub fn playback(&self) -> &PlaybackScheduler {
        &self.playback
    }

    pub fn active_tool(&self) -> ToolKind {
        self.active_tool
    }

    pub fn timeline(&self) -> TimelineSnapshot {
        TimelineSnapshot {
            frames: self
                .store
                .frames()
                .iter()
                .enumerate()
                .map(|(index, frame)| TimelineEntry {
                    index,
                    stroke_count: frame.stroke_count(),
                })
                .collect(),
            selected: self.store.selected_frame_index(),
            playing: self.playback.highlighted(),
        }
    }

    // ─── Input ───────────────────────────────────────────────────────────

    pub fn set_tool(&mut self, kind: ToolKind) {
        if kind != self.active_tool {
            log::debug!("TOOL {} -> {}", self.active_tool.name(), kind.name());
        }
        self.active_tool = kind;
        self.pen.set_mode(kind);
    }

    /// Route a pointer event through the active tool and apply the result.
    /// Returns `true` if the document changed.
    ///
    /// Pointer-up reaches both tools, so a gesture begun before a tool switch
    /// is still finished by its own release.
    ///
    /// # Errors
    /// Propagates a `StoreError` from committing a stroke.
    pub fn handle_event(&mut self, event: InputEvent) -> Result<bool, StoreError> {
        let mut commands = match self.active_tool {
            ToolKind::Pen => self.pen.handle(&event),
            ToolKind::Eraser => self.eraser.handle(&event),
        };
        if matches!(event, InputEvent::PointerUp { .. }) {
            let inactive: &mut dyn Tool = match self.active_tool {
                ToolKind::Pen => &mut self.eraser,
                ToolKind::Eraser => &mut self.pen,
            };
            commands.extend(inactive.handle(&event));
        }

        let mut changed = false;
        for command in commands {
            changed |= apply_command(&mut self.store, command, self.config.eraser_half_size)?;
        }

        if changed {
            self.redraw();
        } else if let Some(points) = self.pen.preview()
            && !self.playback.is_playing()
        {
            self.display
                .render_preview(self.store.selected_frame(), points);
        }
        Ok(changed)
    }

    // ─── Frame operations ────────────────────────────────────────────────

    /// Apply a command and redraw if it changed anything.
    ///
    /// # Errors
    /// Propagates `StoreError` (only possible for `CommitStroke`).
    pub fn execute(&mut self, command: EditCommand) -> Result<bool, StoreError> {
        let changed = apply_command(&mut self.store, command, self.config.eraser_half_size)?;
        if changed {
            self.redraw();
        }
        Ok(changed)
    }

    fn execute_logged(&mut self, command: EditCommand) -> bool {
        match self.execute(command) {
            Ok(changed) => changed,
            Err(e) => {
                log::error!("edit rejected: {e}");
                false
            }
        }
    }

    pub fn add_frame(&mut self) -> bool {
        self.execute_logged(EditCommand::AddFrame)
    }

    pub fn insert_frame(&mut self) -> bool {
        self.execute_logged(EditCommand::InsertFrameAfterSelected)
    }

    pub fn delete_frame(&mut self, index: usize) -> bool {
        self.execute_logged(EditCommand::DeleteFrame(index))
    }

    pub fn delete_selected_frame(&mut self) -> bool {
        self.execute_logged(EditCommand::DeleteSelectedFrame)
    }

    pub fn select_frame(&mut self, index: usize) -> bool {
        self.execute_logged(EditCommand::SelectFrame(index))
    }

    pub fn undo(&mut self) -> bool {
        self.execute_logged(EditCommand::Undo)
    }

    /// Show the selected frame, or a blank canvas when nothing is selected.
    /// Skipped while playing: playback owns the canvas then.
    pub fn redraw(&mut self) {
        if self.playback.is_playing() {
            return;
        }
        match self.store.selected_frame() {
            Some(frame) => self.display.render(frame),
            None => self.display.clear(),
        }
    }

    // ─── Playback ────────────────────────────────────────────────────────

    pub fn play(&mut self) -> bool {
        self.playback.play(self.store.len(), &mut self.timer)
    }

    pub fn stop(&mut self) -> bool {
        self.playback
            .stop(self.store.frames(), &mut self.display, &mut self.timer)
    }

    pub fn toggle_playback(&mut self) -> PlaybackState {
        self.playback
            .toggle(self.store.frames(), &mut self.display, &mut self.timer)
    }

    /// Deliver one timer firing. Returns the frame index shown.
    pub fn tick(&mut self) -> Option<usize> {
        self.playback
            .tick(self.store.frames(), &mut self.display, &mut self.timer)
    }

    /// Change the playback rate.
    ///
    /// # Errors
    /// `ConfigError::ZeroFrameRate` for `0`; the current rate is kept.
    pub fn set_frame_rate(&mut self, fps: u32) -> Result<(), ConfigError> {
        let Some(rate) = FrameRate::new(fps) else {
            log::warn!("ignoring frame rate 0");
            return Err(ConfigError::ZeroFrameRate);
        };
        self.config.frame_rate = fps;
        self.playback.set_frame_rate(rate, &mut self.timer);
        Ok(())
    }
}

impl<D: Display, H: TimerHost> Drop for EditorSession<D, H> {
    fn drop(&mut self) {
        self.playback.halt(&mut self.timer);
    }
}
