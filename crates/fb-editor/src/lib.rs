pub mod commands;
pub mod display;
pub mod input;
pub mod playback;
pub mod session;
pub mod tools;

pub use commands::{EditCommand, apply_command};
pub use display::Display;
pub use input::InputEvent;
pub use playback::{FrameRate, PlaybackScheduler, PlaybackState, TimerHost, TimerId};
pub use session::{EditorSession, TimelineEntry, TimelineSnapshot};
pub use tools::{EraserTool, StrokeBuilder, Tool, ToolKind};
