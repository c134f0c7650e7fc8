pub mod config;
pub mod eraser;
pub mod history;
pub mod model;
pub mod store;

pub use config::{ConfigError, EditorConfig};
pub use eraser::{DEFAULT_ERASER_HALF_SIZE, EraserRegion, erase_strokes};
pub use history::UndoHistory;
pub use model::*;
pub use store::{FrameStore, StoreError};
