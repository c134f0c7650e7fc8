pub mod paint;

pub use paint::{PaintStyle, paint_frame, paint_preview, paint_thumbnail, stroke_path};
