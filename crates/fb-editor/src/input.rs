//! Input abstraction layer.
//!
//! Mouse and touch events arrive already translated into canvas-local
//! coordinates and are normalized into one `InputEvent` enum consumed by
//! tools.

use fb_core::Point;

/// A normalized input event from any pointing device.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    /// Pointer pressed (mouse down, touch start).
    PointerDown { x: f64, y: f64 },

    /// Pointer moved (mouse move, touch move). Sent whether or not a button
    /// is held; tools ignore moves outside a gesture.
    PointerMove { x: f64, y: f64 },

    /// Pointer released (mouse up, touch end).
    PointerUp { x: f64, y: f64 },
}

impl InputEvent {
    pub fn from_pointer_down(x: f64, y: f64) -> Self {
        Self::PointerDown { x, y }
    }

    pub fn from_pointer_move(x: f64, y: f64) -> Self {
        Self::PointerMove { x, y }
    }

    pub fn from_pointer_up(x: f64, y: f64) -> Self {
        Self::PointerUp { x, y }
    }

    /// Canvas-space position of the event.
    pub fn position(&self) -> Point {
        match *self {
            Self::PointerDown { x, y } | Self::PointerMove { x, y } | Self::PointerUp { x, y } => {
                Point::new(x, y)
            }
        }
    }
}
