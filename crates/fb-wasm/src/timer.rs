//! `window.setInterval` as a playback timer host.

use fb_editor::{TimerHost, TimerId};
use std::time::Duration;
use wasm_bindgen::JsValue;

/// Fires a JS callback on a browser interval. The callback is expected to
/// call `FlipbookCanvas::tick`.
pub struct IntervalTimer {
    callback: js_sys::Function,
}

impl IntervalTimer {
    pub fn new(callback: js_sys::Function) -> Self {
        Self { callback }
    }
}

/// Browser intervals take whole milliseconds; never ask for 0.
fn period_ms(period: Duration) -> i32 {
    i32::try_from(period.as_millis()).unwrap_or(i32::MAX).max(1)
}

impl TimerHost for IntervalTimer {
    fn set_interval(&mut self, period: Duration) -> TimerId {
        let ms = period_ms(period);
        let handle = web_sys::window()
            .ok_or_else(|| JsValue::from_str("no window"))
            .and_then(|w| {
                w.set_interval_with_callback_and_timeout_and_arguments_0(&self.callback, ms)
            });
        match handle {
            Ok(id) => TimerId(id),
            Err(e) => {
                log::error!("setInterval failed: {e:?}");
                TimerId(0)
            }
        }
    }

    fn clear_interval(&mut self, id: TimerId) {
        if let Some(w) = web_sys::window() {
            w.clear_interval_with_handle(id.0);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn periods_round_down_to_whole_ms() {
        assert_eq!(period_ms(Duration::from_secs(1) / 3), 333);
        assert_eq!(period_ms(Duration::from_millis(125)), 125);
        assert_eq!(period_ms(Duration::from_micros(10)), 1);
    }
}
