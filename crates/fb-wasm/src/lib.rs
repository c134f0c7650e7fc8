//! WASM bridge for Flipbook: exposes the editor session to JavaScript.
//!
//! Compiled via `wasm-pack build --target web`. The page owns the DOM (the
//! buttons, the frame-rate picker, the timeline strip) and forwards pointer
//! events and button clicks here; everything stateful lives in Rust.

mod console_log;
mod render2d;
mod timer;

use fb_core::EditorConfig;
use fb_editor::{EditorSession, InputEvent, PlaybackState, ToolKind};
use render2d::{CanvasDisplay, CanvasStyle};
use timer::IntervalTimer;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

/// The main WASM-facing canvas controller.
///
/// Holds the editor session. All interaction from the page goes through
/// this struct.
#[wasm_bindgen]
pub struct FlipbookCanvas {
    session: EditorSession<CanvasDisplay, IntervalTimer>,
    thumbnail_style: CanvasStyle,
}

#[wasm_bindgen]
impl FlipbookCanvas {
    /// Attach to a `<canvas>` element.
    ///
    /// `on_tick` is called on every playback interval and must call
    /// `tick()` on this object. `config_json` is an `EditorConfig` object;
    /// pass `"{}"` for defaults.
    #[wasm_bindgen(constructor)]
    pub fn new(
        canvas: HtmlCanvasElement,
        on_tick: js_sys::Function,
        config_json: &str,
    ) -> Result<FlipbookCanvas, JsValue> {
        console_error_panic_hook_setup();
        console_log::init(log::LevelFilter::Info);

        let config = EditorConfig::from_json(config_json).map_err(|e| {
            log::warn!("rejected config: {e}");
            JsValue::from_str(&e.to_string())
        })?;
        let ctx = canvas
            .get_context("2d")?
            .ok_or_else(|| JsValue::from_str("canvas has no 2d context"))?
            .dyn_into::<CanvasRenderingContext2d>()?;

        let style = CanvasStyle::from_config(&config);
        let display = CanvasDisplay::new(
            ctx,
            f64::from(canvas.width()),
            f64::from(canvas.height()),
            style.clone(),
        );
        let session = EditorSession::new(config, display, IntervalTimer::new(on_tick))
            .map_err(|e| JsValue::from_str(&e.to_string()))?;

        Ok(Self {
            session,
            thumbnail_style: style,
        })
    }

    /// Resize the drawing surface and redraw.
    pub fn resize(&mut self, width: f64, height: f64) {
        self.session.display_mut().resize(width, height);
        self.session.redraw();
    }

    // ─── Pointer input ───────────────────────────────────────────────────

    /// Handle pointer down. Returns `true` if the document changed.
    pub fn handle_pointer_down(&mut self, x: f64, y: f64) -> bool {
        self.handle(InputEvent::from_pointer_down(x, y))
    }

    /// Handle pointer move. Returns `true` if the document changed.
    pub fn handle_pointer_move(&mut self, x: f64, y: f64) -> bool {
        self.handle(InputEvent::from_pointer_move(x, y))
    }

    /// Handle pointer up. Returns `true` if the document changed.
    pub fn handle_pointer_up(&mut self, x: f64, y: f64) -> bool {
        self.handle(InputEvent::from_pointer_up(x, y))
    }

    /// Switch between `"pen"` and `"eraser"`. Returns `false` for an
    /// unknown name.
    pub fn set_tool(&mut self, name: &str) -> bool {
        match ToolKind::from_name(name) {
            Some(kind) => {
                self.session.set_tool(kind);
                true
            }
            None => false,
        }
    }

    pub fn get_tool_name(&self) -> String {
        self.session.active_tool().name().to_string()
    }

    // ─── Frames ──────────────────────────────────────────────────────────

    pub fn add_frame(&mut self) -> bool {
        self.session.add_frame()
    }

    pub fn insert_frame(&mut self) -> bool {
        self.session.insert_frame()
    }

    pub fn delete_frame(&mut self, index: usize) -> bool {
        self.session.delete_frame(index)
    }

    /// The delete button: remove whichever frame is selected.
    pub fn delete_selected_frame(&mut self) -> bool {
        self.session.delete_selected_frame()
    }

    pub fn select_frame(&mut self, index: usize) -> bool {
        self.session.select_frame(index)
    }

    pub fn undo(&mut self) -> bool {
        self.session.undo()
    }

    pub fn frame_count(&self) -> usize {
        self.session.store().len()
    }

    /// Selected frame index, or `-1` when nothing is selected.
    pub fn selected_frame_index(&self) -> i32 {
        self.session.store().selected_frame_index_i32()
    }

    pub fn can_undo(&self) -> bool {
        self.session.store().can_undo()
    }

    /// Timeline state as JSON:
    /// `{"frames":[{"index":0,"strokeCount":2}],"selected":0,"playing":null}`.
    pub fn get_timeline_json(&self) -> String {
        serde_json::to_string(&self.session.timeline()).unwrap_or_else(|_| "{}".to_string())
    }

    /// Draw frame `index` into a thumbnail canvas context, scaled by the
    /// configured thumbnail scale. Returns `false` for a bad index.
    pub fn render_thumbnail(
        &self,
        ctx: &CanvasRenderingContext2d,
        index: usize,
        width: f64,
        height: f64,
    ) -> bool {
        let Some(frame) = self.session.store().frame(index) else {
            return false;
        };
        render2d::render_thumbnail(
            ctx,
            frame,
            width,
            height,
            self.session.config().thumbnail_scale,
            &self.thumbnail_style,
        );
        true
    }

    // ─── Playback ────────────────────────────────────────────────────────

    /// The play/stop button. Returns `true` if now playing.
    pub fn toggle_playback(&mut self) -> bool {
        self.session.toggle_playback() == PlaybackState::Playing
    }

    pub fn play(&mut self) -> bool {
        self.session.play()
    }

    pub fn stop(&mut self) -> bool {
        self.session.stop()
    }

    pub fn is_playing(&self) -> bool {
        self.session.playback().is_playing()
    }

    /// Called from the `on_tick` interval callback. Returns the frame index
    /// shown, or `-1`.
    pub fn tick(&mut self) -> i32 {
        self.session
            .tick()
            .and_then(|i| i32::try_from(i).ok())
            .unwrap_or(-1)
    }

    /// Frame index highlighted by playback, or `-1`.
    pub fn highlighted_frame(&self) -> i32 {
        self.session
            .display()
            .highlighted()
            .and_then(|i| i32::try_from(i).ok())
            .unwrap_or(-1)
    }

    /// Set frames per second. Returns `false` (and keeps the old rate) for 0.
    pub fn set_frame_rate(&mut self, fps: u32) -> bool {
        self.session.set_frame_rate(fps).is_ok()
    }

    pub fn frame_rate(&self) -> u32 {
        self.session.playback().frame_rate().get()
    }
}

impl FlipbookCanvas {
    fn handle(&mut self, event: InputEvent) -> bool {
        match self.session.handle_event(event) {
            Ok(changed) => changed,
            Err(e) => {
                log::error!("pointer event rejected: {e}");
                false
            }
        }
    }
}

// ─── Panic hook for WASM debugging ───────────────────────────────────────

fn console_error_panic_hook_setup() {
    #[cfg(target_arch = "wasm32")]
    {
        use std::sync::Once;
        static SET_HOOK: Once = Once::new();
        SET_HOOK.call_once(|| {
            std::panic::set_hook(Box::new(|info| {
                let msg = format!("Flipbook WASM panic: {info}");
                web_sys::console::error_1(&msg.into());
            }));
        });
    }
}
