//! Test doubles for the display and timer collaborators.

#![allow(dead_code)]

use fb_core::{Frame, Point, Stroke};
use fb_editor::{Display, TimerHost, TimerId};
use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

pub fn dot(x: f64, y: f64) -> Stroke {
    Stroke::dot(Point::new(x, y))
}

pub fn line(points: &[(f64, f64)]) -> Stroke {
    Stroke::from_points(points.iter().copied().map(Point::from)).expect("non-empty stroke")
}

#[derive(Debug, Clone, PartialEq)]
pub enum DisplayCall {
    /// A committed frame was drawn; carries its stroke count.
    Render(usize),
    /// A live preview was drawn; carries the preview point count.
    Preview(usize),
    Clear,
    Highlight(Option<usize>),
}

/// Records every call in order.
#[derive(Debug, Default)]
pub struct RecordingDisplay {
    pub calls: Vec<DisplayCall>,
    pub last_frame: Option<Frame>,
    pub last_preview: Vec<Point>,
}

impl RecordingDisplay {
    pub fn take(&mut self) -> Vec<DisplayCall> {
        std::mem::take(&mut self.calls)
    }

    /// Stroke counts of every `Render` call, in order.
    pub fn rendered(&self) -> Vec<usize> {
        self.calls
            .iter()
            .filter_map(|c| match c {
                DisplayCall::Render(n) => Some(*n),
                _ => None,
            })
            .collect()
    }

    pub fn highlights(&self) -> Vec<Option<usize>> {
        self.calls
            .iter()
            .filter_map(|c| match c {
                DisplayCall::Highlight(h) => Some(*h),
                _ => None,
            })
            .collect()
    }
}

impl Display for RecordingDisplay {
    fn render(&mut self, frame: &Frame) {
        self.calls.push(DisplayCall::Render(frame.stroke_count()));
        self.last_frame = Some(frame.clone());
    }

    fn render_preview(&mut self, _frame: Option<&Frame>, stroke: &[Point]) {
        self.calls.push(DisplayCall::Preview(stroke.len()));
        self.last_preview = stroke.to_vec();
    }

    fn clear(&mut self) {
        self.calls.push(DisplayCall::Clear);
        self.last_frame = None;
    }

    fn highlight(&mut self, index: Option<usize>) {
        self.calls.push(DisplayCall::Highlight(index));
    }
}

/// Timer host driven by hand. Panics if a second interval is started while
/// one is still live.
#[derive(Debug, Default)]
pub struct ManualTimer {
    next_id: i32,
    pub live: Option<(TimerId, Duration)>,
    pub started: Vec<Duration>,
    pub cleared: Vec<TimerId>,
    /// Copy of `cleared` that stays readable after the timer is dropped.
    cleared_log: Rc<RefCell<Vec<TimerId>>>,
}

impl ManualTimer {
    /// Handle on the cleared ids, shared with the timer.
    pub fn cleared_log(&self) -> Rc<RefCell<Vec<TimerId>>> {
        Rc::clone(&self.cleared_log)
    }
}

impl TimerHost for ManualTimer {
    fn set_interval(&mut self, period: Duration) -> TimerId {
        assert!(
            self.live.is_none(),
            "interval started while {:?} is still live",
            self.live
        );
        self.next_id += 1;
        let id = TimerId(self.next_id);
        self.live = Some((id, period));
        self.started.push(period);
        id
    }

    fn clear_interval(&mut self, id: TimerId) {
        if self.live.map(|(live, _)| live) == Some(id) {
            self.live = None;
        }
        self.cleared.push(id);
        self.cleared_log.borrow_mut().push(id);
    }
}
