//! Timed playback of the frame sequence.
//!
//! Playback is a cancellable repeating task. The scheduler asks a
//! `TimerHost` for an interval and the host calls `tick` back on every
//! firing. At most one interval is alive at a time: every `set_interval` is
//! preceded by clearing the previous handle.

use crate::display::Display;
use fb_core::Frame;
use std::num::NonZeroU32;
use std::time::Duration;

/// Opaque handle of a live interval, as returned by the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimerId(pub i32);

/// Source of repeating timers (`window.setInterval` in the browser, a
/// manual clock in tests).
pub trait TimerHost {
    /// Start firing every `period`. The host routes each firing to
    /// `PlaybackScheduler::tick`.
    fn set_interval(&mut self, period: Duration) -> TimerId;

    fn clear_interval(&mut self, id: TimerId);
}

/// Frames per second; always positive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameRate(NonZeroU32);

impl FrameRate {
    pub fn new(fps: u32) -> Option<Self> {
        NonZeroU32::new(fps).map(Self)
    }

    pub fn get(self) -> u32 {
        self.0.get()
    }

    /// Time between ticks: `1000 / fps` milliseconds.
    pub fn period(self) -> Duration {
        Duration::from_secs(1) / self.0.get()
    }
}

impl Default for FrameRate {
    fn default() -> Self {
        Self(NonZeroU32::new(8).unwrap_or(NonZeroU32::MIN))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PlaybackState {
    #[default]
    Stopped,
    Playing,
}

#[derive(Debug, Default)]
pub struct PlaybackScheduler {
    frame_rate: FrameRate,
    state: PlaybackState,
    /// Index of the frame the next tick will show.
    current_frame_index: usize,
    /// Index shown by the most recent tick of this run.
    last_shown: Option<usize>,
    timer: Option<TimerId>,
}

impl PlaybackScheduler {
    pub fn new(frame_rate: FrameRate) -> Self {
        Self {
            frame_rate,
            ..Self::default()
        }
    }

    pub fn state(&self) -> PlaybackState {
        self.state
    }

    pub fn is_playing(&self) -> bool {
        self.state == PlaybackState::Playing
    }

    pub fn frame_rate(&self) -> FrameRate {
        self.frame_rate
    }

    pub fn current_frame_index(&self) -> usize {
        self.current_frame_index
    }

    pub fn period(&self) -> Duration {
        self.frame_rate.period()
    }

    /// Timeline entry to highlight: the frame on screen while playing.
    pub fn highlighted(&self) -> Option<usize> {
        if self.is_playing() {
            self.last_shown
        } else {
            None
        }
    }

    /// `Stopped → Playing`. Does nothing if already playing or there are no
    /// frames. Returns `true` if playback started.
    pub fn play(&mut self, frame_count: usize, host: &mut dyn TimerHost) -> bool {
        if self.is_playing() || frame_count == 0 {
            return false;
        }
        self.state = PlaybackState::Playing;
        self.current_frame_index = 0;
        self.last_shown = None;
        self.restart_timer(host);
        log::debug!(
            "PLAY {frame_count} frame(s) at {} fps ({:?})",
            self.frame_rate.get(),
            self.period()
        );
        true
    }

    /// One timer firing: show the current frame, highlight it, advance.
    ///
    /// Stops automatically if the frame list became empty. Returns the index
    /// shown, or `None` if nothing was shown.
    pub fn tick(
        &mut self,
        frames: &[Frame],
        display: &mut dyn Display,
        host: &mut dyn TimerHost,
    ) -> Option<usize> {
        if !self.is_playing() {
            return None;
        }
        if frames.is_empty() {
            log::debug!("PLAY frame list emptied, stopping");
            self.stop(frames, display, host);
            return None;
        }
        // Frames may have been deleted since the last tick.
        let index = self.current_frame_index % frames.len();
        log::trace!("TICK frame #{index}");
        display.render(&frames[index]);
        display.highlight(Some(index));
        self.last_shown = Some(index);
        self.current_frame_index = (index + 1) % frames.len();
        Some(index)
    }

    /// `Playing → Stopped`. Cancels the timer, clears the highlight, and
    /// redraws the last frame shown (the one before the next to play), or
    /// blanks the display when there are no frames. Returns `true` if
    /// playback was running.
    pub fn stop(
        &mut self,
        frames: &[Frame],
        display: &mut dyn Display,
        host: &mut dyn TimerHost,
    ) -> bool {
        if !self.is_playing() {
            return false;
        }
        self.cancel_timer(host);
        self.state = PlaybackState::Stopped;
        display.highlight(None);

        if frames.is_empty() {
            display.clear();
        } else {
            let index = self.last_shown.unwrap_or(0).min(frames.len() - 1);
            display.render(&frames[index]);
        }
        log::debug!("STOP at #{}", self.current_frame_index);
        true
    }

    /// Play if stopped, stop if playing. Returns the new state.
    pub fn toggle(
        &mut self,
        frames: &[Frame],
        display: &mut dyn Display,
        host: &mut dyn TimerHost,
    ) -> PlaybackState {
        if self.is_playing() {
            self.stop(frames, display, host);
        } else {
            self.play(frames.len(), host);
        }
        self.state
    }

    /// Change the rate. While playing, the interval is restarted at the new
    /// period; the position in the sequence is kept.
    pub fn set_frame_rate(&mut self, frame_rate: FrameRate, host: &mut dyn TimerHost) {
        if frame_rate == self.frame_rate {
            return;
        }
        self.frame_rate = frame_rate;
        if self.is_playing() {
            self.restart_timer(host);
        }
        log::debug!("RATE {} fps", frame_rate.get());
    }

    /// Cancel the timer and drop to `Stopped` without touching the display.
    /// Used on session teardown.
    pub fn halt(&mut self, host: &mut dyn TimerHost) {
        self.cancel_timer(host);
        self.state = PlaybackState::Stopped;
    }

    fn restart_timer(&mut self, host: &mut dyn TimerHost) {
        self.cancel_timer(host);
        self.timer = Some(host.set_interval(self.period()));
    }

    fn cancel_timer(&mut self, host: &mut dyn TimerHost) {
        if let Some(id) = self.timer.take() {
            host.clear_interval(id);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn period_from_rate() {
        assert_eq!(FrameRate::new(4).unwrap().period(), Duration::from_millis(250));
        assert_eq!(FrameRate::new(8).unwrap().period(), Duration::from_millis(125));
        assert_eq!(FrameRate::default().get(), 8);
    }

    #[test]
    fn zero_rate_is_rejected() {
        assert_eq!(FrameRate::new(0), None);
    }
}
