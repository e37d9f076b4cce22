//! Latest-value input shared between host event handlers and the frame loop.
//!
//! Handlers overwrite the pointer and scroll offset whenever the host
//! reports them; the loop reads them once at the top of each tick. There is
//! no queue: intermediate samples between two ticks are lost.

use glam::DVec2;

/// Most recent pointer position and document scroll offset.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct InputSample {
    pointer: Option<DVec2>,
    scroll_offset: f64,
}

impl InputSample {
    /// Records a pointer position. Non-finite samples are ignored.
    pub fn set_pointer(&mut self, x: f64, y: f64) {
        if x.is_finite() && y.is_finite() {
            self.pointer = Some(DVec2::new(x, y));
        }
    }

    /// Forgets the pointer (it left the document).
    pub fn clear_pointer(&mut self) {
        self.pointer = None;
    }

    /// Records the vertical scroll offset. Non-finite samples are ignored.
    pub fn set_scroll_offset(&mut self, offset: f64) {
        if offset.is_finite() {
            self.scroll_offset = offset;
        }
    }

    pub fn pointer(&self) -> Option<DVec2> {
        self.pointer
    }

    pub fn scroll_offset(&self) -> f64 {
        self.scroll_offset
    }
}

/// Turns per-tick scroll offsets into a scroll velocity (offset delta).
#[derive(Debug, Clone, Copy, Default)]
pub struct ScrollTracker {
    previous: Option<f64>,
}

impl ScrollTracker {
    /// Returns `current - previous` and remembers `current`.
    ///
    /// The first sample after construction or [`reset`](Self::reset) has
    /// nothing to compare against and yields 0.
    pub fn sample(&mut self, current: f64) -> f64 {
        let velocity = self.previous.map_or(0.0, |prev| current - prev);
        self.previous = Some(current);
        velocity
    }

    pub fn reset(&mut self) {
        self.previous = None;
    }
}

/// What a single tick observes.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct FrameInput {
    pub pointer: Option<DVec2>,
    pub scroll_velocity: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn last_pointer_wins() {
        let mut input = InputSample::default();
        assert_eq!(input.pointer(), None);
        input.set_pointer(1.0, 2.0);
        input.set_pointer(30.0, 40.0);
        assert_eq!(input.pointer(), Some(DVec2::new(30.0, 40.0)));
        input.clear_pointer();
        assert_eq!(input.pointer(), None);
    }

    #[test]
    fn non_finite_samples_are_ignored() {
        let mut input = InputSample::default();
        input.set_pointer(5.0, 5.0);
        input.set_pointer(f64::NAN, 1.0);
        input.set_pointer(1.0, f64::INFINITY);
        assert_eq!(input.pointer(), Some(DVec2::new(5.0, 5.0)));

        input.set_scroll_offset(120.0);
        input.set_scroll_offset(f64::NAN);
        assert_eq!(input.scroll_offset(), 120.0);
    }

    #[test]
    fn first_scroll_sample_is_still() {
        let mut tracker = ScrollTracker::default();
        assert_eq!(tracker.sample(500.0), 0.0);
        assert_eq!(tracker.sample(520.0), 20.0);
        assert_eq!(tracker.sample(510.0), -10.0);
        assert_eq!(tracker.sample(510.0), 0.0);
    }

    #[test]
    fn reset_forgets_previous_offset() {
        let mut tracker = ScrollTracker::default();
        tracker.sample(100.0);
        tracker.reset();
        assert_eq!(tracker.sample(900.0), 0.0);
    }
}
