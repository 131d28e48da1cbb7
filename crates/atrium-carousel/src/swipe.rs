//! Touch gesture accumulation.

/// Tracks one horizontal touch gesture from start to end.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct SwipeTracker {
    start_x: Option<f64>,
    delta_x: f64,
}

impl SwipeTracker {
    /// Idle tracker.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            start_x: None,
            delta_x: 0.0,
        }
    }

    /// `touchstart`: remember the origin and reset the displacement.
    pub fn start(&mut self, x: f64) {
        self.start_x = Some(x);
        self.delta_x = 0.0;
    }

    /// `touchmove`: update the displacement relative to the origin.
    pub fn move_to(&mut self, x: f64) {
        if let Some(start) = self.start_x {
            self.delta_x = x - start;
        }
    }

    /// `touchend`: the gesture's total displacement; the tracker returns to idle.
    ///
    /// Returns `None` when no gesture was in progress.
    pub fn finish(&mut self) -> Option<f64> {
        self.start_x?;
        let delta = self.delta_x;
        *self = Self::new();
        Some(delta)
    }

    /// Abandon the gesture (`touchcancel`).
    pub fn cancel(&mut self) {
        *self = Self::new();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finish_reports_displacement_from_start() {
        let mut tracker = SwipeTracker::new();
        tracker.start(200.0);
        tracker.move_to(170.0);
        tracker.move_to(120.0);
        assert_eq!(tracker.finish(), Some(-80.0));
        assert_eq!(tracker.finish(), None);
    }

    #[test]
    fn tap_without_move_has_zero_delta() {
        let mut tracker = SwipeTracker::new();
        tracker.start(10.0);
        assert_eq!(tracker.finish(), Some(0.0));
    }

    #[test]
    fn new_start_resets_previous_delta() {
        let mut tracker = SwipeTracker::new();
        tracker.start(0.0);
        tracker.move_to(300.0);
        tracker.start(50.0);
        assert_eq!(tracker.finish(), Some(0.0));
    }

    #[test]
    fn moves_without_start_are_ignored() {
        let mut tracker = SwipeTracker::new();
        tracker.move_to(90.0);
        assert_eq!(tracker.finish(), None);
        tracker.start(0.0);
        tracker.cancel();
        assert_eq!(tracker.finish(), None);
    }
}
