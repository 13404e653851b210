//! Horizontal pointer tracking shared by the swipe galleries and the
//! services drag-scroll strip.

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct GestureState {
    pub is_dragging: bool,
    pub start_x: f64,
    pub current_delta_x: f64,
}

/// What a finished drag amounts to once compared with the swipe threshold.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwipeOutcome {
    /// Dragged left past the threshold.
    Next,
    /// Dragged right past the threshold.
    Previous,
    /// Too short, snap back.
    Cancelled,
}

impl SwipeOutcome {
    pub fn classify(delta_x: f64, threshold: f64) -> Self {
        if delta_x.abs() <= threshold {
            SwipeOutcome::Cancelled
        } else if delta_x < 0.0 {
            SwipeOutcome::Next
        } else {
            SwipeOutcome::Previous
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PointerTracker {
    state: GestureState,
}

impl PointerTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_dragging(&self) -> bool {
        self.state.is_dragging
    }

    pub fn begin(&mut self, x: f64) {
        self.state = GestureState {
            is_dragging: true,
            start_x: x,
            current_delta_x: 0.0,
        };
    }

    /// Records the new position and returns the delta, or `None` when no
    /// drag is in progress.
    pub fn update(&mut self, x: f64) -> Option<f64> {
        if !self.state.is_dragging {
            return None;
        }
        self.state.current_delta_x = x - self.state.start_x;
        Some(self.state.current_delta_x)
    }

    /// Ends the drag and hands back the final delta. Pointer-up and
    /// pointer-leave both land here; a second call returns `None`.
    pub fn end(&mut self) -> Option<f64> {
        if !self.state.is_dragging {
            return None;
        }
        let delta = self.state.current_delta_x;
        self.state = GestureState::default();
        Some(delta)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tracks_delta_from_start() {
        let mut tracker = PointerTracker::new();
        assert_eq!(tracker.update(40.0), None);

        tracker.begin(200.0);
        assert_eq!(tracker.update(170.0), Some(-30.0));
        assert_eq!(tracker.update(120.0), Some(-80.0));
        assert_eq!(tracker.end(), Some(-80.0));
        assert!(!tracker.is_dragging());
        assert_eq!(tracker.end(), None);
    }

    #[test]
    fn release_without_move_is_zero_delta() {
        let mut tracker = PointerTracker::new();
        tracker.begin(10.0);
        assert_eq!(tracker.end(), Some(0.0));
    }

    #[test]
    fn classify_against_threshold() {
        assert_eq!(SwipeOutcome::classify(-80.0, 50.0), SwipeOutcome::Next);
        assert_eq!(SwipeOutcome::classify(75.0, 50.0), SwipeOutcome::Previous);
        assert_eq!(SwipeOutcome::classify(-20.0, 50.0), SwipeOutcome::Cancelled);
        assert_eq!(SwipeOutcome::classify(50.0, 50.0), SwipeOutcome::Cancelled);
    }
}
