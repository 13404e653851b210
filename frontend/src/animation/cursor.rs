//! Custom cursor follower. Mouse moves only record the target; the element
//! is written at most once per animation frame.

use super::StyleSink;
use crate::config::cursor;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CursorFollower {
    target: (f64, f64),
    frame_pending: bool,
    hovering: bool,
}

impl Default for CursorFollower {
    fn default() -> Self {
        Self {
            target: cursor::START,
            frame_pending: false,
            hovering: false,
        }
    }
}

impl CursorFollower {
    pub fn new() -> Self {
        Self::default()
    }

    #[cfg(test)]
    pub fn target(&self) -> (f64, f64) {
        self.target
    }

    /// Returns true when a frame has to be requested.
    pub fn on_move(&mut self, x: f64, y: f64) -> bool {
        self.target = (x, y);
        if self.frame_pending {
            return false;
        }
        self.frame_pending = true;
        true
    }

    pub fn on_frame(&mut self, sink: &dyn StyleSink) {
        self.frame_pending = false;
        sink.set_position(self.target.0, self.target.1);
    }

    /// Frame was dropped before it ran.
    pub fn cancel_frame(&mut self) {
        self.frame_pending = false;
    }

    /// Returns true when the hover state flipped.
    pub fn set_hovering(&mut self, hovering: bool) -> bool {
        let changed = self.hovering != hovering;
        self.hovering = hovering;
        changed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::animation::tests::Recorder;

    #[test]
    fn starts_off_screen() {
        assert_eq!(CursorFollower::new().target(), (-100.0, -100.0));
    }

    #[test]
    fn one_frame_per_burst() {
        let mut follower = CursorFollower::new();
        assert!(follower.on_move(10.0, 20.0));
        assert!(!follower.on_move(11.0, 21.0));
        assert!(!follower.on_move(12.0, 22.0));

        let sink = Recorder::default();
        follower.on_frame(&sink);
        assert_eq!(sink.positions(), vec![(12.0, 22.0)]);

        assert!(follower.on_move(13.0, 23.0));
    }

    #[test]
    fn hover_reports_flips_only() {
        let mut follower = CursorFollower::new();
        assert!(follower.set_hovering(true));
        assert!(!follower.set_hovering(true));
        assert!(follower.set_hovering(false));
    }
}
