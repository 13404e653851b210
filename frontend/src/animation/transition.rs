//! Swipe gallery state machine.
//!
//! A gallery is either idle or animating exactly one transition. While a
//! transition is in flight the outgoing image (`display_index`) sits on top
//! and slides away, the incoming one (`pending_index`) waits beneath it.
//! Every trigger that arrives in the meantime is dropped.

use super::gesture::{PointerTracker, SwipeOutcome};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlideDirection {
    /// Outgoing image leaves to the left, incoming follows from the right.
    Forward,
    Backward,
}

impl SlideDirection {
    /// Direction implied by a drag delta, falling back to the index order
    /// when the delta is exactly zero (dot clicks).
    pub fn infer(current: usize, target: usize, delta_x: f64) -> Self {
        if delta_x < 0.0 {
            SlideDirection::Forward
        } else if delta_x > 0.0 {
            SlideDirection::Backward
        } else if target > current {
            SlideDirection::Forward
        } else {
            SlideDirection::Backward
        }
    }

    /// Final translation of the outgoing layer, in percent of its width.
    pub fn exit_percent(self) -> i32 {
        match self {
            SlideDirection::Forward => -100,
            SlideDirection::Backward => 100,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransitionState {
    pub display_index: usize,
    pub pending_index: Option<usize>,
    pub direction: SlideDirection,
}

impl Default for TransitionState {
    fn default() -> Self {
        Self {
            display_index: 0,
            pending_index: None,
            direction: SlideDirection::Forward,
        }
    }
}

impl TransitionState {
    pub fn is_animating(&self) -> bool {
        self.pending_index.is_some()
    }
}

/// The two stacked layers a gallery renders.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GalleryLayers {
    /// Static image underneath, revealed as the top layer leaves.
    pub base: usize,
    pub top: usize,
    /// Set while the top layer is sliding out.
    pub exiting: Option<SlideDirection>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SwipeGallery {
    len: usize,
    current: usize,
    transition: TransitionState,
    pointer: PointerTracker,
    drag_x: f64,
    transitions_enabled: bool,
    threshold: f64,
}

impl SwipeGallery {
    pub fn new(len: usize, threshold: f64) -> Self {
        Self {
            len,
            current: 0,
            transition: TransitionState::default(),
            pointer: PointerTracker::new(),
            drag_x: 0.0,
            transitions_enabled: true,
            threshold,
        }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn current(&self) -> usize {
        self.current
    }

    pub fn drag_x(&self) -> f64 {
        self.drag_x
    }

    pub fn is_dragging(&self) -> bool {
        self.pointer.is_dragging()
    }

    pub fn is_animating(&self) -> bool {
        self.transition.is_animating()
    }

    pub fn transitions_enabled(&self) -> bool {
        self.transitions_enabled
    }

    pub fn transition(&self) -> &TransitionState {
        &self.transition
    }

    /// Images can arrive after mount; keeps the current index in range.
    pub fn set_len(&mut self, len: usize) {
        self.len = len;
        if self.current >= len {
            self.current = 0;
            self.transition = TransitionState::default();
        }
    }

    pub fn next_index(&self) -> usize {
        if self.len == 0 {
            0
        } else {
            (self.current + 1) % self.len
        }
    }

    pub fn previous_index(&self) -> usize {
        if self.len == 0 {
            0
        } else {
            (self.current + self.len - 1) % self.len
        }
    }

    fn accepts_gestures(&self) -> bool {
        self.len >= 2 && !self.is_animating()
    }

    /// Returns false when the gesture is ignored.
    pub fn pointer_down(&mut self, x: f64) -> bool {
        if !self.accepts_gestures() {
            return false;
        }
        self.pointer.begin(x);
        true
    }

    pub fn pointer_move(&mut self, x: f64) {
        if self.is_animating() {
            return;
        }
        if let Some(delta) = self.pointer.update(x) {
            self.drag_x = delta;
        }
    }

    /// Pointer-up and pointer-leave. `None` when nothing was being dragged.
    pub fn pointer_release(&mut self) -> Option<SwipeOutcome> {
        let delta = self.pointer.end()?;
        let outcome = SwipeOutcome::classify(delta, self.threshold);
        match outcome {
            SwipeOutcome::Next => {
                let target = self.next_index();
                self.begin(target, SlideDirection::infer(self.current, target, delta));
            }
            SwipeOutcome::Previous => {
                let target = self.previous_index();
                self.begin(target, SlideDirection::infer(self.current, target, delta));
            }
            SwipeOutcome::Cancelled => {}
        }
        self.drag_x = 0.0;
        Some(outcome)
    }

    /// Pagination dots.
    pub fn go_to(&mut self, target: usize) -> bool {
        if target >= self.len {
            return false;
        }
        let direction = SlideDirection::infer(self.current, target, 0.0);
        self.begin(target, direction)
    }

    pub fn next(&mut self) -> bool {
        let target = self.next_index();
        self.begin(target, SlideDirection::Forward)
    }

    pub fn previous(&mut self) -> bool {
        let target = self.previous_index();
        self.begin(target, SlideDirection::Backward)
    }

    fn begin(&mut self, target: usize, direction: SlideDirection) -> bool {
        if self.is_animating() || target == self.current {
            return false;
        }
        self.transition = TransitionState {
            display_index: self.current,
            pending_index: Some(target),
            direction,
        };
        true
    }

    /// Called once the slide duration has elapsed. Transitions stay
    /// disabled until [`SwipeGallery::frame_rendered`] so the swapped layers
    /// do not animate back into place.
    pub fn finish(&mut self) -> bool {
        let Some(pending) = self.transition.pending_index else {
            return false;
        };
        self.current = pending;
        self.transition = TransitionState {
            display_index: pending,
            pending_index: None,
            direction: self.transition.direction,
        };
        self.transitions_enabled = false;
        true
    }

    pub fn frame_rendered(&mut self) {
        self.transitions_enabled = true;
    }

    pub fn layers(&self) -> GalleryLayers {
        match self.transition.pending_index {
            Some(pending) => GalleryLayers {
                base: pending,
                top: self.transition.display_index,
                exiting: Some(self.transition.direction),
            },
            None => GalleryLayers {
                base: self.current,
                top: self.current,
                exiting: None,
            },
        }
    }

    /// Top layer opacity while dragging; fades to half over `fade_distance`.
    pub fn drag_opacity(&self, fade_distance: f64) -> f64 {
        if fade_distance <= 0.0 {
            return 1.0;
        }
        (1.0 - self.drag_x.abs() / fade_distance).max(0.5)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const THRESHOLD: f64 = 50.0;

    fn drag(gallery: &mut SwipeGallery, delta: f64) -> Option<SwipeOutcome> {
        gallery.pointer_down(300.0);
        gallery.pointer_move(300.0 + delta);
        gallery.pointer_release()
    }

    #[test]
    fn next_wraps_after_len_steps() {
        for len in 1..6 {
            for start in 0..len {
                let mut gallery = SwipeGallery::new(len, THRESHOLD);
                if start != 0 {
                    assert!(gallery.go_to(start));
                    gallery.finish();
                }
                for _ in 0..len {
                    gallery.next();
                    gallery.finish();
                    gallery.frame_rendered();
                }
                assert_eq!(gallery.current(), start, "len {len} start {start}");
            }
        }
    }

    #[test]
    fn previous_from_first_goes_to_last() {
        let mut gallery = SwipeGallery::new(4, THRESHOLD);
        assert_eq!(gallery.previous_index(), 3);
        assert!(gallery.previous());
        assert_eq!(gallery.transition().direction, SlideDirection::Backward);
        gallery.finish();
        assert_eq!(gallery.current(), 3);
        assert_eq!(gallery.next_index(), 0);
    }

    #[test]
    fn triggers_are_dropped_while_animating() {
        let mut gallery = SwipeGallery::new(3, THRESHOLD);
        assert!(gallery.next());
        let snapshot = gallery.clone();

        assert!(!gallery.next());
        assert!(!gallery.previous());
        assert!(!gallery.go_to(2));
        assert!(!gallery.pointer_down(10.0));
        gallery.pointer_move(-200.0);
        assert_eq!(gallery.pointer_release(), None);
        assert_eq!(gallery, snapshot);

        assert!(gallery.finish());
        assert_eq!(gallery.current(), 1);
    }

    #[test]
    fn pending_index_only_while_animating() {
        let mut gallery = SwipeGallery::new(3, THRESHOLD);
        assert!(!gallery.is_animating());
        assert_eq!(gallery.transition().pending_index, None);

        gallery.go_to(2);
        assert!(gallery.is_animating());
        assert_eq!(gallery.transition().pending_index, Some(2));
        assert_eq!(gallery.transition().display_index, 0);

        gallery.finish();
        assert!(!gallery.is_animating());
        assert_eq!(gallery.transition().pending_index, None);
        assert_eq!(gallery.transition().display_index, 2);
        assert!(!gallery.finish());
    }

    #[test]
    fn go_to_current_is_noop() {
        let mut gallery = SwipeGallery::new(3, THRESHOLD);
        assert!(!gallery.go_to(0));
        assert!(!gallery.go_to(7));
        assert!(!gallery.is_animating());
    }

    #[test]
    fn long_left_drag_advances() {
        let images = ["A", "B", "C"];
        let mut gallery = SwipeGallery::new(images.len(), THRESHOLD);

        assert_eq!(drag(&mut gallery, -80.0), Some(SwipeOutcome::Next));
        assert!(gallery.is_animating());
        assert_eq!(gallery.transition().direction, SlideDirection::Forward);
        assert_eq!(gallery.layers().top, 0);
        assert_eq!(gallery.layers().base, 1);

        gallery.finish();
        assert_eq!(gallery.current(), 1);
        assert_eq!(images[gallery.layers().top], "B");
    }

    #[test]
    fn short_drag_snaps_back() {
        let mut gallery = SwipeGallery::new(3, THRESHOLD);
        gallery.pointer_down(300.0);
        gallery.pointer_move(280.0);
        assert_eq!(gallery.drag_x(), -20.0);
        assert!(gallery.drag_opacity(400.0) < 1.0);

        assert_eq!(gallery.pointer_release(), Some(SwipeOutcome::Cancelled));
        assert_eq!(gallery.current(), 0);
        assert_eq!(gallery.drag_x(), 0.0);
        assert_eq!(gallery.drag_opacity(400.0), 1.0);
        assert!(!gallery.is_animating());
    }

    #[test]
    fn right_drag_goes_back() {
        let mut gallery = SwipeGallery::new(3, THRESHOLD);
        assert_eq!(drag(&mut gallery, 90.0), Some(SwipeOutcome::Previous));
        assert_eq!(gallery.transition().direction, SlideDirection::Backward);
        gallery.finish();
        assert_eq!(gallery.current(), 2);
    }

    #[test]
    fn single_image_ignores_gestures() {
        let mut gallery = SwipeGallery::new(1, THRESHOLD);
        assert!(!gallery.pointer_down(0.0));
        gallery.pointer_move(-100.0);
        assert_eq!(gallery.drag_x(), 0.0);
        assert_eq!(gallery.pointer_release(), None);
    }

    #[test]
    fn dot_direction_follows_index_order() {
        let mut gallery = SwipeGallery::new(5, THRESHOLD);
        gallery.go_to(3);
        assert_eq!(gallery.transition().direction, SlideDirection::Forward);
        gallery.finish();
        gallery.go_to(1);
        assert_eq!(gallery.transition().direction, SlideDirection::Backward);
    }

    #[test]
    fn transitions_disabled_for_one_frame_after_swap() {
        let mut gallery = SwipeGallery::new(2, THRESHOLD);
        gallery.next();
        assert!(gallery.transitions_enabled());
        gallery.finish();
        assert!(!gallery.transitions_enabled());
        gallery.frame_rendered();
        assert!(gallery.transitions_enabled());
    }

    #[test]
    fn shrinking_len_resets_index() {
        let mut gallery = SwipeGallery::new(4, THRESHOLD);
        gallery.go_to(3);
        gallery.finish();
        gallery.set_len(2);
        assert_eq!(gallery.current(), 0);
        assert!(!gallery.is_animating());
    }
}
