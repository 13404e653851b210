//! Intro circle reveal.
//!
//! Phases only ever move forward. `Drawing` starts on a short timer,
//! `Expanding` when the outline stroke reports that it finished, `Done`
//! once the circle covers the viewport. The hook arms a deadline for each
//! step so a missed animation event cannot leave the overlay up.

use crate::config::intro as cfg;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum IntroPhase {
    Initial,
    Drawing,
    Expanding,
    Done,
}

impl IntroPhase {
    pub fn class_name(self) -> &'static str {
        match self {
            IntroPhase::Initial => "intro-initial",
            IntroPhase::Drawing => "intro-drawing",
            IntroPhase::Expanding => "intro-expanding",
            IntroPhase::Done => "intro-done",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameOutcome {
    pub radius: f64,
    /// True on the single frame where the scroll lock must be released.
    pub release_scroll: bool,
    /// The circle covers the viewport; no more frames are needed.
    pub covered: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct IntroSequencer {
    phase: IntroPhase,
    radius: f64,
    scroll_released: bool,
}

impl Default for IntroSequencer {
    fn default() -> Self {
        Self {
            phase: IntroPhase::Initial,
            radius: cfg::INITIAL_RADIUS_PX,
            scroll_released: false,
        }
    }
}

impl IntroSequencer {
    pub fn new() -> Self {
        Self::default()
    }

    #[cfg(test)]
    pub fn phase(&self) -> IntroPhase {
        self.phase
    }

    #[cfg(test)]
    pub fn radius(&self) -> f64 {
        self.radius
    }

    #[cfg(test)]
    pub fn scroll_released(&self) -> bool {
        self.scroll_released
    }

    /// Moves to `next` if it lies ahead of the current phase.
    pub fn advance(&mut self, next: IntroPhase) -> bool {
        if next <= self.phase {
            return false;
        }
        self.phase = next;
        true
    }

    pub fn begin_drawing(&mut self) -> bool {
        self.advance(IntroPhase::Drawing)
    }

    pub fn drawing_finished(&mut self) -> bool {
        self.advance(IntroPhase::Expanding)
    }

    /// Grows the mask by `elapsed_ms` worth of frames. Ignored outside
    /// `Expanding`.
    pub fn tick(&mut self, elapsed_ms: f64, cover_radius: f64) -> FrameOutcome {
        if self.phase != IntroPhase::Expanding {
            return FrameOutcome {
                radius: self.radius,
                release_scroll: false,
                covered: self.phase == IntroPhase::Done,
            };
        }

        self.radius += (elapsed_ms.max(0.0) / cfg::FRAME_MS) * cfg::GROWTH_PX_PER_FRAME;

        // A viewport smaller than the release radius is covered first
        let covered = self.radius >= cover_radius;
        let release_scroll =
            !self.scroll_released && (self.radius > cfg::SCROLL_RELEASE_RADIUS_PX || covered);
        if release_scroll {
            self.scroll_released = true;
        }

        if covered {
            self.phase = IntroPhase::Done;
        }

        FrameOutcome {
            radius: self.radius,
            release_scroll,
            covered,
        }
    }

    /// Jumps to `Done`. Returns true if the scroll lock still has to be
    /// released.
    pub fn finish(&mut self) -> bool {
        self.advance(IntroPhase::Done);
        if self.scroll_released {
            return false;
        }
        self.scroll_released = true;
        true
    }
}

pub fn cover_radius(width: f64, height: f64) -> f64 {
    width.max(height) * cfg::COVER_FACTOR
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn phases_only_move_forward() {
        let mut intro = IntroSequencer::new();
        assert_eq!(intro.phase(), IntroPhase::Initial);
        let mut seen = vec![intro.phase()];
        assert!(intro.begin_drawing());
        seen.push(intro.phase());
        assert!(!intro.advance(IntroPhase::Initial));
        assert!(intro.drawing_finished());
        seen.push(intro.phase());
        assert!(!intro.begin_drawing());
        intro.finish();
        seen.push(intro.phase());
        assert!(!intro.advance(IntroPhase::Expanding));

        assert!(seen.windows(2).all(|w| w[0] < w[1]));
        assert_eq!(intro.phase(), IntroPhase::Done);
    }

    #[test]
    fn radius_grows_with_elapsed_time() {
        let mut intro = IntroSequencer::new();
        intro.begin_drawing();

        let before = intro.tick(16.0, 3000.0);
        assert_eq!(before.radius, 150.0);

        intro.drawing_finished();
        assert_eq!(intro.tick(16.0, 3000.0).radius, 175.0);
        assert_eq!(intro.tick(32.0, 3000.0).radius, 225.0);
        assert_eq!(intro.tick(-5.0, 3000.0).radius, 225.0);
    }

    #[test]
    fn scroll_released_exactly_once_past_threshold() {
        let mut intro = IntroSequencer::new();
        intro.begin_drawing();
        intro.drawing_finished();

        let mut releases = Vec::new();
        loop {
            let frame = intro.tick(16.0, 2400.0);
            if frame.release_scroll {
                releases.push(frame.radius);
            }
            if frame.covered {
                break;
            }
        }
        assert_eq!(releases.len(), 1);
        assert!(releases[0] > 300.0);
        assert_eq!(intro.phase(), IntroPhase::Done);
        assert!(!intro.finish());
    }

    #[test]
    fn early_finish_still_releases() {
        let mut intro = IntroSequencer::new();
        intro.begin_drawing();
        assert!(intro.finish());
        assert!(intro.scroll_released());
        assert!(!intro.finish());
    }

    #[test]
    fn tiny_viewport_releases_scroll_when_covered() {
        let mut intro = IntroSequencer::new();
        intro.begin_drawing();
        intro.drawing_finished();

        let cover = cover_radius(160.0, 120.0);
        assert!(cover < cfg::SCROLL_RELEASE_RADIUS_PX);

        let frame = intro.tick(cfg::FRAME_MS * 4.0, cover);
        assert!(frame.covered);
        assert!(frame.release_scroll);
        assert_eq!(intro.phase(), IntroPhase::Done);
        assert!(!intro.finish());
    }

    #[test]
    fn cover_uses_larger_side() {
        assert_eq!(cover_radius(1600.0, 900.0), 2400.0);
        assert_eq!(cover_radius(400.0, 800.0), 1200.0);
    }
}
