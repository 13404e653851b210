//! Reveal-on-scroll flag behind the `use_visibility` hook.

use crate::config::reveal;

#[derive(Debug, Clone, PartialEq)]
pub struct RevealOptions {
    /// Fraction of the element that has to be on screen.
    pub threshold: f64,
    pub root_margin: String,
    /// Stay visible after the first intersection and stop observing.
    pub trigger_once: bool,
}

impl Default for RevealOptions {
    fn default() -> Self {
        Self {
            threshold: reveal::THRESHOLD,
            root_margin: reveal::ROOT_MARGIN.to_string(),
            trigger_once: true,
        }
    }
}

impl RevealOptions {
    pub fn repeating() -> Self {
        Self {
            trigger_once: false,
            ..Self::default()
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct VisibilityUpdate {
    pub changed: bool,
    /// The observer can let go of the element.
    pub unobserve: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Visibility {
    trigger_once: bool,
    visible: bool,
    settled: bool,
}

impl Visibility {
    pub fn new(trigger_once: bool) -> Self {
        Self {
            trigger_once,
            visible: false,
            settled: false,
        }
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn observe(&mut self, is_intersecting: bool) -> VisibilityUpdate {
        if self.settled {
            return VisibilityUpdate::default();
        }
        if is_intersecting {
            let changed = !self.visible;
            self.visible = true;
            if self.trigger_once {
                self.settled = true;
            }
            VisibilityUpdate {
                changed,
                unobserve: self.settled,
            }
        } else if !self.trigger_once && self.visible {
            self.visible = false;
            VisibilityUpdate {
                changed: true,
                unobserve: false,
            }
        } else {
            VisibilityUpdate::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let options = RevealOptions::default();
        assert_eq!(options.threshold, 0.1);
        assert_eq!(options.root_margin, "0px 0px -50px 0px");
        assert!(options.trigger_once);
        assert!(!RevealOptions::repeating().trigger_once);
    }

    #[test]
    fn one_shot_sticks() {
        let mut visibility = Visibility::new(true);
        assert_eq!(visibility.observe(false), VisibilityUpdate::default());

        let first = visibility.observe(true);
        assert!(first.changed && first.unobserve);
        assert!(visibility.is_visible());

        assert_eq!(visibility.observe(false), VisibilityUpdate::default());
        assert!(visibility.is_visible());
    }

    #[test]
    fn repeating_follows_intersection() {
        let mut visibility = Visibility::new(false);
        let states: Vec<bool> = [true, true, false, false, true]
            .into_iter()
            .map(|hit| {
                visibility.observe(hit);
                visibility.is_visible()
            })
            .collect();
        assert_eq!(states, vec![true, true, false, false, true]);
        assert!(!visibility.observe(true).unobserve);
    }
}
