//! Scroll arithmetic for the services card strip.

/// Hold-to-scroll step: advance by `step`, jump back to the start once the
/// end is reached.
pub fn hold_step(scroll_left: f64, max_scroll: f64, step: f64) -> f64 {
    if scroll_left + step >= max_scroll {
        0.0
    } else {
        scroll_left + step
    }
}

/// Arrow buttons. `Some` is an absolute jump, `None` means scroll by `step`
/// smoothly.
pub fn arrow_target(scroll_left: f64, max_scroll: f64, step: f64, forward: bool) -> Option<f64> {
    if forward {
        (scroll_left + step >= max_scroll).then_some(0.0)
    } else {
        (scroll_left <= step).then_some(max_scroll.max(0.0))
    }
}

/// Drag-to-scroll position for a drag that started at `scroll_start`.
pub fn drag_position(scroll_start: f64, delta_x: f64) -> f64 {
    scroll_start - delta_x
}

pub fn can_scroll(scroll_width: f64, client_width: f64) -> bool {
    scroll_width > client_width
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hold_scroll_wraps_at_end() {
        assert_eq!(hold_step(0.0, 100.0, 8.0), 8.0);
        assert_eq!(hold_step(90.0, 100.0, 8.0), 98.0);
        assert_eq!(hold_step(92.0, 100.0, 8.0), 0.0);
    }

    #[test]
    fn arrows_wrap_both_ways() {
        assert_eq!(arrow_target(1000.0, 1200.0, 300.0, true), Some(0.0));
        assert_eq!(arrow_target(100.0, 1200.0, 300.0, true), None);
        assert_eq!(arrow_target(200.0, 1200.0, 300.0, false), Some(1200.0));
        assert_eq!(arrow_target(900.0, 1200.0, 300.0, false), None);
    }

    #[test]
    fn drag_moves_against_pointer() {
        assert_eq!(drag_position(400.0, -120.0), 520.0);
        assert!(can_scroll(1800.0, 1200.0));
        assert!(!can_scroll(1200.0, 1200.0));
    }
}
