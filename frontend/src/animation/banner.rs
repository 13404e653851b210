//! Marquee banner that only moves while the page is being scrolled.

use super::StyleSink;

/// Offset wrapped into `[0, loop_width)`.
pub fn wrap_offset(offset: f64, loop_width: f64) -> f64 {
    if loop_width <= 0.0 {
        return 0.0;
    }
    offset.rem_euclid(loop_width)
}

pub fn translate_x(offset: f64, loop_width: f64) -> String {
    format!("translateX({}px)", -wrap_offset(offset, loop_width))
}

#[derive(Debug, Clone, PartialEq)]
pub struct BannerLoop {
    offset: f64,
    speed: f64,
    scrolling: bool,
}

impl BannerLoop {
    pub fn new(speed: f64) -> Self {
        Self {
            offset: 0.0,
            speed: speed.max(0.0),
            scrolling: false,
        }
    }

    #[cfg(test)]
    pub fn offset(&self) -> f64 {
        self.offset
    }

    /// Returns true when the caller has to start the frame loop.
    pub fn on_scroll(&mut self) -> bool {
        if self.scrolling {
            return false;
        }
        self.scrolling = true;
        true
    }

    /// Debounce expired. The next frame sees the flag and stops.
    pub fn on_idle(&mut self) {
        self.scrolling = false;
    }

    /// Advances one frame. `None` means the loop should not be rescheduled.
    pub fn on_frame(&mut self) -> Option<f64> {
        if !self.scrolling {
            return None;
        }
        self.offset += self.speed;
        Some(self.offset)
    }

    /// Writes the current offset to each row, wrapped by that row's width.
    pub fn apply(&self, rows: &[(&dyn StyleSink, f64)]) {
        for (row, loop_width) in rows {
            row.set_transform(&translate_x(self.offset, *loop_width));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::animation::tests::Recorder;

    #[test]
    fn frozen_until_scrolled() {
        let mut banner = BannerLoop::new(2.0);
        assert_eq!(banner.on_frame(), None);
        assert_eq!(banner.offset(), 0.0);
    }

    #[test]
    fn scroll_starts_loop_once() {
        let mut banner = BannerLoop::new(2.0);
        assert!(banner.on_scroll());
        assert!(!banner.on_scroll());
        assert!(!banner.on_scroll());
        assert_eq!(banner.on_frame(), Some(2.0));
        assert_eq!(banner.on_frame(), Some(4.0));

        banner.on_idle();
        assert_eq!(banner.on_frame(), None);
        assert_eq!(banner.offset(), 4.0);
        assert!(banner.on_scroll());
    }

    #[test]
    fn offset_never_decreases_and_wraps_per_direction() {
        let mut banner = BannerLoop::new(7.0);
        banner.on_scroll();
        let mut last = banner.offset();
        for _ in 0..1000 {
            let offset = banner.on_frame().unwrap_or(last);
            assert!(offset >= last);
            last = offset;
            for width in [2000.0, 1200.0] {
                let wrapped = wrap_offset(offset, width);
                assert!((0.0..width).contains(&wrapped), "{wrapped} outside {width}");
            }
        }
        assert_eq!(wrap_offset(7000.0, 2000.0), 1000.0);
        assert_eq!(wrap_offset(7000.0, 1200.0), 1000.0);
    }

    #[test]
    fn apply_writes_each_row() {
        let mut banner = BannerLoop::new(2.0);
        banner.on_scroll();
        for _ in 0..650 {
            banner.on_frame();
        }
        let en = Recorder::default();
        let ar = Recorder::default();
        let rows: [(&dyn StyleSink, f64); 2] = [(&en, 2000.0), (&ar, 1200.0)];
        banner.apply(&rows);
        assert_eq!(en.transforms(), vec!["translateX(-1300px)".to_string()]);
        assert_eq!(ar.transforms(), vec!["translateX(-100px)".to_string()]);
    }
}
