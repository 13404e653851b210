//! Compile-time tunables for the site. Animation constants live here so the
//! hooks read as behavior.

use log::Level;

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Warn // Production builds keep the console quiet
}

pub const ASSET_BASE: &str = "/assets";

pub mod banner {
    /// Pixels added to the offset on every animation frame while scrolling.
    pub const SPEED_PX_PER_FRAME: f64 = 2.0;
    pub const LOOP_WIDTH_LTR: f64 = 2000.0;
    pub const LOOP_WIDTH_RTL: f64 = 1200.0;
    /// Scroll inactivity after which the banner stops.
    pub const SCROLL_IDLE_MS: u32 = 100;
}

pub mod gallery {
    pub const SWIPE_THRESHOLD_PX: f64 = 50.0;
    pub const TRANSITION_MS: u32 = 400;
    /// Drag distance at which the top image reaches its minimum opacity.
    pub const DRAG_FADE_PX: f64 = 400.0;
    pub const MANIFEST_PATH: &str = "projects/manifest.json";
    /// Cover image of every project folder, never part of the gallery.
    pub const MAIN_IMAGE_NAME: &str = "01.jpg";
}

pub mod intro {
    pub const DRAW_DELAY_MS: u32 = 100;
    /// Fallback in case the outline never reports `animationend`.
    pub const EXPAND_DEADLINE_MS: u32 = 1100;
    /// Fallback in case the expansion never covers the viewport.
    pub const DONE_DEADLINE_MS: u32 = 3400;
    pub const INITIAL_RADIUS_PX: f64 = 150.0;
    pub const GROWTH_PX_PER_FRAME: f64 = 25.0;
    pub const FRAME_MS: f64 = 16.0;
    pub const SCROLL_RELEASE_RADIUS_PX: f64 = 300.0;
    /// Cover radius is this multiple of the larger viewport side.
    pub const COVER_FACTOR: f64 = 1.5;
}

pub mod reveal {
    pub const THRESHOLD: f64 = 0.1;
    pub const ROOT_MARGIN: &str = "0px 0px -50px 0px";
}

pub mod sections {
    pub const ROOT_MARGIN: &str = "-50% 0px -50% 0px";
    pub const IDS: [&str; 5] = ["about", "services", "projects", "news", "contact"];
    pub const INITIAL: &str = "about";
}

pub mod cursor {
    pub const START: (f64, f64) = (-100.0, -100.0);
    pub const INTERACTIVE_SELECTOR: &str = r#"a, button, input, textarea, [role="button"]"#;
}

pub mod carousel {
    pub const HOLD_STEP_PX: f64 = 8.0;
    pub const ARROW_STEP_PX: f64 = 300.0;
}
