//! Yew hooks that bind the animation state machines to browser events.

pub mod active_section;
pub mod banner;
pub mod cursor;
pub mod intro;
pub mod language;
pub mod scroll_lock;
pub mod viewport;
pub mod visibility;
