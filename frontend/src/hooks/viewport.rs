use yew::prelude::*;
use yew_hooks::use_window_size;

use crate::animation::intro;
use crate::dom;

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    /// Reads the window directly, for callbacks that outlive a render.
    pub fn current() -> Self {
        let (width, height) = dom::viewport_size();
        Self { width, height }
    }

    pub fn midline(&self) -> f64 {
        self.height / 2.0
    }

    pub fn cover_radius(&self) -> f64 {
        intro::cover_radius(self.width, self.height)
    }
}

/// Window size, re-rendering on resize. The resize listener goes away with
/// the component.
#[hook]
pub fn use_viewport() -> Viewport {
    let (width, height) = use_window_size();
    Viewport { width, height }
}
