//! Browser side of the animation layer.
//!
//! [`AnimationHandle`] writes styles straight onto an element and skips the
//! Yew diff on purpose: the banner, cursor and intro mask change every frame
//! and a re-render per frame is what we are avoiding.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use gloo_render::{request_animation_frame, AnimationFrame};
use wasm_bindgen::JsCast;
use web_sys::{HtmlElement, ScrollRestoration};
use yew::NodeRef;

use crate::animation::scroll_lock::{LockTarget, ScrollLock, ScrollLockGuard};
use crate::animation::StyleSink;

#[derive(Clone, Default, PartialEq)]
pub struct AnimationHandle {
    node: NodeRef,
}

impl AnimationHandle {
    pub fn new(node: NodeRef) -> Self {
        Self { node }
    }

    fn element(&self) -> Option<HtmlElement> {
        self.node.cast::<HtmlElement>()
    }

    /// No-op while the node is detached.
    pub fn set_style(&self, property: &str, value: &str) {
        if let Some(element) = self.element() {
            if let Err(e) = element.style().set_property(property, value) {
                log::warn!("Failed to set {}: {:?}", property, e);
            }
        }
    }

    pub fn toggle_class(&self, class: &str, on: bool) {
        if let Some(element) = self.element() {
            let classes = element.class_list();
            let result = if on { classes.add_1(class) } else { classes.remove_1(class) };
            if let Err(e) = result {
                log::warn!("Failed to toggle class {}: {:?}", class, e);
            }
        }
    }
}

impl StyleSink for AnimationHandle {
    fn set_transform(&self, value: &str) {
        self.set_style("transform", value);
    }

    fn set_position(&self, x: f64, y: f64) {
        self.set_style("left", &format!("{}px", x));
        self.set_style("top", &format!("{}px", y));
    }
}

/// `overflow: hidden` on both `<html>` and `<body>`.
pub struct DocumentScroll;

impl LockTarget for DocumentScroll {
    fn set_locked(&self, locked: bool) {
        let Some(document) = web_sys::window().and_then(|w| w.document()) else {
            return;
        };
        let root = document
            .document_element()
            .and_then(|e| e.dyn_into::<HtmlElement>().ok());
        for element in [root, document.body()].into_iter().flatten() {
            let style = element.style();
            let result = if locked {
                style.set_property("overflow", "hidden")
            } else {
                style.remove_property("overflow").map(|_| ())
            };
            if let Err(e) = result {
                log::warn!("Failed to update scroll lock: {:?}", e);
            }
        }
        log::debug!("Document scroll {}", if locked { "locked" } else { "unlocked" });
    }
}

pub type DocumentScrollGuard = ScrollLockGuard<DocumentScroll>;

thread_local! {
    static DOCUMENT_LOCK: ScrollLock<DocumentScroll> = ScrollLock::new(DocumentScroll);
}

pub fn lock_document_scroll() -> DocumentScrollGuard {
    DOCUMENT_LOCK.with(|lock| lock.acquire())
}

/// Jumps to the top and stops the browser from restoring the old position
/// on reload.
pub fn reset_scroll_position() {
    let Some(window) = web_sys::window() else {
        return;
    };
    if let Ok(history) = window.history() {
        let _ = history.set_scroll_restoration(ScrollRestoration::Manual);
    }
    window.scroll_to_with_x_and_y(0.0, 0.0);
    if let Some(document) = window.document() {
        if let Some(root) = document.document_element() {
            root.set_scroll_top(0);
        }
        if let Some(body) = document.body() {
            body.set_scroll_top(0);
        }
    }
}

pub fn viewport_size() -> (f64, f64) {
    let Some(window) = web_sys::window() else {
        return (0.0, 0.0);
    };
    let width = window.inner_width().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
    let height = window.inner_height().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
    (width, height)
}

type Tick = Rc<RefCell<dyn FnMut(f64) -> bool>>;

/// Calls `tick` with the frame timestamp on every animation frame until it
/// returns false. Dropping the loop cancels the pending frame.
pub struct FrameLoop {
    slot: Rc<RefCell<Option<AnimationFrame>>>,
    stopped: Rc<Cell<bool>>,
}

impl FrameLoop {
    pub fn start<F>(tick: F) -> Self
    where
        F: FnMut(f64) -> bool + 'static,
    {
        let frame_loop = Self {
            slot: Rc::new(RefCell::new(None)),
            stopped: Rc::new(Cell::new(false)),
        };
        let tick: Tick = Rc::new(RefCell::new(tick));
        schedule(Rc::clone(&frame_loop.slot), Rc::clone(&frame_loop.stopped), tick);
        frame_loop
    }

    pub fn stop(&self) {
        self.stopped.set(true);
        self.slot.borrow_mut().take();
    }
}

impl Drop for FrameLoop {
    fn drop(&mut self) {
        self.stop();
    }
}

fn schedule(slot: Rc<RefCell<Option<AnimationFrame>>>, stopped: Rc<Cell<bool>>, tick: Tick) {
    let next_slot = Rc::clone(&slot);
    let handle = request_animation_frame(move |timestamp| {
        let keep_going = {
            let mut tick = tick.borrow_mut();
            (&mut *tick)(timestamp)
        };
        if keep_going && !stopped.get() {
            schedule(next_slot, stopped, tick);
        } else {
            stopped.set(true);
            next_slot.borrow_mut().take();
        }
    });
    *slot.borrow_mut() = Some(handle);
}
