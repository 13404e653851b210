use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use yew::prelude::*;

use crate::animation::banner::BannerLoop;
use crate::animation::StyleSink;
use crate::config::banner;
use crate::dom::{AnimationHandle, FrameLoop};
use crate::i18n::Language;

/// Node refs for the two marquee rows. Whichever is mounted gets moved.
#[derive(Clone, PartialEq)]
pub struct BannerRefs {
    pub ltr: NodeRef,
    pub rtl: NodeRef,
}

/// Scroll-driven marquee. The offset only advances while the window is
/// scrolling and is written straight to the row transforms.
#[hook]
pub fn use_banner_animation(speed: f64) -> BannerRefs {
    let ltr = use_node_ref();
    let rtl = use_node_ref();

    {
        let ltr = AnimationHandle::new(ltr.clone());
        let rtl = AnimationHandle::new(rtl.clone());
        use_effect_with_deps(
            move |speed| {
                let state = Rc::new(RefCell::new(BannerLoop::new(*speed)));
                let frames: Rc<RefCell<Option<FrameLoop>>> = Rc::new(RefCell::new(None));
                let idle: Rc<RefCell<Option<Timeout>>> = Rc::new(RefCell::new(None));

                let scroll_callback = {
                    let frames = frames.clone();
                    let idle = idle.clone();
                    Closure::<dyn FnMut()>::new(move || {
                        if state.borrow_mut().on_scroll() {
                            let state = state.clone();
                            let ltr = ltr.clone();
                            let rtl = rtl.clone();
                            *frames.borrow_mut() = Some(FrameLoop::start(move |_| {
                                let mut state = state.borrow_mut();
                                if state.on_frame().is_none() {
                                    return false;
                                }
                                let rows: [(&dyn StyleSink, f64); 2] = [
                                    (&ltr, Language::En.banner_loop_width()),
                                    (&rtl, Language::Ar.banner_loop_width()),
                                ];
                                state.apply(&rows);
                                true
                            }));
                        }

                        // Replacing the timeout cancels the previous one
                        let state = state.clone();
                        let frames = frames.clone();
                        *idle.borrow_mut() = Some(Timeout::new(banner::SCROLL_IDLE_MS, move || {
                            state.borrow_mut().on_idle();
                            frames.borrow_mut().take();
                        }));
                    })
                };

                let window = web_sys::window();
                if let Some(window) = &window {
                    if let Err(e) = window.add_event_listener_with_callback("scroll", scroll_callback.as_ref().unchecked_ref()) {
                        log::warn!("Failed to attach banner scroll listener: {:?}", e);
                    }
                }

                move || {
                    if let Some(window) = window {
                        let _ = window.remove_event_listener_with_callback("scroll", scroll_callback.as_ref().unchecked_ref());
                    }
                    idle.borrow_mut().take();
                    frames.borrow_mut().take();
                }
            },
            speed,
        );
    }

    BannerRefs { ltr, rtl }
}
