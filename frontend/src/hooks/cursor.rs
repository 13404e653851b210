use std::cell::RefCell;
use std::rc::Rc;

use gloo_render::{request_animation_frame, AnimationFrame};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Element, MouseEvent};
use yew::prelude::*;

use crate::animation::cursor::CursorFollower;
use crate::config::cursor;
use crate::dom::AnimationHandle;

fn over_interactive(event: &MouseEvent) -> bool {
    event
        .target()
        .and_then(|target| target.dyn_into::<Element>().ok())
        .and_then(|element| element.closest(cursor::INTERACTIVE_SELECTOR).ok().flatten())
        .is_some()
}

/// Custom cursor that trails the mouse. Positions are batched to one write
/// per animation frame.
#[hook]
pub fn use_custom_cursor() -> NodeRef {
    let node = use_node_ref();

    {
        let handle = AnimationHandle::new(node.clone());
        use_effect_with_deps(
            move |_| {
                let follower = Rc::new(RefCell::new(CursorFollower::new()));
                let frame: Rc<RefCell<Option<AnimationFrame>>> = Rc::new(RefCell::new(None));

                let on_move = {
                    let follower = follower.clone();
                    let frame = frame.clone();
                    let handle = handle.clone();
                    Closure::<dyn FnMut(MouseEvent)>::new(move |event: MouseEvent| {
                        let needs_frame = follower
                            .borrow_mut()
                            .on_move(event.client_x() as f64, event.client_y() as f64);
                        if !needs_frame {
                            return;
                        }
                        let follower = follower.clone();
                        let handle = handle.clone();
                        let slot = frame.clone();
                        *frame.borrow_mut() = Some(request_animation_frame(move |_| {
                            slot.borrow_mut().take();
                            follower.borrow_mut().on_frame(&handle);
                        }));
                    })
                };

                let on_over = {
                    let follower = follower.clone();
                    let handle = handle.clone();
                    Closure::<dyn FnMut(MouseEvent)>::new(move |event: MouseEvent| {
                        if over_interactive(&event) && follower.borrow_mut().set_hovering(true) {
                            handle.toggle_class("hovering", true);
                        }
                    })
                };

                let on_out = {
                    let follower = follower.clone();
                    Closure::<dyn FnMut(MouseEvent)>::new(move |event: MouseEvent| {
                        if over_interactive(&event) && follower.borrow_mut().set_hovering(false) {
                            handle.toggle_class("hovering", false);
                        }
                    })
                };

                let document = web_sys::window().and_then(|w| w.document());
                let listeners = [("mousemove", &on_move), ("mouseover", &on_over), ("mouseout", &on_out)];
                if let Some(document) = &document {
                    for (event, callback) in listeners {
                        if let Err(e) = document.add_event_listener_with_callback(event, callback.as_ref().unchecked_ref()) {
                            log::warn!("Failed to attach cursor {} listener: {:?}", event, e);
                        }
                    }
                }

                move || {
                    if let Some(document) = document {
                        let listeners = [("mousemove", &on_move), ("mouseover", &on_over), ("mouseout", &on_out)];
                        for (event, callback) in listeners {
                            let _ = document.remove_event_listener_with_callback(event, callback.as_ref().unchecked_ref());
                        }
                    }
                    frame.borrow_mut().take();
                    follower.borrow_mut().cancel_frame();
                }
            },
            (),
        );
    }

    node
}
