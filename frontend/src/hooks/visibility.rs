use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::js_sys::Array;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};
use yew::prelude::*;

use crate::animation::visibility::{RevealOptions, Visibility};

/// Returns the node to attach and whether it has been seen. Does nothing
/// until the node is mounted.
#[hook]
pub fn use_visibility(options: RevealOptions) -> (NodeRef, bool) {
    let node = use_node_ref();
    let is_visible = use_state(|| false);

    {
        let node = node.clone();
        let is_visible = is_visible.clone();
        use_effect_with_deps(
            move |options: &RevealOptions| {
                let observed = node.cast::<Element>().and_then(|element| {
                    let state = Rc::new(RefCell::new(Visibility::new(options.trigger_once)));
                    let callback = Closure::<dyn FnMut(Array, IntersectionObserver)>::new(
                        move |entries: Array, observer: IntersectionObserver| {
                            for entry in entries.iter() {
                                let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                                    continue;
                                };
                                let update = state.borrow_mut().observe(entry.is_intersecting());
                                if update.changed {
                                    is_visible.set(state.borrow().is_visible());
                                }
                                if update.unobserve {
                                    observer.unobserve(&entry.target());
                                }
                            }
                        },
                    );

                    let mut init = IntersectionObserverInit::new();
                    init.threshold(&JsValue::from_f64(options.threshold));
                    init.root_margin(&options.root_margin);

                    match IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init) {
                        Ok(observer) => {
                            observer.observe(&element);
                            Some((observer, element, callback))
                        }
                        Err(e) => {
                            log::warn!("IntersectionObserver unavailable: {:?}", e);
                            None
                        }
                    }
                });

                move || {
                    if let Some((observer, element, _callback)) = observed {
                        observer.unobserve(&element);
                        observer.disconnect();
                    }
                }
            },
            options,
        );
    }

    (node, *is_visible)
}
