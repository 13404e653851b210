use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::js_sys::Array;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};
use yew::prelude::*;

use crate::animation::sections::{ActiveSection, SectionObservation};
use crate::config::sections;
use crate::hooks::viewport::Viewport;

fn observation(entry: &IntersectionObserverEntry, midline: f64) -> SectionObservation {
    let rect = entry.bounding_client_rect();
    SectionObservation {
        id: entry.target().id(),
        is_intersecting: entry.is_intersecting(),
        center_distance: (rect.top() + rect.height() / 2.0 - midline).abs(),
    }
}

fn observed_sections() -> Vec<Element> {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return Vec::new();
    };
    sections::IDS
        .iter()
        .filter_map(|id| document.get_element_by_id(id))
        .collect()
}

/// Id of the section spanning the viewport midline, for nav highlighting.
#[hook]
pub fn use_active_section() -> String {
    let active = use_state(|| sections::INITIAL.to_string());

    {
        let active = active.clone();
        use_effect_with_deps(
            move |_| {
                let tracker = Rc::new(RefCell::new(ActiveSection::new(sections::INITIAL)));
                let callback = Closure::<dyn FnMut(Array, IntersectionObserver)>::new(
                    move |entries: Array, _observer: IntersectionObserver| {
                        let midline = Viewport::current().midline();
                        let batch: Vec<SectionObservation> = entries
                            .iter()
                            .filter_map(|entry| entry.dyn_into::<IntersectionObserverEntry>().ok())
                            .map(|entry| observation(&entry, midline))
                            .collect();
                        let mut tracker = tracker.borrow_mut();
                        if tracker.apply_batch(&batch) {
                            log::debug!("Active section: {}", tracker.id());
                            active.set(tracker.id().to_string());
                        }
                    },
                );

                let mut init = IntersectionObserverInit::new();
                init.threshold(&JsValue::from_f64(0.0));
                init.root_margin(sections::ROOT_MARGIN);

                let targets = observed_sections();
                let observer = match IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init) {
                    Ok(observer) => {
                        for section in &targets {
                            observer.observe(section);
                        }
                        Some(observer)
                    }
                    Err(e) => {
                        log::warn!("IntersectionObserver unavailable: {:?}", e);
                        None
                    }
                };

                move || {
                    if let Some(observer) = observer {
                        for section in &targets {
                            observer.unobserve(section);
                        }
                        observer.disconnect();
                    }
                    drop(callback);
                }
            },
            (),
        );
    }

    (*active).clone()
}
