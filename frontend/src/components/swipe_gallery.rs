use std::cell::RefCell;
use std::rc::Rc;

use gloo_render::{request_animation_frame, AnimationFrame};
use gloo_timers::callback::Timeout;
use web_sys::{MouseEvent, TouchEvent};
use yew::prelude::*;

use crate::animation::transition::SwipeGallery as GalleryState;
use crate::config::gallery as cfg;

pub enum GalleryAction {
    Resize(usize),
    PointerDown(f64),
    PointerMove(f64),
    PointerUp,
    GoTo(usize),
    Next,
    Previous,
    Finish,
    FrameRendered,
}

impl Reducible for GalleryState {
    type Action = GalleryAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            GalleryAction::Resize(len) => next.set_len(len),
            GalleryAction::PointerDown(x) => {
                next.pointer_down(x);
            }
            GalleryAction::PointerMove(x) => next.pointer_move(x),
            GalleryAction::PointerUp => {
                next.pointer_release();
            }
            GalleryAction::GoTo(index) => {
                next.go_to(index);
            }
            GalleryAction::Next => {
                next.next();
            }
            GalleryAction::Previous => {
                next.previous();
            }
            GalleryAction::Finish => {
                next.finish();
            }
            GalleryAction::FrameRendered => next.frame_rendered(),
        }
        Rc::new(next)
    }
}

/// Inline style of the upper layer: follows the finger while dragging,
/// slides out while a transition is in flight, rests at zero otherwise.
fn top_layer_style(gallery: &GalleryState) -> String {
    let transition = if gallery.transitions_enabled() && !gallery.is_dragging() {
        format!("transform {ms}ms ease, opacity {ms}ms ease", ms = cfg::TRANSITION_MS)
    } else {
        "none".to_string()
    };
    let (transform, opacity) = match gallery.layers().exiting {
        Some(direction) => (format!("translateX({}%)", direction.exit_percent()), 0.0),
        None => (
            format!("translateX({}px)", gallery.drag_x()),
            gallery.drag_opacity(cfg::DRAG_FADE_PX),
        ),
    };
    format!("transform: {}; opacity: {}; transition: {};", transform, opacity, transition)
}

fn first_touch_x(e: &TouchEvent) -> Option<f64> {
    e.touches().get(0).map(|touch| touch.client_x() as f64)
}

#[derive(Properties, PartialEq)]
pub struct SwipeGalleryProps {
    pub images: Vec<String>,
    #[prop_or_default]
    pub alt: AttrValue,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub show_arrows: bool,
    /// Fired with the new index once a transition has settled.
    #[prop_or_default]
    pub on_change: Callback<usize>,
}

#[function_component(SwipeGallery)]
pub fn swipe_gallery(props: &SwipeGalleryProps) -> Html {
    let gallery = use_reducer_eq(|| GalleryState::new(props.images.len(), cfg::SWIPE_THRESHOLD_PX));

    {
        let dispatcher = gallery.dispatcher();
        use_effect_with_deps(
            move |len| {
                dispatcher.dispatch(GalleryAction::Resize(*len));
                || ()
            },
            props.images.len(),
        );
    }

    // Swap once the slide has played out
    {
        let dispatcher = gallery.dispatcher();
        let transition = *gallery.transition();
        use_effect_with_deps(
            move |(pending, _)| {
                let timer = pending.map(|_| {
                    Timeout::new(cfg::TRANSITION_MS, move || dispatcher.dispatch(GalleryAction::Finish))
                });
                move || drop(timer)
            },
            (transition.pending_index, transition.display_index),
        );
    }

    // After a swap the first frame paints without transitions
    {
        let dispatcher = gallery.dispatcher();
        use_effect_with_deps(
            move |enabled| {
                let slot: Rc<RefCell<Option<AnimationFrame>>> = Rc::new(RefCell::new(None));
                if !*enabled {
                    let inner = slot.clone();
                    *slot.borrow_mut() = Some(request_animation_frame(move |_| {
                        *inner.borrow_mut() = Some(request_animation_frame(move |_| {
                            dispatcher.dispatch(GalleryAction::FrameRendered);
                        }));
                    }));
                }
                move || {
                    slot.borrow_mut().take();
                }
            },
            gallery.transitions_enabled(),
        );
    }

    {
        let on_change = props.on_change.clone();
        use_effect_with_deps(
            move |current| {
                on_change.emit(*current);
                || ()
            },
            gallery.current(),
        );
    }

    if props.images.is_empty() {
        return html! { <div class={classes!("swipe-gallery", "empty", props.class.clone())}></div> };
    }

    let dispatch = |action_for: fn(f64) -> GalleryAction| {
        let gallery = gallery.clone();
        move |x: f64| gallery.dispatch(action_for(x))
    };

    let onmousedown = {
        let down = dispatch(GalleryAction::PointerDown);
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            down(e.client_x() as f64);
        })
    };
    let onmousemove = {
        let dragging = gallery.is_dragging();
        let moved = dispatch(GalleryAction::PointerMove);
        Callback::from(move |e: MouseEvent| {
            if dragging {
                moved(e.client_x() as f64);
            }
        })
    };
    let release = {
        let gallery = gallery.clone();
        Callback::from(move |_: MouseEvent| {
            if gallery.is_dragging() {
                gallery.dispatch(GalleryAction::PointerUp);
            }
        })
    };
    let ontouchstart = {
        let down = dispatch(GalleryAction::PointerDown);
        Callback::from(move |e: TouchEvent| {
            if let Some(x) = first_touch_x(&e) {
                down(x);
            }
        })
    };
    let ontouchmove = {
        let moved = dispatch(GalleryAction::PointerMove);
        Callback::from(move |e: TouchEvent| {
            if let Some(x) = first_touch_x(&e) {
                moved(x);
            }
        })
    };
    let ontouchend = {
        let gallery = gallery.clone();
        Callback::from(move |_: TouchEvent| gallery.dispatch(GalleryAction::PointerUp))
    };

    let layers = gallery.layers();
    let image = |index: usize| props.images.get(index).cloned().unwrap_or_default();
    let step = |action: fn() -> GalleryAction| {
        let gallery = gallery.clone();
        Callback::from(move |e: MouseEvent| {
            e.stop_propagation();
            gallery.dispatch(action());
        })
    };

    html! {
        <div
            class={classes!("swipe-gallery", props.class.clone(), gallery.is_dragging().then_some("dragging"))}
            {onmousedown}
            {onmousemove}
            onmouseup={release.clone()}
            onmouseleave={release}
            {ontouchstart}
            {ontouchmove}
            {ontouchend}
        >
            <img
                class="swipe-layer"
                src={image(layers.base)}
                alt={props.alt.clone()}
                draggable="false"
            />
            <img
                class="swipe-layer swipe-top"
                style={top_layer_style(&gallery)}
                src={image(layers.top)}
                alt={props.alt.clone()}
                draggable="false"
            />
            if props.show_arrows && gallery.len() > 1 {
                <>
                <button class="swipe-arrow prev" aria-label="Previous" onclick={step(|| GalleryAction::Previous)}>{"‹"}</button>
                <button class="swipe-arrow next" aria-label="Next" onclick={step(|| GalleryAction::Next)}>{"›"}</button>
                </>
            }
            if gallery.len() > 1 {
                <div class="swipe-dots">
                    { for (0..gallery.len()).map(|index| {
                        let onclick = {
                            let gallery = gallery.clone();
                            Callback::from(move |e: MouseEvent| {
                                e.stop_propagation();
                                gallery.dispatch(GalleryAction::GoTo(index));
                            })
                        };
                        let active = index == gallery.current();
                        html! {
                            <button
                                key={index}
                                class={classes!("swipe-dot", active.then_some("active"))}
                                aria-label={format!("Image {}", index + 1)}
                                {onclick}
                            />
                        }
                    }) }
                </div>
            }
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reduce(state: GalleryState, actions: Vec<GalleryAction>) -> GalleryState {
        let mut state = Rc::new(state);
        for action in actions {
            state = state.reduce(action);
        }
        (*state).clone()
    }

    #[test]
    fn resting_layer_has_no_offset() {
        let gallery = GalleryState::new(3, cfg::SWIPE_THRESHOLD_PX);
        assert_eq!(
            top_layer_style(&gallery),
            "transform: translateX(0px); opacity: 1; transition: transform 400ms ease, opacity 400ms ease;"
        );
    }

    #[test]
    fn dragging_follows_pointer_without_transition() {
        let gallery = reduce(
            GalleryState::new(3, cfg::SWIPE_THRESHOLD_PX),
            vec![GalleryAction::PointerDown(300.0), GalleryAction::PointerMove(200.0)],
        );
        assert_eq!(
            top_layer_style(&gallery),
            "transform: translateX(-100px); opacity: 0.75; transition: none;"
        );
    }

    #[test]
    fn swipe_slides_out_then_swaps_without_transition() {
        let gallery = reduce(
            GalleryState::new(3, cfg::SWIPE_THRESHOLD_PX),
            vec![
                GalleryAction::PointerDown(300.0),
                GalleryAction::PointerMove(220.0),
                GalleryAction::PointerUp,
            ],
        );
        assert!(top_layer_style(&gallery).starts_with("transform: translateX(-100%); opacity: 0;"));

        let gallery = reduce(gallery, vec![GalleryAction::Finish]);
        assert_eq!(gallery.current(), 1);
        assert!(top_layer_style(&gallery).ends_with("transition: none;"));

        let gallery = reduce(gallery, vec![GalleryAction::FrameRendered]);
        assert!(gallery.transitions_enabled());
    }

    #[test]
    fn shrinking_image_list_resets_index() {
        let gallery = reduce(
            GalleryState::new(4, cfg::SWIPE_THRESHOLD_PX),
            vec![GalleryAction::GoTo(3), GalleryAction::Finish, GalleryAction::Resize(2)],
        );
        assert_eq!(gallery.current(), 0);
    }
}
