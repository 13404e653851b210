use web_sys::{HtmlElement, MouseEvent, ScrollBehavior, ScrollToOptions};
use yew::prelude::*;

use crate::animation::carousel;
use crate::animation::gesture::PointerTracker;
use crate::components::reveal::Reveal;
use crate::config::carousel as cfg;
use crate::dom::FrameLoop;
use crate::hooks::language::use_language;
use crate::hooks::scroll_lock::use_scroll_lock;
use crate::hooks::viewport::use_viewport;
use crate::i18n::ServiceText;

/// Past this many pixels a drag no longer counts as a click on a card.
const CLICK_SLOP_PX: f64 = 5.0;

fn max_scroll(strip: &HtmlElement) -> f64 {
    (strip.scroll_width() - strip.client_width()).max(0) as f64
}

fn scroll_arrow(strip: &HtmlElement, forward: bool) {
    let scroll_left = strip.scroll_left() as f64;
    match carousel::arrow_target(scroll_left, max_scroll(strip), cfg::ARROW_STEP_PX, forward) {
        Some(target) => strip.set_scroll_left(target as i32),
        None => {
            let mut options = ScrollToOptions::new();
            options.left(if forward { cfg::ARROW_STEP_PX } else { -cfg::ARROW_STEP_PX });
            options.behavior(ScrollBehavior::Smooth);
            strip.scroll_by_with_scroll_to_options(&options);
        }
    }
}

#[function_component(Services)]
pub fn services() -> Html {
    let lang = use_language();
    let t = lang.t();
    let viewport = use_viewport();
    let strip = use_node_ref();
    let selected = use_state(|| None::<ServiceText>);
    let can_scroll = use_state(|| false);
    let is_dragging = use_state(|| false);
    let button_pressed = use_state(|| false);
    let tracker = use_mut_ref(PointerTracker::new);
    let scroll_start = use_mut_ref(|| 0.0_f64);
    let suppress_click = use_mut_ref(|| false);
    let hold_loop = use_mut_ref(|| None::<FrameLoop>);

    {
        let strip = strip.clone();
        let can_scroll = can_scroll.clone();
        use_effect_with_deps(
            move |_| {
                if let Some(strip) = strip.cast::<HtmlElement>() {
                    can_scroll.set(carousel::can_scroll(
                        strip.scroll_width() as f64,
                        strip.client_width() as f64,
                    ));
                }
                || ()
            },
            (viewport, lang.language),
        );
    }

    {
        let hold_loop = hold_loop.clone();
        use_effect_with_deps(
            move |_| {
                move || {
                    hold_loop.borrow_mut().take();
                }
            },
            (),
        );
    }

    let onmousedown = {
        let strip = strip.clone();
        let tracker = tracker.clone();
        let scroll_start = scroll_start.clone();
        let suppress_click = suppress_click.clone();
        let is_dragging = is_dragging.clone();
        Callback::from(move |e: MouseEvent| {
            let Some(element) = strip.cast::<HtmlElement>() else {
                return;
            };
            e.prevent_default();
            tracker.borrow_mut().begin(e.client_x() as f64);
            *scroll_start.borrow_mut() = element.scroll_left() as f64;
            *suppress_click.borrow_mut() = false;
            is_dragging.set(true);
        })
    };

    let onmousemove = {
        let strip = strip.clone();
        let tracker = tracker.clone();
        let scroll_start = scroll_start.clone();
        let suppress_click = suppress_click.clone();
        Callback::from(move |e: MouseEvent| {
            let Some(delta) = tracker.borrow_mut().update(e.client_x() as f64) else {
                return;
            };
            if delta.abs() > CLICK_SLOP_PX {
                *suppress_click.borrow_mut() = true;
            }
            if let Some(element) = strip.cast::<HtmlElement>() {
                let position = carousel::drag_position(*scroll_start.borrow(), delta);
                element.set_scroll_left(position as i32);
            }
        })
    };

    let end_drag = {
        let tracker = tracker.clone();
        let is_dragging = is_dragging.clone();
        Callback::from(move |_: MouseEvent| {
            if tracker.borrow_mut().end().is_some() {
                is_dragging.set(false);
            }
        })
    };

    let start_hold = {
        let strip = strip.clone();
        let hold_loop = hold_loop.clone();
        let button_pressed = button_pressed.clone();
        Callback::from(move |_: MouseEvent| {
            button_pressed.set(true);
            let strip = strip.clone();
            *hold_loop.borrow_mut() = Some(FrameLoop::start(move |_| {
                let Some(element) = strip.cast::<HtmlElement>() else {
                    return false;
                };
                let next = carousel::hold_step(element.scroll_left() as f64, max_scroll(&element), cfg::HOLD_STEP_PX);
                element.set_scroll_left(next as i32);
                true
            }));
        })
    };

    let stop_hold = {
        let hold_loop = hold_loop.clone();
        let button_pressed = button_pressed.clone();
        Callback::from(move |_: MouseEvent| {
            if hold_loop.borrow_mut().take().is_some() {
                button_pressed.set(false);
            }
        })
    };

    let arrow = |forward: bool| {
        let strip = strip.clone();
        Callback::from(move |_: MouseEvent| {
            if let Some(element) = strip.cast::<HtmlElement>() {
                scroll_arrow(&element, forward);
            }
        })
    };

    let open_service = |service: &ServiceText| {
        let selected = selected.clone();
        let suppress_click = suppress_click.clone();
        let service = service.clone();
        Callback::from(move |_: MouseEvent| {
            if !*suppress_click.borrow() {
                selected.set(Some(service.clone()));
            }
        })
    };

    let close_modal = {
        let selected = selected.clone();
        Callback::from(move |_| selected.set(None))
    };

    html! {
        <section id="services" class="services-section">
            <style>
                {r#"
                .services-section {
                    min-height: 100vh;
                    display: flex;
                    align-items: center;
                    padding: 6rem 0;
                    background-color: #003087;
                }
                .services-section .services-grid {
                    max-width: 1536px;
                    margin: 0 auto;
                    padding: 0 2rem;
                    width: 100%;
                    display: grid;
                    grid-template-columns: 1fr 2fr;
                    gap: 4rem;
                    align-items: center;
                }
                .services-section .services-intro p {
                    color: rgba(242, 242, 242, 0.8);
                    font-family: 'Inter Tight', sans-serif;
                    font-weight: 300;
                    line-height: 1.7;
                }
                .services-strip {
                    display: flex;
                    gap: 1.5rem;
                    overflow-x: auto;
                    padding-bottom: 1rem;
                    scrollbar-width: none;
                    cursor: grab;
                    user-select: none;
                }
                .services-strip::-webkit-scrollbar {
                    display: none;
                }
                .services-strip.dragging {
                    cursor: grabbing;
                }
                .service-card {
                    flex-shrink: 0;
                    width: 18rem;
                }
                .service-card .service-image {
                    position: relative;
                    height: 20rem;
                    overflow: hidden;
                    margin-bottom: 1.5rem;
                    cursor: pointer;
                }
                .service-card img {
                    width: 100%;
                    height: 100%;
                    object-fit: cover;
                    transition: transform 0.7s ease;
                }
                .service-card:hover img {
                    transform: scale(1.1);
                }
                .service-card .service-image::after {
                    content: '';
                    position: absolute;
                    inset: 0;
                    background: linear-gradient(to top, rgba(0, 0, 0, 0.8), rgba(0, 0, 0, 0.4), transparent);
                }
                .service-card h3 {
                    position: absolute;
                    bottom: 0;
                    left: 0;
                    right: 0;
                    margin: 0;
                    padding: 1.5rem;
                    z-index: 1;
                    font-family: 'Darker Grotesque', sans-serif;
                    font-weight: 300;
                    font-size: 1.5rem;
                    letter-spacing: 0.12em;
                    text-transform: uppercase;
                }
                .service-card p {
                    color: rgba(242, 242, 242, 0.7);
                    font-size: 0.875rem;
                    line-height: 1.6;
                }
                .service-card .read-more {
                    background: none;
                    border: none;
                    padding: 0;
                    color: #93c5fd;
                    text-decoration: underline;
                    letter-spacing: 0.1em;
                    text-transform: uppercase;
                    cursor: pointer;
                }
                .services-controls {
                    display: flex;
                    justify-content: flex-end;
                    align-items: center;
                    gap: 1rem;
                    margin-top: 2rem;
                }
                .services-controls button {
                    background: none;
                    border: 2px solid rgba(202, 182, 75, 0.5);
                    border-radius: 9999px;
                    color: #CAB64B;
                    padding: 0.75rem 1.25rem;
                    cursor: pointer;
                    transition: transform 0.15s ease-out, border-color 0.2s ease;
                }
                .services-controls .hold-scroll {
                    padding: 0.75rem 2rem;
                    letter-spacing: 0.15em;
                    text-transform: uppercase;
                }
                .services-controls .hold-scroll.pressed {
                    transform: scale(0.92);
                    border-color: #CAB64B;
                    background: rgba(202, 182, 75, 0.15);
                }
                @media (max-width: 768px) {
                    .services-section .services-grid {
                        grid-template-columns: 1fr;
                    }
                }
                "#}
            </style>
            <div class="services-grid">
                <Reveal class="services-intro">
                    <h2 class="section-title">{t.services.title}</h2>
                    <div class="gold-rule"></div>
                    <p>{t.services.intro}</p>
                    <p>{t.services.built_on}</p>
                </Reveal>

                <div>
                    <div
                        ref={strip.clone()}
                        dir="ltr"
                        class={classes!("services-strip", (*is_dragging).then_some("dragging"))}
                        {onmousedown}
                        {onmousemove}
                        onmouseup={end_drag.clone()}
                        onmouseleave={end_drag}
                    >
                        { for t.services.items.iter().map(|service| html! {
                            <div key={service.id} class="service-card">
                                <div class="service-image" onclick={open_service(service)}>
                                    <img src={service.image} alt={service.title} draggable="false" />
                                    <h3>{service.title}</h3>
                                </div>
                                <p>{service.description}</p>
                                <button class="read-more" onclick={open_service(service)}>
                                    {t.services.read_more}
                                </button>
                            </div>
                        }) }
                    </div>

                    if *can_scroll {
                        <div class="services-controls">
                            <button aria-label="Previous" onclick={arrow(false)}>{"‹"}</button>
                            <button
                                class={classes!("hold-scroll", (*button_pressed).then_some("pressed"))}
                                onmousedown={start_hold}
                                onmouseup={stop_hold.clone()}
                                onmouseleave={stop_hold}
                            >
                                {t.services.scroll}
                            </button>
                            <button aria-label="Next" onclick={arrow(true)}>{"›"}</button>
                        </div>
                    }
                </div>
            </div>
            <ServiceModal service={(*selected).clone()} on_close={close_modal} />
        </section>
    }
}

#[derive(Properties, PartialEq)]
pub struct ServiceModalProps {
    pub service: Option<ServiceText>,
    pub on_close: Callback<()>,
}

#[function_component(ServiceModal)]
pub fn service_modal(props: &ServiceModalProps) -> Html {
    let lang = use_language();
    let t = lang.t();
    use_scroll_lock(props.service.is_some());

    let Some(service) = &props.service else {
        return html! {};
    };

    let close = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };
    let keep_open = Callback::from(|e: MouseEvent| e.stop_propagation());

    html! {
        <div class="modal-backdrop" dir={lang.language.dir()} onclick={close.clone()}>
            <div class="modal-panel service-modal" onclick={keep_open}>
                <button class="modal-close" aria-label="Close" onclick={close}>{"×"}</button>
                <div class="service-modal-image">
                    <img src={service.image} alt={service.title} />
                </div>
                <div class="service-modal-body">
                    <h2 class="section-title">{service.title}</h2>
                    <div class="gold-rule"></div>
                    <div class="modal-meta">
                        <span class="modal-label">{t.services.location}</span>
                        <span>{service.place}</span>
                    </div>
                    <h3 class="modal-label">{t.services.about_label}</h3>
                    <p>{service.full_description}</p>
                </div>
            </div>
        </div>
    }
}
