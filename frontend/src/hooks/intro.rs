use std::rc::Rc;

use gloo_timers::callback::Timeout;
use web_sys::AnimationEvent;
use yew::prelude::*;

use crate::animation::intro::{IntroPhase, IntroSequencer};
use crate::config::intro as cfg;
use crate::dom::{self, AnimationHandle, DocumentScrollGuard, FrameLoop};
use crate::hooks::viewport::Viewport;

pub struct IntroView {
    pub phase: IntroPhase,
    /// Overlay element; the reveal radius is written to its
    /// `--reveal-radius` property every frame.
    pub overlay: NodeRef,
    /// Attach to the outline's `onanimationend`.
    pub on_outline_drawn: Callback<AnimationEvent>,
}

fn write_radius(overlay: &AnimationHandle, radius: f64) {
    overlay.set_style("--reveal-radius", &format!("{}px", radius));
}

/// Runs the intro reveal once per mount. Scrolling is locked from the first
/// render until the circle passes the release radius, and unlocked on
/// unmount whatever phase was reached.
#[hook]
pub fn use_intro_animation() -> IntroView {
    let phase = use_state(|| IntroPhase::Initial);
    let overlay = use_node_ref();
    let sequencer = use_mut_ref(IntroSequencer::new);
    let scroll_guard = use_mut_ref(|| None::<DocumentScrollGuard>);
    let frames = use_mut_ref(|| None::<FrameLoop>);
    let start_expanding = use_mut_ref(|| None::<Rc<dyn Fn()>>);

    {
        let phase = phase.clone();
        let handle = AnimationHandle::new(overlay.clone());
        let sequencer = sequencer.clone();
        let scroll_guard = scroll_guard.clone();
        let frames = frames.clone();
        let start_expanding = start_expanding.clone();
        use_effect_with_deps(
            move |_| {
                dom::reset_scroll_position();
                *scroll_guard.borrow_mut() = Some(dom::lock_document_scroll());
                write_radius(&handle, cfg::INITIAL_RADIUS_PX);

                let expand: Rc<dyn Fn()> = {
                    let phase = phase.clone();
                    let sequencer = sequencer.clone();
                    let scroll_guard = scroll_guard.clone();
                    let frames = frames.clone();
                    Rc::new(move || {
                        if !sequencer.borrow_mut().drawing_finished() {
                            return;
                        }
                        log::debug!("Intro expanding");
                        phase.set(IntroPhase::Expanding);

                        let sequencer = sequencer.clone();
                        let scroll_guard = scroll_guard.clone();
                        let phase = phase.clone();
                        let handle = handle.clone();
                        let mut last_frame: Option<f64> = None;
                        *frames.borrow_mut() = Some(FrameLoop::start(move |timestamp| {
                            let elapsed = last_frame.map_or(0.0, |last| timestamp - last);
                            last_frame = Some(timestamp);

                            let frame = sequencer
                                .borrow_mut()
                                .tick(elapsed, Viewport::current().cover_radius());
                            write_radius(&handle, frame.radius);
                            if frame.release_scroll {
                                scroll_guard.borrow_mut().take();
                            }
                            if frame.covered {
                                phase.set(IntroPhase::Done);
                            }
                            !frame.covered
                        }));
                    })
                };
                *start_expanding.borrow_mut() = Some(expand.clone());

                let draw_timer = {
                    let phase = phase.clone();
                    let sequencer = sequencer.clone();
                    Timeout::new(cfg::DRAW_DELAY_MS, move || {
                        if sequencer.borrow_mut().begin_drawing() {
                            phase.set(IntroPhase::Drawing);
                        }
                    })
                };

                let expand_deadline = Timeout::new(cfg::EXPAND_DEADLINE_MS, move || expand());

                let done_deadline = {
                    let phase = phase.clone();
                    let sequencer = sequencer.clone();
                    let scroll_guard = scroll_guard.clone();
                    let frames = frames.clone();
                    Timeout::new(cfg::DONE_DEADLINE_MS, move || {
                        if sequencer.borrow_mut().finish() {
                            scroll_guard.borrow_mut().take();
                        }
                        frames.borrow_mut().take();
                        phase.set(IntroPhase::Done);
                    })
                };

                move || {
                    drop(draw_timer);
                    drop(expand_deadline);
                    drop(done_deadline);
                    frames.borrow_mut().take();
                    start_expanding.borrow_mut().take();
                    scroll_guard.borrow_mut().take();
                }
            },
            (),
        );
    }

    let on_outline_drawn = {
        let start_expanding = start_expanding.clone();
        Callback::from(move |_: AnimationEvent| {
            let expand = start_expanding.borrow().clone();
            if let Some(expand) = expand {
                expand();
            }
        })
    };

    IntroView {
        phase: *phase,
        overlay,
        on_outline_drawn,
    }
}
