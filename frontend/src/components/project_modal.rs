//! Full-screen project sheet. Gallery images are pinned around the main
//! image as small rotated notes; one of them can be enlarged at a time.

use web_sys::{KeyboardEvent, MouseEvent};
use yew::prelude::*;
use yew_hooks::use_event_with_window;

use crate::gallery;
use crate::hooks::language::use_language;
use crate::hooks::scroll_lock::use_scroll_lock;
use crate::i18n::ProjectItem;

#[derive(Debug, Clone, Copy, PartialEq)]
enum Anchor {
    Left(&'static str),
    Right(&'static str),
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct Pin {
    top: &'static str,
    anchor: Anchor,
    rotate: i32,
}

const fn pin(top: &'static str, anchor: Anchor, rotate: i32) -> Pin {
    Pin { top, anchor, rotate }
}

const PIN_POSITIONS: [Pin; 13] = [
    pin("2%", Anchor::Left("0%"), -8),
    pin("0%", Anchor::Left("30%"), 5),
    pin("5%", Anchor::Right("2%"), -4),
    pin("30%", Anchor::Left("-4%"), 7),
    pin("35%", Anchor::Right("-2%"), -6),
    pin("58%", Anchor::Left("0%"), 4),
    pin("55%", Anchor::Right("0%"), -9),
    pin("78%", Anchor::Left("5%"), 6),
    pin("80%", Anchor::Right("5%"), -5),
    pin("75%", Anchor::Left("35%"), 3),
    pin("15%", Anchor::Left("12%"), -7),
    pin("48%", Anchor::Left("8%"), 8),
    pin("65%", Anchor::Right("8%"), -3),
];

const NOTE_TRANSITION: &str = "all 0.4s cubic-bezier(0.34, 1.56, 0.64, 1)";

/// Inline style of the note at `index`. Positions repeat once the list
/// runs out.
fn note_style(index: usize, enlarged: bool) -> String {
    if enlarged {
        return format!(
            "top: 50%; left: 50%; right: auto; transform: translate(-50%, -50%); z-index: 60; transition: {};",
            NOTE_TRANSITION
        );
    }
    let pin = PIN_POSITIONS[index % PIN_POSITIONS.len()];
    let horizontal = match pin.anchor {
        Anchor::Left(left) => format!("left: {}; right: auto;", left),
        Anchor::Right(right) => format!("left: auto; right: {};", right),
    };
    format!(
        "top: {}; {} transform: rotate({}deg); transition: {};",
        pin.top, horizontal, pin.rotate, NOTE_TRANSITION
    )
}

/// Clicking the enlarged note shrinks it, clicking another one swaps.
fn toggle_enlarged(current: Option<usize>, clicked: usize) -> Option<usize> {
    if current == Some(clicked) {
        None
    } else {
        Some(clicked)
    }
}

/// Numbers gallery loads so only the newest one may fill the sheet.
#[derive(Debug, Default)]
struct LoadGeneration {
    current: u64,
}

impl LoadGeneration {
    fn next(&mut self) -> u64 {
        self.current += 1;
        self.current
    }

    fn is_current(&self, ticket: u64) -> bool {
        self.current == ticket
    }
}

/// Dim layer behind an enlarged note; clicking it shrinks the note.
fn enlarged_overlay(enlarged: Option<usize>, on_dismiss: &Callback<MouseEvent>) -> Option<Html> {
    enlarged.map(|_| {
        html! { <div class="note-overlay" onclick={on_dismiss.clone()}></div> }
    })
}

const FOUNDATION_WORDS: [&str; 4] = ["A", "FOUNDATION", "OF", "TRUST"];

/// Gold ring straddling the inner edge of a sheet's main image.
pub fn decorative_circle(rtl: bool) -> Html {
    let style = if rtl {
        "left: auto; right: 0; transform: translate(50%, -50%);"
    } else {
        "left: 0; right: auto; transform: translate(-50%, -50%);"
    };
    html! {
        <svg class="deco-circle" {style} viewBox="0 0 100 100">
            <circle cx="50" cy="50" r="48" fill="none" stroke="#CAB64B" stroke-width="1.5" />
        </svg>
    }
}

#[derive(Properties, PartialEq)]
pub struct ProjectModalProps {
    pub project: Option<ProjectItem>,
    /// Main image when the project has no asset folder of its own.
    #[prop_or_default]
    pub fallback_image: Option<AttrValue>,
    pub on_close: Callback<()>,
}

#[function_component(ProjectModal)]
pub fn project_modal(props: &ProjectModalProps) -> Html {
    let lang = use_language();
    let t = lang.t();
    let enlarged = use_state(|| None::<usize>);
    let images = use_state(Vec::<String>::new);
    let generation = use_mut_ref(LoadGeneration::default);
    use_scroll_lock(props.project.is_some());

    let title = props.project.as_ref().map(|project| project.title);

    {
        let enlarged = enlarged.clone();
        let images = images.clone();
        let generation = generation.clone();
        use_effect_with_deps(
            move |title| {
                enlarged.set(None);
                images.set(Vec::new());
                let ticket = generation.borrow_mut().next();
                if let Some(title) = *title {
                    wasm_bindgen_futures::spawn_local(async move {
                        let loaded = gallery::load_gallery(title).await;
                        if !generation.borrow().is_current(ticket) {
                            log::debug!("Dropping stale gallery for {}", title);
                            return;
                        }
                        log::debug!("Loaded {} gallery images for {}", loaded.len(), title);
                        images.set(loaded);
                    });
                }
                || ()
            },
            title,
        );
    }

    {
        let enlarged = enlarged.clone();
        let open = props.project.is_some();
        use_event_with_window("keydown", move |e: KeyboardEvent| {
            if open && e.key() == "Escape" && enlarged.is_some() {
                e.stop_propagation();
                enlarged.set(None);
            }
        });
    }

    let Some(project) = &props.project else {
        return html! {};
    };

    let close = {
        let on_close = props.on_close.clone();
        Callback::from(move |e: MouseEvent| {
            e.stop_propagation();
            on_close.emit(());
        })
    };

    let on_backdrop = {
        let enlarged = enlarged.clone();
        Callback::from(move |_: MouseEvent| {
            if enlarged.is_some() {
                enlarged.set(None);
            }
        })
    };

    let main_image: AttrValue = gallery::cover_url(project.title)
        .map(AttrValue::from)
        .or_else(|| props.fallback_image.clone())
        .unwrap_or_default();
    let keep_open = Callback::from(|e: MouseEvent| e.stop_propagation());
    let dismiss_enlarged = {
        let enlarged = enlarged.clone();
        Callback::from(move |e: MouseEvent| {
            e.stop_propagation();
            enlarged.set(None);
        })
    };

    html! {
        <div class="project-modal" dir={lang.language.dir()} onclick={on_backdrop}>
            <style>
                {r#"
                .project-modal {
                    position: fixed;
                    inset: 0;
                    z-index: 50;
                    overflow-y: auto;
                    background: #003087;
                }
                .project-modal .project-layout {
                    min-height: 100vh;
                    display: flex;
                    padding: 2rem 0 4rem;
                }
                .project-modal .project-text {
                    width: 40%;
                    display: flex;
                    flex-direction: column;
                    justify-content: center;
                    padding: 4rem;
                }
                .project-modal .project-category {
                    font-size: 0.875rem;
                    letter-spacing: 0.3em;
                    text-transform: uppercase;
                    color: #CAB64B;
                }
                .project-modal h1 {
                    font-family: 'Darker Grotesque', sans-serif;
                    font-weight: 500;
                    font-size: 4.5rem;
                    line-height: 0.9;
                    letter-spacing: 0.05em;
                    text-transform: uppercase;
                    color: #CAB64B;
                    margin: 1rem 0;
                }
                .project-modal .project-meta {
                    display: flex;
                    gap: 1rem;
                    color: rgba(242, 242, 242, 0.6);
                }
                .project-modal .project-text p {
                    max-width: 32rem;
                    margin-top: 3rem;
                    color: rgba(242, 242, 242, 0.8);
                    line-height: 1.7;
                    text-align: justify;
                }
                .project-modal .project-visual {
                    width: 60%;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    padding: 3rem;
                }
                .project-modal .pin-board {
                    position: relative;
                    width: 100%;
                    max-width: 42rem;
                }
                .project-modal .main-image {
                    position: relative;
                    z-index: 10;
                    aspect-ratio: 3 / 4;
                    overflow: hidden;
                }
                .project-modal .main-image img {
                    width: 100%;
                    height: 100%;
                    object-fit: cover;
                }
                .project-modal .note {
                    position: absolute;
                    z-index: 30;
                }
                .project-modal .note .pin-head {
                    position: absolute;
                    top: -0.5rem;
                    left: 50%;
                    width: 0.75rem;
                    height: 0.75rem;
                    transform: translateX(-50%);
                    border-radius: 50%;
                    background: #CAB64B;
                    border: 1px solid #a16207;
                    z-index: 40;
                }
                .project-modal .note button {
                    display: block;
                    padding: 0.375rem 0.375rem 1.5rem;
                    background: #fff;
                    border: none;
                    box-shadow: 0 10px 25px rgba(0, 0, 0, 0.35);
                    cursor: pointer;
                }
                .project-modal .note img {
                    display: block;
                    width: 6rem;
                    height: 6rem;
                    object-fit: cover;
                    transition: width 0.4s ease, height 0.4s ease;
                }
                .project-modal .note-overlay {
                    position: fixed;
                    inset: 0;
                    z-index: 40;
                    background: rgba(0, 0, 0, 0.6);
                    backdrop-filter: blur(4px);
                }
                .project-modal .foundation-bar {
                    position: fixed;
                    bottom: 0;
                    left: 0;
                    right: 0;
                    z-index: 50;
                    display: flex;
                    justify-content: space-between;
                    align-items: center;
                    padding: 1rem 2rem;
                    background: rgba(28, 31, 42, 0.3);
                    backdrop-filter: blur(12px);
                    border-top: 1px solid rgba(255, 255, 255, 0.1);
                    color: rgba(242, 242, 242, 0.5);
                    font-family: 'Inter Tight', sans-serif;
                    font-size: 0.875rem;
                    font-weight: 300;
                    letter-spacing: 0.1em;
                }
                .project-modal .note.enlarged img {
                    width: min(70vw, 36rem);
                    height: auto;
                    max-height: 80vh;
                }
                @media (max-width: 1024px) {
                    .project-modal .project-layout {
                        flex-direction: column;
                    }
                    .project-modal .project-text,
                    .project-modal .project-visual {
                        width: auto;
                        padding: 2rem;
                    }
                    .project-modal h1 {
                        font-size: 2.5rem;
                    }
                }
                "#}
            </style>
            <nav class="modal-bar">
                <a href="#projects" class="nav-logo" onclick={close.clone()}>{t.nav.logo}</a>
                <button class="modal-close" aria-label="Close" onclick={close}>{"×"}</button>
            </nav>

            <div class="project-layout">
                <div class="project-text">
                    <span class="project-category">{project.category}</span>
                    <h1>{project.title}</h1>
                    <div class="project-meta">
                        <span>{project.year}</span>
                        <span>{"/"}</span>
                        <span>{project.location}</span>
                    </div>
                    <p>{t.projects_gallery.description}</p>
                </div>

                <div class="project-visual">
                    <div class="pin-board" onclick={keep_open}>
                        { decorative_circle(lang.language.is_rtl()) }
                        <div class="main-image">
                            <img
                                src={main_image}
                                alt={project.title}
                                loading="lazy"
                            />
                        </div>
                        { for images.iter().enumerate().map(|(index, src)| {
                            let is_enlarged = *enlarged == Some(index);
                            let onclick = {
                                let enlarged = enlarged.clone();
                                Callback::from(move |e: MouseEvent| {
                                    e.stop_propagation();
                                    enlarged.set(toggle_enlarged(*enlarged, index));
                                })
                            };
                            html! {
                                <div
                                    key={src.clone()}
                                    class={classes!("note", is_enlarged.then_some("enlarged"))}
                                    style={note_style(index, is_enlarged)}
                                >
                                    if !is_enlarged {
                                        <div class="pin-head"></div>
                                    }
                                    <button {onclick}>
                                        <img src={src.clone()} alt={format!("{} {}", project.title, index + 1)} loading="lazy" />
                                    </button>
                                </div>
                            }
                        }) }
                    </div>
                </div>
            </div>

            { for enlarged_overlay(*enlarged, &dismiss_enlarged) }

            <div class="foundation-bar">
                { for FOUNDATION_WORDS.iter().map(|word| html! { <span>{*word}</span> }) }
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use yew::virtual_dom::VNode;

    use super::*;

    #[test]
    fn positions_cycle_after_thirteen() {
        assert_eq!(note_style(0, false), note_style(13, false));
        assert_eq!(note_style(4, false), note_style(30, false));
        assert_ne!(note_style(0, false), note_style(1, false));
    }

    #[test]
    fn right_anchored_pin_clears_left() {
        assert_eq!(
            note_style(2, false),
            format!(
                "top: 5%; left: auto; right: 2%; transform: rotate(-4deg); transition: {};",
                NOTE_TRANSITION
            )
        );
    }

    #[test]
    fn enlarged_note_is_centred_unrotated() {
        let style = note_style(7, true);
        assert!(style.starts_with("top: 50%; left: 50%;"));
        assert!(style.contains("translate(-50%, -50%)"));
        assert!(!style.contains("rotate"));
    }

    #[test]
    fn only_the_newest_load_is_current() {
        let mut generation = LoadGeneration::default();
        let first = generation.next();
        assert!(generation.is_current(first));

        // Sheet closed, then reopened on another project
        let second = generation.next();
        let third = generation.next();
        assert!(!generation.is_current(first));
        assert!(!generation.is_current(second));
        assert!(generation.is_current(third));
    }

    #[test]
    fn overlay_only_while_a_note_is_enlarged() {
        let dismiss = Callback::from(|_: MouseEvent| ());
        assert!(enlarged_overlay(None, &dismiss).is_none());
        match enlarged_overlay(Some(2), &dismiss) {
            Some(VNode::VTag(tag)) => assert_eq!(tag.tag(), "div"),
            _ => panic!("expected an overlay div"),
        }
    }

    #[test]
    fn foundation_bar_reads_in_order() {
        assert_eq!(FOUNDATION_WORDS.join(" "), "A FOUNDATION OF TRUST");
    }

    #[test]
    fn clicking_toggles_or_swaps() {
        assert_eq!(toggle_enlarged(None, 3), Some(3));
        assert_eq!(toggle_enlarged(Some(3), 3), None);
        assert_eq!(toggle_enlarged(Some(3), 5), Some(5));
    }
}
