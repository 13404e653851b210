use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::MouseEvent;
use yew::prelude::*;

use crate::config::sections;
use crate::hooks::language::use_language;
use crate::i18n::Language;

const SCROLLED_AFTER_PX: f64 = 80.0;

#[derive(Properties, PartialEq)]
pub struct TopNavProps {
    pub active_section: String,
}

#[function_component(TopNav)]
pub fn top_nav(props: &TopNavProps) -> Html {
    let lang = use_language();
    let t = lang.t();
    let menu_open = use_state(|| false);
    let dropdown_open = use_state(|| false);
    let is_scrolled = use_state(|| false);

    {
        let is_scrolled = is_scrolled.clone();
        use_effect_with_deps(
            move |_| {
                let window = web_sys::window();
                let scroll_callback = {
                    let window = window.clone();
                    Closure::<dyn FnMut()>::new(move || {
                        let scroll_y = window
                            .as_ref()
                            .and_then(|w| w.scroll_y().ok())
                            .unwrap_or(0.0);
                        is_scrolled.set(scroll_y > SCROLLED_AFTER_PX);
                    })
                };

                if let Some(window) = &window {
                    if let Err(e) = window.add_event_listener_with_callback("scroll", scroll_callback.as_ref().unchecked_ref()) {
                        log::warn!("Failed to attach nav scroll listener: {:?}", e);
                    }
                }

                move || {
                    if let Some(window) = window {
                        let _ = window.remove_event_listener_with_callback("scroll", scroll_callback.as_ref().unchecked_ref());
                    }
                }
            },
            (),
        );
    }

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(!*menu_open);
        })
    };

    let close_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| menu_open.set(false))
    };

    let toggle_dropdown = {
        let dropdown_open = dropdown_open.clone();
        Callback::from(move |_: MouseEvent| dropdown_open.set(!*dropdown_open))
    };

    let choose_language = |language: Language| {
        let set_language = lang.set_language.clone();
        let dropdown_open = dropdown_open.clone();
        Callback::from(move |_: MouseEvent| {
            set_language.emit(language);
            dropdown_open.set(false);
        })
    };

    let menu_class = if *menu_open {
        "nav-links mobile-menu-open"
    } else {
        "nav-links"
    };

    html! {
        <nav class={classes!("top-nav", (*is_scrolled).then(|| "scrolled"))} dir={lang.language.dir()}>
            <style>
                {r#"
                .top-nav {
                    position: fixed;
                    top: 0;
                    left: 0;
                    right: 0;
                    z-index: 50;
                    background: rgba(28, 31, 42, 0.4);
                    backdrop-filter: blur(4px);
                    border-bottom: 1px solid rgba(202, 182, 75, 0.2);
                    transition: background 0.3s ease;
                }
                .top-nav.scrolled {
                    background: rgba(28, 31, 42, 0.9);
                }
                .top-nav .nav-content {
                    max-width: 1536px;
                    margin: 0 auto;
                    padding: 1rem 2rem;
                    display: flex;
                    align-items: center;
                    justify-content: space-between;
                }
                .top-nav .nav-logo {
                    font-family: 'Darker Grotesque', sans-serif;
                    font-size: 1.5rem;
                    letter-spacing: 0.3em;
                    color: #F2F2F2;
                    text-decoration: none;
                }
                .top-nav .nav-links {
                    display: flex;
                    align-items: center;
                    gap: 3rem;
                }
                .top-nav .nav-link {
                    font-family: 'Inter Tight', sans-serif;
                    font-size: 0.75rem;
                    font-weight: 300;
                    letter-spacing: 0.2em;
                    text-transform: uppercase;
                    color: rgba(242, 242, 242, 0.8);
                    text-decoration: none;
                    padding-bottom: 0.25rem;
                    border-bottom: 2px solid transparent;
                    transition: all 0.3s ease;
                }
                .top-nav .nav-link:hover {
                    color: #F2F2F2;
                }
                .top-nav .nav-link.active {
                    color: #CAB64B;
                    border-bottom-color: #CAB64B;
                }
                .top-nav .language-switch {
                    position: relative;
                }
                .top-nav .language-button,
                .top-nav .language-option {
                    background: none;
                    border: none;
                    font-family: 'Inter Tight', sans-serif;
                    font-size: 0.75rem;
                    font-weight: 300;
                    letter-spacing: 0.2em;
                    text-transform: uppercase;
                    color: rgba(242, 242, 242, 0.8);
                    cursor: pointer;
                }
                .top-nav .language-dropdown {
                    position: absolute;
                    top: 100%;
                    inset-inline-end: 0;
                    margin-top: 0.5rem;
                    background: rgba(28, 31, 42, 0.95);
                    border: 1px solid rgba(202, 182, 75, 0.3);
                    border-radius: 4px;
                    overflow: hidden;
                }
                .top-nav .language-option {
                    display: block;
                    width: 100%;
                    padding: 0.5rem 1rem;
                    text-align: start;
                }
                .top-nav .language-option:hover {
                    background: rgba(202, 182, 75, 0.1);
                }
                .top-nav .language-option.selected {
                    color: #CAB64B;
                }
                .top-nav .burger-menu {
                    display: none;
                    flex-direction: column;
                    gap: 5px;
                    background: none;
                    border: none;
                    cursor: pointer;
                }
                .top-nav .burger-menu span {
                    width: 24px;
                    height: 1px;
                    background: #CAB64B;
                }
                @media (max-width: 768px) {
                    .top-nav .burger-menu {
                        display: flex;
                    }
                    .top-nav .nav-links {
                        display: none;
                        position: absolute;
                        top: 100%;
                        left: 0;
                        right: 0;
                        flex-direction: column;
                        gap: 1.5rem;
                        padding: 2rem;
                        background: rgba(28, 31, 42, 0.95);
                    }
                    .top-nav .nav-links.mobile-menu-open {
                        display: flex;
                    }
                }
                "#}
            </style>
            <div class="nav-content">
                <a href="#" class="nav-logo">{t.nav.logo}</a>

                <button class="burger-menu" aria-label="Menu" onclick={toggle_menu}>
                    <span></span>
                    <span></span>
                    <span></span>
                </button>
                <div class={menu_class}>
                    { for sections::IDS.iter().map(|id| {
                        let active = props.active_section == *id;
                        html! {
                            <a
                                href={format!("#{}", id)}
                                class={classes!("nav-link", active.then_some("active"))}
                                onclick={close_menu.clone()}
                            >
                                {t.nav.label_for(id)}
                            </a>
                        }
                    }) }
                </div>

                <div class="language-switch">
                    <button class="language-button" onclick={toggle_dropdown}>
                        {t.language}
                    </button>
                    if *dropdown_open {
                        <div class="language-dropdown">
                            { for [Language::En, Language::Ar].into_iter().map(|language| html! {
                                <button
                                    class={classes!("language-option", (lang.language == language).then_some("selected"))}
                                    onclick={choose_language(language)}
                                >
                                    {language.native_name()}
                                </button>
                            }) }
                        </div>
                    }
                </div>
            </div>
        </nav>
    }
}
