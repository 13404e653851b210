use yew::prelude::*;
use log::info;
use web_sys::window;

mod config;
mod animation;
mod contact;
mod dom;
mod gallery;
mod i18n;
mod hooks;
mod components;
mod pages {
    pub mod home;
}

use hooks::language::LanguageContext;
use i18n::Language;
use pages::home::Home;

const LANGUAGE_KEY: &str = "language";

/// Last language the visitor picked, else whatever `<html lang>` says.
fn initial_language() -> Language {
    let Some(window) = window() else {
        return Language::default();
    };
    let stored = window
        .local_storage()
        .ok()
        .flatten()
        .and_then(|storage| storage.get_item(LANGUAGE_KEY).ok().flatten());
    let declared = window
        .document()
        .and_then(|d| d.document_element())
        .and_then(|root| root.get_attribute("lang"));
    stored
        .or(declared)
        .and_then(|code| Language::from_code(&code))
        .unwrap_or_default()
}

fn store_language(language: Language) {
    if let Some(window) = window() {
        if let Ok(Some(storage)) = window.local_storage() {
            let _ = storage.set_item(LANGUAGE_KEY, language.code());
        }
    }
}

/// Mirrors the language onto `<html>` so CSS and the browser pick up the
/// reading direction.
fn apply_document_language(language: Language) {
    let Some(root) = window()
        .and_then(|w| w.document())
        .and_then(|d| d.document_element())
    else {
        return;
    };
    let _ = root.set_attribute("lang", language.code());
    let _ = root.set_attribute("dir", language.dir());
    let classes = root.class_list();
    let result = if language.is_rtl() {
        classes.add_1("rtl")
    } else {
        classes.remove_1("rtl")
    };
    if let Err(e) = result {
        log::warn!("Failed to update root direction class: {:?}", e);
    }
}

#[function_component]
fn App() -> Html {
    let language = use_state(initial_language);

    {
        use_effect_with_deps(
            move |language| {
                info!("Language set to {}", language.code());
                apply_document_language(*language);
                store_language(*language);
                || ()
            },
            *language,
        );
    }

    let context = LanguageContext {
        language: *language,
        set_language: {
            let language = language.clone();
            Callback::from(move |next: Language| language.set(next))
        },
    };

    html! {
        <ContextProvider<LanguageContext> {context}>
            <Home />
        </ContextProvider<LanguageContext>>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(config::log_level()).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
