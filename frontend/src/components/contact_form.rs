use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::components::reveal::Reveal;
use crate::contact::{ContactDraft, ContactSubmission};
use crate::hooks::language::use_language;

#[derive(Clone, Copy, PartialEq)]
enum FormStatus {
    Editing,
    Missing,
    Sent,
}

/// Dumps the submission to the browser console. Nothing leaves the page.
fn log_submission(submission: &ContactSubmission) {
    match serde_wasm_bindgen::to_value(submission) {
        Ok(value) => gloo_console::log!("Form submitted:", value),
        Err(e) => log::warn!("Failed to serialize contact submission: {}", e),
    }
    log::info!("Contact form submitted by {}", submission.email);
}

#[function_component(ContactForm)]
pub fn contact_form() -> Html {
    let lang = use_language();
    let t = lang.t();
    let draft = use_state(ContactDraft::default);
    let status = use_state(|| FormStatus::Editing);

    let update = |apply: fn(&mut ContactDraft, String)| {
        let draft = draft.clone();
        let status = status.clone();
        move |value: String| {
            let mut next = (*draft).clone();
            apply(&mut next, value);
            draft.set(next);
            status.set(FormStatus::Editing);
        }
    };

    let input_handler = |apply: fn(&mut ContactDraft, String)| {
        let update = update(apply);
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            update(input.value());
        })
    };

    let on_message = {
        let update = update(|draft, value| draft.message = value);
        Callback::from(move |e: InputEvent| {
            let input: HtmlTextAreaElement = e.target_unchecked_into();
            update(input.value());
        })
    };

    let onsubmit = {
        let draft = draft.clone();
        let status = status.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            match draft.submit() {
                Some(submission) => {
                    log_submission(&submission);
                    draft.set(ContactDraft::default());
                    status.set(FormStatus::Sent);
                }
                None => {
                    log::debug!("Contact form rejected, empty field after sanitizing");
                    status.set(FormStatus::Missing);
                }
            }
        })
    };

    html! {
        <section id="contact" class="contact-section">
            <style>
                {r#"
                .contact-section {
                    min-height: 100vh;
                    display: flex;
                    align-items: center;
                    padding: 6rem 0;
                    background: #003087;
                }
                .contact-section .contact-inner {
                    max-width: 48rem;
                    margin: 0 auto;
                    padding: 0 2rem;
                    width: 100%;
                }
                .contact-section .section-title {
                    white-space: pre-line;
                }
                .contact-form {
                    display: flex;
                    flex-direction: column;
                    gap: 2rem;
                }
                .contact-form .name-row {
                    display: grid;
                    grid-template-columns: 1fr 1fr;
                    gap: 2rem;
                }
                .contact-form input,
                .contact-form textarea {
                    width: 100%;
                    background: transparent;
                    border: none;
                    border-bottom: 1px solid rgba(202, 182, 75, 0.3);
                    padding: 1rem 0;
                    color: #F2F2F2;
                    font-family: 'Inter Tight', sans-serif;
                    font-weight: 300;
                    letter-spacing: 0.15em;
                    resize: none;
                    transition: border-color 0.2s ease;
                }
                .contact-form input::placeholder,
                .contact-form textarea::placeholder {
                    color: rgba(242, 242, 242, 0.4);
                }
                .contact-form input:focus,
                .contact-form textarea:focus {
                    outline: none;
                    border-bottom-color: #CAB64B;
                }
                .contact-form button[type="submit"] {
                    align-self: flex-start;
                    background: #CAB64B;
                    color: #1C1F2A;
                    border: none;
                    padding: 1rem 3rem;
                    font-size: 0.875rem;
                    letter-spacing: 0.2em;
                    text-transform: uppercase;
                    cursor: pointer;
                }
                .contact-form .form-status {
                    font-size: 0.875rem;
                    letter-spacing: 0.1em;
                }
                .contact-form .form-status.error {
                    color: #fca5a5;
                }
                .contact-form .form-status.sent {
                    color: #CAB64B;
                }
                @media (max-width: 768px) {
                    .contact-form .name-row {
                        grid-template-columns: 1fr;
                    }
                }
                "#}
            </style>
            <Reveal class="contact-inner">
                <h2 class="section-title">{t.contact.title}</h2>
                <div class="gold-rule"></div>
                <form class="contact-form" {onsubmit}>
                    <div class="name-row">
                        <input
                            type="text"
                            placeholder={t.contact.first_name}
                            value={draft.first_name.clone()}
                            oninput={input_handler(|draft, value| draft.first_name = value)}
                            required={true}
                        />
                        <input
                            type="text"
                            placeholder={t.contact.last_name}
                            value={draft.last_name.clone()}
                            oninput={input_handler(|draft, value| draft.last_name = value)}
                            required={true}
                        />
                    </div>
                    <input
                        type="email"
                        placeholder={t.contact.email}
                        value={draft.email.clone()}
                        oninput={input_handler(|draft, value| draft.email = value)}
                        required={true}
                    />
                    <textarea
                        placeholder={t.contact.message}
                        value={draft.message.clone()}
                        oninput={on_message}
                        rows="6"
                        required={true}
                    />
                    {
                        match *status {
                            FormStatus::Missing => html! { <div class="form-status error">{t.contact.missing_fields}</div> },
                            FormStatus::Sent => html! { <div class="form-status sent">{t.contact.sent}</div> },
                            FormStatus::Editing => html! {},
                        }
                    }
                    <button type="submit">{t.contact.send}</button>
                </form>
            </Reveal>
        </section>
    }
}
