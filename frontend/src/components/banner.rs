use yew::prelude::*;

use crate::config::banner;
use crate::hooks::banner::use_banner_animation;
use crate::hooks::language::use_language;
use crate::i18n::Language;

/// Marquee strip under the hero. It only moves while the page scrolls.
#[function_component(Banner)]
pub fn banner() -> Html {
    let lang = use_language();
    let rows = use_banner_animation(banner::SPEED_PX_PER_FRAME);
    let title = lang.t().hero.title;
    // Enough copies to cover the loop width on wide screens
    let text: String = title.repeat(4);

    html! {
        <div class="banner" dir="ltr">
            <style>
                {r#"
                .banner {
                    overflow: hidden;
                    white-space: nowrap;
                    border-top: 1px solid rgba(202, 182, 75, 0.3);
                    border-bottom: 1px solid rgba(202, 182, 75, 0.3);
                    padding: 1.25rem 0;
                    background: #1C1F2A;
                }
                .banner-row {
                    display: inline-block;
                    will-change: transform;
                    font-family: 'Darker Grotesque', sans-serif;
                    font-size: 1.5rem;
                    letter-spacing: 0.3em;
                    color: #CAB64B;
                }
                "#}
            </style>
            {
                match lang.language {
                    Language::En => html! { <div ref={rows.ltr} class="banner-row">{text}</div> },
                    Language::Ar => html! { <div ref={rows.rtl} class="banner-row">{text}</div> },
                }
            }
        </div>
    }
}
