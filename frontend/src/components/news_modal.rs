use web_sys::MouseEvent;
use yew::prelude::*;

use crate::components::project_modal::decorative_circle;
use crate::hooks::language::use_language;
use crate::hooks::scroll_lock::use_scroll_lock;
use crate::i18n::NewsArticle;

#[derive(Properties, PartialEq)]
pub struct NewsModalProps {
    pub article: Option<NewsArticle>,
    pub on_close: Callback<()>,
}

#[function_component(NewsModal)]
pub fn news_modal(props: &NewsModalProps) -> Html {
    let lang = use_language();
    use_scroll_lock(props.article.is_some());

    let Some(article) = &props.article else {
        return html! {};
    };

    let close = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };

    html! {
        <div class="news-modal" dir={lang.language.dir()}>
            <style>
                {r#"
                .news-modal {
                    position: fixed;
                    inset: 0;
                    z-index: 50;
                    overflow-y: auto;
                    background: #003087;
                }
                .news-modal .news-layout {
                    min-height: 100vh;
                    display: flex;
                    padding: 2rem 0 4rem;
                }
                .news-modal .news-text,
                .news-modal .news-visual {
                    width: 50%;
                    padding: 4rem;
                    display: flex;
                    flex-direction: column;
                    justify-content: center;
                }
                .news-modal h1 {
                    font-family: 'Darker Grotesque', sans-serif;
                    font-weight: 200;
                    font-size: 4.5rem;
                    line-height: 0.9;
                    letter-spacing: 0.05em;
                    text-transform: uppercase;
                    margin: 0 0 1rem;
                }
                .news-modal h2 {
                    font-family: 'Darker Grotesque', sans-serif;
                    font-weight: 200;
                    font-size: 1.875rem;
                    color: #CAB64B;
                    margin: 0 0 3rem;
                }
                .news-modal p {
                    max-width: 32rem;
                    color: rgba(242, 242, 242, 0.8);
                    line-height: 1.7;
                    text-align: justify;
                }
                .news-modal .news-frame {
                    position: relative;
                    width: 100%;
                    max-width: 36rem;
                    align-self: center;
                }
                .news-modal .news-frame .image {
                    aspect-ratio: 3 / 4;
                    overflow: hidden;
                }
                .news-modal .news-frame img {
                    width: 100%;
                    height: 100%;
                    object-fit: cover;
                }
                @media (max-width: 1024px) {
                    .news-modal .news-layout {
                        flex-direction: column;
                    }
                    .news-modal .news-text,
                    .news-modal .news-visual {
                        width: auto;
                        padding: 2rem;
                    }
                    .news-modal h1 {
                        font-size: 2.5rem;
                    }
                }
                "#}
            </style>
            <nav class="modal-bar">
                <a href="#news" class="nav-logo" onclick={close.clone()}>{lang.t().nav.logo}</a>
                <button class="modal-close" aria-label="Close" onclick={close}>{"×"}</button>
            </nav>
            <div class="news-layout">
                <div class="news-text">
                    <h1>{article.title}</h1>
                    <h2>{article.subtitle}</h2>
                    <p>{article.text}</p>
                </div>
                <div class="news-visual">
                    <div class="news-frame">
                        { decorative_circle(lang.language.is_rtl()) }
                        <div class="image">
                            <img src={article.image} alt={article.title} loading="lazy" />
                        </div>
                    </div>
                </div>
            </div>
        </div>
    }
}
