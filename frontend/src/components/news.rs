use web_sys::MouseEvent;
use yew::prelude::*;

use crate::components::news_modal::NewsModal;
use crate::components::reveal::Reveal;
use crate::components::swipe_gallery::SwipeGallery;
use crate::hooks::language::use_language;
use crate::i18n::NewsArticle;

/// Article shown for a gallery index; past the end falls back to the last.
fn article_at(articles: &[NewsArticle], index: usize) -> Option<&NewsArticle> {
    articles.get(index).or_else(|| articles.last())
}

/// News carousel. The text column follows whichever article image the
/// gallery has settled on.
#[function_component(News)]
pub fn news() -> Html {
    let lang = use_language();
    let t = lang.t();
    let current = use_state(|| 0_usize);
    let selected = use_state(|| None::<NewsArticle>);

    let images: Vec<String> = t.news.articles.iter().map(|article| article.image.to_string()).collect();
    let Some(article) = article_at(&t.news.articles, *current) else {
        return html! {};
    };

    let on_change = {
        let current = current.clone();
        Callback::from(move |index: usize| current.set(index))
    };

    let read_more = {
        let selected = selected.clone();
        let article = article.clone();
        Callback::from(move |_: MouseEvent| selected.set(Some(article.clone())))
    };

    let close = {
        let selected = selected.clone();
        Callback::from(move |_| selected.set(None))
    };

    html! {
        <section id="news" class="news-section">
            <style>
                {r#"
                .news-section {
                    min-height: 100vh;
                    display: flex;
                    align-items: center;
                    padding: 6rem 0;
                    background: #1C1F2A;
                }
                .news-section .news-grid {
                    max-width: 1536px;
                    margin: 0 auto;
                    padding: 0 2rem;
                    width: 100%;
                    display: grid;
                    grid-template-columns: 1fr 1fr;
                    gap: 4rem;
                    align-items: center;
                }
                .news-section h3 {
                    font-family: 'Darker Grotesque', sans-serif;
                    font-weight: 300;
                    font-size: 1.875rem;
                    letter-spacing: 0.1em;
                    margin: 0;
                }
                .news-section .subtitle {
                    font-size: 0.875rem;
                    letter-spacing: 0.2em;
                    text-transform: uppercase;
                    color: #CAB64B;
                    margin: 1rem 0;
                }
                .news-section p {
                    color: rgba(242, 242, 242, 0.7);
                    line-height: 1.7;
                    display: -webkit-box;
                    -webkit-line-clamp: 4;
                    -webkit-box-orient: vertical;
                    overflow: hidden;
                }
                .news-section .news-gallery {
                    height: 600px;
                    border: 2px solid rgba(202, 182, 75, 0.3);
                }
                @media (max-width: 768px) {
                    .news-section .news-grid {
                        grid-template-columns: 1fr;
                    }
                    .news-section .news-gallery {
                        height: 24rem;
                    }
                }
                "#}
            </style>
            <div class="news-grid">
                <Reveal>
                    <h2 class="section-title">{t.news.title}</h2>
                    <div class="gold-rule"></div>
                    <h3>{article.title}</h3>
                    <div class="subtitle">{article.subtitle}</div>
                    <p>{article.text}</p>
                    <button class="text-link" onclick={read_more}>
                        {t.news.read_more}
                        <span class="arrow">{"→"}</span>
                    </button>
                </Reveal>
                <SwipeGallery {images} alt={t.news.title} class="news-gallery" show_arrows={true} {on_change} />
            </div>
            <NewsModal article={(*selected).clone()} on_close={close} />
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn article(title: &'static str) -> NewsArticle {
        NewsArticle {
            title,
            subtitle: "",
            text: "",
            image: "",
        }
    }

    #[test]
    fn no_articles_gives_nothing() {
        assert_eq!(article_at(&[], 0), None);
        assert_eq!(article_at(&[], 3), None);
    }

    #[test]
    fn index_past_the_end_shows_the_last() {
        let articles = [article("first"), article("second")];
        assert_eq!(article_at(&articles, 0).map(|a| a.title), Some("first"));
        assert_eq!(article_at(&articles, 5).map(|a| a.title), Some("second"));
    }
}
