use web_sys::MouseEvent;
use yew::prelude::*;

use crate::components::project_modal::ProjectModal;
use crate::components::reveal::Reveal;
use crate::components::swipe_gallery::SwipeGallery;
use crate::gallery;
use crate::hooks::language::use_language;
use crate::i18n::ProjectItem;

const FEATURED_IMAGE: &str = "https://images.pexels.com/photos/2724749/pexels-photo-2724749.jpeg";

#[derive(Properties, PartialEq)]
struct ProjectCardProps {
    project: ProjectItem,
    learn_more: AttrValue,
    on_open: Callback<ProjectItem>,
}

/// Card with a swipeable cover + gallery strip. The gallery list is
/// fetched lazily and the cover shows on its own until it arrives.
#[function_component(ProjectCard)]
fn project_card(props: &ProjectCardProps) -> Html {
    let title = props.project.title;
    let images = use_state(|| gallery::cover_url(title).into_iter().collect::<Vec<_>>());

    {
        let images = images.clone();
        use_effect_with_deps(
            move |title| {
                let title: &'static str = *title;
                wasm_bindgen_futures::spawn_local(async move {
                    let loaded = gallery::load_gallery(title).await;
                    if !loaded.is_empty() {
                        images.set(gallery::cover_url(title).into_iter().chain(loaded).collect());
                    }
                });
                || ()
            },
            title,
        );
    }

    let open = {
        let on_open = props.on_open.clone();
        let project = props.project.clone();
        Callback::from(move |_: MouseEvent| on_open.emit(project.clone()))
    };

    html! {
        <Reveal class="project-card">
            <SwipeGallery images={(*images).clone()} alt={title} class="project-gallery" />
            <div class="project-card-body">
                <span class="project-category">{props.project.category}</span>
                <h3>{title}</h3>
                <div class="project-meta">
                    <span>{props.project.year}</span>
                    <span>{"•"}</span>
                    <span>{props.project.location}</span>
                </div>
                <button class="text-link" onclick={open}>{props.learn_more.clone()}</button>
            </div>
        </Reveal>
    }
}

#[function_component(Projects)]
pub fn projects() -> Html {
    let lang = use_language();
    let t = lang.t();
    let selected = use_state(|| None::<ProjectItem>);

    // Titles differ per language, so an open sheet would show stale text
    {
        let selected = selected.clone();
        use_effect_with_deps(
            move |_| {
                selected.set(None);
                || ()
            },
            lang.language,
        );
    }

    let on_open = {
        let selected = selected.clone();
        Callback::from(move |project: ProjectItem| {
            log::debug!("Opening project {}", project.title);
            selected.set(Some(project));
        })
    };

    let open_featured = {
        let on_open = on_open.clone();
        let featured = ProjectItem {
            title: t.projects.title,
            category: t.projects.featured,
            year: t.projects.year,
            location: t.projects.location,
        };
        Callback::from(move |_: MouseEvent| on_open.emit(featured.clone()))
    };

    let close = {
        let selected = selected.clone();
        Callback::from(move |_| selected.set(None))
    };

    html! {
        <>
            <style>
                {r#"
                .featured-project {
                    position: relative;
                    height: 100vh;
                    display: flex;
                    align-items: flex-end;
                    overflow: hidden;
                }
                .featured-project > img {
                    position: absolute;
                    inset: 0;
                    width: 100%;
                    height: 100%;
                    object-fit: cover;
                }
                .featured-project::after {
                    content: '';
                    position: absolute;
                    inset: 0;
                    background: linear-gradient(to top, rgba(28, 31, 42, 0.9), rgba(0, 48, 135, 0.5), transparent);
                }
                .featured-project .featured-body {
                    position: relative;
                    z-index: 1;
                    max-width: 1536px;
                    width: 100%;
                    margin: 0 auto;
                    padding: 6rem 2rem;
                }
                .featured-project h3 {
                    font-family: 'Darker Grotesque', sans-serif;
                    font-weight: 200;
                    font-size: 3rem;
                    letter-spacing: 0.15em;
                    text-transform: uppercase;
                    margin: 1.5rem 0;
                }
                .project-category {
                    font-size: 0.875rem;
                    letter-spacing: 0.3em;
                    text-transform: uppercase;
                    color: #CAB64B;
                }
                .project-meta {
                    display: flex;
                    gap: 2rem;
                    color: rgba(242, 242, 242, 0.7);
                    font-weight: 300;
                }
                .projects-grid {
                    background: #1C1F2A;
                    padding: 6rem 2rem;
                }
                .projects-grid .cards {
                    max-width: 1536px;
                    margin: 0 auto;
                    display: grid;
                    grid-template-columns: repeat(auto-fill, minmax(20rem, 1fr));
                    gap: 3rem;
                }
                .project-card .project-gallery {
                    height: 22rem;
                }
                .project-card h3 {
                    font-family: 'Darker Grotesque', sans-serif;
                    font-weight: 400;
                    font-size: 1.75rem;
                    letter-spacing: 0.1em;
                    margin: 0.75rem 0;
                }
                .project-card .project-card-body {
                    padding-top: 1.25rem;
                }
                "#}
            </style>
            <section id="projects">
                <div class="featured-project">
                    <img src={FEATURED_IMAGE} alt={t.projects.title} />
                    <Reveal class="featured-body">
                        <div class="project-category">{t.projects.featured}</div>
                        <h3>{t.projects.title}</h3>
                        <div class="project-meta">
                            <span>{t.projects.year}</span>
                            <span>{"•"}</span>
                            <span>{t.projects.location}</span>
                        </div>
                        <button class="text-link" onclick={open_featured}>
                            {t.projects.learn_more}
                            <span class="arrow">{"→"}</span>
                        </button>
                    </Reveal>
                </div>
                <div class="projects-grid">
                    <div class="cards">
                        { for t.projects_gallery.items.iter().map(|project| html! {
                            <ProjectCard
                                key={project.title}
                                project={project.clone()}
                                learn_more={t.projects_gallery.learn_more}
                                on_open={on_open.clone()}
                            />
                        }) }
                    </div>
                </div>
            </section>
            <ProjectModal
                project={(*selected).clone()}
                fallback_image={AttrValue::from(FEATURED_IMAGE)}
                on_close={close}
            />
        </>
    }
}
