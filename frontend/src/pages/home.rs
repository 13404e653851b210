use yew::prelude::*;

use crate::components::{
    banner::Banner,
    contact_form::ContactForm,
    cursor::CustomCursor,
    intro_overlay::IntroOverlay,
    news::News,
    projects::Projects,
    reveal::Reveal,
    services::Services,
    top_nav::TopNav,
};
use crate::hooks::active_section::use_active_section;
use crate::hooks::language::use_language;

const HERO_IMAGE: &str = "https://images.pexels.com/photos/325185/pexels-photo-325185.jpeg";
const ABOUT_IMAGE: &str = "https://images.pexels.com/photos/1115804/pexels-photo-1115804.jpeg";

#[function_component(Hero)]
fn hero() -> Html {
    let lang = use_language();
    let t = lang.t();

    html! {
        <section class="hero">
            <style>
                {r#"
                .hero {
                    position: relative;
                    height: 100vh;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    overflow: hidden;
                    background: #1C1F2A;
                }
                .hero .hero-backdrop {
                    position: absolute;
                    inset: 0;
                    background-size: cover;
                    background-position: center;
                    opacity: 0.4;
                    animation: zoom 20s ease-in-out infinite;
                }
                .hero::after {
                    content: '';
                    position: absolute;
                    inset: 0;
                    background: linear-gradient(to bottom, rgba(28, 31, 42, 0.7), rgba(0, 48, 135, 0.3), rgba(28, 31, 42, 0.7));
                }
                .hero .hero-content {
                    position: relative;
                    z-index: 2;
                    text-align: center;
                }
                .hero .hero-logo {
                    font-family: 'Darker Grotesque', sans-serif;
                    font-size: 1.25rem;
                    letter-spacing: 0.5em;
                    color: #CAB64B;
                    margin-bottom: 3rem;
                }
                .hero h1 {
                    font-family: 'Darker Grotesque', sans-serif;
                    font-weight: 200;
                    font-size: clamp(3rem, 7vw, 4.5rem);
                    letter-spacing: 0.3em;
                    text-transform: uppercase;
                    margin: 0;
                }
                .hero .scroll-hint {
                    position: absolute;
                    bottom: 6rem;
                    left: 50%;
                    z-index: 2;
                    color: #CAB64B;
                    font-size: 2rem;
                    animation: bounce 1s infinite;
                }
                @keyframes zoom {
                    0%, 100% { transform: scale(1); }
                    50% { transform: scale(1.1); }
                }
                @keyframes bounce {
                    0%, 100% { transform: translate(-50%, -25%); }
                    50% { transform: translate(-50%, 0); }
                }
                "#}
            </style>
            <div class="hero-backdrop" style={format!("background-image: url('{}');", HERO_IMAGE)}></div>
            <div class="hero-content">
                <div class="hero-logo">{t.nav.logo}</div>
                <h1>{t.hero.title}</h1>
            </div>
            <div class="scroll-hint" aria-hidden="true">{"⌄"}</div>
        </section>
    }
}

#[function_component(About)]
fn about() -> Html {
    let lang = use_language();
    let t = lang.t();

    html! {
        <section id="about" class="about-section">
            <style>
                {r#"
                .about-section {
                    min-height: 100vh;
                    display: flex;
                    align-items: center;
                    background: #003087;
                }
                .about-section .about-grid {
                    max-width: 1536px;
                    margin: 0 auto;
                    padding: 6rem 2rem;
                    display: grid;
                    grid-template-columns: 1fr 1fr;
                    gap: 4rem;
                    align-items: center;
                }
                .about-section .about-image {
                    height: 600px;
                    overflow: hidden;
                }
                .about-section .about-image img {
                    width: 100%;
                    height: 100%;
                    object-fit: cover;
                    transition: transform 0.7s ease;
                }
                .about-section .about-image img:hover {
                    transform: scale(1.05);
                }
                .about-section p {
                    max-width: 36rem;
                    color: rgba(242, 242, 242, 0.7);
                    font-size: 1.125rem;
                    font-weight: 300;
                    line-height: 1.7;
                }
                @media (max-width: 768px) {
                    .about-section .about-grid {
                        grid-template-columns: 1fr;
                    }
                    .about-section .about-image {
                        height: 360px;
                    }
                }
                "#}
            </style>
            <div class="about-grid">
                <Reveal class="about-image">
                    <img src={ABOUT_IMAGE} alt={t.about.title} />
                </Reveal>
                <Reveal>
                    <h2 class="section-title gold">{t.about.title}</h2>
                    <div class="gold-rule"></div>
                    <p>{t.about.paragraph1}</p>
                    <p>{t.about.paragraph2}</p>
                </Reveal>
            </div>
        </section>
    }
}

#[function_component(Home)]
pub fn home() -> Html {
    let active_section = use_active_section();

    html! {
        <div class="landing-page">
            <IntroOverlay />
            <CustomCursor />
            <TopNav {active_section} />
            <Hero />
            <Banner />
            <About />
            <Services />
            <Projects />
            <News />
            <ContactForm />
        </div>
    }
}
