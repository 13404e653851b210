use yew::prelude::*;

use crate::animation::intro::IntroPhase;
use crate::hooks::intro::use_intro_animation;

const INTRO_CSS: &str = r#"
.intro-overlay {
    --reveal-radius: 150px;
    position: fixed;
    inset: 0;
    z-index: 1000;
    backdrop-filter: blur(24px);
    -webkit-backdrop-filter: blur(24px);
    background: rgba(28, 31, 42, 0.85);
    transition: opacity 0.6s ease;
}
.intro-overlay.intro-expanding,
.intro-overlay.intro-done {
    -webkit-mask-image: radial-gradient(circle at center, transparent var(--reveal-radius), black calc(var(--reveal-radius) + 1px));
    mask-image: radial-gradient(circle at center, transparent var(--reveal-radius), black calc(var(--reveal-radius) + 1px));
}
.intro-overlay.intro-done {
    opacity: 0;
    pointer-events: none;
}
.intro-outline {
    position: absolute;
    left: 50%;
    top: 50%;
    width: calc(var(--reveal-radius) * 2);
    height: calc(var(--reveal-radius) * 2);
    transform: translate(-50%, -50%);
    overflow: visible;
}
.intro-outline circle {
    fill: none;
    stroke: #CAB64B;
    stroke-width: 1;
    stroke-dasharray: 315;
    stroke-dashoffset: 315;
}
.intro-drawing .intro-outline circle {
    animation: intro-draw 1s ease-in-out forwards;
}
.intro-expanding .intro-outline circle,
.intro-done .intro-outline circle {
    stroke-dashoffset: 0;
}
@keyframes intro-draw {
    to { stroke-dashoffset: 0; }
}
"#;

/// Blurred full-screen overlay that opens with a growing circle.
#[function_component(IntroOverlay)]
pub fn intro_overlay() -> Html {
    let intro = use_intro_animation();

    html! {
        <>
            <style>{INTRO_CSS}</style>
            <div
                ref={intro.overlay}
                class={classes!("intro-overlay", intro.phase.class_name())}
                aria-hidden="true"
            >
                if intro.phase != IntroPhase::Initial {
                    <svg class="intro-outline" viewBox="0 0 102 102">
                        <circle
                            cx="51"
                            cy="51"
                            r="50"
                            onanimationend={intro.on_outline_drawn}
                        />
                    </svg>
                }
            </div>
        </>
    }
}
