use yew::prelude::*;

use crate::hooks::cursor::use_custom_cursor;

#[function_component(CustomCursor)]
pub fn custom_cursor() -> Html {
    let cursor = use_custom_cursor();

    html! {
        <>
            <style>
                {r#"
                .custom-cursor {
                    position: fixed;
                    left: -100px;
                    top: -100px;
                    width: 18px;
                    height: 18px;
                    border: 1px solid #CAB64B;
                    border-radius: 50%;
                    pointer-events: none;
                    transform: translate(-50%, -50%);
                    transition: width 0.2s ease, height 0.2s ease, background-color 0.2s ease;
                    z-index: 9999;
                    mix-blend-mode: difference;
                }
                .custom-cursor.hovering {
                    width: 48px;
                    height: 48px;
                    background-color: rgba(202, 182, 75, 0.15);
                }
                @media (hover: none), (pointer: coarse) {
                    .custom-cursor { display: none; }
                }
                "#}
            </style>
            <div ref={cursor} class="custom-cursor"></div>
        </>
    }
}
