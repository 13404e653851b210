use yew::prelude::*;

use crate::animation::visibility::RevealOptions;
use crate::hooks::visibility::use_visibility;

#[derive(Properties, PartialEq)]
pub struct RevealProps {
    #[prop_or_default]
    pub class: Classes,
    /// Animate again every time the block comes back into view.
    #[prop_or_default]
    pub repeat: bool,
    pub children: Children,
}

/// Fades and lifts its children in when they scroll into view.
#[function_component(Reveal)]
pub fn reveal(props: &RevealProps) -> Html {
    let options = if props.repeat {
        RevealOptions::repeating()
    } else {
        RevealOptions::default()
    };
    let (node, visible) = use_visibility(options);

    html! {
        <div ref={node} class={classes!("reveal", props.class.clone(), visible.then_some("visible"))}>
            { for props.children.iter() }
        </div>
    }
}
