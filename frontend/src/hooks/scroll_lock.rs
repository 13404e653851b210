use yew::prelude::*;

use crate::dom::lock_document_scroll;

/// Holds a document scroll lock while `active` is true.
#[hook]
pub fn use_scroll_lock(active: bool) {
    use_effect_with_deps(
        move |active| {
            let guard = (*active).then(lock_document_scroll);
            move || drop(guard)
        },
        active,
    );
}
