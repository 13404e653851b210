use yew::prelude::*;

use crate::i18n::{translations, Language, Translations};

#[derive(Clone, PartialEq)]
pub struct LanguageContext {
    pub language: Language,
    pub set_language: Callback<Language>,
}

impl Default for LanguageContext {
    fn default() -> Self {
        Self {
            language: Language::default(),
            set_language: Callback::noop(),
        }
    }
}

impl LanguageContext {
    pub fn t(&self) -> &'static Translations {
        translations(self.language)
    }
}

/// Current language, English when no provider is mounted.
#[hook]
pub fn use_language() -> LanguageContext {
    use_context::<LanguageContext>().unwrap_or_default()
}
