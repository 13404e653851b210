pub mod banner;
pub mod contact_form;
pub mod cursor;
pub mod intro_overlay;
pub mod news;
pub mod news_modal;
pub mod project_modal;
pub mod projects;
pub mod reveal;
pub mod services;
pub mod swipe_gallery;
pub mod top_nav;
