//! Project gallery images.
//!
//! Each project lives in its own folder under `assets/projects`; `01.jpg` is
//! the cover, everything else belongs to the gallery. The folder listing
//! comes from `manifest.json`, fetched once and cached for the page load.

use std::cell::RefCell;
use std::collections::HashMap;
use std::future::Future;
use std::rc::Rc;

use futures::future::{FutureExt, LocalBoxFuture, Shared};
use gloo_net::http::Request;
use serde::Deserialize;

use crate::config::{self, gallery};

const PROJECT_FOLDERS: &[(&str, &str)] = &[
    ("Amara Villa", "Residential Projects/Amara Villa"),
    ("Aura", "Residential Projects/Aura"),
    ("Azora ( Residential )", "Residential Projects/Azora ( Residential )"),
    ("Eleve", "Residential Projects/Eleve"),
    ("Ghosoun Resort", "Residential Projects/Ghosoun Resort"),
    ("Liora Residential", "Residential Projects/Liora Residential"),
    ("Orlana Villa", "Residential Projects/Orlana Villa"),
    ("Square 01", "Residential Projects/Square 01"),
    ("Cure Medical Building", "Medical Projects/Cure Medical Building"),
    ("Gas Station 01", "2 gas stations mixed use/01"),
    ("Gas Station 02", "2 gas stations mixed use/02"),
];

// Display titles in both languages.
const TITLE_TO_FOLDER: &[(&str, &str)] = &[
    ("AMARA VILLA", "Amara Villa"),
    ("فيلا أمارا", "Amara Villa"),
    ("AURA", "Aura"),
    ("أورا", "Aura"),
    ("AZORA", "Azora ( Residential )"),
    ("أزورا", "Azora ( Residential )"),
    ("ELEVE", "Eleve"),
    ("إليف", "Eleve"),
    ("GHOSOUN RESORT", "Ghosoun Resort"),
    ("منتجع غصون", "Ghosoun Resort"),
    ("LIORA RESIDENTIAL", "Liora Residential"),
    ("ليورا السكني", "Liora Residential"),
    ("ORLANA VILLA", "Orlana Villa"),
    ("فيلا أورلانا", "Orlana Villa"),
    ("SQUARE 01", "Square 01"),
    ("سكوير ٠١", "Square 01"),
    ("CURE MEDICAL BUILDING", "Cure Medical Building"),
    ("مبنى كيور الطبي", "Cure Medical Building"),
    ("GAS STATION 01", "Gas Station 01"),
    ("محطة وقود ٠١", "Gas Station 01"),
    ("GAS STATION 02", "Gas Station 02"),
    ("محطة وقود ٠٢", "Gas Station 02"),
];

pub fn gallery_folder(title: &str) -> Option<&'static str> {
    TITLE_TO_FOLDER
        .iter()
        .find(|(t, _)| *t == title)
        .map(|(_, folder)| *folder)
}

fn folder_path(folder: &str) -> Option<&'static str> {
    PROJECT_FOLDERS
        .iter()
        .find(|(name, _)| *name == folder)
        .map(|(_, path)| *path)
}

fn encode_path(path: &str) -> String {
    path.split('/')
        .map(|segment| urlencoding::encode(segment).into_owned())
        .collect::<Vec<_>>()
        .join("/")
}

pub fn asset_url(folder: &str, file: &str) -> Option<String> {
    let path = folder_path(folder)?;
    Some(format!(
        "{}/projects/{}/{}",
        config::ASSET_BASE,
        encode_path(path),
        urlencoding::encode(file)
    ))
}

/// Cover image for a project title, available without the manifest.
pub fn cover_url(title: &str) -> Option<String> {
    asset_url(gallery_folder(title)?, gallery::MAIN_IMAGE_NAME)
}

/// Folder name -> image file names.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(transparent)]
pub struct GalleryManifest(HashMap<String, Vec<String>>);

impl GalleryManifest {
    pub fn parse(text: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(text)
    }

    /// Sorted gallery URLs for a folder, cover excluded.
    pub fn images_for(&self, folder: &str) -> Vec<String> {
        let Some(files) = self.0.get(folder) else {
            return Vec::new();
        };
        let mut files: Vec<&String> = files
            .iter()
            .filter(|file| file.as_str() != gallery::MAIN_IMAGE_NAME)
            .collect();
        files.sort();
        files.dedup();
        files
            .into_iter()
            .filter_map(|file| asset_url(folder, file))
            .collect()
    }
}

type PendingLoad<T> = Shared<LocalBoxFuture<'static, Option<T>>>;

/// A load that runs at most once at a time. Callers arriving while it is in
/// flight wait on the same future; a failed load is forgotten so the next
/// caller starts over.
struct SharedLoad<T: Clone> {
    slot: RefCell<Option<PendingLoad<T>>>,
}

impl<T: Clone + 'static> SharedLoad<T> {
    fn new() -> Self {
        Self {
            slot: RefCell::new(None),
        }
    }

    async fn get<F, Fut>(&self, start: F) -> Option<T>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Option<T>> + 'static,
    {
        let load = self
            .slot
            .borrow_mut()
            .get_or_insert_with(|| start().boxed_local().shared())
            .clone();
        let result = load.clone().await;
        if result.is_none() {
            let mut slot = self.slot.borrow_mut();
            if slot.as_ref().map_or(false, |current| current.ptr_eq(&load)) {
                *slot = None;
            }
        }
        result
    }
}

thread_local! {
    static MANIFEST: Rc<SharedLoad<Rc<GalleryManifest>>> = Rc::new(SharedLoad::new());
}

async fn fetch_manifest() -> Option<Rc<GalleryManifest>> {
    let url = format!("{}/{}", config::ASSET_BASE, gallery::MANIFEST_PATH);
    log::debug!("Fetching gallery manifest from {}", url);
    let response = match Request::get(&url).send().await {
        Ok(response) if response.ok() => response,
        Ok(response) => {
            log::warn!("Gallery manifest request returned {}", response.status());
            return None;
        }
        Err(e) => {
            log::warn!("Failed to fetch gallery manifest: {}", e);
            return None;
        }
    };

    let text = match response.text().await {
        Ok(text) => text,
        Err(e) => {
            log::warn!("Failed to read gallery manifest: {}", e);
            return None;
        }
    };

    match GalleryManifest::parse(&text) {
        Ok(parsed) => Some(Rc::new(parsed)),
        Err(e) => {
            log::warn!("Malformed gallery manifest: {}", e);
            None
        }
    }
}

async fn manifest() -> Option<Rc<GalleryManifest>> {
    let loader = MANIFEST.with(Rc::clone);
    loader.get(fetch_manifest).await
}

/// Gallery images for a project title. Unknown titles and any loading
/// failure give an empty list.
pub async fn load_gallery(title: &str) -> Vec<String> {
    let Some(folder) = gallery_folder(title) else {
        log::debug!("No gallery folder for {:?}", title);
        return Vec::new();
    };
    match manifest().await {
        Some(manifest) => manifest.images_for(folder),
        None => Vec::new(),
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use futures::channel::oneshot;
    use futures::executor::block_on;
    use futures::poll;

    use super::*;

    #[test]
    fn titles_map_in_both_languages() {
        assert_eq!(gallery_folder("AMARA VILLA"), Some("Amara Villa"));
        assert_eq!(gallery_folder("فيلا أمارا"), Some("Amara Villa"));
        assert_eq!(gallery_folder("AZORA"), Some("Azora ( Residential )"));
        assert_eq!(gallery_folder("محطة وقود ٠٢"), Some("Gas Station 02"));
        assert_eq!(gallery_folder("CORPORATE HEADQUARTERS"), None);
    }

    #[test]
    fn every_mapped_folder_has_a_path() {
        for (_, folder) in TITLE_TO_FOLDER {
            assert!(folder_path(folder).is_some(), "{folder}");
        }
    }

    #[test]
    fn urls_are_percent_encoded_per_segment() {
        assert_eq!(
            cover_url("AZORA").as_deref(),
            Some("/assets/projects/Residential%20Projects/Azora%20%28%20Residential%20%29/01.jpg")
        );
        assert_eq!(
            asset_url("Gas Station 01", "03.jpg").as_deref(),
            Some("/assets/projects/2%20gas%20stations%20mixed%20use/01/03.jpg")
        );
    }

    #[test]
    fn manifest_skips_cover_and_sorts() {
        let manifest = GalleryManifest::parse(
            r#"{ "Aura": ["03.jpg", "01.jpg", "02.jpg"], "Eleve": [] }"#,
        )
        .unwrap();
        assert_eq!(
            manifest.images_for("Aura"),
            vec![
                "/assets/projects/Residential%20Projects/Aura/02.jpg".to_string(),
                "/assets/projects/Residential%20Projects/Aura/03.jpg".to_string(),
            ]
        );
        assert!(manifest.images_for("Eleve").is_empty());
        assert!(manifest.images_for("Square 01").is_empty());
    }

    #[test]
    fn malformed_manifest_is_an_error() {
        assert!(GalleryManifest::parse(r#"["Aura"]"#).is_err());
    }

    fn counted<T: 'static>(
        starts: &Rc<Cell<usize>>,
        rx: oneshot::Receiver<T>,
    ) -> impl FnOnce() -> LocalBoxFuture<'static, Option<T>> {
        let starts = Rc::clone(starts);
        move || {
            starts.set(starts.get() + 1);
            async move { rx.await.ok() }.boxed_local()
        }
    }

    #[test]
    fn concurrent_callers_share_one_load() {
        let load = SharedLoad::<u32>::new();
        let starts = Rc::new(Cell::new(0));
        let (tx, rx) = oneshot::channel();
        let (_unused_tx, unused_rx) = oneshot::channel();

        block_on(async {
            let mut first = Box::pin(load.get(counted(&starts, rx)));
            let mut second = Box::pin(load.get(counted(&starts, unused_rx)));
            assert!(poll!(first.as_mut()).is_pending());
            assert!(poll!(second.as_mut()).is_pending());

            tx.send(7).unwrap();
            assert_eq!(first.await, Some(7));
            assert_eq!(second.await, Some(7));
        });
        assert_eq!(starts.get(), 1);

        // Finished loads are served from the cache
        let (_tx, rx) = oneshot::channel();
        assert_eq!(block_on(load.get(counted(&starts, rx))), Some(7));
        assert_eq!(starts.get(), 1);
    }

    #[test]
    fn failed_load_is_retried() {
        let load = SharedLoad::<u32>::new();
        let starts = Rc::new(Cell::new(0));

        let (tx, rx) = oneshot::channel::<u32>();
        drop(tx);
        assert_eq!(block_on(load.get(counted(&starts, rx))), None);

        let (tx, rx) = oneshot::channel();
        tx.send(3).unwrap();
        assert_eq!(block_on(load.get(counted(&starts, rx))), Some(3));
        assert_eq!(starts.get(), 2);
    }
}
