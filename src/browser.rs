//! Thin wrappers over the browser APIs the app touches.

use rand::rngs::SmallRng;
use rand::SeedableRng;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::File;

use truthlens_core::runner::{Scheduler, Sleep};
use truthlens_core::theme::{PreferenceStore, ThemePreference};
use truthlens_core::StagedFile;

/// Sleeps with `setTimeout`.
pub struct BrowserScheduler;

impl Scheduler for BrowserScheduler {
    fn sleep(&self, ms: u32) -> Sleep {
        let promise = js_sys::Promise::new(&mut |resolve, _| {
            if let Some(w) = web_sys::window() {
                let _ = w.set_timeout_with_callback_and_timeout_and_arguments_0(&resolve, ms as i32);
            }
        });
        Box::pin(async move {
            JsFuture::from(promise).await.ok();
        })
    }
}

/// `window.localStorage`.
pub struct BrowserStorage;

fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok()?
}

impl PreferenceStore for BrowserStorage {
    fn load(&self, key: &str) -> Option<String> {
        local_storage()?.get_item(key).ok()?
    }

    fn save(&self, key: &str, value: &str) -> Result<(), String> {
        let storage = local_storage().ok_or("Local storage unavailable")?;
        storage
            .set_item(key, value)
            .map_err(|e| format!("Failed to write '{key}': {:?}", e))
    }
}

pub fn prefers_dark() -> bool {
    web_sys::window()
        .and_then(|w| w.match_media("(prefers-color-scheme: dark)").ok().flatten())
        .map(|m| m.matches())
        .unwrap_or(false)
}

pub fn apply_theme(theme: ThemePreference) {
    let Some(root) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.document_element())
    else {
        return;
    };
    let _ = root.set_attribute("data-theme", theme.as_str());
}

/// Blocking notification for input errors.
pub fn alert(message: &str) {
    if let Some(w) = web_sys::window() {
        let _ = w.alert_with_message(message);
    }
}

pub fn page_query() -> String {
    web_sys::window()
        .and_then(|w| w.location().search().ok())
        .unwrap_or_default()
}

pub fn seeded_rng() -> SmallRng {
    let entropy = (js_sys::Math::random() * (1u64 << 53) as f64) as u64;
    SmallRng::seed_from_u64(entropy ^ js_sys::Date::now() as u64)
}

pub fn now_iso() -> String {
    js_sys::Date::new_0()
        .to_iso_string()
        .as_string()
        .unwrap_or_default()
}

pub fn scroll_into_view(el: &web_sys::Element) {
    let opts = web_sys::ScrollIntoViewOptions::new();
    opts.set_behavior(web_sys::ScrollBehavior::Smooth);
    opts.set_block(web_sys::ScrollLogicalPosition::Nearest);
    el.scroll_into_view_with_scroll_into_view_options(&opts);
}

pub fn staged_file(file: File) -> StagedFile<File> {
    let name = file.name();
    let size = file.size() as u64;
    let media_type = file.type_();
    StagedFile::new(file, name, size, media_type)
}

pub fn object_url(file: &File) -> Option<String> {
    web_sys::Url::create_object_url_with_blob(file).ok()
}

pub fn revoke_object_url(url: &str) {
    let _ = web_sys::Url::revoke_object_url(url);
}

/// Trigger a download of `contents` as `filename`.
pub fn download_json(filename: &str, contents: &str) -> Result<(), String> {
    let parts = js_sys::Array::of1(&JsValue::from_str(contents));
    let blob = web_sys::Blob::new_with_str_sequence(&parts).map_err(|e| format!("Blob: {:?}", e))?;
    let url = web_sys::Url::create_object_url_with_blob(&blob).map_err(|e| format!("URL: {:?}", e))?;

    let doc = web_sys::window()
        .and_then(|w| w.document())
        .ok_or("No document")?;
    let a: web_sys::HtmlAnchorElement = doc
        .create_element("a")
        .map_err(|e| format!("Anchor: {:?}", e))?
        .unchecked_into();
    a.set_href(&url);
    a.set_download(filename);
    a.click();
    let _ = web_sys::Url::revoke_object_url(&url);
    Ok(())
}
