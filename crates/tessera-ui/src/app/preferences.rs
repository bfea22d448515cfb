//! Persistence and environment helpers for the app shell.

use crate::core::theme::{ThemeMode, ThemePreference};
use gloo::console;
use gloo::storage::{LocalStorage, Storage};
use gloo::utils::window;
use web_sys::MediaQueryList;

pub(crate) const THEME_KEY: &str = "tessera.theme";
pub(crate) const API_BASE_KEY: &str = "tessera.api_base";

pub(crate) fn load_theme_preference() -> ThemePreference {
    LocalStorage::get::<String>(THEME_KEY)
        .map(|value| ThemePreference::from_str_or_auto(&value))
        .unwrap_or_default()
}

pub(crate) fn store_theme_preference(preference: ThemePreference) {
    if let Err(err) = LocalStorage::set(THEME_KEY, preference.as_str()) {
        console::error!("storage operation failed", THEME_KEY, err.to_string());
    }
}

pub(crate) fn system_prefers_dark() -> bool {
    prefers_dark_query()
        .map(|media| media.matches())
        .unwrap_or(false)
}

pub(crate) fn prefers_dark_query() -> Option<MediaQueryList> {
    window().match_media("(prefers-color-scheme: dark)").ok()?
}

/// Writes the resolved mode onto the root element's `data-theme` attribute,
/// which is where DaisyUI looks for the active theme.
pub(crate) fn apply_theme(mode: ThemeMode) {
    if let Some(root) = window()
        .document()
        .and_then(|document| document.document_element())
    {
        let _ = root.set_attribute("data-theme", mode.as_str());
    }
}

/// Backend origin; a localStorage override wins over the serving origin.
pub(crate) fn api_base_url() -> String {
    if let Ok(value) = LocalStorage::get::<String>(API_BASE_KEY) {
        if !value.trim().is_empty() {
            return value;
        }
    }
    window().location().origin().unwrap_or_default()
}
