//! Browser side of the theme preference.
//!
//! Reads the persisted preference from `localStorage` and reflects the
//! active theme onto the document's `data-theme` attribute. A missing
//! document or storage degrades that half silently; nothing panics.

use tagdex_core::theme::{Theme, STORAGE_KEY};

/// Read the persisted preference, defaulting to light.
pub fn load_preference() -> Theme {
    let stored = web_sys::window()
        .and_then(|w| w.local_storage().ok().flatten())
        .and_then(|storage| storage.get_item(STORAGE_KEY).ok().flatten());
    Theme::from_stored(stored.as_deref())
}

/// Reflect `theme` onto the document and persist it.
pub fn apply(theme: Theme) {
    let Some(window) = web_sys::window() else {
        return;
    };
    if let Some(el) = window.document().and_then(|d| d.document_element()) {
        let _ = el.set_attribute("data-theme", theme.as_str());
    }
    if let Ok(Some(storage)) = window.local_storage() {
        let _ = storage.set_item(STORAGE_KEY, theme.as_str());
    }
}
