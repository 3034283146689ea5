//! Lucide icon activation.
//!
//! Rendered markup references icons declaratively (`<i data-lucide="x">`).
//! The Lucide script replaces those placeholders with inline SVG, but only
//! when asked, so every content render must be followed by [`refresh`].
//! Requires a browser environment; other builds no-op.

#[cfg(test)]
#[path = "icons_test.rs"]
mod icons_test;

/// Script that defines the `lucide` global, pinned so `createIcons` keeps
/// the calling convention [`refresh`] relies on.
pub const LUCIDE_SCRIPT_SRC: &str = "https://unpkg.com/lucide@0.460.0/dist/umd/lucide.min.js";

/// Ask the page's icon library to activate placeholders in the current DOM.
///
/// Fire-and-forget: a missing library or a failing call leaves the
/// placeholders as they are.
pub fn refresh() {
    #[cfg(feature = "hydrate")]
    {
        use wasm_bindgen::{JsCast as _, JsValue};

        let Some(window) = web_sys::window() else {
            return;
        };
        let Ok(lucide) = js_sys::Reflect::get(&window, &JsValue::from_str("lucide")) else {
            return;
        };
        if lucide.is_undefined() || lucide.is_null() {
            log::debug!("lucide not loaded; icon placeholders left as-is");
            return;
        }
        let Ok(create) = js_sys::Reflect::get(&lucide, &JsValue::from_str("createIcons")) else {
            return;
        };
        if let Some(create) = create.dyn_ref::<js_sys::Function>() {
            let _ = create.call0(&lucide);
        }
    }
}
