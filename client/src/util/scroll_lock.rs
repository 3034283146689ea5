//! Background scroll suppression while an overlay is open.
//!
//! Toggles an inline `overflow` style on `<body>`. Requires a browser
//! environment; other builds no-op.

#[cfg(test)]
#[path = "scroll_lock_test.rs"]
mod scroll_lock_test;

/// `overflow` value for `<body>`; `None` clears the inline style.
pub fn overflow_value(locked: bool) -> Option<&'static str> {
    locked.then_some("hidden")
}

/// Apply or release the lock on `<body>`.
pub fn apply(locked: bool) {
    #[cfg(feature = "hydrate")]
    {
        let Some(body) = web_sys::window().and_then(|w| w.document()).and_then(|d| d.body()) else {
            return;
        };
        let style = body.style();
        let _ = match overflow_value(locked) {
            Some(value) => style.set_property("overflow", value),
            None => style.remove_property("overflow").map(|_| ()),
        };
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = locked;
    }
}
