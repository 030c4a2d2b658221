//! Typed wrappers over browser geometry and navigation via `web_sys`.
//!
//! Components call these instead of touching `web_sys` directly so every
//! lookup degrades gracefully when the window, document, or element is
//! missing.

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

/// Vertical geometry of an element in viewport coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ElementRect {
    pub top: f64,
    pub bottom: f64,
    pub height: f64,
}

/// Bounding rect of the element with the given id, if it is in the DOM.
pub fn element_rect(id: &str) -> Option<ElementRect> {
    let element = web_sys::window()?.document()?.get_element_by_id(id)?;
    let rect = element.get_bounding_client_rect();
    Some(ElementRect {
        top: rect.top(),
        bottom: rect.bottom(),
        height: rect.height(),
    })
}

/// Viewport height in CSS pixels. Zero outside a browser.
pub fn viewport_height() -> f64 {
    web_sys::window()
        .and_then(|window| window.inner_height().ok())
        .and_then(|height| height.as_f64())
        .unwrap_or(0.0)
}

/// Run `callback` on every viewport resize and scroll.
///
/// The closure is leaked: the listeners live for the lifetime of the page,
/// which is exactly as long as the popovers that need repositioning.
pub fn on_viewport_change(callback: impl FnMut() + 'static) {
    let window = match web_sys::window() {
        Some(window) => window,
        None => return,
    };
    let closure = Closure::<dyn FnMut()>::new(callback);
    for event in ["resize", "scroll"] {
        if window
            .add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())
            .is_err()
        {
            log::warn!("failed to attach {event} listener");
        }
    }
    closure.forget();
}

/// The current `location.search`, including the leading `?` when non-empty.
pub fn current_query_string() -> String {
    web_sys::window()
        .and_then(|window| window.location().search().ok())
        .unwrap_or_default()
}

/// Navigate to the results view by replacing the query string.
pub fn navigate_to_search(query: &str) {
    if let Some(window) = web_sys::window() {
        if window.location().set_search(query).is_err() {
            log::warn!("navigation to search results failed");
        }
    }
}
