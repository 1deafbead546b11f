//! Focus Retention
//!
//! The list views swap to a loading placeholder while a fetch is in flight,
//! which unmounts the search input. These helpers record whether the input
//! held keyboard focus before the fetch and hand focus back after the next
//! paint, once the re-rendered input exists in the DOM.

use leptos::html::Input;
use leptos::prelude::*;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

/// Whether the tracked search input is the document's active element.
pub fn input_has_focus(input: &NodeRef<Input>) -> bool {
    let Some(element) = input.get_untracked() else {
        return false;
    };
    window()
        .document()
        .and_then(|document| document.active_element())
        .map(|active| active.is_same_node(Some(element.unchecked_ref())))
        .unwrap_or(false)
}

/// Requests focus on the input after the next paint. No-op when the input
/// never regained a mount point, so calling it unconditionally is safe.
pub fn restore_after_render(input: NodeRef<Input>) {
    let callback = Closure::once_into_js(move || {
        if let Some(element) = input.get_untracked() {
            let _ = element.focus();
        }
    });
    let _ = window().request_animation_frame(callback.as_ref().unchecked_ref());
}
