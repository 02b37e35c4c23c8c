//! DOM helpers.
//!
//! Thin wrappers over `web_sys` so the feature modules read like the markup
//! they manipulate. Lookups return `Option` and never panic: a page that lacks
//! an element simply skips the wiring that needs it.

use wasm_bindgen::JsCast;
use web_sys::{Document, Element, Node, Window};

// ── Window / document ──

pub fn document() -> Document {
    gloo_utils::document()
}

pub fn window() -> Window {
    gloo_utils::window()
}

// ── Lookups ──

pub fn by_id(id: &str) -> Option<Element> {
    document().get_element_by_id(id)
}

pub fn query_all(selector: &str) -> Vec<Element> {
    let Ok(nl) = document().query_selector_all(selector) else {
        return Vec::new();
    };
    let mut v = Vec::new();
    for i in 0..nl.length() {
        if let Some(e) = nl.item(i) {
            if let Ok(el) = e.dyn_into::<Element>() {
                v.push(el);
            }
        }
    }
    v
}

// ── Mutation ──

pub fn set_inner_html(el: &Element, html: &str) {
    el.set_inner_html(html);
}

pub fn toggle_class(el: &Element, cls: &str, force: bool) {
    let _ = el.class_list().toggle_with_force(cls, force);
}

pub fn has_class(el: &Element, cls: &str) -> bool {
    el.class_list().contains(cls)
}

/// Whether `target` is `el` itself or one of its descendants.
pub fn contains(el: &Element, target: Option<&Node>) -> bool {
    el.contains(target)
}

// ── Location ──

/// Current `location.pathname`, or empty if it cannot be read.
pub fn pathname() -> String {
    window().location().pathname().unwrap_or_default()
}
