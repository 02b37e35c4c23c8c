#![allow(dead_code)]

use site_wasm::dom;
use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlElement};

/// Replace the test page body with `html`.
pub fn fixture(html: &str) {
    if let Some(body) = dom::document().body() {
        body.set_inner_html(html);
    }
}

pub fn el(id: &str) -> Element {
    dom::by_id(id).unwrap_or_else(|| panic!("fixture is missing #{id}"))
}

pub fn click(id: &str) {
    el(id).unchecked_into::<HtmlElement>().click();
}

pub fn has(id: &str, cls: &str) -> bool {
    dom::has_class(&el(id), cls)
}
