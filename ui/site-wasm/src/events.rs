//! Event-listener plumbing.
//!
//! Listeners live for the whole page, so closures are leaked with
//! `Closure::forget` once attached.

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Event, EventTarget, MouseEvent};

/// Attach a click handler to `target`.
pub fn on_click<F>(target: &EventTarget, handler: F)
where
    F: FnMut(MouseEvent) + 'static,
{
    let cb = Closure::wrap(Box::new(handler) as Box<dyn FnMut(MouseEvent)>);
    if target
        .add_event_listener_with_callback("click", cb.as_ref().unchecked_ref())
        .is_ok()
    {
        cb.forget();
    }
}

/// Attach a handler for an arbitrary event type.
pub fn on_event<F>(target: &EventTarget, event: &str, handler: F)
where
    F: FnMut(Event) + 'static,
{
    let cb = Closure::wrap(Box::new(handler) as Box<dyn FnMut(Event)>);
    if target
        .add_event_listener_with_callback(event, cb.as_ref().unchecked_ref())
        .is_ok()
    {
        cb.forget();
    }
}
