//! Auth form stub: submissions never leave the browser, they just move the
//! visitor to the next static page.

use crate::dom;
use crate::events;
use crate::state;
use cr_site::AuthForm;

fn navigate(target: &str) {
    if let Err(e) = dom::window().location().set_href(target) {
        gloo_console::error!(format!("navigation to {target} failed"), e);
    }
}

/// Intercept `submit` on every auth form present. Returns how many were bound.
pub fn bind_auth_forms() -> usize {
    let cfg = state::config();
    let mut bound = 0;
    for form in AuthForm::ALL {
        let Some(el) = dom::by_id(form.form_id()) else {
            continue;
        };
        let target = form.redirect(&cfg).to_owned();
        events::on_event(&el, "submit", move |e| {
            e.prevent_default();
            navigate(&target);
        });
        bound += 1;
    }
    bound
}
