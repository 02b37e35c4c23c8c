//! Navigation highlighter.

use crate::dom;
use cr_site::SiteConfig;
use cr_site::nav::{is_active, page_key};

/// Mark every `[data-page]` control matching `file_name` as `active` and
/// clear the rest. Returns the number of active controls.
pub fn highlight_navigation(file_name: &str, cfg: &SiteConfig) -> usize {
    let current = page_key(file_name);
    let mut active = 0;
    for control in dom::query_all("[data-page]") {
        let key = control.get_attribute("data-page").unwrap_or_default();
        let on = is_active(&key, current, cfg);
        dom::toggle_class(&control, "active", on);
        if on {
            active += 1;
        }
    }
    active
}
