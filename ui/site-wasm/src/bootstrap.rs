//! Page bootstrap.
//!
//! Classifies the page, starts the fragment loads and wires whatever the
//! page markup supports. Header and footer load as independent tasks; each
//! one's dependent initializer runs only after its own successful load.

use crate::auth;
use crate::config;
use crate::dom;
use crate::loader;
use crate::menu;
use crate::mode;
use crate::nav;
use crate::state;
use cr_site::{Fragment, Initializer, PageKind, PageLoad};

/// Run the whole page setup for the given location path.
pub fn run(path: &str) -> PageLoad {
    state::reset(config::load_config());
    let page = state::with(|s| PageLoad::from_path(path, &s.config));
    gloo_console::log!(format!(
        "code-ride: {} ({})",
        page.file_name,
        match page.kind {
            PageKind::Auth => "auth",
            PageKind::Content => "content",
        }
    ));

    for &fragment in page.fragments() {
        let file_name = page.file_name.clone();
        wasm_bindgen_futures::spawn_local(async move {
            let loaded = loader::load_component(fragment.name(), fragment.target_id()).await;
            fragment_done(fragment, loaded, &file_name);
        });
    }

    mode::bind_mode_toggle();
    auth::bind_auth_forms();
    page
}

pub fn run_current() -> PageLoad {
    run(&dom::pathname())
}

/// Report a finished fragment load and run its initializer if this is the
/// first successful report. Returns the initializer that ran.
pub fn fragment_done(fragment: Fragment, loaded: bool, file_name: &str) -> Option<Initializer> {
    let init = state::record_fragment(fragment, loaded);
    if state::fragments_settled() {
        gloo_console::log!(format!(
            "code-ride: header {:?}, footer {:?}",
            state::fragment_status(Fragment::Header),
            state::fragment_status(Fragment::Footer)
        ));
    }
    match init? {
        Initializer::SideMenu => {
            menu::bind_side_menu();
        }
        Initializer::NavHighlight => {
            let cfg = state::config();
            nav::highlight_navigation(file_name, &cfg);
        }
    }
    init
}
