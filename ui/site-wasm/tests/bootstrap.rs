//! Bootstrap wiring: auth pages, fragment gating, config block.

#![cfg(target_arch = "wasm32")]

mod common;

use common::{click, el, fixture, has};
use cr_site::{Fragment, Initializer, LoadStatus, PageKind, SiteConfig};
use site_wasm::{auth, bootstrap, config, state};
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

const MENU: &str = r#"
    <div id="header-placeholder">
      <button id="menu-toggle"><span id="menu-icon"></span><span id="close-icon" class="hidden"></span></button>
      <nav id="side-menu" class="hidden"></nav>
    </div>
    <div id="footer-placeholder">
      <button id="nav-home" data-page="home"></button>
      <button id="nav-account" data-page="account"></button>
    </div>
"#;

#[wasm_bindgen_test]
fn auth_page_skips_fragments_and_mode_toggle() {
    fixture(r#"<div id="header-placeholder"></div><div id="footer-placeholder"></div>"#);
    let page = bootstrap::run("/pages/login.html");
    assert_eq!(page.kind, PageKind::Auth);
    assert!(page.fragments().is_empty());
    assert_eq!(el("header-placeholder").inner_html(), "");
    assert_eq!(el("footer-placeholder").inner_html(), "");
    assert_eq!(state::fragment_status(Fragment::Header), LoadStatus::Pending);
    assert_eq!(state::fragment_status(Fragment::Footer), LoadStatus::Pending);
}

#[wasm_bindgen_test]
fn failed_header_never_wires_menu() {
    fixture(MENU);
    state::reset(SiteConfig::default());
    assert_eq!(bootstrap::fragment_done(Fragment::Header, false, "index.html"), None);
    assert_eq!(bootstrap::fragment_done(Fragment::Header, true, "index.html"), None);
    click("menu-toggle");
    assert!(has("side-menu", "hidden"));
}

#[wasm_bindgen_test]
fn loaded_header_wires_menu_once() {
    fixture(MENU);
    state::reset(SiteConfig::default());
    assert_eq!(
        bootstrap::fragment_done(Fragment::Header, true, "index.html"),
        Some(Initializer::SideMenu)
    );
    // A second report must not bind the toggle twice (two listeners would
    // cancel each other out).
    assert_eq!(bootstrap::fragment_done(Fragment::Header, true, "index.html"), None);
    click("menu-toggle");
    assert!(has("side-menu", "open"));
}

#[wasm_bindgen_test]
fn loaded_footer_highlights_navigation() {
    fixture(MENU);
    state::reset(SiteConfig::default());
    assert_eq!(
        bootstrap::fragment_done(Fragment::Footer, true, "profile.html"),
        Some(Initializer::NavHighlight)
    );
    assert!(has("nav-account", "active"));
    assert!(!has("nav-home", "active"));
}

#[wasm_bindgen_test]
fn failed_footer_leaves_navigation_alone() {
    fixture(MENU);
    state::reset(SiteConfig::default());
    assert_eq!(bootstrap::fragment_done(Fragment::Footer, false, "index.html"), None);
    assert!(!has("nav-home", "active"));
}

#[wasm_bindgen_test]
fn config_block_overrides_defaults() {
    fixture(
        r#"<script type="application/json" id="site-config">{"componentsDir":"../components"}</script>"#,
    );
    let cfg = config::load_config();
    assert_eq!(cfg.components_dir, "../components");
    assert_eq!(cfg.auth_pages, SiteConfig::default().auth_pages);
}

#[wasm_bindgen_test]
fn malformed_config_falls_back_to_defaults() {
    fixture(r#"<script type="application/json" id="site-config">{oops</script>"#);
    assert_eq!(config::load_config(), SiteConfig::default());
}

#[wasm_bindgen_test]
fn auth_forms_bound_only_when_present() {
    fixture(r#"<form id="login-form"></form><form id="verify-code-form"></form>"#);
    state::reset(SiteConfig::default());
    assert_eq!(auth::bind_auth_forms(), 2);
    fixture("<main></main>");
    assert_eq!(auth::bind_auth_forms(), 0);
}
