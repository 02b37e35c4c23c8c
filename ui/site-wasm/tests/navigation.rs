//! Navigation highlighting against footer markup.

#![cfg(target_arch = "wasm32")]

mod common;

use common::{fixture, has};
use cr_site::SiteConfig;
use site_wasm::nav::highlight_navigation;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

const FOOTER: &str = r#"
    <footer>
      <button id="nav-home" data-page="home">Home</button>
      <button id="nav-rides" data-page="rides" class="active">Rides</button>
      <button id="nav-wallet" data-page="wallet">Wallet</button>
      <button id="nav-account" data-page="account">Account</button>
    </footer>
"#;

const CONTROLS: [&str; 4] = ["nav-home", "nav-rides", "nav-wallet", "nav-account"];

fn active_controls() -> Vec<&'static str> {
    CONTROLS.into_iter().filter(|id| has(id, "active")).collect()
}

#[wasm_bindgen_test]
fn profile_highlights_account_only() {
    fixture(FOOTER);
    assert_eq!(highlight_navigation("profile.html", &SiteConfig::default()), 1);
    assert_eq!(active_controls(), ["nav-account"]);
}

#[wasm_bindgen_test]
fn index_highlights_home() {
    fixture(FOOTER);
    highlight_navigation("index.html", &SiteConfig::default());
    assert_eq!(active_controls(), ["nav-home"]);
}

#[wasm_bindgen_test]
fn support_page_highlights_account() {
    fixture(FOOTER);
    highlight_navigation("support.html", &SiteConfig::default());
    assert_eq!(active_controls(), ["nav-account"]);
}

#[wasm_bindgen_test]
fn unknown_page_clears_everything() {
    fixture(FOOTER);
    assert_eq!(highlight_navigation("about.html", &SiteConfig::default()), 0);
    assert!(active_controls().is_empty());
}
