//! Reads the optional `#site-config` JSON block.

use crate::dom;
use cr_site::SiteConfig;

pub const CONFIG_ELEMENT_ID: &str = "site-config";

/// Defaults, overridden by `#site-config` when present and valid.
pub fn load_config() -> SiteConfig {
    let Some(raw) = dom::by_id(CONFIG_ELEMENT_ID).and_then(|el| el.text_content()) else {
        return SiteConfig::default();
    };
    if raw.trim().is_empty() {
        return SiteConfig::default();
    }
    SiteConfig::from_json(&raw).unwrap_or_else(|e| {
        gloo_console::warn!(format!("{e}; using defaults"));
        SiteConfig::default()
    })
}
