//! Navigation keys.
//!
//! Nav controls declare a key in `data-page`; the current page is reduced to
//! the same form before comparing.

use crate::config::SiteConfig;
use crate::page::DEFAULT_PAGE;

pub const HOME_KEY: &str = "home";
pub const ACCOUNT_KEY: &str = "account";

/// `index.html` → `home`, `ride-history.html` → `ride-history`.
pub fn page_key(file_name: &str) -> &str {
    if file_name == DEFAULT_PAGE {
        return HOME_KEY;
    }
    match file_name.rsplit_once('.') {
        Some((stem, _)) if !stem.is_empty() => stem,
        _ => file_name,
    }
}

/// Whether the control declaring `control_key` should be marked active on
/// the page whose key is `current_key`.
pub fn is_active(control_key: &str, current_key: &str, cfg: &SiteConfig) -> bool {
    if control_key == current_key {
        return true;
    }
    control_key == ACCOUNT_KEY && cfg.is_account_page(current_key)
}
