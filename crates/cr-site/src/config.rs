//! Site configuration.
//!
//! Every field has a default so a page can override only what it needs with a
//! `<script type="application/json" id="site-config">` block.

use crate::error::Result;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SiteConfig {
    /// Directory, relative to the page, holding the header/footer fragments.
    pub components_dir: String,
    /// File names that never show header or footer.
    pub auth_pages: Vec<String>,
    /// Nav keys that highlight the `account` control.
    pub account_pages: Vec<String>,
    pub redirects: Redirects,
}

/// Where each auth form sends the visitor after a (fake) submission.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Redirects {
    pub login: String,
    pub create_account: String,
    pub verify_code: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            components_dir: "components".to_owned(),
            auth_pages: ["login.html", "create-account.html", "verify-code.html"]
                .map(str::to_owned)
                .to_vec(),
            account_pages: [
                "profile",
                "edit-profile",
                "settings",
                "payment-methods",
                "ride-history",
                "notifications",
                "support",
            ]
            .map(str::to_owned)
            .to_vec(),
            redirects: Redirects::default(),
        }
    }
}

impl Default for Redirects {
    fn default() -> Self {
        Self {
            login: "../index.html".to_owned(),
            create_account: "verify-code.html".to_owned(),
            verify_code: "login.html".to_owned(),
        }
    }
}

impl SiteConfig {
    /// Parse a (possibly partial) JSON override.
    pub fn from_json(raw: &str) -> Result<Self> {
        Ok(serde_json::from_str(raw)?)
    }

    pub fn is_auth_page(&self, file_name: &str) -> bool {
        self.auth_pages.iter().any(|p| p == file_name)
    }

    pub fn is_account_page(&self, key: &str) -> bool {
        self.account_pages.iter().any(|p| p == key)
    }

    pub fn component_url(&self, name: &str) -> String {
        let dir = self.components_dir.trim_end_matches('/');
        if dir.is_empty() {
            format!("{name}.html")
        } else {
            format!("{dir}/{name}.html")
        }
    }
}
