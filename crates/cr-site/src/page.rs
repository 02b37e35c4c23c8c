//! Page classification and the per-load plan.

use crate::config::SiteConfig;
use crate::fragment::Fragment;

pub const DEFAULT_PAGE: &str = "index.html";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PageKind {
    /// login / create-account / verify-code: no header or footer.
    Auth,
    Content,
}

/// File name of the current page, e.g. `/pages/support.html` → `support.html`.
/// A path ending in `/` (or an empty path) is the site index.
pub fn file_name(path: &str) -> &str {
    match path.rsplit('/').next() {
        Some(name) if !name.is_empty() => name,
        _ => DEFAULT_PAGE,
    }
}

pub fn classify(file_name: &str, cfg: &SiteConfig) -> PageKind {
    if cfg.is_auth_page(file_name) {
        PageKind::Auth
    } else {
        PageKind::Content
    }
}

/// What the bootstrap has to do for one page load.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PageLoad {
    pub file_name: String,
    pub kind: PageKind,
}

impl PageLoad {
    pub fn from_path(path: &str, cfg: &SiteConfig) -> Self {
        let name = file_name(path);
        Self {
            file_name: name.to_owned(),
            kind: classify(name, cfg),
        }
    }

    /// Fragments to fetch, each exactly once. Empty on auth pages.
    pub fn fragments(&self) -> &'static [Fragment] {
        match self.kind {
            PageKind::Auth => &[],
            PageKind::Content => &Fragment::ALL,
        }
    }
}
