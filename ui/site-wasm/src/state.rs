//! Page-scoped state.
//!
//! Uses `RefCell`-wrapped `thread_local!` storage (WASM is single-threaded).
//! Everything here is rebuilt on each page load.

use cr_site::{Fragment, FragmentTracker, Initializer, LoadStatus, Mode, SiteConfig};
use std::cell::RefCell;

// ── Page state ──

#[derive(Clone, Debug, Default)]
pub struct PageState {
    pub config: SiteConfig,
    pub mode: Mode,
    pub fragments: FragmentTracker,
}

// ── Thread-local singleton ──

thread_local! {
    static STATE: RefCell<PageState> = RefCell::new(PageState::default());
}

/// Run a closure with shared read access to the state.
pub fn with<F, R>(f: F) -> R
where
    F: FnOnce(&PageState) -> R,
{
    STATE.with(|s| f(&s.borrow()))
}

/// Run a closure with mutable access to the state.
pub fn with_mut<F, R>(f: F) -> R
where
    F: FnOnce(&mut PageState) -> R,
{
    STATE.with(|s| f(&mut s.borrow_mut()))
}

// ── Convenience accessors ──

/// Start a fresh page: new config, default mode, no fragments reported.
pub fn reset(config: SiteConfig) {
    with_mut(|s| {
        *s = PageState {
            config,
            ..PageState::default()
        }
    });
}

pub fn config() -> SiteConfig {
    with(|s| s.config.clone())
}

pub fn mode() -> Mode {
    with(|s| s.mode)
}

pub fn set_mode(mode: Mode) {
    with_mut(|s| s.mode = mode);
}

pub fn record_fragment(fragment: Fragment, loaded: bool) -> Option<Initializer> {
    with_mut(|s| s.fragments.record(fragment, loaded))
}

pub fn fragment_status(fragment: Fragment) -> LoadStatus {
    with(|s| s.fragments.status(fragment))
}

pub fn fragments_settled() -> bool {
    with(|s| s.fragments.settled())
}
