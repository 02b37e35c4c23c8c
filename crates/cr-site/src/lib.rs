//! Page rules for the Code-Ride site.
//!
//! Everything here is target-independent: the browser runtime in
//! `ui/site-wasm` asks these types what to do and applies the answer to the DOM.

pub mod auth;
pub mod config;
pub mod error;
pub mod fragment;
pub mod menu;
pub mod mode;
pub mod nav;
pub mod page;

pub use auth::AuthForm;
pub use config::{Redirects, SiteConfig};
pub use error::SiteError;
pub use fragment::{Fragment, FragmentTracker, Initializer, LoadStatus};
pub use menu::{ClickOrigin, MenuState};
pub use mode::Mode;
pub use nav::{ACCOUNT_KEY, HOME_KEY};
pub use page::{PageKind, PageLoad};
