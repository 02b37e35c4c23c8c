//! Component loader.
//!
//! Fetches `<componentsDir>/<name>.html` and injects it into a placeholder.
//! Failures are logged and reported as `false`; nothing is retried.

use crate::dom;
use crate::state;
use cr_site::SiteError;
use cr_site::error::Result;
use gloo_net::http::Request;

/// GET `url` and return the body, treating any non-2xx status as an error.
pub async fn fetch_fragment(url: &str) -> Result<String> {
    let resp = Request::get(url)
        .send()
        .await
        .map_err(|e| SiteError::Fetch {
            url: url.to_owned(),
            reason: e.to_string(),
        })?;

    if !resp.ok() {
        return Err(SiteError::Status {
            url: url.to_owned(),
            status: resp.status(),
            status_text: resp.status_text(),
        });
    }

    resp.text().await.map_err(|e| SiteError::Body {
        url: url.to_owned(),
        reason: e.to_string(),
    })
}

async fn try_load(name: &str, target_id: &str) -> Result<()> {
    let target = dom::by_id(target_id).ok_or_else(|| SiteError::MissingTarget {
        id: target_id.to_owned(),
    })?;
    let url = state::with(|s| s.config.component_url(name));
    let html = fetch_fragment(&url).await?;
    dom::set_inner_html(&target, &html);
    Ok(())
}

/// Load component `name` into `#target_id`. Returns whether it succeeded.
pub async fn load_component(name: &str, target_id: &str) -> bool {
    match try_load(name, target_id).await {
        Ok(()) => true,
        Err(e) => {
            gloo_console::error!(format!("Error loading {name}: {e}"));
            false
        }
    }
}
