use thiserror::Error;

#[derive(Debug, Error)]
pub enum SiteError {
    #[error("failed to fetch {url}: {reason}")]
    Fetch { url: String, reason: String },

    #[error("failed to load {url}: HTTP {status} {status_text}")]
    Status {
        url: String,
        status: u16,
        status_text: String,
    },

    #[error("failed to read body of {url}: {reason}")]
    Body { url: String, reason: String },

    #[error("missing element #{id}")]
    MissingTarget { id: String },

    #[error("invalid site config: {0}")]
    Config(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, SiteError>;
