use thiserror::Error;

/// An error talking to the playtime service
#[derive(Debug,Error)]
pub enum PlaytimeError
{
    #[error("Invalid playtime service URL '{0}'")]
    InvalidUrl(String),
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("Playtime service returned status {0}")]
    Status(u16),
    #[error("Couldn't decode playtime response: {0}")]
    Decode(#[from] serde_json::Error),
}
