// src/error.rs
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("unexpected status {status} for {url}")]
    Status { status: u16, url: String },

    #[error("invalid url: {0}")]
    Url(#[from] url::ParseError),

    #[error("invalid request header: {0}")]
    Header(String),

    #[error("invalid selector `{0}`")]
    Selector(String),

    /// Classification lookups are keyed by node id.
    #[error("taxon has no id; cannot load its classification")]
    MissingId,

    #[error("photo search needs at least one filter")]
    NoParameters,

    #[error("too many results ({0}); narrow the photo search")]
    TooManyResults(u64),
}
