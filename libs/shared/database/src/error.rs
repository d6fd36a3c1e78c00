use thiserror::Error;

/// Storage-level failures. `Duplicate` is the unique-index violation the
/// booking path treats as the authoritative conflict signal.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("duplicate record: {0}")]
    Duplicate(String),

    #[error("record not found: {0}")]
    NotFound(String),

    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("unexpected API response ({status}): {body}")]
    Api { status: u16, body: String },

    #[error("malformed API response: {0}")]
    Decode(String),
}
