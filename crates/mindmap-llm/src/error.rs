use thiserror::Error;

/// The text-generation call itself failed. Never recovered by fallback.
#[derive(Debug, Error)]
pub enum GenerationError {
    #[error("request failed: {0}")]
    Request(String),

    #[error("generator returned {status}: {body}")]
    Status { status: u16, body: String },

    #[error("could not decode generator response: {0}")]
    Decode(String),

    #[error("generator unavailable: {0}")]
    Unavailable(String),
}

impl From<reqwest::Error> for GenerationError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_decode() {
            GenerationError::Decode(e.to_string())
        } else {
            GenerationError::Request(e.to_string())
        }
    }
}
