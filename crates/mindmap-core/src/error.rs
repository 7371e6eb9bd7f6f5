use thiserror::Error;

/// Required input string was missing or blank.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{0}")]
pub struct InputError(pub String);

/// Why a model response was not usable. Every variant is recovered
/// locally by synthesizing a fallback breakdown.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Rejection {
    #[error("not valid JSON: {0}")]
    Parse(String),

    #[error("generic entry name: {0:?}")]
    Generic(String),

    #[error("unexpected shape: {0}")]
    Shape(String),
}
