use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AiError {
    /// The flow input was rejected before anything was sent.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// No text generator is configured.
    #[error("ai unavailable: {0}")]
    Unavailable(String),

    /// The provider call failed (network, HTTP status, quota, ...).
    #[error("provider error: {0}")]
    Provider(String),

    /// The provider answered but the reply could not be interpreted.
    #[error("could not parse model output: {0}")]
    Parse(String),
}
