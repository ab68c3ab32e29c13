use thiserror::Error;

/// Errors raised while rendering a [`ProblemResponse`](crate::ProblemResponse) for the wire.
///
/// Building a response never fails; these only come from the HTTP conversion and JSON
/// encoding steps.
#[derive(Debug, Error)]
pub enum ProblemError {
    #[error("status {0} is not a valid HTTP status code")]
    InvalidStatus(i32),

    #[error("invalid header name '{name}'")]
    InvalidHeaderName { name: String },

    #[error("invalid value for header '{name}'")]
    InvalidHeaderValue { name: String },

    #[error("failed to encode problem body: {0}")]
    Serialize(#[from] serde_json::Error),
}
