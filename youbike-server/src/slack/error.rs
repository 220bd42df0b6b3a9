//! Slack delivery error types.

/// Errors from posting to a `response_url`.
#[derive(Debug, thiserror::Error)]
pub enum SlackError {
    /// HTTP request failed
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Slack rejected the payload
    #[error("Slack error {status}: {message}")]
    Api { status: u16, message: String },
}
