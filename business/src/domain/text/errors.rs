/// Failures of a text transformation, from input validation to the upstream call.
#[derive(Debug, thiserror::Error)]
pub enum TextError {
    #[error("text.empty")]
    EmptyText,
    #[error("gateway.missing_api_key")]
    MissingApiKey,
    #[error("gateway.invalid_api_key")]
    InvalidApiKey,
    #[error("gateway.rate_limited")]
    RateLimited,
    #[error("gateway.quota_exhausted")]
    QuotaExhausted,
    /// Any other non-success status. `message` is the upstream explanation, if any.
    #[error("gateway.upstream_error: {status}")]
    Upstream { status: u16, message: Option<String> },
    #[error("gateway.timeout")]
    Timeout,
    #[error("gateway.unexpected: {0}")]
    Unexpected(String),
}

impl TextError {
    /// Maps the statuses that carry a dedicated error. Other statuses become `Upstream`.
    pub fn from_status(status: u16, message: Option<String>) -> Self {
        match status {
            401 => TextError::InvalidApiKey,
            402 => TextError::QuotaExhausted,
            429 => TextError::RateLimited,
            _ => TextError::Upstream { status, message },
        }
    }
}
