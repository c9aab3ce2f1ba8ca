use crate::error::AppError;

pub const TRANSPORT_ERROR_MESSAGE: &str = "Failed to reach YouTube API";
pub const PARSE_ERROR_MESSAGE: &str = "Failed to parse YouTube response";
pub const UNKNOWN_UPSTREAM_ERROR_MESSAGE: &str = "Upstream request failed";

#[derive(Debug, thiserror::Error)]
pub enum TrendingServiceError {
    /// The YouTube API answered with an `error` object.
    #[error("upstream rejected request: {0}")]
    Upstream(String),
    #[error("transport error: {0}")]
    Transport(String),
    #[error("parse error: {0}")]
    Parse(String),
}

impl From<TrendingServiceError> for AppError {
    fn from(err: TrendingServiceError) -> Self {
        match err {
            TrendingServiceError::Upstream(msg) => AppError::BadRequest(msg),
            TrendingServiceError::Transport(cause) => {
                tracing::warn!(cause = %cause, "YouTube API unreachable");
                AppError::ExternalService(TRANSPORT_ERROR_MESSAGE.to_string())
            }
            TrendingServiceError::Parse(cause) => {
                tracing::warn!(cause = %cause, "YouTube API returned malformed JSON");
                AppError::ExternalService(PARSE_ERROR_MESSAGE.to_string())
            }
        }
    }
}
