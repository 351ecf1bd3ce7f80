use http::StatusCode;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AnalyzerError {
    #[error("Perplexity API key is not configured")]
    MissingApiKey,

    #[error("URL is required")]
    MissingUrl,

    #[error("Invalid URL format")]
    InvalidUrl,

    #[error("Invalid request body: {0}")]
    InvalidBody(String),

    #[error("Request body too large")]
    PayloadTooLarge,

    #[error("Upstream rejected the API key")]
    Unauthorized,

    #[error("Rate limit exceeded")]
    RateLimitExceeded,

    #[error("Upstream rate limit exceeded")]
    UpstreamRateLimited,

    #[error("No analysis generated")]
    NoAnalysis,

    #[error("Analysis request timed out")]
    Timeout,

    #[error("Provider error: {0}")]
    Provider(String),
}

impl AnalyzerError {
    pub fn status(&self) -> StatusCode {
        match self {
            Self::MissingUrl | Self::InvalidUrl | Self::InvalidBody(_) => StatusCode::BAD_REQUEST,
            Self::PayloadTooLarge => StatusCode::PAYLOAD_TOO_LARGE,
            Self::Unauthorized => StatusCode::UNAUTHORIZED,
            Self::RateLimitExceeded | Self::UpstreamRateLimited => StatusCode::TOO_MANY_REQUESTS,
            Self::MissingApiKey | Self::NoAnalysis | Self::Timeout | Self::Provider(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    // upstream details stay in the logs
    pub fn public_message(&self) -> String {
        match self {
            Self::InvalidBody(_) => "Invalid request body".to_string(),
            Self::Unauthorized => "Authentication failed. Please check your API key.".to_string(),
            Self::RateLimitExceeded | Self::UpstreamRateLimited => {
                "Rate limit exceeded. Please try again later.".to_string()
            }
            Self::Provider(_) => "Failed to analyze content".to_string(),
            other => other.to_string(),
        }
    }

    pub fn is_client_error(&self) -> bool {
        self.status().is_client_error()
    }
}

impl warp::reject::Reject for AnalyzerError {}
