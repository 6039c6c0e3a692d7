use heroes_core::error::ValidationError;
use heroes_core::ports::RepositoryError;

/// Errors from the catalog REST API layer.
#[derive(Debug, thiserror::Error)]
pub enum HeroApiError {
    /// The HTTP request itself failed (network, DNS, TLS, timeout).
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The API returned a non-2xx status code.
    #[error("Catalog API error ({status}): {body}")]
    Status {
        status: u16,
        /// Raw response body for debugging.
        body: String,
    },

    /// The body was not JSON.
    #[error("Malformed response body: {0}")]
    Decode(#[from] serde_json::Error),

    /// The body was JSON but not a hero or page.
    #[error(transparent)]
    Validation(#[from] ValidationError),
}

impl HeroApiError {
    /// HTTP status, when the server answered at all.
    pub fn status(&self) -> Option<u16> {
        match self {
            HeroApiError::Status { status, .. } => Some(*status),
            HeroApiError::Request(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    /// Message suitable for showing to the end user.
    pub fn user_message(&self) -> String {
        match self {
            HeroApiError::Request(e) if e.is_timeout() => {
                "The request timed out. Please try again.".to_string()
            }
            HeroApiError::Request(_) => {
                "Could not connect to the server. Check your connection.".to_string()
            }
            HeroApiError::Status { status, body } => status_message(*status, body),
            HeroApiError::Decode(_) | HeroApiError::Validation(_) => {
                "The server sent an unexpected response. Please try again later.".to_string()
            }
        }
    }
}

/// User-facing text for an HTTP status.
pub fn status_message(status: u16, body: &str) -> String {
    let message = match status {
        0 => "Could not connect to the server. Check your connection.",
        400 => "Invalid request. Please check the data sent.",
        401 => "Unauthorized. Please sign in.",
        403 => "Access denied. You do not have permission to perform this action.",
        404 => "Resource not found. The requested item does not exist.",
        408 => "Request timed out. Please try again.",
        429 => "Too many requests. Please wait a moment.",
        500 => "Internal server error. Please try again later.",
        502 => "Server unavailable. Please try again later.",
        503 => "Service temporarily unavailable. Please try again later.",
        504 => "Server timed out. Please try again later.",
        _ => {
            let detail = body.trim();
            let detail = if detail.is_empty() { "Unknown error" } else { detail };
            return format!("Error {status}: {detail}");
        }
    };
    message.to_string()
}

impl From<HeroApiError> for RepositoryError {
    fn from(err: HeroApiError) -> Self {
        match err {
            HeroApiError::Validation(e) => RepositoryError::Validation(e),
            other => {
                tracing::error!(error = %other, status = ?other.status(), "Catalog API request failed");
                RepositoryError::Unavailable {
                    message: other.user_message(),
                    status: other.status(),
                }
            }
        }
    }
}
