use thiserror::Error;

/// Message used when the server gives no usable error detail.
pub const FALLBACK_API_MESSAGE: &str = "API request failed";

/// Application-level errors
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Decision API error: {0}")]
    Api(#[from] ApiError),

    #[error("Form error: {0}")]
    Form(#[from] FormError),
}

/// Decision API errors
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("API error: {status} - {message}")]
    Api { status: u16, message: String },

    #[error("Not found: {message}")]
    NotFound { message: String },

    #[error("Invalid response: {message}")]
    InvalidResponse { message: String },

    #[error("Request timeout after {timeout_ms}ms")]
    Timeout { timeout_ms: u64 },

    #[error("Invalid API URL {url}: {message}")]
    InvalidUrl { url: String, message: String },

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
}

impl ApiError {
    /// The single string shown to the user for this failure.
    ///
    /// Server-reported failures surface the server's detail message; transport
    /// and decoding failures surface the error's own description.
    pub fn user_message(&self) -> String {
        match self {
            ApiError::Api { message, .. } | ApiError::NotFound { message } => message.clone(),
            other => other.to_string(),
        }
    }

    /// HTTP status for server-reported failures.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Api { status, .. } => Some(*status),
            ApiError::NotFound { .. } => Some(404),
            _ => None,
        }
    }
}

/// Form submission errors
#[derive(Debug, Clone, Error, PartialEq)]
pub enum FormError {
    #[error("{field} must be at least {min} characters (got {actual})")]
    TooShort {
        field: &'static str,
        min: usize,
        actual: usize,
    },

    #[error("{field} must be at most {max} characters (got {actual})")]
    TooLong {
        field: &'static str,
        max: usize,
        actual: usize,
    },

    #[error("A submission is already in progress")]
    AlreadySubmitting,
}

/// Result type alias for application errors
pub type AppResult<T> = Result<T, AppError>;

/// Result type alias for Decision API operations
pub type ApiResult<T> = Result<T, ApiError>;
