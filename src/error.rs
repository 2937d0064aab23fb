//! Roadsign error types

/// Roadsign error types
#[derive(Debug, thiserror::Error)]
pub enum RoadsignError {
    // Upload errors
    #[error("invalid image data: {0}")]
    InvalidData(String),

    #[error("invalid endpoint URL: {0}")]
    InvalidUrl(String),

    #[error("invalid response from server")]
    InvalidResponse,

    #[error("server error: {0}")]
    ServerError(String),

    // Transport errors, propagated as reported by the HTTP stack
    #[error("HTTP error: {0}")]
    Http(String),

    // Data errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    // Classification errors
    #[error("classifier error: {0}")]
    Classifier(String),

    #[error("no sign model configured")]
    NoModel,

    // Session errors
    #[error("please fill in all fields")]
    MissingFields,

    #[error("passwords don't match")]
    PasswordMismatch,

    #[error("not logged in")]
    NotAuthenticated,

    // Configuration errors
    #[error("configuration error: {0}")]
    Configuration(String),
}

impl RoadsignError {
    /// Whether this is one of the explicit upload failure kinds
    /// (`InvalidData`, `InvalidUrl`, `InvalidResponse`, `ServerError`).
    ///
    /// Transport and decoding failures are reported separately.
    pub fn is_upload_error(&self) -> bool {
        matches!(
            self,
            RoadsignError::InvalidData(_)
                | RoadsignError::InvalidUrl(_)
                | RoadsignError::InvalidResponse
                | RoadsignError::ServerError(_)
        )
    }
}

impl From<reqwest::Error> for RoadsignError {
    fn from(err: reqwest::Error) -> Self {
        RoadsignError::Http(err.to_string())
    }
}

impl From<image::ImageError> for RoadsignError {
    fn from(err: image::ImageError) -> Self {
        RoadsignError::InvalidData(err.to_string())
    }
}

/// Result type alias for Roadsign operations
pub type Result<T> = std::result::Result<T, RoadsignError>;
