use serde::Serialize;
use thiserror::Error;

/// Hard failures. These halt the run and are reported to the caller.
#[derive(Debug, Clone, Error)]
pub enum AppError {
    #[error("Usage: textbook-quiz <subject> <pdf_path> <num_questions>")]
    Usage,

    #[error("Invalid request: {0}")]
    ValidationError(String),

    #[error("PDF file not found: {0}")]
    FileNotFound(String),

    #[error("Error extracting PDF: {0}")]
    Extraction(String),

    #[error("PDF appears to be empty or contains very little text")]
    InsufficientText,
}

impl AppError {
    pub fn error_code(&self) -> &'static str {
        match self {
            AppError::Usage => "USAGE",
            AppError::ValidationError(_) => "VALIDATION_ERROR",
            AppError::FileNotFound(_) => "FILE_NOT_FOUND",
            AppError::Extraction(_) => "EXTRACTION_ERROR",
            AppError::InsufficientText => "INSUFFICIENT_TEXT",
        }
    }

    pub fn to_response(&self) -> ErrorResponse {
        ErrorResponse {
            error: self.to_string(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl From<validator::ValidationErrors> for AppError {
    fn from(err: validator::ValidationErrors) -> Self {
        AppError::ValidationError(err.to_string())
    }
}

impl From<lopdf::Error> for AppError {
    fn from(err: lopdf::Error) -> Self {
        AppError::Extraction(err.to_string())
    }
}

pub type AppResult<T> = Result<T, AppError>;

/// Failures of the generation endpoint. The pipeline absorbs these and falls
/// back, so they never reach the caller.
#[derive(Debug, Error)]
pub enum ModelError {
    #[error("Model request to {endpoint} failed: {source}")]
    Request {
        endpoint: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("Model request to {endpoint} timed out after {seconds}s")]
    Timeout { endpoint: String, seconds: u64 },

    #[error("Model endpoint {endpoint} returned status {status}")]
    Status { endpoint: String, status: u16 },

    #[error("Could not decode model response: {0}")]
    Decode(String),
}
