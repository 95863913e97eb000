//! Error types for brief generation
//!
//! A single error enum covers the whole request path: slug extraction,
//! the project store read, layout and PDF serialization. Each variant knows
//! which HTTP status it maps to so the server layer stays thin.

use thiserror::Error;

/// Custom error type for investor brief operations
#[derive(Error, Debug)]
pub enum BriefError {
    #[error("Project slug is required")]
    MissingSlug,

    /// The slug is kept for logging; the public message never echoes it.
    #[error("Project not found")]
    ProjectNotFound(String),

    #[error("Project store error: {0}")]
    Store(String),

    #[error("PDF generation error: {0}")]
    PdfError(String),

    #[error("JSON parsing error: {0}")]
    JsonError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Method not allowed")]
    MethodNotAllowed,
}

/// Result type alias for brief operations
pub type BriefResult<T> = Result<T, BriefError>;

impl BriefError {
    /// HTTP status code reported to the caller for this error.
    pub fn status_code(&self) -> u16 {
        match self {
            BriefError::MissingSlug => 400,
            BriefError::ProjectNotFound(_) => 404,
            BriefError::MethodNotAllowed => 405,
            _ => 500,
        }
    }
}

impl From<serde_json::Error> for BriefError {
    fn from(err: serde_json::Error) -> Self {
        BriefError::JsonError(err.to_string())
    }
}

impl From<reqwest::Error> for BriefError {
    fn from(err: reqwest::Error) -> Self {
        BriefError::Store(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(BriefError::MissingSlug.status_code(), 400);
        assert_eq!(BriefError::ProjectNotFound("x".into()).status_code(), 404);
        assert_eq!(BriefError::MethodNotAllowed.status_code(), 405);
        assert_eq!(BriefError::PdfError("boom".into()).status_code(), 500);
        assert_eq!(BriefError::Store("down".into()).status_code(), 500);
    }

    #[test]
    fn test_public_messages() {
        assert_eq!(BriefError::MissingSlug.to_string(), "Project slug is required");
        assert_eq!(
            BriefError::ProjectNotFound("secret-slug".into()).to_string(),
            "Project not found"
        );
    }
}
