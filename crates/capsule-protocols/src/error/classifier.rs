//! Classifier errors.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClassifierError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("API error: {status} - {message}")]
    ApiError { status: u16, message: String },

    #[error("Malformed response: {0}")]
    MalformedResponse(String),

    /// A response without a usable summary produces a useless hand-off, so it
    /// fails the whole operation rather than degrading.
    #[error("Response contained no summary")]
    MissingSummary,
}

impl ClassifierError {
    /// Human-readable form surfaced to the presentation layer via
    /// `displayError`.
    pub fn display_message(&self) -> String {
        format!("API/Parsing Error: {self}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_display() {
        let err = ClassifierError::ApiError {
            status: 429,
            message: "quota exceeded".to_string(),
        };
        assert!(err.to_string().contains("429"));
        assert!(err.to_string().contains("quota exceeded"));
    }

    #[test]
    fn test_display_message_prefix() {
        let err = ClassifierError::MissingSummary;
        let msg = err.display_message();
        assert!(msg.starts_with("API/Parsing Error:"));
        assert!(msg.contains("no summary"));
    }

    #[test]
    fn test_all_variants_display_non_empty() {
        let errors = vec![
            ClassifierError::Network("refused".to_string()),
            ClassifierError::ApiError {
                status: 500,
                message: "oops".to_string(),
            },
            ClassifierError::MalformedResponse("not json".to_string()),
            ClassifierError::MissingSummary,
        ];
        for err in errors {
            assert!(!err.to_string().is_empty());
        }
    }
}
