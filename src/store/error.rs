//! Store error types

use thiserror::Error;

/// Errors a provider can report
///
/// The in-memory store never produces these; they exist so that the API
/// layer has something concrete to translate when a provider does fail.
#[derive(Error, Debug)]
pub enum StoreError {
    /// Backing data could not be read
    #[error("Provider unavailable: {0}")]
    Unavailable(String),

    /// Any other provider failure
    #[error("Provider error: {0}")]
    Internal(String),
}

/// Result type alias for store operations
pub type StoreResult<T> = Result<T, StoreError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = StoreError::Unavailable("disk gone".to_string());
        assert_eq!(err.to_string(), "Provider unavailable: disk gone");

        let err = StoreError::Internal("boom".to_string());
        assert_eq!(err.to_string(), "Provider error: boom");
    }
}
