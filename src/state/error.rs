//! State update error types

use thiserror::Error;

/// Errors raised when an action cannot be applied to the app state
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StateError {
    /// Mood values run from 1 (sad) to 5 (great)
    #[error("Invalid mood value: {0} (expected 1-5)")]
    InvalidMood(u8),

    /// Tab name does not match any content section
    #[error("Unknown tab: {0}")]
    UnknownTab(String),
}

/// Result type alias for state updates
pub type StateResult<T> = Result<T, StateError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = StateError::InvalidMood(7);
        assert_eq!(err.to_string(), "Invalid mood value: 7 (expected 1-5)");

        let err = StateError::UnknownTab("settings".to_string());
        assert_eq!(err.to_string(), "Unknown tab: settings");
    }
}
