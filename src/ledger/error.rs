//! Ledger error types
//!
//! The validation failures ledger mutations can report. Every one is
//! recoverable: the mutation is rejected wholesale, the caller surfaces
//! the message, and the user corrects their input.

use thiserror::Error;

/// Validation failures raised by ledger mutations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LedgerError {
    /// Player name was empty after trimming
    #[error("player name cannot be empty")]
    EmptyName,

    /// Another player already uses this name (case-insensitive)
    #[error("a player named \"{0}\" already exists")]
    DuplicateName(String),

    /// No amount entered, or no player selected to record it against
    #[error("select a player and enter an amount first")]
    MissingInput,

    /// Amount did not parse as a finite number
    #[error("\"{0}\" is not a number")]
    NotANumber(String),
}

impl LedgerError {
    /// Stable machine-readable reason code for this error.
    ///
    /// Unlike the display message, these strings never change and are
    /// safe to log or match on.
    pub fn reason(&self) -> &'static str {
        match self {
            LedgerError::EmptyName => "empty_name",
            LedgerError::DuplicateName(_) => "duplicate_name",
            LedgerError::MissingInput => "missing_input",
            LedgerError::NotANumber(_) => "not_a_number",
        }
    }
}

/// Result type alias for ledger operations
pub type LedgerResult<T> = Result<T, LedgerError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = LedgerError::DuplicateName("Alice".to_string());
        assert_eq!(err.to_string(), "a player named \"Alice\" already exists");

        let err = LedgerError::NotANumber("1.2.3".to_string());
        assert_eq!(err.to_string(), "\"1.2.3\" is not a number");

        assert_eq!(
            LedgerError::EmptyName.to_string(),
            "player name cannot be empty"
        );
    }

    #[test]
    fn test_reason_codes_are_stable() {
        assert_eq!(LedgerError::EmptyName.reason(), "empty_name");
        assert_eq!(
            LedgerError::DuplicateName("Bob".to_string()).reason(),
            "duplicate_name"
        );
        assert_eq!(LedgerError::MissingInput.reason(), "missing_input");
        assert_eq!(
            LedgerError::NotANumber("abc".to_string()).reason(),
            "not_a_number"
        );
    }
}
