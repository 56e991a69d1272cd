//! Error types for Lovenote

use thiserror::Error;

/// Errors raised while loading a card configuration.
///
/// The interactive parts of the card cannot fail; only reading the card
/// file at startup can.
#[derive(Error, Debug)]
pub enum CardError {
    /// Card file could not be read
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Card file is not valid JSON for a card
    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),

    /// Card parsed but describes something that cannot be shown
    #[error("Invalid card: {0}")]
    Invalid(String),
}

/// Result type alias using CardError
pub type CardResult<T> = Result<T, CardError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = CardError::Invalid("no recipients".to_string());
        assert_eq!(format!("{}", err), "Invalid card: no recipients");
    }

    #[test]
    fn test_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let card_err: CardError = io_err.into();
        assert!(matches!(card_err, CardError::Io(_)));
    }

    #[test]
    fn test_error_from_json() {
        let json_err = serde_json::from_str::<u32>("not a number").unwrap_err();
        let card_err: CardError = json_err.into();
        assert!(matches!(card_err, CardError::Parse(_)));
    }
}
