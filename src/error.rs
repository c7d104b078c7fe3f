use thiserror::Error;

/// Result type for SAS code operations
pub type Result<T> = std::result::Result<T, SasError>;

/// The code form being rendered when a failure occurred
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CodeForm {
    Decimal,
    Emoji,
}

impl std::fmt::Display for CodeForm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CodeForm::Decimal => write!(f, "decimal"),
            CodeForm::Emoji => write!(f, "emoji"),
        }
    }
}

/// Error types for SAS code rendering
#[derive(Error, Debug)]
pub enum SasError {
    /// Fewer secret bytes than the requested form consumes
    #[error("Invalid input length for {form} code: expected at least {expected} bytes, got {actual}")]
    InvalidInputLength {
        form: CodeForm,
        expected: usize,
        actual: usize,
    },

    /// More preview emoji requested than the table holds
    #[error("Invalid sample size: requested {requested}, only {available} emoji available")]
    InvalidSampleSize { requested: usize, available: usize },

    /// Glyph or label not present in the emoji table
    #[error("Unknown emoji: {0}")]
    UnknownEmoji(String),

    /// Rejected configuration value
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Hex decoding error
    #[error("Hex decode error: {0}")]
    HexError(#[from] hex::FromHexError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_input_length_message() {
        let err = SasError::InvalidInputLength {
            form: CodeForm::Decimal,
            expected: 5,
            actual: 3,
        };
        assert_eq!(
            err.to_string(),
            "Invalid input length for decimal code: expected at least 5 bytes, got 3"
        );
    }

    #[test]
    fn test_hex_error_conversion() {
        let err: SasError = hex::decode("zz").unwrap_err().into();
        assert!(matches!(err, SasError::HexError(_)));
    }

    #[test]
    fn test_error_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<SasError>();
    }
}
