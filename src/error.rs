//! Error types for csvql-core.
//!
//! Minimal error types without engine dependencies (no data source, no I/O).

use thiserror::Error;

/// CSVQL error type.
///
/// `Lexical` and `Syntax` describe malformed input and carry the character
/// offset of the failure. `Internal` indicates a bug in the parser itself,
/// never a valid input class.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CsvqlError {
    #[error("Lexical error at position {offset}: {message}")]
    Lexical { message: String, offset: usize },

    #[error("Syntax error at position {offset}: {message}")]
    Syntax { message: String, offset: usize },

    #[error("Internal error: {0}")]
    Internal(String),
}

/// Result type for CSVQL operations
pub type CsvqlResult<T> = Result<T, CsvqlError>;

impl serde::Serialize for CsvqlError {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = CsvqlError::Lexical {
            message: "Unexpected character: #".to_string(),
            offset: 4,
        };
        assert_eq!(
            err.to_string(),
            "Lexical error at position 4: Unexpected character: #"
        );

        let err = CsvqlError::Syntax {
            message: "Expected identifier, found Eof".to_string(),
            offset: 12,
        };
        assert_eq!(
            err.to_string(),
            "Syntax error at position 12: Expected identifier, found Eof"
        );

        let err = CsvqlError::Internal("empty argument list".to_string());
        assert_eq!(err.to_string(), "Internal error: empty argument list");
    }

    #[test]
    fn test_result_type() {
        let ok_result: CsvqlResult<i32> = Ok(42);
        assert_eq!(ok_result.unwrap(), 42);

        let err_result: CsvqlResult<i32> = Err(CsvqlError::Internal("test".to_string()));
        assert!(err_result.is_err());
    }
}
