//! Error types for chamfer2d

use thiserror::Error;

/// Main error type for chamfer2d operations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// A caller supplied a value outside the accepted domain, such as an
    /// unknown distribution name or a zero cloud size
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// An index build or distance evaluation was attempted on an empty cloud
    #[error("Empty input: {0}")]
    EmptyInput(String),
}

/// Result type alias for chamfer2d operations
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = Error::InvalidArgument("unknown distribution kind 'Spiral'".to_string());
        assert_eq!(err.to_string(), "Invalid argument: unknown distribution kind 'Spiral'");

        let err = Error::EmptyInput("cannot index an empty cloud".to_string());
        assert_eq!(err.to_string(), "Empty input: cannot index an empty cloud");
    }
}
