//! Error types using thiserror.

/// Rejection reasons for a series handed to the dataset store.
///
/// Checks run in declaration order and the first failing one is reported.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum InvalidDataError {
    /// Either axis contains a missing (or non-finite) entry.
    #[error("data points contain a missing value")]
    MissingValue,

    /// The x-axis sequence is empty.
    #[error("x values empty")]
    EmptyX,

    /// The y-axis sequence is empty.
    #[error("y values empty")]
    EmptyY,

    /// The axes have different lengths.
    #[error("length mismatch")]
    LengthMismatch {
        /// Number of x values supplied.
        x_len: usize,
        /// Number of y values supplied.
        y_len: usize,
    },
}

/// Workspace-wide error type.
#[derive(thiserror::Error, Debug)]
pub enum ScatterError {
    /// Caller supplied a series that failed validation.
    #[error("Invalid data: {0}")]
    InvalidData(#[from] InvalidDataError),

    /// The external renderer failed.
    #[error("Render error: {0}")]
    Render(String),
}

/// Common result type for the workspace.
pub type Result<T> = std::result::Result<T, ScatterError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_data_messages_are_literal() {
        assert_eq!(
            InvalidDataError::MissingValue.to_string(),
            "data points contain a missing value"
        );
        assert_eq!(InvalidDataError::EmptyX.to_string(), "x values empty");
        assert_eq!(InvalidDataError::EmptyY.to_string(), "y values empty");
        assert_eq!(
            InvalidDataError::LengthMismatch { x_len: 3, y_len: 2 }.to_string(),
            "length mismatch"
        );
    }

    #[test]
    fn test_scatter_error_wraps_invalid_data() {
        let err: ScatterError = InvalidDataError::EmptyY.into();
        assert!(matches!(err, ScatterError::InvalidData(InvalidDataError::EmptyY)));
        assert_eq!(err.to_string(), "Invalid data: y values empty");
    }
}
