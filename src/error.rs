//! Error handling module for CosmicScan planning exports
//!
//! Provides centralized error handling with proper error types using thiserror.
//! Library code returns these; the binary wraps them in anyhow at the boundary.

use thiserror::Error;

/// Main error type for table assembly, chart rendering and export
#[derive(Error, Debug)]
pub enum PlanningError {
    /// IO errors (creating the output directory, writing files)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Delimited text serialization errors
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// A table was declared without any column
    #[error("Table '{table}' has no columns")]
    EmptyTable { table: String },

    /// Two columns of one table share a name
    #[error("Table '{table}' declares column '{column}' more than once")]
    DuplicateColumn { table: String, column: String },

    /// Column sequences are not all the same length
    #[error(
        "Table '{table}': column '{column}' has {found} values, expected {expected}"
    )]
    ColumnLengthMismatch {
        table: String,
        column: String,
        expected: usize,
        found: usize,
    },

    /// A score column holds a value outside its declared range
    #[error(
        "Table '{table}': column '{column}' row {row} has value {value}, outside {min}..={max}"
    )]
    ValueOutOfRange {
        table: String,
        column: String,
        row: usize,
        value: i64,
        min: i64,
        max: i64,
    },

    /// Chart definition errors (mismatched series, bad colors, out-of-range nodes)
    #[error("Chart error: {0}")]
    Chart(String),

    /// Drawing backend errors while rendering an image
    #[error("Drawing error: {0}")]
    Drawing(String),

    /// Lookup of an unknown table or chart
    #[error("Not found: {0}")]
    NotFound(String),
}

/// Result type alias for planning operations
pub type Result<T> = std::result::Result<T, PlanningError>;

impl PlanningError {
    /// Create a chart definition error
    pub fn chart(msg: impl Into<String>) -> Self {
        Self::Chart(msg.into())
    }

    /// Create a drawing backend error
    pub fn drawing(msg: impl Into<String>) -> Self {
        Self::Drawing(msg.into())
    }

    /// Create a lookup error
    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::NotFound(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = PlanningError::ColumnLengthMismatch {
            table: "core".to_string(),
            column: "필수도".to_string(),
            expected: 12,
            found: 11,
        };
        assert_eq!(
            err.to_string(),
            "Table 'core': column '필수도' has 11 values, expected 12"
        );

        let err = PlanningError::chart("invalid color '#12'");
        assert_eq!(err.to_string(), "Chart error: invalid color '#12'");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err: PlanningError = io_err.into();
        assert!(matches!(err, PlanningError::Io(_)));
    }

    #[test]
    fn test_error_constructors() {
        assert!(matches!(PlanningError::chart("x"), PlanningError::Chart(_)));
        assert!(matches!(PlanningError::drawing("x"), PlanningError::Drawing(_)));
        assert!(matches!(PlanningError::not_found("x"), PlanningError::NotFound(_)));
    }
}
