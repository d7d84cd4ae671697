// ⚠️ Error taxonomy for loading, scoring and advisory calls

use thiserror::Error;

/// Errors raised by the library.
///
/// Loading errors abort the load; engine construction errors
/// (`EmptyInput`, `InsufficientHistory`) abort the single request.
/// `ExternalService` never escapes the advisory boundary (see `advisor::ask`).
#[derive(Debug, Error)]
pub enum HealthError {
    #[error("Missing column: {column}")]
    MissingColumn { column: String },

    #[error("Record set is empty - at least one month of data is required")]
    EmptyInput,

    #[error("Insufficient history: {required} records required, {actual} available")]
    InsufficientHistory { required: usize, actual: usize },

    #[error("Duplicate month label: {month}")]
    DuplicateMonth { month: String },

    #[error("Invalid value in row {row}, column {column}: {value}")]
    InvalidValue {
        row: usize,
        column: String,
        value: f64,
    },

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("External service error: {0}")]
    ExternalService(String),
}

pub type Result<T> = std::result::Result<T, HealthError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = HealthError::MissingColumn {
            column: "Loan EMI".to_string(),
        };
        assert_eq!(err.to_string(), "Missing column: Loan EMI");

        let err = HealthError::InsufficientHistory {
            required: 2,
            actual: 1,
        };
        assert_eq!(
            err.to_string(),
            "Insufficient history: 2 records required, 1 available"
        );
    }
}
