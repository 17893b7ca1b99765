use thiserror::Error;

/// Convenience result type for conversion and loading operations.
pub type ConversionResult<T> = Result<T, ConversionError>;

/// Error type returned by conversion and dataset loading functions.
///
/// A single error enum shared by the reformatter ([`crate::conversion`]) and the loader
/// ([`crate::ingestion`]).
#[derive(Debug, Error)]
pub enum ConversionError {
    /// Underlying I/O error (e.g. input not found, output not writable).
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV reader/writer error.
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),

    /// A record did not have the expected number of fields (only raised when
    /// [`crate::conversion::FieldCountPolicy::Reject`] is selected).
    #[error("line {line}: expected {expected} fields, found {found}")]
    FieldCount {
        line: usize,
        expected: usize,
        found: usize,
    },

    /// The input does not conform to the provided schema (missing columns, etc.).
    #[error("schema mismatch: {message}")]
    SchemaMismatch { message: String },

    /// A value could not be parsed into the required [`crate::types::DataType`].
    #[error("failed to parse value at row {row} column '{column}': {message} (raw='{raw}')")]
    ParseError {
        row: usize,
        column: String,
        raw: String,
        message: String,
    },
}
