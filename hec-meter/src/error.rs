/// Error types for reading and weather ingestion
use thiserror::Error;

#[derive(Error, Debug)]
pub enum MeterError {
    /// Failed to read CSV/TSV data
    #[error("Failed to parse CSV: {0}")]
    CsvParse(#[from] csv::Error),

    /// Date parsing failed
    #[error("Failed to parse date on line {line}: {value}")]
    DateParse { line: u64, value: String },

    /// A row did not have the expected shape
    #[error("Invalid data format on line {line}: {reason}")]
    InvalidFormat { line: u64, reason: String },

    /// HTTP request failed
    #[cfg(feature = "api")]
    #[error("HTTP request failed: {0}")]
    HttpRequest(#[from] reqwest::Error),

    /// Server answered with a non-success status
    #[cfg(feature = "api")]
    #[error("{url} responded with status {status}")]
    HttpStatus { url: String, status: u16 },
}

/// Type alias for Results using MeterError
pub type Result<T> = std::result::Result<T, MeterError>;
