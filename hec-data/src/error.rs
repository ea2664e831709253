/// Error types for queries against a reading dataset
use chrono::NaiveDate;
use thiserror::Error;

#[derive(Error, Debug, PartialEq, Clone)]
pub enum DataError {
    /// No readings were supplied
    #[error("At least one meter reading is required")]
    NoReadings,

    /// Readings are not strictly ascending by date
    #[error("Readings must be strictly ascending by date ({previous} is followed by {next})")]
    UnorderedReadings { previous: NaiveDate, next: NaiveDate },

    /// A query date lies outside the span covered by the readings
    #[error("{date} is outside the reading range {first} to {last}")]
    OutOfRange {
        date: NaiveDate,
        first: NaiveDate,
        last: NaiveDate,
    },

    /// Not enough history for a full-year estimate
    #[error("Insufficient data: readings end on {last} but a full year needs {needed}")]
    InsufficientHistory { needed: NaiveDate, last: NaiveDate },
}

/// Type alias for Results using DataError
pub type Result<T> = std::result::Result<T, DataError>;
