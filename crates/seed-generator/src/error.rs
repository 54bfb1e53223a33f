//! Error types for generators and the seeding engine.

use chrono::{DateTime, Utc};
use seed_core::{SchemaError, StoreError};
use thiserror::Error;

/// Invalid generator configuration.
///
/// Raised by the fallible generator constructors; the `Default` impls
/// always produce a valid configuration.
#[derive(Debug, Error, PartialEq)]
pub enum GeneratorError {
    /// Lower bound above upper bound
    #[error("Invalid range: min {min} is greater than max {max}")]
    InvalidRange { min: String, max: String },

    /// String length bound below one
    #[error("Invalid max_length {0}: must be at least 1")]
    InvalidMaxLength(usize),

    /// More decimal places than the value type can carry
    #[error("Invalid precision {precision}: must be at most {max}")]
    InvalidPrecision { precision: u32, max: u32 },

    /// NaN or infinite float bound
    #[error("Range bound must be finite, got {0}")]
    NonFiniteBound(f64),

    /// Bounds so far apart that their span overflows
    #[error("Range span overflows: max {max} minus min {min} is not finite")]
    RangeOverflow { min: f64, max: f64 },

    /// Bound outside what an exact decimal can represent
    #[error("Range bound {0} cannot be represented as a decimal")]
    DecimalOutOfRange(f64),

    /// Earliest timestamp after latest timestamp
    #[error("Invalid date range: {min} is after {max}")]
    InvalidDateRange {
        min: DateTime<Utc>,
        max: DateTime<Utc>,
    },
}

/// Error type for seeding runs.
#[derive(Debug, Error)]
pub enum SeederError {
    /// Model not found in schema
    #[error("Model not found: {0}")]
    ModelNotFound(String),

    /// Requested zero records
    #[error("Seed count must be at least 1, got {0}")]
    InvalidSeedCount(u64),

    /// Generator configuration error
    #[error("Generator configuration error: {0}")]
    Configuration(#[from] GeneratorError),

    /// Schema error
    #[error("Schema error: {0}")]
    Schema(#[from] SchemaError),

    /// The store rejected a record
    #[error("Failed to persist '{model}' record: {source}")]
    Persistence {
        model: String,
        #[source]
        source: StoreError,
    },
}
