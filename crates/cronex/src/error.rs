//! Error types for cron expression parsing and expansion.

use thiserror::Error;

/// Errors that can occur while parsing or expanding a cron expression.
///
/// Every error is fatal for the invocation that produced it: expansion stops
/// at the first bad term and nothing is retried or partially rendered.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CronError {
    /// The expression has fewer than six space-separated fields
    /// (five time fields plus at least one command token).
    #[error("Invalid cron expression {expression} - missing terms.")]
    InvalidExpression {
        /// The full expression that was rejected.
        expression: String,
    },

    /// A sub-term failed numeric or pattern parsing.
    #[error("Malformed term \"{term}\"")]
    MalformedTerm {
        /// The sub-term that was rejected.
        term: String,
    },

    /// A plain value lies outside the field's valid range.
    #[error("Term \"{term}\" outside of valid range: 0 - {last}", last = .max - 1)]
    OutOfRange {
        /// The sub-term that was rejected.
        term: String,
        /// The field's exclusive upper bound.
        max: i64,
    },
}

/// Result type for cron expression operations.
pub type CronResult<T> = std::result::Result<T, CronError>;
