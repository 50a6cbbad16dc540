//! Pre-parse validation of the raw cron argument.
//!
//! These checks sit in front of the parser: they reject obviously malformed
//! input (too few fields, no command, characters that can never appear in a
//! time field) with messages aimed at a command-line user, before any term
//! expansion happens.

use thiserror::Error;

/// Number of time fields preceding the command.
const TIME_FIELD_COUNT: usize = 5;

/// Errors raised by argument validation, before parsing starts.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidateError {
    /// Fewer than five space-separated fields.
    #[error("not enough cron fields, received {0}, expected 6 or more")]
    NotEnoughFields(usize),

    /// Exactly five fields: the time fields are present but no command.
    #[error("no command given")]
    NoCommand,

    /// A time field contains characters outside digits and `* / - ,`.
    #[error("malformed cron expression - invalid field \"{0}\"")]
    InvalidField(String),
}

/// Check the raw expression's shape before handing it to the parser.
///
/// Returns the input unchanged on success so the caller can pass it along.
pub fn validate_expression(expression: &str) -> Result<&str, ValidateError> {
    let fields: Vec<&str> = expression.split(' ').collect();

    if fields.len() < TIME_FIELD_COUNT {
        return Err(ValidateError::NotEnoughFields(fields.len()));
    }
    if fields.len() == TIME_FIELD_COUNT {
        return Err(ValidateError::NoCommand);
    }

    for field in &fields[..TIME_FIELD_COUNT] {
        if !field.chars().all(is_valid_field_char) {
            return Err(ValidateError::InvalidField(field.to_string()));
        }
    }

    Ok(expression)
}

fn is_valid_field_char(c: char) -> bool {
    c.is_ascii_digit() || matches!(c, '*' | '/' | '-' | ',')
}
