//! Cron expression parsing into a structured record.

use crate::error::{CronError, CronResult};
use crate::expand::{expand, FieldValue};
use crate::field::Field;

/// Number of time fields preceding the command.
const TIME_FIELD_COUNT: usize = 5;

/// A parsed cron expression: five expanded time fields plus the command.
///
/// Constructed once by [`parse`] and immutable afterwards. Day-of-month and
/// month values are stored 0-based; the renderer re-adds the offset for
/// display.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CronExpression {
    /// Expanded minute field.
    pub minute: Vec<FieldValue>,
    /// Expanded hour field.
    pub hour: Vec<FieldValue>,
    /// Expanded day-of-month field (0-based).
    pub day_of_month: Vec<FieldValue>,
    /// Expanded month field (0-based).
    pub month: Vec<FieldValue>,
    /// Expanded day-of-week field.
    pub day_of_week: Vec<FieldValue>,
    /// Command name followed by its arguments, order preserved.
    pub command: Vec<String>,
}

impl CronExpression {
    /// The expanded values for one time field.
    pub fn values(&self, field: Field) -> &[FieldValue] {
        match field {
            Field::Minute => &self.minute,
            Field::Hour => &self.hour,
            Field::DayOfMonth => &self.day_of_month,
            Field::Month => &self.month,
            Field::DayOfWeek => &self.day_of_week,
        }
    }
}

/// Parse a cron expression string.
///
/// The input is split on single spaces; the first five tokens are the time
/// fields in minute, hour, day-of-month, month, day-of-week order and every
/// remaining token belongs to the command, verbatim.
///
/// # Errors
///
/// [`CronError::InvalidExpression`] if fewer than six tokens are present;
/// any expansion error from [`expand`] for a bad time field.
///
/// # Examples
///
/// ```rust
/// use cronex::{parse, FieldValue};
///
/// let cron = parse("*/15 0 1,15 * 1-5 /usr/bin/find").unwrap();
/// assert_eq!(cron.hour, vec![FieldValue::Number(0)]);
/// assert_eq!(cron.month, vec![FieldValue::Wildcard]);
/// assert_eq!(cron.command, vec!["/usr/bin/find".to_string()]);
/// ```
pub fn parse(cron: &str) -> CronResult<CronExpression> {
    let tokens: Vec<&str> = cron.split(' ').collect();

    if tokens.len() <= TIME_FIELD_COUNT {
        return Err(CronError::InvalidExpression {
            expression: cron.to_string(),
        });
    }

    let expand_field = |index: usize, field: Field| -> CronResult<Vec<FieldValue>> {
        expand(tokens[index], field.bound(), field.offset())
    };

    Ok(CronExpression {
        minute: expand_field(0, Field::Minute)?,
        hour: expand_field(1, Field::Hour)?,
        day_of_month: expand_field(2, Field::DayOfMonth)?,
        month: expand_field(3, Field::Month)?,
        day_of_week: expand_field(4, Field::DayOfWeek)?,
        command: tokens[TIME_FIELD_COUNT..]
            .iter()
            .map(|token| token.to_string())
            .collect(),
    })
}
