//! The five cron time fields and their numbering conventions.

/// One of the five schedule-time fields of a cron expression.
///
/// Each field carries its exclusive upper bound, the offset applied when
/// expanding user input, and whether the rendered table re-adds that offset.
/// Day-of-month and month are entered 1-based and stored 0-based; minute,
/// hour and day-of-week are 0-based throughout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Field {
    /// Minute of the hour, `0-59`.
    Minute,
    /// Hour of the day, `0-23`.
    Hour,
    /// Day of the month, entered `1-31`, stored `0-30`.
    DayOfMonth,
    /// Month of the year, entered `1-12`, stored `0-11`.
    Month,
    /// Day of the week, `0-6`.
    DayOfWeek,
}

impl Field {
    /// All five fields in the order they appear in a cron expression.
    pub const ALL: [Field; 5] = [
        Field::Minute,
        Field::Hour,
        Field::DayOfMonth,
        Field::Month,
        Field::DayOfWeek,
    ];

    /// Exclusive upper bound of the field's 0-based stored values.
    pub fn bound(self) -> i64 {
        match self {
            Field::Minute => 60,
            Field::Hour => 24,
            Field::DayOfMonth => 31,
            Field::Month => 12,
            Field::DayOfWeek => 7,
        }
    }

    /// Offset added to raw input values at expansion time.
    ///
    /// `-1` for the 1-based fields (day-of-month, month), `0` otherwise.
    pub fn offset(self) -> i64 {
        match self {
            Field::DayOfMonth | Field::Month => -1,
            _ => 0,
        }
    }

    /// Whether rendering re-adds `1` to stored values to undo [`offset`].
    ///
    /// [`offset`]: Field::offset
    pub fn display_increment(self) -> bool {
        matches!(self, Field::DayOfMonth | Field::Month)
    }

    /// Row label used in the rendered table.
    pub fn label(self) -> &'static str {
        match self {
            Field::Minute => "minute",
            Field::Hour => "hour",
            Field::DayOfMonth => "day of month",
            Field::Month => "month",
            Field::DayOfWeek => "day of week",
        }
    }
}
