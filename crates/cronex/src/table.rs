//! Table rendering for parsed cron expressions.

use crate::expand::FieldValue;
use crate::field::Field;
use crate::parser::CronExpression;

// Wide enough for "day of month" plus two trailing spaces.
const LABEL_WIDTH: usize = 14;

/// Render a parsed cron expression as a fixed-format table.
///
/// One row per time field plus a command row, each label left-aligned in a
/// fixed-width column. A field stored as a lone wildcard expands to every
/// value it allows; day-of-month and month values are shown 1-based. The
/// output starts with a blank line and ends with a newline, and rendering
/// the same record twice yields byte-identical text.
///
/// # Examples
///
/// ```rust
/// use cronex::{parse, render};
///
/// let cron = parse("30 12 1 * * /usr/bin/find").unwrap();
/// let table = render(&cron);
/// assert!(table.contains("minute        30\n"));
/// assert!(table.contains("day of month  1\n"));
/// ```
pub fn render(cron: &CronExpression) -> String {
    let mut table = String::from("\n");

    for field in Field::ALL {
        let values = format_values(cron.values(field), field.bound(), field.display_increment());
        table.push_str(&row(field.label(), &values));
    }
    table.push_str(&row("command", &cron.command.join(" ")));

    table
}

fn row(label: &str, values: &str) -> String {
    format!("{label:<width$}{values}\n", width = LABEL_WIDTH)
}

/// Space-join one field's display values.
///
/// A sequence that is exactly `[*]` expands to the full `0..bound` run;
/// otherwise stored tokens are emitted as-is, with the display increment
/// applied to numbers. Wildcards mixed in with numbers pass through
/// unchanged.
fn format_values(values: &[FieldValue], bound: i64, increment: bool) -> String {
    let step = i64::from(increment);

    if matches!(values, [FieldValue::Wildcard]) {
        return (0..bound)
            .map(|value| (value + step).to_string())
            .collect::<Vec<_>>()
            .join(" ");
    }

    values
        .iter()
        .map(|value| match value {
            FieldValue::Number(n) => (n + step).to_string(),
            FieldValue::Wildcard => value.to_string(),
        })
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn numbers(values: &[i64]) -> Vec<FieldValue> {
        values.iter().copied().map(FieldValue::Number).collect()
    }

    #[test]
    fn test_render_table() {
        // "*/15 0 1,15 * 1-5" - every 15 minutes during the midnight hour on
        // the 1st and 15th, Monday through Friday.
        let cron = CronExpression {
            minute: numbers(&[0, 15, 30, 45]),
            hour: numbers(&[0]),
            day_of_month: numbers(&[0, 14]),
            month: vec![FieldValue::Wildcard],
            day_of_week: numbers(&[1, 2, 3, 4, 5]),
            command: vec!["<command>".to_string()],
        };

        assert_eq!(
            render(&cron),
            "\n\
             minute        0 15 30 45\n\
             hour          0\n\
             day of month  1 15\n\
             month         1 2 3 4 5 6 7 8 9 10 11 12\n\
             day of week   1 2 3 4 5\n\
             command       <command>\n"
        );
    }

    #[test]
    fn test_render_table_with_command_arguments() {
        let cron = CronExpression {
            minute: numbers(&[30]),
            hour: vec![FieldValue::Wildcard],
            day_of_month: vec![FieldValue::Wildcard],
            month: vec![FieldValue::Wildcard],
            day_of_week: vec![FieldValue::Wildcard],
            command: vec!["<command>", "arg1", "arg2", "arg3"]
                .into_iter()
                .map(String::from)
                .collect(),
        };

        assert_eq!(
            render(&cron),
            "\n\
             minute        30\n\
             hour          0 1 2 3 4 5 6 7 8 9 10 11 12 13 14 15 16 17 18 19 20 21 22 23\n\
             day of month  1 2 3 4 5 6 7 8 9 10 11 12 13 14 15 16 17 18 19 20 21 22 23 24 25 26 27 28 29 30 31\n\
             month         1 2 3 4 5 6 7 8 9 10 11 12\n\
             day of week   0 1 2 3 4 5 6\n\
             command       <command> arg1 arg2 arg3\n"
        );
    }

    #[test]
    fn test_format_wildcard_values() {
        let wildcard = vec![FieldValue::Wildcard];
        assert_eq!(format_values(&wildcard, 12, false), "0 1 2 3 4 5 6 7 8 9 10 11");
        assert_eq!(format_values(&wildcard, 12, true), "1 2 3 4 5 6 7 8 9 10 11 12");
    }

    #[test]
    fn test_format_number_values() {
        let values = numbers(&[0, 15, 30, 45]);
        assert_eq!(format_values(&values, 60, false), "0 15 30 45");
        assert_eq!(format_values(&values, 60, true), "1 16 31 46");
    }

    #[test]
    fn test_mixed_wildcard_passes_through() {
        let values = vec![FieldValue::Wildcard, FieldValue::Number(5)];
        assert_eq!(format_values(&values, 12, true), "* 6");
    }
}
