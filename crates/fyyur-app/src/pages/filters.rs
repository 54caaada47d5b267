use time::{format_description::BorrowedFormatItem, macros::format_description, PrimitiveDateTime};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DateFormat {
    /// `Tuesday May, 21, 2019 at 9:30PM`
    Full,
    /// `Tue 05, 21, 2019 9:30PM`
    #[default]
    Medium,
}

const FULL: &[BorrowedFormatItem<'static>] = format_description!(
    "[weekday repr:long] [month repr:long], [day padding:none], [year] at [hour repr:12 padding:none]:[minute][period]"
);
const MEDIUM: &[BorrowedFormatItem<'static>] = format_description!(
    "[weekday repr:short] [month], [day], [year] [hour repr:12 padding:none]:[minute][period]"
);

pub fn format_datetime(value: PrimitiveDateTime, format: DateFormat) -> String {
    let description = match format {
        DateFormat::Full => FULL,
        DateFormat::Medium => MEDIUM,
    };
    value
        .format(description)
        .unwrap_or_else(|_| value.to_string())
}

/// Value for a `datetime-local` input.
pub fn input_datetime(value: PrimitiveDateTime) -> String {
    const INPUT: &[BorrowedFormatItem<'static>] =
        format_description!("[year]-[month]-[day]T[hour]:[minute]");
    value.format(INPUT).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::datetime;

    #[test]
    fn test_full_format() {
        assert_eq!(
            format_datetime(datetime!(2019-05-21 21:30:00), DateFormat::Full),
            "Tuesday May, 21, 2019 at 9:30PM"
        );
        assert_eq!(
            format_datetime(datetime!(2035-04-01 20:00:00), DateFormat::Full),
            "Sunday April, 1, 2035 at 8:00PM"
        );
        assert_eq!(
            format_datetime(datetime!(2019-06-15 00:05:00), DateFormat::Full),
            "Saturday June, 15, 2019 at 12:05AM"
        );
    }

    #[test]
    fn test_medium_format() {
        assert_eq!(
            format_datetime(datetime!(2019-05-21 21:30:00), DateFormat::Medium),
            "Tue 05, 21, 2019 9:30PM"
        );
        assert_eq!(
            format_datetime(datetime!(2035-04-08 08:00:00), DateFormat::default()),
            "Sun 04, 08, 2035 8:00AM"
        );
    }

    #[test]
    fn test_input_datetime() {
        assert_eq!(
            input_datetime(datetime!(2035-04-08 20:00:59)),
            "2035-04-08T20:00"
        );
    }
}
