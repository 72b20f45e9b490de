//! Date and time layouts.
//!
//! Layouts are plain data, tried in order; the first exact parse wins.
//! Ambiguous numeric dates such as `03/04/2024` are therefore resolved by
//! list position (day-first), never by locale.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime, Timelike};

/// Order of the three numeric fields in a date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldOrder {
    /// `15/01/2024`
    DayMonthYear,
    /// `01/15/2024`
    MonthDayYear,
    /// `2024/01/15`
    YearMonthDay,
}

/// Number of digits the year field must have.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum YearWidth {
    /// Exactly four digits.
    Full,
    /// Exactly two digits, expanded with the `%y` pivot (00-69 are 20xx).
    Short,
}

impl YearWidth {
    fn digits(self) -> usize {
        match self {
            YearWidth::Full => 4,
            YearWidth::Short => 2,
        }
    }
}

/// One supported date layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateLayout {
    /// chrono format string.
    pub format: &'static str,
    /// Field separator.
    pub separator: char,
    /// Field order.
    pub order: FieldOrder,
    /// Year field width.
    pub year: YearWidth,
}

impl DateLayout {
    const fn new(
        format: &'static str,
        separator: char,
        order: FieldOrder,
        year: YearWidth,
    ) -> Self {
        Self {
            format,
            separator,
            order,
            year,
        }
    }

    /// Parses `input` if it has exactly this layout's shape.
    ///
    /// chrono accepts a short year for `%Y`, so field widths are checked
    /// before handing the string over.
    pub fn parse(&self, input: &str) -> Option<NaiveDate> {
        let fields: Vec<&str> = input.split(self.separator).collect();
        if fields.len() != 3 {
            return None;
        }

        let year_index = match self.order {
            FieldOrder::YearMonthDay => 0,
            FieldOrder::DayMonthYear | FieldOrder::MonthDayYear => 2,
        };

        for (i, field) in fields.iter().enumerate() {
            if field.is_empty() || !field.bytes().all(|b| b.is_ascii_digit()) {
                return None;
            }
            let width_ok = if i == year_index {
                field.len() == self.year.digits()
            } else {
                field.len() <= 2
            };
            if !width_ok {
                return None;
            }
        }

        NaiveDate::parse_from_str(input, self.format).ok()
    }
}

/// Supported date layouts, in precedence order.
pub const DATE_LAYOUTS: &[DateLayout] = &[
    DateLayout::new("%d/%m/%Y", '/', FieldOrder::DayMonthYear, YearWidth::Full),
    DateLayout::new("%m/%d/%Y", '/', FieldOrder::MonthDayYear, YearWidth::Full),
    DateLayout::new("%d-%m-%Y", '-', FieldOrder::DayMonthYear, YearWidth::Full),
    DateLayout::new("%m-%d-%Y", '-', FieldOrder::MonthDayYear, YearWidth::Full),
    DateLayout::new("%d/%m/%y", '/', FieldOrder::DayMonthYear, YearWidth::Short),
    DateLayout::new("%m/%d/%y", '/', FieldOrder::MonthDayYear, YearWidth::Short),
    DateLayout::new("%Y/%m/%d", '/', FieldOrder::YearMonthDay, YearWidth::Full),
    DateLayout::new("%Y-%m-%d", '-', FieldOrder::YearMonthDay, YearWidth::Full),
];

/// Supported time layouts, in precedence order.
pub const TIME_FORMATS: &[&str] = &[
    "%I:%M:%S %p", // 12-hour with seconds
    "%I:%M %p",    // 12-hour
    "%H:%M:%S",    // 24-hour with seconds
    "%H:%M",       // 24-hour
];

/// Parses a header date with the first matching layout.
pub fn parse_date(input: &str) -> Option<NaiveDate> {
    let input = input.trim();
    DATE_LAYOUTS.iter().find_map(|layout| layout.parse(input))
}

/// Parses a header time with the first matching layout.
pub fn parse_time(input: &str) -> Option<NaiveTime> {
    let normalized = normalize_meridiem(input);
    TIME_FORMATS
        .iter()
        .find_map(|format| NaiveTime::parse_from_str(&normalized, format).ok())
        // chrono reads second 60 as a leap second; clocks in exports never show it.
        .filter(|time| time.nanosecond() < 1_000_000_000)
}

/// Combines header date and time. `None` if either fails every layout.
pub fn parse_timestamp(date_str: &str, time_str: &str) -> Option<NaiveDateTime> {
    let date = parse_date(date_str)?;
    let time = parse_time(time_str)?;
    Some(date.and_time(time))
}

/// Rewrites the gap before AM/PM to one ASCII space.
///
/// iOS exports use U+202F here; some locales omit the gap entirely.
fn normalize_meridiem(input: &str) -> String {
    let trimmed = input.trim();
    match trimmed.find(|c: char| c.is_ascii_alphabetic()) {
        Some(idx) => format!("{} {}", trimmed[..idx].trim_end(), &trimmed[idx..]),
        None => trimmed.to_string(),
    }
}
