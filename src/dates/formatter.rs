// Start of file: /src/dates/formatter.rs

/*
    * The date helper attached to every page's render context.
    *
    * A formatter captures the wall-clock date once per request; every
    * format call applies a caller-supplied diff to that reference date
    * and renders the requested fields with British English conventions.
*/

use chrono::{Datelike, Local, Months, NaiveDate, TimeDelta};

use crate::dates::spec::{DateDiffSpec, DateFormatSpec, DateParts, MonthStyle, NumberStyle, TextStyle};

/// Applies the diff to `reference`, one field at a time: days first (with
/// natural month/year rollover), then months (day clamped to the target
/// month's length), then years.
///
/// The year branch is deliberately asymmetric: it re-anchors the result to
/// `reference`'s year plus the offset, not the year of the already-adjusted
/// date. A day offset that rolled into the previous December therefore
/// snaps back to the reference year when an explicit year offset is also
/// present. Callers that only offset days or months are unaffected because
/// absent fields are skipped.
pub fn apply_diff(reference: NaiveDate, diff: &DateDiffSpec) -> NaiveDate {
    let mut date: NaiveDate = reference;

    if let Some(days) = diff.day {
        date = date
            .checked_add_signed(TimeDelta::days(i64::from(days)))
            .expect("day offset left the supported calendar range");
    }

    if let Some(months) = diff.month {
        date = if months >= 0 {
            date.checked_add_months(Months::new(months as u32))
        } else {
            date.checked_sub_months(Months::new(months.unsigned_abs()))
        }
        .expect("month offset left the supported calendar range");
    }

    if let Some(years) = diff.year {
        let target: i32 = reference.year() + years;
        // 29 February mapped onto a non-leap year overflows to 1 March.
        date = date.with_year(target).unwrap_or_else(|| {
            NaiveDate::from_ymd_opt(target, 3, 1)
                .expect("year offset left the supported calendar range")
        });
    }

    date
}

/// Renders the fields requested by `spec`, day-month-year ordered.
///
/// An all-numeric spec that includes the month renders in slash form with
/// two-digit day and month (`05/05/2022`); anything else renders as
/// space-separated fields (`5 May 2022`), with a requested weekday
/// prefixed as `Thursday, 5 May 2022`. A single numeric field renders as
/// a plain unpadded numeral.
pub fn format_date(date: NaiveDate, spec: &DateFormatSpec) -> String {
    let numeric_month: bool =
        matches!(spec.month, Some(MonthStyle::Numeric) | Some(MonthStyle::TwoDigit));
    let slash_form: bool = numeric_month && (spec.day.is_some() || spec.year.is_some());

    let mut pieces: Vec<String> = Vec::new();

    if let Some(style) = spec.day {
        pieces.push(match (style, slash_form) {
            // Intl-style numeric dates always pad the day: 05/05/2022.
            (NumberStyle::Numeric, false) => date.day().to_string(),
            _ => format!("{:02}", date.day()),
        });
    }

    if let Some(style) = spec.month {
        pieces.push(match (style, slash_form) {
            (MonthStyle::Long, _) => date.format("%B").to_string(),
            (MonthStyle::Short, _) => date.format("%b").to_string(),
            (MonthStyle::Numeric, false) => date.month().to_string(),
            _ => format!("{:02}", date.month()),
        });
    }

    if let Some(style) = spec.year {
        pieces.push(match style {
            NumberStyle::Numeric => date.year().to_string(),
            NumberStyle::TwoDigit => format!("{:02}", date.year().rem_euclid(100)),
        });
    }

    let separator: &str = if slash_form { "/" } else { " " };
    let body: String = pieces.join(separator);

    match spec.weekday {
        None => body,
        Some(style) => {
            let weekday: String = match style {
                TextStyle::Long => date.format("%A").to_string(),
                TextStyle::Short => date.format("%a").to_string(),
            };

            if body.is_empty() {
                weekday
            } else {
                format!("{weekday}, {body}")
            }
        }
    }
}

/// The `date` entry of the render context.
///
/// ```
/// use chrono::NaiveDate;
/// use sketchkit::dates::{DateDiffSpec, DateFormatSpec, DateFormatter};
///
/// let reference: NaiveDate = NaiveDate::from_ymd_opt(2022, 5, 5).unwrap();
/// let date: DateFormatter = DateFormatter::with_reference(reference);
///
/// // `date.format(&Default::default(), &Default::default())` is today's
/// // date in the format 5 May 2022; a day diff of -1 is yesterday.
/// assert_eq!(date.format(&DateFormatSpec::default(), &DateDiffSpec::default()), "5 May 2022");
/// assert_eq!(date.format(&DateFormatSpec::day_only(), &DateDiffSpec::days(-1)), "4");
/// ```
#[derive(Clone, Debug)]
pub struct DateFormatter {
    reference: NaiveDate,
}

impl DateFormatter {
    /// Captures the current wall-clock date as the reference. Called once
    /// per request; nothing is cached across requests.
    pub fn for_today() -> Self {
        Self { reference: Local::now().date_naive() }
    }

    /// A formatter pinned to a fixed reference date.
    pub fn with_reference(reference: NaiveDate) -> Self {
        Self { reference }
    }

    pub fn reference(&self) -> NaiveDate {
        self.reference
    }

    pub fn format(&self, format: &DateFormatSpec, diff: &DateDiffSpec) -> String {
        format_date(apply_diff(self.reference, diff), format)
    }

    /// Day, month and year as plain numerals, each produced by its own
    /// single-field format call. Useful for pre-populating date inputs.
    pub fn parts(&self, diff: &DateDiffSpec) -> DateParts {
        DateParts {
            day: self.format(&DateFormatSpec::day_only(), diff),
            month: self.format(&DateFormatSpec::month_only(), diff),
            year: self.format(&DateFormatSpec::year_only(), diff),
        }
    }
}

// End of file: /src/dates/formatter.rs
