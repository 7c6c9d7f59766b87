// Start of file: /src/dates/spec.rs

/*
    * Explicit configuration structs for the template date helper.
    * Callers pass these at the call site instead of relying on
    * ambient defaults; the documented defaults live on `Default`.
*/

use serde::Serialize;

/// Rendering style for the day and year fields.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NumberStyle {
    /// Plain numeral, no padding: `5`, `2022`.
    Numeric,
    /// Zero-padded to two digits: `05`, `22`.
    TwoDigit,
}

/// Rendering style for the month field.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MonthStyle {
    /// Month number, no padding: `5`.
    Numeric,
    /// Month number, zero-padded: `05`.
    TwoDigit,
    /// Full English month name: `May`.
    Long,
    /// Abbreviated month name: `Sep`.
    Short,
}

/// Rendering style for the weekday field.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TextStyle {
    /// Full weekday name: `Thursday`.
    Long,
    /// Abbreviated weekday name: `Thu`.
    Short,
}

/// Which calendar fields to render, and how.
///
/// Only the requested fields appear in the output. British English
/// conventions apply throughout: day-month-year ordering, and the
/// all-numeric combination renders in slash form (`05/05/2022`).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DateFormatSpec {
    pub weekday: Option<TextStyle>,
    pub day: Option<NumberStyle>,
    pub month: Option<MonthStyle>,
    pub year: Option<NumberStyle>,
}

impl Default for DateFormatSpec {
    /// The default spec renders dates like `5 May 2022`.
    fn default() -> Self {
        Self {
            weekday: None,
            day: Some(NumberStyle::Numeric),
            month: Some(MonthStyle::Long),
            year: Some(NumberStyle::Numeric),
        }
    }
}

impl DateFormatSpec {
    /// Just the day of the month as a plain numeral.
    pub fn day_only() -> Self {
        Self { weekday: None, day: Some(NumberStyle::Numeric), month: None, year: None }
    }

    /// Just the month as a plain numeral.
    pub fn month_only() -> Self {
        Self { weekday: None, day: None, month: Some(MonthStyle::Numeric), year: None }
    }

    /// Just the year as a plain numeral.
    pub fn year_only() -> Self {
        Self { weekday: None, day: None, month: None, year: Some(NumberStyle::Numeric) }
    }
}

/// Calendar offsets applied to the reference date before formatting.
///
/// Absent fields are skipped entirely, which matters for the year field:
/// a present year offset re-anchors the result to the unadjusted reference
/// year (see `apply_diff`), so `years(0)` and an absent year are not the
/// same thing once a day or month offset has rolled the year over.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DateDiffSpec {
    pub year: Option<i32>,
    pub month: Option<i32>,
    pub day: Option<i32>,
}

impl Default for DateDiffSpec {
    /// All three offsets present and zero.
    fn default() -> Self {
        Self { year: Some(0), month: Some(0), day: Some(0) }
    }
}

impl DateDiffSpec {
    /// Offset by whole days only; months and years roll over naturally.
    pub fn days(days: i32) -> Self {
        Self { year: None, month: None, day: Some(days) }
    }

    /// Offset by whole months only; the year rolls over naturally.
    pub fn months(months: i32) -> Self {
        Self { year: None, month: Some(months), day: None }
    }

    /// Offset by whole years only.
    pub fn years(years: i32) -> Self {
        Self { year: Some(years), month: None, day: None }
    }
}

/// Pre-formatted day/month/year strings, used to pre-populate date fields.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct DateParts {
    pub day: String,
    pub month: String,
    pub year: String,
}

// End of file: /src/dates/spec.rs
