//! tests/date_format.rs
//! Calendar arithmetic and en-GB rendering of the template date helper,
//! pinned to fixed reference dates.

use chrono::NaiveDate;
use sketchkit::dates::{
    DateDiffSpec, DateFormatSpec, DateFormatter, DateParts, MonthStyle, NumberStyle, TextStyle,
};

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid test date")
}

#[test]
fn default_spec_renders_long_british_dates() {
    let formatter = DateFormatter::with_reference(date(2022, 5, 5));

    assert_eq!(
        formatter.format(&DateFormatSpec::default(), &DateDiffSpec::default()),
        "5 May 2022"
    );
}

#[test]
fn all_numeric_spec_renders_slash_form() {
    let formatter = DateFormatter::with_reference(date(2022, 5, 5));
    let spec = DateFormatSpec {
        weekday: None,
        day: Some(NumberStyle::Numeric),
        month: Some(MonthStyle::Numeric),
        year: Some(NumberStyle::Numeric),
    };

    assert_eq!(formatter.format(&spec, &DateDiffSpec::default()), "05/05/2022");
}

#[test]
fn single_numeric_fields_render_unpadded() {
    let formatter = DateFormatter::with_reference(date(2022, 5, 5));

    assert_eq!(formatter.format(&DateFormatSpec::day_only(), &DateDiffSpec::default()), "5");
    assert_eq!(formatter.format(&DateFormatSpec::month_only(), &DateDiffSpec::default()), "5");
    assert_eq!(formatter.format(&DateFormatSpec::year_only(), &DateDiffSpec::default()), "2022");
}

#[test]
fn two_digit_styles_always_pad() {
    let formatter = DateFormatter::with_reference(date(2022, 5, 5));
    let spec = DateFormatSpec {
        weekday: None,
        day: Some(NumberStyle::TwoDigit),
        month: None,
        year: Some(NumberStyle::TwoDigit),
    };

    assert_eq!(formatter.format(&spec, &DateDiffSpec::default()), "05 22");
}

#[test]
fn weekday_prefixes_the_rest_of_the_date() {
    let formatter = DateFormatter::with_reference(date(2022, 7, 5));
    let spec = DateFormatSpec {
        weekday: Some(TextStyle::Long),
        ..DateFormatSpec::default()
    };

    assert_eq!(
        formatter.format(&spec, &DateDiffSpec::default()),
        "Tuesday, 5 July 2022"
    );
}

#[test]
fn short_styles_abbreviate() {
    let formatter = DateFormatter::with_reference(date(2022, 9, 1));
    let spec = DateFormatSpec {
        weekday: Some(TextStyle::Short),
        day: Some(NumberStyle::Numeric),
        month: Some(MonthStyle::Short),
        year: None,
    };

    assert_eq!(formatter.format(&spec, &DateDiffSpec::default()), "Thu, 1 Sep");
}

#[test]
fn day_offset_rolls_into_the_previous_month() {
    let formatter = DateFormatter::with_reference(date(2022, 3, 1));

    assert_eq!(
        formatter.format(&DateFormatSpec::default(), &DateDiffSpec::days(-1)),
        "28 February 2022"
    );
}

#[test]
fn day_offset_respects_leap_years() {
    let formatter = DateFormatter::with_reference(date(2024, 3, 1));

    assert_eq!(
        formatter.format(&DateFormatSpec::default(), &DateDiffSpec::days(-1)),
        "29 February 2024"
    );
}

#[test]
fn day_offset_rolls_into_the_previous_year() {
    let formatter = DateFormatter::with_reference(date(2022, 1, 1));

    let yesterday: DateParts = formatter.parts(&DateDiffSpec::days(-1));
    assert_eq!(yesterday.day, "31");
    assert_eq!(yesterday.month, "12");
    assert_eq!(yesterday.year, "2021");
}

#[test]
fn month_offset_rolls_into_the_next_year() {
    let formatter = DateFormatter::with_reference(date(2022, 12, 15));

    assert_eq!(
        formatter.format(&DateFormatSpec::default(), &DateDiffSpec::months(1)),
        "15 January 2023"
    );
}

#[test]
fn month_offset_clamps_to_the_target_months_length() {
    let formatter = DateFormatter::with_reference(date(2022, 1, 31));

    assert_eq!(
        formatter.format(&DateFormatSpec::default(), &DateDiffSpec::months(1)),
        "28 February 2022"
    );
}

// Known quirk, kept on purpose: the year offset starts from the reference
// date's year, not from the date the day/month offsets produced. With an
// explicit zero year offset, yesterday-of-new-year snaps back to the
// reference year instead of staying in December of the previous one.
#[test]
fn year_offset_is_anchored_to_the_unadjusted_year() {
    let formatter = DateFormatter::with_reference(date(2022, 1, 1));
    let diff = DateDiffSpec {
        year: Some(0),
        month: None,
        day: Some(-1),
    };

    assert_eq!(
        formatter.format(&DateFormatSpec::default(), &diff),
        "31 December 2022"
    );
}

#[test]
fn year_offset_from_a_leap_day_overflows_to_march() {
    let formatter = DateFormatter::with_reference(date(2024, 2, 29));

    assert_eq!(
        formatter.format(&DateFormatSpec::default(), &DateDiffSpec::years(1)),
        "1 March 2025"
    );
}

#[test]
fn parts_are_plain_numerals_for_the_reference_date() {
    let formatter = DateFormatter::with_reference(date(2022, 5, 5));

    let today: DateParts = formatter.parts(&DateDiffSpec::default());
    assert_eq!(today.day, "5");
    assert_eq!(today.month, "5");
    assert_eq!(today.year, "2022");
}
