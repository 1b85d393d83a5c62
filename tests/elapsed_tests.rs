// Host-side tests for the calendar difference and per-field change detection.

use chrono::{NaiveDate, NaiveDateTime};
use valentine_web::core::{calendar_diff, ElapsedFormatter, TimeField, TimeFields};

fn at(y: i32, mo: u32, d: u32, h: u32, mi: u32, s: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(y, mo, d)
        .unwrap()
        .and_hms_opt(h, mi, s)
        .unwrap()
}

fn start_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 5, 2).unwrap()
}

#[test]
fn two_whole_months() {
    let fields = calendar_diff(at(2024, 5, 2, 0, 0, 0), at(2024, 7, 2, 0, 0, 0));
    assert_eq!(
        fields,
        TimeFields {
            years: 0,
            months: 2,
            days: 0,
            hours: 0,
            minutes: 0,
            seconds: 0,
        }
    );
}

#[test]
fn every_field_is_a_remainder() {
    let fields = calendar_diff(at(2024, 5, 2, 0, 0, 0), at(2025, 8, 5, 13, 14, 15));
    assert_eq!(
        fields,
        TimeFields {
            years: 1,
            months: 3,
            days: 3,
            hours: 13,
            minutes: 14,
            seconds: 15,
        }
    );
}

#[test]
fn month_arithmetic_clamps_to_month_end() {
    // Jan 31 + 1 month lands on Feb 29 (leap year), one day before Mar 1.
    let fields = calendar_diff(at(2024, 1, 31, 0, 0, 0), at(2024, 3, 1, 0, 0, 0));
    assert_eq!(fields.months, 1);
    assert_eq!(fields.days, 1);
}

#[test]
fn partial_month_is_not_counted() {
    let fields = calendar_diff(at(2024, 5, 2, 10, 0, 0), at(2024, 7, 2, 9, 0, 0));
    assert_eq!(fields.months, 1);
    assert_eq!(fields.days, 29);
    assert_eq!(fields.hours, 23);
}

#[test]
fn now_before_start_is_zero() {
    let fields = calendar_diff(at(2024, 5, 2, 0, 0, 0), at(2024, 4, 1, 0, 0, 0));
    assert_eq!(fields, TimeFields::default());
}

#[test]
fn first_recompute_reports_every_field() {
    let mut f = ElapsedFormatter::new(start_date());
    let changes = f.recompute(at(2024, 7, 2, 0, 0, 0));
    let fields: Vec<TimeField> = changes.iter().map(|(f, _)| *f).collect();
    assert_eq!(fields, TimeField::ALL.to_vec());
    assert_eq!(changes[1], (TimeField::Months, 2));
}

#[test]
fn identical_now_yields_no_changes() {
    let mut f = ElapsedFormatter::new(start_date());
    let now = at(2025, 2, 14, 20, 30, 0);
    assert_eq!(f.recompute(now).len(), 6);
    assert!(f.recompute(now).is_empty());
}

#[test]
fn only_changed_fields_are_reported() {
    let mut f = ElapsedFormatter::new(start_date());
    f.recompute(at(2025, 2, 14, 20, 30, 10));
    let changes = f.recompute(at(2025, 2, 14, 20, 30, 11));
    assert_eq!(changes.as_slice(), &[(TimeField::Seconds, 11)]);

    let changes = f.recompute(at(2025, 2, 14, 20, 31, 0));
    assert_eq!(
        changes.as_slice(),
        &[(TimeField::Minutes, 31), (TimeField::Seconds, 0)]
    );
}

#[test]
fn counts_from_local_midnight() {
    let f = ElapsedFormatter::new(start_date());
    assert_eq!(f.start(), at(2024, 5, 2, 0, 0, 0));
    assert!(f.current().is_none());
}

#[test]
fn field_ids_and_labels_match_page_markup() {
    let ids: Vec<&str> = TimeField::ALL.iter().map(|f| f.id()).collect();
    assert_eq!(ids, ["years", "months", "days", "hours", "minutes", "seconds"]);
    assert_eq!(TimeField::Hours.label(), "Hours");
    assert_eq!(TimeField::Seconds.index(), 5);
}
