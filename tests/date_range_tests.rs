use chrono::{Datelike, NaiveDate};
use line_chart_rs::ChartRenderer;
use line_chart_rs::core::{add_days, generate_date_range};
use line_chart_rs::render::SvgContainer;

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid date")
}

#[test]
fn add_days_rolls_over_month_and_year() {
    assert_eq!(add_days(date(2026, 1, 31), 1), Some(date(2026, 2, 1)));
    assert_eq!(add_days(date(2026, 12, 31), 1), Some(date(2027, 1, 1)));
    assert_eq!(add_days(date(2026, 12, 20), 55), Some(date(2027, 2, 13)));
    assert_eq!(add_days(date(2027, 1, 1), -1), Some(date(2026, 12, 31)));
}

#[test]
fn add_days_is_pure() {
    let original = date(2026, 3, 28);
    let shifted = add_days(original, 2).expect("in range");
    assert_eq!(original, date(2026, 3, 28));
    assert_eq!(shifted, date(2026, 3, 30));
}

#[test]
fn range_is_inclusive_of_both_endpoints() {
    let days: Vec<_> = generate_date_range(date(2026, 12, 30), date(2027, 1, 2)).collect();
    assert_eq!(
        days,
        vec![
            date(2026, 12, 30),
            date(2026, 12, 31),
            date(2027, 1, 1),
            date(2027, 1, 2),
        ]
    );
}

#[test]
fn range_reports_exact_length() {
    let mut range = generate_date_range(date(2026, 12, 20), date(2027, 2, 13));
    assert_eq!(range.len(), 56);
    range.next();
    assert_eq!(range.len(), 55);
}

#[test]
fn reversed_range_is_empty() {
    let mut range = generate_date_range(date(2026, 5, 2), date(2026, 5, 1));
    assert_eq!(range.len(), 0);
    assert_eq!(range.next(), None);
}

#[test]
fn single_day_range_yields_once_and_stays_exhausted() {
    let mut range = generate_date_range(date(2026, 5, 1), date(2026, 5, 1));
    assert_eq!(range.next(), Some(date(2026, 5, 1)));
    assert_eq!(range.next(), None);
    assert_eq!(range.next(), None);
}

#[test]
fn range_is_lazy() {
    let first: Vec<_> = generate_date_range(NaiveDate::MIN, NaiveDate::MAX)
        .take(3)
        .collect();
    assert_eq!(first.len(), 3);
    assert_eq!(first[0], NaiveDate::MIN);
}

#[test]
fn range_steps_by_calendar_day_through_leap_february() {
    let days: Vec<_> = generate_date_range(date(2028, 2, 27), date(2028, 3, 1)).collect();
    let day_numbers: Vec<_> = days.iter().map(|d| d.day()).collect();
    assert_eq!(day_numbers, vec![27, 28, 29, 1]);
}

#[test]
fn renderer_exposes_date_range_helper() {
    let count =
        ChartRenderer::<SvgContainer>::generate_date_range(date(2026, 1, 1), date(2026, 1, 31))
            .count();
    assert_eq!(count, 31);
}
