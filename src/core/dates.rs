use std::iter::FusedIterator;

use chrono::{DateTime, Days, NaiveDate, NaiveTime};

/// Shifts a calendar date by whole days.
///
/// Works on calendar days rather than fixed 24h spans, so month and year
/// boundaries roll over correctly and daylight-saving transitions cannot skew
/// the result. Returns `None` when the result leaves chrono's date range.
#[must_use]
pub fn add_days(date: NaiveDate, days: i64) -> Option<NaiveDate> {
    if days >= 0 {
        date.checked_add_days(Days::new(days.unsigned_abs()))
    } else {
        date.checked_sub_days(Days::new(days.unsigned_abs()))
    }
}

/// Seconds since the Unix epoch at UTC midnight of `date`.
#[must_use]
pub fn date_to_unix_seconds(date: NaiveDate) -> f64 {
    date.and_time(NaiveTime::MIN).and_utc().timestamp() as f64
}

/// Calendar date containing the UTC instant `seconds`.
#[must_use]
pub fn unix_seconds_to_date(seconds: f64) -> Option<NaiveDate> {
    if !seconds.is_finite() {
        return None;
    }
    DateTime::from_timestamp(seconds.floor() as i64, 0).map(|instant| instant.date_naive())
}

/// Inclusive, one-day-step walk from a start date to an end date.
///
/// The iterator is lazy and finite. Once exhausted it stays exhausted.
#[derive(Debug, Clone)]
pub struct DateRange {
    next: Option<NaiveDate>,
    end: NaiveDate,
}

impl DateRange {
    /// An empty range results when `start > end`.
    #[must_use]
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        Self {
            next: (start <= end).then_some(start),
            end,
        }
    }

    fn remaining(&self) -> usize {
        self.next.map_or(0, |next| {
            usize::try_from((self.end - next).num_days() + 1).unwrap_or(0)
        })
    }
}

impl Iterator for DateRange {
    type Item = NaiveDate;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next?;
        self.next = add_days(current, 1).filter(|date| *date <= self.end);
        Some(current)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.remaining();
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for DateRange {}

impl FusedIterator for DateRange {}

/// Lazily yields every calendar day in `[start_date, end_date]`.
#[must_use]
pub fn generate_date_range(start_date: NaiveDate, end_date: NaiveDate) -> DateRange {
    DateRange::new(start_date, end_date)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).expect("valid date")
    }

    #[test]
    fn add_days_crosses_leap_day() {
        assert_eq!(add_days(date(2024, 2, 28), 1), Some(date(2024, 2, 29)));
        assert_eq!(add_days(date(2024, 3, 1), -1), Some(date(2024, 2, 29)));
        assert_eq!(add_days(date(2023, 2, 28), 1), Some(date(2023, 3, 1)));
    }

    #[test]
    fn add_days_reports_overflow() {
        assert_eq!(add_days(NaiveDate::MAX, 1), None);
        assert_eq!(add_days(NaiveDate::MIN, -1), None);
    }

    #[test]
    fn unix_seconds_round_trip_at_midnight() {
        let day = date(2026, 3, 29);
        let seconds = date_to_unix_seconds(day);
        assert_eq!(seconds % 86_400.0, 0.0);
        assert_eq!(unix_seconds_to_date(seconds), Some(day));
        assert_eq!(unix_seconds_to_date(f64::NAN), None);
    }

    #[test]
    fn range_ending_at_max_date_terminates() {
        let start = add_days(NaiveDate::MAX, -2).expect("in range");
        assert_eq!(generate_date_range(start, NaiveDate::MAX).count(), 3);
    }
}
