use chrono::{Datelike, Months, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

use crate::core::dates::{date_to_unix_seconds, generate_date_range, unix_seconds_to_date};
use crate::core::scale::{MAX_TICK_COUNT, nice_step};
use crate::core::{DataPoint, LinearScale};
use crate::error::{ChartError, ChartResult};

const SECONDS_PER_DAY: f64 = 86_400.0;

/// Calendar spacing between time-axis ticks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TickInterval {
    /// Every n-th day of the month, counted from the 1st.
    Days(u32),
    /// Sundays.
    Weeks,
    /// Month starts whose zero-based month index is a multiple of n.
    Months(u32),
    /// January 1st of years that are a multiple of n.
    Years(i32),
}

impl TickInterval {
    /// Nominal length used when comparing intervals against a target spacing.
    #[must_use]
    pub fn approximate_seconds(self) -> f64 {
        match self {
            Self::Days(days) => f64::from(days) * SECONDS_PER_DAY,
            Self::Weeks => 7.0 * SECONDS_PER_DAY,
            Self::Months(months) => f64::from(months) * 30.0 * SECONDS_PER_DAY,
            Self::Years(years) => f64::from(years) * 365.0 * SECONDS_PER_DAY,
        }
    }
}

const CANDIDATE_INTERVALS: [TickInterval; 6] = [
    TickInterval::Days(1),
    TickInterval::Days(2),
    TickInterval::Weeks,
    TickInterval::Months(1),
    TickInterval::Months(3),
    TickInterval::Years(1),
];

/// Temporal scale over calendar dates.
///
/// Dates are positioned at their UTC midnight, so one day is always the same
/// horizontal distance regardless of local daylight-saving rules.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TimeScale {
    domain_start: NaiveDate,
    domain_end: NaiveDate,
    linear: LinearScale,
}

impl TimeScale {
    pub fn new(domain_start: NaiveDate, domain_end: NaiveDate, range: (f64, f64)) -> ChartResult<Self> {
        if domain_start > domain_end {
            return Err(ChartError::InvalidData(format!(
                "time domain start {domain_start} is after end {domain_end}"
            )));
        }

        let linear = LinearScale::new(
            (
                date_to_unix_seconds(domain_start),
                date_to_unix_seconds(domain_end),
            ),
            range,
        )?;
        Ok(Self {
            domain_start,
            domain_end,
            linear,
        })
    }

    /// Fits the domain to the earliest and latest dates in `points`.
    ///
    /// Without points the domain collapses onto the Unix epoch.
    pub fn from_points(points: &[DataPoint], range: (f64, f64)) -> ChartResult<Self> {
        let start = points.iter().map(|point| point.x).min();
        let end = points.iter().map(|point| point.x).max();
        match (start, end) {
            (Some(start), Some(end)) => Self::new(start, end, range),
            _ => Self::new(NaiveDate::default(), NaiveDate::default(), range),
        }
    }

    #[must_use]
    pub fn domain(self) -> (NaiveDate, NaiveDate) {
        (self.domain_start, self.domain_end)
    }

    #[must_use]
    pub fn range(self) -> (f64, f64) {
        self.linear.range()
    }

    #[must_use]
    pub fn is_degenerate(self) -> bool {
        self.domain_start == self.domain_end
    }

    pub fn map(self, date: NaiveDate) -> ChartResult<f64> {
        self.linear.map(date_to_unix_seconds(date))
    }

    /// Date under `pixel`, truncated to the containing day.
    pub fn invert(self, pixel: f64) -> ChartResult<NaiveDate> {
        let seconds = self.linear.invert(pixel)?;
        unix_seconds_to_date(seconds).ok_or_else(|| {
            ChartError::InvalidData(format!("pixel {pixel} maps outside the calendar"))
        })
    }

    /// Picks the calendar interval whose spacing is closest to an even split
    /// of the domain into `tick_count` parts.
    #[must_use]
    pub fn tick_interval(self, tick_count: usize) -> TickInterval {
        let span = date_to_unix_seconds(self.domain_end) - date_to_unix_seconds(self.domain_start);
        if tick_count == 0 || span <= 0.0 {
            return TickInterval::Days(1);
        }

        let target = span / tick_count.min(MAX_TICK_COUNT) as f64;
        let index = CANDIDATE_INTERVALS
            .partition_point(|interval| interval.approximate_seconds() <= target);
        if index == CANDIDATE_INTERVALS.len() {
            let years = span / TickInterval::Years(1).approximate_seconds();
            let step = nice_step(years, tick_count).unwrap_or(1.0).round().max(1.0);
            return TickInterval::Years(step as i32);
        }
        if index == 0 {
            return CANDIDATE_INTERVALS[0];
        }

        let below = CANDIDATE_INTERVALS[index - 1];
        let above = CANDIDATE_INTERVALS[index];
        if target / below.approximate_seconds() < above.approximate_seconds() / target {
            below
        } else {
            above
        }
    }

    /// Calendar-aligned tick dates inside the domain, ascending.
    #[must_use]
    pub fn ticks(self, tick_count: usize) -> Vec<NaiveDate> {
        if tick_count == 0 {
            return Vec::new();
        }
        if self.is_degenerate() {
            return vec![self.domain_start];
        }
        self.ticks_every(self.tick_interval(tick_count))
    }

    #[must_use]
    pub fn ticks_every(self, interval: TickInterval) -> Vec<NaiveDate> {
        let (start, end) = (self.domain_start, self.domain_end);
        match interval {
            TickInterval::Days(days) => {
                let days = days.max(1);
                generate_date_range(start, end)
                    .filter(|date| date.day0() % days == 0)
                    .collect()
            }
            TickInterval::Weeks => generate_date_range(start, end)
                .filter(|date| date.weekday() == Weekday::Sun)
                .collect(),
            TickInterval::Months(months) => {
                let months = months.max(1);
                let mut ticks = Vec::new();
                let mut cursor = first_month_start_on_or_after(start);
                while let Some(month_start) = cursor.filter(|date| *date <= end) {
                    if month_start.month0() % months == 0 {
                        ticks.push(month_start);
                    }
                    cursor = month_start.checked_add_months(Months::new(1));
                }
                ticks
            }
            TickInterval::Years(years) => {
                let years = years.max(1);
                (start.year()..=end.year())
                    .filter(|year| year.rem_euclid(years) == 0)
                    .filter_map(|year| NaiveDate::from_ymd_opt(year, 1, 1))
                    .filter(|date| *date >= start && *date <= end)
                    .collect()
            }
        }
    }
}

/// Label for a time-axis tick; coarser boundaries get coarser labels.
///
/// `Mon 05` for ordinary days, `Oct 04` for Sundays, `March` for month
/// starts and `2027` for year starts.
#[must_use]
pub fn format_time_tick(date: NaiveDate) -> String {
    let pattern = if date.day() != 1 {
        if date.weekday() != Weekday::Sun {
            "%a %d"
        } else {
            "%b %d"
        }
    } else if date.month() != 1 {
        "%B"
    } else {
        "%Y"
    };
    date.format(pattern).to_string()
}

fn first_month_start_on_or_after(date: NaiveDate) -> Option<NaiveDate> {
    let month_start = date.with_day(1)?;
    if month_start == date {
        Some(month_start)
    } else {
        month_start.checked_add_months(Months::new(1))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).expect("valid date")
    }

    #[test]
    fn reversed_domain_is_rejected() {
        assert!(TimeScale::new(date(2026, 2, 1), date(2026, 1, 1), (0.0, 10.0)).is_err());
    }

    #[test]
    fn month_start_rounding() {
        assert_eq!(
            first_month_start_on_or_after(date(2026, 1, 1)),
            Some(date(2026, 1, 1))
        );
        assert_eq!(
            first_month_start_on_or_after(date(2026, 12, 2)),
            Some(date(2027, 1, 1))
        );
    }
}
