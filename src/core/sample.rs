use chrono::NaiveDate;
use rand::Rng;
use tracing::trace;

use crate::core::dates::{add_days, generate_date_range};
use crate::core::DataPoint;

/// Days after the start date covered by a synthetic dataset.
pub const SAMPLE_SPAN_DAYS: i64 = 55;
/// Number of points in a full synthetic dataset.
pub const SAMPLE_POINT_COUNT: usize = SAMPLE_SPAN_DAYS as usize + 1;
pub const SAMPLE_VALUE_MIN: u32 = 1;
pub const SAMPLE_VALUE_MAX: u32 = 100;

/// Draws one synthetic value, a whole number in
/// `SAMPLE_VALUE_MIN..=SAMPLE_VALUE_MAX`.
pub fn sample_value<R: Rng + ?Sized>(rng: &mut R) -> f64 {
    f64::from(rng.gen_range(SAMPLE_VALUE_MIN..=SAMPLE_VALUE_MAX))
}

/// Builds one point per calendar day in `[start, start + SAMPLE_SPAN_DAYS]`.
///
/// Points come out in chronological order. A window that would run past the
/// last representable date is cut short there.
pub fn populate_sample_data<R: Rng + ?Sized>(start: NaiveDate, rng: &mut R) -> Vec<DataPoint> {
    let end = add_days(start, SAMPLE_SPAN_DAYS).unwrap_or(NaiveDate::MAX);
    let points: Vec<DataPoint> = generate_date_range(start, end)
        .map(|date| DataPoint::new(date, sample_value(rng)))
        .collect();
    trace!(%start, %end, count = points.len(), "populated sample data");
    points
}
