use chrono::NaiveDate;
use line_chart_rs::core::{LinearScale, add_days, populate_sample_data};
use proptest::prelude::*;
use rand::SeedableRng;
use rand::rngs::StdRng;

fn epoch_plus(days: i64) -> NaiveDate {
    add_days(NaiveDate::from_ymd_opt(2000, 1, 1).expect("valid date"), days).expect("in range")
}

proptest! {
    #[test]
    fn generated_dataset_keeps_length_order_and_bounds(
        offset in 0i64..30_000,
        seed in any::<u64>()
    ) {
        let start = epoch_plus(offset);
        let points = populate_sample_data(start, &mut StdRng::seed_from_u64(seed));

        prop_assert_eq!(points.len(), 56);
        prop_assert_eq!(points[0].x, start);
        for pair in points.windows(2) {
            prop_assert_eq!(add_days(pair[0].x, 1), Some(pair[1].x));
        }
        for point in &points {
            let value = point.value().expect("value present");
            prop_assert!((1.0..=100.0).contains(&value));
            prop_assert_eq!(value.fract(), 0.0);
        }
    }

    #[test]
    fn linear_ticks_are_ascending_and_inside_domain(
        low in -10_000.0f64..10_000.0,
        span in 0.001f64..50_000.0,
        count in 1usize..40
    ) {
        let high = low + span;
        let scale = LinearScale::new((low, high), (0.0, 500.0)).expect("scale");
        let ticks = scale.ticks(count);
        let tolerance = 1e-9 * (span + low.abs() + high.abs());

        for pair in ticks.windows(2) {
            prop_assert!(pair[0] < pair[1]);
        }
        for tick in &ticks {
            prop_assert!(*tick >= low - tolerance);
            prop_assert!(*tick <= high + tolerance);
        }
    }
}
