pub mod dates;
pub mod line_path;
pub mod sample;
pub mod scale;
pub mod time_scale;
pub mod types;

pub use dates::{DateRange, add_days, generate_date_range};
pub use line_path::{Interpolation, PathPoint, line_path, parse_interpolation};
pub use sample::{SAMPLE_POINT_COUNT, SAMPLE_SPAN_DAYS, populate_sample_data};
pub use scale::{LinearScale, MAX_TICK_COUNT, format_linear_tick};
pub use time_scale::{TickInterval, TimeScale, format_time_tick};
pub use types::{BoundingBox, DataPoint, Margins, PlotArea, Viewport};
