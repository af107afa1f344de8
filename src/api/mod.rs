mod options;
mod renderer;
mod snapshot;

pub use options::{ChartOptions, DEFAULT_TICK_COUNT};
pub use renderer::ChartRenderer;
pub use snapshot::ChartSnapshot;
