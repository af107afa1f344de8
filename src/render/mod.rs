mod axis;
mod container;
mod element;
mod frame;

pub use axis::{
    AXIS_INNER_TICK_SIZE, AXIS_OUTER_TICK_SIZE, AXIS_TICK_PADDING, Axis, AxisOrientation,
    AxisTick,
};
pub use container::SvgContainer;
pub use element::SvgElement;
pub use frame::{
    CHART_ROOT_CLASS, ChartLayout, LINE_CLASS, LineChartFrame, LineStyle, X_AXIS_CLASS,
    Y_AXIS_CLASS,
};

use crate::core::BoundingBox;
use crate::error::ChartResult;

/// Contract implemented by any element a chart can be mounted into.
///
/// The chart owns its handle, so every instance draws into its own
/// container instead of a page-wide selector.
pub trait ChartSurface {
    /// Identifier used in diagnostics.
    fn id(&self) -> &str;

    /// False once the host element is gone; drawing then fails.
    fn is_attached(&self) -> bool;

    /// Current layout box, if the host knows one.
    fn bounding_box(&self) -> Option<BoundingBox>;

    fn append_child(&mut self, element: SvgElement) -> ChartResult<()>;

    /// Removes direct children tagged with `class`; returns how many went.
    fn remove_children_with_class(&mut self, class: &str) -> usize;
}
