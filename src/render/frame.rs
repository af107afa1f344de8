use ordered_float::OrderedFloat;
use tracing::{trace, warn};

use crate::core::line_path::SvgNumber;
use crate::core::{
    DataPoint, Interpolation, LinearScale, Margins, PathPoint, PlotArea, TimeScale, Viewport,
    line_path,
};
use crate::error::ChartResult;
use crate::render::{Axis, AxisOrientation, SvgElement};

/// Class tagging the root `<svg>` of a rendered chart.
pub const CHART_ROOT_CLASS: &str = "line-chart";
pub const LINE_CLASS: &str = "line";
pub const X_AXIS_CLASS: &str = "x axis";
pub const Y_AXIS_CLASS: &str = "y axis";

const SVG_NAMESPACE: &str = "http://www.w3.org/2000/svg";

/// Canvas, margins and the drawable area between them.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChartLayout {
    pub canvas: Viewport,
    pub margins: Margins,
    pub plot: PlotArea,
}

impl ChartLayout {
    pub fn new(canvas: Viewport, margins: Margins) -> ChartResult<Self> {
        Ok(Self {
            canvas,
            margins,
            plot: PlotArea::from_canvas(canvas, margins)?,
        })
    }
}

/// Per-draw knobs taken from the renderer state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineStyle {
    pub x_tick_count: usize,
    pub y_tick_count: usize,
    pub interpolation: Interpolation,
}

/// Fully resolved scene for one draw pass.
///
/// Building the frame does all fallible work up front, so turning it into
/// SVG and handing it to a surface cannot fail halfway.
#[derive(Debug, Clone, PartialEq)]
pub struct LineChartFrame {
    pub layout: ChartLayout,
    pub time_scale: TimeScale,
    pub value_scale: LinearScale,
    pub x_axis: Axis,
    pub y_axis: Axis,
    pub path: String,
}

impl LineChartFrame {
    pub fn build(points: &[DataPoint], layout: ChartLayout, style: LineStyle) -> ChartResult<Self> {
        let plot = layout.plot;
        if points.is_empty() {
            warn!("drawing chart without data; scales collapse to a single point");
        }

        let time_scale = TimeScale::from_points(points, (0.0, plot.width))?;
        let value_scale = LinearScale::new((0.0, max_value(points)?), (plot.height, 0.0))?;

        let x_axis = Axis::time(time_scale, AxisOrientation::Bottom, style.x_tick_count)?;
        let y_axis = Axis::linear(value_scale, AxisOrientation::Left, style.y_tick_count)?;

        let vertices = points
            .iter()
            .map(|point| -> ChartResult<PathPoint> {
                Ok((
                    time_scale.map(point.x)?,
                    value_scale.map(point.require_value()?)?,
                ))
            })
            .collect::<ChartResult<Vec<_>>>()?;
        let path = line_path(&vertices, style.interpolation);

        trace!(
            points = points.len(),
            x_ticks = x_axis.ticks().len(),
            y_ticks = y_axis.ticks().len(),
            interpolation = %style.interpolation,
            "built line chart frame"
        );

        Ok(Self {
            layout,
            time_scale,
            value_scale,
            x_axis,
            y_axis,
            path,
        })
    }

    /// Root `<svg>` holding the line and both axes.
    #[must_use]
    pub fn to_element(&self) -> SvgElement {
        let ChartLayout {
            canvas,
            margins,
            plot,
        } = self.layout;

        let line = SvgElement::new("path")
            .with_class(LINE_CLASS)
            .with_attr("d", &self.path)
            .with_attr("fill", "none")
            .with_attr("stroke", "currentColor");
        let x_axis = self
            .x_axis
            .to_element(X_AXIS_CLASS)
            .with_attr("transform", format!("translate(0,{})", SvgNumber(plot.height)));
        let y_axis = self.y_axis.to_element(Y_AXIS_CLASS);

        let content = SvgElement::new("g")
            .with_attr(
                "transform",
                format!("translate({},{})", margins.left, margins.top),
            )
            .with_child(line)
            .with_child(x_axis)
            .with_child(y_axis);

        SvgElement::new("svg")
            .with_attr("xmlns", SVG_NAMESPACE)
            .with_class(CHART_ROOT_CLASS)
            .with_attr("width", canvas.width)
            .with_attr("height", canvas.height)
            .with_child(content)
    }
}

/// Largest value in the series, or 0 when there is none.
fn max_value(points: &[DataPoint]) -> ChartResult<f64> {
    let mut max: Option<OrderedFloat<f64>> = None;
    for point in points {
        let value = OrderedFloat(point.require_value()?);
        max = Some(max.map_or(value, |current| current.max(value)));
    }
    Ok(max.map_or(0.0, |value| value.0))
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;

    #[test]
    fn missing_value_fails_frame_build() {
        let mut point = DataPoint::new(NaiveDate::default(), 1.0);
        point.y.clear();
        let layout = ChartLayout::new(Viewport::default(), Margins::default()).expect("layout");
        let style = LineStyle {
            x_tick_count: 5,
            y_tick_count: 5,
            interpolation: Interpolation::Linear,
        };
        assert!(LineChartFrame::build(&[point], layout, style).is_err());
    }
}
