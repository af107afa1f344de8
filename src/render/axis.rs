use serde::{Deserialize, Serialize};

use crate::core::line_path::SvgNumber;
use crate::core::{LinearScale, TimeScale, format_linear_tick, format_time_tick};
use crate::error::ChartResult;
use crate::render::SvgElement;

pub const AXIS_INNER_TICK_SIZE: f64 = 6.0;
pub const AXIS_OUTER_TICK_SIZE: f64 = 6.0;
pub const AXIS_TICK_PADDING: f64 = 3.0;

/// Side of the plot the axis is drawn on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AxisOrientation {
    Bottom,
    Left,
}

/// One labelled tick at a pixel offset along the axis.
#[derive(Debug, Clone, PartialEq)]
pub struct AxisTick {
    pub position: f64,
    pub label: String,
}

/// Resolved axis: range extent plus positioned, formatted ticks.
#[derive(Debug, Clone, PartialEq)]
pub struct Axis {
    orientation: AxisOrientation,
    range: (f64, f64),
    ticks: Vec<AxisTick>,
}

impl Axis {
    #[must_use]
    pub fn new(orientation: AxisOrientation, range: (f64, f64), ticks: Vec<AxisTick>) -> Self {
        Self {
            orientation,
            range,
            ticks,
        }
    }

    /// Axis for a temporal scale with roughly `tick_count` calendar ticks.
    pub fn time(scale: TimeScale, orientation: AxisOrientation, tick_count: usize) -> ChartResult<Self> {
        let ticks = scale
            .ticks(tick_count)
            .into_iter()
            .map(|date| {
                Ok(AxisTick {
                    position: scale.map(date)?,
                    label: format_time_tick(date),
                })
            })
            .collect::<ChartResult<Vec<_>>>()?;
        Ok(Self::new(orientation, scale.range(), ticks))
    }

    /// Axis for a linear scale with roughly `tick_count` round-valued ticks.
    pub fn linear(
        scale: LinearScale,
        orientation: AxisOrientation,
        tick_count: usize,
    ) -> ChartResult<Self> {
        let step = scale.tick_step(tick_count);
        let ticks = scale
            .ticks(tick_count)
            .into_iter()
            .map(|value| {
                Ok(AxisTick {
                    position: scale.map(value)?,
                    label: format_linear_tick(value, step),
                })
            })
            .collect::<ChartResult<Vec<_>>>()?;
        Ok(Self::new(orientation, scale.range(), ticks))
    }

    #[must_use]
    pub fn orientation(&self) -> AxisOrientation {
        self.orientation
    }

    #[must_use]
    pub fn range(&self) -> (f64, f64) {
        self.range
    }

    #[must_use]
    pub fn ticks(&self) -> &[AxisTick] {
        &self.ticks
    }

    /// Builds the `<g>` group holding every tick and the domain line.
    #[must_use]
    pub fn to_element(&self, class: &str) -> SvgElement {
        let mut group = SvgElement::new("g").with_class(class);
        for tick in &self.ticks {
            group.children.push(self.tick_element(tick));
        }
        group.children.push(self.domain_element());
        group
    }

    fn tick_element(&self, tick: &AxisTick) -> SvgElement {
        let label_offset = AXIS_INNER_TICK_SIZE.max(0.0) + AXIS_TICK_PADDING;
        let (transform, line, text) = match self.orientation {
            AxisOrientation::Bottom => (
                format!("translate({},0)", SvgNumber(tick.position)),
                SvgElement::new("line")
                    .with_attr("y2", SvgNumber(AXIS_INNER_TICK_SIZE))
                    .with_attr("x2", 0),
                SvgElement::new("text")
                    .with_attr("dy", ".71em")
                    .with_attr("y", SvgNumber(label_offset))
                    .with_attr("x", 0)
                    .with_attr("style", "text-anchor: middle;"),
            ),
            AxisOrientation::Left => (
                format!("translate(0,{})", SvgNumber(tick.position)),
                SvgElement::new("line")
                    .with_attr("x2", SvgNumber(-AXIS_INNER_TICK_SIZE))
                    .with_attr("y2", 0),
                SvgElement::new("text")
                    .with_attr("dy", ".32em")
                    .with_attr("x", SvgNumber(-label_offset))
                    .with_attr("y", 0)
                    .with_attr("style", "text-anchor: end;"),
            ),
        };

        SvgElement::new("g")
            .with_class("tick")
            .with_attr("transform", transform)
            .with_child(line)
            .with_child(text.with_text(tick.label.clone()))
    }

    fn domain_element(&self) -> SvgElement {
        let (low, high) = if self.range.0 <= self.range.1 {
            self.range
        } else {
            (self.range.1, self.range.0)
        };
        let outer = AXIS_OUTER_TICK_SIZE;
        let d = match self.orientation {
            AxisOrientation::Bottom => format!(
                "M{},{}V0H{}V{}",
                SvgNumber(low),
                SvgNumber(outer),
                SvgNumber(high),
                SvgNumber(outer)
            ),
            AxisOrientation::Left => format!(
                "M{},{}H0V{}H{}",
                SvgNumber(-outer),
                SvgNumber(low),
                SvgNumber(high),
                SvgNumber(-outer)
            ),
        };
        SvgElement::new("path").with_class("domain").with_attr("d", d)
    }
}
