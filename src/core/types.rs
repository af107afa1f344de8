use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use smallvec::{SmallVec, smallvec};

use crate::error::{ChartError, ChartResult};

/// Full canvas size in whole pixels, margins included.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    #[must_use]
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    #[must_use]
    pub fn is_valid(self) -> bool {
        self.width > 0 && self.height > 0
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(1024, 550)
    }
}

/// Space reserved around the plot area for axes and labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Margins {
    pub top: u32,
    pub right: u32,
    pub bottom: u32,
    pub left: u32,
}

impl Margins {
    #[must_use]
    pub const fn new(top: u32, right: u32, bottom: u32, left: u32) -> Self {
        Self {
            top,
            right,
            bottom,
            left,
        }
    }

    #[must_use]
    pub const fn horizontal(self) -> u32 {
        self.left + self.right
    }

    #[must_use]
    pub const fn vertical(self) -> u32 {
        self.top + self.bottom
    }
}

impl Default for Margins {
    fn default() -> Self {
        Self::new(30, 20, 30, 100)
    }
}

/// Drawable area left once margins are removed from the canvas.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlotArea {
    pub width: f64,
    pub height: f64,
}

impl PlotArea {
    pub fn from_canvas(canvas: Viewport, margins: Margins) -> ChartResult<Self> {
        if !canvas.is_valid()
            || canvas.width <= margins.horizontal()
            || canvas.height <= margins.vertical()
        {
            return Err(ChartError::InvalidViewport {
                width: canvas.width,
                height: canvas.height,
            });
        }

        Ok(Self {
            width: f64::from(canvas.width - margins.horizontal()),
            height: f64::from(canvas.height - margins.vertical()),
        })
    }
}

/// Layout box reported by a chart container.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox {
    pub width: f64,
    pub height: f64,
}

impl BoundingBox {
    #[must_use]
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Rounds the box to whole pixels.
    pub fn to_viewport(self) -> ChartResult<Viewport> {
        let in_range = |value: f64| value.is_finite() && (0.0..=f64::from(u32::MAX)).contains(&value);
        if !in_range(self.width) || !in_range(self.height) {
            return Err(ChartError::InvalidData(format!(
                "bounding box must be finite and non-negative, got {}x{}",
                self.width, self.height
            )));
        }

        Ok(Viewport::new(
            self.width.round() as u32,
            self.height.round() as u32,
        ))
    }
}

/// One sample of the series: a calendar day and its value.
///
/// `y` keeps the array shape of multi-series values, but only index 0 is
/// ever populated or read.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DataPoint {
    pub x: NaiveDate,
    pub y: SmallVec<[f64; 1]>,
}

impl DataPoint {
    #[must_use]
    pub fn new(x: NaiveDate, value: f64) -> Self {
        Self {
            x,
            y: smallvec![value],
        }
    }

    #[must_use]
    pub fn value(&self) -> Option<f64> {
        self.y.first().copied()
    }

    pub fn require_value(&self) -> ChartResult<f64> {
        match self.value() {
            Some(value) if value.is_finite() => Ok(value),
            Some(_) => Err(ChartError::InvalidData(format!(
                "value at {} must be finite",
                self.x
            ))),
            None => Err(ChartError::InvalidData(format!(
                "data point at {} has no value",
                self.x
            ))),
        }
    }
}
