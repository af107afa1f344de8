use serde::{Deserialize, Serialize};

use crate::core::{Interpolation, Margins, Viewport};
use crate::error::{ChartError, ChartResult};

pub const DEFAULT_TICK_COUNT: usize = 10;

const INTERPOLATION_KEY: &str = "interpolatorType";

/// Construction-time chart configuration.
///
/// Serialized keys keep the widget's established configuration names
/// (`XtickSize`, `YtickSize`, `interpolatorType`). Every key is optional;
/// a missing `interpolatorType` means linear interpolation. Tick counts are
/// hints; the scales clamp them to `core::MAX_TICK_COUNT`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChartOptions {
    #[serde(rename = "XtickSize", default = "default_tick_count")]
    pub x_tick_count: usize,
    #[serde(rename = "YtickSize", default = "default_tick_count")]
    pub y_tick_count: usize,
    #[serde(rename = "interpolatorType", default)]
    pub interpolation: Interpolation,
    #[serde(default)]
    pub margins: Margins,
    /// Canvas used when a draw call does not pass its own size.
    #[serde(default)]
    pub canvas: Viewport,
}

fn default_tick_count() -> usize {
    DEFAULT_TICK_COUNT
}

impl Default for ChartOptions {
    fn default() -> Self {
        Self {
            x_tick_count: DEFAULT_TICK_COUNT,
            y_tick_count: DEFAULT_TICK_COUNT,
            interpolation: Interpolation::default(),
            margins: Margins::default(),
            canvas: Viewport::default(),
        }
    }
}

impl ChartOptions {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_x_tick_count(mut self, count: usize) -> Self {
        self.x_tick_count = count;
        self
    }

    #[must_use]
    pub fn with_y_tick_count(mut self, count: usize) -> Self {
        self.y_tick_count = count;
        self
    }

    #[must_use]
    pub fn with_interpolation(mut self, interpolation: Interpolation) -> Self {
        self.interpolation = interpolation;
        self
    }

    #[must_use]
    pub fn with_margins(mut self, margins: Margins) -> Self {
        self.margins = margins;
        self
    }

    #[must_use]
    pub fn with_canvas(mut self, canvas: Viewport) -> Self {
        self.canvas = canvas;
        self
    }

    /// Parses options from JSON.
    ///
    /// An unknown `interpolatorType` is reported as
    /// `ChartError::UnsupportedInterpolation` rather than a generic parse error.
    pub fn from_json_str(input: &str) -> ChartResult<Self> {
        let value: serde_json::Value = serde_json::from_str(input)
            .map_err(|e| ChartError::InvalidData(format!("failed to parse chart options: {e}")))?;

        if let Some(name) = value.get(INTERPOLATION_KEY).and_then(serde_json::Value::as_str) {
            name.parse::<Interpolation>()?;
        }

        serde_json::from_value(value)
            .map_err(|e| ChartError::InvalidData(format!("invalid chart options: {e}")))
    }

    pub fn to_json_pretty(&self) -> ChartResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| ChartError::InvalidData(format!("failed to serialize chart options: {e}")))
    }
}
