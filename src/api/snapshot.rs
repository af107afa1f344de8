use serde::{Deserialize, Serialize};

use crate::core::{DataPoint, Interpolation, Viewport};
use crate::error::{ChartError, ChartResult};

use super::ChartOptions;

/// Serializable view of a renderer's state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartSnapshot {
    pub options: ChartOptions,
    pub interpolation: Interpolation,
    pub canvas: Option<Viewport>,
    pub points: Vec<DataPoint>,
}

impl ChartSnapshot {
    pub fn to_json_pretty(&self) -> ChartResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| ChartError::InvalidData(format!("failed to serialize snapshot: {e}")))
    }

    pub fn from_json_str(input: &str) -> ChartResult<Self> {
        serde_json::from_str(input)
            .map_err(|e| ChartError::InvalidData(format!("failed to parse snapshot json: {e}")))
    }
}
