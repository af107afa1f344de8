use thiserror::Error;

pub type ChartResult<T> = Result<T, ChartError>;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ChartError {
    #[error("invalid viewport size: width={width}, height={height}")]
    InvalidViewport { width: u32, height: u32 },

    #[error("invalid data: {0}")]
    InvalidData(String),

    #[error("chart container `{0}` is not attached")]
    ContainerNotFound(String),

    #[error("unsupported interpolation mode: `{0}`")]
    UnsupportedInterpolation(String),

    #[error("chart container has no bounding box; draw the chart before resizing")]
    NotRendered,
}
