use thiserror::Error;

use crate::render::NodeId;

pub type ChartResult<T> = Result<T, ChartError>;

#[derive(Debug, Error)]
pub enum ChartError {
    #[error("invalid viewport size: width={width}, height={height}")]
    InvalidViewport { width: f64, height: f64 },

    #[error("invalid data: {0}")]
    InvalidData(String),

    #[error("series `{series}` has {actual} points but {expected} categories were supplied")]
    SeriesLengthMismatch {
        series: String,
        expected: usize,
        actual: usize,
    },

    #[error("category `{0}` is not part of the category axis")]
    UnknownCategory(String),

    #[error("invalid category range: `{from}` is positioned after `{to}`")]
    InvalidRange { from: String, to: String },

    #[error("series index {index} is out of range for {len} series")]
    SeriesIndexOutOfRange { index: usize, len: usize },

    #[error("capability `{0}` is disabled for this chart")]
    CapabilityDisabled(&'static str),

    #[error("scene node {0:?} does not exist")]
    UnknownNode(NodeId),

    #[error("measurement failed: {0}")]
    Measurement(String),
}
