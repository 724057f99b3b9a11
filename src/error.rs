use thiserror::Error;

pub type ChartResult<T> = Result<T, ChartError>;

#[derive(Debug, Error)]
pub enum ChartError {
    #[error("x and y must have equal length: x={x_len}, y={y_len}")]
    LengthMismatch { x_len: usize, y_len: usize },

    #[error("invalid data: {0}")]
    InvalidData(String),

    #[error("configuration error: {0}")]
    Config(String),

    #[error("authentication failed: {0}")]
    Authentication(String),

    #[error("quota exceeded: {0}")]
    Quota(String),

    #[error("transport error: {0}")]
    Transport(String),

    #[error("service error: {0}")]
    Service(String),
}

impl ChartError {
    /// Returns `true` for errors raised while building a figure, before any
    /// request leaves the process.
    #[must_use]
    pub fn is_input_error(&self) -> bool {
        matches!(self, Self::LengthMismatch { .. } | Self::InvalidData(_))
    }
}
