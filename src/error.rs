use thiserror::Error;

pub type ScaleResult<T> = Result<T, ScaleError>;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ScaleError {
    #[error("{field} must be finite")]
    NonFiniteInput { field: &'static str },

    #[error("invalid offset size: {offset_size} (must be > 0)")]
    InvalidOffsetSize { offset_size: f64 },

    #[error("invalid scale range: min={min} is greater than max={max}")]
    InvalidRange { min: f64, max: f64 },

    #[error("step count hint must be > 0")]
    InvalidStepCount,

    #[error("invalid minimum step size: {value} (must be finite and > 0)")]
    InvalidMinimumStepSize { value: f64 },

    #[error("invalid calculator config: {0}")]
    InvalidConfig(String),

    #[error("degenerate scale: {0}")]
    DegenerateScale(String),

    #[error("scale has {count} ticks, more than the {limit} that can be listed")]
    TooManyTicks { count: usize, limit: usize },

    #[error("invalid data: {0}")]
    InvalidData(String),
}
