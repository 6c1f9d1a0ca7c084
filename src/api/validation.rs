use crate::error::{ScaleError, ScaleResult};

use super::ScaleRequest;

pub(super) fn validate_scale_request(request: ScaleRequest) -> ScaleResult<ScaleRequest> {
    for (field, value) in [
        ("min", request.min),
        ("max", request.max),
        ("offset_size", request.offset_size),
    ] {
        if !value.is_finite() {
            return Err(ScaleError::NonFiniteInput { field });
        }
    }

    if request.offset_size <= 0.0 {
        return Err(ScaleError::InvalidOffsetSize {
            offset_size: request.offset_size,
        });
    }

    if request.min > request.max {
        return Err(ScaleError::InvalidRange {
            min: request.min,
            max: request.max,
        });
    }

    if request.step_count == Some(0) {
        return Err(ScaleError::InvalidStepCount);
    }

    if let Some(value) = request.minimum_step_size {
        if !value.is_finite() || value <= 0.0 {
            return Err(ScaleError::InvalidMinimumStepSize { value });
        }
    }

    Ok(request)
}
