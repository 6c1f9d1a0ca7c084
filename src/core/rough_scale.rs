use crate::core::magnitude::order_of_magnitude;
use crate::core::types::{RoughScale, ScaleLimit};

/// Inputs of the rough estimate. Callers validate before estimating.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RoughScaleInput {
    pub limit: ScaleLimit,
    pub offset_size: f64,
    pub step_count: Option<u32>,
    pub minimum_step_size: Option<f64>,
    pub pixels_per_step: f64,
}

/// Derives an un-rounded step from the pixel budget.
#[must_use]
pub fn estimate_rough_scale(input: RoughScaleInput) -> RoughScale {
    let limit_size = input.limit.size();

    if limit_size == 0.0 {
        // A flat series has no span to divide; fall back to one step of its own magnitude.
        let step = input
            .minimum_step_size
            .unwrap_or_else(|| order_of_magnitude(input.limit.max));
        return RoughScale {
            limit: input.limit,
            step,
            step_count: 1.0,
        };
    }

    let value_per_pixel = limit_size / input.offset_size;
    let mut step_count = match input.step_count {
        Some(count) => f64::from(count),
        None => (input.offset_size / input.pixels_per_step).ceil().max(1.0),
    };
    let pixels_per_step = input.offset_size / step_count;
    let mut step = value_per_pixel * pixels_per_step;

    if let Some(minimum_step_size) = input.minimum_step_size {
        if step < minimum_step_size {
            step = minimum_step_size;
            step_count = limit_size / step;
        }
    }

    RoughScale {
        limit: input.limit,
        step,
        step_count,
    }
}
