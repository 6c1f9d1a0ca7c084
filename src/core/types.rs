use serde::{Deserialize, Serialize};

use crate::core::magnitude::compensation_factor;
use crate::error::{ScaleError, ScaleResult};

/// Upper bound on the labels [`NormalizedScale::tick_values`] materializes.
pub const MAX_TICK_VALUES: usize = 10_000;

/// Inclusive numeric bounds of an axis.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScaleLimit {
    pub min: f64,
    pub max: f64,
}

impl ScaleLimit {
    #[must_use]
    pub fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    #[must_use]
    pub fn size(self) -> f64 {
        (self.max - self.min).abs()
    }

    #[must_use]
    pub fn contains(self, value: f64) -> bool {
        self.min <= value && value <= self.max
    }
}

/// Un-rounded scale estimated from the pixel budget.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RoughScale {
    pub limit: ScaleLimit,
    pub step: f64,
    pub step_count: f64,
}

/// Axis scale with nice step and step-aligned limits.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NormalizedScale {
    pub limit: ScaleLimit,
    pub step: f64,
    pub step_count: f64,
}

impl NormalizedScale {
    /// Number of tick labels, fence posts included.
    #[must_use]
    pub fn tick_count(self) -> usize {
        if !self.step_count.is_finite() || self.step_count < 0.0 {
            return 0;
        }
        (self.step_count.round() as usize).saturating_add(1)
    }

    /// Tick values `limit.min + k * step` for `k` in `0..=round(step_count)`.
    ///
    /// Values are accumulated in compensated integer space so a `0.1` step
    /// yields `0.3` rather than `0.30000000000000004`. Scales with more than
    /// [`MAX_TICK_VALUES`] labels are rejected instead of allocated.
    pub fn tick_values(self) -> ScaleResult<Vec<f64>> {
        let count = self.tick_count();
        if count > MAX_TICK_VALUES {
            return Err(ScaleError::TooManyTicks {
                count,
                limit: MAX_TICK_VALUES,
            });
        }
        let factor = compensation_factor(self.limit.max, self.step);
        let scaled_min = self.limit.min * factor;
        let scaled_step = self.step * factor;

        Ok((0..count)
            .map(|index| (scaled_min + index as f64 * scaled_step) / factor)
            .collect())
    }
}
