use tracing::{debug, trace, warn};

use crate::core::{NormalizedScale, RoughScaleInput, estimate_rough_scale, normalize_scale};
use crate::error::{ScaleError, ScaleResult};

use super::validation::validate_scale_request;
use super::{ScaleCalculatorConfig, ScaleRequest};

/// Converts a data range and pixel extent into a nice axis scale.
///
/// The calculator holds only immutable configuration, so one instance can be
/// shared across axes and threads.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ScaleCalculator {
    config: ScaleCalculatorConfig,
}

impl ScaleCalculator {
    pub fn new(config: ScaleCalculatorConfig) -> ScaleResult<Self> {
        Ok(Self {
            config: config.validate()?,
        })
    }

    #[must_use]
    pub fn config(&self) -> &ScaleCalculatorConfig {
        &self.config
    }

    /// Runs rough estimation, step/limit normalization and step recounting.
    ///
    /// Inputs must be finite, but not every finite range is representable:
    /// spans in the subnormal range (`0..1e-310`) lose their step to underflow
    /// and spans near `f64::MAX` overflow when `max` is rounded up. Both are
    /// reported as [`ScaleError::DegenerateScale`].
    pub fn calculate(&self, request: &ScaleRequest) -> ScaleResult<NormalizedScale> {
        let request = validate_scale_request(*request).inspect_err(|err| {
            warn!(error = %err, "rejecting scale request");
        })?;

        let rough = estimate_rough_scale(RoughScaleInput {
            limit: request.limit(),
            offset_size: request.offset_size,
            step_count: request.step_count,
            minimum_step_size: request.minimum_step_size,
            pixels_per_step: self.config.pixels_per_step,
        });
        trace!(
            rough_step = rough.step,
            rough_step_count = rough.step_count,
            "estimated rough scale"
        );
        if !rough.step.is_finite() || rough.step <= 0.0 {
            warn!(rough_step = rough.step, "rough step is not usable");
            return Err(ScaleError::DegenerateScale(format!(
                "rough step must be finite and > 0, got {}",
                rough.step
            )));
        }

        let scale = normalize_scale(rough, &self.config.snap_table);
        ensure_usable_scale(scale)?;

        debug!(
            min = request.min,
            max = request.max,
            offset_size = request.offset_size,
            limit_min = scale.limit.min,
            limit_max = scale.limit.max,
            step = scale.step,
            step_count = scale.step_count,
            "calculated coordinate scale"
        );
        Ok(scale)
    }
}

/// Calculates a scale with the default 88px budget and `[1, 2, 5, 10]` snap table.
///
/// See [`ScaleCalculator::calculate`] for the magnitudes that cannot be scaled.
pub fn coordinate_scale_calculator(request: &ScaleRequest) -> ScaleResult<NormalizedScale> {
    ScaleCalculator::default().calculate(request)
}

fn ensure_usable_scale(scale: NormalizedScale) -> ScaleResult<()> {
    let values = [
        scale.limit.min,
        scale.limit.max,
        scale.step,
        scale.step_count,
    ];
    if values.iter().any(|value| !value.is_finite()) {
        warn!(?scale, "scale arithmetic left the finite range");
        return Err(ScaleError::DegenerateScale(
            "normalized scale must be finite".to_owned(),
        ));
    }
    if scale.step <= 0.0 || scale.limit.max <= scale.limit.min {
        warn!(?scale, "scale collapsed to an empty axis");
        return Err(ScaleError::DegenerateScale(
            "normalized scale must have a positive step and span".to_owned(),
        ));
    }
    Ok(())
}
