use serde::{Deserialize, Serialize};

use crate::core::SnapTable;
use crate::error::{ScaleError, ScaleResult};

/// Default horizontal/vertical pixel budget for one tick label.
pub const DEFAULT_PIXELS_PER_STEP: f64 = 88.0;

/// Immutable tuning closed over by [`super::ScaleCalculator`].
///
/// This type is serializable so host applications can persist axis density
/// alongside the rest of their chart setup.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScaleCalculatorConfig {
    #[serde(default = "default_pixels_per_step")]
    pub pixels_per_step: f64,
    #[serde(default)]
    pub snap_table: SnapTable,
}

impl Default for ScaleCalculatorConfig {
    fn default() -> Self {
        Self {
            pixels_per_step: DEFAULT_PIXELS_PER_STEP,
            snap_table: SnapTable::default(),
        }
    }
}

impl ScaleCalculatorConfig {
    /// Sets the pixel budget used when a request carries no step count.
    #[must_use]
    pub fn with_pixels_per_step(mut self, pixels_per_step: f64) -> Self {
        self.pixels_per_step = pixels_per_step;
        self
    }

    /// Replaces the leading-digit snap table.
    #[must_use]
    pub fn with_snap_table(mut self, snap_table: SnapTable) -> Self {
        self.snap_table = snap_table;
        self
    }

    pub fn validate(self) -> ScaleResult<Self> {
        if !self.pixels_per_step.is_finite() || self.pixels_per_step <= 0.0 {
            return Err(ScaleError::InvalidConfig(
                "pixels per step must be finite and > 0".to_owned(),
            ));
        }

        Ok(self)
    }
}

fn default_pixels_per_step() -> f64 {
    DEFAULT_PIXELS_PER_STEP
}
