use serde::{Deserialize, Serialize};

use crate::core::ScaleLimit;

/// One axis worth of input: data range plus available pixel extent.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScaleRequest {
    pub min: f64,
    pub max: f64,
    pub offset_size: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub step_count: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub minimum_step_size: Option<f64>,
}

impl ScaleRequest {
    #[must_use]
    pub fn new(min: f64, max: f64, offset_size: f64) -> Self {
        Self {
            min,
            max,
            offset_size,
            step_count: None,
            minimum_step_size: None,
        }
    }

    /// Requests a fixed number of steps instead of the pixel-budget default.
    #[must_use]
    pub fn with_step_count(mut self, step_count: u32) -> Self {
        self.step_count = Some(step_count);
        self
    }

    /// Sets a floor for the rough step size.
    #[must_use]
    pub fn with_minimum_step_size(mut self, minimum_step_size: f64) -> Self {
        self.minimum_step_size = Some(minimum_step_size);
        self
    }

    #[must_use]
    pub fn limit(self) -> ScaleLimit {
        ScaleLimit::new(self.min, self.max)
    }
}
