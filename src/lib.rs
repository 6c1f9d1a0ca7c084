//! chart-scale: nice-number axis scale calculator.
//!
//! Converts a raw data range and the pixel extent of an axis into a scale
//! whose step is one of `1, 2, 5, 10 × 10^k` and whose limits are aligned to
//! that step. The calculation is pure and synchronous; one call per axis.
//!
//! ```
//! use chart_scale::{ScaleRequest, coordinate_scale_calculator};
//!
//! let request = ScaleRequest::new(-10.0, 100.0, 264.0).with_step_count(5);
//! let scale = coordinate_scale_calculator(&request).expect("valid request");
//! assert_eq!(scale.step, 20.0);
//! assert_eq!((scale.limit.min, scale.limit.max), (-20.0, 100.0));
//! ```

pub mod api;
pub mod core;
pub mod error;
pub mod telemetry;

pub use api::{ScaleCalculator, ScaleCalculatorConfig, ScaleRequest, coordinate_scale_calculator};
pub use core::{NormalizedScale, ScaleLimit};
pub use error::{ScaleError, ScaleResult};
