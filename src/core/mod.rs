pub mod limits;
pub mod magnitude;
pub mod normalize;
pub mod rough_scale;
pub mod snap;
pub mod step_count;
pub mod types;

pub use limits::{MinLimitPolicy, normalize_limit};
pub use magnitude::{
    compensated_div, compensation_factor, magnitude_exponent, order_of_magnitude, power_of_ten,
};
pub use normalize::normalize_scale;
pub use rough_scale::{RoughScaleInput, estimate_rough_scale};
pub use snap::{DEFAULT_SNAP_VALUES, SnapTable};
pub use step_count::normalize_step_count;
pub use types::{MAX_TICK_VALUES, NormalizedScale, RoughScale, ScaleLimit};
