mod calculator_config;
mod json_contract;
mod scale_calculator;
mod scale_request;
mod validation;

pub use calculator_config::{DEFAULT_PIXELS_PER_STEP, ScaleCalculatorConfig};
pub use json_contract::{SCALE_JSON_SCHEMA_V1, ScaleJsonContractV1};
pub use scale_calculator::{ScaleCalculator, coordinate_scale_calculator};
pub use scale_request::ScaleRequest;
