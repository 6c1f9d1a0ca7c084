use crate::core::magnitude::compensated_div;

const INTEGER_SNAP_TOLERANCE: f64 = 1e-9;

/// Number of `step` intervals in `limit_size`.
///
/// The division is magnitude-compensated and a result within relative
/// `1e-9` of an integer is returned as that integer.
#[must_use]
pub fn normalize_step_count(limit_size: f64, step: f64) -> f64 {
    let count = compensated_div(limit_size, step);
    let nearest = count.round();
    if (count - nearest).abs() <= INTEGER_SNAP_TOLERANCE * nearest.abs().max(1.0) {
        nearest
    } else {
        count
    }
}
