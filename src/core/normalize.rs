use crate::core::limits::normalize_limit;
use crate::core::snap::SnapTable;
use crate::core::step_count::normalize_step_count;
use crate::core::types::{NormalizedScale, RoughScale};

/// Snaps the rough step, aligns the limits to it, and recounts the steps.
#[must_use]
pub fn normalize_scale(rough: RoughScale, snap_table: &SnapTable) -> NormalizedScale {
    let step = snap_table.normalize_step(rough.step);
    let limit = normalize_limit(rough.limit, step);
    let step_count = normalize_step_count(limit.size(), step);

    NormalizedScale {
        limit,
        step,
        step_count,
    }
}
