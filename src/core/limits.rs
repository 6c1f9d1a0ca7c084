use crate::core::magnitude::compensation_factor;
use crate::core::types::ScaleLimit;

/// How the lower axis bound is aligned to the step grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MinLimitPolicy {
    /// `min > step`: round down to the nearest multiple without reaching zero.
    FloorToStep,
    /// `min < 0`: round the negative extent outward so it is never clipped.
    NegativeOutward,
    /// `0 <= min <= step`: small positive baselines start the axis at zero.
    ZeroOrigin,
}

impl MinLimitPolicy {
    #[must_use]
    pub fn resolve(min: f64, step: f64) -> Self {
        if min > step {
            Self::FloorToStep
        } else if min < 0.0 {
            Self::NegativeOutward
        } else {
            Self::ZeroOrigin
        }
    }
}

/// Grid lines tried past the rounded index before giving up on ulp drift.
const MAX_OUTWARD_NUDGES: usize = 4;

/// Expands `limit` outward to multiples of `step`.
///
/// Rounding happens in compensated space (see [`compensation_factor`]) so
/// fractional steps land on exact multiples. Scaling back can still land a
/// bound one ulp inside the data, in which case it moves one more grid line
/// outward. A zero-width input that would collapse onto a single grid line
/// keeps one step of extent above `min`.
#[must_use]
pub fn normalize_limit(limit: ScaleLimit, step: f64) -> ScaleLimit {
    let factor = compensation_factor(limit.max, step);
    let grid = Grid {
        factor,
        scaled_step: step * factor,
    };

    let max_index = grid.index_of(limit.max).ceil();
    let max = grid.line(grid.nudge(max_index, 1.0, |line| line < limit.max));

    let min = match MinLimitPolicy::resolve(limit.min, step) {
        MinLimitPolicy::FloorToStep => {
            let index = grid.index_of(limit.min).floor();
            grid.line(grid.nudge(index, -1.0, |line| line > limit.min))
        }
        MinLimitPolicy::NegativeOutward => {
            let index = grid.index_of(limit.min.abs()).ceil();
            -grid.line(grid.nudge(index, 1.0, |line| -line > limit.min))
        }
        MinLimitPolicy::ZeroOrigin => 0.0,
    };

    if max <= min {
        return ScaleLimit::new(min, min + step);
    }
    ScaleLimit::new(min, max)
}

#[derive(Debug, Clone, Copy)]
struct Grid {
    factor: f64,
    scaled_step: f64,
}

impl Grid {
    fn index_of(self, value: f64) -> f64 {
        value * self.factor / self.scaled_step
    }

    fn line(self, index: f64) -> f64 {
        index * self.scaled_step / self.factor
    }

    /// Moves `index` by `direction` while its grid line is still inside the data.
    fn nudge(self, mut index: f64, direction: f64, inside: impl Fn(f64) -> bool) -> f64 {
        for _ in 0..MAX_OUTWARD_NUDGES {
            if !inside(self.line(index)) {
                break;
            }
            index += direction;
        }
        index
    }
}
