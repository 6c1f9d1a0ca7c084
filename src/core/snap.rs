use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::magnitude::{magnitude_exponent, power_of_ten};
use crate::error::{ScaleError, ScaleResult};

/// Leading-digit multipliers used by [`SnapTable::default`].
pub const DEFAULT_SNAP_VALUES: [f64; 4] = [1.0, 2.0, 5.0, 10.0];

/// Ascending table of "nice" leading-digit multipliers.
///
/// A value snaps to the first entry whose midpoint with its successor is not
/// exceeded. The last entry is its own midpoint, so it acts as the ceiling.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "SmallVec<[f64; 4]>", into = "SmallVec<[f64; 4]>")]
pub struct SnapTable {
    values: SmallVec<[f64; 4]>,
}

impl Default for SnapTable {
    fn default() -> Self {
        Self {
            values: SmallVec::from_buf(DEFAULT_SNAP_VALUES),
        }
    }
}

impl SnapTable {
    pub fn new(values: impl IntoIterator<Item = f64>) -> ScaleResult<Self> {
        let values: SmallVec<[f64; 4]> = values.into_iter().collect();
        if values.is_empty() {
            return Err(ScaleError::InvalidConfig(
                "snap table must contain at least one value".to_owned(),
            ));
        }
        if values.iter().any(|value| !value.is_finite() || *value <= 0.0) {
            return Err(ScaleError::InvalidConfig(
                "snap values must be finite and > 0".to_owned(),
            ));
        }
        if values.windows(2).any(|pair| pair[0] >= pair[1]) {
            return Err(ScaleError::InvalidConfig(
                "snap values must be strictly ascending".to_owned(),
            ));
        }

        Ok(Self { values })
    }

    #[must_use]
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Snaps a magnitude-normalized value (roughly `[1, 10)`) onto the table.
    #[must_use]
    pub fn snap(&self, value: f64) -> f64 {
        for (index, reference) in self.values.iter().copied().enumerate() {
            let next = self.values.get(index + 1).copied().unwrap_or(reference);
            let midpoint = (reference + next) / 2.0;
            if value <= midpoint {
                return reference;
            }
        }

        // Constructors reject empty tables.
        self.values[self.values.len() - 1]
    }

    /// Rounds a rough step size to `snap(step / 10^k) * 10^k`.
    #[must_use]
    pub fn normalize_step(&self, step: f64) -> f64 {
        let exponent = magnitude_exponent(step);
        let magnitude = power_of_ten(exponent);
        let leading = self.snap(step / magnitude);
        // Dividing by an exact integer power keeps 2e-3 correctly rounded.
        if exponent < 0 {
            leading / power_of_ten(-exponent)
        } else {
            leading * magnitude
        }
    }
}

impl TryFrom<SmallVec<[f64; 4]>> for SnapTable {
    type Error = ScaleError;

    fn try_from(values: SmallVec<[f64; 4]>) -> ScaleResult<Self> {
        Self::new(values)
    }
}

impl From<SnapTable> for SmallVec<[f64; 4]> {
    fn from(table: SnapTable) -> Self {
        table.values
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn snaps_to_nearest_reference_with_ties_going_down() {
        let table = SnapTable::default();
        assert_eq!(table.snap(1.0), 1.0);
        assert_eq!(table.snap(1.5), 1.0);
        assert_eq!(table.snap(1.51), 2.0);
        assert_eq!(table.snap(3.5), 2.0);
        assert_eq!(table.snap(3.51), 5.0);
        assert_eq!(table.snap(7.5), 5.0);
        assert_eq!(table.snap(7.51), 10.0);
    }

    #[test]
    fn values_above_every_midpoint_use_last_reference() {
        let table = SnapTable::default();
        assert_eq!(table.snap(9.99), 10.0);
        assert_eq!(table.snap(42.0), 10.0);
    }

    #[test]
    fn normalize_step_keeps_magnitude() {
        let table = SnapTable::default();
        assert_eq!(table.normalize_step(51.666), 50.0);
        assert_eq!(table.normalize_step(22.0), 20.0);
        assert_eq!(table.normalize_step(0.0021), 0.002);
        assert_eq!(table.normalize_step(0.089), 0.1);
        assert_eq!(table.normalize_step(1_234.0), 1_000.0);
    }

    #[test]
    fn rejects_invalid_tables() {
        assert!(SnapTable::new(Vec::new()).is_err());
        assert!(SnapTable::new([1.0, 0.0]).is_err());
        assert!(SnapTable::new([2.0, 1.0, 5.0]).is_err());
        assert!(SnapTable::new([1.0, f64::NAN]).is_err());
        assert!(SnapTable::new([1.0, 2.5, 5.0, 10.0]).is_ok());
    }

    #[test]
    fn single_entry_table_always_returns_it() {
        let table = SnapTable::new([1.0]).expect("valid table");
        assert_eq!(table.snap(0.5), 1.0);
        assert_eq!(table.snap(9.0), 1.0);
    }
}
