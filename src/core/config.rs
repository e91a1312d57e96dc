//! Numeric tolerances used by the checked conversions.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Default tolerance of the inverse tilde operation's skew-symmetry check.
pub const DEFAULT_TILDE_TOL: f64 = 1e-6;

/// Default relative and absolute tolerance when verifying that input rows are symmetric.
pub const DEFAULT_SYMMETRY_TOL: f64 = 1e-13;

#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Tolerances {
    /// Passed to [`tilde_with_tol`](crate::tilde_with_tol).
    pub tilde: f64,
    pub symmetry_rel: f64,
    pub symmetry_abs: f64,
}

impl Default for Tolerances {
    fn default() -> Self {
        Tolerances {
            tilde: DEFAULT_TILDE_TOL,
            symmetry_rel: DEFAULT_SYMMETRY_TOL,
            symmetry_abs: DEFAULT_SYMMETRY_TOL,
        }
    }
}

impl Tolerances {
    /// `|a - b| <= |a| * rel + abs`, with the symmetry tolerances.
    pub(crate) fn symmetric_close(&self, diff: f64, magnitude: f64) -> bool {
        diff <= magnitude * self.symmetry_rel + self.symmetry_abs
    }
}
