use std::cmp::Ordering;
use std::fmt;

/// Tolerance for comparing positions against sheet bounds and against each other.
pub const BOUNDS_TOLERANCE: f64 = 1e-6;

/// Tolerance for deciding whether two placements share a row.
/// Hexagonal row centers are derived from `sqrt(3)/2` arithmetic and are never bit-identical.
pub const ROW_EPSILON: f64 = 0.01;

///Wrapper around the [`float_cmp::approx_eq!()`] macro for easy comparison of floats with a certain tolerance.
///Two FPAs are considered equal if they are within [`BOUNDS_TOLERANCE`] of each other.
#[derive(Debug, Clone, Copy)]
pub struct FPA(pub f64);

impl PartialEq<Self> for FPA {
    fn eq(&self, other: &Self) -> bool {
        float_cmp::approx_eq!(f64, self.0, other.0, epsilon = BOUNDS_TOLERANCE)
    }
}

impl PartialOrd<Self> for FPA {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        match self.eq(other) {
            true => Some(Ordering::Equal),
            false => self.0.partial_cmp(&other.0),
        }
    }
}

impl fmt::Display for FPA {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Whether two vertical positions belong to the same row, within [`ROW_EPSILON`].
pub fn same_row(y1: f64, y2: f64) -> bool {
    float_cmp::approx_eq!(f64, y1, y2, epsilon = ROW_EPSILON)
}
