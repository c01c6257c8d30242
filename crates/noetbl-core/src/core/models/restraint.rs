use serde::Deserialize;
use std::fmt;

/// A target distance with its allowed deviations, in Angstroms.
///
/// The allowed range is `[distance - lower_delta, distance + upper_delta]`.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct DistanceBounds {
    pub distance: f64,
    pub lower_delta: f64,
    pub upper_delta: f64,
}

impl DistanceBounds {
    pub const fn new(distance: f64, lower_delta: f64, upper_delta: f64) -> Self {
        Self {
            distance,
            lower_delta,
            upper_delta,
        }
    }

    /// Name of the first field that is not a finite, strictly positive number.
    pub fn first_non_positive_field(&self) -> Option<&'static str> {
        [
            ("distance", self.distance),
            ("lower-delta", self.lower_delta),
            ("upper-delta", self.upper_delta),
        ]
        .into_iter()
        .find(|(_, value)| !(value.is_finite() && *value > 0.0))
        .map(|(name, _)| name)
    }
}

/// One concrete, fully resolved distance restraint between two force-field atoms.
#[derive(Debug, Clone, PartialEq)]
pub struct DistanceRestraint {
    pub residue1: usize,
    pub atom1: String,
    pub residue2: usize,
    pub atom2: String,
    pub bounds: DistanceBounds,
}

impl DistanceRestraint {
    pub fn new(
        residue1: usize,
        atom1: impl Into<String>,
        residue2: usize,
        atom2: impl Into<String>,
        bounds: DistanceBounds,
    ) -> Self {
        Self {
            residue1,
            atom1: atom1.into(),
            residue2,
            atom2: atom2.into(),
            bounds,
        }
    }
}

/// Formats a restraint as a single `assign` statement of a `.tbl` file.
impl fmt::Display for DistanceRestraint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "assign (resid {} and name {})(resid {} and name {}) {} {} {}",
            self.residue1,
            self.atom1,
            self.residue2,
            self.atom2,
            Decimal(self.bounds.distance),
            Decimal(self.bounds.lower_delta),
            Decimal(self.bounds.upper_delta),
        )
    }
}

// Shortest round-trip form, but integral values keep one decimal place (3.0, not 3).
struct Decimal(f64);

impl fmt::Display for Decimal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_finite() && self.0.fract() == 0.0 {
            write!(f, "{:.1}", self.0)
        } else {
            write!(f, "{}", self.0)
        }
    }
}
