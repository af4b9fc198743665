use serde::{Serialize, Serializer};
use std::fmt;

/// Estimated in-vivo half-life bucket from the N-end rule, keyed on the
/// N-terminal residue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HalfLifeClass {
    /// A, G, M, S, T, V
    OverThirtyHours,
    /// I, L, N, Q, C
    TenHours,
    /// R, K, H
    TwoMinutesBasic,
    /// F, Y, W
    TwoMinutesAromatic,
    /// D, E
    ThreeMinutes,
    /// Any code outside the standard alphabet.
    Unknown,
}

impl HalfLifeClass {
    pub fn label(self) -> &'static str {
        match self {
            Self::OverThirtyHours => ">30 hours",
            Self::TenHours => "10 hours",
            Self::TwoMinutesBasic | Self::TwoMinutesAromatic => "2 minutes",
            Self::ThreeMinutes => "3 minutes",
            Self::Unknown => "Unknown",
        }
    }
}

impl fmt::Display for HalfLifeClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl Serialize for HalfLifeClass {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.label())
    }
}

/// The computed parameters of one sequence.
#[derive(Debug, Clone, PartialEq)]
pub struct PhysicochemicalProfile {
    pub id: String,
    pub sequence: String,
    pub length: usize,
    /// Average molecular weight in daltons.
    pub molecular_weight: f64,
    /// Theoretical pI, rounded to two decimals by the solver.
    pub isoelectric_point: f64,
    /// Mass-normalized extinction value; see `engine::calculators::extinction`.
    pub extinction_coefficient: f64,
    pub instability_index: f64,
    pub aliphatic_index: f64,
    pub half_life: HalfLifeClass,
}
