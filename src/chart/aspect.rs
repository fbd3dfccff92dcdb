use crate::chart::Element;
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter, EnumString};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StatNature {
    Positive,
    Negative,
    /// Split evenly between the positive and negative accumulators.
    Mixed,
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, EnumIter, EnumString, Display,
)]
#[strum(ascii_case_insensitive)]
pub enum Aspect {
    Conjunction,
    Opposition,
    Square,
    Trine,
    Sextile,
    Quincunx,
    Sesquiquadrate,
    Semisquare,
    Semisextile,
    Quintile,
    Biquintile,
}

/// Scan order for every pair of chart points.
pub const ALL_ASPECTS: [Aspect; 11] = [
    Aspect::Conjunction,
    Aspect::Opposition,
    Aspect::Square,
    Aspect::Trine,
    Aspect::Sextile,
    Aspect::Quincunx,
    Aspect::Sesquiquadrate,
    Aspect::Semisquare,
    Aspect::Semisextile,
    Aspect::Quintile,
    Aspect::Biquintile,
];

const MINOR_ORB: f64 = 2.0;
const MINOR_STAT: f64 = 2.0;

impl Aspect {
    /// Canonical angular separation in degrees.
    pub const fn separation(self) -> f64 {
        match self {
            Self::Conjunction => 0.0,
            Self::Opposition => 180.0,
            Self::Square => 90.0,
            Self::Trine => 120.0,
            Self::Sextile => 60.0,
            Self::Quincunx => 150.0,
            Self::Sesquiquadrate => 135.0,
            Self::Semisquare => 45.0,
            Self::Semisextile => 30.0,
            Self::Quintile => 72.0,
            Self::Biquintile => 144.0,
        }
    }

    pub const fn allowed_orb(self) -> f64 {
        match self {
            Self::Conjunction | Self::Opposition => 10.0,
            Self::Square | Self::Trine => 6.0,
            Self::Sextile => 4.0,
            _ => MINOR_ORB,
        }
    }

    pub const fn stat(self) -> f64 {
        match self {
            Self::Conjunction => 5.0,
            Self::Opposition => 4.5,
            Self::Square | Self::Trine => 4.0,
            Self::Sextile => 3.0,
            _ => MINOR_STAT,
        }
    }

    /// Nature of the aspect between two chart points. Only conjunctions
    /// depend on who takes part in them.
    pub fn nature(self, first: Element, second: Element) -> StatNature {
        match self {
            Self::Conjunction => {
                if first.is_malefic() || second.is_malefic() {
                    StatNature::Mixed
                } else {
                    StatNature::Positive
                }
            }
            Self::Trine | Self::Sextile | Self::Quintile | Self::Biquintile => {
                StatNature::Positive
            }
            Self::Opposition
            | Self::Square
            | Self::Quincunx
            | Self::Semisquare
            | Self::Sesquiquadrate
            | Self::Semisextile => StatNature::Negative,
        }
    }
}
