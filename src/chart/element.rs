use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;
use strum_macros::{Display, EnumIter, EnumString};

/// Every token a chart can carry: the twelve zodiac signs (declared in
/// wheel order, so a sign's discriminant is its index) followed by the
/// chart points placements are keyed by.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    EnumIter,
    EnumString,
    Display,
)]
#[strum(ascii_case_insensitive)]
pub enum Element {
    Aries,
    Taurus,
    Gemini,
    Cancer,
    Leo,
    Virgo,
    Libra,
    Scorpio,
    Sagittarius,
    Capricorn,
    Aquarius,
    Pisces,

    Rising,
    Moon,
    Sun,
    Mars,
    Mercury,
    Jupiter,
    #[serde(rename = "MC")]
    #[strum(serialize = "MC")]
    Mc,
    Neptune,
    Pluto,
    Saturn,
    Uranus,
    Venus,
    // Reserved: derived from Rising/MC, never scored.
    #[serde(rename = "DC")]
    #[strum(serialize = "DC")]
    Dc,
    #[serde(rename = "IC")]
    #[strum(serialize = "IC")]
    Ic,
}

pub const SIGN_COUNT: usize = 12;

/// Points that turn an otherwise benign conjunction into a mixed one.
pub const MALEFIC_POINTS: [Element; 5] = [
    Element::Mars,
    Element::Neptune,
    Element::Pluto,
    Element::Saturn,
    Element::Uranus,
];

impl Element {
    /// Position of a sign on the wheel (Aries = 0 .. Pisces = 11).
    pub fn sign_index(self) -> Option<usize> {
        let idx = self as usize;
        if idx < SIGN_COUNT {
            Some(idx)
        } else {
            None
        }
    }

    pub fn is_sign(self) -> bool {
        self.sign_index().is_some()
    }

    pub fn is_malefic(self) -> bool {
        MALEFIC_POINTS.contains(&self)
    }

    pub fn signs() -> impl Iterator<Item = Element> {
        Element::iter().take(SIGN_COUNT)
    }
}
