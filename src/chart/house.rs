use crate::chart::Element;
use crate::error::{SynResult, SynastryError};
use serde::{Deserialize, Serialize};

/// House number -> weight. Index 0 is house 1.
pub const HOUSE_WEIGHTS: [f64; 12] = [0.0, 1.0, 3.0, 0.0, 0.0, 4.0, 0.0, 0.0, 0.0, 5.0, 1.0, 0.0];

/// The houses every person must supply, in scoring order.
pub const REQUIRED_HOUSES: [u8; 5] = [2, 3, 6, 10, 11];

pub fn house_weight(number: u8) -> f64 {
    match number {
        1..=12 => HOUSE_WEIGHTS[(number - 1) as usize],
        _ => 0.0,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct House {
    number: u8,
    element: Element,
}

impl House {
    pub fn new(number: u8, element: Element) -> SynResult<Self> {
        if !(1..=12).contains(&number) {
            return Err(SynastryError::Validation(format!(
                "house number {} is outside 1..=12",
                number
            )));
        }
        Ok(Self { number, element })
    }

    /// Caller guarantees `number` is in 1..=12.
    pub(crate) const fn known(number: u8, element: Element) -> Self {
        Self { number, element }
    }

    pub fn number(&self) -> u8 {
        self.number
    }

    /// The sign occupying the house.
    pub fn element(&self) -> Element {
        self.element
    }

    pub fn weight(&self) -> f64 {
        house_weight(self.number)
    }
}
