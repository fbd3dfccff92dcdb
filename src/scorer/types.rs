use crate::chart::{Aspect, Element, House, Placement, StatNature};
use serde::Serialize;
use std::collections::BTreeMap;

/// One aspect found between a point of each person.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AspectHit {
    pub aspect: Aspect,
    pub first: Element,
    pub second: Element,
    pub orb: f64,
    pub modifier: f64,
    pub contribution: f64,
    pub nature: StatNature,
}

/// A house of one person holding the sign of the other person's placement.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HouseOverlay {
    pub house_owner: String,
    pub placement_owner: String,
    pub house: House,
    pub element: Element,
    pub placement: Placement,
    pub stat: f64,
}

/// Everything learned about a single pair of persons.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct MatrixResult {
    pub positive: BTreeMap<Element, f64>,
    pub negative: BTreeMap<Element, f64>,
    pub overlays: Vec<HouseOverlay>,
    pub aspects: Vec<AspectHit>,
}

impl MatrixResult {
    pub fn add_positive(&mut self, element: Element, value: f64) {
        *self.positive.entry(element).or_insert(0.0) += value;
    }

    pub fn add_negative(&mut self, element: Element, value: f64) {
        *self.negative.entry(element).or_insert(0.0) += value;
    }

    pub fn positive_of(&self, element: Element) -> f64 {
        self.positive.get(&element).copied().unwrap_or(0.0)
    }

    pub fn negative_of(&self, element: Element) -> f64 {
        self.negative.get(&element).copied().unwrap_or(0.0)
    }

    pub fn positive_total(&self) -> f64 {
        self.positive.values().sum()
    }

    pub fn negative_total(&self) -> f64 {
        self.negative.values().sum()
    }

    pub fn overlay_total(&self) -> f64 {
        self.overlays.iter().map(|o| o.stat).sum()
    }
}
