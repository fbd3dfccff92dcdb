use crate::chart::{Element, House};
use crate::config::PlacementSet;
use crate::error::{SynResult, SynastryError};
use serde::{Deserialize, Serialize};
use typed_builder::TypedBuilder;

/// A chart point's location inside its sign. `degrees` is the source of
/// truth; the absolute wheel position is always derived from it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Placement {
    pub sign: Element,
    pub degrees: f64,
}

impl Placement {
    pub fn new(sign: Element, degrees: f64) -> Self {
        Self { sign, degrees }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TypedBuilder)]
pub struct Person {
    #[builder(setter(into))]
    pub name: String,

    // Birth placements used for scoring.
    pub rising: Placement,
    pub moon: Placement,
    pub sun: Placement,
    pub mars: Placement,
    pub mercury: Placement,

    // Optional placements, only read by the extended placement set.
    #[builder(default, setter(strip_option))]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub jupiter: Option<Placement>,
    #[builder(default, setter(strip_option))]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mc: Option<Placement>,
    #[builder(default, setter(strip_option))]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub neptune: Option<Placement>,
    #[builder(default, setter(strip_option))]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pluto: Option<Placement>,
    #[builder(default, setter(strip_option))]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub saturn: Option<Placement>,
    #[builder(default, setter(strip_option))]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub uranus: Option<Placement>,
    #[builder(default, setter(strip_option))]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub venus: Option<Placement>,

    // Signs of the weighted houses.
    pub house_2: Element,
    pub house_3: Element,
    pub house_6: Element,
    pub house_10: Element,
    pub house_11: Element,

    #[builder(default, setter(strip_option))]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub house_1: Option<Element>,
    #[builder(default, setter(strip_option))]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub house_4: Option<Element>,
    #[builder(default, setter(strip_option))]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub house_5: Option<Element>,
    #[builder(default, setter(strip_option))]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub house_7: Option<Element>,
    #[builder(default, setter(strip_option))]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub house_8: Option<Element>,
    #[builder(default, setter(strip_option))]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub house_9: Option<Element>,
    #[builder(default, setter(strip_option))]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub house_12: Option<Element>,
}

impl Person {
    /// The five required placements keyed by chart point.
    pub fn core_placements(&self) -> [(Element, Placement); 5] {
        [
            (Element::Rising, self.rising),
            (Element::Moon, self.moon),
            (Element::Sun, self.sun),
            (Element::Mars, self.mars),
            (Element::Mercury, self.mercury),
        ]
    }

    /// Optional placements that are actually present.
    pub fn optional_placements(&self) -> Vec<(Element, Placement)> {
        [
            (Element::Jupiter, self.jupiter),
            (Element::Mc, self.mc),
            (Element::Neptune, self.neptune),
            (Element::Pluto, self.pluto),
            (Element::Saturn, self.saturn),
            (Element::Uranus, self.uranus),
            (Element::Venus, self.venus),
        ]
        .into_iter()
        .filter_map(|(element, placement)| placement.map(|p| (element, p)))
        .collect()
    }

    pub fn placements(&self, set: PlacementSet) -> Vec<(Element, Placement)> {
        let mut placements = self.core_placements().to_vec();
        if set == PlacementSet::Extended {
            placements.extend(self.optional_placements());
        }
        placements
    }

    /// The five required houses, in scoring order.
    pub fn houses(&self) -> [House; 5] {
        [
            House::known(2, self.house_2),
            House::known(3, self.house_3),
            House::known(6, self.house_6),
            House::known(10, self.house_10),
            House::known(11, self.house_11),
        ]
    }

    pub fn optional_houses(&self) -> Vec<House> {
        [
            (1, self.house_1),
            (4, self.house_4),
            (5, self.house_5),
            (7, self.house_7),
            (8, self.house_8),
            (9, self.house_9),
            (12, self.house_12),
        ]
        .into_iter()
        .filter_map(|(number, sign)| sign.map(|s| House::known(number, s)))
        .collect()
    }

    /// Rejects charts the geometry cannot place on the wheel.
    pub fn validate(&self) -> SynResult<()> {
        let placements = self
            .core_placements()
            .into_iter()
            .chain(self.optional_placements());

        for (element, placement) in placements {
            if !placement.sign.is_sign() {
                return Err(SynastryError::Validation(format!(
                    "{}: {} is placed in '{}', which is not a zodiac sign",
                    self.name, element, placement.sign
                )));
            }
            if !placement.degrees.is_finite() || !(0.0..30.0).contains(&placement.degrees) {
                return Err(SynastryError::Validation(format!(
                    "{}: {} sits at {} degrees, expected a value in [0, 30)",
                    self.name, element, placement.degrees
                )));
            }
        }

        for house in self.houses().into_iter().chain(self.optional_houses()) {
            if !house.element().is_sign() {
                return Err(SynastryError::Validation(format!(
                    "{}: house {} holds '{}', which is not a zodiac sign",
                    self.name,
                    house.number(),
                    house.element()
                )));
            }
        }

        Ok(())
    }
}
