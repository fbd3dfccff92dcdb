use crate::chart::{Element, Person, Placement};
use crate::config::PlacementSet;
use crate::error::{SynResult, SynastryError};
use serde::Serialize;

pub const SIGN_SPAN: f64 = 30.0;
pub const FULL_CIRCLE: f64 = 360.0;

/// Start of a sign on the wheel (Aries 0, Taurus 30, ... Pisces 330).
pub fn sign_offset(sign: Element) -> Option<f64> {
    sign.sign_index().map(|idx| idx as f64 * SIGN_SPAN)
}

/// Absolute wheel position of a placement, always in [0, 360).
pub fn absolute_degrees(placement: &Placement) -> SynResult<f64> {
    let offset = sign_offset(placement.sign).ok_or_else(|| {
        SynastryError::Validation(format!(
            "'{}' is not a zodiac sign and has no wheel offset",
            placement.sign
        ))
    })?;
    Ok((placement.degrees + offset).rem_euclid(FULL_CIRCLE))
}

/// A placement together with its derived wheel position.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct WheelPoint {
    pub element: Element,
    pub placement: Placement,
    pub position: f64,
}

/// Projects a person's placements onto the wheel. The person is never
/// touched, so normalizing twice yields the same points.
pub fn normalize(person: &Person, set: PlacementSet) -> SynResult<Vec<WheelPoint>> {
    person
        .placements(set)
        .into_iter()
        .map(|(element, placement)| {
            Ok(WheelPoint {
                element,
                placement,
                position: absolute_degrees(&placement)?,
            })
        })
        .collect()
}
