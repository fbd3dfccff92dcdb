use crate::chart::{Aspect, StatNature, ALL_ASPECTS};
use crate::scorer::degrees::{WheelPoint, FULL_CIRCLE};
use crate::scorer::types::{AspectHit, MatrixResult};

/// Widest orb in the catalogue. A raw offset beyond it means the aspect was
/// found on the long arc.
pub const LARGEST_ALLOWED_ORB: f64 = 10.0;

#[inline]
fn ordered(a: f64, b: f64) -> (f64, f64) {
    if a >= b {
        (a, b)
    } else {
        (b, a)
    }
}

#[inline]
fn within(value: f64, centre: f64, orb: f64) -> bool {
    value >= centre - orb && value <= centre + orb
}

/// True when the two positions form `aspect` on either arc of the wheel.
pub fn in_aspect(aspect: Aspect, a: f64, b: f64) -> bool {
    let (hi, lo) = ordered(a, b);
    let separation = aspect.separation();
    let orb = aspect.allowed_orb();

    within(hi, lo + separation, orb) || within(hi, lo + (FULL_CIRCLE - separation), orb)
}

/// Signed offset from the exact aspect. Only meaningful when `in_aspect`
/// holds for the same inputs.
pub fn orb(aspect: Aspect, a: f64, b: f64) -> f64 {
    let (hi, lo) = ordered(a, b);
    let raw = hi - lo - aspect.separation();
    if raw > LARGEST_ALLOWED_ORB {
        hi - lo - (FULL_CIRCLE - aspect.separation())
    } else {
        raw
    }
}

/// Tier multiplier for a matched aspect. The orb is compared signed.
pub fn orb_modifier(aspect: Aspect, orb: f64) -> f64 {
    if orb < 2.0 {
        3.0
    } else if orb < aspect.allowed_orb() / 2.0 + 1.0 {
        2.0
    } else {
        1.0
    }
}

/// Scans every point pair against the whole catalogue and accumulates each
/// match. Overlapping windows are not deduplicated.
pub fn score_aspects(first: &[WheelPoint], second: &[WheelPoint], result: &mut MatrixResult) {
    for a in first {
        for b in second {
            for aspect in ALL_ASPECTS {
                if !in_aspect(aspect, a.position, b.position) {
                    continue;
                }

                let offset = orb(aspect, a.position, b.position);
                let modifier = orb_modifier(aspect, offset);
                let contribution = aspect.stat() * modifier;
                let nature = aspect.nature(a.element, b.element);

                match nature {
                    StatNature::Positive => {
                        result.add_positive(a.element, contribution);
                        result.add_positive(b.element, contribution);
                    }
                    StatNature::Negative => {
                        result.add_negative(a.element, contribution);
                        result.add_negative(b.element, contribution);
                    }
                    StatNature::Mixed => {
                        let half = contribution / 2.0;
                        result.add_positive(a.element, half);
                        result.add_positive(b.element, half);
                        result.add_negative(a.element, half);
                        result.add_negative(b.element, half);
                    }
                }

                result.aspects.push(AspectHit {
                    aspect,
                    first: a.element,
                    second: b.element,
                    orb: offset,
                    modifier,
                    contribution,
                    nature,
                });
            }
        }
    }
}
