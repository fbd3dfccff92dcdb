mod common;

use common::{at, EPS};
use rstest::rstest;
use synastry::chart::{Aspect, Element, StatNature};
use synastry::scorer::aspects::{in_aspect, orb, orb_modifier, score_aspects};
use synastry::scorer::degrees::WheelPoint;
use synastry::scorer::MatrixResult;

fn point(element: Element, position: f64) -> WheelPoint {
    WheelPoint {
        element,
        placement: at(Element::Aries, 0.0),
        position,
    }
}

#[rstest]
#[case(Aspect::Conjunction, 25.0, 24.0, true)]
#[case(Aspect::Conjunction, 0.0, 10.0, true)]
#[case(Aspect::Conjunction, 0.0, 10.5, false)]
#[case(Aspect::Conjunction, 355.0, 3.0, true)]
#[case(Aspect::Opposition, 0.0, 190.0, true)]
#[case(Aspect::Opposition, 0.0, 191.0, false)]
#[case(Aspect::Square, 10.0, 100.0, true)]
#[case(Aspect::Square, 10.0, 280.0, true)]
#[case(Aspect::Trine, 350.0, 110.0, true)]
#[case(Aspect::Sextile, 0.0, 65.0, false)]
#[case(Aspect::Quintile, 0.0, 73.0, true)]
#[case(Aspect::Quincunx, 200.0, 50.0, true)]
fn test_in_aspect(#[case] aspect: Aspect, #[case] a: f64, #[case] b: f64, #[case] expected: bool) {
    assert_eq!(in_aspect(aspect, a, b), expected);
    assert_eq!(in_aspect(aspect, b, a), expected);
}

#[rstest]
#[case(Aspect::Square, 10.0, 100.0, 0.0)]
#[case(Aspect::Trine, 350.0, 110.0, 0.0)]
#[case(Aspect::Conjunction, 358.0, 2.0, -4.0)]
#[case(Aspect::Conjunction, 24.0, 25.0, 1.0)]
#[case(Aspect::Opposition, 0.0, 175.0, -5.0)]
fn test_orb(#[case] aspect: Aspect, #[case] a: f64, #[case] b: f64, #[case] expected: f64) {
    assert!((orb(aspect, a, b) - expected).abs() < EPS);
}

#[rstest]
#[case(Aspect::Conjunction, 1.9, 3.0)]
#[case(Aspect::Conjunction, 5.9, 2.0)]
#[case(Aspect::Conjunction, 6.0, 1.0)]
#[case(Aspect::Sextile, 2.5, 2.0)]
#[case(Aspect::Sextile, 3.0, 1.0)]
#[case(Aspect::Quintile, 1.0, 3.0)]
#[case(Aspect::Quintile, 2.0, 1.0)]
fn test_orb_modifier(#[case] aspect: Aspect, #[case] orb: f64, #[case] expected: f64) {
    assert_eq!(orb_modifier(aspect, orb), expected);
}

#[test]
fn test_conjunction_nature_depends_on_malefics() {
    let c = Aspect::Conjunction;
    assert_eq!(c.nature(Element::Rising, Element::Sun), StatNature::Positive);
    assert_eq!(c.nature(Element::Mercury, Element::Moon), StatNature::Positive);
    for malefic in [
        Element::Mars,
        Element::Neptune,
        Element::Pluto,
        Element::Saturn,
        Element::Uranus,
    ] {
        assert_eq!(c.nature(malefic, Element::Sun), StatNature::Mixed);
        assert_eq!(c.nature(Element::Moon, malefic), StatNature::Mixed);
    }
    assert_eq!(
        Aspect::Square.nature(Element::Mars, Element::Sun),
        StatNature::Negative
    );
    assert_eq!(
        Aspect::Biquintile.nature(Element::Mars, Element::Sun),
        StatNature::Positive
    );
}

#[test]
fn test_positive_conjunction_feeds_both_points() {
    let mut result = MatrixResult::default();
    score_aspects(
        &[point(Element::Rising, 25.0)],
        &[point(Element::Sun, 24.0)],
        &mut result,
    );

    assert_eq!(result.aspects.len(), 1);
    assert_eq!(result.aspects[0].nature, StatNature::Positive);
    assert_eq!(result.positive_of(Element::Rising), 15.0);
    assert_eq!(result.positive_of(Element::Sun), 15.0);
    assert!(result.negative.is_empty());
}

#[test]
fn test_mixed_conjunction_is_split_in_half() {
    let mut result = MatrixResult::default();
    score_aspects(
        &[point(Element::Mars, 10.0)],
        &[point(Element::Sun, 11.0)],
        &mut result,
    );

    // 5.0 stat x3 modifier, halved into each accumulator
    for element in [Element::Mars, Element::Sun] {
        assert_eq!(result.positive_of(element), 7.5);
        assert_eq!(result.negative_of(element), 7.5);
    }
}

#[test]
fn test_same_point_on_both_sides_counts_twice() {
    let mut result = MatrixResult::default();
    score_aspects(
        &[point(Element::Moon, 0.0)],
        &[point(Element::Moon, 90.0)],
        &mut result,
    );
    // Exact square: 4.0 x3, once per side
    assert_eq!(result.negative_of(Element::Moon), 24.0);
}

#[test]
fn test_unrelated_positions_score_nothing() {
    let mut result = MatrixResult::default();
    score_aspects(
        &[point(Element::Sun, 0.0)],
        &[point(Element::Moon, 20.0)],
        &mut result,
    );
    assert!(result.aspects.is_empty());
    assert!(result.positive.is_empty());
    assert!(result.negative.is_empty());
}
