mod common;

use common::{overlay_pair, person1, person1_full, person2, person2_full, person3, EPS};
use synastry::api;
use synastry::chart::Element;
use synastry::config::{PlacementSet, ScoringParams};
use synastry::scorer::matrix::reduce;

fn core() -> ScoringParams {
    ScoringParams::default()
}

fn extended() -> ScoringParams {
    ScoringParams {
        placements: PlacementSet::Extended,
        ..ScoringParams::default()
    }
}

fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < EPS,
        "expected {}, got {}",
        expected,
        actual
    );
}

#[test]
fn test_regression_core_accumulators() {
    let result = api::compare(&person1(), &person2(), &core()).unwrap();

    assert_close(result.positive_of(Element::Rising), 6.0);
    assert_close(result.positive_of(Element::Moon), 28.0);
    assert_close(result.positive_of(Element::Sun), 32.0);
    assert_close(result.positive_of(Element::Mars), 12.0);
    assert_close(result.positive_of(Element::Mercury), 12.0);

    assert_close(result.negative_of(Element::Rising), 34.5);
    assert_close(result.negative_of(Element::Moon), 18.0);
    assert_close(result.negative_of(Element::Sun), 6.0);
    assert_close(result.negative_of(Element::Mars), 28.5);
    assert_close(result.negative_of(Element::Mercury), 6.0);

    assert_eq!(result.aspects.len(), 11);
    assert!(result.overlays.is_empty());
    assert_close(reduce(&result, 20.0), -3.0);
}

#[test]
fn test_regression_full_chart_accumulators() {
    let result = api::compare(&person1_full(), &person2_full(), &extended()).unwrap();

    // Every optional placement present on both sides
    assert_close(result.negative_of(Element::Rising), 61.0);
    assert_close(result.positive_of(Element::Rising), 35.5);
    assert_close(result.positive_of(Element::Sun), 32.0);
    assert_close(result.positive_of(Element::Uranus), 62.0);
    assert_close(result.negative_of(Element::Uranus), 82.5);
    assert_close(result.positive_of(Element::Mc), 57.0);
    assert_close(result.negative_of(Element::Venus), 59.5);
}

#[test]
fn test_optional_placements_ignored_by_default() {
    let plain = api::compare(&person1(), &person2(), &core()).unwrap();
    let full = api::compare(&person1_full(), &person2_full(), &core()).unwrap();
    assert_eq!(plain.positive, full.positive);
    assert_eq!(plain.negative, full.negative);
}

#[test]
fn test_regression_pair_scores() {
    let p13 = api::compare(&person3(), &person1(), &core()).unwrap();
    assert_close(reduce(&p13, 20.0), 101.0);

    let p23 = api::compare(&person3(), &person2(), &core()).unwrap();
    assert_close(reduce(&p23, 20.0), 26.0);
}

#[test]
fn test_pair_score_is_order_independent() {
    let ab = api::compare(&person1(), &person2(), &core()).unwrap();
    let ba = api::compare(&person2(), &person1(), &core()).unwrap();
    assert_eq!(ab.positive, ba.positive);
    assert_eq!(ab.negative, ba.negative);
    assert_close(reduce(&ab, 20.0), reduce(&ba, 20.0));
}

#[test]
fn test_overlays_dominate_reduced_score() {
    let (first, second) = overlay_pair();
    let result = api::compare(&first, &second, &core()).unwrap();
    assert_close(result.overlay_total(), 74.0);

    let aspects_only = result.positive_total() - result.negative_total();
    assert_close(reduce(&result, 20.0), 74.0 * 20.0 + aspects_only);
    assert_close(reduce(&result, 1.0), 74.0 + aspects_only);
}
