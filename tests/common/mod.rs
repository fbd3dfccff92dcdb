#![allow(dead_code)]

use synastry::chart::{Element, Person, Placement};

pub const EPS: f64 = 1e-9;

pub fn at(sign: Element, degrees: f64) -> Placement {
    Placement::new(sign, degrees)
}

/// Houses whose signs none of the aspect fixtures place anything in.
fn quiet_person(name: &str, placements: [Placement; 5]) -> Person {
    let [rising, moon, sun, mars, mercury] = placements;
    Person::builder()
        .name(name)
        .rising(rising)
        .moon(moon)
        .sun(sun)
        .mars(mars)
        .mercury(mercury)
        .house_2(Element::Taurus)
        .house_3(Element::Gemini)
        .house_6(Element::Virgo)
        .house_10(Element::Scorpio)
        .house_11(Element::Sagittarius)
        .build()
}

pub fn person1() -> Person {
    use Element::*;
    quiet_person(
        "person1",
        [at(Aries, 25.0), at(Cancer, 0.0), at(Pisces, 12.0), at(Libra, 2.0), at(Leo, 24.0)],
    )
}

pub fn person2() -> Person {
    use Element::*;
    quiet_person(
        "person2",
        [at(Aries, 1.0), at(Cancer, 11.0), at(Pisces, 5.0), at(Libra, 29.0), at(Leo, 8.0)],
    )
}

pub fn person3() -> Person {
    use Element::*;
    quiet_person(
        "person3",
        [at(Aries, 24.0), at(Cancer, 14.0), at(Pisces, 4.0), at(Libra, 12.0), at(Leo, 5.0)],
    )
}

/// person1 with every optional placement filled in.
pub fn person1_full() -> Person {
    use Element::*;
    Person {
        jupiter: Some(at(Capricorn, 10.0)),
        mc: Some(at(Aquarius, 13.0)),
        neptune: Some(at(Sagittarius, 10.0)),
        pluto: Some(at(Gemini, 25.0)),
        saturn: Some(at(Taurus, 10.0)),
        uranus: Some(at(Aries, 12.0)),
        venus: Some(at(Capricorn, 10.0)),
        ..person1()
    }
}

pub fn person2_full() -> Person {
    use Element::*;
    Person {
        jupiter: Some(at(Capricorn, 5.0)),
        mc: Some(at(Aquarius, 12.0)),
        neptune: Some(at(Sagittarius, 19.0)),
        pluto: Some(at(Gemini, 24.0)),
        saturn: Some(at(Taurus, 3.0)),
        uranus: Some(at(Aries, 11.0)),
        venus: Some(at(Capricorn, 23.0)),
        ..person2()
    }
}

/// Each one's houses hold exactly the other one's placement signs.
pub fn overlay_pair() -> (Person, Person) {
    use Element::*;
    let first = Person::builder()
        .name("houses1")
        .rising(at(Virgo, 25.0))
        .moon(at(Gemini, 0.0))
        .sun(at(Aquarius, 12.0))
        .mars(at(Scorpio, 2.0))
        .mercury(at(Sagittarius, 24.0))
        .house_2(Capricorn)
        .house_3(Leo)
        .house_6(Aries)
        .house_10(Taurus)
        .house_11(Libra)
        .build();
    let second = Person::builder()
        .name("houses2")
        .rising(at(Capricorn, 1.0))
        .moon(at(Leo, 11.0))
        .sun(at(Aries, 5.0))
        .mars(at(Taurus, 29.0))
        .mercury(at(Libra, 8.0))
        .house_2(Virgo)
        .house_3(Gemini)
        .house_6(Aquarius)
        .house_10(Scorpio)
        .house_11(Sagittarius)
        .build();
    (first, second)
}

/// Deterministic pseudo-random population.
pub fn population(n: usize, seed: u64) -> Vec<Person> {
    let mut rng = fastrand::Rng::with_seed(seed);
    let signs: Vec<Element> = Element::signs().collect();
    let sign = |rng: &mut fastrand::Rng| signs[rng.usize(..signs.len())];

    (0..n)
        .map(|i| {
            let place = |rng: &mut fastrand::Rng| at(sign(rng), rng.f64() * 29.9);
            Person::builder()
                .name(format!("member{}", i))
                .rising(place(&mut rng))
                .moon(place(&mut rng))
                .sun(place(&mut rng))
                .mars(place(&mut rng))
                .mercury(place(&mut rng))
                .house_2(sign(&mut rng))
                .house_3(sign(&mut rng))
                .house_6(sign(&mut rng))
                .house_10(sign(&mut rng))
                .house_11(sign(&mut rng))
                .build()
        })
        .collect()
}
