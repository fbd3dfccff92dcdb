use criterion::{criterion_group, criterion_main, Criterion};
use std::hint::black_box;
use synastry::chart::{Element, Person, Placement};
use synastry::config::{ScoringParams, TeamParams};
use synastry::optimizer;
use synastry::scorer::Scorer;

fn sign(i: usize) -> Element {
    Element::signs().nth(i % 12).expect("twelve signs")
}

fn population(n: usize) -> Vec<Person> {
    let mut rng = fastrand::Rng::with_seed(42);
    let place = |rng: &mut fastrand::Rng| Placement::new(sign(rng.usize(..12)), rng.f64() * 29.9);

    (0..n)
        .map(|i| {
            Person::builder()
                .name(format!("p{}", i))
                .rising(place(&mut rng))
                .moon(place(&mut rng))
                .sun(place(&mut rng))
                .mars(place(&mut rng))
                .mercury(place(&mut rng))
                .house_2(sign(rng.usize(..12)))
                .house_3(sign(rng.usize(..12)))
                .house_6(sign(rng.usize(..12)))
                .house_10(sign(rng.usize(..12)))
                .house_11(sign(rng.usize(..12)))
                .build()
        })
        .collect()
}

fn criterion_benchmark(c: &mut Criterion) {
    let persons = population(60);
    let scorer = Scorer::new(ScoringParams::default());

    c.bench_function("compare_pair", |b| {
        b.iter(|| scorer.compare_pair(black_box(&persons[0]), black_box(&persons[1])))
    });

    c.bench_function("score_matrix (60 persons)", |b| {
        b.iter(|| scorer.score_matrix(black_box(&persons)))
    });

    let matrix = scorer.score_matrix(&persons).expect("valid population");
    let params = TeamParams {
        max_count_per_team: Some(5),
        iterations: 50,
        seed: Some(7),
        ..TeamParams::default()
    };
    c.bench_function("build_teams (60 persons, 50 iterations)", |b| {
        b.iter(|| optimizer::build_teams(black_box(&persons), matrix.clone(), &params))
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
