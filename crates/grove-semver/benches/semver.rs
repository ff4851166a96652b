use criterion::{black_box, criterion_group, criterion_main, Criterion};
use grove_semver::{select, Semver, Version};
use std::str::FromStr;

fn bench_parse(c: &mut Criterion) {
    let constraints = [
        "1.2.3",
        ">=1.2.0 <2.0.0",
        "1.0.0 - 2.0.0",
        "~1.2.3",
        "1.2.x || 2.x",
        "1.0.0 || 2.0.0 || 3.0.0",
        "git+https://example.com/repo.git",
        "latest",
    ];

    c.bench_function("parse_constraints", |b| {
        b.iter(|| {
            for constraint in constraints {
                black_box(Semver::parse(black_box(constraint)).ok());
            }
        })
    });
}

fn bench_matches(c: &mut Criterion) {
    let expr = Semver::parse(">=1.2.0 <2.0.0 || ~3.1").expect("parse constraint");
    let candidates: Vec<Version> = ["1.2.0", "1.9.9", "2.0.0", "3.1.4", "3.2.0", "0.1.0"]
        .iter()
        .map(|raw| Version::from_str(raw).expect(raw))
        .collect();

    c.bench_function("expression_matches", |b| {
        b.iter(|| {
            for candidate in &candidates {
                black_box(expr.matches(black_box(candidate)));
            }
        })
    });
}

fn bench_satisfied_by(c: &mut Criterion) {
    let versions = [
        "0.9.0", "1.0.0", "1.2.0", "1.2.9", "1.9.9", "2.0.0", "2.1.3", "3.0.0-beta", "3.0.0",
    ];

    c.bench_function("satisfied_by", |b| {
        b.iter(|| {
            black_box(select::satisfied_by(
                black_box(&versions),
                black_box(">=1.2.0 <2.0.0 || 3.x"),
            ));
        })
    });
}

fn bench_sort(c: &mut Criterion) {
    let versions = [
        "1.0", "0.1", "3.2.1", "2.4.0-alpha", "2.4.0", "50.2", "1.2.3", "2.4.5", "2.4.5-rc1",
    ];

    c.bench_function("sort_versions", |b| {
        b.iter(|| {
            black_box(select::sort(black_box(&versions)));
        })
    });
}

criterion_group!(benches, bench_parse, bench_matches, bench_satisfied_by, bench_sort);
criterion_main!(benches);
