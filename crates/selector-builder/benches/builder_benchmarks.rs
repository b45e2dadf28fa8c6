use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use selector_builder::{Combinator, combine, element, parse_selector};

fn bench_build_chain(c: &mut Criterion) {
    c.bench_function("build_full_chain", |b| {
        b.iter(|| {
            element(black_box("input"))
                .and_then(|s| s.id("email"))
                .and_then(|s| s.class("field"))
                .and_then(|s| s.class("wide"))
                .and_then(|s| s.attr("type=email"))
                .and_then(|s| s.pseudo_class("focus"))
                .and_then(|s| s.pseudo_element("placeholder"))
        })
    });
}

fn bench_combine(c: &mut Criterion) {
    let left = element("div").and_then(|s| s.id("main")).unwrap();
    let right = element("table").and_then(|s| s.id("data")).unwrap();

    c.bench_function("combine_and_stringify", |b| {
        b.iter(|| combine(black_box(&left), Combinator::AdjacentSibling, black_box(&right)).stringify())
    });
}

fn bench_parse(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse_selector");

    let cases = [
        ("compound", "a#home.nav.main[href]:hover::after"),
        ("descendant", "nav ul li a"),
        (
            "nested",
            "div#main.container.draggable + table#data ~ tr:nth-of-type(even)   td:nth-of-type(even)",
        ),
    ];

    for (name, text) in cases {
        group.bench_with_input(BenchmarkId::new("parse", name), &text, |b, text| {
            b.iter(|| parse_selector(black_box(text)))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_build_chain, bench_combine, bench_parse);
criterion_main!(benches);
