use criterion::{black_box, criterion_group, criterion_main, Criterion};

use election_atlas::dataset;
use election_atlas::search::{filter_results, record_matches, SearchFacets, SearchMode};

fn bench_record_matching(c: &mut Criterion) {
    let catalog = dataset::sample_catalog();
    let records = catalog.voter_records();
    let facets = SearchFacets::default();

    c.bench_function("record_matches_name", |b| {
        b.iter(|| {
            let hits = records
                .iter()
                .filter(|r| record_matches(black_box(r), SearchMode::Name, "राम", &facets))
                .count();
            black_box(hits);
        });
    });

    c.bench_function("record_matches_location", |b| {
        b.iter(|| {
            let hits = records
                .iter()
                .filter(|r| record_matches(black_box(r), SearchMode::Location, "pokhara", &facets))
                .count();
            black_box(hits);
        });
    });
}

fn bench_results_filter(c: &mut Criterion) {
    let catalog = dataset::sample_catalog();

    c.bench_function("filter_results_by_district", |b| {
        b.iter(|| {
            let rows = filter_results(black_box(catalog.results()), "kathmandu", None);
            black_box(rows);
        });
    });
}

criterion_group!(benches, bench_record_matching, bench_results_filter);
criterion_main!(benches);
