use core::{index, CatalogRecord};
use criterion::{criterion_group, criterion_main, Criterion};

const GENRE_SETS: &[&str] = &[
    "Dramas, International Movies",
    "Comedies, Romantic Movies",
    "Action & Adventure, Sci-Fi & Fantasy",
    "Documentaries",
    "Kids' TV, TV Comedies",
    "Horror Movies, Thrillers",
];

fn bench_build(c: &mut Criterion) {
    let records: Vec<CatalogRecord> = (0..5000)
        .map(|i| CatalogRecord {
            title: format!("Title {i}"),
            director: None,
            genres: GENRE_SETS[i % GENRE_SETS.len()].to_string(),
        })
        .collect();
    c.bench_function("index_build_5k", |b| b.iter(|| index::build(&records)));
}

criterion_group!(benches, bench_build);
criterion_main!(benches);
