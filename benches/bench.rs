// Criterion benchmarks for the bartr match scorer

use bartr_match::core::{combined_score, fuzzy_match, item_match_score};
use bartr_match::models::{Listing, ListingStatus, ScoringWeights};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

fn create_listing(id: i64, have: &str, want: &str, location: Option<&str>) -> Listing {
    Listing {
        id,
        user_id: id * 10,
        title: format!("{} for {}", have, want),
        have_item: have.to_string(),
        want_item: want.to_string(),
        have_description: None,
        want_description: None,
        location: location.map(|l| l.to_string()),
        status: ListingStatus::Active,
        created_at: None,
    }
}

fn create_candidates(count: usize) -> Vec<Listing> {
    let items = [
        "Mountain Bike",
        "Acoustic Guitar",
        "Vintage Synthesizer",
        "Espresso Machine",
        "Film Camera",
        "Record Player",
        "Telescope",
        "Kayak",
    ];
    let locations = [Some("Downtown"), Some("Midtown"), None];

    (0..count)
        .map(|i| {
            create_listing(
                i as i64 + 2,
                items[i % items.len()],
                items[(i + 3) % items.len()],
                locations[i % locations.len()],
            )
        })
        .collect()
}

fn bench_scoring(c: &mut Criterion) {
    let source = create_listing(1, "Mountain Bike", "Acoustic Guitar", Some("Downtown"));
    let counterpart = create_listing(2, "Guitar", "Bike", Some("Downtown"));
    let unrelated = create_listing(3, "Espresso Machine", "Record Player", Some("Midtown"));
    let weights = ScoringWeights::default();

    c.bench_function("item_match_score_containment", |b| {
        b.iter(|| item_match_score(black_box(&source), black_box(&counterpart)))
    });

    // Worst case: no containment, full word-pair fuzzy comparison
    c.bench_function("item_match_score_fuzzy", |b| {
        b.iter(|| item_match_score(black_box(&source), black_box(&unrelated)))
    });

    c.bench_function("combined_score", |b| {
        b.iter(|| combined_score(black_box(&source), black_box(&counterpart), &weights))
    });
}

fn bench_fuzzy_text_length(c: &mut Criterion) {
    let mut group = c.benchmark_group("fuzzy_match_words");

    for words in [2usize, 8, 32] {
        let text: Vec<String> = (0..words).map(|i| format!("item{:03}", i)).collect();
        let text = text.join(" ");

        group.bench_with_input(BenchmarkId::from_parameter(words), &text, |b, text| {
            b.iter(|| fuzzy_match(black_box(text), black_box("vintage camera lens kit")))
        });
    }

    group.finish();
}

fn bench_candidate_pool_scoring(c: &mut Criterion) {
    let source = create_listing(1, "Mountain Bike", "Acoustic Guitar", Some("Downtown"));
    let weights = ScoringWeights::default();
    let mut group = c.benchmark_group("score_candidate_pool");

    for size in [10usize, 100, 1000] {
        let candidates = create_candidates(size);

        group.bench_with_input(BenchmarkId::from_parameter(size), &candidates, |b, pool| {
            b.iter(|| {
                pool.iter()
                    .map(|candidate| combined_score(black_box(&source), candidate, &weights))
                    .filter(|score| *score >= 0.5)
                    .count()
            })
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_scoring,
    bench_fuzzy_text_length,
    bench_candidate_pool_scoring
);
criterion_main!(benches);
