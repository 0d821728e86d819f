// Unit tests for the bartr match scorer

use bartr_match::core::{
    combined_score, fuzzy_match, item_match_score, location_score, MIN_MATCH_SCORE,
};
use bartr_match::models::{Listing, ListingStatus, ScoringWeights};

fn create_listing(have: &str, want: &str, location: Option<&str>) -> Listing {
    Listing {
        id: 1,
        user_id: 1,
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

#[test]
fn test_item_score_perfect_cross_containment() {
    let a = create_listing("Road Bike", "Film Camera", None);
    let b = create_listing("Camera", "Bike", None);

    assert_eq!(item_match_score(&a, &b), 1.0);
}

#[test]
fn test_item_score_partial_single_direction() {
    // Direct: "Road Bike" contains "Bike"; reverse: "Film Camera" does not
    // contain "Telescope"
    let a = create_listing("Road Bike", "Film Camera", None);
    let b = create_listing("Telescope", "Bike", None);

    assert_eq!(item_match_score(&a, &b), 0.7);
}

#[test]
fn test_item_score_containment_is_case_insensitive() {
    let a = create_listing("ROAD BIKE", "camera", None);
    let b = create_listing("CAMERA", "road bike", None);

    assert_eq!(item_match_score(&a, &b), 1.0);
}

#[test]
fn test_item_score_fuzzy_fallback_below_one() {
    // Word-level overlap only: score stays in [0, 1)
    let a = create_listing("Electric Guitar", "Analog synthesizer", None);
    let b = create_listing("Vintage Synthesizer", "Guitar amp", None);

    let score = item_match_score(&a, &b);
    assert!(score > 0.0 && score < 1.0);
    assert!((score - 0.5).abs() < 1e-9);
}

#[test]
fn test_fuzzy_short_words_never_match() {
    assert_eq!(fuzzy_match("pot pan cup", "cup pan pot"), 0.0);
}

#[test]
fn test_fuzzy_empty_inputs() {
    assert_eq!(fuzzy_match("", "anything at all"), 0.0);
    assert_eq!(fuzzy_match("anything at all", ""), 0.0);
}

#[test]
fn test_fuzzy_normalizes_by_longer_text() {
    // One matching word pair over max(1, 4) words
    let score = fuzzy_match("telescope", "telescope tripod carry case");
    assert!((score - 0.25).abs() < 1e-9);
}

#[test]
fn test_location_score_cases() {
    let downtown = create_listing("Bike", "Camera", Some("Downtown"));
    let downtown_upper = create_listing("Camera", "Bike", Some("DOWNTOWN"));
    let midtown = create_listing("Camera", "Bike", Some("Midtown"));
    let nowhere = create_listing("Camera", "Bike", None);

    assert_eq!(location_score(&downtown, &downtown_upper), 1.0);
    assert_eq!(location_score(&downtown, &midtown), 0.3);
    assert_eq!(location_score(&downtown, &nowhere), 0.5);
    assert_eq!(location_score(&nowhere, &nowhere), 0.5);
}

#[test]
fn test_combined_score_stays_in_unit_interval() {
    let weights = ScoringWeights::default();
    let listings = [
        create_listing("Road Bike", "Film Camera", Some("Downtown")),
        create_listing("Camera", "Bike", Some("Downtown")),
        create_listing("Espresso Machine", "Record Player", Some("Midtown")),
        create_listing("Telescope", "Bike", None),
    ];

    for a in &listings {
        for b in &listings {
            let score = combined_score(a, b, &weights);
            assert!(
                (0.0..=1.0).contains(&score),
                "score {} out of range for {:?} vs {:?}",
                score,
                a.have_item,
                b.have_item
            );
        }
    }
}

#[test]
fn test_unrelated_different_location_pair_misses_threshold() {
    // Identical, non-overlapping item text with differing locations scores
    // at most 0.09 and never qualifies for discovery
    let a = create_listing("Espresso Machine", "Record Player", Some("Downtown"));
    let b = create_listing("Espresso Machine", "Record Player", Some("Midtown"));

    let score = combined_score(&a, &b, &ScoringWeights::default());
    assert!(score < MIN_MATCH_SCORE);
    assert!(score <= 0.09 + 1e-9);
}

#[test]
fn test_perfect_pair_clears_threshold() {
    let a = create_listing("Road Bike", "Film Camera", Some("Downtown"));
    let b = create_listing("Camera", "Bike", Some("Downtown"));

    let score = combined_score(&a, &b, &ScoringWeights::default());
    assert!(score >= MIN_MATCH_SCORE);
    assert!((score - 1.0).abs() < 1e-9);
}
