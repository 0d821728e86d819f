use crate::models::{Listing, ScoringWeights};

/// Weight of the item-similarity signal in the combined score
pub const ITEM_WEIGHT: f64 = 0.7;

/// Weight of the location-proximity signal in the combined score
pub const LOCATION_WEIGHT: f64 = 0.3;

/// Item score for a perfect bidirectional have/want match
pub const PERFECT_ITEM_SCORE: f64 = 1.0;

/// Item score when only one direction of the have/want pair matches
pub const PARTIAL_ITEM_SCORE: f64 = 0.7;

/// Neutral location score when either owner has no location on file
pub const NEUTRAL_LOCATION_SCORE: f64 = 0.5;

/// Location score for differing, non-empty locations
pub const DIFFERENT_LOCATION_SCORE: f64 = 0.3;

/// Words this short never count toward the fuzzy score
const MIN_FUZZY_WORD_LEN: usize = 3;

/// Calculate the item-similarity score (0-1) between two listings
///
/// Checks exact (case-insensitive substring) containment in both trade
/// directions first, then falls back to a crude word-overlap fuzzy score.
/// The fuzzy policy is intentionally simple - substring containment rather
/// than edit distance - and downstream thresholds are tuned to it.
pub fn item_match_score(a: &Listing, b: &Listing) -> f64 {
    let direct_match = contains_ignore_case(&a.have_item, &b.want_item);
    let reverse_match = contains_ignore_case(&a.want_item, &b.have_item);

    if direct_match && reverse_match {
        return PERFECT_ITEM_SCORE;
    } else if direct_match || reverse_match {
        return PARTIAL_ITEM_SCORE;
    }

    // Neither direction contains outright - fall back to fuzzy word overlap
    let have_want = fuzzy_match(&a.have_item, &b.want_item);
    let want_have = fuzzy_match(&a.want_item, &b.have_item);

    have_want.max(want_have)
}

/// Calculate the location-proximity score (0-1) between two listings
///
/// Locations are free text supplied by the owners. A missing location on
/// either side degrades to a neutral score rather than failing.
pub fn location_score(a: &Listing, b: &Listing) -> f64 {
    match (&a.location, &b.location) {
        (Some(loc_a), Some(loc_b)) => {
            if loc_a.to_lowercase() == loc_b.to_lowercase() {
                1.0
            } else {
                DIFFERENT_LOCATION_SCORE
            }
        }
        _ => NEUTRAL_LOCATION_SCORE,
    }
}

/// Weighted combination of item and location similarity, in [0,1]
pub fn combined_score(a: &Listing, b: &Listing, weights: &ScoringWeights) -> f64 {
    item_match_score(a, b) * weights.item + location_score(a, b) * weights.location
}

/// Word-overlap fuzzy score between two texts (0-1)
///
/// Both texts are lowercased and split on whitespace. Every ordered word
/// pair where the first word is longer than `MIN_FUZZY_WORD_LEN` counts as a
/// match if either word contains the other; the count is divided by the
/// larger word count. Empty text on either side scores 0.0.
pub fn fuzzy_match(text1: &str, text2: &str) -> f64 {
    let text1 = text1.to_lowercase();
    let text2 = text2.to_lowercase();

    let words1: Vec<&str> = text1.split_whitespace().collect();
    let words2: Vec<&str> = text2.split_whitespace().collect();

    let total_words = words1.len().max(words2.len());
    if total_words == 0 {
        return 0.0;
    }

    let mut matches = 0usize;
    for word1 in &words1 {
        for word2 in &words2 {
            if word1.chars().count() > MIN_FUZZY_WORD_LEN
                && (word1.contains(word2) || word2.contains(word1))
            {
                matches += 1;
            }
        }
    }

    matches as f64 / total_words as f64
}

/// Case-insensitive substring containment
#[inline]
fn contains_ignore_case(text: &str, search: &str) -> bool {
    text.to_lowercase().contains(&search.to_lowercase())
}
