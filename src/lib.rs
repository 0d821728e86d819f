//! Bartr Match - listing matching engine for the bartr bartering marketplace
//!
//! Users post listings describing an item they have and an item they want;
//! this service discovers and scores candidate trades between listings and
//! records accepted pairings. Scoring combines fuzzy item-text similarity
//! with location proximity under fixed weights.

pub mod config;
pub mod core;
pub mod models;
pub mod routes;
pub mod services;

// Re-export commonly used types
pub use self::core::{
    canonical_pair, DirectoryError, EngineError, ListingDirectory, MatchEngine, MatchResult,
    MIN_MATCH_SCORE,
};
pub use self::models::{
    CreateMatchRequest, Listing, ListingStatus, Match, MatchStatus, ScoringWeights,
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_library_exports() {
        // Verify that the library exports work correctly
        assert_eq!(canonical_pair(9, 4), (4, 9));
        assert_eq!(MIN_MATCH_SCORE, 0.5);
    }
}
