// Core algorithm exports
pub mod directory;
pub mod engine;
pub mod similarity;

pub use directory::{DirectoryError, ListingDirectory};
pub use engine::{canonical_pair, EngineError, MatchEngine, MatchResult, MIN_MATCH_SCORE};
pub use similarity::{combined_score, fuzzy_match, item_match_score, location_score};
