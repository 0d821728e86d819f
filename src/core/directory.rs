use crate::models::{Listing, Match};
use async_trait::async_trait;
use thiserror::Error;

/// Errors surfaced by a listing directory backend
#[derive(Debug, Error)]
pub enum DirectoryError {
    /// A match already exists for the unordered listing pair. Raised by the
    /// backend when its uniqueness constraint rejects an insert that raced
    /// past the engine's pre-check.
    #[error("match already exists for this listing pair")]
    Conflict,

    #[error("directory backend error: {0}")]
    Backend(String),
}

/// The engine's view of listing and match storage
///
/// Implementations must supply fully populated `Listing` values - the engine
/// never triggers deferred I/O while reading listing fields - and must treat
/// the match pair as unordered: a match saved as (A,B) is detected when
/// queried as (B,A).
#[async_trait]
pub trait ListingDirectory: Send + Sync {
    /// Fetch a single listing by id, `None` if it does not exist
    async fn fetch_listing(&self, id: i64) -> Result<Option<Listing>, DirectoryError>;

    /// Fetch the candidate pool for a source listing: Active listings other
    /// than `exclude_id` whose have/want terms textually relate to the
    /// source's want/have terms.
    ///
    /// This is a cheap pre-screen, not the final decision; any superset of
    /// the true candidates is acceptable since the scorer re-evaluates each
    /// candidate precisely.
    async fn find_candidate_pool(
        &self,
        exclude_id: i64,
        want_term: &str,
        have_term: &str,
    ) -> Result<Vec<Listing>, DirectoryError>;

    /// Whether a match already exists for the unordered pair (a, b)
    async fn match_exists(&self, listing_a_id: i64, listing_b_id: i64)
        -> Result<bool, DirectoryError>;

    /// Persist a match, assigning its id and creation timestamp
    async fn save_match(&self, candidate: Match) -> Result<Match, DirectoryError>;
}
