use crate::core::directory::{DirectoryError, ListingDirectory};
use crate::core::similarity::combined_score;
use crate::models::{Listing, Match, MatchStatus, ScoringWeights};
use thiserror::Error;

/// Minimum combined score for a discovered pairing to qualify as a match
pub const MIN_MATCH_SCORE: f64 = 0.5;

/// Errors surfaced by the match engine
#[derive(Debug, Error)]
pub enum EngineError {
    #[error("listing {0} not found")]
    ListingNotFound(i64),

    #[error("match already exists between listings {0} and {1}")]
    MatchExists(i64, i64),

    #[error("listing directory error: {0}")]
    Directory(String),
}

impl From<DirectoryError> for EngineError {
    fn from(err: DirectoryError) -> Self {
        EngineError::Directory(err.to_string())
    }
}

/// Canonical ordering for an unordered listing pair
///
/// Storage and lookups key matches on (min, max) so that (A,B) and (B,A)
/// denote the same entity.
#[inline]
pub fn canonical_pair(a: i64, b: i64) -> (i64, i64) {
    if a <= b {
        (a, b)
    } else {
        (b, a)
    }
}

/// Result of the discovery process
#[derive(Debug)]
pub struct MatchResult {
    pub matches: Vec<Match>,
    pub total_candidates: usize,
}

/// Match engine - discovers, scores, and records listing pairings
///
/// Discovery asks the directory for a coarse candidate pool, scores each
/// candidate precisely, and keeps only pairings above the acceptance
/// threshold. The explicit pairing path scores any two listings and persists
/// the result, enforcing one match per unordered pair.
#[derive(Debug, Clone)]
pub struct MatchEngine {
    weights: ScoringWeights,
    min_score: f64,
}

impl MatchEngine {
    pub fn new(weights: ScoringWeights, min_score: f64) -> Self {
        Self { weights, min_score }
    }

    pub fn with_default_weights() -> Self {
        Self {
            weights: ScoringWeights::default(),
            min_score: MIN_MATCH_SCORE,
        }
    }

    /// Discover and rank candidate matches for a listing
    ///
    /// Fetches the source listing, scores every listing in the directory's
    /// candidate pool, drops pairings below the threshold, and returns the
    /// survivors ordered by descending score. The returned matches are
    /// ephemeral - nothing is persisted on this path.
    ///
    /// Note: the ordering is an enhancement over the original service, which
    /// returned matches in candidate-pool order.
    pub async fn find_potential_matches(
        &self,
        directory: &dyn ListingDirectory,
        listing_id: i64,
    ) -> Result<MatchResult, EngineError> {
        let source = directory
            .fetch_listing(listing_id)
            .await?
            .ok_or(EngineError::ListingNotFound(listing_id))?;

        let candidates = directory
            .find_candidate_pool(source.id, &source.want_item, &source.have_item)
            .await?;
        let total_candidates = candidates.len();

        tracing::debug!(
            "Scoring {} candidates for listing {}",
            total_candidates,
            listing_id
        );

        let mut matches: Vec<Match> = candidates
            .into_iter()
            .map(|candidate| self.score_pair(&source, &candidate))
            .filter(|m| m.score >= self.min_score)
            .collect();

        matches.sort_by(|a, b| {
            b.score
                .partial_cmp(&a.score)
                .unwrap_or(std::cmp::Ordering::Equal)
        });

        Ok(MatchResult {
            matches,
            total_candidates,
        })
    }

    /// Record a match between two explicitly named listings
    ///
    /// Both listings must exist and no match may already exist for the
    /// unordered pair. No threshold applies on this path - the caller chose
    /// the pairing, so any score is recorded. The directory's uniqueness
    /// constraint provides the real mutual exclusion under concurrent calls;
    /// the existence pre-check here surfaces the common case early.
    pub async fn create_match(
        &self,
        directory: &dyn ListingDirectory,
        listing_a_id: i64,
        listing_b_id: i64,
    ) -> Result<Match, EngineError> {
        let listing_a = directory
            .fetch_listing(listing_a_id)
            .await?
            .ok_or(EngineError::ListingNotFound(listing_a_id))?;
        let listing_b = directory
            .fetch_listing(listing_b_id)
            .await?
            .ok_or(EngineError::ListingNotFound(listing_b_id))?;

        if directory.match_exists(listing_a_id, listing_b_id).await? {
            return Err(EngineError::MatchExists(listing_a_id, listing_b_id));
        }

        let candidate = self.score_pair(&listing_a, &listing_b);

        match directory.save_match(candidate).await {
            Ok(saved) => {
                tracing::info!(
                    "Created match {:?} between listings {} and {} (score {:.3})",
                    saved.id,
                    listing_a_id,
                    listing_b_id,
                    saved.score
                );
                Ok(saved)
            }
            // A concurrent caller won the insert race
            Err(DirectoryError::Conflict) => {
                Err(EngineError::MatchExists(listing_a_id, listing_b_id))
            }
            Err(e) => Err(e.into()),
        }
    }

    /// Build an unsaved match for a listing pair
    fn score_pair(&self, a: &Listing, b: &Listing) -> Match {
        let (pair_a, pair_b) = canonical_pair(a.id, b.id);

        Match {
            id: None,
            listing_a_id: pair_a,
            listing_b_id: pair_b,
            score: combined_score(a, b, &self.weights),
            status: MatchStatus::Pending,
            created_at: None,
        }
    }
}

impl Default for MatchEngine {
    fn default() -> Self {
        Self::with_default_weights()
    }
}
