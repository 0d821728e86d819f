use serde::{Deserialize, Serialize};

/// Lifecycle status of a listing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "lowercase")]
#[sqlx(type_name = "listing_status", rename_all = "lowercase")]
pub enum ListingStatus {
    Active,
    Matched,
    Completed,
    Cancelled,
    Expired,
}

/// A user's offer to trade one item for another
///
/// The engine treats listings as immutable value records: the owning user's
/// location is denormalized onto the listing by the directory at fetch time,
/// so reading a field never triggers deferred I/O.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Listing {
    pub id: i64,
    #[serde(rename = "userId")]
    pub user_id: i64,
    pub title: String,
    #[serde(rename = "haveItem")]
    pub have_item: String,
    #[serde(rename = "wantItem")]
    pub want_item: String,
    #[serde(rename = "haveDescription", default)]
    pub have_description: Option<String>,
    #[serde(rename = "wantDescription", default)]
    pub want_description: Option<String>,
    /// Owner's location (free text), absent if the user never set one
    #[serde(default)]
    pub location: Option<String>,
    pub status: ListingStatus,
    #[serde(rename = "createdAt", default)]
    pub created_at: Option<chrono::DateTime<chrono::Utc>>,
}

/// Lifecycle status of a match
///
/// The engine only ever produces Pending; the accept/reject/complete
/// transitions belong to collaborators outside this service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "lowercase")]
#[sqlx(type_name = "match_status", rename_all = "lowercase")]
pub enum MatchStatus {
    Pending,
    Accepted,
    Rejected,
    Completed,
}

/// A proposed or recorded pairing of two listings with a compatibility score
///
/// The listing pair is unordered: a match between X and Y is the same entity
/// regardless of argument order. Discovery produces unsaved values
/// (`id`/`created_at` are `None`); the explicit pairing path persists one.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Match {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(rename = "listingAId")]
    pub listing_a_id: i64,
    #[serde(rename = "listingBId")]
    pub listing_b_id: i64,
    pub score: f64,
    pub status: MatchStatus,
    #[serde(rename = "createdAt", default)]
    pub created_at: Option<chrono::DateTime<chrono::Utc>>,
}

/// Scoring weights
///
/// Weights sum to 1.0 so the combined score stays in [0,1].
#[derive(Debug, Clone, Copy)]
pub struct ScoringWeights {
    pub item: f64,
    pub location: f64,
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            item: crate::core::similarity::ITEM_WEIGHT,
            location: crate::core::similarity::LOCATION_WEIGHT,
        }
    }
}
