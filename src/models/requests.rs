use serde::{Deserialize, Serialize};
use validator::Validate;

/// Request to record a match between two explicitly named listings
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateMatchRequest {
    #[validate(range(min = 1))]
    #[serde(alias = "listing_a_id", rename = "listingAId")]
    pub listing_a_id: i64,
    #[validate(range(min = 1))]
    #[serde(alias = "listing_b_id", rename = "listingBId")]
    pub listing_b_id: i64,
}
