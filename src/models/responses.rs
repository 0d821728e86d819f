use crate::models::domain::Match;
use serde::{Deserialize, Serialize};

/// Response for the potential matches endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PotentialMatchesResponse {
    pub matches: Vec<Match>,
    #[serde(rename = "totalCandidates")]
    pub total_candidates: usize,
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

/// Error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    #[serde(rename = "statusCode")]
    pub status_code: u16,
}
