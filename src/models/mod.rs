// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{Listing, ListingStatus, Match, MatchStatus, ScoringWeights};
pub use requests::CreateMatchRequest;
pub use responses::{ErrorResponse, HealthResponse, PotentialMatchesResponse};
