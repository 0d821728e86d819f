use crate::core::{EngineError, MatchEngine};
use crate::models::{CreateMatchRequest, ErrorResponse, HealthResponse, PotentialMatchesResponse};
use crate::services::PostgresDirectory;
use actix_web::{web, HttpResponse, Responder};
use std::sync::Arc;
use validator::Validate;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub directory: Arc<PostgresDirectory>,
    pub engine: MatchEngine,
}

/// Configure all match-related routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(health_check))
        .route(
            "/matches/potential/{listing_id}",
            web::get().to(find_potential_matches),
        )
        .route("/matches", web::post().to(create_match));
}

/// Health check endpoint
async fn health_check(state: web::Data<AppState>) -> impl Responder {
    let pg_healthy = state.directory.health_check().await.unwrap_or(false);

    let status = if pg_healthy { "healthy" } else { "degraded" };

    HttpResponse::Ok().json(HealthResponse {
        status: status.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now(),
    })
}

/// Potential matches endpoint
///
/// GET /api/v1/matches/potential/{listing_id}
///
/// Returns candidate matches for the listing, scored and ordered by
/// descending score. Nothing is persisted.
async fn find_potential_matches(
    state: web::Data<AppState>,
    path: web::Path<i64>,
) -> impl Responder {
    let listing_id = path.into_inner();

    tracing::info!("Finding potential matches for listing {}", listing_id);

    match state
        .engine
        .find_potential_matches(state.directory.as_ref(), listing_id)
        .await
    {
        Ok(result) => {
            tracing::info!(
                "Returning {} matches for listing {} (from {} candidates)",
                result.matches.len(),
                listing_id,
                result.total_candidates
            );

            HttpResponse::Ok().json(PotentialMatchesResponse {
                matches: result.matches,
                total_candidates: result.total_candidates,
            })
        }
        Err(e) => engine_error_response(e),
    }
}

/// Create match endpoint
///
/// POST /api/v1/matches
///
/// Request body:
/// ```json
/// {
///   "listingAId": 1,
///   "listingBId": 2
/// }
/// ```
async fn create_match(
    state: web::Data<AppState>,
    req: web::Json<CreateMatchRequest>,
) -> impl Responder {
    if let Err(errors) = req.validate() {
        tracing::info!("Validation failed for create_match request: {:?}", errors);
        return HttpResponse::BadRequest().json(ErrorResponse {
            error: "Validation failed".to_string(),
            message: errors.to_string(),
            status_code: 400,
        });
    }

    tracing::info!(
        "Creating match between listings {} and {}",
        req.listing_a_id,
        req.listing_b_id
    );

    match state
        .engine
        .create_match(state.directory.as_ref(), req.listing_a_id, req.listing_b_id)
        .await
    {
        Ok(saved) => HttpResponse::Created().json(saved),
        Err(e) => engine_error_response(e),
    }
}

/// Map engine errors to HTTP responses
fn engine_error_response(err: EngineError) -> HttpResponse {
    match err {
        EngineError::ListingNotFound(_) => HttpResponse::NotFound().json(ErrorResponse {
            error: "Listing not found".to_string(),
            message: err.to_string(),
            status_code: 404,
        }),
        EngineError::MatchExists(_, _) => HttpResponse::Conflict().json(ErrorResponse {
            error: "Match already exists".to_string(),
            message: err.to_string(),
            status_code: 409,
        }),
        EngineError::Directory(_) => {
            tracing::error!("Listing directory failure: {}", err);
            HttpResponse::InternalServerError().json(ErrorResponse {
                error: "Listing directory failure".to_string(),
                message: err.to_string(),
                status_code: 500,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_health_check_response() {
        let response = HealthResponse {
            status: "healthy".to_string(),
            version: "0.1.0".to_string(),
            timestamp: chrono::Utc::now(),
        };

        assert_eq!(response.status, "healthy");
    }

    #[test]
    fn test_error_response_mapping() {
        let not_found = engine_error_response(EngineError::ListingNotFound(42));
        assert_eq!(not_found.status(), actix_web::http::StatusCode::NOT_FOUND);

        let conflict = engine_error_response(EngineError::MatchExists(1, 2));
        assert_eq!(conflict.status(), actix_web::http::StatusCode::CONFLICT);
    }
}
