use crate::config::Config;
use crate::enrichment::enrich_batch;
use crate::errors::AppError;
use crate::models::{EnrichRequest, EnrichResponse};
use crate::places::PlacesClient;
use axum::{
    body::Bytes,
    extract::State,
    http::{HeaderMap, StatusCode},
    routing::{get, post},
    Json, Router,
};
use serde_json::json;
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, limit::RequestBodyLimitLayer, trace::TraceLayer};

/// Header carrying the caller's shared secret.
pub const API_KEY_HEADER: &str = "x-api-key";

/// Shared application state injected into handlers.
#[derive(Clone)]
pub struct AppState {
    /// Application configuration.
    pub config: Config,
    /// Client for the Google Maps geocoding and place-details APIs.
    pub places: PlacesClient,
}

/// Health check endpoint.
///
/// Returns the service status, version, and health information.
///
/// # Returns
///
/// * `(StatusCode, Json<serde_json::Value>)` - HTTP 200 OK with health status JSON.
pub async fn health() -> (StatusCode, Json<serde_json::Value>) {
    (
        StatusCode::OK,
        Json(json!({
            "status": "healthy",
            "service": "lead-places-api",
            "version": env!("CARGO_PKG_VERSION")
        })),
    )
}

/// GET on the enrichment route: minimal liveness payload for callers that
/// probe the endpoint itself.
pub async fn ping() -> (StatusCode, Json<serde_json::Value>) {
    (StatusCode::OK, Json(json!({ "ok": true })))
}

/// OPTIONS on the enrichment route: CORS preflight, no content.
pub async fn preflight() -> StatusCode {
    StatusCode::NO_CONTENT
}

/// Fallback for verbs outside the endpoint contract.
pub async fn method_not_allowed() -> AppError {
    AppError::MethodNotAllowed
}

/// POST /api/v1/enrich
///
/// Enriches a batch of leads with geocoding and place-rating data.
///
/// The shared-secret header is validated before the body is inspected, so a
/// request with a missing or wrong key is rejected with 401 no matter what
/// the body contains. An empty or absent batch short-circuits to
/// `{"items": []}` without any outbound call.
///
/// # Arguments
///
/// * `state` - The application state.
/// * `headers` - Request headers (checked for the shared secret).
/// * `body` - Raw request body, parsed only after authorization.
///
/// # Returns
///
/// * `Result<Json<EnrichResponse>, AppError>` - The enriched batch or an error.
pub async fn enrich_leads(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Json<EnrichResponse>, AppError> {
    let provided = headers.get(API_KEY_HEADER).and_then(|v| v.to_str().ok());
    if provided != Some(state.config.private_action_key.as_str()) {
        return Err(AppError::Unauthorized);
    }

    let request: EnrichRequest = if body.is_empty() {
        EnrichRequest::default()
    } else {
        // An explicit JSON null body counts as an absent batch.
        serde_json::from_slice::<Option<EnrichRequest>>(&body)
            .map_err(|e| AppError::Internal(format!("Invalid request body: {}", e)))?
            .unwrap_or_default()
    };

    if request.leads.is_empty() {
        return Ok(Json(EnrichResponse { items: Vec::new() }));
    }

    tracing::info!("Enriching batch of {} leads", request.leads.len());
    let items = enrich_batch(&state.places, request.leads).await?;
    tracing::info!("Batch complete: {} items", items.len());

    Ok(Json(EnrichResponse { items }))
}

/// Builds the application router.
///
/// The enrichment route answers POST (authorized processing), GET (liveness
/// payload), and OPTIONS (preflight); anything else gets an explicit 405.
/// A bare `/health` route stays outside the authorized surface for platform
/// health checks.
pub fn router(state: Arc<AppState>) -> Router {
    let api_routes = Router::new()
        .route(
            "/api/v1/enrich",
            post(enrich_leads)
                .get(ping)
                .options(preflight)
                .fallback(method_not_allowed),
        )
        .layer(
            // Request size limit: 5MB max payload (prevents memory exhaustion)
            ServiceBuilder::new().layer(RequestBodyLimitLayer::new(5 * 1024 * 1024)),
        );

    Router::new()
        .route("/health", get(health))
        .merge(api_routes)
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}
