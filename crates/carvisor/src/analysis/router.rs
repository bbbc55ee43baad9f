use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    routing::post,
    Json, Router,
};
use serde_json::json;

use super::listing::AnalysisRequest;
use super::mechanical::MechanicalAssessor;
use super::service::{AnalysisResponse, AnalysisService};
use super::store::{ListingId, ListingStore};
use crate::error::AppError;

/// Router builder exposing the analysis endpoints.
pub fn analysis_router<S, M>(service: Arc<AnalysisService<S, M>>) -> Router
where
    S: ListingStore + 'static,
    M: MechanicalAssessor + 'static,
{
    Router::new()
        .route("/api/v1/analyze", post(analyze_handler::<S, M>))
        .route(
            "/api/v1/listings/:listing_id/analyze",
            post(analyze_listing_handler::<S, M>),
        )
        .with_state(service)
}

pub(crate) async fn analyze_handler<S, M>(
    State(service): State<Arc<AnalysisService<S, M>>>,
    Json(request): Json<AnalysisRequest>,
) -> Result<Json<AnalysisResponse>, AppError>
where
    S: ListingStore + 'static,
    M: MechanicalAssessor + 'static,
{
    let response = service.analyze(&request)?;
    Ok(Json(response))
}

pub(crate) async fn analyze_listing_handler<S, M>(
    State(service): State<Arc<AnalysisService<S, M>>>,
    Path(listing_id): Path<String>,
    headers: HeaderMap,
) -> Response
where
    S: ListingStore + 'static,
    M: MechanicalAssessor + 'static,
{
    let Some(user_id) = headers
        .get("x-user-id")
        .and_then(|value| value.to_str().ok())
        .filter(|value| !value.is_empty())
    else {
        let payload = json!({ "error": "missing x-user-id header" });
        return (StatusCode::UNAUTHORIZED, Json(payload)).into_response();
    };

    let id = ListingId(listing_id);
    match service.analyze_listing(&id, user_id) {
        Ok(response) => Json(response).into_response(),
        Err(err) => AppError::from(err).into_response(),
    }
}
