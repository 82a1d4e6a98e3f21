use std::sync::Arc;

use axum::{extract::State, routing::post, Json, Router};
use landval_core::{ValuationRequest, ValuationResult};

use crate::{error::ApiResult, main_lib::AppState};

/// Full valuation. Recorded in the history.
async fn compute_valuation(
    State(state): State<Arc<AppState>>,
    Json(request): Json<ValuationRequest>,
) -> ApiResult<Json<ValuationResult>> {
    Ok(Json(
        state.valuation_service.compute_valuation(&request).await?,
    ))
}

/// Per-unit preview for a single lessa. Not recorded.
async fn compute_unit_valuation(
    State(state): State<Arc<AppState>>,
    Json(request): Json<ValuationRequest>,
) -> ApiResult<Json<ValuationResult>> {
    Ok(Json(
        state
            .valuation_service
            .compute_unit_valuation(&request)
            .await?,
    ))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/valuations", post(compute_valuation))
        .route("/valuations/unit", post(compute_unit_valuation))
}
