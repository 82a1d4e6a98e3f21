use std::sync::Arc;

use axum::{
    extract::{Path, State},
    routing::{get, post},
    Json, Router,
};
use landval_core::history::{CalculationHistoryEntry, RestoredCalculation};

use crate::{error::ApiResult, main_lib::AppState, models::RecordHistoryRequest};

async fn list_history(
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<Vec<CalculationHistoryEntry>>> {
    Ok(Json(state.valuation_service.list_history()?))
}

async fn record_history(
    State(state): State<Arc<AppState>>,
    Json(body): Json<RecordHistoryRequest>,
) -> ApiResult<Json<CalculationHistoryEntry>> {
    Ok(Json(
        state
            .valuation_service
            .record_history(body.request, body.result)?,
    ))
}

async fn restore_history(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> ApiResult<Json<RestoredCalculation>> {
    Ok(Json(state.valuation_service.restore_history(&id)?))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/history", get(list_history).post(record_history))
        .route("/history/{id}/restore", post(restore_history))
}
