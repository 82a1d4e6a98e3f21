use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    routing::get,
    Json, Router,
};
use landval_core::factors::{FactorOutcome, FactorQuery};
use landval_core::parameters::ParameterBand;

use crate::{error::ApiResult, main_lib::AppState};

async fn resolve_factor(
    State(state): State<Arc<AppState>>,
    Query(query): Query<FactorQuery>,
) -> ApiResult<Json<FactorOutcome>> {
    Ok(Json(state.factor_service.resolve_factor(&query).await?))
}

/// Candidate bands of one parameter category, ascending by minimum range.
async fn list_bands(
    State(state): State<Arc<AppState>>,
    Path(category): Path<String>,
) -> ApiResult<Json<Vec<ParameterBand>>> {
    Ok(Json(state.parameter_service.get_bands(&category).await?))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/factors/resolve", get(resolve_factor))
        .route("/parameters/{category}/bands", get(list_bands))
}
