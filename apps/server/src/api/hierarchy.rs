use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    routing::get,
    Json, Router,
};
use landval_core::hierarchy::{Circle, District, LandCategory, Lot, Mouza, Village};

use crate::{error::ApiResult, main_lib::AppState, models::VillagesQuery};

async fn list_districts(State(state): State<Arc<AppState>>) -> ApiResult<Json<Vec<District>>> {
    Ok(Json(state.hierarchy_service.get_districts().await?))
}

async fn list_circles(
    State(state): State<Arc<AppState>>,
    Path(district): Path<String>,
) -> ApiResult<Json<Vec<Circle>>> {
    Ok(Json(
        state.hierarchy_service.get_circles(Some(&district)).await?,
    ))
}

async fn list_mouzas(
    State(state): State<Arc<AppState>>,
    Path((district, circle)): Path<(String, String)>,
) -> ApiResult<Json<Vec<Mouza>>> {
    Ok(Json(
        state
            .hierarchy_service
            .get_mouzas(Some(&district), Some(&circle))
            .await?,
    ))
}

async fn list_lots(
    State(state): State<Arc<AppState>>,
    Path((district, circle)): Path<(String, String)>,
) -> ApiResult<Json<Vec<Lot>>> {
    Ok(Json(
        state
            .hierarchy_service
            .get_lots(Some(&district), Some(&circle))
            .await?,
    ))
}

async fn list_villages(
    State(state): State<Arc<AppState>>,
    Query(q): Query<VillagesQuery>,
) -> ApiResult<Json<Vec<Village>>> {
    let villages = state
        .hierarchy_service
        .get_villages(
            q.district.as_deref(),
            q.circle.as_deref(),
            q.mouza.as_deref(),
            q.lot.as_deref(),
        )
        .await?;
    Ok(Json(villages))
}

async fn list_land_categories(
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<Vec<LandCategory>>> {
    Ok(Json(state.hierarchy_service.get_land_categories().await?))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/districts", get(list_districts))
        .route("/districts/{district}/circles", get(list_circles))
        .route(
            "/districts/{district}/circles/{circle}/mouzas",
            get(list_mouzas),
        )
        .route("/districts/{district}/circles/{circle}/lots", get(list_lots))
        .route("/villages", get(list_villages))
        .route("/land-categories", get(list_land_categories))
}
