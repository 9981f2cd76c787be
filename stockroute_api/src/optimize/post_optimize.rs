use std::sync::Arc;

use axum::{Json, extract::State};
use schemars::JsonSchema;
use serde::Deserialize;
use stockroute_maps::route_summary::RouteSummary;

use crate::{error::ApiError, extract::ApiJson, state::AppState};

#[derive(Deserialize, JsonSchema)]
pub struct RouteRequestBody {
    start: String,
    points: Vec<String>,
}

pub async fn post_optimize_handler(
    State(state): State<Arc<AppState>>,
    ApiJson(body): ApiJson<RouteRequestBody>,
) -> Result<Json<RouteSummary>, ApiError> {
    let summary = state
        .route_optimizer
        .optimize_route(&body.start, &body.points)
        .await?;

    Ok(Json(summary))
}
