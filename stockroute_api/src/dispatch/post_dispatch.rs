use std::sync::Arc;

use axum::{Json, extract::State};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use stockroute_inventory::dispatch::DispatchItem;
use stockroute_maps::route_summary::RouteSummary;
use tracing::{info, warn};

use crate::{error::ApiError, extract::ApiJson, state::AppState};

#[derive(Deserialize, JsonSchema)]
pub struct DispatchRequestBody {
    items: Vec<DispatchItem>,
    /// At least one delivery point is required
    delivery_points: Vec<String>,
}

#[derive(Serialize, JsonSchema)]
pub struct DispatchResponse {
    dispatch_id: u64,
    route: RouteSummary,
}

/// Reserves the stock of every item, then routes from the dispatch origin
/// through the delivery points. If routing fails, or the request is dropped
/// before routing completes, the reservation is released so the inventory is
/// left as it was.
pub async fn post_dispatch_handler(
    State(state): State<Arc<AppState>>,
    ApiJson(body): ApiJson<DispatchRequestBody>,
) -> Result<Json<DispatchResponse>, ApiError> {
    if body.delivery_points.is_empty() {
        return Err(ApiError::BadRequest(String::from(
            "At least one delivery point is required",
        )));
    }

    let reservation = state.inventory.reserve(&body.items)?;

    let route = match state
        .route_optimizer
        .optimize_route(&state.dispatch_origin, &body.delivery_points)
        .await
    {
        Ok(route) => route,
        Err(error) => {
            warn!("Routing failed, releasing reserved stock: {}", error);
            reservation.release();
            return Err(error.into());
        }
    };

    let record = state
        .inventory
        .commit(reservation, body.delivery_points, route);

    info!(
        "Created dispatch {} with {} items",
        record.dispatch_id,
        record.items.len()
    );

    Ok(Json(DispatchResponse {
        dispatch_id: record.dispatch_id,
        route: record.route,
    }))
}
