use std::sync::Arc;

use axum::{Json, extract::State};
use schemars::JsonSchema;
use serde::Serialize;
use stockroute_inventory::dispatch::DispatchRecord;

use crate::{error::ApiError, state::AppState};

#[derive(Serialize, JsonSchema)]
pub struct DispatchesResponse {
    dispatches: Vec<DispatchRecord>,
}

pub async fn get_dispatches_handler(
    State(state): State<Arc<AppState>>,
) -> Result<Json<DispatchesResponse>, ApiError> {
    Ok(Json(DispatchesResponse {
        dispatches: state.inventory.list_dispatches(),
    }))
}
