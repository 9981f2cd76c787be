use std::sync::Arc;

use axum::{Json, extract::State};
use schemars::JsonSchema;
use serde::Serialize;
use stockroute_inventory::inventory_item::InventoryItem;

use crate::{error::ApiError, state::AppState};

#[derive(Serialize, JsonSchema)]
pub struct InventoryResponse {
    items: Vec<InventoryItem>,
}

pub async fn get_inventory_handler(
    State(state): State<Arc<AppState>>,
) -> Result<Json<InventoryResponse>, ApiError> {
    Ok(Json(InventoryResponse {
        items: state.inventory.list_items(),
    }))
}
