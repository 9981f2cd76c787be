use std::sync::Arc;

use axum::{Json, extract::State};
use schemars::JsonSchema;
use serde::Serialize;
use stockroute_inventory::inventory_item::InventoryItem;

use crate::{error::ApiError, extract::ApiJson, state::AppState};

#[derive(Serialize, JsonSchema)]
pub struct PostInventoryResponse {
    message: String,
    item: InventoryItem,
}

pub async fn post_inventory_handler(
    State(state): State<Arc<AppState>>,
    ApiJson(body): ApiJson<InventoryItem>,
) -> Result<Json<PostInventoryResponse>, ApiError> {
    let item = state.inventory.add_item(body)?;

    Ok(Json(PostInventoryResponse {
        message: String::from("Item added successfully"),
        item,
    }))
}
