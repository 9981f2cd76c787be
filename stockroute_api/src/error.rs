use aide::OperationOutput;
use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use schemars::JsonSchema;
use serde::Serialize;
use stockroute_inventory::error::InventoryError;
use stockroute_maps::error::RoutingError;
use tracing::error;

pub enum ApiError {
    BadRequest(String),
    InternalServerError(String),
    NotFound(String),
}

#[derive(Serialize, JsonSchema)]
pub struct ErrorBody {
    detail: String,
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::BadRequest(rejection.body_text())
    }
}

impl From<RoutingError> for ApiError {
    fn from(error: RoutingError) -> Self {
        if error.is_invalid_request() {
            ApiError::BadRequest(error.to_string())
        } else {
            error!("Routing failed: {}", error);
            ApiError::InternalServerError(error.to_string())
        }
    }
}

impl From<InventoryError> for ApiError {
    fn from(error: InventoryError) -> Self {
        match error {
            InventoryError::UnknownInventoryItem(_) => ApiError::NotFound(error.to_string()),
            InventoryError::DuplicateInventoryId(_)
            | InventoryError::InsufficientStock { .. }
            | InventoryError::InvalidItem(_) => ApiError::BadRequest(error.to_string()),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, detail) = match self {
            ApiError::InternalServerError(message) => (StatusCode::INTERNAL_SERVER_ERROR, message),
            ApiError::BadRequest(message) => (StatusCode::BAD_REQUEST, message),
            ApiError::NotFound(message) => (StatusCode::NOT_FOUND, message),
        };

        (status, Json(ErrorBody { detail })).into_response()
    }
}

impl OperationOutput for ApiError {
    type Inner = ErrorBody;
}
