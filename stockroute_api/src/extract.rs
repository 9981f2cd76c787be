use aide::{OperationInput, generate::GenContext, openapi::Operation};
use axum::extract::FromRequest;
use schemars::JsonSchema;

use crate::error::ApiError;

/// `Json` body extractor whose rejections are reported as `ApiError`, so a
/// body that does not deserialize still gets a `{detail}` response.
#[derive(FromRequest)]
#[from_request(via(axum::Json), rejection(ApiError))]
pub struct ApiJson<T>(pub T);

impl<T> OperationInput for ApiJson<T>
where
    T: JsonSchema,
{
    fn operation_input(ctx: &mut GenContext, operation: &mut Operation) {
        axum::Json::<T>::operation_input(ctx, operation);
    }
}
