use std::sync::Arc;

use aide::{
    axum::{
        ApiRouter, IntoApiResponse,
        routing::{get, get_with},
    },
    openapi::OpenApi,
    scalar::Scalar,
    swagger::Swagger,
};
use axum::{Extension, Json, response::IntoResponse};

const OPENAPI_JSON_PATH: &str = "/docs/private/api.json";
const DOCS_TITLE: &str = "Stockroute";

/// Scalar UI at `/docs`, Swagger UI at `/docs/swagger`, raw document under
/// `/docs/private/api.json`. The document itself is read from the
/// `Extension<Arc<OpenApi>>` layered on the finished router.
pub fn docs_routes() -> ApiRouter {
    aide::generate::infer_responses(true);

    let scalar = Scalar::new(OPENAPI_JSON_PATH)
        .with_title(DOCS_TITLE)
        .axum_handler();
    let swagger = Swagger::new(OPENAPI_JSON_PATH)
        .with_title(DOCS_TITLE)
        .axum_handler();

    let router = ApiRouter::new()
        .api_route(
            "/",
            get_with(scalar, |op| op.description("Inventory and routing API reference.")),
        )
        .api_route(
            "/swagger",
            get_with(swagger, |op| op.description("Swagger view of the API reference.")),
        )
        .route("/private/api.json", get(serve_openapi));

    aide::generate::infer_responses(false);

    router
}

async fn serve_openapi(Extension(api): Extension<Arc<OpenApi>>) -> impl IntoApiResponse {
    Json(api).into_response()
}
