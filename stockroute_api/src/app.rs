use std::sync::Arc;

use aide::openapi::OpenApi;
use aide::transform::TransformOpenApi;
use axum::http::HeaderValue;
use axum::{Extension, Router, middleware};
use tower::ServiceBuilder;
use tower_http::cors::{AllowHeaders, AllowMethods, CorsLayer};

use crate::docs::docs_routes;
use crate::request_logging::log_requests;
use crate::routes::api_routes;
use crate::state::AppState;

pub fn build_app(state: Arc<AppState>, cors_origin: HeaderValue) -> Router {
    aide::generate::on_error(|error| tracing::error!("{}", error));
    aide::generate::extract_schemas(true);

    let cors_layer = CorsLayer::new()
        .allow_origin(cors_origin)
        .allow_credentials(true)
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request());

    let mut api = OpenApi::default();

    let app = aide::axum::ApiRouter::new()
        .nest_api_service("/docs", docs_routes())
        .nest_api_service("/api", api_routes(state))
        .finish_api_with(&mut api, api_docs);

    app.layer(
        ServiceBuilder::new()
            .layer(middleware::from_fn(log_requests))
            .layer(cors_layer),
    )
    .layer(Extension(Arc::new(api)))
}

fn api_docs(api: TransformOpenApi) -> TransformOpenApi {
    api.title("Stockroute Open API")
}
