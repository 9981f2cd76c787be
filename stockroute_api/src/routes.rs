use std::sync::Arc;

use aide::axum::{
    ApiRouter,
    routing::{get, post},
};

use crate::{
    dispatch::{get_dispatches::get_dispatches_handler, post_dispatch::post_dispatch_handler},
    inventory::{get_inventory::get_inventory_handler, post_inventory::post_inventory_handler},
    optimize::post_optimize::post_optimize_handler,
    state::AppState,
};

pub fn api_routes(state: Arc<AppState>) -> ApiRouter {
    aide::generate::infer_responses(true);
    let router = ApiRouter::new()
        .api_route(
            "/inventory",
            get(get_inventory_handler).post(post_inventory_handler),
        )
        .api_route(
            "/dispatch",
            get(get_dispatches_handler).post(post_dispatch_handler),
        )
        .api_route("/routes/optimize", post(post_optimize_handler))
        .with_state(state);

    aide::generate::infer_responses(false);

    router
}
