//! Router assembly: resource routes, operational routes, OpenAPI document.

mod common;
mod cupcakes;
pub use common::common_routes;
pub use cupcakes::cupcake_routes;

use crate::openapi::ApiDoc;
use crate::state::AppState;
use axum::{routing::get, Json, Router};
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;

const BODY_LIMIT_BYTES: usize = 64 * 1024;

async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

/// The full application router.
pub fn app_router(state: AppState) -> Router {
    Router::new()
        .merge(common_routes(state.clone()))
        .merge(cupcake_routes(state))
        .route("/api-docs/openapi.json", get(openapi_json))
        .layer(RequestBodyLimitLayer::new(BODY_LIMIT_BYTES))
        .layer(TraceLayer::new_for_http())
}
