//! Cupcake resource routes.

use crate::handlers::cupcakes::{create, delete as delete_handler, list, read, update};
use crate::state::AppState;
use axum::{routing::get, Router};

pub fn cupcake_routes(state: AppState) -> Router {
    Router::new()
        .route("/api/cupcakes", get(list).post(create))
        .route(
            "/api/cupcakes/:id",
            get(read).patch(update).delete(delete_handler),
        )
        .with_state(state)
}
