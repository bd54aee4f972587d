//! Cupcake CRUD handlers: list, read, create, partial update, delete.

use crate::error::{ApiError, ErrorBody};
use crate::model::{CupcakePatch, NewCupcake};
use crate::response::{self, CupcakeBody, CupcakeListBody, MessageBody};
use crate::service::{CupcakeService, RequestValidator};
use crate::state::AppState;
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;
use utoipa::IntoParams;

#[derive(Debug, Deserialize, IntoParams)]
pub struct ListParams {
    /// Case-insensitive substring matched against stored flavors. Absent
    /// behaves like the empty string: every row matches.
    pub flavor: Option<String>,
}

/// GET /api/cupcakes — list cupcakes, optionally filtered by flavor.
#[utoipa::path(
    get,
    path = "/api/cupcakes",
    params(ListParams),
    responses(
        (status = 200, description = "Cupcakes matching the filter", body = CupcakeListBody)
    )
)]
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
) -> Result<impl axum::response::IntoResponse, ApiError> {
    let flavor = params.flavor.unwrap_or_default();
    let rows = CupcakeService::list(&state.pool, &flavor).await?;
    Ok(Json(response::many(rows)))
}

/// GET /api/cupcakes/{id} — fetch one cupcake.
#[utoipa::path(
    get,
    path = "/api/cupcakes/{id}",
    params(("id" = i64, Path, description = "Cupcake id")),
    responses(
        (status = 200, description = "The cupcake", body = CupcakeBody),
        (status = 404, description = "No cupcake with this id", body = ErrorBody)
    )
)]
pub async fn read(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<impl axum::response::IntoResponse, ApiError> {
    let row = CupcakeService::get(&state.pool, id)
        .await?
        .ok_or_else(|| ApiError::NotFound(format!("cupcake {}", id)))?;
    Ok(Json(response::one(row)))
}

/// POST /api/cupcakes — create a cupcake; the server assigns the id.
#[utoipa::path(
    post,
    path = "/api/cupcakes",
    request_body = NewCupcake,
    responses(
        (status = 201, description = "The created cupcake", body = CupcakeBody),
        (status = 400, description = "Blank required field", body = ErrorBody)
    )
)]
pub async fn create(
    State(state): State<AppState>,
    Json(body): Json<NewCupcake>,
) -> Result<impl axum::response::IntoResponse, ApiError> {
    RequestValidator::validate_create(&body)?;
    let row = CupcakeService::create(&state.pool, &body).await?;
    Ok((StatusCode::CREATED, Json(response::one(row))))
}

/// PATCH /api/cupcakes/{id} — apply the supplied fields to an existing
/// cupcake. The empty-body check runs before the id lookup.
#[utoipa::path(
    patch,
    path = "/api/cupcakes/{id}",
    params(("id" = i64, Path, description = "Cupcake id")),
    request_body = CupcakePatch,
    responses(
        (status = 200, description = "The merged cupcake", body = CupcakeBody),
        (status = 400, description = "Empty inputs", body = ErrorBody),
        (status = 404, description = "No cupcake with this id", body = ErrorBody)
    )
)]
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(body): Json<CupcakePatch>,
) -> Result<impl axum::response::IntoResponse, ApiError> {
    RequestValidator::validate_patch(&body)?;
    let row = CupcakeService::update(&state.pool, id, &body)
        .await?
        .ok_or_else(|| ApiError::NotFound(format!("cupcake {}", id)))?;
    Ok(Json(response::one(row)))
}

/// DELETE /api/cupcakes/{id} — remove a cupcake.
#[utoipa::path(
    delete,
    path = "/api/cupcakes/{id}",
    params(("id" = i64, Path, description = "Cupcake id")),
    responses(
        (status = 200, description = "Deletion confirmation", body = MessageBody),
        (status = 404, description = "No cupcake with this id", body = ErrorBody)
    )
)]
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<impl axum::response::IntoResponse, ApiError> {
    CupcakeService::delete(&state.pool, id)
        .await?
        .ok_or_else(|| ApiError::NotFound(format!("cupcake {}", id)))?;
    Ok(Json(response::message("Deleted")))
}
