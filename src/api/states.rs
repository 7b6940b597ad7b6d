//! Report lifecycle state endpoints

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};

use crate::{
    error::AppResult,
    models::state::{CreateState, State as ReportState, UpdateState},
};

use super::ListQuery;

/// List lifecycle states
#[utoipa::path(
    get,
    path = "/states",
    tag = "states",
    params(ListQuery),
    responses(
        (status = 200, description = "List of lifecycle states in code order", body = [ReportState])
    )
)]
pub async fn list_states(
    State(state): State<crate::AppState>,
    Query(query): Query<ListQuery>,
) -> AppResult<Json<Vec<ReportState>>> {
    let states = state
        .services
        .catalog
        .list_states(query.include_inactive)
        .await?;
    Ok(Json(states))
}

/// Get lifecycle state by ID
#[utoipa::path(
    get,
    path = "/states/{id}",
    tag = "states",
    params(
        ("id" = i32, Path, description = "State ID")
    ),
    responses(
        (status = 200, description = "State details", body = ReportState),
        (status = 404, description = "State not found")
    )
)]
pub async fn get_state(
    State(state): State<crate::AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<ReportState>> {
    let row = state.services.catalog.get_state(id).await?;
    Ok(Json(row))
}

/// Create a lifecycle state
#[utoipa::path(
    post,
    path = "/states",
    tag = "states",
    request_body = CreateState,
    responses(
        (status = 201, description = "State created", body = ReportState)
    )
)]
pub async fn create_state(
    State(state): State<crate::AppState>,
    Json(data): Json<CreateState>,
) -> AppResult<(StatusCode, Json<ReportState>)> {
    let created = state.services.catalog.create_state(data).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

/// Update a lifecycle state
#[utoipa::path(
    put,
    path = "/states/{id}",
    tag = "states",
    params(
        ("id" = i32, Path, description = "State ID")
    ),
    request_body = UpdateState,
    responses(
        (status = 200, description = "State updated", body = ReportState),
        (status = 404, description = "State not found")
    )
)]
pub async fn update_state(
    State(state): State<crate::AppState>,
    Path(id): Path<i32>,
    Json(data): Json<UpdateState>,
) -> AppResult<Json<ReportState>> {
    let updated = state.services.catalog.update_state(id, data).await?;
    Ok(Json(updated))
}

/// Soft-delete a lifecycle state
#[utoipa::path(
    delete,
    path = "/states/{id}",
    tag = "states",
    params(
        ("id" = i32, Path, description = "State ID")
    ),
    responses(
        (status = 204, description = "State deactivated"),
        (status = 404, description = "State not found")
    )
)]
pub async fn delete_state(
    State(state): State<crate::AppState>,
    Path(id): Path<i32>,
) -> AppResult<StatusCode> {
    state.services.catalog.delete_state(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
