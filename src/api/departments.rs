//! Municipal department endpoints

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};

use crate::{
    error::AppResult,
    models::department::{CreateDepartment, Department, UpdateDepartment},
};

use super::ListQuery;

/// List departments
#[utoipa::path(
    get,
    path = "/departments",
    tag = "departments",
    params(ListQuery),
    responses(
        (status = 200, description = "List of departments", body = [Department])
    )
)]
pub async fn list_departments(
    State(state): State<crate::AppState>,
    Query(query): Query<ListQuery>,
) -> AppResult<Json<Vec<Department>>> {
    let departments = state
        .services
        .catalog
        .list_departments(query.include_inactive)
        .await?;
    Ok(Json(departments))
}

/// Get department by ID
#[utoipa::path(
    get,
    path = "/departments/{id}",
    tag = "departments",
    params(
        ("id" = i32, Path, description = "Department ID")
    ),
    responses(
        (status = 200, description = "Department details", body = Department),
        (status = 404, description = "Department not found")
    )
)]
pub async fn get_department(
    State(state): State<crate::AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<Department>> {
    let department = state.services.catalog.get_department(id).await?;
    Ok(Json(department))
}

/// Create a department
#[utoipa::path(
    post,
    path = "/departments",
    tag = "departments",
    request_body = CreateDepartment,
    responses(
        (status = 201, description = "Department created", body = Department)
    )
)]
pub async fn create_department(
    State(state): State<crate::AppState>,
    Json(data): Json<CreateDepartment>,
) -> AppResult<(StatusCode, Json<Department>)> {
    let created = state.services.catalog.create_department(data).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

/// Update a department
#[utoipa::path(
    put,
    path = "/departments/{id}",
    tag = "departments",
    params(
        ("id" = i32, Path, description = "Department ID")
    ),
    request_body = UpdateDepartment,
    responses(
        (status = 200, description = "Department updated", body = Department),
        (status = 404, description = "Department not found")
    )
)]
pub async fn update_department(
    State(state): State<crate::AppState>,
    Path(id): Path<i32>,
    Json(data): Json<UpdateDepartment>,
) -> AppResult<Json<Department>> {
    let updated = state.services.catalog.update_department(id, data).await?;
    Ok(Json(updated))
}

/// Soft-delete a department
#[utoipa::path(
    delete,
    path = "/departments/{id}",
    tag = "departments",
    params(
        ("id" = i32, Path, description = "Department ID")
    ),
    responses(
        (status = 204, description = "Department deactivated"),
        (status = 404, description = "Department not found")
    )
)]
pub async fn delete_department(
    State(state): State<crate::AppState>,
    Path(id): Path<i32>,
) -> AppResult<StatusCode> {
    state.services.catalog.delete_department(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
