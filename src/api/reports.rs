//! Citizen report endpoints

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};

use crate::{
    error::AppResult,
    models::report::{CreateReport, Report, ReportQuery, UpdateReport},
};

use super::PaginatedResponse;

/// List reports with filters and pagination
#[utoipa::path(
    get,
    path = "/reports",
    tag = "reports",
    params(ReportQuery),
    responses(
        (status = 200, description = "List of reports, newest first", body = PaginatedResponse<Report>)
    )
)]
pub async fn list_reports(
    State(state): State<crate::AppState>,
    Query(query): Query<ReportQuery>,
) -> AppResult<Json<PaginatedResponse<Report>>> {
    let (items, total) = state.services.reports.search(&query).await?;

    Ok(Json(PaginatedResponse {
        items,
        total,
        page: query.page.unwrap_or(1),
        per_page: query.per_page.unwrap_or(20),
    }))
}

/// Get report by ID
#[utoipa::path(
    get,
    path = "/reports/{id}",
    tag = "reports",
    params(
        ("id" = i32, Path, description = "Report ID")
    ),
    responses(
        (status = 200, description = "Report details", body = Report),
        (status = 404, description = "Report not found")
    )
)]
pub async fn get_report(
    State(state): State<crate::AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<Report>> {
    let report = state.services.reports.get(id).await?;
    Ok(Json(report))
}

/// Get report by folio (citizen-facing tracking code)
#[utoipa::path(
    get,
    path = "/reports/folio/{folio}",
    tag = "reports",
    params(
        ("folio" = String, Path, description = "Report tracking code")
    ),
    responses(
        (status = 200, description = "Report details", body = Report),
        (status = 404, description = "Report not found")
    )
)]
pub async fn get_report_by_folio(
    State(state): State<crate::AppState>,
    Path(folio): Path<String>,
) -> AppResult<Json<Report>> {
    let report = state.services.reports.get_by_folio(&folio).await?;
    Ok(Json(report))
}

/// File a new report
#[utoipa::path(
    post,
    path = "/reports",
    tag = "reports",
    request_body = CreateReport,
    responses(
        (status = 201, description = "Report created", body = Report),
        (status = 400, description = "Invalid input")
    )
)]
pub async fn create_report(
    State(state): State<crate::AppState>,
    Json(data): Json<CreateReport>,
) -> AppResult<(StatusCode, Json<Report>)> {
    let created = state.services.reports.create(data).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

/// Update a report (folio and creation timestamp are immutable)
#[utoipa::path(
    put,
    path = "/reports/{id}",
    tag = "reports",
    params(
        ("id" = i32, Path, description = "Report ID")
    ),
    request_body = UpdateReport,
    responses(
        (status = 200, description = "Report updated", body = Report),
        (status = 404, description = "Report not found")
    )
)]
pub async fn update_report(
    State(state): State<crate::AppState>,
    Path(id): Path<i32>,
    Json(data): Json<UpdateReport>,
) -> AppResult<Json<Report>> {
    let updated = state.services.reports.update(id, data).await?;
    Ok(Json(updated))
}

/// Delete a report
#[utoipa::path(
    delete,
    path = "/reports/{id}",
    tag = "reports",
    params(
        ("id" = i32, Path, description = "Report ID")
    ),
    responses(
        (status = 204, description = "Report deleted"),
        (status = 404, description = "Report not found")
    )
)]
pub async fn delete_report(
    State(state): State<crate::AppState>,
    Path(id): Path<i32>,
) -> AppResult<StatusCode> {
    state.services.reports.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
