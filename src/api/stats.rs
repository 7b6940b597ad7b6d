//! Statistics endpoints

use axum::{extract::Query, extract::State, Json};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::{error::AppResult, services::stats::ChartData};

/// Headline counters for the dashboard overview
#[derive(Serialize, ToSchema)]
pub struct GeneralStats {
    /// Total number of reports ever filed
    pub total_reports: i64,
    /// Number of active categories
    pub total_categories: i64,
    /// Reports currently pending review
    pub pending_reports: i64,
    /// Reports currently being attended
    pub in_process_reports: i64,
    /// Reports resolved
    pub resolved_reports: i64,
    /// Reports filed in the trailing 30 days
    pub reports_last_30_days: i64,
}

/// Derived metrics for the advanced statistics page
#[derive(Serialize, ToSchema)]
pub struct AdvancedMetrics {
    /// Resolved share of all reports, percentage with one decimal
    pub resolution_rate: f64,
    /// Placeholder constant; response time is not measured yet
    pub avg_response_time_hours: f64,
    /// Placeholder constant; satisfaction is not surveyed yet
    pub satisfaction_score: f64,
    /// Reports filed in the current calendar month
    pub reports_current_month: i64,
}

/// Report count for one category
#[derive(Serialize, ToSchema)]
pub struct CategoryCount {
    pub category: String,
    pub total: i64,
}

/// Report count for one lifecycle state
#[derive(Serialize, ToSchema)]
pub struct StateCount {
    pub state: String,
    pub total: i64,
}

/// Report count for one (year, month) bucket
#[derive(Serialize, ToSchema)]
pub struct MonthCount {
    pub year: i32,
    /// 1-based month number
    pub month: i32,
    /// Localized month name
    pub month_name: String,
    pub total: i64,
}

/// Recent report row enriched for direct display
#[derive(Serialize, ToSchema)]
pub struct RecentReport {
    pub id: i32,
    pub folio: String,
    /// Reporter first name and paternal surname
    pub reporter: String,
    pub category: String,
    pub state: String,
    pub created_at: DateTime<Utc>,
}

/// Report count for one exact address string
#[derive(Serialize, ToSchema)]
pub struct AddressCount {
    pub address: String,
    pub total: i64,
}

/// Parallel label/value arrays ready for charting
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct ChartSeries {
    pub labels: Vec<String>,
    pub values: Vec<i64>,
}

/// Rollup row for one municipal department
#[derive(Serialize, ToSchema)]
pub struct DepartmentPerformance {
    pub department: String,
    /// Real count when the department has mapped categories, otherwise the
    /// fixed baseline
    pub reports_handled: i64,
    /// min(95, 70 + reports_handled / 2)
    pub efficiency: i64,
    /// True when reports_handled is a baseline, not a query result
    pub synthetic: bool,
}

/// Weekly trends widget data. The series is a fixed placeholder matrix;
/// only the category labels are real.
#[derive(Serialize, ToSchema)]
pub struct WeeklyTrends {
    pub categories: Vec<String>,
    pub weeks: Vec<String>,
    pub series: Vec<Vec<i64>>,
    pub synthetic: bool,
}

/// Limit parameter for ranked/recent listings
#[derive(Debug, Deserialize, IntoParams, ToSchema)]
pub struct LimitQuery {
    /// Maximum number of rows to return (default: 10, max: 100)
    pub limit: Option<i64>,
}

/// Get general statistics
#[utoipa::path(
    get,
    path = "/stats/general",
    tag = "stats",
    responses(
        (status = 200, description = "General statistics", body = GeneralStats)
    )
)]
pub async fn general(
    State(state): State<crate::AppState>,
) -> AppResult<Json<GeneralStats>> {
    let stats = state.services.stats.general().await?;
    Ok(Json(stats))
}

/// Get advanced metrics
#[utoipa::path(
    get,
    path = "/stats/advanced",
    tag = "stats",
    responses(
        (status = 200, description = "Advanced metrics", body = AdvancedMetrics)
    )
)]
pub async fn advanced(
    State(state): State<crate::AppState>,
) -> AppResult<Json<AdvancedMetrics>> {
    let metrics = state.services.stats.advanced().await?;
    Ok(Json(metrics))
}

/// Get report counts per category
#[utoipa::path(
    get,
    path = "/stats/by-category",
    tag = "stats",
    responses(
        (status = 200, description = "Report counts per category, zero-count categories included", body = [CategoryCount])
    )
)]
pub async fn by_category(
    State(state): State<crate::AppState>,
) -> AppResult<Json<Vec<CategoryCount>>> {
    let counts = state.services.stats.by_category().await?;
    Ok(Json(counts))
}

/// Get report counts per lifecycle state
#[utoipa::path(
    get,
    path = "/stats/by-state",
    tag = "stats",
    responses(
        (status = 200, description = "Report counts per state, zero-count states included", body = [StateCount])
    )
)]
pub async fn by_state(
    State(state): State<crate::AppState>,
) -> AppResult<Json<Vec<StateCount>>> {
    let counts = state.services.stats.by_state().await?;
    Ok(Json(counts))
}

/// Get report counts per month
#[utoipa::path(
    get,
    path = "/stats/by-month",
    tag = "stats",
    responses(
        (status = 200, description = "Report counts per (year, month), oldest first", body = [MonthCount])
    )
)]
pub async fn by_month(
    State(state): State<crate::AppState>,
) -> AppResult<Json<Vec<MonthCount>>> {
    let counts = state.services.stats.by_month().await?;
    Ok(Json(counts))
}

/// Get the most recent reports
#[utoipa::path(
    get,
    path = "/stats/recent",
    tag = "stats",
    params(LimitQuery),
    responses(
        (status = 200, description = "Most recent reports, newest first", body = [RecentReport])
    )
)]
pub async fn recent(
    State(state): State<crate::AppState>,
    Query(query): Query<LimitQuery>,
) -> AppResult<Json<Vec<RecentReport>>> {
    let limit = query.limit.unwrap_or(10).clamp(1, 100);
    let reports = state.services.stats.recent(limit).await?;
    Ok(Json(reports))
}

/// Get the addresses with the most reports
#[utoipa::path(
    get,
    path = "/stats/hot-zones",
    tag = "stats",
    params(LimitQuery),
    responses(
        (status = 200, description = "Addresses ranked by report count", body = [AddressCount])
    )
)]
pub async fn hot_zones(
    State(state): State<crate::AppState>,
    Query(query): Query<LimitQuery>,
) -> AppResult<Json<Vec<AddressCount>>> {
    let limit = query.limit.unwrap_or(10).clamp(1, 100);
    let zones = state.services.stats.top_addresses(limit).await?;
    Ok(Json(zones))
}

/// Get the twelve-month report chart series
///
/// Never fails: when the underlying query errors the endpoint serves a
/// fixed fallback series so the dashboard keeps rendering.
#[utoipa::path(
    get,
    path = "/stats/monthly-chart",
    tag = "stats",
    responses(
        (status = 200, description = "Twelve label/value pairs, January first", body = ChartSeries)
    )
)]
pub async fn monthly_chart(State(state): State<crate::AppState>) -> Json<ChartSeries> {
    match state.services.stats.monthly_chart().await {
        ChartData::Ok(series) => Json(series),
        ChartData::Degraded {
            fallback,
            suppressed,
        } => {
            tracing::warn!(
                error = %suppressed,
                "Monthly chart aggregation failed, serving fallback series"
            );
            Json(fallback)
        }
    }
}

/// Get the per-category report chart series
///
/// Same degrade-instead-of-fail contract as the monthly chart.
#[utoipa::path(
    get,
    path = "/stats/category-chart",
    tag = "stats",
    responses(
        (status = 200, description = "One label/value pair per category", body = ChartSeries)
    )
)]
pub async fn category_chart(State(state): State<crate::AppState>) -> Json<ChartSeries> {
    match state.services.stats.category_chart().await {
        ChartData::Ok(series) => Json(series),
        ChartData::Degraded {
            fallback,
            suppressed,
        } => {
            tracing::warn!(
                error = %suppressed,
                "Category chart aggregation failed, serving fallback series"
            );
            Json(fallback)
        }
    }
}

/// Get the per-department performance rollup
#[utoipa::path(
    get,
    path = "/stats/department-performance",
    tag = "stats",
    responses(
        (status = 200, description = "Rollup per department; synthetic rows are flagged", body = [DepartmentPerformance])
    )
)]
pub async fn department_performance(
    State(state): State<crate::AppState>,
) -> AppResult<Json<Vec<DepartmentPerformance>>> {
    let rollup = state.services.stats.department_performance().await?;
    Ok(Json(rollup))
}

/// Get weekly trends widget data (placeholder series)
#[utoipa::path(
    get,
    path = "/stats/weekly-trends",
    tag = "stats",
    responses(
        (status = 200, description = "Weekly trends placeholder series with real category labels", body = WeeklyTrends)
    )
)]
pub async fn weekly_trends(
    State(state): State<crate::AppState>,
) -> AppResult<Json<WeeklyTrends>> {
    let trends = state.services.stats.weekly_trends().await?;
    Ok(Json(trends))
}
