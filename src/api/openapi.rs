//! OpenAPI documentation

use axum::Router;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::api::{categories, departments, health, reports, states, stats, users};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "SIRSE API",
        version = "1.0.0",
        description = "Sistema Integral de Reportes de Seguridad y Emergencias - REST API",
        license(name = "AGPL-3.0", url = "https://www.gnu.org/licenses/agpl-3.0.html"),
        contact(name = "SIRSE Team", email = "sistemas@tulancingo.gob.mx")
    ),
    servers(
        (url = "/api/v1", description = "API v1")
    ),
    paths(
        // Health
        health::health_check,
        health::readiness_check,
        // Reports
        reports::list_reports,
        reports::get_report,
        reports::get_report_by_folio,
        reports::create_report,
        reports::update_report,
        reports::delete_report,
        // Categories
        categories::list_categories,
        categories::get_category,
        categories::create_category,
        categories::update_category,
        categories::delete_category,
        // States
        states::list_states,
        states::get_state,
        states::create_state,
        states::update_state,
        states::delete_state,
        // Departments
        departments::list_departments,
        departments::get_department,
        departments::create_department,
        departments::update_department,
        departments::delete_department,
        // Users
        users::list_users,
        users::get_user,
        users::create_user,
        users::update_user,
        users::delete_user,
        // Stats
        stats::general,
        stats::advanced,
        stats::by_category,
        stats::by_state,
        stats::by_month,
        stats::recent,
        stats::hot_zones,
        stats::monthly_chart,
        stats::category_chart,
        stats::department_performance,
        stats::weekly_trends,
    ),
    components(
        schemas(
            // Reports
            crate::models::report::Report,
            crate::models::report::CreateReport,
            crate::models::report::UpdateReport,
            crate::models::report::ReportQuery,
            // Categories
            crate::models::category::Category,
            crate::models::category::CreateCategory,
            crate::models::category::UpdateCategory,
            // States
            crate::models::state::State,
            crate::models::state::CreateState,
            crate::models::state::UpdateState,
            // Departments
            crate::models::department::Department,
            crate::models::department::CreateDepartment,
            crate::models::department::UpdateDepartment,
            // Users
            crate::models::user::User,
            crate::models::user::UserRole,
            crate::models::user::CreateUser,
            crate::models::user::UpdateUser,
            // Stats
            stats::GeneralStats,
            stats::AdvancedMetrics,
            stats::CategoryCount,
            stats::StateCount,
            stats::MonthCount,
            stats::RecentReport,
            stats::AddressCount,
            stats::ChartSeries,
            stats::DepartmentPerformance,
            stats::WeeklyTrends,
            // Health
            health::HealthResponse,
            health::ServiceInfo,
            // Errors
            crate::error::ErrorResponse,
        )
    ),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "reports", description = "Citizen report management"),
        (name = "categories", description = "Report category management"),
        (name = "states", description = "Report lifecycle states"),
        (name = "departments", description = "Municipal departments"),
        (name = "users", description = "User directory"),
        (name = "stats", description = "Statistics and dashboard aggregations")
    )
)]
pub struct ApiDoc;

/// Create the OpenAPI documentation router
pub fn create_openapi_router() -> Router {
    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
}
