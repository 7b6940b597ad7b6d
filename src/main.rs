//! SIRSE Server - Municipal Incident Reporting System
//!
//! REST API server for citizen incident reports and admin dashboards.

use axum::{
    routing::{delete, get, post, put},
    Router,
};
use sqlx::postgres::PgPoolOptions;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use sirse_server::{api, config::AppConfig, repository::Repository, services::Services, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    // Load configuration
    let config = AppConfig::load().expect("Failed to load configuration");

    // Initialize tracing
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| format!("sirse_server={},tower_http=debug", config.logging.level).into());

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting SIRSE Server v{}", env!("CARGO_PKG_VERSION"));

    // Create database connection pool
    let pool = PgPoolOptions::new()
        .max_connections(config.database.max_connections)
        .min_connections(config.database.min_connections)
        .connect(&config.database.url)
        .await
        .expect("Failed to connect to database");

    tracing::info!("Connected to database");

    // Run migrations
    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .expect("Failed to run database migrations");

    tracing::info!("Database migrations completed");

    // Save server address before moving config
    let server_host = config.server.host.clone();
    let server_port = config.server.port;

    // Create repository and services
    let repository = Repository::new(pool.clone());
    let services = Services::new(repository);

    // Create application state
    let state = AppState {
        config: Arc::new(config),
        db: pool,
        services: Arc::new(services),
    };

    // Build router
    let app = create_router(state);

    // Start server
    let addr = SocketAddr::new(
        server_host.parse().expect("Invalid host address"),
        server_port,
    );

    tracing::info!("Server listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Create the application router with all routes
fn create_router(state: AppState) -> Router {
    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // API v1 routes
    let api_v1 = Router::new()
        // Health check
        .route("/health", get(api::health::health_check))
        .route("/ready", get(api::health::readiness_check))
        // Reports
        .route("/reports", get(api::reports::list_reports))
        .route("/reports", post(api::reports::create_report))
        .route("/reports/:id", get(api::reports::get_report))
        .route("/reports/folio/:folio", get(api::reports::get_report_by_folio))
        .route("/reports/:id", put(api::reports::update_report))
        .route("/reports/:id", delete(api::reports::delete_report))
        // Categories
        .route("/categories", get(api::categories::list_categories))
        .route("/categories", post(api::categories::create_category))
        .route("/categories/:id", get(api::categories::get_category))
        .route("/categories/:id", put(api::categories::update_category))
        .route("/categories/:id", delete(api::categories::delete_category))
        // States
        .route("/states", get(api::states::list_states))
        .route("/states", post(api::states::create_state))
        .route("/states/:id", get(api::states::get_state))
        .route("/states/:id", put(api::states::update_state))
        .route("/states/:id", delete(api::states::delete_state))
        // Departments
        .route("/departments", get(api::departments::list_departments))
        .route("/departments", post(api::departments::create_department))
        .route("/departments/:id", get(api::departments::get_department))
        .route("/departments/:id", put(api::departments::update_department))
        .route("/departments/:id", delete(api::departments::delete_department))
        // Users
        .route("/users", get(api::users::list_users))
        .route("/users", post(api::users::create_user))
        .route("/users/:id", get(api::users::get_user))
        .route("/users/:id", put(api::users::update_user))
        .route("/users/:id", delete(api::users::delete_user))
        // Statistics
        .route("/stats/general", get(api::stats::general))
        .route("/stats/advanced", get(api::stats::advanced))
        .route("/stats/by-category", get(api::stats::by_category))
        .route("/stats/by-state", get(api::stats::by_state))
        .route("/stats/by-month", get(api::stats::by_month))
        .route("/stats/recent", get(api::stats::recent))
        .route("/stats/hot-zones", get(api::stats::hot_zones))
        .route("/stats/monthly-chart", get(api::stats::monthly_chart))
        .route("/stats/category-chart", get(api::stats::category_chart))
        .route(
            "/stats/department-performance",
            get(api::stats::department_performance),
        )
        .route("/stats/weekly-trends", get(api::stats::weekly_trends))
        .with_state(state.clone());

    // OpenAPI documentation
    let openapi = api::openapi::create_openapi_router();

    Router::new()
        .route("/", get(api::health::root))
        .nest("/api/v1", api_v1)
        .merge(openapi)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}
