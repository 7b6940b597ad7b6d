//! SIRSE - Sistema Integral de Reportes de Seguridad y Emergencias
//!
//! REST API server for municipal incident reporting: citizen reports are
//! categorized, assigned a lifecycle state and aggregated into dashboards
//! for administrators.

use std::sync::Arc;

pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod repository;
pub mod services;

pub use config::AppConfig;
pub use error::{AppError, AppResult};

use sqlx::PgPool;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub db: PgPool,
    pub services: Arc<services::Services>,
}
