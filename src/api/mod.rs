//! API handlers for the SIRSE REST endpoints

pub mod categories;
pub mod departments;
pub mod health;
pub mod openapi;
pub mod reports;
pub mod states;
pub mod stats;
pub mod users;

use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

/// Paginated response wrapper
#[derive(Serialize, ToSchema)]
pub struct PaginatedResponse<T>
where
    T: for<'a> ToSchema<'a>,
{
    /// List of items
    pub items: Vec<T>,
    /// Total number of items
    pub total: i64,
    /// Current page number
    pub page: i64,
    /// Items per page
    pub per_page: i64,
}

/// Listing flag shared by the reference-data endpoints
#[derive(Debug, Default, Deserialize, IntoParams, ToSchema)]
pub struct ListQuery {
    /// Include soft-deleted rows (default: false)
    #[serde(default)]
    pub include_inactive: bool,
}
