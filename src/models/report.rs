//! Citizen report model and related types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

/// Citizen report record
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Report {
    pub id: i32,
    /// Human-readable tracking code (e.g. "SIRSE-2024-000123")
    pub folio: String,
    pub reporter_first_name: String,
    pub reporter_paternal_surname: String,
    pub reporter_maternal_surname: Option<String>,
    pub reporter_phone: Option<String>,
    pub category_id: i32,
    pub state_id: i32,
    pub description: Option<String>,
    /// Free-text incident location; no normalization is applied
    pub address: Option<String>,
    /// Set by the database at insert time; immutable afterwards
    pub created_at: DateTime<Utc>,
}

impl Report {
    /// Reporter display name: first name plus paternal surname.
    pub fn reporter_full_name(&self) -> String {
        format!("{} {}", self.reporter_first_name, self.reporter_paternal_surname)
    }
}

/// Create report request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateReport {
    #[validate(length(min = 1, max = 100))]
    pub reporter_first_name: String,
    #[validate(length(min = 1, max = 100))]
    pub reporter_paternal_surname: String,
    #[validate(length(max = 100))]
    pub reporter_maternal_surname: Option<String>,
    #[validate(length(max = 20))]
    pub reporter_phone: Option<String>,
    pub category_id: i32,
    /// Lifecycle state; defaults to Pending when omitted
    pub state_id: Option<i32>,
    pub description: Option<String>,
    pub address: Option<String>,
}

/// Update report request (partial; folio and created_at are immutable)
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpdateReport {
    pub category_id: Option<i32>,
    pub state_id: Option<i32>,
    pub description: Option<String>,
    pub address: Option<String>,
}

/// Report listing filters
#[derive(Debug, Default, Deserialize, IntoParams, ToSchema)]
pub struct ReportQuery {
    /// Filter by category
    pub category_id: Option<i32>,
    /// Filter by lifecycle state
    pub state_id: Option<i32>,
    /// Creation date lower bound (inclusive, ISO 8601)
    pub from: Option<DateTime<Utc>>,
    /// Creation date upper bound (inclusive, ISO 8601)
    pub to: Option<DateTime<Utc>>,
    /// Page number (default: 1)
    pub page: Option<i64>,
    /// Reports per page (default: 20)
    pub per_page: Option<i64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reporter_full_name() {
        let report = Report {
            id: 1,
            folio: "SIRSE-2024-000001".to_string(),
            reporter_first_name: "María".to_string(),
            reporter_paternal_surname: "García".to_string(),
            reporter_maternal_surname: Some("López".to_string()),
            reporter_phone: None,
            category_id: 1,
            state_id: 1,
            description: None,
            address: None,
            created_at: Utc::now(),
        };
        assert_eq!(report.reporter_full_name(), "María García");
    }
}
