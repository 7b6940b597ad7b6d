//! Citizen report service

use validator::Validate;

use crate::{
    error::{AppError, AppResult},
    models::report::{CreateReport, Report, ReportQuery, UpdateReport},
    models::state::STATE_PENDING,
    repository::Repository,
};

#[derive(Clone)]
pub struct ReportsService {
    repository: Repository,
}

impl ReportsService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// Search reports with filters and pagination
    pub async fn search(&self, query: &ReportQuery) -> AppResult<(Vec<Report>, i64)> {
        self.repository.reports_search(query).await
    }

    /// Get report by ID
    pub async fn get(&self, id: i32) -> AppResult<Report> {
        self.repository.reports_get_by_id(id).await
    }

    /// Get report by its citizen-facing folio
    pub async fn get_by_folio(&self, folio: &str) -> AppResult<Report> {
        self.repository.reports_get_by_folio(folio).await
    }

    /// Create a report. The referenced category must exist and be active,
    /// and the state must exist; the folio is generated at insert time.
    pub async fn create(&self, data: CreateReport) -> AppResult<Report> {
        data.validate()
            .map_err(|e| AppError::Validation(e.to_string()))?;

        let category = self.repository.categories_get_by_id(data.category_id).await?;
        if !category.active {
            return Err(AppError::Validation(format!(
                "Category '{}' is inactive",
                category.name
            )));
        }

        let state_id = data.state_id.unwrap_or(STATE_PENDING);
        self.repository.states_get_by_id(state_id).await?;

        let report = self.repository.reports_create(&data, state_id).await?;
        tracing::info!("Created report {} (category {})", report.folio, category.name);
        Ok(report)
    }

    /// Partial update. Referenced rows are re-checked when changed.
    pub async fn update(&self, id: i32, data: UpdateReport) -> AppResult<Report> {
        data.validate()
            .map_err(|e| AppError::Validation(e.to_string()))?;

        if let Some(category_id) = data.category_id {
            let category = self.repository.categories_get_by_id(category_id).await?;
            if !category.active {
                return Err(AppError::Validation(format!(
                    "Category '{}' is inactive",
                    category.name
                )));
            }
        }
        if let Some(state_id) = data.state_id {
            self.repository.states_get_by_id(state_id).await?;
        }

        self.repository.reports_update(id, &data).await
    }

    /// Delete a report
    pub async fn delete(&self, id: i32) -> AppResult<()> {
        self.repository.reports_delete(id).await
    }
}
