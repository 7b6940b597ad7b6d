//! Reference data service: categories, lifecycle states and departments

use validator::Validate;

use crate::{
    error::{AppError, AppResult},
    models::category::{Category, CreateCategory, UpdateCategory},
    models::department::{CreateDepartment, Department, UpdateDepartment},
    models::state::{CreateState, State, UpdateState},
    repository::Repository,
};

#[derive(Clone)]
pub struct CatalogService {
    repository: Repository,
}

impl CatalogService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    // --- Categories ---

    pub async fn list_categories(&self, include_inactive: bool) -> AppResult<Vec<Category>> {
        self.repository.categories_list(include_inactive).await
    }

    pub async fn get_category(&self, id: i32) -> AppResult<Category> {
        self.repository.categories_get_by_id(id).await
    }

    /// Create a category; names are unique.
    pub async fn create_category(&self, data: CreateCategory) -> AppResult<Category> {
        data.validate()
            .map_err(|e| AppError::Validation(e.to_string()))?;

        if self
            .repository
            .categories_find_by_name(&data.name)
            .await?
            .is_some()
        {
            return Err(AppError::Conflict(format!(
                "Category '{}' already exists",
                data.name
            )));
        }

        self.repository.categories_create(&data).await
    }

    pub async fn update_category(&self, id: i32, data: UpdateCategory) -> AppResult<Category> {
        data.validate()
            .map_err(|e| AppError::Validation(e.to_string()))?;

        if let Some(ref name) = data.name {
            if let Some(existing) = self.repository.categories_find_by_name(name).await? {
                if existing.id != id {
                    return Err(AppError::Conflict(format!(
                        "Category '{}' already exists",
                        name
                    )));
                }
            }
        }

        self.repository.categories_update(id, &data).await
    }

    /// Soft delete: the row stays so historical reports keep their reference.
    pub async fn delete_category(&self, id: i32) -> AppResult<()> {
        self.repository.categories_deactivate(id).await
    }

    // --- States ---

    pub async fn list_states(&self, include_inactive: bool) -> AppResult<Vec<State>> {
        self.repository.states_list(include_inactive).await
    }

    pub async fn get_state(&self, id: i32) -> AppResult<State> {
        self.repository.states_get_by_id(id).await
    }

    pub async fn create_state(&self, data: CreateState) -> AppResult<State> {
        data.validate()
            .map_err(|e| AppError::Validation(e.to_string()))?;
        self.repository.states_create(&data).await
    }

    pub async fn update_state(&self, id: i32, data: UpdateState) -> AppResult<State> {
        data.validate()
            .map_err(|e| AppError::Validation(e.to_string()))?;
        self.repository.states_update(id, &data).await
    }

    pub async fn delete_state(&self, id: i32) -> AppResult<()> {
        self.repository.states_deactivate(id).await
    }

    // --- Departments ---

    pub async fn list_departments(&self, include_inactive: bool) -> AppResult<Vec<Department>> {
        self.repository.departments_list(include_inactive).await
    }

    pub async fn get_department(&self, id: i32) -> AppResult<Department> {
        self.repository.departments_get_by_id(id).await
    }

    pub async fn create_department(&self, data: CreateDepartment) -> AppResult<Department> {
        data.validate()
            .map_err(|e| AppError::Validation(e.to_string()))?;
        self.repository.departments_create(&data).await
    }

    pub async fn update_department(
        &self,
        id: i32,
        data: UpdateDepartment,
    ) -> AppResult<Department> {
        data.validate()
            .map_err(|e| AppError::Validation(e.to_string()))?;
        self.repository.departments_update(id, &data).await
    }

    pub async fn delete_department(&self, id: i32) -> AppResult<()> {
        self.repository.departments_deactivate(id).await
    }
}
