//! User directory service

use validator::Validate;

use crate::{
    error::{AppError, AppResult},
    models::user::{CreateUser, UpdateUser, User},
    repository::Repository,
};

#[derive(Clone)]
pub struct UsersService {
    repository: Repository,
}

impl UsersService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    pub async fn list(&self, include_inactive: bool) -> AppResult<Vec<User>> {
        self.repository.users_list(include_inactive).await
    }

    pub async fn get(&self, id: i32) -> AppResult<User> {
        self.repository.users_get_by_id(id).await
    }

    /// Create a user; usernames are unique.
    pub async fn create(&self, data: CreateUser) -> AppResult<User> {
        data.validate()
            .map_err(|e| AppError::Validation(e.to_string()))?;

        if self
            .repository
            .users_find_by_username(&data.username)
            .await?
            .is_some()
        {
            return Err(AppError::Conflict(format!(
                "User '{}' already exists",
                data.username
            )));
        }

        self.repository.users_create(&data).await
    }

    pub async fn update(&self, id: i32, data: UpdateUser) -> AppResult<User> {
        data.validate()
            .map_err(|e| AppError::Validation(e.to_string()))?;
        self.repository.users_update(id, &data).await
    }

    pub async fn delete(&self, id: i32) -> AppResult<()> {
        self.repository.users_deactivate(id).await
    }
}
