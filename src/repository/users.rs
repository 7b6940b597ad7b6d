//! User directory methods on Repository

use crate::{
    error::{AppError, AppResult},
    models::user::{CreateUser, UpdateUser, User, UserRole},
};

use super::Repository;

impl Repository {
    /// List users
    pub async fn users_list(&self, include_inactive: bool) -> AppResult<Vec<User>> {
        let sql = if include_inactive {
            "SELECT * FROM users ORDER BY id"
        } else {
            "SELECT * FROM users WHERE active = TRUE ORDER BY id"
        };
        let rows = sqlx::query_as::<_, User>(sql)
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    /// Get user by ID
    pub async fn users_get_by_id(&self, id: i32) -> AppResult<User> {
        sqlx::query_as::<_, User>("SELECT * FROM users WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("User {} not found", id)))
    }

    /// Find user by username
    pub async fn users_find_by_username(&self, username: &str) -> AppResult<Option<User>> {
        let row = sqlx::query_as::<_, User>("SELECT * FROM users WHERE username = $1")
            .bind(username)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row)
    }

    /// Create user
    pub async fn users_create(&self, data: &CreateUser) -> AppResult<User> {
        let role = data.role.unwrap_or(UserRole::Citizen);
        let row = sqlx::query_as::<_, User>(
            r#"
            INSERT INTO users (username, email, first_name, last_name, role)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING *
            "#,
        )
        .bind(&data.username)
        .bind(&data.email)
        .bind(&data.first_name)
        .bind(&data.last_name)
        .bind(role.as_str())
        .fetch_one(&self.pool)
        .await?;
        Ok(row)
    }

    /// Update user
    pub async fn users_update(&self, id: i32, data: &UpdateUser) -> AppResult<User> {
        let role = data.role.map(|r| r.as_str().to_string());

        let mut sets: Vec<String> = Vec::new();
        let mut idx = 1;

        macro_rules! add_field {
            ($field:expr, $name:expr) => {
                if $field.is_some() {
                    sets.push(format!("{} = ${}", $name, idx));
                    idx += 1;
                }
            };
        }

        add_field!(data.email, "email");
        add_field!(data.first_name, "first_name");
        add_field!(data.last_name, "last_name");
        add_field!(role, "role");
        add_field!(data.active, "active");
        let _ = idx;

        if sets.is_empty() {
            return self.users_get_by_id(id).await;
        }

        let query = format!(
            "UPDATE users SET {} WHERE id = {} RETURNING *",
            sets.join(", "),
            id
        );

        let mut builder = sqlx::query_as::<_, User>(&query);

        macro_rules! bind_field {
            ($field:expr) => {
                if let Some(ref val) = $field {
                    builder = builder.bind(val);
                }
            };
        }

        bind_field!(data.email);
        bind_field!(data.first_name);
        bind_field!(data.last_name);
        bind_field!(role);
        bind_field!(data.active);

        builder
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("User {} not found", id)))
    }

    /// Soft-delete a user
    pub async fn users_deactivate(&self, id: i32) -> AppResult<()> {
        let result = sqlx::query("UPDATE users SET active = FALSE WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("User {} not found", id)));
        }
        Ok(())
    }
}
