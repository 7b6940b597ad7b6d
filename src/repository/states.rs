//! Lifecycle state domain methods on Repository

use crate::{
    error::{AppError, AppResult},
    models::state::{CreateState, State, UpdateState},
};

use super::Repository;

impl Repository {
    /// List states in code order
    pub async fn states_list(&self, include_inactive: bool) -> AppResult<Vec<State>> {
        let sql = if include_inactive {
            "SELECT * FROM states ORDER BY id"
        } else {
            "SELECT * FROM states WHERE active = TRUE ORDER BY id"
        };
        let rows = sqlx::query_as::<_, State>(sql)
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    /// Get state by ID
    pub async fn states_get_by_id(&self, id: i32) -> AppResult<State> {
        sqlx::query_as::<_, State>("SELECT * FROM states WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("State {} not found", id)))
    }

    /// Create state
    pub async fn states_create(&self, data: &CreateState) -> AppResult<State> {
        let row = sqlx::query_as::<_, State>(
            r#"
            INSERT INTO states (name, description)
            VALUES ($1, $2)
            RETURNING *
            "#,
        )
        .bind(&data.name)
        .bind(&data.description)
        .fetch_one(&self.pool)
        .await?;
        Ok(row)
    }

    /// Update state
    pub async fn states_update(&self, id: i32, data: &UpdateState) -> AppResult<State> {
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

        add_field!(data.name, "name");
        add_field!(data.description, "description");
        add_field!(data.active, "active");
        let _ = idx;

        if sets.is_empty() {
            return self.states_get_by_id(id).await;
        }

        let query = format!(
            "UPDATE states SET {} WHERE id = {} RETURNING *",
            sets.join(", "),
            id
        );

        let mut builder = sqlx::query_as::<_, State>(&query);

        macro_rules! bind_field {
            ($field:expr) => {
                if let Some(ref val) = $field {
                    builder = builder.bind(val);
                }
            };
        }

        bind_field!(data.name);
        bind_field!(data.description);
        bind_field!(data.active);

        builder
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("State {} not found", id)))
    }

    /// Soft-delete a state
    pub async fn states_deactivate(&self, id: i32) -> AppResult<()> {
        let result = sqlx::query("UPDATE states SET active = FALSE WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("State {} not found", id)));
        }
        Ok(())
    }
}
