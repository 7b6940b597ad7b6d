//! Department domain methods on Repository

use crate::{
    error::{AppError, AppResult},
    models::department::{CreateDepartment, Department, UpdateDepartment},
};

use super::Repository;

impl Repository {
    /// List departments
    pub async fn departments_list(&self, include_inactive: bool) -> AppResult<Vec<Department>> {
        let sql = if include_inactive {
            "SELECT * FROM departments ORDER BY id"
        } else {
            "SELECT * FROM departments WHERE active = TRUE ORDER BY id"
        };
        let rows = sqlx::query_as::<_, Department>(sql)
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    /// Get department by ID
    pub async fn departments_get_by_id(&self, id: i32) -> AppResult<Department> {
        sqlx::query_as::<_, Department>("SELECT * FROM departments WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Department {} not found", id)))
    }

    /// Create department
    pub async fn departments_create(&self, data: &CreateDepartment) -> AppResult<Department> {
        let row = sqlx::query_as::<_, Department>(
            r#"
            INSERT INTO departments (name, description)
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

    /// Update department
    pub async fn departments_update(
        &self,
        id: i32,
        data: &UpdateDepartment,
    ) -> AppResult<Department> {
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
            return self.departments_get_by_id(id).await;
        }

        let query = format!(
            "UPDATE departments SET {} WHERE id = {} RETURNING *",
            sets.join(", "),
            id
        );

        let mut builder = sqlx::query_as::<_, Department>(&query);

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
            .ok_or_else(|| AppError::NotFound(format!("Department {} not found", id)))
    }

    /// Soft-delete a department
    pub async fn departments_deactivate(&self, id: i32) -> AppResult<()> {
        let result = sqlx::query("UPDATE departments SET active = FALSE WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("Department {} not found", id)));
        }
        Ok(())
    }
}
