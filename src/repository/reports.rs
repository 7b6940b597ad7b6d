//! Report domain methods on Repository

use crate::{
    error::{AppError, AppResult},
    models::report::{CreateReport, Report, ReportQuery, UpdateReport},
};

use super::Repository;

impl Repository {
    /// Search reports with optional filters, newest first, paginated.
    /// Returns the matching page and the total match count.
    pub async fn reports_search(&self, query: &ReportQuery) -> AppResult<(Vec<Report>, i64)> {
        let mut conditions: Vec<String> = Vec::new();
        let mut idx = 0usize;

        if query.category_id.is_some() {
            idx += 1;
            conditions.push(format!("category_id = ${}", idx));
        }
        if query.state_id.is_some() {
            idx += 1;
            conditions.push(format!("state_id = ${}", idx));
        }
        if query.from.is_some() {
            idx += 1;
            conditions.push(format!("created_at >= ${}", idx));
        }
        if query.to.is_some() {
            idx += 1;
            conditions.push(format!("created_at <= ${}", idx));
        }

        let where_clause = if conditions.is_empty() {
            String::new()
        } else {
            format!(" WHERE {}", conditions.join(" AND "))
        };

        let count_sql = format!("SELECT COUNT(*) FROM reports{}", where_clause);
        let mut count_query = sqlx::query_scalar::<_, i64>(&count_sql);
        if let Some(v) = query.category_id {
            count_query = count_query.bind(v);
        }
        if let Some(v) = query.state_id {
            count_query = count_query.bind(v);
        }
        if let Some(v) = query.from {
            count_query = count_query.bind(v);
        }
        if let Some(v) = query.to {
            count_query = count_query.bind(v);
        }
        let total = count_query.fetch_one(&self.pool).await?;

        let page = query.page.unwrap_or(1).max(1);
        let per_page = query.per_page.unwrap_or(20).clamp(1, 100);

        let list_sql = format!(
            "SELECT * FROM reports{} ORDER BY created_at DESC LIMIT ${} OFFSET ${}",
            where_clause,
            idx + 1,
            idx + 2
        );
        let mut list_query = sqlx::query_as::<_, Report>(&list_sql);
        if let Some(v) = query.category_id {
            list_query = list_query.bind(v);
        }
        if let Some(v) = query.state_id {
            list_query = list_query.bind(v);
        }
        if let Some(v) = query.from {
            list_query = list_query.bind(v);
        }
        if let Some(v) = query.to {
            list_query = list_query.bind(v);
        }
        let rows = list_query
            .bind(per_page)
            .bind((page - 1) * per_page)
            .fetch_all(&self.pool)
            .await?;

        Ok((rows, total))
    }

    /// Get report by ID
    pub async fn reports_get_by_id(&self, id: i32) -> AppResult<Report> {
        sqlx::query_as::<_, Report>("SELECT * FROM reports WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Report {} not found", id)))
    }

    /// Get report by folio
    pub async fn reports_get_by_folio(&self, folio: &str) -> AppResult<Report> {
        sqlx::query_as::<_, Report>("SELECT * FROM reports WHERE folio = $1")
            .bind(folio)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Report {} not found", folio)))
    }

    /// Insert a report. The folio is derived from the same sequence value as
    /// the row id so both stay consistent under concurrent inserts.
    pub async fn reports_create(&self, data: &CreateReport, state_id: i32) -> AppResult<Report> {
        let row = sqlx::query_as::<_, Report>(
            r#"
            WITH next_id AS (
                SELECT nextval(pg_get_serial_sequence('reports', 'id'))::int AS id
            )
            INSERT INTO reports (id, folio, reporter_first_name, reporter_paternal_surname,
                                 reporter_maternal_surname, reporter_phone, category_id,
                                 state_id, description, address)
            SELECT id,
                   'SIRSE-' || to_char(now(), 'YYYY') || '-' || to_char(id, 'FM000000'),
                   $1, $2, $3, $4, $5, $6, $7, $8
            FROM next_id
            RETURNING *
            "#,
        )
        .bind(&data.reporter_first_name)
        .bind(&data.reporter_paternal_surname)
        .bind(&data.reporter_maternal_surname)
        .bind(&data.reporter_phone)
        .bind(data.category_id)
        .bind(state_id)
        .bind(&data.description)
        .bind(&data.address)
        .fetch_one(&self.pool)
        .await?;
        Ok(row)
    }

    /// Partial update. Folio and created_at are immutable and never touched.
    pub async fn reports_update(&self, id: i32, data: &UpdateReport) -> AppResult<Report> {
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

        add_field!(data.category_id, "category_id");
        add_field!(data.state_id, "state_id");
        add_field!(data.description, "description");
        add_field!(data.address, "address");
        let _ = idx;

        if sets.is_empty() {
            return self.reports_get_by_id(id).await;
        }

        let query = format!(
            "UPDATE reports SET {} WHERE id = {} RETURNING *",
            sets.join(", "),
            id
        );

        let mut builder = sqlx::query_as::<_, Report>(&query);

        macro_rules! bind_field {
            ($field:expr) => {
                if let Some(ref val) = $field {
                    builder = builder.bind(val);
                }
            };
        }

        bind_field!(data.category_id);
        bind_field!(data.state_id);
        bind_field!(data.description);
        bind_field!(data.address);

        builder
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Report {} not found", id)))
    }

    /// Delete a report
    pub async fn reports_delete(&self, id: i32) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM reports WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("Report {} not found", id)));
        }
        Ok(())
    }
}
