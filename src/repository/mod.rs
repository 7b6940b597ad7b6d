//! Repository layer for database operations

pub mod categories;
pub mod departments;
pub mod reports;
pub mod states;
pub mod users;

use sqlx::{Pool, Postgres};

/// Main repository struct holding the database connection pool.
/// Domain methods are implemented in the per-table modules.
#[derive(Clone)]
pub struct Repository {
    pub pool: Pool<Postgres>,
}

impl Repository {
    /// Create a new repository with the given database pool
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }
}
