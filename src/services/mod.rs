//! Business logic services

pub mod catalog;
pub mod reports;
pub mod stats;
pub mod users;

use crate::repository::Repository;

/// Container for all services
#[derive(Clone)]
pub struct Services {
    pub reports: reports::ReportsService,
    pub catalog: catalog::CatalogService,
    pub users: users::UsersService,
    pub stats: stats::StatsService,
}

impl Services {
    /// Create all services with the given repository
    pub fn new(repository: Repository) -> Self {
        Self {
            reports: reports::ReportsService::new(repository.clone()),
            catalog: catalog::CatalogService::new(repository.clone()),
            users: users::UsersService::new(repository.clone()),
            stats: stats::StatsService::new(repository),
        }
    }
}
