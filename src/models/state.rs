//! Report lifecycle state model

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

/// Stable numeric codes for the seeded lifecycle states. Statistics queries
/// identify states by these codes, so the seed order must not change.
pub const STATE_PENDING: i32 = 1;
pub const STATE_IN_PROCESS: i32 = 2;
pub const STATE_RESOLVED: i32 = 3;
pub const STATE_REJECTED: i32 = 4;
pub const STATE_CLOSED: i32 = 5;

/// Report lifecycle state record
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct State {
    pub id: i32,
    pub name: String,
    pub description: Option<String>,
    pub active: bool,
}

/// Create state request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateState {
    #[validate(length(min = 1, max = 50))]
    pub name: String,
    pub description: Option<String>,
}

/// Update state request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpdateState {
    #[validate(length(min = 1, max = 50))]
    pub name: Option<String>,
    pub description: Option<String>,
    pub active: Option<bool>,
}
