//! Database models for interests.

use crate::api::models::interests::InterestCreate;
use crate::types::{InterestId, ProfileId};
use chrono::{DateTime, Utc};
use sqlx::FromRow;

#[derive(Debug, Clone)]
pub struct InterestCreateDBRequest {
    pub profile_id: ProfileId,
    pub label: String,
    pub icon: String,
    pub sort_order: i32,
}

impl From<InterestCreate> for InterestCreateDBRequest {
    fn from(api: InterestCreate) -> Self {
        Self {
            profile_id: api.profile_id,
            label: api.label,
            icon: api.icon,
            sort_order: api.sort_order.unwrap_or(0),
        }
    }
}

#[derive(Debug, Clone, FromRow)]
pub struct InterestDBResponse {
    pub id: InterestId,
    pub profile_id: ProfileId,
    pub label: String,
    pub icon: String,
    pub sort_order: i32,
    pub created_at: DateTime<Utc>,
}
