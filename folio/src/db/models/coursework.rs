//! Database models for coursework badges.

use crate::api::models::coursework::CourseworkCreate;
use crate::types::{CourseworkId, ProfileId};
use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Theme color applied when the request does not name one
pub const DEFAULT_COLOR: &str = "primary";

#[derive(Debug, Clone)]
pub struct CourseworkCreateDBRequest {
    pub profile_id: ProfileId,
    pub course: String,
    pub color: String,
    pub sort_order: i32,
}

impl From<CourseworkCreate> for CourseworkCreateDBRequest {
    fn from(api: CourseworkCreate) -> Self {
        Self {
            profile_id: api.profile_id,
            course: api.course,
            color: api.color.unwrap_or_else(|| DEFAULT_COLOR.to_string()),
            sort_order: api.sort_order.unwrap_or(0),
        }
    }
}

#[derive(Debug, Clone, FromRow)]
pub struct CourseworkDBResponse {
    pub id: CourseworkId,
    pub profile_id: ProfileId,
    pub course: String,
    pub color: String,
    pub sort_order: i32,
    pub created_at: DateTime<Utc>,
}
