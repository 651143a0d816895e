//! API request/response models for coursework badges.

use super::{Validate, require_non_blank};
use crate::db::models::coursework::CourseworkDBResponse;
use crate::errors::Error;
use crate::types::{CourseworkId, ProfileId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CourseworkCreate {
    #[schema(value_type = String, format = "uuid")]
    pub profile_id: ProfileId,
    #[schema(example = "Distributed Systems")]
    pub course: String,
    /// Theme color for the badge (default: "primary")
    pub color: Option<String>,
    pub sort_order: Option<i32>,
}

impl Validate for CourseworkCreate {
    fn validate(&self) -> Result<(), Error> {
        require_non_blank("course", &self.course)?;
        super::require_non_blank_if_present("color", self.color.as_deref())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CourseworkResponse {
    #[schema(value_type = String, format = "uuid")]
    pub id: CourseworkId,
    #[schema(value_type = String, format = "uuid")]
    pub profile_id: ProfileId,
    pub course: String,
    pub color: String,
    pub sort_order: i32,
    pub created_at: DateTime<Utc>,
}

impl From<CourseworkDBResponse> for CourseworkResponse {
    fn from(db: CourseworkDBResponse) -> Self {
        Self {
            id: db.id,
            profile_id: db.profile_id,
            course: db.course,
            color: db.color,
            sort_order: db.sort_order,
            created_at: db.created_at,
        }
    }
}
