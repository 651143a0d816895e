//! API request/response models for interests.

use super::{Validate, require_non_blank};
use crate::db::models::interests::InterestDBResponse;
use crate::errors::Error;
use crate::types::{InterestId, ProfileId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct InterestCreate {
    #[schema(value_type = String, format = "uuid")]
    pub profile_id: ProfileId,
    #[schema(example = "Rock climbing")]
    pub label: String,
    #[schema(example = "mountain")]
    pub icon: String,
    pub sort_order: Option<i32>,
}

impl Validate for InterestCreate {
    fn validate(&self) -> Result<(), Error> {
        require_non_blank("label", &self.label)?;
        require_non_blank("icon", &self.icon)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct InterestResponse {
    #[schema(value_type = String, format = "uuid")]
    pub id: InterestId,
    #[schema(value_type = String, format = "uuid")]
    pub profile_id: ProfileId,
    pub label: String,
    pub icon: String,
    pub sort_order: i32,
    pub created_at: DateTime<Utc>,
}

impl From<InterestDBResponse> for InterestResponse {
    fn from(db: InterestDBResponse) -> Self {
        Self {
            id: db.id,
            profile_id: db.profile_id,
            label: db.label,
            icon: db.icon,
            sort_order: db.sort_order,
            created_at: db.created_at,
        }
    }
}
