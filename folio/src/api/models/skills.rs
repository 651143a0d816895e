//! API request/response models for skill categories and skills.

use super::{Validate, require_non_blank};
use crate::db::models::skills::{SkillCategoryDBResponse, SkillCategoryWithSkills, SkillDBResponse};
use crate::errors::Error;
use crate::types::{ProfileId, SkillCategoryId, SkillId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Inclusive bounds for a skill's proficiency percentage
pub const PERCENTAGE_RANGE: std::ops::RangeInclusive<i32> = 0..=100;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SkillCategoryCreate {
    #[schema(value_type = String, format = "uuid")]
    pub profile_id: ProfileId,
    #[schema(example = "Backend")]
    pub title: String,
    /// Icon name rendered next to the category title
    #[schema(example = "server")]
    pub icon: String,
    pub sort_order: Option<i32>,
}

impl Validate for SkillCategoryCreate {
    fn validate(&self) -> Result<(), Error> {
        require_non_blank("title", &self.title)?;
        require_non_blank("icon", &self.icon)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SkillCreate {
    #[schema(value_type = String, format = "uuid")]
    pub category_id: SkillCategoryId,
    #[schema(example = "Rust")]
    pub name: String,
    /// Proficiency from 0 to 100
    #[schema(minimum = 0, maximum = 100, example = 90)]
    pub percentage: i32,
    pub sort_order: Option<i32>,
}

impl Validate for SkillCreate {
    fn validate(&self) -> Result<(), Error> {
        require_non_blank("name", &self.name)?;
        if !PERCENTAGE_RANGE.contains(&self.percentage) {
            return Err(Error::BadRequest {
                message: "percentage must be between 0 and 100".to_string(),
            });
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SkillCategoryResponse {
    #[schema(value_type = String, format = "uuid")]
    pub id: SkillCategoryId,
    #[schema(value_type = String, format = "uuid")]
    pub profile_id: ProfileId,
    pub title: String,
    pub icon: String,
    pub sort_order: i32,
    pub created_at: DateTime<Utc>,
}

impl From<SkillCategoryDBResponse> for SkillCategoryResponse {
    fn from(db: SkillCategoryDBResponse) -> Self {
        Self {
            id: db.id,
            profile_id: db.profile_id,
            title: db.title,
            icon: db.icon,
            sort_order: db.sort_order,
            created_at: db.created_at,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SkillResponse {
    #[schema(value_type = String, format = "uuid")]
    pub id: SkillId,
    #[schema(value_type = String, format = "uuid")]
    pub category_id: SkillCategoryId,
    pub name: String,
    pub percentage: i32,
    pub sort_order: i32,
    pub created_at: DateTime<Utc>,
}

impl From<SkillDBResponse> for SkillResponse {
    fn from(db: SkillDBResponse) -> Self {
        Self {
            id: db.id,
            category_id: db.category_id,
            name: db.name,
            percentage: db.percentage,
            sort_order: db.sort_order,
            created_at: db.created_at,
        }
    }
}

/// A category's fields with its skills nested under `skills`.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct SkillCategoryWithSkillsResponse {
    #[serde(flatten)]
    pub category: SkillCategoryResponse,
    pub skills: Vec<SkillResponse>,
}

impl From<SkillCategoryWithSkills> for SkillCategoryWithSkillsResponse {
    fn from(db: SkillCategoryWithSkills) -> Self {
        Self {
            category: db.category.into(),
            skills: db.skills.into_iter().map(Into::into).collect(),
        }
    }
}
