//! Database models for skill categories and the skills inside them.

use crate::api::models::skills::{SkillCategoryCreate, SkillCreate};
use crate::types::{ProfileId, SkillCategoryId, SkillId};
use chrono::{DateTime, Utc};
use sqlx::FromRow;

#[derive(Debug, Clone)]
pub struct SkillCategoryCreateDBRequest {
    pub profile_id: ProfileId,
    pub title: String,
    pub icon: String,
    pub sort_order: i32,
}

impl From<SkillCategoryCreate> for SkillCategoryCreateDBRequest {
    fn from(api: SkillCategoryCreate) -> Self {
        Self {
            profile_id: api.profile_id,
            title: api.title,
            icon: api.icon,
            sort_order: api.sort_order.unwrap_or(0),
        }
    }
}

#[derive(Debug, Clone, FromRow)]
pub struct SkillCategoryDBResponse {
    pub id: SkillCategoryId,
    pub profile_id: ProfileId,
    pub title: String,
    pub icon: String,
    pub sort_order: i32,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct SkillCreateDBRequest {
    pub category_id: SkillCategoryId,
    pub name: String,
    pub percentage: i32,
    pub sort_order: i32,
}

impl From<SkillCreate> for SkillCreateDBRequest {
    fn from(api: SkillCreate) -> Self {
        Self {
            category_id: api.category_id,
            name: api.name,
            percentage: api.percentage,
            sort_order: api.sort_order.unwrap_or(0),
        }
    }
}

#[derive(Debug, Clone, FromRow)]
pub struct SkillDBResponse {
    pub id: SkillId,
    pub category_id: SkillCategoryId,
    pub name: String,
    pub percentage: i32,
    pub sort_order: i32,
    pub created_at: DateTime<Utc>,
}

/// A category together with its skills, both in display order
#[derive(Debug, Clone)]
pub struct SkillCategoryWithSkills {
    pub category: SkillCategoryDBResponse,
    pub skills: Vec<SkillDBResponse>,
}
