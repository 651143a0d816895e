//! Database models for education entries.

use crate::api::models::education::EducationCreate;
use crate::types::{EducationId, ProfileId};
use chrono::{DateTime, Utc};
use sqlx::FromRow;

#[derive(Debug, Clone)]
pub struct EducationCreateDBRequest {
    pub profile_id: ProfileId,
    pub degree: String,
    pub institution: String,
    pub graduation: Option<String>,
    pub gpa: Option<String>,
    pub description: Option<String>,
    pub sort_order: i32,
}

impl From<EducationCreate> for EducationCreateDBRequest {
    fn from(api: EducationCreate) -> Self {
        Self {
            profile_id: api.profile_id,
            degree: api.degree,
            institution: api.institution,
            graduation: api.graduation,
            gpa: api.gpa,
            description: api.description,
            sort_order: api.sort_order.unwrap_or(0),
        }
    }
}

#[derive(Debug, Clone, FromRow)]
pub struct EducationDBResponse {
    pub id: EducationId,
    pub profile_id: ProfileId,
    pub degree: String,
    pub institution: String,
    pub graduation: Option<String>,
    pub gpa: Option<String>,
    pub description: Option<String>,
    pub sort_order: i32,
    pub created_at: DateTime<Utc>,
}
