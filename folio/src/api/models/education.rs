//! API request/response models for education entries.

use super::{Validate, require_non_blank};
use crate::db::models::education::EducationDBResponse;
use crate::errors::Error;
use crate::types::{EducationId, ProfileId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct EducationCreate {
    #[schema(value_type = String, format = "uuid")]
    pub profile_id: ProfileId,
    #[schema(example = "BSc Computer Science")]
    pub degree: String,
    pub institution: String,
    /// Free-form graduation date, e.g. "May 2024"
    pub graduation: Option<String>,
    pub gpa: Option<String>,
    pub description: Option<String>,
    pub sort_order: Option<i32>,
}

impl Validate for EducationCreate {
    fn validate(&self) -> Result<(), Error> {
        require_non_blank("degree", &self.degree)?;
        require_non_blank("institution", &self.institution)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct EducationResponse {
    #[schema(value_type = String, format = "uuid")]
    pub id: EducationId,
    #[schema(value_type = String, format = "uuid")]
    pub profile_id: ProfileId,
    pub degree: String,
    pub institution: String,
    pub graduation: Option<String>,
    pub gpa: Option<String>,
    pub description: Option<String>,
    pub sort_order: i32,
    pub created_at: DateTime<Utc>,
}

impl From<EducationDBResponse> for EducationResponse {
    fn from(db: EducationDBResponse) -> Self {
        Self {
            id: db.id,
            profile_id: db.profile_id,
            degree: db.degree,
            institution: db.institution,
            graduation: db.graduation,
            gpa: db.gpa,
            description: db.description,
            sort_order: db.sort_order,
            created_at: db.created_at,
        }
    }
}
