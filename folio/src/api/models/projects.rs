//! API request/response models for projects.

use super::{Validate, require_non_blank, require_non_blank_if_present};
use crate::db::models::projects::ProjectDBResponse;
use crate::errors::Error;
use crate::types::{ProfileId, ProjectId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Request body for creating a project.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProjectCreate {
    #[schema(value_type = String, format = "uuid")]
    pub profile_id: ProfileId,
    #[schema(example = "Folio")]
    pub title: String,
    pub description: String,
    pub image: Option<String>,
    /// Technology labels shown as badges
    #[serde(default)]
    #[schema(example = json!(["Rust", "PostgreSQL"]))]
    pub technologies: Vec<String>,
    pub demo_link: Option<String>,
    pub code_link: Option<String>,
    /// Featured projects are listed first (default: false)
    pub featured: Option<bool>,
    /// Position within the featured or non-featured group (default: 0)
    pub sort_order: Option<i32>,
}

impl Validate for ProjectCreate {
    fn validate(&self) -> Result<(), Error> {
        require_non_blank("title", &self.title)?;
        require_non_blank("description", &self.description)?;
        for technology in &self.technologies {
            require_non_blank("technologies[]", technology)?;
        }
        Ok(())
    }
}

/// Request body for updating a project. Omitted fields keep their current value.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProjectUpdate {
    pub title: Option<String>,
    pub description: Option<String>,
    pub image: Option<String>,
    pub technologies: Option<Vec<String>>,
    pub demo_link: Option<String>,
    pub code_link: Option<String>,
    pub featured: Option<bool>,
    pub sort_order: Option<i32>,
}

impl Validate for ProjectUpdate {
    fn validate(&self) -> Result<(), Error> {
        require_non_blank_if_present("title", self.title.as_deref())?;
        require_non_blank_if_present("description", self.description.as_deref())?;
        for technology in self.technologies.iter().flatten() {
            require_non_blank("technologies[]", technology)?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProjectResponse {
    #[schema(value_type = String, format = "uuid")]
    pub id: ProjectId,
    #[schema(value_type = String, format = "uuid")]
    pub profile_id: ProfileId,
    pub title: String,
    pub description: String,
    pub image: Option<String>,
    pub technologies: Vec<String>,
    pub demo_link: Option<String>,
    pub code_link: Option<String>,
    pub featured: bool,
    pub sort_order: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<ProjectDBResponse> for ProjectResponse {
    fn from(db: ProjectDBResponse) -> Self {
        Self {
            id: db.id,
            profile_id: db.profile_id,
            title: db.title,
            description: db.description,
            image: db.image,
            technologies: db.technologies,
            demo_link: db.demo_link,
            code_link: db.code_link,
            featured: db.featured,
            sort_order: db.sort_order,
            created_at: db.created_at,
            updated_at: db.updated_at,
        }
    }
}
