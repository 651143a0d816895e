//! Database models for projects.

use crate::api::models::projects::{ProjectCreate, ProjectUpdate};
use crate::types::{ProfileId, ProjectId};
use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database request for creating a project
#[derive(Debug, Clone)]
pub struct ProjectCreateDBRequest {
    pub profile_id: ProfileId,
    pub title: String,
    pub description: String,
    pub image: Option<String>,
    pub technologies: Vec<String>,
    pub demo_link: Option<String>,
    pub code_link: Option<String>,
    pub featured: bool,
    pub sort_order: i32,
}

impl From<ProjectCreate> for ProjectCreateDBRequest {
    fn from(api: ProjectCreate) -> Self {
        Self {
            profile_id: api.profile_id,
            title: api.title,
            description: api.description,
            image: api.image,
            technologies: api.technologies,
            demo_link: api.demo_link,
            code_link: api.code_link,
            featured: api.featured.unwrap_or(false),
            sort_order: api.sort_order.unwrap_or(0),
        }
    }
}

/// Database request for a partial project update. `None` leaves the column unchanged.
#[derive(Debug, Clone, Default)]
pub struct ProjectUpdateDBRequest {
    pub title: Option<String>,
    pub description: Option<String>,
    pub image: Option<String>,
    pub technologies: Option<Vec<String>>,
    pub demo_link: Option<String>,
    pub code_link: Option<String>,
    pub featured: Option<bool>,
    pub sort_order: Option<i32>,
}

impl From<ProjectUpdate> for ProjectUpdateDBRequest {
    fn from(api: ProjectUpdate) -> Self {
        Self {
            title: api.title,
            description: api.description,
            image: api.image,
            technologies: api.technologies,
            demo_link: api.demo_link,
            code_link: api.code_link,
            featured: api.featured,
            sort_order: api.sort_order,
        }
    }
}

/// Database response for a project
#[derive(Debug, Clone, FromRow)]
pub struct ProjectDBResponse {
    pub id: ProjectId,
    pub profile_id: ProfileId,
    pub title: String,
    pub description: String,
    pub image: Option<String>,
    #[sqlx(json)]
    pub technologies: Vec<String>,
    pub demo_link: Option<String>,
    pub code_link: Option<String>,
    pub featured: bool,
    pub sort_order: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
