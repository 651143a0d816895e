//! API request/response models for profiles.

use super::{Validate, require_non_blank, require_non_blank_if_present};
use crate::db::models::profiles::ProfileDBResponse;
use crate::errors::Error;
use crate::types::{ProfileId, UserId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Request body for creating a profile.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProfileCreate {
    /// Owning user; each user has at most one profile
    #[schema(value_type = String, format = "uuid")]
    pub user_id: UserId,
    #[schema(example = "Ada Lovelace")]
    pub name: String,
    #[schema(example = "Analyst & Programmer")]
    pub title: String,
    pub bio: String,
    pub profile_image: Option<String>,
    pub location: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
}

impl Validate for ProfileCreate {
    fn validate(&self) -> Result<(), Error> {
        require_non_blank("name", &self.name)?;
        require_non_blank("title", &self.title)?;
        require_non_blank("bio", &self.bio)
    }
}

/// Request body for updating a profile. Omitted fields keep their current value.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProfileUpdate {
    pub name: Option<String>,
    pub title: Option<String>,
    pub bio: Option<String>,
    pub profile_image: Option<String>,
    pub location: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
}

impl Validate for ProfileUpdate {
    fn validate(&self) -> Result<(), Error> {
        require_non_blank_if_present("name", self.name.as_deref())?;
        require_non_blank_if_present("title", self.title.as_deref())?;
        require_non_blank_if_present("bio", self.bio.as_deref())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProfileResponse {
    #[schema(value_type = String, format = "uuid")]
    pub id: ProfileId,
    #[schema(value_type = String, format = "uuid")]
    pub user_id: UserId,
    pub name: String,
    pub title: String,
    pub bio: String,
    pub profile_image: Option<String>,
    pub location: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<ProfileDBResponse> for ProfileResponse {
    fn from(db: ProfileDBResponse) -> Self {
        Self {
            id: db.id,
            user_id: db.user_id,
            name: db.name,
            title: db.title,
            bio: db.bio,
            profile_image: db.profile_image,
            location: db.location,
            email: db.email,
            phone: db.phone,
            created_at: db.created_at,
            updated_at: db.updated_at,
        }
    }
}
