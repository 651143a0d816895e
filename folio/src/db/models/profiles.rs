//! Database models for profiles.

use crate::api::models::profiles::{ProfileCreate, ProfileUpdate};
use crate::types::{ProfileId, UserId};
use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database request for creating a profile
#[derive(Debug, Clone)]
pub struct ProfileCreateDBRequest {
    pub user_id: UserId,
    pub name: String,
    pub title: String,
    pub bio: String,
    pub profile_image: Option<String>,
    pub location: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
}

impl From<ProfileCreate> for ProfileCreateDBRequest {
    fn from(api: ProfileCreate) -> Self {
        Self {
            user_id: api.user_id,
            name: api.name,
            title: api.title,
            bio: api.bio,
            profile_image: api.profile_image,
            location: api.location,
            email: api.email,
            phone: api.phone,
        }
    }
}

/// Database request for a partial profile update. `None` leaves the column unchanged.
#[derive(Debug, Clone, Default)]
pub struct ProfileUpdateDBRequest {
    pub name: Option<String>,
    pub title: Option<String>,
    pub bio: Option<String>,
    pub profile_image: Option<String>,
    pub location: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
}

impl From<ProfileUpdate> for ProfileUpdateDBRequest {
    fn from(api: ProfileUpdate) -> Self {
        Self {
            name: api.name,
            title: api.title,
            bio: api.bio,
            profile_image: api.profile_image,
            location: api.location,
            email: api.email,
            phone: api.phone,
        }
    }
}

/// Database response for a profile
#[derive(Debug, Clone, FromRow)]
pub struct ProfileDBResponse {
    pub id: ProfileId,
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
