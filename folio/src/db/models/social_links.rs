//! Database models for social links.

use crate::api::models::social_links::SocialLinkCreate;
use crate::db::models::coursework::DEFAULT_COLOR;
use crate::types::{ProfileId, SocialLinkId};
use chrono::{DateTime, Utc};
use sqlx::FromRow;

#[derive(Debug, Clone)]
pub struct SocialLinkCreateDBRequest {
    pub profile_id: ProfileId,
    pub platform: String,
    pub url: String,
    pub icon: String,
    pub color: String,
    pub sort_order: i32,
}

impl From<SocialLinkCreate> for SocialLinkCreateDBRequest {
    fn from(api: SocialLinkCreate) -> Self {
        Self {
            profile_id: api.profile_id,
            platform: api.platform,
            url: api.url,
            icon: api.icon,
            color: api.color.unwrap_or_else(|| DEFAULT_COLOR.to_string()),
            sort_order: api.sort_order.unwrap_or(0),
        }
    }
}

#[derive(Debug, Clone, FromRow)]
pub struct SocialLinkDBResponse {
    pub id: SocialLinkId,
    pub profile_id: ProfileId,
    pub platform: String,
    pub url: String,
    pub icon: String,
    pub color: String,
    pub sort_order: i32,
    pub created_at: DateTime<Utc>,
}
