//! API request/response models for social links.

use super::{Validate, require_non_blank, require_non_blank_if_present};
use crate::db::models::social_links::SocialLinkDBResponse;
use crate::errors::Error;
use crate::types::{ProfileId, SocialLinkId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SocialLinkCreate {
    #[schema(value_type = String, format = "uuid")]
    pub profile_id: ProfileId,
    #[schema(example = "GitHub")]
    pub platform: String,
    #[schema(example = "https://github.com/ada")]
    pub url: String,
    #[schema(example = "github")]
    pub icon: String,
    /// Theme color for the link (default: "primary")
    pub color: Option<String>,
    pub sort_order: Option<i32>,
}

impl Validate for SocialLinkCreate {
    fn validate(&self) -> Result<(), Error> {
        require_non_blank("platform", &self.platform)?;
        require_non_blank("icon", &self.icon)?;
        require_non_blank_if_present("color", self.color.as_deref())?;
        url::Url::parse(&self.url).map_err(|e| Error::BadRequest {
            message: format!("url is not a valid URL: {e}"),
        })?;
        Ok(())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SocialLinkResponse {
    #[schema(value_type = String, format = "uuid")]
    pub id: SocialLinkId,
    #[schema(value_type = String, format = "uuid")]
    pub profile_id: ProfileId,
    pub platform: String,
    pub url: String,
    pub icon: String,
    pub color: String,
    pub sort_order: i32,
    pub created_at: DateTime<Utc>,
}

impl From<SocialLinkDBResponse> for SocialLinkResponse {
    fn from(db: SocialLinkDBResponse) -> Self {
        Self {
            id: db.id,
            profile_id: db.profile_id,
            platform: db.platform,
            url: db.url,
            icon: db.icon,
            color: db.color,
            sort_order: db.sort_order,
            created_at: db.created_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn link(url: &str) -> SocialLinkCreate {
        SocialLinkCreate {
            profile_id: uuid::Uuid::new_v4(),
            platform: "GitHub".to_string(),
            url: url.to_string(),
            icon: "github".to_string(),
            color: None,
            sort_order: None,
        }
    }

    #[test]
    fn test_url_must_parse() {
        assert!(link("https://github.com/ada").validate().is_ok());
        assert!(link("mailto:ada@example.com").validate().is_ok());
        assert!(link("not a url").validate().is_err());
    }
}
