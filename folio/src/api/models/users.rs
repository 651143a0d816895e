//! API request/response models for users.

use super::{Validate, require_non_blank};
use crate::db::models::users::UserDBResponse;
use crate::errors::Error;
use crate::types::UserId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Request body for creating an account.
#[derive(Debug, Clone, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UserCreate {
    #[schema(example = "ada")]
    pub username: String,
    /// Plaintext password; hashed before storage and never returned
    #[schema(example = "correct horse battery staple")]
    pub password: String,
}

impl UserCreate {
    /// Minimum length depends on configuration, so it is checked separately from [`Validate`].
    pub fn check_password_length(&self, min_length: usize) -> Result<(), Error> {
        if self.password.chars().count() < min_length {
            return Err(Error::BadRequest {
                message: format!("password must be at least {min_length} characters"),
            });
        }
        Ok(())
    }
}

impl Validate for UserCreate {
    fn validate(&self) -> Result<(), Error> {
        require_non_blank("username", &self.username)
    }
}

/// A user as exposed over HTTP. The password hash is never included.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    #[schema(value_type = String, format = "uuid")]
    pub id: UserId,
    pub username: String,
    pub created_at: DateTime<Utc>,
}

impl From<UserDBResponse> for UserResponse {
    fn from(db: UserDBResponse) -> Self {
        Self {
            id: db.id,
            username: db.username,
            created_at: db.created_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_password_length_counts_characters() {
        let request = UserCreate {
            username: "ada".to_string(),
            password: "pässwörd".to_string(),
        };
        assert!(request.check_password_length(8).is_ok());
        assert!(request.check_password_length(9).is_err());
    }

    #[test]
    fn test_response_omits_password_hash() {
        let response = UserResponse::from(UserDBResponse {
            id: uuid::Uuid::new_v4(),
            username: "ada".to_string(),
            password_hash: "$argon2id$v=19$secret".to_string(),
            created_at: Utc::now(),
        });

        let json = serde_json::to_value(&response).unwrap();
        assert!(json.get("passwordHash").is_none());
        assert!(json.get("password_hash").is_none());
        assert!(json.get("createdAt").is_some());
    }
}
