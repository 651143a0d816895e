//! Database repository for profiles.
//!
//! A user owns at most one profile, so lookups and updates are keyed by user id rather than
//! going through [`Repository::list`](super::Repository::list).

use crate::db::{
    errors::Result,
    models::profiles::{ProfileCreateDBRequest, ProfileDBResponse, ProfileUpdateDBRequest},
};
use crate::types::{UserId, abbrev_uuid};
use sqlx::PgConnection;
use tracing::instrument;
use uuid::Uuid;

pub struct Profiles<'c> {
    db: &'c mut PgConnection,
}

impl<'c> Profiles<'c> {
    pub fn new(db: &'c mut PgConnection) -> Self {
        Self { db }
    }

    /// Insert a profile for `request.user_id`.
    ///
    /// Fails with a foreign key violation when the user does not exist and with a unique
    /// violation on `profiles_user_id_unique` when the user already has a profile.
    #[instrument(skip(self, request), fields(user_id = %abbrev_uuid(&request.user_id)), err)]
    pub async fn create(&mut self, request: &ProfileCreateDBRequest) -> Result<ProfileDBResponse> {
        let profile = sqlx::query_as::<_, ProfileDBResponse>(
            r#"
            INSERT INTO profiles (id, user_id, name, title, bio, profile_image, location, email, phone)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            RETURNING *
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(request.user_id)
        .bind(&request.name)
        .bind(&request.title)
        .bind(&request.bio)
        .bind(&request.profile_image)
        .bind(&request.location)
        .bind(&request.email)
        .bind(&request.phone)
        .fetch_one(&mut *self.db)
        .await?;

        Ok(profile)
    }

    #[instrument(skip(self), fields(user_id = %abbrev_uuid(&user_id)), err)]
    pub async fn get_by_user(&mut self, user_id: UserId) -> Result<Option<ProfileDBResponse>> {
        let profile = sqlx::query_as::<_, ProfileDBResponse>("SELECT * FROM profiles WHERE user_id = $1")
            .bind(user_id)
            .fetch_optional(&mut *self.db)
            .await?;

        Ok(profile)
    }

    #[cfg(test)]
    #[instrument(skip(self), fields(profile_id = %abbrev_uuid(&id)), err)]
    pub async fn get_by_id(&mut self, id: crate::types::ProfileId) -> Result<Option<ProfileDBResponse>> {
        let profile = sqlx::query_as::<_, ProfileDBResponse>("SELECT * FROM profiles WHERE id = $1")
            .bind(id)
            .fetch_optional(&mut *self.db)
            .await?;

        Ok(profile)
    }

    /// Apply a partial update to the profile owned by `user_id`.
    ///
    /// Only fields present in the request change. `updated_at` always moves forward, even for an
    /// empty update. Returns `None` when the user has no profile.
    #[instrument(skip(self, request), fields(user_id = %abbrev_uuid(&user_id)), err)]
    pub async fn update_by_user(&mut self, user_id: UserId, request: &ProfileUpdateDBRequest) -> Result<Option<ProfileDBResponse>> {
        let profile = sqlx::query_as::<_, ProfileDBResponse>(
            r#"
            UPDATE profiles SET
                name = COALESCE($2, name),
                title = COALESCE($3, title),
                bio = COALESCE($4, bio),
                profile_image = COALESCE($5, profile_image),
                location = COALESCE($6, location),
                email = COALESCE($7, email),
                phone = COALESCE($8, phone),
                updated_at = clock_timestamp()
            WHERE user_id = $1
            RETURNING *
            "#,
        )
        .bind(user_id)
        .bind(&request.name)
        .bind(&request.title)
        .bind(&request.bio)
        .bind(&request.profile_image)
        .bind(&request.location)
        .bind(&request.email)
        .bind(&request.phone)
        .fetch_optional(&mut *self.db)
        .await?;

        Ok(profile)
    }
}
