//! Database repository for education entries.

use crate::db::{
    errors::Result,
    handlers::repository::{CollectionFilter, Repository},
    models::education::{EducationCreateDBRequest, EducationDBResponse},
};
use crate::types::abbrev_uuid;
use sqlx::PgConnection;
use tracing::instrument;
use uuid::Uuid;

pub struct EducationEntries<'c> {
    db: &'c mut PgConnection,
}

#[async_trait::async_trait]
impl<'c> Repository for EducationEntries<'c> {
    type CreateRequest = EducationCreateDBRequest;
    type Response = EducationDBResponse;
    type Filter = CollectionFilter;

    #[instrument(skip(self, request), fields(profile_id = %abbrev_uuid(&request.profile_id)), err)]
    async fn create(&mut self, request: &Self::CreateRequest) -> Result<Self::Response> {
        let entry = sqlx::query_as::<_, EducationDBResponse>(
            r#"
            INSERT INTO education (id, profile_id, degree, institution, graduation, gpa, description, sort_order)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            RETURNING *
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(request.profile_id)
        .bind(&request.degree)
        .bind(&request.institution)
        .bind(&request.graduation)
        .bind(&request.gpa)
        .bind(&request.description)
        .bind(request.sort_order)
        .fetch_one(&mut *self.db)
        .await?;

        Ok(entry)
    }

    #[instrument(skip(self, filter), fields(profile_id = %abbrev_uuid(&filter.profile_id)), err)]
    async fn list(&mut self, filter: &Self::Filter) -> Result<Vec<Self::Response>> {
        let entries =
            sqlx::query_as::<_, EducationDBResponse>("SELECT * FROM education WHERE profile_id = $1 ORDER BY sort_order, created_at, id")
                .bind(filter.profile_id)
                .fetch_all(&mut *self.db)
                .await?;

        Ok(entries)
    }
}

impl<'c> EducationEntries<'c> {
    pub fn new(db: &'c mut PgConnection) -> Self {
        Self { db }
    }
}
