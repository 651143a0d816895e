//! Database repository for coursework badges.

use crate::db::{
    errors::Result,
    handlers::repository::{CollectionFilter, Repository},
    models::coursework::{CourseworkCreateDBRequest, CourseworkDBResponse},
};
use crate::types::abbrev_uuid;
use sqlx::PgConnection;
use tracing::instrument;
use uuid::Uuid;

pub struct Coursework<'c> {
    db: &'c mut PgConnection,
}

#[async_trait::async_trait]
impl<'c> Repository for Coursework<'c> {
    type CreateRequest = CourseworkCreateDBRequest;
    type Response = CourseworkDBResponse;
    type Filter = CollectionFilter;

    #[instrument(skip(self, request), fields(profile_id = %abbrev_uuid(&request.profile_id), course = %request.course), err)]
    async fn create(&mut self, request: &Self::CreateRequest) -> Result<Self::Response> {
        let course = sqlx::query_as::<_, CourseworkDBResponse>(
            r#"
            INSERT INTO coursework (id, profile_id, course, color, sort_order)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING *
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(request.profile_id)
        .bind(&request.course)
        .bind(&request.color)
        .bind(request.sort_order)
        .fetch_one(&mut *self.db)
        .await?;

        Ok(course)
    }

    #[instrument(skip(self, filter), fields(profile_id = %abbrev_uuid(&filter.profile_id)), err)]
    async fn list(&mut self, filter: &Self::Filter) -> Result<Vec<Self::Response>> {
        let courses =
            sqlx::query_as::<_, CourseworkDBResponse>("SELECT * FROM coursework WHERE profile_id = $1 ORDER BY sort_order, created_at, id")
                .bind(filter.profile_id)
                .fetch_all(&mut *self.db)
                .await?;

        Ok(courses)
    }
}

impl<'c> Coursework<'c> {
    pub fn new(db: &'c mut PgConnection) -> Self {
        Self { db }
    }
}
