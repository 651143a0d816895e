//! Database repository for social links.

use crate::db::{
    errors::Result,
    handlers::repository::{CollectionFilter, Repository},
    models::social_links::{SocialLinkCreateDBRequest, SocialLinkDBResponse},
};
use crate::types::abbrev_uuid;
use sqlx::PgConnection;
use tracing::instrument;
use uuid::Uuid;

pub struct SocialLinks<'c> {
    db: &'c mut PgConnection,
}

#[async_trait::async_trait]
impl<'c> Repository for SocialLinks<'c> {
    type CreateRequest = SocialLinkCreateDBRequest;
    type Response = SocialLinkDBResponse;
    type Filter = CollectionFilter;

    #[instrument(skip(self, request), fields(profile_id = %abbrev_uuid(&request.profile_id), platform = %request.platform), err)]
    async fn create(&mut self, request: &Self::CreateRequest) -> Result<Self::Response> {
        let link = sqlx::query_as::<_, SocialLinkDBResponse>(
            r#"
            INSERT INTO social_links (id, profile_id, platform, url, icon, color, sort_order)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING *
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(request.profile_id)
        .bind(&request.platform)
        .bind(&request.url)
        .bind(&request.icon)
        .bind(&request.color)
        .bind(request.sort_order)
        .fetch_one(&mut *self.db)
        .await?;

        Ok(link)
    }

    #[instrument(skip(self, filter), fields(profile_id = %abbrev_uuid(&filter.profile_id)), err)]
    async fn list(&mut self, filter: &Self::Filter) -> Result<Vec<Self::Response>> {
        let links =
            sqlx::query_as::<_, SocialLinkDBResponse>("SELECT * FROM social_links WHERE profile_id = $1 ORDER BY sort_order, created_at, id")
                .bind(filter.profile_id)
                .fetch_all(&mut *self.db)
                .await?;

        Ok(links)
    }
}

impl<'c> SocialLinks<'c> {
    pub fn new(db: &'c mut PgConnection) -> Self {
        Self { db }
    }
}
