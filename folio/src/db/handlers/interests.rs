//! Database repository for interests.

use crate::db::{
    errors::Result,
    handlers::repository::{CollectionFilter, Repository},
    models::interests::{InterestCreateDBRequest, InterestDBResponse},
};
use crate::types::abbrev_uuid;
use sqlx::PgConnection;
use tracing::instrument;
use uuid::Uuid;

pub struct Interests<'c> {
    db: &'c mut PgConnection,
}

#[async_trait::async_trait]
impl<'c> Repository for Interests<'c> {
    type CreateRequest = InterestCreateDBRequest;
    type Response = InterestDBResponse;
    type Filter = CollectionFilter;

    #[instrument(skip(self, request), fields(profile_id = %abbrev_uuid(&request.profile_id), label = %request.label), err)]
    async fn create(&mut self, request: &Self::CreateRequest) -> Result<Self::Response> {
        let interest = sqlx::query_as::<_, InterestDBResponse>(
            r#"
            INSERT INTO interests (id, profile_id, label, icon, sort_order)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING *
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(request.profile_id)
        .bind(&request.label)
        .bind(&request.icon)
        .bind(request.sort_order)
        .fetch_one(&mut *self.db)
        .await?;

        Ok(interest)
    }

    #[instrument(skip(self, filter), fields(profile_id = %abbrev_uuid(&filter.profile_id)), err)]
    async fn list(&mut self, filter: &Self::Filter) -> Result<Vec<Self::Response>> {
        let interests =
            sqlx::query_as::<_, InterestDBResponse>("SELECT * FROM interests WHERE profile_id = $1 ORDER BY sort_order, created_at, id")
                .bind(filter.profile_id)
                .fetch_all(&mut *self.db)
                .await?;

        Ok(interests)
    }
}

impl<'c> Interests<'c> {
    pub fn new(db: &'c mut PgConnection) -> Self {
        Self { db }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{create_test_profile, create_test_user};
    use sqlx::PgPool;

    #[sqlx::test]
    #[test_log::test]
    async fn test_equal_sort_order_falls_back_to_creation_order(pool: PgPool) {
        let user = create_test_user(&pool, "hobbyist").await;
        let profile = create_test_profile(&pool, user.id).await;
        let mut conn = pool.acquire().await.unwrap();
        let mut repo = Interests::new(&mut conn);

        for label in ["Chess", "Climbing", "Cooking"] {
            repo.create(&InterestCreateDBRequest {
                profile_id: profile.id,
                label: label.to_string(),
                icon: "star".to_string(),
                sort_order: 0,
            })
            .await
            .unwrap();
        }

        let interests = repo.list(&CollectionFilter::new(profile.id)).await.unwrap();
        let labels: Vec<_> = interests.iter().map(|i| i.label.as_str()).collect();
        assert_eq!(labels, vec!["Chess", "Climbing", "Cooking"]);
    }
}
