//! Database repository for users.

use crate::db::{
    errors::Result,
    handlers::repository::Repository,
    models::users::{UserCreateDBRequest, UserDBResponse},
};
use crate::types::{UserId, abbrev_uuid};
use sqlx::PgConnection;
use tracing::instrument;
use uuid::Uuid;

/// Filter for listing users
#[derive(Debug, Clone)]
pub struct UserFilter {
    pub skip: i64,
    pub limit: i64,
}

impl UserFilter {
    pub fn new(skip: i64, limit: i64) -> Self {
        Self { skip, limit }
    }
}

pub struct Users<'c> {
    db: &'c mut PgConnection,
}

#[async_trait::async_trait]
impl<'c> Repository for Users<'c> {
    type CreateRequest = UserCreateDBRequest;
    type Response = UserDBResponse;
    type Filter = UserFilter;

    /// Duplicate usernames are rejected by the `users_username_unique` constraint, surfacing as
    /// [`crate::db::errors::DbError::UniqueViolation`]; there is no pre-check.
    #[instrument(skip(self, request), fields(username = %request.username), err)]
    async fn create(&mut self, request: &Self::CreateRequest) -> Result<Self::Response> {
        let user_id = Uuid::new_v4();

        let user = sqlx::query_as::<_, UserDBResponse>(
            r#"
            INSERT INTO users (id, username, password_hash)
            VALUES ($1, $2, $3)
            RETURNING *
            "#,
        )
        .bind(user_id)
        .bind(&request.username)
        .bind(&request.password_hash)
        .fetch_one(&mut *self.db)
        .await?;

        Ok(user)
    }

    #[instrument(skip(self, filter), fields(limit = filter.limit, skip = filter.skip), err)]
    async fn list(&mut self, filter: &Self::Filter) -> Result<Vec<Self::Response>> {
        let users = sqlx::query_as::<_, UserDBResponse>("SELECT * FROM users ORDER BY username LIMIT $1 OFFSET $2")
            .bind(filter.limit)
            .bind(filter.skip)
            .fetch_all(&mut *self.db)
            .await?;

        Ok(users)
    }
}

impl<'c> Users<'c> {
    pub fn new(db: &'c mut PgConnection) -> Self {
        Self { db }
    }

    #[instrument(skip(self), fields(user_id = %abbrev_uuid(&id)), err)]
    pub async fn get_by_id(&mut self, id: UserId) -> Result<Option<UserDBResponse>> {
        let user = sqlx::query_as::<_, UserDBResponse>("SELECT * FROM users WHERE id = $1")
            .bind(id)
            .fetch_optional(&mut *self.db)
            .await?;

        Ok(user)
    }

    #[instrument(skip(self), err)]
    pub async fn get_by_username(&mut self, username: &str) -> Result<Option<UserDBResponse>> {
        let user = sqlx::query_as::<_, UserDBResponse>("SELECT * FROM users WHERE username = $1")
            .bind(username)
            .fetch_optional(&mut *self.db)
            .await?;

        Ok(user)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::password;
    use crate::db::errors::DbError;
    use crate::test_utils::TEST_PASSWORD_PARAMS;
    use sqlx::PgPool;

    fn user_request(username: &str, password: &str) -> UserCreateDBRequest {
        UserCreateDBRequest {
            username: username.to_string(),
            password_hash: password::hash_password(password, TEST_PASSWORD_PARAMS).unwrap(),
        }
    }

    #[sqlx::test]
    #[test_log::test]
    async fn test_create_user(pool: PgPool) {
        let mut conn = pool.acquire().await.unwrap();
        let mut repo = Users::new(&mut conn);

        let user = repo.create(&user_request("ada", "analytical-engine")).await.unwrap();
        assert_eq!(user.username, "ada");
        assert_ne!(user.password_hash, "analytical-engine");
        assert!(password::verify_password("analytical-engine", &user.password_hash).unwrap());

        let fetched = repo.get_by_id(user.id).await.unwrap().expect("user should exist");
        assert_eq!(fetched.id, user.id);
        assert_eq!(fetched.username, "ada");
    }

    #[sqlx::test]
    #[test_log::test]
    async fn test_get_user_by_username(pool: PgPool) {
        let mut conn = pool.acquire().await.unwrap();
        let mut repo = Users::new(&mut conn);

        let created = repo.create(&user_request("grace", "cobol")).await.unwrap();

        let found = repo.get_by_username("grace").await.unwrap().expect("user should exist");
        assert_eq!(found.id, created.id);

        assert!(repo.get_by_username("nobody").await.unwrap().is_none());
    }

    #[sqlx::test]
    #[test_log::test]
    async fn test_get_missing_user_returns_none(pool: PgPool) {
        let mut conn = pool.acquire().await.unwrap();
        let mut repo = Users::new(&mut conn);

        assert!(repo.get_by_id(Uuid::new_v4()).await.unwrap().is_none());
    }

    #[sqlx::test]
    #[test_log::test]
    async fn test_duplicate_username_is_unique_violation(pool: PgPool) {
        let mut conn = pool.acquire().await.unwrap();
        let mut repo = Users::new(&mut conn);

        repo.create(&user_request("linus", "first")).await.unwrap();
        let err = repo.create(&user_request("linus", "second")).await.unwrap_err();

        match err {
            DbError::UniqueViolation { constraint, table, .. } => {
                assert_eq!(constraint.as_deref(), Some("users_username_unique"));
                assert_eq!(table.as_deref(), Some("users"));
            }
            other => panic!("expected unique violation, got {other:?}"),
        }
    }

    #[sqlx::test]
    #[test_log::test]
    async fn test_list_users_pagination(pool: PgPool) {
        let mut conn = pool.acquire().await.unwrap();
        let mut repo = Users::new(&mut conn);

        for name in ["carol", "alice", "bob"] {
            repo.create(&user_request(name, "pw")).await.unwrap();
        }

        let all = repo.list(&UserFilter::new(0, 10)).await.unwrap();
        let names: Vec<_> = all.iter().map(|u| u.username.as_str()).collect();
        assert_eq!(names, vec!["alice", "bob", "carol"]);

        let page = repo.list(&UserFilter::new(1, 1)).await.unwrap();
        assert_eq!(page.len(), 1);
        assert_eq!(page[0].username, "bob");
    }
}
