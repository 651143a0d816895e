//! Database repository for projects.

use crate::db::{
    errors::Result,
    handlers::repository::{CollectionFilter, Repository},
    models::projects::{ProjectCreateDBRequest, ProjectDBResponse, ProjectUpdateDBRequest},
};
use crate::types::{ProjectId, abbrev_uuid};
use sqlx::{PgConnection, types::Json};
use tracing::instrument;
use uuid::Uuid;

pub struct Projects<'c> {
    db: &'c mut PgConnection,
}

#[async_trait::async_trait]
impl<'c> Repository for Projects<'c> {
    type CreateRequest = ProjectCreateDBRequest;
    type Response = ProjectDBResponse;
    type Filter = CollectionFilter;

    #[instrument(skip(self, request), fields(profile_id = %abbrev_uuid(&request.profile_id), title = %request.title), err)]
    async fn create(&mut self, request: &Self::CreateRequest) -> Result<Self::Response> {
        let project = sqlx::query_as::<_, ProjectDBResponse>(
            r#"
            INSERT INTO projects (id, profile_id, title, description, image, technologies, demo_link, code_link, featured, sort_order)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
            RETURNING *
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(request.profile_id)
        .bind(&request.title)
        .bind(&request.description)
        .bind(&request.image)
        .bind(Json(&request.technologies))
        .bind(&request.demo_link)
        .bind(&request.code_link)
        .bind(request.featured)
        .bind(request.sort_order)
        .fetch_one(&mut *self.db)
        .await?;

        Ok(project)
    }

    /// Featured projects first, then ascending `sort_order`. Creation time and id break ties so
    /// the order is stable between reads.
    #[instrument(skip(self, filter), fields(profile_id = %abbrev_uuid(&filter.profile_id)), err)]
    async fn list(&mut self, filter: &Self::Filter) -> Result<Vec<Self::Response>> {
        let projects = sqlx::query_as::<_, ProjectDBResponse>(
            r#"
            SELECT * FROM projects
            WHERE profile_id = $1
            ORDER BY featured DESC, sort_order ASC, created_at ASC, id ASC
            "#,
        )
        .bind(filter.profile_id)
        .fetch_all(&mut *self.db)
        .await?;

        Ok(projects)
    }
}

impl<'c> Projects<'c> {
    pub fn new(db: &'c mut PgConnection) -> Self {
        Self { db }
    }

    #[cfg(test)]
    #[instrument(skip(self), fields(project_id = %abbrev_uuid(&id)), err)]
    pub async fn get_by_id(&mut self, id: ProjectId) -> Result<Option<ProjectDBResponse>> {
        let project = sqlx::query_as::<_, ProjectDBResponse>("SELECT * FROM projects WHERE id = $1")
            .bind(id)
            .fetch_optional(&mut *self.db)
            .await?;

        Ok(project)
    }

    /// Apply a partial update. Returns `None` when no project has this id.
    #[instrument(skip(self, request), fields(project_id = %abbrev_uuid(&id)), err)]
    pub async fn update(&mut self, id: ProjectId, request: &ProjectUpdateDBRequest) -> Result<Option<ProjectDBResponse>> {
        let project = sqlx::query_as::<_, ProjectDBResponse>(
            r#"
            UPDATE projects SET
                title = COALESCE($2, title),
                description = COALESCE($3, description),
                image = COALESCE($4, image),
                technologies = COALESCE($5, technologies),
                demo_link = COALESCE($6, demo_link),
                code_link = COALESCE($7, code_link),
                featured = COALESCE($8, featured),
                sort_order = COALESCE($9, sort_order),
                updated_at = clock_timestamp()
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(&request.title)
        .bind(&request.description)
        .bind(&request.image)
        .bind(request.technologies.as_ref().map(Json))
        .bind(&request.demo_link)
        .bind(&request.code_link)
        .bind(request.featured)
        .bind(request.sort_order)
        .fetch_optional(&mut *self.db)
        .await?;

        Ok(project)
    }

    /// Returns whether a row was removed.
    #[instrument(skip(self), fields(project_id = %abbrev_uuid(&id)), err)]
    pub async fn delete(&mut self, id: ProjectId) -> Result<bool> {
        let result = sqlx::query("DELETE FROM projects WHERE id = $1")
            .bind(id)
            .execute(&mut *self.db)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::errors::DbError;
    use crate::test_utils::{create_test_profile, create_test_user};
    use crate::types::ProfileId;
    use sqlx::PgPool;

    fn project_request(profile_id: ProfileId, title: &str, featured: bool, sort_order: i32) -> ProjectCreateDBRequest {
        ProjectCreateDBRequest {
            profile_id,
            title: title.to_string(),
            description: format!("{title} description"),
            image: None,
            technologies: vec!["Rust".to_string(), "Postgres".to_string()],
            demo_link: None,
            code_link: Some(format!("https://git.example.com/{title}")),
            featured,
            sort_order,
        }
    }

    #[sqlx::test]
    #[test_log::test]
    async fn test_create_project_round_trips_technologies(pool: PgPool) {
        let user = create_test_user(&pool, "builder").await;
        let profile = create_test_profile(&pool, user.id).await;
        let mut conn = pool.acquire().await.unwrap();
        let mut repo = Projects::new(&mut conn);

        let created = repo.create(&project_request(profile.id, "compiler", true, 0)).await.unwrap();
        assert_eq!(created.technologies, vec!["Rust", "Postgres"]);
        assert!(created.featured);

        let fetched = repo.get_by_id(created.id).await.unwrap().expect("project should exist");
        assert_eq!(fetched.technologies, created.technologies);
        assert_eq!(fetched.code_link.as_deref(), Some("https://git.example.com/compiler"));
    }

    #[sqlx::test]
    #[test_log::test]
    async fn test_list_projects_featured_first_then_sort_order(pool: PgPool) {
        let user = create_test_user(&pool, "ordering").await;
        let profile = create_test_profile(&pool, user.id).await;
        let mut conn = pool.acquire().await.unwrap();
        let mut repo = Projects::new(&mut conn);

        repo.create(&project_request(profile.id, "A", false, 1)).await.unwrap();
        repo.create(&project_request(profile.id, "B", true, 2)).await.unwrap();
        repo.create(&project_request(profile.id, "C", false, 0)).await.unwrap();
        repo.create(&project_request(profile.id, "D", true, 1)).await.unwrap();

        let projects = repo.list(&CollectionFilter::new(profile.id)).await.unwrap();
        let titles: Vec<_> = projects.iter().map(|p| p.title.as_str()).collect();
        assert_eq!(titles, vec!["D", "B", "C", "A"]);
    }

    #[sqlx::test]
    #[test_log::test]
    async fn test_list_projects_scoped_to_profile(pool: PgPool) {
        let first = create_test_user(&pool, "first").await;
        let second = create_test_user(&pool, "second").await;
        let first_profile = create_test_profile(&pool, first.id).await;
        let second_profile = create_test_profile(&pool, second.id).await;
        let mut conn = pool.acquire().await.unwrap();
        let mut repo = Projects::new(&mut conn);

        repo.create(&project_request(first_profile.id, "mine", false, 0)).await.unwrap();

        assert_eq!(repo.list(&CollectionFilter::new(first_profile.id)).await.unwrap().len(), 1);
        assert!(repo.list(&CollectionFilter::new(second_profile.id)).await.unwrap().is_empty());
    }

    #[sqlx::test]
    #[test_log::test]
    async fn test_create_project_for_missing_profile_is_fk_violation(pool: PgPool) {
        let mut conn = pool.acquire().await.unwrap();
        let mut repo = Projects::new(&mut conn);

        let err = repo.create(&project_request(Uuid::new_v4(), "orphan", false, 0)).await.unwrap_err();
        assert!(matches!(err, DbError::ForeignKeyViolation { .. }), "got {err:?}");
    }

    #[sqlx::test]
    #[test_log::test]
    async fn test_partial_update(pool: PgPool) {
        let user = create_test_user(&pool, "updater").await;
        let profile = create_test_profile(&pool, user.id).await;
        let mut conn = pool.acquire().await.unwrap();
        let mut repo = Projects::new(&mut conn);

        let created = repo.create(&project_request(profile.id, "draft", false, 3)).await.unwrap();

        let update = ProjectUpdateDBRequest {
            featured: Some(true),
            technologies: Some(vec!["Rust".to_string()]),
            ..Default::default()
        };
        let updated = repo.update(created.id, &update).await.unwrap().expect("project should exist");

        assert!(updated.featured);
        assert_eq!(updated.technologies, vec!["Rust"]);
        assert_eq!(updated.title, "draft");
        assert_eq!(updated.sort_order, 3);
        assert_eq!(updated.code_link, created.code_link);
        assert!(updated.updated_at > created.updated_at);

        assert!(repo.update(Uuid::new_v4(), &update).await.unwrap().is_none());
    }

    #[sqlx::test]
    #[test_log::test]
    async fn test_delete_project(pool: PgPool) {
        let user = create_test_user(&pool, "deleter").await;
        let profile = create_test_profile(&pool, user.id).await;
        let mut conn = pool.acquire().await.unwrap();
        let mut repo = Projects::new(&mut conn);

        let created = repo.create(&project_request(profile.id, "temp", false, 0)).await.unwrap();

        assert!(repo.delete(created.id).await.unwrap());
        assert!(repo.get_by_id(created.id).await.unwrap().is_none());
        assert!(!repo.delete(created.id).await.unwrap());
    }
}
