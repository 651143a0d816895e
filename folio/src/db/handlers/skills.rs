//! Database repositories for skill categories and skills.

use std::collections::HashMap;

use crate::db::{
    errors::Result,
    handlers::repository::{CollectionFilter, Repository},
    models::skills::{
        SkillCategoryCreateDBRequest, SkillCategoryDBResponse, SkillCategoryWithSkills, SkillCreateDBRequest, SkillDBResponse,
    },
};
use crate::types::{ProfileId, SkillCategoryId, abbrev_uuid};
use sqlx::PgConnection;
use tracing::instrument;
use uuid::Uuid;

pub struct SkillCategories<'c> {
    db: &'c mut PgConnection,
}

#[async_trait::async_trait]
impl<'c> Repository for SkillCategories<'c> {
    type CreateRequest = SkillCategoryCreateDBRequest;
    type Response = SkillCategoryDBResponse;
    type Filter = CollectionFilter;

    #[instrument(skip(self, request), fields(profile_id = %abbrev_uuid(&request.profile_id), title = %request.title), err)]
    async fn create(&mut self, request: &Self::CreateRequest) -> Result<Self::Response> {
        let category = sqlx::query_as::<_, SkillCategoryDBResponse>(
            r#"
            INSERT INTO skill_categories (id, profile_id, title, icon, sort_order)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING *
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(request.profile_id)
        .bind(&request.title)
        .bind(&request.icon)
        .bind(request.sort_order)
        .fetch_one(&mut *self.db)
        .await?;

        Ok(category)
    }

    #[instrument(skip(self, filter), fields(profile_id = %abbrev_uuid(&filter.profile_id)), err)]
    async fn list(&mut self, filter: &Self::Filter) -> Result<Vec<Self::Response>> {
        let categories = sqlx::query_as::<_, SkillCategoryDBResponse>(
            "SELECT * FROM skill_categories WHERE profile_id = $1 ORDER BY sort_order, created_at, id",
        )
        .bind(filter.profile_id)
        .fetch_all(&mut *self.db)
        .await?;

        Ok(categories)
    }
}

impl<'c> SkillCategories<'c> {
    pub fn new(db: &'c mut PgConnection) -> Self {
        Self { db }
    }

    /// Categories of a profile with their skills attached, each level in display order.
    ///
    /// Issues two queries regardless of the number of categories: one for the categories and
    /// one for every skill across them, grouped in memory.
    #[instrument(skip(self), fields(profile_id = %abbrev_uuid(&profile_id)), err)]
    pub async fn with_skills(&mut self, profile_id: ProfileId) -> Result<Vec<SkillCategoryWithSkills>> {
        let categories = self.list(&CollectionFilter::new(profile_id)).await?;
        if categories.is_empty() {
            return Ok(Vec::new());
        }

        let category_ids: Vec<SkillCategoryId> = categories.iter().map(|c| c.id).collect();
        let skills = Skills::new(&mut *self.db).list(&SkillFilter::new(category_ids)).await?;

        let mut by_category: HashMap<SkillCategoryId, Vec<SkillDBResponse>> = HashMap::new();
        for skill in skills {
            by_category.entry(skill.category_id).or_default().push(skill);
        }

        Ok(categories
            .into_iter()
            .map(|category| {
                let skills = by_category.remove(&category.id).unwrap_or_default();
                SkillCategoryWithSkills { category, skills }
            })
            .collect())
    }
}

/// Filter for listing skills across one or more categories
#[derive(Debug, Clone)]
pub struct SkillFilter {
    pub category_ids: Vec<SkillCategoryId>,
}

impl SkillFilter {
    pub fn new(category_ids: Vec<SkillCategoryId>) -> Self {
        Self { category_ids }
    }
}

pub struct Skills<'c> {
    db: &'c mut PgConnection,
}

#[async_trait::async_trait]
impl<'c> Repository for Skills<'c> {
    type CreateRequest = SkillCreateDBRequest;
    type Response = SkillDBResponse;
    type Filter = SkillFilter;

    /// Percentages outside 0..=100 are rejected by the `skills_percentage_range` check.
    #[instrument(skip(self, request), fields(category_id = %abbrev_uuid(&request.category_id), name = %request.name), err)]
    async fn create(&mut self, request: &Self::CreateRequest) -> Result<Self::Response> {
        let skill = sqlx::query_as::<_, SkillDBResponse>(
            r#"
            INSERT INTO skills (id, category_id, name, percentage, sort_order)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING *
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(request.category_id)
        .bind(&request.name)
        .bind(request.percentage)
        .bind(request.sort_order)
        .fetch_one(&mut *self.db)
        .await?;

        Ok(skill)
    }

    /// Skills of every listed category, ordered within each category.
    #[instrument(skip(self, filter), fields(categories = filter.category_ids.len()), err)]
    async fn list(&mut self, filter: &Self::Filter) -> Result<Vec<Self::Response>> {
        if filter.category_ids.is_empty() {
            return Ok(Vec::new());
        }

        let skills = sqlx::query_as::<_, SkillDBResponse>(
            r#"
            SELECT * FROM skills
            WHERE category_id = ANY($1)
            ORDER BY category_id, sort_order, created_at, id
            "#,
        )
        .bind(&filter.category_ids)
        .fetch_all(&mut *self.db)
        .await?;

        Ok(skills)
    }
}

impl<'c> Skills<'c> {
    pub fn new(db: &'c mut PgConnection) -> Self {
        Self { db }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::errors::DbError;
    use crate::test_utils::{create_test_profile, create_test_user};
    use sqlx::PgPool;

    fn category_request(profile_id: ProfileId, title: &str, sort_order: i32) -> SkillCategoryCreateDBRequest {
        SkillCategoryCreateDBRequest {
            profile_id,
            title: title.to_string(),
            icon: "code".to_string(),
            sort_order,
        }
    }

    fn skill_request(category_id: SkillCategoryId, name: &str, percentage: i32, sort_order: i32) -> SkillCreateDBRequest {
        SkillCreateDBRequest {
            category_id,
            name: name.to_string(),
            percentage,
            sort_order,
        }
    }

    #[sqlx::test]
    #[test_log::test]
    async fn test_categories_with_skills_are_grouped_and_ordered(pool: PgPool) {
        let user = create_test_user(&pool, "skilled").await;
        let profile = create_test_profile(&pool, user.id).await;
        let mut conn = pool.acquire().await.unwrap();

        let (frontend, backend) = {
            let mut categories = SkillCategories::new(&mut conn);
            let backend = categories.create(&category_request(profile.id, "Backend", 1)).await.unwrap();
            let frontend = categories.create(&category_request(profile.id, "Frontend", 0)).await.unwrap();
            (frontend, backend)
        };

        {
            let mut skills = Skills::new(&mut conn);
            skills.create(&skill_request(backend.id, "Postgres", 80, 1)).await.unwrap();
            skills.create(&skill_request(backend.id, "Rust", 90, 0)).await.unwrap();
            skills.create(&skill_request(frontend.id, "CSS", 60, 0)).await.unwrap();
        }

        let grouped = SkillCategories::new(&mut conn).with_skills(profile.id).await.unwrap();
        assert_eq!(grouped.len(), 2);

        assert_eq!(grouped[0].category.id, frontend.id);
        let frontend_skills: Vec<_> = grouped[0].skills.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(frontend_skills, vec!["CSS"]);

        assert_eq!(grouped[1].category.id, backend.id);
        let backend_skills: Vec<_> = grouped[1].skills.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(backend_skills, vec!["Rust", "Postgres"]);
    }

    #[sqlx::test]
    #[test_log::test]
    async fn test_category_without_skills_has_empty_list(pool: PgPool) {
        let user = create_test_user(&pool, "empty-skills").await;
        let profile = create_test_profile(&pool, user.id).await;
        let mut conn = pool.acquire().await.unwrap();
        let mut categories = SkillCategories::new(&mut conn);

        categories.create(&category_request(profile.id, "Tools", 0)).await.unwrap();

        let grouped = categories.with_skills(profile.id).await.unwrap();
        assert_eq!(grouped.len(), 1);
        assert!(grouped[0].skills.is_empty());
    }

    #[sqlx::test]
    #[test_log::test]
    async fn test_profile_without_categories(pool: PgPool) {
        let user = create_test_user(&pool, "no-categories").await;
        let profile = create_test_profile(&pool, user.id).await;
        let mut conn = pool.acquire().await.unwrap();

        assert!(SkillCategories::new(&mut conn).with_skills(profile.id).await.unwrap().is_empty());
        assert!(Skills::new(&mut conn).list(&SkillFilter::new(vec![])).await.unwrap().is_empty());
    }

    #[sqlx::test]
    #[test_log::test]
    async fn test_percentage_bounds(pool: PgPool) {
        let user = create_test_user(&pool, "bounds").await;
        let profile = create_test_profile(&pool, user.id).await;
        let mut conn = pool.acquire().await.unwrap();

        let category = SkillCategories::new(&mut conn)
            .create(&category_request(profile.id, "Languages", 0))
            .await
            .unwrap();
        let mut skills = Skills::new(&mut conn);

        skills.create(&skill_request(category.id, "zero", 0, 0)).await.unwrap();
        skills.create(&skill_request(category.id, "full", 100, 1)).await.unwrap();

        for out_of_range in [-1, 101] {
            let err = skills.create(&skill_request(category.id, "bad", out_of_range, 2)).await.unwrap_err();
            match err {
                DbError::CheckViolation { constraint, .. } => {
                    assert_eq!(constraint.as_deref(), Some("skills_percentage_range"));
                }
                other => panic!("expected check violation, got {other:?}"),
            }
        }
    }

    #[sqlx::test]
    #[test_log::test]
    async fn test_skill_for_missing_category_is_fk_violation(pool: PgPool) {
        let mut conn = pool.acquire().await.unwrap();
        let mut skills = Skills::new(&mut conn);

        let err = skills.create(&skill_request(Uuid::new_v4(), "orphan", 50, 0)).await.unwrap_err();
        assert!(matches!(err, DbError::ForeignKeyViolation { .. }), "got {err:?}");
    }
}
