//! Aggregate read of everything on a portfolio page.

use sqlx::PgPool;
use tracing::instrument;

use crate::db::{
    errors::Result,
    handlers::{
        Coursework, EducationEntries, Interests, Profiles, Projects, SkillCategories, SocialLinks,
        repository::{CollectionFilter, Repository},
    },
    models::{
        coursework::CourseworkDBResponse, education::EducationDBResponse, interests::InterestDBResponse,
        portfolio::CompletePortfolioDBResponse, projects::ProjectDBResponse, skills::SkillCategoryWithSkills,
        social_links::SocialLinkDBResponse,
    },
};
use crate::types::{ProfileId, UserId, abbrev_uuid};

/// Load a user's profile and every collection hanging off it.
///
/// The six collection reads run concurrently, each on its own pooled connection. A user without
/// a profile (or an unknown user) yields an empty portfolio rather than an error.
#[instrument(skip(db), fields(user_id = %abbrev_uuid(&user_id)), err)]
pub async fn get_complete_portfolio(db: &PgPool, user_id: UserId) -> Result<CompletePortfolioDBResponse> {
    let profile = {
        let mut conn = db.acquire().await?;
        Profiles::new(&mut conn).get_by_user(user_id).await?
    };

    let Some(profile) = profile else {
        return Ok(CompletePortfolioDBResponse::default());
    };

    let (projects, skill_categories, education, coursework, interests, social_links) = tokio::try_join!(
        list_projects(db, profile.id),
        list_skill_categories(db, profile.id),
        list_education(db, profile.id),
        list_coursework(db, profile.id),
        list_interests(db, profile.id),
        list_social_links(db, profile.id),
    )?;

    Ok(CompletePortfolioDBResponse {
        profile: Some(profile),
        projects,
        skill_categories,
        education,
        coursework,
        interests,
        social_links,
    })
}

async fn list_projects(db: &PgPool, profile_id: ProfileId) -> Result<Vec<ProjectDBResponse>> {
    let mut conn = db.acquire().await?;
    Projects::new(&mut conn).list(&CollectionFilter::new(profile_id)).await
}

async fn list_skill_categories(db: &PgPool, profile_id: ProfileId) -> Result<Vec<SkillCategoryWithSkills>> {
    let mut conn = db.acquire().await?;
    SkillCategories::new(&mut conn).with_skills(profile_id).await
}

async fn list_education(db: &PgPool, profile_id: ProfileId) -> Result<Vec<EducationDBResponse>> {
    let mut conn = db.acquire().await?;
    EducationEntries::new(&mut conn).list(&CollectionFilter::new(profile_id)).await
}

async fn list_coursework(db: &PgPool, profile_id: ProfileId) -> Result<Vec<CourseworkDBResponse>> {
    let mut conn = db.acquire().await?;
    Coursework::new(&mut conn).list(&CollectionFilter::new(profile_id)).await
}

async fn list_interests(db: &PgPool, profile_id: ProfileId) -> Result<Vec<InterestDBResponse>> {
    let mut conn = db.acquire().await?;
    Interests::new(&mut conn).list(&CollectionFilter::new(profile_id)).await
}

async fn list_social_links(db: &PgPool, profile_id: ProfileId) -> Result<Vec<SocialLinkDBResponse>> {
    let mut conn = db.acquire().await?;
    SocialLinks::new(&mut conn).list(&CollectionFilter::new(profile_id)).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::handlers::Skills;
    use crate::db::models::{
        coursework::CourseworkCreateDBRequest,
        education::EducationCreateDBRequest,
        interests::InterestCreateDBRequest,
        projects::ProjectCreateDBRequest,
        skills::{SkillCategoryCreateDBRequest, SkillCreateDBRequest},
        social_links::SocialLinkCreateDBRequest,
    };
    use crate::test_utils::{create_test_profile, create_test_user};
    use uuid::Uuid;

    #[sqlx::test]
    #[test_log::test]
    async fn test_unknown_user_has_empty_portfolio(pool: PgPool) {
        let portfolio = get_complete_portfolio(&pool, Uuid::new_v4()).await.unwrap();

        assert!(portfolio.profile.is_none());
        assert!(portfolio.projects.is_empty());
        assert!(portfolio.skill_categories.is_empty());
        assert!(portfolio.education.is_empty());
        assert!(portfolio.coursework.is_empty());
        assert!(portfolio.interests.is_empty());
        assert!(portfolio.social_links.is_empty());
    }

    #[sqlx::test]
    #[test_log::test]
    async fn test_user_without_profile_has_empty_portfolio(pool: PgPool) {
        let user = create_test_user(&pool, "blank").await;

        let portfolio = get_complete_portfolio(&pool, user.id).await.unwrap();
        assert!(portfolio.profile.is_none());
        assert!(portfolio.projects.is_empty());
    }

    #[sqlx::test]
    #[test_log::test]
    async fn test_portfolio_collects_every_section(pool: PgPool) {
        let user = create_test_user(&pool, "complete").await;
        let profile = create_test_profile(&pool, user.id).await;

        {
            let mut conn = pool.acquire().await.unwrap();
            Projects::new(&mut conn)
                .create(&ProjectCreateDBRequest {
                    profile_id: profile.id,
                    title: "Folio".to_string(),
                    description: "This site".to_string(),
                    image: None,
                    technologies: vec!["Rust".to_string()],
                    demo_link: None,
                    code_link: None,
                    featured: true,
                    sort_order: 0,
                })
                .await
                .unwrap();

            let category = SkillCategories::new(&mut conn)
                .create(&SkillCategoryCreateDBRequest {
                    profile_id: profile.id,
                    title: "Languages".to_string(),
                    icon: "code".to_string(),
                    sort_order: 0,
                })
                .await
                .unwrap();
            Skills::new(&mut conn)
                .create(&SkillCreateDBRequest {
                    category_id: category.id,
                    name: "Rust".to_string(),
                    percentage: 95,
                    sort_order: 0,
                })
                .await
                .unwrap();

            Interests::new(&mut conn)
                .create(&InterestCreateDBRequest {
                    profile_id: profile.id,
                    label: "Chess".to_string(),
                    icon: "crown".to_string(),
                    sort_order: 0,
                })
                .await
                .unwrap();
        }

        let portfolio = get_complete_portfolio(&pool, user.id).await.unwrap();

        assert_eq!(portfolio.profile.as_ref().map(|p| p.id), Some(profile.id));
        assert_eq!(portfolio.projects.len(), 1);
        assert_eq!(portfolio.skill_categories.len(), 1);
        assert_eq!(portfolio.skill_categories[0].skills.len(), 1);
        assert_eq!(portfolio.skill_categories[0].skills[0].percentage, 95);
        assert_eq!(portfolio.interests.len(), 1);
        assert!(portfolio.education.is_empty());
        assert!(portfolio.coursework.is_empty());
        assert!(portfolio.social_links.is_empty());
    }

    #[sqlx::test]
    #[test_log::test]
    async fn test_deleting_user_cascades_to_portfolio(pool: PgPool) {
        let user = create_test_user(&pool, "cascade").await;
        let profile = create_test_profile(&pool, user.id).await;

        {
            let mut conn = pool.acquire().await.unwrap();
            Interests::new(&mut conn)
                .create(&InterestCreateDBRequest {
                    profile_id: profile.id,
                    label: "Go".to_string(),
                    icon: "circle".to_string(),
                    sort_order: 0,
                })
                .await
                .unwrap();
        }

        sqlx::query("DELETE FROM users WHERE id = $1")
            .bind(user.id)
            .execute(&pool)
            .await
            .unwrap();

        let remaining: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM interests WHERE profile_id = $1")
            .bind(profile.id)
            .fetch_one(&pool)
            .await
            .unwrap();
        assert_eq!(remaining, 0);

        let portfolio = get_complete_portfolio(&pool, user.id).await.unwrap();
        assert!(portfolio.profile.is_none());
    }

    #[sqlx::test]
    #[test_log::test]
    async fn test_deleting_profile_empties_every_child_table(pool: PgPool) {
        let user = create_test_user(&pool, "orphan").await;
        let profile = create_test_profile(&pool, user.id).await;

        {
            let mut conn = pool.acquire().await.unwrap();
            Projects::new(&mut conn)
                .create(&ProjectCreateDBRequest {
                    profile_id: profile.id,
                    title: "Compiler".to_string(),
                    description: "Toy language".to_string(),
                    image: None,
                    technologies: vec![],
                    demo_link: None,
                    code_link: None,
                    featured: false,
                    sort_order: 0,
                })
                .await
                .unwrap();
            let category = SkillCategories::new(&mut conn)
                .create(&SkillCategoryCreateDBRequest {
                    profile_id: profile.id,
                    title: "Tools".to_string(),
                    icon: "wrench".to_string(),
                    sort_order: 0,
                })
                .await
                .unwrap();
            Skills::new(&mut conn)
                .create(&SkillCreateDBRequest {
                    category_id: category.id,
                    name: "Git".to_string(),
                    percentage: 80,
                    sort_order: 0,
                })
                .await
                .unwrap();
            EducationEntries::new(&mut conn)
                .create(&EducationCreateDBRequest {
                    profile_id: profile.id,
                    degree: "BSc Computer Science".to_string(),
                    institution: "Somewhere University".to_string(),
                    graduation: Some("2020".to_string()),
                    gpa: None,
                    description: None,
                    sort_order: 0,
                })
                .await
                .unwrap();
            Coursework::new(&mut conn)
                .create(&CourseworkCreateDBRequest {
                    profile_id: profile.id,
                    course: "Operating Systems".to_string(),
                    color: "blue".to_string(),
                    sort_order: 0,
                })
                .await
                .unwrap();
            Interests::new(&mut conn)
                .create(&InterestCreateDBRequest {
                    profile_id: profile.id,
                    label: "Climbing".to_string(),
                    icon: "mountain".to_string(),
                    sort_order: 0,
                })
                .await
                .unwrap();
            SocialLinks::new(&mut conn)
                .create(&SocialLinkCreateDBRequest {
                    profile_id: profile.id,
                    platform: "GitHub".to_string(),
                    url: "https://github.com/orphan".to_string(),
                    icon: "github".to_string(),
                    color: "black".to_string(),
                    sort_order: 0,
                })
                .await
                .unwrap();
        }

        sqlx::query("DELETE FROM profiles WHERE id = $1")
            .bind(profile.id)
            .execute(&pool)
            .await
            .unwrap();

        for table in [
            "projects",
            "skill_categories",
            "skills",
            "education",
            "coursework",
            "interests",
            "social_links",
        ] {
            let remaining: i64 = sqlx::query_scalar(&format!("SELECT COUNT(*) FROM {table}"))
                .fetch_one(&pool)
                .await
                .unwrap();
            assert_eq!(remaining, 0, "{table} still has rows after its profile was deleted");
        }

        let users: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM users WHERE id = $1")
            .bind(user.id)
            .fetch_one(&pool)
            .await
            .unwrap();
        assert_eq!(users, 1);
    }
}
