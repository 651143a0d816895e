//! OpenAPI documentation for the `/api/*` surface, served interactively at `/api/docs`.

mod extra_types;

pub use extra_types::ErrorResponse;

use utoipa::OpenApi;

use crate::api;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Folio API",
        description = "REST API backing a personal portfolio site. Request and response bodies use camelCase keys."
    ),
    paths(
        api::handlers::portfolio::get_portfolio,
        api::handlers::profiles::get_profile,
        api::handlers::profiles::create_profile,
        api::handlers::profiles::update_profile,
        api::handlers::projects::list_projects,
        api::handlers::projects::create_project,
        api::handlers::projects::update_project,
        api::handlers::projects::delete_project,
        api::handlers::skills::list_skills,
        api::handlers::skills::create_skill_category,
        api::handlers::skills::create_skill,
        api::handlers::education::list_education,
        api::handlers::education::create_education_entry,
        api::handlers::coursework::list_coursework,
        api::handlers::coursework::create_coursework,
        api::handlers::interests::list_interests,
        api::handlers::interests::create_interest,
        api::handlers::social_links::list_social_links,
        api::handlers::social_links::create_social_link,
        api::handlers::users::list_users,
        api::handlers::users::get_user,
        api::handlers::users::create_user,
        api::handlers::health::health,
    ),
    components(
        schemas(
            ErrorResponse,
            api::models::portfolio::PortfolioResponse,
            api::models::profiles::ProfileCreate,
            api::models::profiles::ProfileUpdate,
            api::models::profiles::ProfileResponse,
            api::models::projects::ProjectCreate,
            api::models::projects::ProjectUpdate,
            api::models::projects::ProjectResponse,
            api::models::skills::SkillCategoryCreate,
            api::models::skills::SkillCategoryResponse,
            api::models::skills::SkillCategoryWithSkillsResponse,
            api::models::skills::SkillCreate,
            api::models::skills::SkillResponse,
            api::models::education::EducationCreate,
            api::models::education::EducationResponse,
            api::models::coursework::CourseworkCreate,
            api::models::coursework::CourseworkResponse,
            api::models::interests::InterestCreate,
            api::models::interests::InterestResponse,
            api::models::social_links::SocialLinkCreate,
            api::models::social_links::SocialLinkResponse,
            api::models::users::UserCreate,
            api::models::users::UserResponse,
            api::handlers::health::HealthResponse,
        )
    ),
    tags(
        (name = "portfolio", description = "Aggregate portfolio read"),
        (name = "profile", description = "One profile per user"),
        (name = "projects", description = "Showcased projects"),
        (name = "skills", description = "Skill categories and skills"),
        (name = "education", description = "Education history"),
        (name = "coursework", description = "Coursework badges"),
        (name = "interests", description = "Personal interests"),
        (name = "social-links", description = "Links to external profiles"),
        (name = "users", description = "Accounts"),
        (name = "health", description = "Liveness"),
    )
)]
pub struct ApiDoc;
