use crate::api::extract::{Path, ValidatedJson};
use crate::api::models::skills::{
    SkillCategoryCreate, SkillCategoryResponse, SkillCategoryWithSkillsResponse, SkillCreate, SkillResponse,
};
use crate::db::handlers::{Repository, SkillCategories, Skills};
use crate::db::models::skills::{SkillCategoryCreateDBRequest, SkillCreateDBRequest};
use crate::errors::{OperationContext, Result};
use crate::{AppState, types::ProfileId};
use axum::{Json, extract::State, http::StatusCode};

#[utoipa::path(
    get,
    path = "/api/skills/{profile_id}",
    tag = "skills",
    summary = "List skill categories with their skills",
    params(("profile_id" = String, Path, format = "uuid", description = "Owning profile")),
    responses(
        (status = 200, description = "Categories in sortOrder, each with skills in sortOrder", body = Vec<SkillCategoryWithSkillsResponse>),
        (status = 500, description = "Internal server error")
    )
)]
#[tracing::instrument(skip_all)]
pub async fn list_skills(
    State(state): State<AppState>,
    Path(profile_id): Path<ProfileId>,
) -> Result<Json<Vec<SkillCategoryWithSkillsResponse>>> {
    let mut conn = state.db.acquire().await.during("fetch skills")?;
    let categories = SkillCategories::new(&mut conn).with_skills(profile_id).await.during("fetch skills")?;

    Ok(Json(categories.into_iter().map(Into::into).collect()))
}

#[utoipa::path(
    post,
    path = "/api/skill-categories",
    tag = "skills",
    summary = "Create a skill category",
    request_body = SkillCategoryCreate,
    responses(
        (status = 201, description = "Category created", body = SkillCategoryResponse),
        (status = 400, description = "Invalid body or unknown profile"),
        (status = 500, description = "Internal server error")
    )
)]
#[tracing::instrument(skip_all)]
pub async fn create_skill_category(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<SkillCategoryCreate>,
) -> Result<(StatusCode, Json<SkillCategoryResponse>)> {
    let mut conn = state.db.acquire().await.during("create skill category")?;
    let category = SkillCategories::new(&mut conn)
        .create(&SkillCategoryCreateDBRequest::from(request))
        .await
        .during("create skill category")?;

    Ok((StatusCode::CREATED, Json(category.into())))
}

#[utoipa::path(
    post,
    path = "/api/skills",
    tag = "skills",
    summary = "Create a skill",
    request_body = SkillCreate,
    responses(
        (status = 201, description = "Skill created", body = SkillResponse),
        (status = 400, description = "Invalid body, percentage out of range, or unknown category"),
        (status = 500, description = "Internal server error")
    )
)]
#[tracing::instrument(skip_all)]
pub async fn create_skill(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<SkillCreate>,
) -> Result<(StatusCode, Json<SkillResponse>)> {
    let mut conn = state.db.acquire().await.during("create skill")?;
    let skill = Skills::new(&mut conn)
        .create(&SkillCreateDBRequest::from(request))
        .await
        .during("create skill")?;

    Ok((StatusCode::CREATED, Json(skill.into())))
}
