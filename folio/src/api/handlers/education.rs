use crate::api::extract::{Path, ValidatedJson};
use crate::api::models::education::{EducationCreate, EducationResponse};
use crate::db::handlers::{CollectionFilter, EducationEntries, Repository};
use crate::db::models::education::EducationCreateDBRequest;
use crate::errors::{OperationContext, Result};
use crate::{AppState, types::ProfileId};
use axum::{Json, extract::State, http::StatusCode};

#[utoipa::path(
    get,
    path = "/api/education/{profile_id}",
    tag = "education",
    summary = "List a profile's education",
    params(("profile_id" = String, Path, format = "uuid", description = "Owning profile")),
    responses(
        (status = 200, description = "Entries in sortOrder, possibly empty", body = Vec<EducationResponse>),
        (status = 500, description = "Internal server error")
    )
)]
#[tracing::instrument(skip_all)]
pub async fn list_education(State(state): State<AppState>, Path(profile_id): Path<ProfileId>) -> Result<Json<Vec<EducationResponse>>> {
    let mut conn = state.db.acquire().await.during("fetch education")?;
    let entries = EducationEntries::new(&mut conn)
        .list(&CollectionFilter::new(profile_id))
        .await
        .during("fetch education")?;

    Ok(Json(entries.into_iter().map(Into::into).collect()))
}

#[utoipa::path(
    post,
    path = "/api/education",
    tag = "education",
    summary = "Create a education entry",
    request_body = EducationCreate,
    responses(
        (status = 201, description = "Entry created", body = EducationResponse),
        (status = 400, description = "Invalid body or unknown profile"),
        (status = 500, description = "Internal server error")
    )
)]
#[tracing::instrument(skip_all)]
pub async fn create_education_entry(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<EducationCreate>,
) -> Result<(StatusCode, Json<EducationResponse>)> {
    let mut conn = state.db.acquire().await.during("create education entry")?;
    let entry = EducationEntries::new(&mut conn)
        .create(&EducationCreateDBRequest::from(request))
        .await
        .during("create education entry")?;

    Ok((StatusCode::CREATED, Json(entry.into())))
}
