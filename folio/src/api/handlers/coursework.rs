use crate::api::extract::{Path, ValidatedJson};
use crate::api::models::coursework::{CourseworkCreate, CourseworkResponse};
use crate::db::handlers::{CollectionFilter, Coursework, Repository};
use crate::db::models::coursework::CourseworkCreateDBRequest;
use crate::errors::{OperationContext, Result};
use crate::{AppState, types::ProfileId};
use axum::{Json, extract::State, http::StatusCode};

#[utoipa::path(
    get,
    path = "/api/coursework/{profile_id}",
    tag = "coursework",
    summary = "List a profile's coursework",
    params(("profile_id" = String, Path, format = "uuid", description = "Owning profile")),
    responses(
        (status = 200, description = "Entries in sortOrder, possibly empty", body = Vec<CourseworkResponse>),
        (status = 500, description = "Internal server error")
    )
)]
#[tracing::instrument(skip_all)]
pub async fn list_coursework(State(state): State<AppState>, Path(profile_id): Path<ProfileId>) -> Result<Json<Vec<CourseworkResponse>>> {
    let mut conn = state.db.acquire().await.during("fetch coursework")?;
    let entries = Coursework::new(&mut conn)
        .list(&CollectionFilter::new(profile_id))
        .await
        .during("fetch coursework")?;

    Ok(Json(entries.into_iter().map(Into::into).collect()))
}

#[utoipa::path(
    post,
    path = "/api/coursework",
    tag = "coursework",
    summary = "Create a coursework entry",
    request_body = CourseworkCreate,
    responses(
        (status = 201, description = "Entry created", body = CourseworkResponse),
        (status = 400, description = "Invalid body or unknown profile"),
        (status = 500, description = "Internal server error")
    )
)]
#[tracing::instrument(skip_all)]
pub async fn create_coursework(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<CourseworkCreate>,
) -> Result<(StatusCode, Json<CourseworkResponse>)> {
    let mut conn = state.db.acquire().await.during("create coursework entry")?;
    let entry = Coursework::new(&mut conn)
        .create(&CourseworkCreateDBRequest::from(request))
        .await
        .during("create coursework entry")?;

    Ok((StatusCode::CREATED, Json(entry.into())))
}
