use crate::api::extract::{Path, ValidatedJson};
use crate::api::models::social_links::{SocialLinkCreate, SocialLinkResponse};
use crate::db::handlers::{CollectionFilter, SocialLinks, Repository};
use crate::db::models::social_links::SocialLinkCreateDBRequest;
use crate::errors::{OperationContext, Result};
use crate::{AppState, types::ProfileId};
use axum::{Json, extract::State, http::StatusCode};

#[utoipa::path(
    get,
    path = "/api/social-links/{profile_id}",
    tag = "social-links",
    summary = "List a profile's social links",
    params(("profile_id" = String, Path, format = "uuid", description = "Owning profile")),
    responses(
        (status = 200, description = "Entries in sortOrder, possibly empty", body = Vec<SocialLinkResponse>),
        (status = 500, description = "Internal server error")
    )
)]
#[tracing::instrument(skip_all)]
pub async fn list_social_links(State(state): State<AppState>, Path(profile_id): Path<ProfileId>) -> Result<Json<Vec<SocialLinkResponse>>> {
    let mut conn = state.db.acquire().await.during("fetch social links")?;
    let entries = SocialLinks::new(&mut conn)
        .list(&CollectionFilter::new(profile_id))
        .await
        .during("fetch social links")?;

    Ok(Json(entries.into_iter().map(Into::into).collect()))
}

#[utoipa::path(
    post,
    path = "/api/social-links",
    tag = "social-links",
    summary = "Create a social link",
    request_body = SocialLinkCreate,
    responses(
        (status = 201, description = "Entry created", body = SocialLinkResponse),
        (status = 400, description = "Invalid body or unknown profile"),
        (status = 500, description = "Internal server error")
    )
)]
#[tracing::instrument(skip_all)]
pub async fn create_social_link(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<SocialLinkCreate>,
) -> Result<(StatusCode, Json<SocialLinkResponse>)> {
    let mut conn = state.db.acquire().await.during("create social link")?;
    let entry = SocialLinks::new(&mut conn)
        .create(&SocialLinkCreateDBRequest::from(request))
        .await
        .during("create social link")?;

    Ok((StatusCode::CREATED, Json(entry.into())))
}
