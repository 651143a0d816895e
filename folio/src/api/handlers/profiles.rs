use crate::api::extract::{Path, ValidatedJson};
use crate::api::models::profiles::{ProfileCreate, ProfileResponse, ProfileUpdate};
use crate::db::handlers::Profiles;
use crate::db::models::profiles::{ProfileCreateDBRequest, ProfileUpdateDBRequest};
use crate::errors::{Error, OperationContext, Result};
use crate::{AppState, types::UserId};
use axum::{Json, extract::State, http::StatusCode};

fn profile_not_found(user_id: UserId) -> Error {
    Error::NotFound {
        resource: "Profile".to_string(),
        id: user_id.to_string(),
    }
}

#[utoipa::path(
    get,
    path = "/api/profile/{user_id}",
    tag = "profile",
    summary = "Get the profile owned by a user",
    params(("user_id" = String, Path, format = "uuid", description = "Owning user")),
    responses(
        (status = 200, description = "Profile", body = ProfileResponse),
        (status = 404, description = "User has no profile"),
        (status = 500, description = "Internal server error")
    )
)]
#[tracing::instrument(skip_all)]
pub async fn get_profile(State(state): State<AppState>, Path(user_id): Path<UserId>) -> Result<Json<ProfileResponse>> {
    let mut conn = state.db.acquire().await.during("fetch profile")?;
    let profile = Profiles::new(&mut conn)
        .get_by_user(user_id)
        .await
        .during("fetch profile")?
        .ok_or_else(|| profile_not_found(user_id))?;

    Ok(Json(profile.into()))
}

#[utoipa::path(
    post,
    path = "/api/profile",
    tag = "profile",
    summary = "Create a profile",
    request_body = ProfileCreate,
    responses(
        (status = 201, description = "Profile created", body = ProfileResponse),
        (status = 400, description = "Invalid body or unknown user"),
        (status = 409, description = "User already has a profile"),
        (status = 500, description = "Internal server error")
    )
)]
#[tracing::instrument(skip_all)]
pub async fn create_profile(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<ProfileCreate>,
) -> Result<(StatusCode, Json<ProfileResponse>)> {
    let mut conn = state.db.acquire().await.during("create profile")?;
    let profile = Profiles::new(&mut conn)
        .create(&ProfileCreateDBRequest::from(request))
        .await
        .during("create profile")?;

    Ok((StatusCode::CREATED, Json(profile.into())))
}

#[utoipa::path(
    put,
    path = "/api/profile/{user_id}",
    tag = "profile",
    summary = "Update the profile owned by a user",
    description = "Only fields present in the body change.",
    params(("user_id" = String, Path, format = "uuid", description = "Owning user")),
    request_body = ProfileUpdate,
    responses(
        (status = 200, description = "Updated profile", body = ProfileResponse),
        (status = 400, description = "Invalid body"),
        (status = 404, description = "User has no profile"),
        (status = 500, description = "Internal server error")
    )
)]
#[tracing::instrument(skip_all)]
pub async fn update_profile(
    State(state): State<AppState>,
    Path(user_id): Path<UserId>,
    ValidatedJson(request): ValidatedJson<ProfileUpdate>,
) -> Result<Json<ProfileResponse>> {
    let mut conn = state.db.acquire().await.during("update profile")?;
    let profile = Profiles::new(&mut conn)
        .update_by_user(user_id, &ProfileUpdateDBRequest::from(request))
        .await
        .during("update profile")?
        .ok_or_else(|| profile_not_found(user_id))?;

    Ok(Json(profile.into()))
}
