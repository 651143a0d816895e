use crate::api::extract::{Path, Query, ValidatedJson};
use crate::api::models::{
    pagination::Pagination,
    users::{UserCreate, UserResponse},
};
use crate::auth::password;
use crate::db::handlers::{Repository, UserFilter, Users};
use crate::db::models::users::UserCreateDBRequest;
use crate::errors::{Error, OperationContext, Result};
use crate::{AppState, types::UserId};
use axum::{Json, extract::State, http::StatusCode};

#[utoipa::path(
    get,
    path = "/api/users",
    tag = "users",
    summary = "List users",
    params(Pagination),
    responses(
        (status = 200, description = "Users ordered by username, without password hashes", body = Vec<UserResponse>),
        (status = 500, description = "Internal server error")
    )
)]
#[tracing::instrument(skip_all)]
pub async fn list_users(State(state): State<AppState>, Query(pagination): Query<Pagination>) -> Result<Json<Vec<UserResponse>>> {
    let mut conn = state.db.acquire().await.during("fetch users")?;
    let users = Users::new(&mut conn)
        .list(&UserFilter::new(pagination.skip(), pagination.limit()))
        .await
        .during("fetch users")?;

    Ok(Json(users.into_iter().map(Into::into).collect()))
}

#[utoipa::path(
    get,
    path = "/api/users/{id}",
    tag = "users",
    summary = "Get a user",
    params(("id" = String, Path, format = "uuid", description = "User id")),
    responses(
        (status = 200, description = "User without password hash", body = UserResponse),
        (status = 404, description = "User not found"),
        (status = 500, description = "Internal server error")
    )
)]
#[tracing::instrument(skip_all)]
pub async fn get_user(State(state): State<AppState>, Path(id): Path<UserId>) -> Result<Json<UserResponse>> {
    let mut conn = state.db.acquire().await.during("fetch user")?;
    let user = Users::new(&mut conn)
        .get_by_id(id)
        .await
        .during("fetch user")?
        .ok_or_else(|| Error::NotFound {
            resource: "User".to_string(),
            id: id.to_string(),
        })?;

    Ok(Json(user.into()))
}

#[utoipa::path(
    post,
    path = "/api/users",
    tag = "users",
    summary = "Create a user",
    request_body = UserCreate,
    responses(
        (status = 201, description = "User created", body = UserResponse),
        (status = 400, description = "Invalid body or password too short"),
        (status = 409, description = "Username already taken"),
        (status = 500, description = "Internal server error")
    )
)]
#[tracing::instrument(skip_all)]
pub async fn create_user(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<UserCreate>,
) -> Result<(StatusCode, Json<UserResponse>)> {
    request.check_password_length(state.config.password.min_length)?;

    // Hash the password on a blocking thread to avoid blocking async runtime
    let params = state.config.password.argon2_params();
    let plaintext = request.password;
    let password_hash = tokio::task::spawn_blocking(move || password::hash_password(&plaintext, params))
        .await
        .map_err(|e| {
            tracing::error!("Password hashing task failed: {e}");
            Error::Internal {
                operation: "create user".to_string(),
            }
        })??;

    let mut conn = state.db.acquire().await.during("create user")?;
    let user = Users::new(&mut conn)
        .create(&UserCreateDBRequest {
            username: request.username,
            password_hash,
        })
        .await
        .during("create user")?;

    Ok((StatusCode::CREATED, Json(user.into())))
}
