use crate::api::extract::{Path, ValidatedJson};
use crate::api::models::interests::{InterestCreate, InterestResponse};
use crate::db::handlers::{CollectionFilter, Interests, Repository};
use crate::db::models::interests::InterestCreateDBRequest;
use crate::errors::{OperationContext, Result};
use crate::{AppState, types::ProfileId};
use axum::{Json, extract::State, http::StatusCode};

#[utoipa::path(
    get,
    path = "/api/interests/{profile_id}",
    tag = "interests",
    summary = "List a profile's interests",
    params(("profile_id" = String, Path, format = "uuid", description = "Owning profile")),
    responses(
        (status = 200, description = "Entries in sortOrder, possibly empty", body = Vec<InterestResponse>),
        (status = 500, description = "Internal server error")
    )
)]
#[tracing::instrument(skip_all)]
pub async fn list_interests(State(state): State<AppState>, Path(profile_id): Path<ProfileId>) -> Result<Json<Vec<InterestResponse>>> {
    let mut conn = state.db.acquire().await.during("fetch interests")?;
    let entries = Interests::new(&mut conn)
        .list(&CollectionFilter::new(profile_id))
        .await
        .during("fetch interests")?;

    Ok(Json(entries.into_iter().map(Into::into).collect()))
}

#[utoipa::path(
    post,
    path = "/api/interests",
    tag = "interests",
    summary = "Create a interest",
    request_body = InterestCreate,
    responses(
        (status = 201, description = "Entry created", body = InterestResponse),
        (status = 400, description = "Invalid body or unknown profile"),
        (status = 500, description = "Internal server error")
    )
)]
#[tracing::instrument(skip_all)]
pub async fn create_interest(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<InterestCreate>,
) -> Result<(StatusCode, Json<InterestResponse>)> {
    let mut conn = state.db.acquire().await.during("create interest")?;
    let entry = Interests::new(&mut conn)
        .create(&InterestCreateDBRequest::from(request))
        .await
        .during("create interest")?;

    Ok((StatusCode::CREATED, Json(entry.into())))
}

#[cfg(test)]
mod tests {
    use crate::test_utils::create_test_app;
    use serde_json::{Value, json};
    use sqlx::PgPool;
    use uuid::Uuid;

    #[sqlx::test]
    #[test_log::test]
    async fn test_interest_for_unknown_profile_is_400(pool: PgPool) {
        let server = create_test_app(pool).await;

        let response = server
            .post("/api/interests")
            .json(&json!({"profileId": Uuid::new_v4(), "label": "Photography", "icon": "camera"}))
            .await;
        response.assert_status_bad_request();
        assert_eq!(response.json::<Value>(), json!({"error": "Invalid reference to related resource"}));
    }

    #[sqlx::test]
    #[test_log::test]
    async fn test_malformed_body_is_400_with_json_error(pool: PgPool) {
        let server = create_test_app(pool).await;

        let response = server
            .post("/api/interests")
            .content_type("application/json")
            .bytes("{not json".into())
            .await;
        response.assert_status_bad_request();
        assert!(response.json::<Value>()["error"].is_string());
    }
}
