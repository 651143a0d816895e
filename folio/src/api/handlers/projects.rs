use crate::api::extract::{Path, ValidatedJson};
use crate::api::models::projects::{ProjectCreate, ProjectResponse, ProjectUpdate};
use crate::db::handlers::{CollectionFilter, Projects, Repository};
use crate::db::models::projects::{ProjectCreateDBRequest, ProjectUpdateDBRequest};
use crate::errors::{Error, OperationContext, Result};
use crate::{
    AppState,
    types::{ProfileId, ProjectId},
};
use axum::{Json, extract::State, http::StatusCode};

fn project_not_found(id: ProjectId) -> Error {
    Error::NotFound {
        resource: "Project".to_string(),
        id: id.to_string(),
    }
}

#[utoipa::path(
    get,
    path = "/api/projects/{id}",
    tag = "projects",
    summary = "List a profile's projects",
    description = "Featured projects first, then ascending sortOrder. On this method `id` is the owning profile's id; \
                   PUT and DELETE on the same path take a project id.",
    params(("id" = String, Path, format = "uuid", description = "Owning profile")),
    responses(
        (status = 200, description = "Projects, possibly empty", body = Vec<ProjectResponse>),
        (status = 500, description = "Internal server error")
    )
)]
#[tracing::instrument(skip_all)]
pub async fn list_projects(State(state): State<AppState>, Path(profile_id): Path<ProfileId>) -> Result<Json<Vec<ProjectResponse>>> {
    let mut conn = state.db.acquire().await.during("fetch projects")?;
    let projects = Projects::new(&mut conn)
        .list(&CollectionFilter::new(profile_id))
        .await
        .during("fetch projects")?;

    Ok(Json(projects.into_iter().map(Into::into).collect()))
}

#[utoipa::path(
    post,
    path = "/api/projects",
    tag = "projects",
    summary = "Create a project",
    request_body = ProjectCreate,
    responses(
        (status = 201, description = "Project created", body = ProjectResponse),
        (status = 400, description = "Invalid body or unknown profile"),
        (status = 500, description = "Internal server error")
    )
)]
#[tracing::instrument(skip_all)]
pub async fn create_project(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<ProjectCreate>,
) -> Result<(StatusCode, Json<ProjectResponse>)> {
    let mut conn = state.db.acquire().await.during("create project")?;
    let project = Projects::new(&mut conn)
        .create(&ProjectCreateDBRequest::from(request))
        .await
        .during("create project")?;

    Ok((StatusCode::CREATED, Json(project.into())))
}

#[utoipa::path(
    put,
    path = "/api/projects/{id}",
    tag = "projects",
    summary = "Update a project",
    description = "Only fields present in the body change.",
    params(("id" = String, Path, format = "uuid", description = "Project id")),
    request_body = ProjectUpdate,
    responses(
        (status = 200, description = "Updated project", body = ProjectResponse),
        (status = 400, description = "Invalid body"),
        (status = 404, description = "Project not found"),
        (status = 500, description = "Internal server error")
    )
)]
#[tracing::instrument(skip_all)]
pub async fn update_project(
    State(state): State<AppState>,
    Path(id): Path<ProjectId>,
    ValidatedJson(request): ValidatedJson<ProjectUpdate>,
) -> Result<Json<ProjectResponse>> {
    let mut conn = state.db.acquire().await.during("update project")?;
    let project = Projects::new(&mut conn)
        .update(id, &ProjectUpdateDBRequest::from(request))
        .await
        .during("update project")?
        .ok_or_else(|| project_not_found(id))?;

    Ok(Json(project.into()))
}

#[utoipa::path(
    delete,
    path = "/api/projects/{id}",
    tag = "projects",
    summary = "Delete a project",
    params(("id" = String, Path, format = "uuid", description = "Project id")),
    responses(
        (status = 204, description = "Project deleted"),
        (status = 404, description = "Project not found"),
        (status = 500, description = "Internal server error")
    )
)]
#[tracing::instrument(skip_all)]
pub async fn delete_project(State(state): State<AppState>, Path(id): Path<ProjectId>) -> Result<StatusCode> {
    let mut conn = state.db.acquire().await.during("delete project")?;
    if !Projects::new(&mut conn).delete(id).await.during("delete project")? {
        return Err(project_not_found(id));
    }

    Ok(StatusCode::NO_CONTENT)
}

#[cfg(test)]
mod tests {
    use crate::api::models::projects::ProjectResponse;
    use crate::test_utils::{create_test_app, create_test_profile, create_test_user};
    use axum::http::StatusCode;
    use serde_json::{Value, json};
    use sqlx::PgPool;
    use uuid::Uuid;

    #[sqlx::test]
    #[test_log::test]
    async fn test_list_projects_featured_first(pool: PgPool) {
        let user = create_test_user(&pool, "lister").await;
        let profile = create_test_profile(&pool, user.id).await;
        let server = create_test_app(pool).await;

        for (title, featured, sort_order) in [("plain-late", false, 5), ("star-late", true, 9), ("plain-early", false, 1), ("star-early", true, 2)] {
            server
                .post("/api/projects")
                .json(&json!({
                    "profileId": profile.id,
                    "title": title,
                    "description": "d",
                    "featured": featured,
                    "sortOrder": sort_order
                }))
                .await
                .assert_status(StatusCode::CREATED);
        }

        let response = server.get(&format!("/api/projects/{}", profile.id)).await;
        response.assert_status_ok();
        let projects: Vec<ProjectResponse> = response.json();
        let titles: Vec<_> = projects.iter().map(|p| p.title.as_str()).collect();
        assert_eq!(titles, vec!["star-early", "star-late", "plain-early", "plain-late"]);
    }

    #[sqlx::test]
    #[test_log::test]
    async fn test_list_projects_for_unknown_profile_is_empty(pool: PgPool) {
        let server = create_test_app(pool).await;

        let response = server.get(&format!("/api/projects/{}", Uuid::new_v4())).await;
        response.assert_status_ok();
        assert_eq!(response.json::<Value>(), json!([]));
    }

    #[sqlx::test]
    #[test_log::test]
    async fn test_create_project_defaults(pool: PgPool) {
        let user = create_test_user(&pool, "defaults").await;
        let profile = create_test_profile(&pool, user.id).await;
        let server = create_test_app(pool).await;

        let response = server
            .post("/api/projects")
            .json(&json!({"profileId": profile.id, "title": "Minimal", "description": "Only required fields"}))
            .await;
        response.assert_status(StatusCode::CREATED);

        let body: Value = response.json();
        assert_eq!(body["featured"], false);
        assert_eq!(body["sortOrder"], 0);
        assert_eq!(body["technologies"], json!([]));
        assert!(body["demoLink"].is_null());
        assert!(body["id"].is_string());
    }

    #[sqlx::test]
    #[test_log::test]
    async fn test_create_project_for_unknown_profile_is_400(pool: PgPool) {
        let server = create_test_app(pool).await;

        let response = server
            .post("/api/projects")
            .json(&json!({"profileId": Uuid::new_v4(), "title": "Orphan", "description": "d"}))
            .await;
        response.assert_status_bad_request();
    }

    #[sqlx::test]
    #[test_log::test]
    async fn test_update_and_delete_project(pool: PgPool) {
        let user = create_test_user(&pool, "editor").await;
        let profile = create_test_profile(&pool, user.id).await;
        let server = create_test_app(pool).await;

        let created: ProjectResponse = server
            .post("/api/projects")
            .json(&json!({"profileId": profile.id, "title": "Draft", "description": "d", "technologies": ["Go"]}))
            .await
            .json();

        let response = server
            .put(&format!("/api/projects/{}", created.id))
            .json(&json!({"title": "Shipped", "featured": true}))
            .await;
        response.assert_status_ok();
        let updated: ProjectResponse = response.json();
        assert_eq!(updated.title, "Shipped");
        assert!(updated.featured);
        assert_eq!(updated.technologies, vec!["Go"]);

        server
            .delete(&format!("/api/projects/{}", created.id))
            .await
            .assert_status(StatusCode::NO_CONTENT);

        let response = server.get(&format!("/api/projects/{}", profile.id)).await;
        assert_eq!(response.json::<Value>(), json!([]));
    }

    #[sqlx::test]
    #[test_log::test]
    async fn test_missing_project_is_404(pool: PgPool) {
        let server = create_test_app(pool).await;
        let id = Uuid::new_v4();

        let response = server.delete(&format!("/api/projects/{id}")).await;
        response.assert_status_not_found();
        assert_eq!(response.json::<Value>(), json!({"error": "Project not found"}));

        server
            .put(&format!("/api/projects/{id}"))
            .json(&json!({"title": "Ghost"}))
            .await
            .assert_status_not_found();
    }
}
