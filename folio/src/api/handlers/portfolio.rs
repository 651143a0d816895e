use crate::api::extract::Path;
use crate::api::models::portfolio::PortfolioResponse;
use crate::db::handlers::portfolio::get_complete_portfolio;
use crate::errors::{OperationContext, Result};
use crate::{AppState, types::UserId};
use axum::{Json, extract::State};

#[utoipa::path(
    get,
    path = "/api/portfolio/{user_id}",
    tag = "portfolio",
    summary = "Get a user's complete portfolio",
    description = "Profile plus every collection. A user without a profile gets `profile: null` and empty collections.",
    params(("user_id" = String, Path, format = "uuid", description = "Owning user")),
    responses(
        (status = 200, description = "Aggregate portfolio", body = PortfolioResponse),
        (status = 400, description = "Invalid user id"),
        (status = 500, description = "Internal server error")
    )
)]
#[tracing::instrument(skip_all)]
pub async fn get_portfolio(State(state): State<AppState>, Path(user_id): Path<UserId>) -> Result<Json<PortfolioResponse>> {
    let portfolio = get_complete_portfolio(&state.db, user_id).await.during("fetch portfolio")?;
    Ok(Json(portfolio.into()))
}
