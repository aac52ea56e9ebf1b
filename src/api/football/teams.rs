use crate::api::RequestContext;
use crate::common::error::ServiceResponse;
use crate::models::teams::{SearchTeamsArgs, Team};
use crate::usecases::teams;
use axum::Json;
use axum::extract::{Path, Query};

pub async fn fetch_all(ctx: RequestContext) -> ServiceResponse<Vec<Team>> {
    let teams = teams::fetch_all(&ctx).await?;
    Ok(Json(teams))
}

pub async fn search(
    ctx: RequestContext,
    Query(args): Query<SearchTeamsArgs>,
) -> ServiceResponse<Vec<Team>> {
    let teams = teams::search(&ctx, &args.q).await?;
    Ok(Json(teams))
}

pub async fn fetch_one(ctx: RequestContext, Path(team_id): Path<i64>) -> ServiceResponse<Team> {
    let team = teams::fetch_one(&ctx, team_id).await?;
    Ok(Json(team))
}
