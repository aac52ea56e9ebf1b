use crate::api::RequestContext;
use crate::common::error::ServiceResponse;
use crate::models::leagues::CreateLeagueArgs;
use crate::models::matches::{MatchArgs, MutationResponse, ScoreArgs};
use crate::models::teams::CreateTeamArgs;
use crate::usecases::{leagues, matches, teams};
use axum::Json;
use axum::extract::Path;
use tracing::info;

pub async fn create_match(
    ctx: RequestContext,
    Json(args): Json<MatchArgs>,
) -> ServiceResponse<MutationResponse> {
    let match_id = matches::create(&ctx, args).await?;
    info!(match_id, ip = %ctx.request_ip.ip_addr, "Match created");
    Ok(Json(MutationResponse::created(match_id)))
}

pub async fn update_match(
    ctx: RequestContext,
    Path(match_id): Path<i64>,
    Json(args): Json<MatchArgs>,
) -> ServiceResponse<MutationResponse> {
    matches::update(&ctx, match_id, args).await?;
    info!(match_id, ip = %ctx.request_ip.ip_addr, "Match updated");
    Ok(Json(MutationResponse::done()))
}

pub async fn update_match_score(
    ctx: RequestContext,
    Path(match_id): Path<i64>,
    Json(args): Json<ScoreArgs>,
) -> ServiceResponse<MutationResponse> {
    matches::update_score(&ctx, match_id, args).await?;
    info!(match_id, ip = %ctx.request_ip.ip_addr, "Match score updated");
    Ok(Json(MutationResponse::done()))
}

pub async fn delete_match(
    ctx: RequestContext,
    Path(match_id): Path<i64>,
) -> ServiceResponse<MutationResponse> {
    matches::delete(&ctx, match_id).await?;
    info!(match_id, ip = %ctx.request_ip.ip_addr, "Match deleted");
    Ok(Json(MutationResponse::done()))
}

pub async fn create_team(
    ctx: RequestContext,
    Json(args): Json<CreateTeamArgs>,
) -> ServiceResponse<MutationResponse> {
    let team = teams::create(&ctx, args).await?;
    info!(team_id = team.id, ip = %ctx.request_ip.ip_addr, "Team created");
    Ok(Json(MutationResponse::created(team.id)))
}

pub async fn delete_team(
    ctx: RequestContext,
    Path(team_id): Path<i64>,
) -> ServiceResponse<MutationResponse> {
    teams::delete(&ctx, team_id).await?;
    info!(team_id, ip = %ctx.request_ip.ip_addr, "Team deleted");
    Ok(Json(MutationResponse::done()))
}

pub async fn create_league(
    ctx: RequestContext,
    Json(args): Json<CreateLeagueArgs>,
) -> ServiceResponse<MutationResponse> {
    let league = leagues::create(&ctx, args).await?;
    info!(league_id = league.id, ip = %ctx.request_ip.ip_addr, "League created");
    Ok(Json(MutationResponse::created(league.id)))
}

pub async fn delete_league(
    ctx: RequestContext,
    Path(league_id): Path<i64>,
) -> ServiceResponse<MutationResponse> {
    leagues::delete(&ctx, league_id).await?;
    info!(league_id, ip = %ctx.request_ip.ip_addr, "League deleted");
    Ok(Json(MutationResponse::done()))
}
