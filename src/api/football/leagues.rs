use crate::api::RequestContext;
use crate::common::error::ServiceResponse;
use crate::models::leagues::League;
use crate::models::matches::{MatchView, TimezoneArgs};
use crate::usecases::{leagues, matches};
use axum::Json;
use axum::extract::{Path, Query};
use chrono::Utc;

pub async fn fetch_all(ctx: RequestContext) -> ServiceResponse<Vec<League>> {
    let leagues = leagues::fetch_all(&ctx).await?;
    Ok(Json(leagues))
}

pub async fn fetch_matches(
    ctx: RequestContext,
    Path(league_id): Path<i64>,
    Query(tz): Query<TimezoneArgs>,
) -> ServiceResponse<Vec<MatchView>> {
    let views = matches::fetch_by_league(&ctx, league_id, tz.offset_minutes(), Utc::now()).await?;
    Ok(Json(views))
}
