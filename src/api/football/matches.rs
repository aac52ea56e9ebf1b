use crate::api::RequestContext;
use crate::common::error::ServiceResponse;
use crate::models::matches::{MatchStatus, MatchView, MatchesPage, PageArgs, TimezoneArgs};
use crate::usecases::matches;
use axum::Json;
use axum::extract::{Path, Query};
use chrono::Utc;

pub async fn fetch_page(
    ctx: RequestContext,
    Query(page): Query<PageArgs>,
    Query(tz): Query<TimezoneArgs>,
) -> ServiceResponse<MatchesPage> {
    let page = matches::fetch_page(&ctx, &page, tz.offset_minutes(), Utc::now()).await?;
    Ok(Json(page))
}

pub async fn fetch_by_status(
    ctx: RequestContext,
    Path(status): Path<String>,
    Query(tz): Query<TimezoneArgs>,
) -> ServiceResponse<Vec<MatchView>> {
    let status: MatchStatus = status.parse()?;
    let views = matches::fetch_by_status(&ctx, status, tz.offset_minutes(), Utc::now()).await?;
    Ok(Json(views))
}

pub async fn fetch_one(
    ctx: RequestContext,
    Path(match_id): Path<i64>,
    Query(tz): Query<TimezoneArgs>,
) -> ServiceResponse<MatchView> {
    let m = matches::fetch_one(&ctx, match_id).await?;
    Ok(Json(matches::present(m, tz.offset_minutes(), Utc::now())))
}
