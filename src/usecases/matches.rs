use crate::common::context::Context;
use crate::common::error::{AppError, ServiceResult, is_foreign_key_violation, unexpected};
use crate::models::events::ChangeEvent;
use crate::models::matches::{
    Match, MatchArgs, MatchStatus, MatchView, MatchesPage, PageArgs, Score, ScoreArgs,
    ScoreSource,
};
use crate::repositories::matches;
use crate::usecases::{leagues, match_status, notifications};
use chrono::{DateTime, Utc};
use tracing::warn;

/// Builds the outward view of a match as seen at `now`. A match whose time
/// cannot be resolved is still returned, with the problem reported in
/// `error` instead of a status.
pub fn present(m: Match, timezone_offset_minutes: i64, now: DateTime<Utc>) -> MatchView {
    let (info, error) = match match_status::resolve(&m.match_time, timezone_offset_minutes, now) {
        Ok(info) => (Some(info), None),
        Err(e) => {
            warn!(
                match_id = m.id,
                match_time = %m.match_time,
                "Match has an unresolvable match time"
            );
            (None, Some(e.code()))
        }
    };
    let minute = info.and_then(|info| info.minute);
    let score = match m.recorded_score {
        Some((home, away)) => Score {
            home: Some(home.into()),
            away: Some(away.into()),
            source: ScoreSource::Recorded,
        },
        None => match_status::placeholder_score(minute),
    };
    MatchView {
        id: m.id,
        league: m.league,
        home: m.home,
        away: m.away,
        match_time: m.match_time,
        status: info.map(|info| info.status),
        phase: info.map(|info| info.phase),
        minute,
        score,
        error,
    }
}

fn present_all(
    matches: impl IntoIterator<Item = Match>,
    timezone_offset_minutes: i64,
    now: DateTime<Utc>,
) -> Vec<MatchView> {
    matches
        .into_iter()
        .map(|m| present(m, timezone_offset_minutes, now))
        .collect()
}

pub async fn fetch_page<C: Context>(
    ctx: &C,
    args: &PageArgs,
    timezone_offset_minutes: i64,
    now: DateTime<Utc>,
) -> ServiceResult<MatchesPage> {
    let total = matches::fetch_count(ctx).await?;
    let page = match matches::fetch_page(ctx, args.offset(), args.limit()).await {
        Ok(page) => page,
        Err(e) => return unexpected(e),
    };
    Ok(MatchesPage {
        page: args.page(),
        limit: args.limit(),
        total,
        results: present_all(page.into_iter().map(Match::from), timezone_offset_minutes, now),
    })
}

/// Every match currently in `status`. Matches whose status cannot be
/// resolved are never included.
pub async fn fetch_by_status<C: Context>(
    ctx: &C,
    status: MatchStatus,
    timezone_offset_minutes: i64,
    now: DateTime<Utc>,
) -> ServiceResult<Vec<MatchView>> {
    let all = match matches::fetch_all(ctx).await {
        Ok(all) => all,
        Err(e) => return unexpected(e),
    };
    let views = present_all(all.into_iter().map(Match::from), timezone_offset_minutes, now);
    Ok(filter_by_status(views, status))
}

pub fn filter_by_status(views: Vec<MatchView>, status: MatchStatus) -> Vec<MatchView> {
    views
        .into_iter()
        .filter(|view| view.status == Some(status))
        .collect()
}

pub async fn fetch_by_league<C: Context>(
    ctx: &C,
    league_id: i64,
    timezone_offset_minutes: i64,
    now: DateTime<Utc>,
) -> ServiceResult<Vec<MatchView>> {
    leagues::fetch_one(ctx, league_id).await?;
    match matches::fetch_by_league(ctx, league_id).await {
        Ok(rows) => Ok(present_all(
            rows.into_iter().map(Match::from),
            timezone_offset_minutes,
            now,
        )),
        Err(e) => unexpected(e),
    }
}

pub async fn fetch_one<C: Context>(ctx: &C, match_id: i64) -> ServiceResult<Match> {
    match matches::fetch_one(ctx, match_id).await {
        Ok(m) => Ok(Match::from(m)),
        Err(sqlx::Error::RowNotFound) => Err(AppError::MatchesNotFound),
        Err(e) => unexpected(e),
    }
}

pub async fn create<C: Context>(ctx: &C, args: MatchArgs) -> ServiceResult<i64> {
    match_status::parse_start_time(&args.match_time)?;
    let res = matches::create(
        ctx,
        args.league_id,
        args.home_team_id,
        args.away_team_id,
        args.match_time.trim(),
    )
    .await;
    let match_id = match res {
        Ok(match_id) => match_id,
        Err(e) if is_foreign_key_violation(&e) => return Err(AppError::MatchesInvalidReference),
        Err(e) => return unexpected(e),
    };
    notifications::notify(ctx, ChangeEvent::MatchCreated { match_id });
    Ok(match_id)
}

pub async fn update<C: Context>(ctx: &C, match_id: i64, args: MatchArgs) -> ServiceResult<()> {
    match_status::parse_start_time(&args.match_time)?;
    fetch_one(ctx, match_id).await?;
    let res = matches::update(
        ctx,
        match_id,
        args.league_id,
        args.home_team_id,
        args.away_team_id,
        args.match_time.trim(),
    )
    .await;
    match res {
        Ok(()) => {}
        Err(e) if is_foreign_key_violation(&e) => return Err(AppError::MatchesInvalidReference),
        Err(e) => return unexpected(e),
    }
    notifications::notify(ctx, ChangeEvent::MatchUpdated { match_id });
    Ok(())
}

pub async fn update_score<C: Context>(
    ctx: &C,
    match_id: i64,
    args: ScoreArgs,
) -> ServiceResult<()> {
    let score = args.into_pair()?;
    fetch_one(ctx, match_id).await?;
    if let Err(e) = matches::update_score(ctx, match_id, score).await {
        return unexpected(e);
    }
    notifications::notify(ctx, ChangeEvent::MatchUpdated { match_id });
    Ok(())
}

pub async fn delete<C: Context>(ctx: &C, match_id: i64) -> ServiceResult<()> {
    match matches::delete(ctx, match_id).await {
        Ok(true) => {}
        Ok(false) => return Err(AppError::MatchesNotFound),
        Err(e) => return unexpected(e),
    }
    notifications::notify(ctx, ChangeEvent::MatchDeleted { match_id });
    Ok(())
}
