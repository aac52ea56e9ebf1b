use crate::common::context::Context;
use crate::common::error::{AppError, ServiceResult, is_foreign_key_violation, unexpected};
use crate::models::events::ChangeEvent;
use crate::models::leagues::{CreateLeagueArgs, League};
use crate::repositories::leagues;
use crate::usecases::notifications;

pub async fn fetch_all<C: Context>(ctx: &C) -> ServiceResult<Vec<League>> {
    match leagues::fetch_all(ctx).await {
        Ok(leagues) => Ok(leagues.into_iter().map(League::from).collect()),
        Err(e) => unexpected(e),
    }
}

pub async fn fetch_one<C: Context>(ctx: &C, league_id: i64) -> ServiceResult<League> {
    match leagues::fetch_one(ctx, league_id).await {
        Ok(league) => Ok(League::from(league)),
        Err(sqlx::Error::RowNotFound) => Err(AppError::LeaguesNotFound),
        Err(e) => unexpected(e),
    }
}

pub async fn create<C: Context>(ctx: &C, args: CreateLeagueArgs) -> ServiceResult<League> {
    let name = args.name.trim();
    if name.is_empty() {
        return Err(AppError::DecodingRequestFailed);
    }
    let league = match leagues::create(ctx, name, args.logo.trim()).await {
        Ok(league) => League::from(league),
        Err(e) => return unexpected(e),
    };
    notifications::notify(ctx, ChangeEvent::LeagueCreated { league_id: league.id });
    Ok(league)
}

pub async fn delete<C: Context>(ctx: &C, league_id: i64) -> ServiceResult<()> {
    match leagues::delete(ctx, league_id).await {
        Ok(true) => {}
        Ok(false) => return Err(AppError::LeaguesNotFound),
        Err(e) if is_foreign_key_violation(&e) => return Err(AppError::LeaguesInUse),
        Err(e) => return unexpected(e),
    }
    notifications::notify(ctx, ChangeEvent::LeagueDeleted { league_id });
    Ok(())
}
