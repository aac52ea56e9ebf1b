use crate::common::context::Context;
use crate::common::error::{AppError, ServiceResult, is_foreign_key_violation, unexpected};
use crate::models::events::ChangeEvent;
use crate::models::teams::{CreateTeamArgs, Team};
use crate::repositories::teams;
use crate::usecases::notifications;

pub async fn fetch_all<C: Context>(ctx: &C) -> ServiceResult<Vec<Team>> {
    match teams::fetch_all(ctx).await {
        Ok(teams) => Ok(teams.into_iter().map(Team::from).collect()),
        Err(e) => unexpected(e),
    }
}

/// Case-insensitive substring match on the team name. An empty query
/// matches every team.
pub async fn search<C: Context>(ctx: &C, query: &str) -> ServiceResult<Vec<Team>> {
    match teams::search(ctx, query.trim()).await {
        Ok(teams) => Ok(teams.into_iter().map(Team::from).collect()),
        Err(e) => unexpected(e),
    }
}

pub async fn fetch_one<C: Context>(ctx: &C, team_id: i64) -> ServiceResult<Team> {
    match teams::fetch_one(ctx, team_id).await {
        Ok(team) => Ok(Team::from(team)),
        Err(sqlx::Error::RowNotFound) => Err(AppError::TeamsNotFound),
        Err(e) => unexpected(e),
    }
}

pub async fn create<C: Context>(ctx: &C, args: CreateTeamArgs) -> ServiceResult<Team> {
    let name = args.name.trim();
    if name.is_empty() {
        return Err(AppError::DecodingRequestFailed);
    }
    let team = match teams::create(ctx, name, args.logo.trim()).await {
        Ok(team) => Team::from(team),
        Err(e) => return unexpected(e),
    };
    notifications::notify(ctx, ChangeEvent::TeamCreated { team_id: team.id });
    Ok(team)
}

pub async fn delete<C: Context>(ctx: &C, team_id: i64) -> ServiceResult<()> {
    match teams::delete(ctx, team_id).await {
        Ok(true) => {}
        Ok(false) => return Err(AppError::TeamsNotFound),
        Err(e) if is_foreign_key_violation(&e) => return Err(AppError::TeamsInUse),
        Err(e) => return unexpected(e),
    }
    notifications::notify(ctx, ChangeEvent::TeamDeleted { team_id });
    Ok(())
}
