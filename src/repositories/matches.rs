use crate::common::context::Context;
use crate::entities::matches::Match;

const READ_QUERY: &str = const_str::concat!(
    "SELECT m.id, m.league_id, m.home_team_id, m.away_team_id, m.match_time, ",
    "m.home_score, m.away_score, ",
    "l.name AS league_name, l.logo AS league_logo, ",
    "h.name AS home_team_name, h.logo AS home_team_logo, ",
    "a.name AS away_team_name, a.logo AS away_team_logo ",
    "FROM matches m ",
    "LEFT JOIN leagues l ON l.id = m.league_id ",
    "LEFT JOIN teams h ON h.id = m.home_team_id ",
    "LEFT JOIN teams a ON a.id = m.away_team_id",
);

pub async fn fetch_count<C: Context>(ctx: &C) -> sqlx::Result<u64> {
    const QUERY: &str = "SELECT COUNT(*) FROM matches";
    let count: i64 = sqlx::query_scalar(QUERY).fetch_one(ctx.db()).await?;
    Ok(count as _)
}

pub async fn fetch_page<C: Context>(ctx: &C, offset: u64, limit: u64) -> sqlx::Result<Vec<Match>> {
    const QUERY: &str = const_str::concat!(READ_QUERY, " ORDER BY m.id LIMIT ? OFFSET ?");
    sqlx::query_as(QUERY)
        .bind(limit)
        .bind(offset)
        .fetch_all(ctx.db())
        .await
}

pub async fn fetch_all<C: Context>(ctx: &C) -> sqlx::Result<Vec<Match>> {
    const QUERY: &str = const_str::concat!(READ_QUERY, " ORDER BY m.id");
    sqlx::query_as(QUERY).fetch_all(ctx.db()).await
}

pub async fn fetch_by_league<C: Context>(ctx: &C, league_id: i64) -> sqlx::Result<Vec<Match>> {
    const QUERY: &str = const_str::concat!(READ_QUERY, " WHERE m.league_id = ? ORDER BY m.id");
    sqlx::query_as(QUERY)
        .bind(league_id)
        .fetch_all(ctx.db())
        .await
}

pub async fn fetch_one<C: Context>(ctx: &C, match_id: i64) -> sqlx::Result<Match> {
    const QUERY: &str = const_str::concat!(READ_QUERY, " WHERE m.id = ?");
    sqlx::query_as(QUERY)
        .bind(match_id)
        .fetch_one(ctx.db())
        .await
}

pub async fn create<C: Context>(
    ctx: &C,
    league_id: i64,
    home_team_id: i64,
    away_team_id: i64,
    match_time: &str,
) -> sqlx::Result<i64> {
    const QUERY: &str = const_str::concat!(
        "INSERT INTO matches ",
        "(league_id, home_team_id, away_team_id, match_time) ",
        "VALUES (?, ?, ?, ?)",
    );
    let res = sqlx::query(QUERY)
        .bind(league_id)
        .bind(home_team_id)
        .bind(away_team_id)
        .bind(match_time)
        .execute(ctx.db())
        .await?;
    Ok(res.last_insert_id() as _)
}

pub async fn update<C: Context>(
    ctx: &C,
    match_id: i64,
    league_id: i64,
    home_team_id: i64,
    away_team_id: i64,
    match_time: &str,
) -> sqlx::Result<()> {
    const QUERY: &str = const_str::concat!(
        "UPDATE matches SET ",
        "league_id = ?, home_team_id = ?, away_team_id = ?, match_time = ? ",
        "WHERE id = ?",
    );
    sqlx::query(QUERY)
        .bind(league_id)
        .bind(home_team_id)
        .bind(away_team_id)
        .bind(match_time)
        .bind(match_id)
        .execute(ctx.db())
        .await?;
    Ok(())
}

pub async fn update_score<C: Context>(
    ctx: &C,
    match_id: i64,
    score: Option<(i32, i32)>,
) -> sqlx::Result<()> {
    const QUERY: &str = "UPDATE matches SET home_score = ?, away_score = ? WHERE id = ?";
    let (home_score, away_score) = score.unzip();
    sqlx::query(QUERY)
        .bind(home_score)
        .bind(away_score)
        .bind(match_id)
        .execute(ctx.db())
        .await?;
    Ok(())
}

/// Returns whether a row was deleted
pub async fn delete<C: Context>(ctx: &C, match_id: i64) -> sqlx::Result<bool> {
    const QUERY: &str = "DELETE FROM matches WHERE id = ?";
    let res = sqlx::query(QUERY)
        .bind(match_id)
        .execute(ctx.db())
        .await?;
    Ok(res.rows_affected() > 0)
}
