use crate::common::context::Context;
use crate::entities::leagues::League;

const TABLE_NAME: &str = "leagues";
const READ_FIELDS: &str = "id, name, logo";
const CREATE_QUERY: &str =
    const_str::concat!("INSERT INTO ", TABLE_NAME, " (name, logo) VALUES (?, ?)");

pub async fn fetch_all<C: Context>(ctx: &C) -> sqlx::Result<Vec<League>> {
    const QUERY: &str = const_str::concat!(
        "SELECT ",
        READ_FIELDS,
        " FROM ",
        TABLE_NAME,
        " ORDER BY id",
    );
    sqlx::query_as(QUERY).fetch_all(ctx.db()).await
}

pub async fn fetch_one<C: Context>(ctx: &C, league_id: i64) -> sqlx::Result<League> {
    const QUERY: &str = const_str::concat!(
        "SELECT ",
        READ_FIELDS,
        " FROM ",
        TABLE_NAME,
        " WHERE id = ?",
    );
    sqlx::query_as(QUERY)
        .bind(league_id)
        .fetch_one(ctx.db())
        .await
}

pub async fn create<C: Context>(ctx: &C, name: &str, logo: &str) -> sqlx::Result<League> {
    let res = sqlx::query(CREATE_QUERY)
        .bind(name)
        .bind(logo)
        .execute(ctx.db())
        .await?;
    Ok(League {
        id: res.last_insert_id() as _,
        name: name.to_string(),
        logo: logo.to_string(),
    })
}

/// Returns whether a row was deleted
pub async fn delete<C: Context>(ctx: &C, league_id: i64) -> sqlx::Result<bool> {
    const QUERY: &str = const_str::concat!("DELETE FROM ", TABLE_NAME, " WHERE id = ?");
    let res = sqlx::query(QUERY)
        .bind(league_id)
        .execute(ctx.db())
        .await?;
    Ok(res.rows_affected() > 0)
}

#[cfg(test)]
mod tests {
    use super::CREATE_QUERY;

    #[test]
    fn create_query_is_single_line() {
        assert_eq!(CREATE_QUERY, "INSERT INTO leagues (name, logo) VALUES (?, ?)");
    }
}
