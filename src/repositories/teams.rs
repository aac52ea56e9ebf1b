use crate::common::context::Context;
use crate::entities::teams::Team;

const TABLE_NAME: &str = "teams";
const READ_FIELDS: &str = "id, name, logo";
const CREATE_QUERY: &str =
    const_str::concat!("INSERT INTO ", TABLE_NAME, " (name, logo) VALUES (?, ?)");

/// `%` and `_` in user input are matched literally
fn contains_pattern(query: &str) -> String {
    let mut pattern = String::with_capacity(query.len() + 2);
    pattern.push('%');
    for c in query.to_lowercase().chars() {
        if matches!(c, '%' | '_' | '\\') {
            pattern.push('\\');
        }
        pattern.push(c);
    }
    pattern.push('%');
    pattern
}

pub async fn fetch_all<C: Context>(ctx: &C) -> sqlx::Result<Vec<Team>> {
    const QUERY: &str = const_str::concat!(
        "SELECT ",
        READ_FIELDS,
        " FROM ",
        TABLE_NAME,
        " ORDER BY id",
    );
    sqlx::query_as(QUERY).fetch_all(ctx.db()).await
}

pub async fn search<C: Context>(ctx: &C, query: &str) -> sqlx::Result<Vec<Team>> {
    const QUERY: &str = const_str::concat!(
        "SELECT ",
        READ_FIELDS,
        " FROM ",
        TABLE_NAME,
        " WHERE LOWER(name) LIKE ? ORDER BY id",
    );
    sqlx::query_as(QUERY)
        .bind(contains_pattern(query))
        .fetch_all(ctx.db())
        .await
}

pub async fn fetch_one<C: Context>(ctx: &C, team_id: i64) -> sqlx::Result<Team> {
    const QUERY: &str = const_str::concat!(
        "SELECT ",
        READ_FIELDS,
        " FROM ",
        TABLE_NAME,
        " WHERE id = ?",
    );
    sqlx::query_as(QUERY)
        .bind(team_id)
        .fetch_one(ctx.db())
        .await
}

pub async fn create<C: Context>(ctx: &C, name: &str, logo: &str) -> sqlx::Result<Team> {
    let res = sqlx::query(CREATE_QUERY)
        .bind(name)
        .bind(logo)
        .execute(ctx.db())
        .await?;
    Ok(Team {
        id: res.last_insert_id() as _,
        name: name.to_string(),
        logo: logo.to_string(),
    })
}

/// Returns whether a row was deleted
pub async fn delete<C: Context>(ctx: &C, team_id: i64) -> sqlx::Result<bool> {
    const QUERY: &str = const_str::concat!("DELETE FROM ", TABLE_NAME, " WHERE id = ?");
    let res = sqlx::query(QUERY)
        .bind(team_id)
        .execute(ctx.db())
        .await?;
    Ok(res.rows_affected() > 0)
}

#[cfg(test)]
mod tests {
    use super::{CREATE_QUERY, contains_pattern};

    #[test]
    fn search_pattern_is_lowercased_substring() {
        assert_eq!(contains_pattern("Real"), "%real%");
        assert_eq!(contains_pattern(""), "%%");
    }

    #[test]
    fn search_pattern_escapes_wildcards() {
        assert_eq!(contains_pattern("100%_"), "%100\\%\\_%");
    }

    #[test]
    fn create_query_is_single_line() {
        assert_eq!(CREATE_QUERY, "INSERT INTO teams (name, logo) VALUES (?, ?)");
    }
}
