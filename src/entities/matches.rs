use sqlx::FromRow;

/// A match row joined with its league and both teams.
/// Joined columns are `None` when the referenced row is missing.
#[derive(Debug, FromRow)]
pub struct Match {
    pub id: i64,
    pub league_id: i64,
    pub home_team_id: i64,
    pub away_team_id: i64,
    /// Stored as text, not every legacy row holds a valid timestamp
    pub match_time: String,
    pub home_score: Option<i32>,
    pub away_score: Option<i32>,

    pub league_name: Option<String>,
    pub league_logo: Option<String>,
    pub home_team_name: Option<String>,
    pub home_team_logo: Option<String>,
    pub away_team_name: Option<String>,
    pub away_team_logo: Option<String>,
}
