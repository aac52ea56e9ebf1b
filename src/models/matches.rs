use crate::common::error::AppError;
use crate::entities::matches::Match as MatchEntity;
use crate::models::leagues::League;
use crate::models::teams::Team;
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use std::str::FromStr;

pub const DEFAULT_PAGE: u64 = 1;
pub const DEFAULT_PAGE_LIMIT: u64 = 5;
pub const MAX_PAGE_LIMIT: u64 = 100;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchStatus {
    Soon,
    Live,
    Break,
    Ended,
}

impl MatchStatus {
    pub const fn as_str(&self) -> &'static str {
        match self {
            MatchStatus::Soon => "soon",
            MatchStatus::Live => "live",
            MatchStatus::Break => "break",
            MatchStatus::Ended => "ended",
        }
    }
}

impl Display for MatchStatus {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MatchStatus {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "soon" => Ok(MatchStatus::Soon),
            "live" => Ok(MatchStatus::Live),
            "break" => Ok(MatchStatus::Break),
            "ended" => Ok(MatchStatus::Ended),
            _ => Err(AppError::MatchesInvalidStatus),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchPhase {
    NotStarted,
    FirstHalf,
    HalfTime,
    SecondHalf,
    Finished,
}

/// Live state of a match at a given instant. Status and phase only ever
/// change together.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StatusInfo {
    pub status: MatchStatus,
    pub phase: MatchPhase,
    pub minute: Option<i64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ScoreSource {
    /// Entered by an admin
    Recorded,
    /// Derived from the elapsed minute, not a real result
    Placeholder,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Score {
    pub home: Option<i64>,
    pub away: Option<i64>,
    pub source: ScoreSource,
}

#[derive(Debug, Clone)]
pub struct Match {
    pub id: i64,
    pub league_id: i64,
    pub home_team_id: i64,
    pub away_team_id: i64,
    pub league: Option<League>,
    pub home: Option<Team>,
    pub away: Option<Team>,
    pub match_time: String,
    /// Only set when both sides have been recorded
    pub recorded_score: Option<(i32, i32)>,
}

impl From<MatchEntity> for Match {
    fn from(entity: MatchEntity) -> Self {
        let league = entity
            .league_name
            .zip(entity.league_logo)
            .map(|(name, logo)| League {
                id: entity.league_id,
                name,
                logo,
            });
        let home = entity
            .home_team_name
            .zip(entity.home_team_logo)
            .map(|(name, logo)| Team {
                id: entity.home_team_id,
                name,
                logo,
            });
        let away = entity
            .away_team_name
            .zip(entity.away_team_logo)
            .map(|(name, logo)| Team {
                id: entity.away_team_id,
                name,
                logo,
            });
        Self {
            id: entity.id,
            league_id: entity.league_id,
            home_team_id: entity.home_team_id,
            away_team_id: entity.away_team_id,
            league,
            home,
            away,
            match_time: entity.match_time,
            recorded_score: entity.home_score.zip(entity.away_score),
        }
    }
}

/// Outward representation of a match. When `match_time` cannot be resolved
/// the live fields are null and `error` names the problem.
#[derive(Debug, Clone, Serialize)]
pub struct MatchView {
    pub id: i64,
    pub league: Option<League>,
    pub home: Option<Team>,
    pub away: Option<Team>,
    pub match_time: String,
    pub status: Option<MatchStatus>,
    pub phase: Option<MatchPhase>,
    pub minute: Option<i64>,
    pub score: Score,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<&'static str>,
}

#[derive(Debug, Serialize)]
pub struct MatchesPage {
    pub page: u64,
    pub limit: u64,
    pub total: u64,
    pub results: Vec<MatchView>,
}

fn parse_or<T: FromStr>(value: Option<&str>, default: T) -> T {
    value
        .and_then(|v| v.trim().parse().ok())
        .unwrap_or(default)
}

/// Query parameters are taken as raw strings, anything missing or
/// non-numeric falls back to the default instead of rejecting the request.
#[derive(Debug, Default, Deserialize)]
pub struct TimezoneArgs {
    pub tz: Option<String>,
}

impl TimezoneArgs {
    pub fn offset_minutes(&self) -> i64 {
        parse_or(self.tz.as_deref(), 0)
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct PageArgs {
    pub page: Option<String>,
    pub limit: Option<String>,
}

impl PageArgs {
    pub fn page(&self) -> u64 {
        parse_or(self.page.as_deref(), DEFAULT_PAGE).max(1)
    }

    pub fn limit(&self) -> u64 {
        parse_or(self.limit.as_deref(), DEFAULT_PAGE_LIMIT).clamp(1, MAX_PAGE_LIMIT)
    }

    pub fn offset(&self) -> u64 {
        (self.page() - 1).saturating_mul(self.limit())
    }
}

#[derive(Debug, Deserialize)]
pub struct MatchArgs {
    pub league_id: i64,
    #[serde(rename = "home_team")]
    pub home_team_id: i64,
    #[serde(rename = "away_team")]
    pub away_team_id: i64,
    pub match_time: String,
}

/// Both sides must be given together. Two nulls clear the recorded score.
#[derive(Debug, Deserialize)]
pub struct ScoreArgs {
    pub home: Option<u16>,
    pub away: Option<u16>,
}

impl ScoreArgs {
    pub fn into_pair(self) -> Result<Option<(i32, i32)>, AppError> {
        match (self.home, self.away) {
            (Some(home), Some(away)) => Ok(Some((home.into(), away.into()))),
            (None, None) => Ok(None),
            _ => Err(AppError::DecodingRequestFailed),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct MutationResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
}

impl MutationResponse {
    pub fn created(id: i64) -> Self {
        Self {
            success: true,
            id: Some(id),
        }
    }

    pub fn done() -> Self {
        Self {
            success: true,
            id: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page_args(page: Option<&str>, limit: Option<&str>) -> PageArgs {
        PageArgs {
            page: page.map(String::from),
            limit: limit.map(String::from),
        }
    }

    #[test]
    fn timezone_defaults_to_zero() {
        assert_eq!(TimezoneArgs::default().offset_minutes(), 0);
        let garbage = TimezoneArgs {
            tz: Some("utc+2".into()),
        };
        assert_eq!(garbage.offset_minutes(), 0);
    }

    #[test]
    fn timezone_accepts_signed_minutes() {
        let args = TimezoneArgs {
            tz: Some("-120".into()),
        };
        assert_eq!(args.offset_minutes(), -120);
    }

    #[test]
    fn pagination_defaults() {
        let args = page_args(None, None);
        assert_eq!(args.page(), 1);
        assert_eq!(args.limit(), 5);
        assert_eq!(args.offset(), 0);
    }

    #[test]
    fn pagination_clamps_out_of_range_values() {
        let args = page_args(Some("0"), Some("5000"));
        assert_eq!(args.page(), 1);
        assert_eq!(args.limit(), MAX_PAGE_LIMIT);

        let args = page_args(Some("-2"), Some("abc"));
        assert_eq!(args.page(), 1);
        assert_eq!(args.limit(), DEFAULT_PAGE_LIMIT);
    }

    #[test]
    fn pagination_offset() {
        let args = page_args(Some("3"), Some("10"));
        assert_eq!(args.offset(), 20);
    }

    #[test]
    fn status_parses_only_known_labels() {
        assert_eq!("break".parse::<MatchStatus>(), Ok(MatchStatus::Break));
        assert_eq!(
            "halftime".parse::<MatchStatus>(),
            Err(AppError::MatchesInvalidStatus)
        );
    }

    #[test]
    fn score_sides_must_be_given_together() {
        let both = ScoreArgs {
            home: Some(2),
            away: Some(1),
        };
        assert_eq!(both.into_pair(), Ok(Some((2, 1))));
        let cleared = ScoreArgs {
            home: None,
            away: None,
        };
        assert_eq!(cleared.into_pair(), Ok(None));
        let half = ScoreArgs {
            home: Some(1),
            away: None,
        };
        assert_eq!(half.into_pair(), Err(AppError::DecodingRequestFailed));
    }

    #[test]
    fn dangling_references_become_none() {
        let entity = MatchEntity {
            id: 1,
            league_id: 9,
            home_team_id: 1,
            away_team_id: 2,
            match_time: "2026-01-27T21:00:00Z".into(),
            home_score: Some(1),
            away_score: None,
            league_name: None,
            league_logo: None,
            home_team_name: Some("Al Ahly".into()),
            home_team_logo: Some("https://example.com/ahly.png".into()),
            away_team_name: Some("Zamalek".into()),
            away_team_logo: Some("https://example.com/zamalek.png".into()),
        };
        let m = Match::from(entity);
        assert!(m.league.is_none());
        assert_eq!(m.home.as_ref().map(|t| t.name.as_str()), Some("Al Ahly"));
        assert_eq!(m.recorded_score, None);
    }
}
