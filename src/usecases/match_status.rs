//! Live status of a match derived from its kickoff time.
//!
//! The match clock assumes a fixed 10 minute half-time interval that does not
//! count towards the played minutes:
//!
//! | minutes since kickoff | status | phase       | minute   |
//! |-----------------------|--------|-------------|----------|
//! | `d < 0`               | soon   | not_started | -        |
//! | `0 <= d < 45`         | live   | first_half  | `d`      |
//! | `45 <= d < 55`        | break  | half_time   | 45       |
//! | `55 <= d < 100`       | live   | second_half | `d - 10` |
//! | `d >= 100`            | ended  | finished    | 90       |

use crate::common::error::{AppError, ServiceResult};
use crate::models::matches::{MatchPhase, MatchStatus, Score, ScoreSource, StatusInfo};
use chrono::{DateTime, Utc};

const MILLIS_PER_MINUTE: i128 = 60_000;

const HALF_LENGTH: i64 = 45;
const BREAK_LENGTH: i64 = 10;
const SECOND_HALF_START: i64 = HALF_LENGTH + BREAK_LENGTH;
const FULL_TIME: i64 = 2 * HALF_LENGTH + BREAK_LENGTH;

/// Parses a kickoff time. Only absolute timestamps are accepted, i.e. RFC 3339
/// with a `Z` or numeric offset.
pub fn parse_start_time(start_time: &str) -> ServiceResult<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(start_time.trim())
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|_| AppError::MatchesInvalidMatchTime)
}

/// Whole minutes elapsed between kickoff and `now` shifted by the caller's
/// timezone offset, floored towards negative infinity.
///
/// Computed in `i128` so that no offset can overflow.
pub fn elapsed_minutes(
    start: DateTime<Utc>,
    timezone_offset_minutes: i64,
    now: DateTime<Utc>,
) -> i64 {
    let effective_now =
        now.timestamp_millis() as i128 + timezone_offset_minutes as i128 * MILLIS_PER_MINUTE;
    let diff = effective_now - start.timestamp_millis() as i128;
    let minutes = diff.div_euclid(MILLIS_PER_MINUTE);
    minutes.clamp(i64::MIN as i128, i64::MAX as i128) as i64
}

pub fn from_elapsed(d: i64) -> StatusInfo {
    let (status, phase, minute) = match d {
        i64::MIN..0 => (MatchStatus::Soon, MatchPhase::NotStarted, None),
        0..HALF_LENGTH => (MatchStatus::Live, MatchPhase::FirstHalf, Some(d)),
        HALF_LENGTH..SECOND_HALF_START => {
            (MatchStatus::Break, MatchPhase::HalfTime, Some(HALF_LENGTH))
        }
        SECOND_HALF_START..FULL_TIME => (
            MatchStatus::Live,
            MatchPhase::SecondHalf,
            Some(d - BREAK_LENGTH),
        ),
        _ => (
            MatchStatus::Ended,
            MatchPhase::Finished,
            Some(FULL_TIME - BREAK_LENGTH),
        ),
    };
    StatusInfo {
        status,
        phase,
        minute,
    }
}

/// Resolves the live status of a match kicking off at `start_time`, as seen
/// at `now` by a caller `timezone_offset_minutes` away from it.
pub fn resolve(
    start_time: &str,
    timezone_offset_minutes: i64,
    now: DateTime<Utc>,
) -> ServiceResult<StatusInfo> {
    let start = parse_start_time(start_time)?;
    let d = elapsed_minutes(start, timezone_offset_minutes, now);
    Ok(from_elapsed(d))
}

/// Display-only score derived from the elapsed minute, for matches without
/// a recorded result.
pub fn placeholder_score(minute: Option<i64>) -> Score {
    Score {
        home: minute.map(|m| m.div_euclid(30)),
        away: minute.map(|m| m.div_euclid(40)),
        source: ScoreSource::Placeholder,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeDelta;

    const KICKOFF: &str = "2026-01-27T21:00:00Z";

    fn kickoff() -> DateTime<Utc> {
        parse_start_time(KICKOFF).unwrap()
    }

    fn at(minutes: i64) -> StatusInfo {
        let now = kickoff() + TimeDelta::minutes(minutes);
        resolve(KICKOFF, 0, now).unwrap()
    }

    #[track_caller]
    fn assert_row(d: i64, status: MatchStatus, phase: MatchPhase, minute: Option<i64>) {
        let info = at(d);
        assert_eq!(
            info,
            StatusInfo {
                status,
                phase,
                minute
            },
            "d = {d}"
        );
    }

    #[test]
    fn before_kickoff() {
        for d in [-10_000, -60, -1] {
            assert_row(d, MatchStatus::Soon, MatchPhase::NotStarted, None);
        }
    }

    #[test]
    fn first_half() {
        for d in [0, 1, 30, 44] {
            assert_row(d, MatchStatus::Live, MatchPhase::FirstHalf, Some(d));
        }
    }

    #[test]
    fn half_time() {
        for d in 45..55 {
            assert_row(d, MatchStatus::Break, MatchPhase::HalfTime, Some(45));
        }
    }

    #[test]
    fn second_half_discounts_the_break() {
        assert_row(55, MatchStatus::Live, MatchPhase::SecondHalf, Some(45));
        assert_row(70, MatchStatus::Live, MatchPhase::SecondHalf, Some(60));
        assert_row(99, MatchStatus::Live, MatchPhase::SecondHalf, Some(89));
    }

    #[test]
    fn full_time_is_capped_at_ninety() {
        for d in [100, 101, 240, 60 * 24 * 365] {
            assert_row(d, MatchStatus::Ended, MatchPhase::Finished, Some(90));
        }
    }

    #[test]
    fn partial_minutes_are_floored() {
        let now = kickoff() - TimeDelta::seconds(1);
        assert_eq!(resolve(KICKOFF, 0, now).unwrap().status, MatchStatus::Soon);

        let now = kickoff() + TimeDelta::seconds(44 * 60 + 59);
        assert_eq!(resolve(KICKOFF, 0, now).unwrap().minute, Some(44));
    }

    #[test]
    fn timezone_offset_shifts_now() {
        let now = kickoff() + TimeDelta::minutes(10);
        let info = resolve(KICKOFF, -10, now).unwrap();
        assert_eq!(info.status, MatchStatus::Live);
        assert_eq!(info.phase, MatchPhase::FirstHalf);
        assert_eq!(info.minute, Some(0));

        let info = resolve(KICKOFF, 120, kickoff()).unwrap();
        assert_eq!(info.status, MatchStatus::Ended);
    }

    #[test]
    fn start_time_offset_is_honoured() {
        // 23:00 at +02:00 is 21:00Z
        let now = kickoff() + TimeDelta::minutes(30);
        let info = resolve("2026-01-27T23:00:00+02:00", 0, now).unwrap();
        assert_eq!(info.minute, Some(30));
    }

    #[test]
    fn extreme_offsets_do_not_panic() {
        assert_eq!(
            resolve(KICKOFF, i64::MAX, kickoff()).unwrap().status,
            MatchStatus::Ended
        );
        assert_eq!(
            resolve(KICKOFF, i64::MIN, kickoff()).unwrap().status,
            MatchStatus::Soon
        );
    }

    #[test]
    fn invalid_start_time_is_rejected() {
        let malformed = [
            "",
            "tomorrow",
            "2026-01-27 21:00:00",
            "2026-01-27T21:00:00",
            "2026-13-40T99:00:00Z",
        ];
        for bad in malformed {
            assert_eq!(
                resolve(bad, 0, Utc::now()),
                Err(AppError::MatchesInvalidMatchTime),
                "{bad:?}"
            );
        }
    }

    #[test]
    fn resolving_is_repeatable() {
        let now = kickoff() + TimeDelta::minutes(63);
        assert_eq!(resolve(KICKOFF, 5, now), resolve(KICKOFF, 5, now));
    }

    #[test]
    fn placeholder_scores() {
        let score = placeholder_score(Some(85));
        assert_eq!((score.home, score.away), (Some(2), Some(2)));
        assert_eq!(score.source, ScoreSource::Placeholder);

        let score = placeholder_score(Some(30));
        assert_eq!((score.home, score.away), (Some(1), Some(0)));

        let score = placeholder_score(None);
        assert_eq!((score.home, score.away), (None, None));
    }
}
