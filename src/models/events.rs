use serde::{Deserialize, Serialize};

/// Published after every successful admin mutation and pushed to
/// websocket subscribers as-is.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ChangeEvent {
    MatchCreated { match_id: i64 },
    MatchUpdated { match_id: i64 },
    MatchDeleted { match_id: i64 },
    TeamCreated { team_id: i64 },
    TeamDeleted { team_id: i64 },
    LeagueCreated { league_id: i64 },
    LeagueDeleted { league_id: i64 },
}

#[cfg(test)]
mod tests {
    use super::ChangeEvent;
    use serde_json::json;

    #[test]
    fn events_are_tagged_by_type() {
        let value = serde_json::to_value(ChangeEvent::MatchUpdated { match_id: 7 }).unwrap();
        assert_eq!(value, json!({"type": "match_updated", "match_id": 7}));
    }

    #[test]
    fn events_decode_from_published_payload() {
        let event: ChangeEvent =
            serde_json::from_str(r#"{"type":"league_deleted","league_id":3}"#).unwrap();
        assert_eq!(event, ChangeEvent::LeagueDeleted { league_id: 3 });
    }
}
