use crate::models::events::ChangeEvent;
use redis::Msg;
use tokio::sync::broadcast::Sender;
use tracing::{debug, warn};

pub fn decode(payload: &str) -> serde_json::Result<ChangeEvent> {
    serde_json::from_str(payload)
}

pub fn handle(events: &Sender<ChangeEvent>, msg: &Msg) {
    let payload: String = match msg.get_payload() {
        Ok(payload) => payload,
        Err(e) => {
            warn!("Change event payload is not a string: {e:?}");
            return;
        }
    };
    let event = match decode(&payload) {
        Ok(event) => event,
        Err(e) => {
            warn!(payload = %payload, "Failed to decode change event: {e:?}");
            return;
        }
    };
    // An error only means nobody is listening right now
    match events.send(event) {
        Ok(subscribers) => debug!(subscribers, "Relayed change event"),
        Err(_) => debug!("Dropped change event, no subscribers"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::sync::broadcast;

    #[test]
    fn decodes_published_events() {
        let event = decode(r#"{"type":"match_created","match_id":12}"#).unwrap();
        assert_eq!(event, ChangeEvent::MatchCreated { match_id: 12 });
    }

    #[test]
    fn rejects_unknown_event_types() {
        assert!(decode(r#"{"type":"match_exploded","match_id":12}"#).is_err());
        assert!(decode("not json").is_err());
    }

    #[test]
    fn published_events_reach_subscribers() {
        let (tx, mut rx) = broadcast::channel(4);
        let event = ChangeEvent::TeamDeleted { team_id: 4 };
        let payload = serde_json::to_string(&event).unwrap();
        tx.send(decode(&payload).unwrap()).unwrap();
        assert_eq!(rx.try_recv().unwrap(), event);
    }
}
